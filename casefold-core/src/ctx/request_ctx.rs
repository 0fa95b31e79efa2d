use crate::ctx::{RequestId, RequestRejectError, encode_path};
use http::{Extensions, HeaderMap, HeaderName, HeaderValue, Method, Uri};
use percent_encoding::percent_decode_str;

/// Request context handed to every device.
///
/// Devices route on [`RequestCtx::path`], the percent-decoded path. The query
/// string is carried through untouched.
#[derive(Debug)]
pub struct RequestCtx {
    /// Request-scoped typed extensions (not forwarded).
    pub extensions: Extensions,

    original_uri: Uri,
    method: Method,
    headers: HeaderMap,
    path: String,
}

impl RequestCtx {
    pub fn new(method: Method, uri: Uri, headers: HeaderMap) -> Result<Self, RequestRejectError> {
        let path = decode_path(uri.path())?;

        let mut extensions = Extensions::new();
        extensions.insert(RequestId::default());

        Ok(Self {
            extensions,
            original_uri: uri,
            method,
            headers,
            path,
        })
    }
}

fn decode_path(raw: &str) -> Result<String, RequestRejectError> {
    // Empty is allowed (authority-form targets); anything else must be absolute.
    if !raw.is_empty() && !raw.starts_with('/') {
        return Err(RequestRejectError::InvalidPath);
    }

    let decoded = percent_decode_str(raw)
        .decode_utf8()
        .map_err(|_| RequestRejectError::InvalidPathEncoding)?;

    if decoded.contains('\0') {
        return Err(RequestRejectError::InvalidPath);
    }

    Ok(decoded.into_owned())
}

/// Request Path API
impl RequestCtx {
    /// Decoded path used for routing.
    pub fn path(&self) -> &str {
        &self.path
    }

    pub(crate) fn set_path(&mut self, path: String) {
        debug_assert!(path.starts_with('/'));
        self.path = path;
    }

    /// Raw query string, exactly as received.
    pub fn query(&self) -> Option<&str> {
        self.original_uri.query()
    }

    /// Request target for the current path: re-encoded path plus the original query.
    pub fn request_uri(&self) -> String {
        let path = encode_path(&self.path);
        match self.query() {
            Some(q) => format!("{path}?{q}"),
            None => path,
        }
    }

    pub fn original_uri(&self) -> &Uri {
        &self.original_uri
    }
}

/// Request Header API
impl RequestCtx {
    pub fn headers(&self) -> &HeaderMap {
        &self.headers
    }

    pub(crate) fn insert_header(&mut self, name: HeaderName, value: HeaderValue) {
        self.headers.insert(name, value);
    }
}

/// Method API
impl RequestCtx {
    pub fn method(&self) -> &Method {
        &self.method
    }
}

/// Request ID API
impl RequestCtx {
    pub fn request_id(&self) -> Option<String> {
        self.extensions.get::<RequestId>().map(|id| id.0.clone())
    }
}
