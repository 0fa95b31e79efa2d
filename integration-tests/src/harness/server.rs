use casefold_core::conf::types::CasefoldConfig;
use casefold_core::ctx::{RequestCtx, ResponseCtx};
use casefold_core::device::core::DeviceResult;
use casefold_core::device::core::pipeline::DevicePipeline;
use casefold_core::device::core::registry::DeviceRegistry;
use http::{HeaderMap, HeaderName, HeaderValue, Method, StatusCode, Uri};

pub const X_FINAL_PATH: HeaderName = HeaderName::from_static("x-final-path");

/// One request/response round trip through the device pipeline.
#[derive(Debug)]
pub struct Exchange {
    pub request: RequestCtx,
    pub response: ResponseCtx,
}

impl Exchange {
    /// Path the downstream handler routed on.
    pub fn final_path(&self) -> &str {
        std::str::from_utf8(&self.response.body).unwrap_or_default()
    }

    pub fn response_header(&self, name: &str) -> Option<&str> {
        self.response.headers.get(name).and_then(|v| v.to_str().ok())
    }

    pub fn request_header(&self, name: &str) -> Option<&str> {
        self.request.headers().get(name).and_then(|v| v.to_str().ok())
    }
}

/// In-process stand-in for a server: runs the devices, then a handler that
/// echoes the routed path back in the body (and in `X-Final-Path` when it is
/// header-safe).
pub struct TestServer {
    registry: DeviceRegistry,
}

impl TestServer {
    pub fn new(cfg: &CasefoldConfig) -> Self {
        Self {
            registry: DeviceRegistry::from_config(cfg),
        }
    }

    pub fn get(&self, target: &str) -> Exchange {
        let uri: Uri = target.parse().expect("invalid test target");
        let mut request =
            RequestCtx::new(Method::GET, uri, HeaderMap::new()).expect("request rejected");

        let mut response = match DevicePipeline::run_on_request(self.registry.all(), &mut request)
        {
            DeviceResult::Continue => handle(&request),
            DeviceResult::Respond(resp) => resp,
            DeviceResult::Error(err) => panic!("device error: {err}"),
        };

        let result = DevicePipeline::run_on_response(self.registry.all(), &request, &mut response);
        assert!(matches!(result, DeviceResult::Continue));

        Exchange { request, response }
    }
}

fn handle(request: &RequestCtx) -> ResponseCtx {
    let mut headers = HeaderMap::new();
    if let Ok(value) = HeaderValue::from_str(request.path()) {
        headers.insert(X_FINAL_PATH, value);
    }
    ResponseCtx::new(
        request.request_id(),
        StatusCode::OK,
        headers,
        request.path().as_bytes().to_vec(),
    )
}
