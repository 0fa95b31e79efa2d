mod encoding;
mod error;
mod request_ctx;
mod request_id;
mod response_ctx;

pub use encoding::encode_path;
pub use error::RequestRejectError;
pub use request_ctx::RequestCtx;
pub use request_id::RequestId;
pub use response_ctx::ResponseCtx;
