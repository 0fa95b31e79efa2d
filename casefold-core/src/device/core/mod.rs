pub mod errors;
pub mod pipeline;
pub mod registry;
pub mod result;

use self::errors::DeviceError;
pub use self::result::DeviceResult;
use crate::ctx::{RequestCtx, ResponseCtx};

/// A processing unit in the request pipeline.
///
/// Devices can inspect and modify requests before routing and responses before
/// they are written to the client. Each device must be both Send and Sync; a
/// single instance serves all concurrent requests.
///
/// All methods provide default implementations that simply continue the pipeline,
/// allowing implementations to override only the methods they care about.
pub trait Device: Send + Sync {
    /// Called when a request is first received, before routing.
    fn on_request(&self, _ctx: &mut RequestCtx) -> DeviceResult {
        DeviceResult::Continue
    }

    /// Called just before sending the response back to the client.
    ///
    /// The request context is the one the response answers.
    fn on_response(&self, _req: &RequestCtx, _ctx: &mut ResponseCtx) -> DeviceResult {
        DeviceResult::Continue
    }

    /// Called when this device returned [`DeviceResult::Error`].
    fn on_error(&self, _err: &DeviceError) {}
}
