use super::{Device, DeviceResult};
use crate::ctx::{RequestCtx, ResponseCtx};

pub struct DevicePipeline;

impl DevicePipeline {
    pub fn run_on_request(
        devices: &[impl AsRef<dyn Device>],
        ctx: &mut RequestCtx,
    ) -> DeviceResult {
        for dev in devices {
            match dev.as_ref().on_request(ctx) {
                DeviceResult::Continue => continue,
                r @ DeviceResult::Respond(_) => return r,
                DeviceResult::Error(err) => {
                    dev.as_ref().on_error(&err);
                    return DeviceResult::Error(err);
                }
            }
        }
        DeviceResult::Continue
    }

    pub fn run_on_response(
        devices: &[impl AsRef<dyn Device>],
        req: &RequestCtx,
        ctx: &mut ResponseCtx,
    ) -> DeviceResult {
        for dev in devices {
            match dev.as_ref().on_response(req, ctx) {
                DeviceResult::Continue => continue,
                r @ DeviceResult::Respond(_) => return r,
                DeviceResult::Error(err) => {
                    dev.as_ref().on_error(&err);
                    return DeviceResult::Error(err);
                }
            }
        }
        DeviceResult::Continue
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::device::core::errors::DeviceError;
    use http::{HeaderMap, Method, StatusCode, Uri};
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[derive(Default)]
    struct Counter {
        requests: AtomicUsize,
        errors: AtomicUsize,
    }

    struct Counting {
        counter: Arc<Counter>,
        result: fn() -> DeviceResult,
    }

    impl Device for Counting {
        fn on_request(&self, _ctx: &mut RequestCtx) -> DeviceResult {
            self.counter.requests.fetch_add(1, Ordering::SeqCst);
            (self.result)()
        }

        fn on_error(&self, _err: &DeviceError) {
            self.counter.errors.fetch_add(1, Ordering::SeqCst);
        }
    }

    fn counting(counter: &Arc<Counter>, result: fn() -> DeviceResult) -> Arc<dyn Device> {
        Arc::new(Counting {
            counter: counter.clone(),
            result,
        })
    }

    fn ctx() -> RequestCtx {
        RequestCtx::new(Method::GET, Uri::from_static("/x"), HeaderMap::new()).unwrap()
    }

    #[test]
    fn continue_runs_every_device() {
        let counter = Arc::new(Counter::default());
        let devices = vec![
            counting(&counter, || DeviceResult::Continue),
            counting(&counter, || DeviceResult::Continue),
        ];

        let result = DevicePipeline::run_on_request(&devices, &mut ctx());

        assert!(matches!(result, DeviceResult::Continue));
        assert_eq!(counter.requests.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn respond_short_circuits() {
        let counter = Arc::new(Counter::default());
        let devices = vec![
            counting(&counter, || {
                DeviceResult::Respond(ResponseCtx::new(
                    None,
                    StatusCode::FORBIDDEN,
                    HeaderMap::new(),
                    Vec::new(),
                ))
            }),
            counting(&counter, || DeviceResult::Continue),
        ];

        let result = DevicePipeline::run_on_request(&devices, &mut ctx());

        assert!(matches!(result, DeviceResult::Respond(r) if r.status == StatusCode::FORBIDDEN));
        assert_eq!(counter.requests.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn error_invokes_on_error_and_stops() {
        let counter = Arc::new(Counter::default());
        let devices = vec![
            counting(&counter, || {
                DeviceResult::Error(DeviceError {
                    message: "boom".to_string(),
                    fatal: true,
                })
            }),
            counting(&counter, || DeviceResult::Continue),
        ];

        let result = DevicePipeline::run_on_request(&devices, &mut ctx());

        assert!(matches!(result, DeviceResult::Error(ref e) if e.to_string() == "(fatal) boom"));
        assert_eq!(counter.requests.load(Ordering::SeqCst), 1);
        assert_eq!(counter.errors.load(Ordering::SeqCst), 1);
    }
}
