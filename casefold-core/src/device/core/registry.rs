use crate::conf::types::CasefoldConfig;
use crate::device::builtin::casefold::CasefoldDevice;
use crate::device::core::Device;
use std::sync::Arc;

/// The ordered set of devices a server runs for each request.
///
/// Built once at startup and handed to the request path explicitly.
pub struct DeviceRegistry {
    devices: Vec<Arc<dyn Device>>,
}

impl Default for DeviceRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl DeviceRegistry {
    pub fn new() -> Self {
        Self {
            devices: Vec::new(),
        }
    }

    pub fn from_config(cfg: &CasefoldConfig) -> Self {
        let mut registry = Self::new();
        if cfg.enable {
            registry.register(Arc::new(CasefoldDevice::from_config(cfg)));
        }
        registry
    }

    pub fn register(&mut self, device: Arc<dyn Device>) {
        self.devices.push(device);
    }

    pub fn all(&self) -> &[Arc<dyn Device>] {
        &self.devices
    }
}
