use std::fmt::{Display, Formatter};

/// An error raised by a device while handling a request or response.
#[derive(Debug)]
pub struct DeviceError {
    /// A descriptive message explaining the error that occurred
    pub message: String,
    /// Whether the error is considered fatal and should be reported to the client
    pub fatal: bool,
}

impl Display for DeviceError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let fatal = if self.fatal { "(fatal) " } else { "" };
        write!(f, "{}{}", fatal, self.message)
    }
}

impl std::error::Error for DeviceError {}
