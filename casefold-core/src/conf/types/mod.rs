mod origin;
mod runtime;
mod spec;

pub use origin::*;
pub use runtime::*;
pub use spec::*;
