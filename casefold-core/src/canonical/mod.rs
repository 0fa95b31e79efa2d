mod canonicalizer;
mod clean;
mod error;
mod reader;

pub use canonicalizer::*;
pub use clean::*;
pub use error::*;
pub use reader::*;
