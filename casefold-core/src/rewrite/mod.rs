mod outcome;
mod rewriter;
mod strategy;

pub use outcome::*;
pub use rewriter::*;
pub use strategy::*;
