mod fixture;
pub mod server;
pub mod tracing;

pub use self::fixture::FixtureTree;
pub use self::server::{Exchange, TestServer};
pub use self::tracing::{CapturedEvent, capture_events};
