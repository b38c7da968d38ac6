pub mod errors;
pub mod service_port;
pub mod telemetry;

pub use errors::*;
