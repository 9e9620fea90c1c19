// * Operations: logging setup for binaries embedding the client

pub mod telemetry;

pub use telemetry::{init_tracing, init_tracing_pretty, init_tracing_with_level};
