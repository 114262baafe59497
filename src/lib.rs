//! Numeric API service library.
//!
//! Answers parity, primality and factorial questions for an integer taken
//! from the URL path, as JSON over HTTP.

pub mod compute;
pub mod config;
pub mod http;
pub mod lifecycle;
pub mod net;
pub mod observability;
pub mod resilience;
pub mod routing;

pub use compute::{Compute, ComputeError, NativeCompute};
pub use config::ServiceConfig;
pub use http::HttpServer;
pub use lifecycle::Shutdown;
