//! HTTP protocol handling subsystem.
//!
//! # Data Flow
//! ```text
//! TCP connection
//!     → server.rs (Axum setup, middleware, dispatch handler)
//!     → request.rs (request ID)
//!     → [routing layer picks RouteKind + token]
//!     → argument.rs (token → NumericArgument)
//!     → [resilience layer runs the computation]
//!     → response.rs (ApiResponse → status + body)
//!     → Send to client
//! ```

pub mod argument;
pub mod request;
pub mod response;
pub mod server;

pub use argument::{validate, InvalidReason, NumericArgument};
pub use request::X_REQUEST_ID;
pub use response::{ApiResponse, Computed};
pub use server::{AppState, HttpServer};
