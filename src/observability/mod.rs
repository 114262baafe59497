//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! All subsystems produce:
//!     → tracing events with structured fields
//!     → logging.rs (subscriber, filter, formatting)
//! ```
//!
//! # Design Decisions
//! - Dispatch log lines carry the request ID as a field

pub mod logging;
