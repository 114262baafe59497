//! Resilience subsystem.
//!
//! # Data Flow
//! ```text
//! Validated request:
//!     → timeouts.rs (take a slot, spawn on blocking pool, enforce deadline)
//!     → provider result, or ComputeError::{TimedOut, Panicked, Unavailable}
//! ```
//!
//! # Design Decisions
//! - Timeouts are non-negotiable; every computation has a deadline
//! - No retries: computations are deterministic, so a retry cannot help

pub mod timeouts;

pub use timeouts::ComputeRunner;
