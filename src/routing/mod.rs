//! Routing subsystem.
//!
//! # Data Flow
//! ```text
//! Incoming request path
//!     → router.rs (route lookup, in table order)
//!     → matcher.rs (exact or prefix condition)
//!     → Return: matched RouteKind + raw token, or NoMatch
//!
//! Route table (at startup):
//!     "/"                → Root        (exact)
//!     "/api/isprime/"    → Primality   (prefix)
//!     "/api/iseven/"     → Parity      (prefix)
//!     "/api/factorial/"  → Factorial   (prefix)
//! ```
//!
//! # Design Decisions
//! - Routes built at startup, immutable at runtime
//! - No regex in hot path (prefix matching only)
//! - Deterministic: same input always matches same route
//! - First match wins (table order)

pub mod matcher;
pub mod router;

pub use router::{Route, RouteKind, RouteMatch, Router};
