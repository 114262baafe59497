//! Numeric computation providers.
//!
//! # Data Flow
//! ```text
//! Validated argument (i64)
//!     → Computation (which operation the route asked for)
//!     → Compute provider (native.rs by default, injectable)
//!     → ComputedValue or ComputeError
//! ```
//!
//! # Design Decisions
//! - Providers are pure: deterministic, no shared mutable state
//! - Every operation is fallible so a provider can refuse input it
//!   has no answer for instead of inventing one
//! - The dispatch layer decides how a failure is rendered, not the provider

pub mod native;

use thiserror::Error;

pub use native::NativeCompute;

/// The three operations the service exposes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Computation {
    Parity,
    Primality,
    Factorial,
}

impl Computation {
    /// Name used in logs and error messages.
    pub fn name(self) -> &'static str {
        match self {
            Computation::Parity => "is_even",
            Computation::Primality => "is_prime",
            Computation::Factorial => "factorial",
        }
    }
}

impl std::fmt::Display for Computation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// A successful computation result, tagged with what produced it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ComputedValue {
    IsEven(bool),
    IsPrime(bool),
    Factorial(u64),
}

/// Errors a computation provider can report.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ComputeError {
    /// The operation has no defined result for negative input.
    #[error("{operation} is not defined for negative input {n}")]
    NegativeInput { operation: Computation, n: i64 },

    /// The result does not fit in the provider's integer width.
    #[error("{operation} of {n} overflows a 64-bit unsigned integer")]
    Overflow { operation: Computation, n: i64 },

    /// The provider did not answer within the configured deadline.
    #[error("{operation} timed out after {after_ms} ms")]
    TimedOut { operation: Computation, after_ms: u64 },

    /// No computation slot could be obtained.
    #[error("{operation} is unavailable")]
    Unavailable { operation: Computation },

    /// The provider panicked while computing.
    #[error("{operation} failed unexpectedly")]
    Panicked { operation: Computation },
}

/// A pluggable provider of parity, primality and factorial.
pub trait Compute: Send + Sync {
    /// Total over all integers.
    fn is_even(&self, n: i64) -> Result<bool, ComputeError>;

    fn is_prime(&self, n: i64) -> Result<bool, ComputeError>;

    fn factorial(&self, n: i64) -> Result<u64, ComputeError>;

    /// Run `computation` on `n`.
    fn evaluate(&self, computation: Computation, n: i64) -> Result<ComputedValue, ComputeError> {
        match computation {
            Computation::Parity => self.is_even(n).map(ComputedValue::IsEven),
            Computation::Primality => self.is_prime(n).map(ComputedValue::IsPrime),
            Computation::Factorial => self.factorial(n).map(ComputedValue::Factorial),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_evaluate_tags_result() {
        let compute = NativeCompute;
        assert_eq!(
            compute.evaluate(Computation::Parity, 4),
            Ok(ComputedValue::IsEven(true))
        );
        assert_eq!(
            compute.evaluate(Computation::Primality, 4),
            Ok(ComputedValue::IsPrime(false))
        );
        assert_eq!(
            compute.evaluate(Computation::Factorial, 4),
            Ok(ComputedValue::Factorial(24))
        );
    }

    #[test]
    fn test_error_messages() {
        let err = ComputeError::Overflow {
            operation: Computation::Factorial,
            n: 21,
        };
        assert_eq!(err.to_string(), "factorial of 21 overflows a 64-bit unsigned integer");

        let err = ComputeError::TimedOut {
            operation: Computation::Primality,
            after_ms: 50,
        };
        assert_eq!(err.to_string(), "is_prime timed out after 50 ms");
    }
}
