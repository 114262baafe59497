//! Numeric argument extraction.
//!
//! Parsing is permissive: optional leading whitespace, an optional sign,
//! then as many decimal digits as are present. Anything after the digits is
//! ignored, so `"12abc"` and `"12/x"` both read as `12`. Validation is purely
//! syntactic; whether a value makes sense for an operation is decided by the
//! computation provider.
//!
//! The only magnitude limit applied here is the `i64` width itself: leading
//! digits that do not fit are `OutOfRange`.

/// Why a token could not be read as a number.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvalidReason {
    /// The token was empty (or only whitespace).
    Empty,
    /// The token does not start with an integer.
    NotANumber,
    /// The leading digits do not fit in an `i64`.
    OutOfRange,
}

/// Outcome of validating a path token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NumericArgument {
    Valid(i64),
    Invalid(InvalidReason),
}

impl NumericArgument {
    pub fn is_valid(&self) -> bool {
        matches!(self, NumericArgument::Valid(_))
    }
}

/// Read the leading integer of `token`.
pub fn validate(token: &str) -> NumericArgument {
    let rest = token.trim_start_matches(|c: char| c.is_ascii_whitespace());
    if rest.is_empty() {
        return NumericArgument::Invalid(InvalidReason::Empty);
    }

    let (negative, unsigned) = match rest.as_bytes()[0] {
        b'-' => (true, &rest[1..]),
        b'+' => (false, &rest[1..]),
        _ => (false, rest),
    };

    let digits_len = unsigned
        .bytes()
        .take_while(u8::is_ascii_digit)
        .count();
    if digits_len == 0 {
        return NumericArgument::Invalid(InvalidReason::NotANumber);
    }

    // Accumulate toward the sign so i64::MIN is representable.
    let mut value: i64 = 0;
    for digit in unsigned.as_bytes()[..digits_len].iter().map(|b| i64::from(b - b'0')) {
        let next = value.checked_mul(10).and_then(|v| {
            if negative {
                v.checked_sub(digit)
            } else {
                v.checked_add(digit)
            }
        });
        match next {
            Some(v) => value = v,
            None => return NumericArgument::Invalid(InvalidReason::OutOfRange),
        }
    }

    NumericArgument::Valid(value)
}
