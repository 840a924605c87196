//! Error types raised by the combinators.
//!
//! Every error in this module indicates a programming error at the call
//! site, raised synchronously at the violating call. Nothing is retried or
//! recovered internally. Errors raised by a wrapped user function are never
//! caught or transformed by any combinator; they propagate unchanged.

use std::fmt;

// =============================================================================
// InvalidArityError
// =============================================================================

/// An arity of zero was requested.
///
/// A curried function must expect at least one argument, otherwise it could
/// never accumulate anything before invoking the wrapped function.
///
/// # Examples
///
/// ```
/// use pointfree::arity::Arity;
/// use pointfree::error::InvalidArityError;
///
/// assert_eq!(Arity::new(0), Err(InvalidArityError));
/// assert!(Arity::new(3).is_ok());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvalidArityError;

impl fmt::Display for InvalidArityError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid arity: expected argument count must be at least 1")
    }
}

impl std::error::Error for InvalidArityError {}

// =============================================================================
// MultipleKeysError
// =============================================================================

/// A named-curry step supplied a bag that did not hold exactly one key.
///
/// [`CurriedProps::apply`](crate::props::CurriedProps::apply) accepts
/// exactly one key per step. Despite the name, this error covers both
/// directions of the violation: an over-supplied bag and the empty bag
/// (`supplied == 0`). The `supplied` field records how many keys the
/// rejected bag actually carried.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MultipleKeysError {
    /// Number of keys in the rejected argument bag.
    pub supplied: usize,
}

impl fmt::Display for MultipleKeysError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "named curry step expects a bag with exactly one key, got {}",
            self.supplied
        )
    }
}

impl std::error::Error for MultipleKeysError {}

// =============================================================================
// MissingKeyError
// =============================================================================

/// A parameter-order descriptor referenced a key absent from the bag.
///
/// Raised by the bridge built with
/// [`spread_arg_props`](crate::props::spread_arg_props) when the supplied
/// bag has no value for one of the named parameters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MissingKeyError {
    /// The parameter name that had no value in the bag.
    pub key: String,
}

impl fmt::Display for MissingKeyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "parameter order references key `{}` absent from the argument bag",
            self.key
        )
    }
}

impl std::error::Error for MissingKeyError {}
