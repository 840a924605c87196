//! The [`Arity`] type: how many positional arguments a function expects.
//!
//! Rust cannot inspect the parameter count of an arbitrary function value
//! at runtime, so arity is always supplied explicitly by the caller and
//! validated once, up front. Non-integer arities are unrepresentable by
//! construction (`usize`), and zero is rejected: a curried function that
//! expects no arguments could never accumulate anything.

use std::fmt;
use std::num::NonZeroUsize;

use crate::error::InvalidArityError;

/// A validated, non-zero positional argument count.
///
/// Construct with [`Arity::new`] or via `TryFrom<usize>`; both reject zero
/// with [`InvalidArityError`]. The value is immutable and `Copy`.
///
/// # Examples
///
/// ```
/// use pointfree::arity::Arity;
///
/// let ternary = Arity::new(3).unwrap();
/// assert_eq!(ternary.get(), 3);
///
/// assert!(Arity::new(0).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Arity(NonZeroUsize);

impl Arity {
    /// Validates `count` as an arity.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidArityError`] when `count` is zero.
    pub fn new(count: usize) -> Result<Self, InvalidArityError> {
        NonZeroUsize::new(count).map(Self).ok_or(InvalidArityError)
    }

    /// Returns the argument count as a plain `usize`.
    #[must_use]
    pub const fn get(self) -> usize {
        self.0.get()
    }
}

impl TryFrom<usize> for Arity {
    type Error = InvalidArityError;

    fn try_from(count: usize) -> Result<Self, Self::Error> {
        Self::new(count)
    }
}

impl fmt::Display for Arity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
