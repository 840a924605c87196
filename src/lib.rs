//! # pointfree
//!
//! Function combinators for Rust: a small set of composable primitives for
//! transforming the arity, argument order, and argument shape of
//! functions, and for chaining functions into pipelines.
//!
//! ## Overview
//!
//! Everything here operates on function values as first-class data:
//! functions are never mutated, only wrapped. The crate covers five
//! families of combinator:
//!
//! - **Currying**: strict (one argument per call) and loose (one or more
//!   per call) arity-tracking curry chains — [`curry`](crate::curry)
//! - **Partial application**: pre-bind a positional prefix or suffix —
//!   [`partial`](crate::partial)
//! - **Named arguments**: curry and partially apply over key-value
//!   argument bags where call order is irrelevant — [`props`](crate::props)
//! - **Argument adapters**: `identity`, `constant`, `flip`, `unary`,
//!   `reverse_args`, `spread_args`, `gather_args` — [`adapt`](crate::adapt)
//! - **Composition**: `compose!`/`pipe!` macros plus runtime pipelines,
//!   including a lazy variant folded once at construction —
//!   [`pipeline`](crate::pipeline)
//!
//! All combinators are synchronous, purely functional value-to-value
//! transformations. Accumulated arguments live in immutable snapshots;
//! every step of a curry or partial chain produces a fresh snapshot, so
//! any intermediate function value can be reused and invoked again with a
//! different completion.
//!
//! ## Example
//!
//! ```rust
//! use pointfree::arity::Arity;
//! use pointfree::curry::curry;
//! use pointfree::pipe;
//!
//! // A strict curry chain over an argument sequence.
//! let sum = |args: &[i32]| args.iter().sum::<i32>();
//! let six = curry(sum, Arity::new(3).unwrap())
//!     .apply(1).unwrap_pending()
//!     .apply(2).unwrap_pending()
//!     .apply(3).unwrap_complete();
//! assert_eq!(six, 6);
//!
//! // A left-to-right pipeline over heterogeneous stages.
//! let pipeline = pipe!(|x: i32| x * 2, |x: i32| x.to_string());
//! assert_eq!(pipeline(21), "42");
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Prelude module for convenient imports.
///
/// Re-exports the whole public surface.
///
/// # Usage
///
/// ```rust
/// use pointfree::prelude::*;
/// ```
pub mod prelude {
    pub use crate::adapt::*;
    pub use crate::{compose, pipe};
    pub use crate::arity::Arity;
    pub use crate::curry::{Curried, CurriedLoose, Step, curry, curry_loose, uncurry};
    pub use crate::error::{InvalidArityError, MissingKeyError, MultipleKeysError};
    pub use crate::partial::{partial, partial_right};
    pub use crate::pipeline::{Stage, compose_all, compose_lazy, pipe_all, stage};
    pub use crate::props::{ArgBag, CurriedProps, curry_props, partial_props, spread_arg_props};
}

pub mod adapt;
pub mod arity;
pub mod curry;
pub mod error;
pub mod partial;
pub mod pipeline;
pub mod props;
