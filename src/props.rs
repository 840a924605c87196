//! Named-argument currying and partial application.
//!
//! Where the positional engines operate on ordered sequences, this module
//! operates on [`ArgBag`]s: name-keyed collections in which call order is
//! irrelevant. A bag-based curry chain may receive its arguments in any
//! order and still invokes the wrapped function with the same merged bag.
//!
//! [`spread_arg_props`] bridges a bag-based call into a positional
//! function through an explicit parameter-order descriptor. The descriptor
//! is always supplied by the caller; this crate never attempts to infer
//! parameter names from a function value.

use std::collections::HashMap;
use std::rc::Rc;

use smallvec::SmallVec;

use crate::arity::Arity;
use crate::curry::Step;
use crate::error::{MissingKeyError, MultipleKeysError};

/// A name-keyed, order-irrelevant collection of arguments.
pub type ArgBag<T> = HashMap<String, T>;

type BagFn<T, R> = Rc<dyn Fn(&ArgBag<T>) -> R>;

// =============================================================================
// partial_props
// =============================================================================

/// Binds a fixed bag of named arguments.
///
/// The returned closure shallow-merges the bags and invokes `function`;
/// keys supplied later override the pre-bound ones on conflict.
///
/// # Examples
///
/// ```
/// use pointfree::props::{ArgBag, partial_props};
///
/// let describe = |bag: &ArgBag<i32>| format!("x={} y={}", bag["x"], bag["y"]);
/// let with_y = partial_props(describe, ArgBag::from([("y".to_string(), 2)]));
///
/// let result = with_y(ArgBag::from([("x".to_string(), 1)]));
/// assert_eq!(result, "x=1 y=2");
/// ```
pub fn partial_props<T, R, F>(function: F, present: ArgBag<T>) -> impl Fn(ArgBag<T>) -> R
where
    T: Clone,
    F: Fn(&ArgBag<T>) -> R,
{
    move |later: ArgBag<T>| {
        let mut merged = present.clone();
        merged.extend(later);
        function(&merged)
    }
}

// =============================================================================
// CurriedProps
// =============================================================================

/// A curried function value over named arguments.
///
/// Built with [`curry_props`]. Each step supplies exactly one key; the
/// chain is terminal once the number of *distinct* keys reaches the
/// declared arity. Supplying an already-present key overwrites its value
/// without advancing the chain toward completion. As with the positional
/// engines, every step produces a fresh bag snapshot, so intermediate
/// values are reusable.
///
/// # Examples
///
/// ```
/// use pointfree::arity::Arity;
/// use pointfree::props::{ArgBag, curry_props};
///
/// let area = |bag: &ArgBag<u32>| bag["width"] * bag["height"];
/// let curried = curry_props(area, Arity::new(2).unwrap());
///
/// // Key order does not matter.
/// let result = curried
///     .apply_entry("height", 4)
///     .unwrap_pending()
///     .apply_entry("width", 10)
///     .unwrap_complete();
/// assert_eq!(result, 40);
/// ```
pub struct CurriedProps<T, R> {
    function: BagFn<T, R>,
    arity: Arity,
    collected: ArgBag<T>,
}

/// Curries `function` over named arguments, one key per step.
pub fn curry_props<T, R, F>(function: F, arity: Arity) -> CurriedProps<T, R>
where
    T: Clone + 'static,
    R: 'static,
    F: Fn(&ArgBag<T>) -> R + 'static,
{
    CurriedProps {
        function: Rc::new(function),
        arity,
        collected: ArgBag::new(),
    }
}

impl<T: Clone, R> CurriedProps<T, R> {
    /// Applies a bag containing exactly one key.
    ///
    /// # Errors
    ///
    /// Returns [`MultipleKeysError`] when `next` holds more or fewer than
    /// one key; the one-key-per-step contract is what keeps each step
    /// unambiguous.
    pub fn apply(&self, next: ArgBag<T>) -> Result<Step<R, Self>, MultipleKeysError> {
        if next.len() != 1 {
            return Err(MultipleKeysError { supplied: next.len() });
        }
        let (key, value) = next
            .into_iter()
            .next()
            .ok_or(MultipleKeysError { supplied: 0 })?;
        Ok(self.advance(key, value))
    }

    /// Applies a single named argument directly.
    ///
    /// Infallible counterpart of [`apply`](Self::apply): a key-value pair
    /// cannot violate the one-key-per-step contract.
    pub fn apply_entry(&self, key: impl Into<String>, value: T) -> Step<R, Self> {
        self.advance(key.into(), value)
    }

    /// Number of distinct keys still missing before the wrapped function runs.
    pub fn remaining(&self) -> usize {
        self.arity.get() - self.collected.len()
    }

    fn advance(&self, key: String, value: T) -> Step<R, Self> {
        let mut collected = self.collected.clone();
        collected.insert(key, value);
        if collected.len() >= self.arity.get() {
            Step::Complete((self.function)(&collected))
        } else {
            Step::Pending(Self {
                function: Rc::clone(&self.function),
                arity: self.arity,
                collected,
            })
        }
    }
}

impl<T: std::fmt::Debug, R> std::fmt::Debug for CurriedProps<T, R> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CurriedProps")
            .field("arity", &self.arity)
            .field("collected", &self.collected)
            .finish_non_exhaustive()
    }
}

impl<T: Clone, R> Clone for CurriedProps<T, R> {
    fn clone(&self) -> Self {
        Self {
            function: Rc::clone(&self.function),
            arity: self.arity,
            collected: self.collected.clone(),
        }
    }
}

// =============================================================================
// spread_arg_props
// =============================================================================

/// Bridges a bag-based call into a positional function.
///
/// `parameter_order` is the explicit ordered sequence of parameter names;
/// the returned closure looks each name up in the supplied bag and passes
/// the values to `function` in descriptor order.
///
/// # Errors
///
/// The returned closure yields [`MissingKeyError`] when a name in the
/// descriptor is absent from the bag.
///
/// # Examples
///
/// ```
/// use pointfree::props::{ArgBag, spread_arg_props};
///
/// let subtract = |args: &[i32]| args[0] - args[1];
/// let by_name = spread_arg_props(subtract, ["minuend", "subtrahend"]);
///
/// let bag = ArgBag::from([
///     ("subtrahend".to_string(), 3),
///     ("minuend".to_string(), 10),
/// ]);
/// assert_eq!(by_name(&bag), Ok(7));
/// ```
pub fn spread_arg_props<T, R, F, I, K>(
    function: F,
    parameter_order: I,
) -> impl Fn(&ArgBag<T>) -> Result<R, MissingKeyError>
where
    T: Clone,
    F: Fn(&[T]) -> R,
    I: IntoIterator<Item = K>,
    K: Into<String>,
{
    let order: Vec<String> = parameter_order.into_iter().map(Into::into).collect();
    move |bag: &ArgBag<T>| {
        let mut arguments: SmallVec<[T; 4]> = SmallVec::with_capacity(order.len());
        for name in &order {
            let value = bag.get(name).ok_or_else(|| MissingKeyError {
                key: name.clone(),
            })?;
            arguments.push(value.clone());
        }
        Ok(function(&arguments))
    }
}
