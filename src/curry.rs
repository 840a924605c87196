//! Arity-tracking currying over argument sequences.
//!
//! A curried function value carries the wrapped function, its declared
//! [`Arity`], and an immutable snapshot of the arguments collected so far.
//! Every application produces a *new* snapshot instead of mutating the old
//! one, so a partially-applied value can be reused: applying it twice with
//! different arguments yields two independent branches.
//!
//! Two variants exist:
//!
//! - [`Curried`] (strict): every step accepts exactly one argument.
//! - [`CurriedLoose`]: every step accepts one or more arguments, so the
//!   chain can complete in fewer calls than the arity.
//!
//! Neither variant invokes the wrapped function until the accumulated
//! argument count reaches the arity; at that point the full sequence is
//! passed in collection order.
//!
//! [`uncurry`] undoes the strict transform: it wraps a [`Curried`] value so
//! a whole argument sequence can be supplied in one call, resuming as an
//! ordinary chain when the sequence falls short of the arity.

use std::rc::Rc;

use smallvec::SmallVec;

use crate::arity::Arity;

type SequenceFn<T, R> = Rc<dyn Fn(&[T]) -> R>;
type Snapshot<T> = SmallVec<[T; 4]>;

// =============================================================================
// Step
// =============================================================================

/// Outcome of one curry step: either the final result or the next function
/// value in the chain.
#[derive(Debug)]
pub enum Step<R, Next> {
    /// Enough arguments accumulated; the wrapped function was invoked.
    Complete(R),
    /// More arguments are still expected.
    Pending(Next),
}

impl<R, Next> Step<R, Next> {
    /// Returns `true` when the wrapped function has been invoked.
    pub const fn is_complete(&self) -> bool {
        matches!(self, Self::Complete(_))
    }

    /// Extracts the final result, if this step was terminal.
    pub fn into_value(self) -> Option<R> {
        match self {
            Self::Complete(value) => Some(value),
            Self::Pending(_) => None,
        }
    }

    /// Extracts the next function value, if more arguments are expected.
    pub fn into_pending(self) -> Option<Next> {
        match self {
            Self::Complete(_) => None,
            Self::Pending(next) => Some(next),
        }
    }

    /// Extracts the final result.
    ///
    /// # Panics
    ///
    /// Panics when the chain still expects more arguments.
    #[track_caller]
    pub fn unwrap_complete(self) -> R {
        match self {
            Self::Complete(value) => value,
            Self::Pending(_) => panic!("curry chain is still awaiting arguments"),
        }
    }

    /// Extracts the next function value in the chain.
    ///
    /// # Panics
    ///
    /// Panics when the wrapped function has already been invoked.
    #[track_caller]
    pub fn unwrap_pending(self) -> Next {
        match self {
            Self::Complete(_) => panic!("curry chain already completed"),
            Self::Pending(next) => next,
        }
    }
}

// =============================================================================
// Curried (strict)
// =============================================================================

/// A strictly curried function value: one argument per step.
///
/// Built with [`curry`]. Applying an argument either yields the final
/// result (when the declared arity is reached) or a new `Curried` closing
/// over the grown snapshot. The receiver is never consumed, so every
/// intermediate value is safely reusable.
///
/// # Examples
///
/// ```
/// use pointfree::arity::Arity;
/// use pointfree::curry::curry;
///
/// let sum = |args: &[i32]| args.iter().sum::<i32>();
/// let curried = curry(sum, Arity::new(3).unwrap());
///
/// let result = curried
///     .apply(1)
///     .unwrap_pending()
///     .apply(2)
///     .unwrap_pending()
///     .apply(3)
///     .unwrap_complete();
/// assert_eq!(result, 6);
/// ```
///
/// ## Branching from a shared prefix
///
/// ```
/// use pointfree::arity::Arity;
/// use pointfree::curry::curry;
///
/// let sum = |args: &[i32]| args.iter().sum::<i32>();
/// let with_ten = curry(sum, Arity::new(2).unwrap()).apply(10).unwrap_pending();
///
/// // Sibling applications never share an accumulator.
/// assert_eq!(with_ten.apply(1).unwrap_complete(), 11);
/// assert_eq!(with_ten.apply(32).unwrap_complete(), 42);
/// ```
pub struct Curried<T, R> {
    function: SequenceFn<T, R>,
    arity: Arity,
    collected: Snapshot<T>,
}

/// Curries `function` strictly: each step takes exactly one argument.
///
/// `arity` is the number of arguments to accumulate before `function` is
/// invoked; it must be supplied explicitly because Rust cannot inspect a
/// function value's parameter count at runtime.
pub fn curry<T, R, F>(function: F, arity: Arity) -> Curried<T, R>
where
    T: Clone + 'static,
    R: 'static,
    F: Fn(&[T]) -> R + 'static,
{
    Curried {
        function: Rc::new(function),
        arity,
        collected: Snapshot::new(),
    }
}

impl<T: Clone, R> Curried<T, R> {
    /// Applies the next argument.
    ///
    /// Returns [`Step::Complete`] with the wrapped function's result once
    /// the snapshot reaches the declared arity, otherwise [`Step::Pending`]
    /// with a new `Curried` closing over the grown snapshot.
    pub fn apply(&self, next: T) -> Step<R, Self> {
        let mut collected = self.collected.clone();
        collected.push(next);
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

    /// Number of arguments still expected before the wrapped function runs.
    pub fn remaining(&self) -> usize {
        self.arity.get() - self.collected.len()
    }
}

impl<T: Clone, R> Clone for Curried<T, R> {
    fn clone(&self) -> Self {
        Self {
            function: Rc::clone(&self.function),
            arity: self.arity,
            collected: self.collected.clone(),
        }
    }
}

// =============================================================================
// uncurry
// =============================================================================

/// Unwinds a strictly curried value so it accepts a whole argument sequence.
///
/// The sequence drives the chain argument by argument. Supplying the full
/// arity at once yields [`Step::Complete`] with the wrapped function's
/// result; a shorter sequence yields [`Step::Pending`] with the
/// partially-applied [`Curried`], which continues collecting one argument
/// per step. The chain completes as soon as the arity is reached, so any
/// arguments past it are never consumed.
///
/// # Examples
///
/// ```
/// use pointfree::arity::Arity;
/// use pointfree::curry::{curry, uncurry};
///
/// let sum = |args: &[i32]| args.iter().sum::<i32>();
/// let uncurried = uncurry(curry(sum, Arity::new(3).unwrap()));
///
/// assert_eq!(uncurried(&[1, 2, 3]).unwrap_complete(), 6);
///
/// // A short sequence resumes as an ordinary curry chain.
/// let rest = uncurried(&[1, 2]).unwrap_pending();
/// assert_eq!(rest.apply(3).unwrap_complete(), 6);
/// ```
pub fn uncurry<T, R>(curried: Curried<T, R>) -> impl Fn(&[T]) -> Step<R, Curried<T, R>>
where
    T: Clone,
{
    move |arguments: &[T]| {
        let mut current = curried.clone();
        for argument in arguments.iter().cloned() {
            match current.apply(argument) {
                Step::Complete(value) => return Step::Complete(value),
                Step::Pending(next) => current = next,
            }
        }
        Step::Pending(current)
    }
}

// =============================================================================
// CurriedLoose
// =============================================================================

/// A loosely curried function value: one *or more* arguments per step.
///
/// Built with [`curry_loose`]. Identical state machine to [`Curried`], but
/// the snapshot grows by however many arguments a step actually passes, so
/// the chain may finish in fewer calls than the arity, including a single
/// call supplying everything at once. An empty step is a no-op and stays
/// pending.
///
/// # Examples
///
/// ```
/// use pointfree::arity::Arity;
/// use pointfree::curry::curry_loose;
///
/// let sum = |args: &[i32]| args.iter().sum::<i32>();
/// let curried = curry_loose(sum, Arity::new(5).unwrap());
///
/// let result = curried
///     .apply([1, 2])
///     .unwrap_pending()
///     .apply([3, 4, 5])
///     .unwrap_complete();
/// assert_eq!(result, 15);
/// ```
pub struct CurriedLoose<T, R> {
    function: SequenceFn<T, R>,
    arity: Arity,
    collected: Snapshot<T>,
}

/// Curries `function` loosely: each step takes one or more arguments.
pub fn curry_loose<T, R, F>(function: F, arity: Arity) -> CurriedLoose<T, R>
where
    T: Clone + 'static,
    R: 'static,
    F: Fn(&[T]) -> R + 'static,
{
    CurriedLoose {
        function: Rc::new(function),
        arity,
        collected: Snapshot::new(),
    }
}

impl<T: Clone, R> CurriedLoose<T, R> {
    /// Applies the next group of arguments.
    ///
    /// The wrapped function runs as soon as the snapshot reaches the
    /// declared arity; an over-supplying final group passes its extra
    /// arguments through to the wrapped function unchanged.
    pub fn apply<I>(&self, next: I) -> Step<R, Self>
    where
        I: IntoIterator<Item = T>,
    {
        let mut collected = self.collected.clone();
        collected.extend(next);
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

    /// Number of arguments still expected before the wrapped function runs.
    pub fn remaining(&self) -> usize {
        self.arity.get() - self.collected.len()
    }
}

impl<T: Clone, R> Clone for CurriedLoose<T, R> {
    fn clone(&self) -> Self {
        Self {
            function: Rc::clone(&self.function),
            arity: self.arity,
            collected: self.collected.clone(),
        }
    }
}
