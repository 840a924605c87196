//! Function composition: pipelines of chained transformations.
//!
//! Two surfaces are provided:
//!
//! - The [`compose!`](crate::compose) and [`pipe!`](crate::pipe) macros
//!   build a pipeline over *heterogeneous* stage types at expansion time;
//!   each stage's output type only has to match the next stage's input.
//! - The runtime functions in this module ([`compose_all`], [`pipe_all`],
//!   [`compose_lazy`]) chain a *dynamic number* of stages over one value
//!   type, held as shared [`Stage`] closures.
//!
//! No stage executes until the assembled pipeline is invoked with a
//! concrete value. The eager forms walk the stage list on every call;
//! [`compose_lazy`] folds the stages into a single nested closure once, at
//! construction, and additionally accepts a variadic argument sequence on
//! its first-executed stage.

use std::rc::Rc;

mod compose_macro;
mod pipe_macro;

// Re-export macros (already at crate root via #[macro_export]).
pub use crate::compose;
pub use crate::pipe;

/// A shared unary pipeline stage.
pub type Stage<T> = Rc<dyn Fn(T) -> T>;

/// Wraps a function as a shareable pipeline [`Stage`].
pub fn stage<T, F>(function: F) -> Stage<T>
where
    T: 'static,
    F: Fn(T) -> T + 'static,
{
    Rc::new(function)
}

/// Chains `stages` right-to-left: the last stage receives the input first.
///
/// An empty stage list behaves as the identity function. The list is
/// walked on every invocation.
///
/// # Examples
///
/// ```
/// use pointfree::pipeline::{compose_all, stage};
///
/// let add_one = stage(|x: i32| x + 1);
/// let double = stage(|x: i32| x * 2);
///
/// // add_one(double(5)) = 11
/// let pipeline = compose_all(vec![add_one, double]);
/// assert_eq!(pipeline(5), 11);
///
/// let empty = compose_all(Vec::<pointfree::pipeline::Stage<i32>>::new());
/// assert_eq!(empty(7), 7);
/// ```
pub fn compose_all<T>(stages: Vec<Stage<T>>) -> impl Fn(T) -> T {
    move |input| stages.iter().rev().fold(input, |value, stage| stage(value))
}

/// Chains `stages` left-to-right: the first stage receives the input first.
///
/// Mirror of [`compose_all`]: `pipe_all(vec![f, g])(x)` equals
/// `compose_all(vec![g, f])(x)`. An empty stage list behaves as identity.
///
/// # Examples
///
/// ```
/// use pointfree::pipeline::{pipe_all, stage};
///
/// let add_one = stage(|x: i32| x + 1);
/// let double = stage(|x: i32| x * 2);
///
/// // double(add_one(5)) = 12
/// let pipeline = pipe_all(vec![add_one, double]);
/// assert_eq!(pipeline(5), 12);
/// ```
pub fn pipe_all<T>(stages: Vec<Stage<T>>) -> impl Fn(T) -> T {
    move |input| stages.iter().fold(input, |value, stage| stage(value))
}

/// Right-to-left composition folded once, at construction time.
///
/// `stages` are the unary stages in compose order (outermost first), and
/// `entry` is the first-executed stage. The unary stages are folded
/// pairwise into a single nested closure when `compose_lazy` is called;
/// invoking the result performs no further folding. Unlike the eager
/// forms, the entry stage receives the *entire* argument sequence of the
/// invocation, so multi-argument pipelines are expressible; every
/// subsequent stage remains unary on the propagated result.
///
/// # Examples
///
/// ```
/// use pointfree::pipeline::{compose_lazy, stage};
///
/// let double = stage(|x: i32| x * 2);
/// let add_one = stage(|x: i32| x + 1);
/// let sum = |args: &[i32]| args.iter().sum::<i32>();
///
/// // double(add_one(sum(1, 2, 3))) = double(7) = 14
/// let pipeline = compose_lazy(vec![double, add_one], sum);
/// assert_eq!(pipeline(&[1, 2, 3]), 14);
/// ```
pub fn compose_lazy<A, T, F>(stages: Vec<Stage<T>>, entry: F) -> impl Fn(&[A]) -> T
where
    T: 'static,
    F: Fn(&[A]) -> T,
{
    let chain = stages
        .into_iter()
        .rev()
        .reduce(|inner, outer| Rc::new(move |value| outer(inner(value))) as Stage<T>);
    move |arguments: &[A]| {
        let value = entry(arguments);
        match &chain {
            Some(chain) => chain(value),
            None => value,
        }
    }
}
