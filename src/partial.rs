//! Positional partial application, from the left and from the right.
//!
//! [`partial`] binds a fixed *prefix* of arguments; [`partial_right`] binds
//! a fixed *suffix*. Both return ordinary closures over argument sequences,
//! and both clone the bound values on every call so the partially-applied
//! function is freely reusable.

use smallvec::SmallVec;

use crate::adapt::reverse_args;

/// Binds a fixed argument prefix.
///
/// The returned closure concatenates the bound prefix with whatever is
/// supplied later, in that order, and invokes `function` with the full
/// sequence: `partial(f, present)(later) == f(present ++ later)`.
///
/// # Examples
///
/// ```
/// use pointfree::partial::partial;
///
/// let sum = |args: &[i32]| args.iter().sum::<i32>();
/// let add_seven = partial(sum, vec![7]);
///
/// assert_eq!(add_seven(&[5]), 12);
/// assert_eq!(add_seven(&[10, 20]), 37);
/// ```
pub fn partial<T, R, F>(function: F, present: Vec<T>) -> impl Fn(&[T]) -> R
where
    T: Clone,
    F: Fn(&[T]) -> R,
{
    move |later: &[T]| {
        let mut arguments: SmallVec<[T; 4]> = SmallVec::with_capacity(present.len() + later.len());
        arguments.extend(present.iter().cloned());
        arguments.extend(later.iter().cloned());
        function(&arguments)
    }
}

/// Binds a fixed argument suffix.
///
/// Built by double reversal: the effective argument order of `function` is
/// reversed, the reversed `present` values are bound as a prefix against
/// that reversed function, and the call-time order is reversed once more.
/// Net effect: later arguments occupy the leading positions and the bound
/// values are the trailing-most arguments of the final call.
///
/// The bound values are **not** attached to specific parameters, only to
/// trailing position. If a call supplies more arguments than the gap
/// between the function's parameter count and the bound suffix, the bound
/// values shift right to stay trailing-most. This mirrors the classic
/// right-partial-application behavior and is intentional.
///
/// # Examples
///
/// ```
/// use pointfree::partial::partial_right;
///
/// let list = |args: &[&'static str]| -> Vec<&'static str> { args.to_vec() };
/// let with_last = partial_right(list, vec!["last"]);
///
/// assert_eq!(with_last(&["a", "b"]), vec!["a", "b", "last"]);
/// // With a third leading argument the bound value still trails.
/// assert_eq!(with_last(&["a", "b", "c"]), vec!["a", "b", "c", "last"]);
/// ```
pub fn partial_right<T, R, F>(function: F, present: Vec<T>) -> impl Fn(&[T]) -> R
where
    T: Clone,
    F: Fn(&[T]) -> R,
{
    let mut reversed_present = present;
    reversed_present.reverse();
    reverse_args(partial(reverse_args(function), reversed_present))
}
