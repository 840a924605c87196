//! Argument-shape adapters.
//!
//! Small combinators that change the shape of a function's arguments
//! without touching its behavior:
//!
//! - [`identity`]: returns its input unchanged (I combinator)
//! - [`constant`]: ignores its input and always yields a captured value (K)
//! - [`flip`]: swaps the two arguments of a binary function (C)
//! - [`unary`]: forwards only the first of a variadic argument sequence
//! - [`reverse_args`]: reverses a variadic argument sequence at call time
//! - [`spread_args`] / [`spread_args3`]: turn a tuple-taking function into
//!   one taking individual positional arguments
//! - [`gather_args`] / [`gather_args3`]: the inverses, packing positional
//!   arguments into a tuple
//!
//! Variadic adapters operate on argument sequences (`&[T]`), the crate's
//! rendition of a call with a caller-chosen number of positional arguments.

use smallvec::SmallVec;

/// Returns the value unchanged.
///
/// The unit element of composition: `compose!(identity, f)` and
/// `compose!(f, identity)` are both equivalent to `f`. It is also what
/// [`compose!`](crate::compose) expands to for an empty function list.
///
/// # Examples
///
/// ```
/// use pointfree::adapt::identity;
///
/// assert_eq!(identity(42), 42);
/// assert_eq!(identity("hello"), "hello");
/// ```
#[inline]
pub fn identity<T>(value: T) -> T {
    value
}

/// Creates a function that always returns the given value, ignoring its input.
///
/// Useful for adapting APIs that require a function where a plain value is
/// meant.
///
/// # Examples
///
/// ```
/// use pointfree::adapt::constant;
///
/// let always_five = constant::<_, i32>(5);
/// assert_eq!(always_five(100), 5);
///
/// // Replace every element with zero
/// let zeros: Vec<i32> = vec![1, 2, 3].into_iter().map(constant(0)).collect();
/// assert_eq!(zeros, vec![0, 0, 0]);
/// ```
#[inline]
pub fn constant<T: Clone, U>(value: T) -> impl Fn(U) -> T {
    move |_| value.clone()
}

/// Swaps the arguments of a binary function.
///
/// `flip(f)(a, b) == f(b, a)`, and `flip(flip(f)) == f`. This is the
/// two-argument special case of [`reverse_args`], kept separate because it
/// needs no cloning and no sequence type.
///
/// # Examples
///
/// ```
/// use pointfree::adapt::flip;
///
/// fn divide(numerator: f64, denominator: f64) -> f64 {
///     numerator / denominator
/// }
///
/// let flipped = flip(divide);
/// assert!((flipped(2.0, 10.0) - 5.0).abs() < f64::EPSILON);
/// ```
#[inline]
pub fn flip<A, B, C, F>(function: F) -> impl Fn(B, A) -> C
where
    F: Fn(A, B) -> C,
{
    move |second_argument, first_argument| function(first_argument, second_argument)
}

/// Forwards only the first argument of a variadic call, discarding the rest.
///
/// Enforces that `function` is treated as unary even when a caller supplies
/// extra arguments, as iteration utilities that also pass an index or the
/// whole collection tend to do.
///
/// # Panics
///
/// Panics when invoked with an empty argument sequence; a unary function
/// has nothing to receive.
///
/// # Examples
///
/// ```
/// use pointfree::adapt::unary;
///
/// let parse = unary(|text: String| text.parse::<i32>().unwrap());
///
/// // The extra arguments never reach the wrapped function.
/// let args = vec!["7".to_string(), "ignored".to_string(), "also".to_string()];
/// assert_eq!(parse(&args), 7);
/// ```
pub fn unary<T, R, F>(function: F) -> impl Fn(&[T]) -> R
where
    T: Clone,
    F: Fn(T) -> R,
{
    move |arguments: &[T]| {
        let first = arguments
            .first()
            .cloned()
            .expect("unary adapter invoked with no arguments");
        function(first)
    }
}

/// Reverses the positional order of the arguments at every call.
///
/// Each call is reversed independently; the wrapped function itself is
/// untouched. This is the building block of
/// [`partial_right`](crate::partial::partial_right).
///
/// # Examples
///
/// ```
/// use pointfree::adapt::reverse_args;
///
/// let join = |args: &[String]| args.join("-");
/// let reversed_join = reverse_args(join);
///
/// let args = vec!["a".to_string(), "b".to_string(), "c".to_string()];
/// assert_eq!(reversed_join(&args), "c-b-a");
/// ```
pub fn reverse_args<T, R, F>(function: F) -> impl Fn(&[T]) -> R
where
    T: Clone,
    F: Fn(&[T]) -> R,
{
    move |arguments: &[T]| {
        let mut reversed: SmallVec<[T; 4]> = arguments.iter().cloned().collect();
        reversed.reverse();
        function(&reversed)
    }
}

/// Adapts a two-argument function to accept a single ordered pair.
///
/// `spread_args(f)((a, b)) == f(a, b)`: the pair is spread out into the
/// individual positional arguments `f` expects.
///
/// # Examples
///
/// ```
/// use pointfree::adapt::spread_args;
///
/// fn add(first: i32, second: i32) -> i32 { first + second }
///
/// let add_pair = spread_args(add);
/// assert_eq!(add_pair((3, 9)), 12);
/// ```
#[inline]
pub fn spread_args<A, B, R, F>(function: F) -> impl Fn((A, B)) -> R
where
    F: Fn(A, B) -> R,
{
    move |(first_argument, second_argument)| function(first_argument, second_argument)
}

/// Adapts a pair-taking function to accept two individual arguments.
///
/// The inverse of [`spread_args`]: `gather_args(f)(a, b) == f((a, b))`.
/// Handy for handing a pair-consuming combinator to reduction utilities
/// that call their combining function with two positional arguments.
///
/// # Examples
///
/// ```
/// use pointfree::adapt::gather_args;
///
/// fn combine_pair((first, second): (i32, i32)) -> i32 { first + second }
///
/// let total = [1, 2, 3, 4, 5]
///     .into_iter()
///     .reduce(gather_args(combine_pair));
/// assert_eq!(total, Some(15));
/// ```
#[inline]
pub fn gather_args<A, B, R, F>(function: F) -> impl Fn(A, B) -> R
where
    F: Fn((A, B)) -> R,
{
    move |first_argument, second_argument| function((first_argument, second_argument))
}

/// Three-argument counterpart of [`spread_args`].
///
/// `spread_args3(f)((a, b, c)) == f(a, b, c)`.
///
/// # Examples
///
/// ```
/// use pointfree::adapt::spread_args3;
///
/// fn clamp(value: i32, low: i32, high: i32) -> i32 { value.max(low).min(high) }
///
/// let clamp_triple = spread_args3(clamp);
/// assert_eq!(clamp_triple((15, 0, 10)), 10);
/// ```
#[inline]
pub fn spread_args3<A, B, C, R, F>(function: F) -> impl Fn((A, B, C)) -> R
where
    F: Fn(A, B, C) -> R,
{
    move |(first_argument, second_argument, third_argument)| {
        function(first_argument, second_argument, third_argument)
    }
}

/// Three-argument counterpart of [`gather_args`].
///
/// `gather_args3(f)(a, b, c) == f((a, b, c))`.
///
/// # Examples
///
/// ```
/// use pointfree::adapt::gather_args3;
///
/// fn volume((width, height, depth): (i32, i32, i32)) -> i32 {
///     width * height * depth
/// }
///
/// let measure = gather_args3(volume);
/// assert_eq!(measure(2, 3, 4), 24);
/// ```
#[inline]
pub fn gather_args3<A, B, C, R, F>(function: F) -> impl Fn(A, B, C) -> R
where
    F: Fn((A, B, C)) -> R,
{
    move |first_argument, second_argument, third_argument| {
        function((first_argument, second_argument, third_argument))
    }
}
