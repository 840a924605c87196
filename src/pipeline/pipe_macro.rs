//! The `pipe!` macro: left-to-right composition over heterogeneous stages.

/// Composes functions from left to right into a single closure.
///
/// `pipe!(f, g, h)` builds `|x| h(g(f(x)))`: the value flows through the
/// stages in the order they are written. It is the mirror of
/// [`compose!`](crate::compose): `pipe!(f, g)(x)` equals
/// `compose!(g, f)(x)`.
///
/// `pipe!()` with no functions expands to
/// [`identity`](crate::adapt::identity).
///
/// # Examples
///
/// ```
/// use pointfree::pipe;
///
/// fn add_one(x: i32) -> i32 { x + 1 }
/// fn double(x: i32) -> i32 { x * 2 }
///
/// // double(add_one(5)) = 12
/// let pipeline = pipe!(add_one, double);
/// assert_eq!(pipeline(5), 12);
/// ```
///
/// ## A string-processing pipeline
///
/// ```
/// use pointfree::pipe;
///
/// fn trim(s: &str) -> &str { s.trim() }
/// fn shout(s: &str) -> String { s.to_uppercase() }
/// fn exclaim(s: String) -> String { format!("{s}!") }
///
/// let pipeline = pipe!(trim, shout, exclaim);
/// assert_eq!(pipeline("  hello  "), "HELLO!");
/// ```
#[macro_export]
macro_rules! pipe {
    // Empty pipeline: the identity function
    () => {
        $crate::adapt::identity
    };

    // Single function: returned unchanged
    ($function:expr $(,)?) => {
        $function
    };

    // Two or more: peel the first-executed stage, recurse on the rest
    ($first_function:expr, $($remaining_functions:expr),+ $(,)?) => {{
        let first = $first_function;
        let rest = $crate::pipe!($($remaining_functions),+);
        move |input| rest(first(input))
    }};
}
