//! The `compose!` macro: right-to-left composition over heterogeneous stages.

/// Composes functions from right to left into a single closure.
///
/// `compose!(f, g, h)` builds `|x| f(g(h(x)))`: the rightmost function is
/// applied first, following mathematical composition order. Each stage's
/// output type must match the input type of the stage to its left; the
/// stages themselves may all have different types, which the runtime
/// [`compose_all`](crate::pipeline::compose_all) cannot express.
///
/// `compose!()` with no functions expands to
/// [`identity`](crate::adapt::identity).
///
/// # Examples
///
/// ```
/// use pointfree::compose;
///
/// fn add_one(x: i32) -> i32 { x + 1 }
/// fn double(x: i32) -> i32 { x * 2 }
///
/// // add_one(double(5)) = 11
/// let composed = compose!(add_one, double);
/// assert_eq!(composed(5), 11);
/// ```
///
/// ## Types flowing through the chain
///
/// ```
/// use pointfree::compose;
///
/// fn to_string(x: i32) -> String { x.to_string() }
/// fn length(s: String) -> usize { s.len() }
///
/// let digits = compose!(length, to_string);
/// assert_eq!(digits(12345), 5);
/// ```
///
/// ## Zero functions behave as identity
///
/// ```
/// use pointfree::compose;
///
/// let nothing = compose!();
/// assert_eq!(nothing(42), 42);
/// ```
#[macro_export]
macro_rules! compose {
    // Empty composition: the identity function
    () => {
        $crate::adapt::identity
    };

    // Single function: returned unchanged
    ($function:expr $(,)?) => {
        $function
    };

    // Two or more: peel the outermost, recurse on the rest
    ($outer_function:expr, $($remaining_functions:expr),+ $(,)?) => {{
        let outer = $outer_function;
        let inner = $crate::compose!($($remaining_functions),+);
        move |input| outer(inner(input))
    }};
}
