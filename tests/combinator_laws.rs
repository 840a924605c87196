//! Property-based tests for the combinator laws.
//!
//! ## Curry Laws
//! - **Strict equivalence**: applying `curry(f, n)` one argument at a time
//!   over a sequence of length `n` equals `f` on the full sequence.
//! - **Loose equivalence**: any partition of the sequence into non-empty
//!   consecutive groups completes to the same result.
//!
//! ## Partial Application Laws
//! - **Prefix**: `partial(f, P)(L) == f(P ++ L)`.
//! - **Suffix**: `partial_right(f, P)(L)` calls `f` with `L` leading and
//!   `P` trailing, for any lengths of `P` and `L`.
//!
//! ## Composition Laws
//! - **Mirror**: `pipe!(f, g)(x) == compose!(g, f)(x)`.
//! - **Identity**: `compose!(identity, f) == f == compose!(f, identity)`.
//!
//! ## Adapter Laws
//! - **Flip**: `flip(f)(a, b) == f(b, a)`; `flip(flip(f)) == f`.
//! - **Unary**: extra arguments never reach the wrapped function.

use pointfree::adapt::{flip, identity, unary};
use pointfree::arity::Arity;
use pointfree::curry::{Curried, CurriedLoose, Step, curry, curry_loose};
use pointfree::partial::{partial, partial_right};
use pointfree::{compose, pipe};
use proptest::collection::vec;
use proptest::prelude::*;

/// Drives a strict curry chain over `arguments`, asserting the chain
/// completes on exactly the last argument.
fn run_strict(curried: &Curried<i32, Vec<i32>>, arguments: &[i32]) -> Vec<i32> {
    let mut current = curried.clone();
    for (index, value) in arguments.iter().enumerate() {
        match current.apply(*value) {
            Step::Complete(result) => {
                assert_eq!(index, arguments.len() - 1, "chain completed early");
                return result;
            }
            Step::Pending(next) => current = next,
        }
    }
    panic!("curry chain never completed");
}

/// Drives a loose curry chain group by group.
fn run_loose(curried: &CurriedLoose<i32, Vec<i32>>, groups: &[Vec<i32>]) -> Vec<i32> {
    let mut current = curried.clone();
    for (index, group) in groups.iter().enumerate() {
        match current.apply(group.iter().copied()) {
            Step::Complete(result) => {
                assert_eq!(index, groups.len() - 1, "chain completed early");
                return result;
            }
            Step::Pending(next) => current = next,
        }
    }
    panic!("curry chain never completed");
}

fn collect(arguments: &[i32]) -> Vec<i32> {
    arguments.to_vec()
}

// =============================================================================
// Curry Laws
// =============================================================================

proptest! {
    /// curry(f, n)(A[0])(A[1])...(A[n-1]) == f(A)
    #[test]
    fn prop_curry_strict_equivalence(arguments in vec(any::<i32>(), 1..8)) {
        let arity = Arity::new(arguments.len()).unwrap();
        let curried = curry(collect, arity);

        prop_assert_eq!(run_strict(&curried, &arguments), arguments);
    }

    /// Any two-group partition of the arguments completes identically.
    #[test]
    fn prop_curry_loose_partition(
        arguments in vec(any::<i32>(), 2..8),
        split in any::<prop::sample::Index>(),
    ) {
        let arity = Arity::new(arguments.len()).unwrap();
        let curried = curry_loose(collect, arity);

        let boundary = 1 + split.index(arguments.len() - 1);
        let groups = vec![
            arguments[..boundary].to_vec(),
            arguments[boundary..].to_vec(),
        ];

        prop_assert_eq!(run_loose(&curried, &groups), arguments);
    }

    /// One-argument groups make loose currying behave exactly like strict.
    #[test]
    fn prop_curry_loose_matches_strict(arguments in vec(any::<i32>(), 1..8)) {
        let arity = Arity::new(arguments.len()).unwrap();
        let strict = curry(collect, arity);
        let loose = curry_loose(collect, arity);

        let singletons: Vec<Vec<i32>> =
            arguments.iter().map(|value| vec![*value]).collect();

        prop_assert_eq!(
            run_strict(&strict, &arguments),
            run_loose(&loose, &singletons)
        );
    }

    /// A single group carrying everything completes in one call.
    #[test]
    fn prop_curry_loose_single_call(arguments in vec(any::<i32>(), 1..8)) {
        let arity = Arity::new(arguments.len()).unwrap();
        let curried = curry_loose(collect, arity);

        let result = curried.apply(arguments.iter().copied()).unwrap_complete();
        prop_assert_eq!(result, arguments);
    }
}

// =============================================================================
// Partial Application Laws
// =============================================================================

proptest! {
    /// partial(f, P)(L) == f(P ++ L)
    #[test]
    fn prop_partial_concatenates(
        present in vec(any::<i32>(), 0..5),
        later in vec(any::<i32>(), 0..5),
    ) {
        let bound = partial(collect, present.clone());

        let mut expected = present;
        expected.extend_from_slice(&later);
        prop_assert_eq!(bound(&later), expected);
    }

    /// partial_right places the bound values trailing-most, later arguments leading.
    #[test]
    fn prop_partial_right_trailing(
        present in vec(any::<i32>(), 0..5),
        later in vec(any::<i32>(), 0..5),
    ) {
        let bound = partial_right(collect, present.clone());

        let mut expected = later.clone();
        expected.extend_from_slice(&present);
        prop_assert_eq!(bound(&later), expected);
    }
}

// =============================================================================
// Composition Laws
// =============================================================================

proptest! {
    /// pipe!(f, g)(x) == compose!(g, f)(x)
    #[test]
    fn prop_pipe_mirrors_compose(x in any::<i32>()) {
        let f = |n: i32| n.wrapping_add(1);
        let g = |n: i32| n.wrapping_mul(2);

        prop_assert_eq!(pipe!(f, g)(x), compose!(g, f)(x));
    }

    /// compose!(identity, f)(x) == f(x) == compose!(f, identity)(x)
    #[test]
    fn prop_compose_identity_laws(x in any::<i32>()) {
        let f = |n: i32| n.wrapping_mul(3);

        prop_assert_eq!(compose!(identity, f)(x), f(x));
        prop_assert_eq!(compose!(f, identity)(x), f(x));
    }

    /// compose!(f, compose!(g, h)) == compose!(compose!(f, g), h)
    #[test]
    fn prop_compose_associativity(x in any::<i32>()) {
        let f = |n: i32| n.wrapping_add(1);
        let g = |n: i32| n.wrapping_mul(2);
        let h = |n: i32| n.wrapping_sub(3);

        let left = compose!(f, compose!(g, h));
        let right = compose!(compose!(f, g), h);
        prop_assert_eq!(left(x), right(x));
    }
}

// =============================================================================
// Adapter Laws
// =============================================================================

proptest! {
    /// flip(f)(a, b) == f(b, a) and flip(flip(f)) == f
    #[test]
    fn prop_flip_laws(a in any::<i32>(), b in any::<i32>()) {
        let f = |x: i32, y: i32| x.wrapping_sub(y);

        let flipped = flip(f);
        prop_assert_eq!(flipped(a, b), f(b, a));

        let flipped_twice = flip(flip(f));
        prop_assert_eq!(flipped_twice(a, b), f(a, b));
    }

    /// unary(f)(a, b, c, ...) == f(a): extras are discarded.
    #[test]
    fn prop_unary_discards_extras(arguments in vec(any::<i32>(), 1..6)) {
        let double = unary(|value: i32| value.wrapping_mul(2));

        prop_assert_eq!(double(&arguments), arguments[0].wrapping_mul(2));
    }
}
