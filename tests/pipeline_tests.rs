//! Unit tests for eager and lazy pipelines, macro and runtime forms.

use std::rc::Rc;

use pointfree::pipeline::{Stage, compose_all, compose_lazy, pipe_all, stage};
use pointfree::{compose, pipe};

fn words(text: &str) -> Vec<String> {
    text.to_lowercase()
        .split_whitespace()
        .filter(|word| word.chars().all(char::is_alphanumeric))
        .map(str::to_string)
        .collect()
}

fn unique(list: Vec<String>) -> Vec<String> {
    let mut seen = Vec::new();
    for word in list {
        if !seen.contains(&word) {
            seen.push(word);
        }
    }
    seen
}

fn skip_short(list: Vec<String>) -> Vec<String> {
    list.into_iter().filter(|word| word.len() > 2).collect()
}

// =============================================================================
// Macro composition (heterogeneous stages)
// =============================================================================

#[test]
fn test_compose_macro_words_pipeline() {
    // skip_short(unique(words(text))): right-to-left.
    let bigger_words = compose!(skip_short, unique, words);

    let result = bigger_words("a aa aaa aaaa aaaaa");
    assert_eq!(result, vec!["aaa", "aaaa", "aaaaa"]);
}

#[test]
fn test_pipe_macro_words_pipeline() {
    // Same pipeline, listed in execution order.
    let bigger_words = pipe!(words, unique, skip_short);

    let text = "To compose two functions together, pass the output of the \
                first function call as the input of the second function call.";
    let result = bigger_words(text);

    assert!(result.contains(&"compose".to_string()));
    // De-duplicated ...
    assert_eq!(result.iter().filter(|word| *word == "function").count(), 1);
    // ... and nothing short survives.
    assert!(result.iter().all(|word| word.len() > 2));
}

#[test]
fn test_macro_single_function() {
    let double = |x: i32| x * 2;
    assert_eq!(compose!(double)(5), 10);
    assert_eq!(pipe!(double)(5), 10);
}

// =============================================================================
// Runtime composition (dynamic stage lists)
// =============================================================================

#[test]
fn test_compose_all_executes_right_to_left() {
    let stages: Vec<Stage<Vec<String>>> = vec![stage(skip_short), stage(unique)];
    let pipeline = compose_all(stages);

    let input = words("a aa aaa aaa aaaa aaaaa aaaaa");
    assert_eq!(pipeline(input), vec!["aaa", "aaaa", "aaaaa"]);
}

#[test]
fn test_pipe_all_mirrors_compose_all() {
    let forward: Vec<Stage<Vec<String>>> = vec![stage(unique), stage(skip_short)];
    let backward: Vec<Stage<Vec<String>>> =
        forward.iter().rev().map(Rc::clone).collect();

    let piped = pipe_all(forward);
    let composed = compose_all(backward);

    let input = words("x yy zzz zzz");
    assert_eq!(piped(input.clone()), composed(input));
}

#[test]
fn test_shared_tail_specialized_heads() {
    // Pre-building the common tail of a composition, then completing it
    // with different final stages.
    let tail: Vec<Stage<Vec<String>>> = vec![stage(unique)];

    let mut bigger = vec![stage(skip_short)];
    bigger.extend(tail.iter().map(Rc::clone));
    let mut smaller: Vec<Stage<Vec<String>>> =
        vec![stage(|list: Vec<String>| {
            list.into_iter().filter(|word| word.len() <= 2).collect()
        })];
    smaller.extend(tail.iter().map(Rc::clone));

    let input = words("a aa aaa aaaa");
    assert_eq!(compose_all(bigger)(input.clone()), vec!["aaa", "aaaa"]);
    assert_eq!(compose_all(smaller)(input), vec!["a", "aa"]);
}

// =============================================================================
// Lazy composition
// =============================================================================

#[test]
fn test_compose_lazy_words_pipeline() {
    // Folded once at construction; the entry stage sees the whole
    // argument sequence.
    let gather_words = |fragments: &[String]| words(&fragments.join(" "));
    let pipeline = compose_lazy(vec![stage(skip_short), stage(unique)], gather_words);

    let result = pipeline(&["a aa aaa aaaa aaaaa".to_string()]);
    assert_eq!(result, vec!["aaa", "aaaa", "aaaaa"]);
}

#[test]
fn test_compose_lazy_multi_argument_entry() {
    let gather_words = |fragments: &[String]| words(&fragments.join(" "));
    let pipeline = compose_lazy(vec![stage(skip_short), stage(unique)], gather_words);

    // The same pipeline accepts any number of arguments on its first call.
    let result = pipeline(&["a aa aaa".to_string(), "aaa aaaa aaaaa".to_string()]);
    assert_eq!(result, vec!["aaa", "aaaa", "aaaaa"]);
}

#[test]
fn test_compose_lazy_matches_eager_on_single_argument() {
    let eager = compose_all(vec![stage(skip_short), stage(unique)]);
    let lazy = compose_lazy(
        vec![stage(skip_short), stage(unique)],
        |args: &[Vec<String>]| args[0].clone(),
    );

    let input = words("one two two three");
    assert_eq!(lazy(&[input.clone()]), eager(input));
}
