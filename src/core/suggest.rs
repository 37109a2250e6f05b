// src/core/suggest.rs

use crate::constants::{AIRCRAFT_TYPES, CREATE_AIRCRAFT_COMMAND};
use crate::core::vocabulary;
use lazy_static::lazy_static;
use regex::Regex;
use std::collections::HashMap;

lazy_static! {
    /// Splitter for parameter-hint tokenization: the console accepts both
    /// whitespace and commas between arguments.
    static ref ARGUMENT_SPLIT_RE: Regex = Regex::new(r"[\s,]+").unwrap();
}

/// Outcome of one autocomplete request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Completion {
    /// Exactly one candidate matched: the draft rewritten with the partial
    /// token completed (the input cursor belongs at the end of it).
    Applied(String),
    /// Several candidates matched: the draft is untouched and the sorted
    /// candidates should be shown as a suggestion list.
    Suggestions(Vec<String>),
    /// Nothing to complete (blank draft, unmatchable token, or a token
    /// position autocomplete does not cover).
    Unchanged,
}

/// Completes the token being typed against the merged command vocabulary.
///
/// With a single token present the candidates are every merged vocabulary
/// name prefix-matching the uppercased partial token. With exactly three
/// tokens whose first is the create-aircraft command, the candidates come
/// from the fixed aircraft type list instead, matched against the third
/// token. All other shapes are left untouched.
pub fn complete(draft: &str, remote: Option<&HashMap<String, String>>) -> Completion {
    let tokens: Vec<&str> = draft.split_whitespace().collect();

    let (candidates, partial) = match tokens.as_slice() {
        [] => return Completion::Unchanged,
        [partial] => (vocabulary::merged_names(remote), *partial),
        [command, _, partial]
            if command.eq_ignore_ascii_case(CREATE_AIRCRAFT_COMMAND) =>
        {
            let types = AIRCRAFT_TYPES.iter().map(|t| (*t).to_string()).collect();
            (types, *partial)
        }
        _ => return Completion::Unchanged,
    };

    let needle = partial.to_uppercase();
    let mut matches: Vec<String> = candidates
        .into_iter()
        .filter(|candidate| candidate.starts_with(&needle))
        .collect();
    matches.sort();

    match matches.as_slice() {
        [] => Completion::Unchanged,
        [only] => {
            let mut completed: Vec<&str> = tokens;
            let last = completed.len() - 1;
            if let Some(slot) = completed.get_mut(last) {
                *slot = only.as_str();
            }
            Completion::Applied(completed.join(" "))
        }
        _ => Completion::Suggestions(matches),
    }
}

/// Computes the remaining-parameter hint for the draft line, recomputed on
/// every keystroke and never stored.
///
/// The first token is looked up in the remote parameter-description map
/// (local commands declare no parameters and yield no hint); the declared
/// comma-separated parameters are then sliced past the argument tokens
/// already typed. An exhausted list clears the hint.
pub fn parameter_hint(
    draft: &str,
    remote: Option<&HashMap<String, String>>,
) -> Option<String> {
    let trimmed = draft.trim();
    if trimmed.is_empty() {
        return None;
    }
    let tokens: Vec<&str> = ARGUMENT_SPLIT_RE
        .split(trimmed)
        .filter(|token| !token.is_empty())
        .collect();
    let (name, arguments) = tokens.split_first()?;

    let description = vocabulary::parameter_description(remote, name)?;
    let remaining: Vec<&str> = description
        .split(',')
        .map(str::trim)
        .skip(arguments.len())
        .collect();
    if remaining.is_empty() {
        return None;
    }
    Some(remaining.join(", "))
}
