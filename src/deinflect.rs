//! Deinflection of conjugated Japanese surface forms.
//!
//! Given an inflected word, [`deinflect`] produces every citation-form
//! hypothesis the rule table supports. Candidates are hypotheses only: they
//! are not checked against a dictionary, and a caller is expected to probe
//! each one, in order, against an authoritative source.

mod rules;


/// Upper bound on the candidates a single expansion may produce. Every rule
/// shrinks its input or rewrites it to a fixed citation form, so real input
/// stays far below this; the cap keeps a bad rule edit from looping forever.
const MAX_CANDIDATES: usize = 1024;

/// A single deinflection rule.
///
/// Rules never inspect more of a candidate than the matched span, so several
/// rules may fire for the same input, each producing an independent
/// hypothesis.
#[derive(Debug, Clone, Copy)]
enum Rule {
    /// Replace a matched suffix with each of the given alternatives.
    Suffix(&'static str, &'static [&'static str]),
    /// Replace a matched prefix with the given text.
    Prefix(&'static str, &'static str),
    /// Append the citation form of an irregular word on an exact match.
    Word(&'static str, &'static str),
    /// Drop a matched suffix, then rewrite an あ-row stem ending to its
    /// dictionary う-row ending.
    ARowToU(&'static str),
    /// Drop a matched suffix, then rewrite an い-row stem ending to its
    /// dictionary う-row ending.
    IRowToU(&'static str),
}

impl Rule {
    /// Append this rule's candidates for `word` to `out`.
    fn apply(&self, word: &str, out: &mut Vec<String>) {
        match *self {
            Rule::Suffix(pattern, alternatives) => {
                if let Some(stem) = word.strip_suffix(pattern) {
                    for alternative in alternatives {
                        out.push(concat(stem, alternative));
                    }
                }
            }
            Rule::Prefix(pattern, replacement) => {
                if let Some(rest) = word.strip_prefix(pattern) {
                    out.push(concat(replacement, rest));
                }
            }
            Rule::Word(pattern, citation) => {
                if word == pattern {
                    out.push(citation.to_owned());
                }
            }
            Rule::ARowToU(pattern) => {
                if let Some(stem) = word.strip_suffix(pattern) {
                    convert_row(stem, rules::A_ROW_TO_U, out);
                }
            }
            Rule::IRowToU(pattern) => {
                if let Some(stem) = word.strip_suffix(pattern) {
                    convert_row(stem, rules::I_ROW_TO_U, out);
                }
            }
        }
    }
}

/// Produce every citation-form hypothesis for `word`.
///
/// The result is freshly allocated and owned by the caller, in production
/// order, duplicates permitted. An empty result means no rule matched, not
/// an error.
pub fn deinflect(word: &str) -> Vec<String> {
    let mut candidates = Vec::new();

    apply_groups(word, &mut candidates);

    // Candidates are themselves deinflected until a full pass over the tail
    // of the sequence produces nothing new.
    let mut cursor = 0;

    while cursor < candidates.len() {
        if candidates.len() >= MAX_CANDIDATES {
            tracing::warn!("expansion of {word} stopped at {MAX_CANDIDATES} candidates");
            break;
        }

        let current = candidates[cursor].clone();
        apply_groups(&current, &mut candidates);
        cursor += 1;
    }

    // The word may already be an い-row stem, e.g. 飲み.
    if candidates.is_empty() {
        convert_row(word, rules::I_ROW_TO_U, &mut candidates);
    }

    candidates
}

/// Run every rule group against `word` in the fixed evaluation order.
fn apply_groups(word: &str, out: &mut Vec<String>) {
    for group in rules::GROUPS {
        for rule in *group {
            rule.apply(word, out);
        }
    }
}

/// Emit `stem` with each matching row ending rewritten to its dictionary
/// ending. Every matching row fires; ambiguity is left to the caller.
fn convert_row(stem: &str, table: &[(&str, &str)], out: &mut Vec<String>) {
    for (ending, dictionary) in table {
        if let Some(base) = stem.strip_suffix(ending) {
            out.push(concat(base, dictionary));
        }
    }
}

fn concat(head: &str, tail: &str) -> String {
    let mut string = String::with_capacity(head.len() + tail.len());
    string.push_str(head);
    string.push_str(tail);
    string
}
