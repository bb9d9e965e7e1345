use serde::{Deserialize, Serialize};
use ts_rs::TS;

use konnekt_core::models::{AnswerMap, AnswerValue};
use konnekt_core::ratio::percent;

/// Outcome of comparing two answer maps question by question.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct MatchScore {
    /// Questions answered on both sides.
    pub compared: u32,
    /// Compared questions whose answers are equal.
    pub matched: u32,
    /// 0–100. Zero when nothing was comparable.
    pub percentage: u8,
}

/// Compare two answer maps over question indices `0..total_questions`.
///
/// The bound is the nominal question count of the assessment, not the size of
/// either map: entries at or past `total_questions` are never examined.
/// Questions missing from either side are skipped rather than counted as
/// mismatches.
pub fn compare_answers(a: &AnswerMap, b: &AnswerMap, total_questions: u32) -> MatchScore {
    let mut compared = 0;
    let mut matched = 0;

    for index in 0..total_questions {
        let (Some(left), Some(right)) = (a.get(index), b.get(index)) else {
            continue;
        };
        compared += 1;
        if answers_equal(left, right) {
            matched += 1;
        }
    }

    MatchScore {
        compared,
        matched,
        percentage: percent(matched, compared),
    }
}

/// Match percentage between two answer maps. See [`compare_answers`].
pub fn compute_match(a: &AnswerMap, b: &AnswerMap, total_questions: u32) -> u8 {
    compare_answers(a, b, total_questions).percentage
}

/// Kind-dependent equality.
///
/// Sequences compare position by position, so a permuted ranking is not a
/// match. Text compares trimmed and case-folded. Everything else is strict:
/// an integer never equals text, even `4` and `"4"`.
pub fn answers_equal(a: &AnswerValue, b: &AnswerValue) -> bool {
    match (a, b) {
        (AnswerValue::Sequence(x), AnswerValue::Sequence(y)) => x == y,
        (AnswerValue::Text(x), AnswerValue::Text(y)) => fold_text(x) == fold_text(y),
        (AnswerValue::Integer(x), AnswerValue::Integer(y)) => x == y,
        _ => false,
    }
}

fn fold_text(s: &str) -> String {
    s.trim().to_lowercase()
}
