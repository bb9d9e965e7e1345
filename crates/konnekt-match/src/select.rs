use konnekt_core::models::AssessmentResult;

use crate::compare::compare_answers;
use crate::error::MatchError;

/// The subject assessment that produced the highest match against one
/// candidate.
#[derive(Debug, Clone, Copy)]
pub struct BestMatch<'a> {
    pub percentage: u8,
    pub compared: u32,
    pub assessment: &'a AssessmentResult,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct Selection<'a> {
    /// `None` when no comparable pair existed.
    pub best: Option<BestMatch<'a>>,
    /// An overlapping pair was skipped because one side had no answers.
    pub missing_answers: bool,
}

/// Find the best-matching assessment between a subject's results and one
/// candidate's results.
///
/// Subject results are visited in slice order, and a later result only
/// replaces the current best when strictly higher, so ties resolve to the
/// first. For each subject result the first candidate result with the same
/// category and title is its counterpart. A pair where either side has an
/// empty answer map is skipped and flagged. A subject result with no
/// counterpart, or whose answers share no index with it, is skipped silently.
///
/// Returns [`MatchError::MalformedRecord`] when a record that would take part
/// in a comparison lacks a category, title, or question count.
pub fn select_best_match<'a>(
    subject_results: &[&'a AssessmentResult],
    candidate_results: &[&AssessmentResult],
) -> Result<Selection<'a>, MatchError> {
    let mut selection = Selection::default();

    for &subject in subject_results {
        ensure_well_formed(subject)?;

        let Some(counterpart) = candidate_results
            .iter()
            .copied()
            .find(|c| c.key() == subject.key())
        else {
            continue;
        };
        ensure_well_formed(counterpart)?;

        if !subject.has_answers() || !counterpart.has_answers() {
            selection.missing_answers = true;
            continue;
        }

        let score = compare_answers(
            &subject.answers,
            &counterpart.answers,
            subject.total_questions,
        );
        if score.compared == 0 {
            continue;
        }

        let improves = selection
            .best
            .is_none_or(|best| score.percentage > best.percentage);
        if improves {
            selection.best = Some(BestMatch {
                percentage: score.percentage,
                compared: score.compared,
                assessment: subject,
            });
        }
    }

    Ok(selection)
}

fn ensure_well_formed(result: &AssessmentResult) -> Result<(), MatchError> {
    result
        .validate()
        .map_err(|source| MatchError::MalformedRecord {
            result_id: result.id.clone(),
            source,
        })
}
