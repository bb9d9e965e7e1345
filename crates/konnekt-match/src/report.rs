use tracing::{debug, warn};

use konnekt_core::models::{
    AssessmentResult, CohortStrength, CohortSummary, CompatibilityReport, MatchResult,
    ReportStatus, User,
};
use konnekt_core::ratio::percent;

use crate::select::select_best_match;

/// Rank every other user by how closely their answers match the subject's.
///
/// Each candidate contributes at most one row: the best match over the
/// assessments both users took. Rows are sorted descending by percentage with
/// a stable sort, so equal percentages keep the order of `all_users`.
///
/// A candidate whose comparison fails on a malformed record is logged and left
/// out; the rest of the report is unaffected. Malformed subject records are
/// excluded up front.
pub fn build_compatibility_report(
    subject_user_id: &str,
    all_results: &[AssessmentResult],
    all_users: &[User],
) -> CompatibilityReport {
    let subject_all = results_for(all_results, subject_user_id);
    if subject_all.is_empty() {
        return CompatibilityReport::empty(subject_user_id, ReportStatus::NoAssessments);
    }
    if !subject_all.iter().any(|r| r.has_answers()) {
        return CompatibilityReport::empty(subject_user_id, ReportStatus::AnswersMissing);
    }

    let subject_results: Vec<&AssessmentResult> = subject_all
        .into_iter()
        .filter(|r| match r.validate() {
            Ok(()) => true,
            Err(e) => {
                warn!(result_id = %r.id, error = %e, "excluding malformed subject result");
                false
            }
        })
        .collect();

    let mut report = CompatibilityReport::empty(subject_user_id, ReportStatus::Computed);

    for candidate in all_users.iter().filter(|u| u.id != subject_user_id) {
        let candidate_results = results_for(all_results, &candidate.id);

        let selection = match select_best_match(&subject_results, &candidate_results) {
            Ok(selection) => selection,
            Err(e) => {
                warn!(candidate = %candidate.id, error = %e, "skipping candidate");
                continue;
            }
        };
        report.missing_answers_encountered |= selection.missing_answers;

        let Some(best) = selection.best else {
            debug!(candidate = %candidate.id, "no comparable assessment");
            continue;
        };
        debug!(
            candidate = %candidate.id,
            percentage = best.percentage,
            assessment = %best.assessment.assessment_title,
            "best match"
        );

        report.matches.push(MatchResult {
            subject_user_id: subject_user_id.to_string(),
            candidate_user_id: candidate.id.clone(),
            candidate_name: Some(candidate.full_name.clone()),
            category: best.assessment.category.clone(),
            assessment_title: best.assessment.assessment_title.clone(),
            match_percentage: best.percentage,
            compared_questions: best.compared,
        });
    }

    // `sort_by` is stable.
    report
        .matches
        .sort_by(|a, b| b.match_percentage.cmp(&a.match_percentage));
    report.summary = summarize(&report.matches);
    report
}

/// Strong-match aggregate over ranked matches. `None` when there are none.
pub fn summarize(matches: &[MatchResult]) -> Option<CohortSummary> {
    if matches.is_empty() {
        return None;
    }
    let total_comparisons = matches.len() as u32;
    let strong_matches = matches.iter().filter(|m| m.is_strong()).count() as u32;
    let strong_match_rate = percent(strong_matches, total_comparisons);

    Some(CohortSummary {
        total_comparisons,
        strong_matches,
        strong_match_rate,
        cohort: CohortStrength::from_rate(strong_match_rate),
    })
}

fn results_for<'a>(
    all_results: &'a [AssessmentResult],
    user_id: &str,
) -> Vec<&'a AssessmentResult> {
    all_results.iter().filter(|r| r.user_id == user_id).collect()
}
