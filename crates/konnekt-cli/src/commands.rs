use konnekt_core::models::{AnswerMap, AssessmentResult, CompatibilityReport};
use konnekt_instruments::error::InstrumentError;
use konnekt_instruments::get_instrument;
use konnekt_instruments::scoring::InstrumentScore;
use konnekt_instruments::submission::{build_result, Submission};
use konnekt_match::{build_compatibility_report, compare_answers, MatchScore};
use konnekt_storage::snapshot::{append_result, Snapshot};
use konnekt_storage::store::KeyValueStore;

/// Compatibility report for `user_id` against every other stored user.
pub fn report(snapshot: &Snapshot, user_id: &str) -> eyre::Result<CompatibilityReport> {
    if snapshot.user(user_id).is_none() {
        return Err(eyre::eyre!("unknown user: {user_id}"));
    }
    Ok(build_compatibility_report(
        user_id,
        &snapshot.results,
        &snapshot.users,
    ))
}

/// Pairwise score between two stored results, bounded by the first result's
/// question count.
pub fn pair_match(
    snapshot: &Snapshot,
    first_id: &str,
    second_id: &str,
) -> eyre::Result<MatchScore> {
    let first = find_result(snapshot, first_id)?;
    let second = find_result(snapshot, second_id)?;
    if first.key() != second.key() {
        tracing::warn!(
            first = %first.id,
            second = %second.id,
            "results belong to different assessments"
        );
    }
    Ok(compare_answers(
        &first.answers,
        &second.answers,
        first.total_questions,
    ))
}

/// Re-score a stored result with its instrument.
pub fn score(snapshot: &Snapshot, result_id: &str) -> eyre::Result<InstrumentScore> {
    let result = find_result(snapshot, result_id)?;
    let instrument = get_instrument(&result.category)
        .ok_or_else(|| InstrumentError::UnknownInstrument(result.category.clone()))?;
    Ok(instrument.score(&result.answers))
}

/// Score a finished attempt and append it to the store.
pub fn submit(
    store: &KeyValueStore,
    user_id: &str,
    category: &str,
    answers: AnswerMap,
    time_spent: u64,
) -> eyre::Result<AssessmentResult> {
    let instrument = get_instrument(category)
        .ok_or_else(|| InstrumentError::UnknownInstrument(category.to_string()))?;
    let completed_at = jiff::Timestamp::now();
    let submission = Submission {
        result_id: new_result_id(completed_at),
        user_id: user_id.to_string(),
        answers,
        time_spent,
        completed_at,
    };
    let result = build_result(instrument.as_ref(), submission)?;
    append_result(store, &result)?;
    Ok(result)
}

fn find_result<'a>(snapshot: &'a Snapshot, id: &str) -> eyre::Result<&'a AssessmentResult> {
    snapshot
        .result(id)
        .ok_or_else(|| eyre::eyre!("unknown assessment result: {id}"))
}

fn new_result_id(at: jiff::Timestamp) -> String {
    let suffix = uuid::Uuid::new_v4().simple().to_string();
    format!("assessment_{}_{}", at.as_millisecond(), &suffix[..9])
}
