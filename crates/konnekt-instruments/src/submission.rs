use serde_json::{Map, Value};

use konnekt_core::models::{AnswerMap, AssessmentResult};

use crate::error::InstrumentError;
use crate::scoring::InstrumentScore;
use crate::Instrument;

/// A finished attempt, before it becomes a stored result.
#[derive(Debug, Clone)]
pub struct Submission {
    pub result_id: String,
    pub user_id: String,
    pub answers: AnswerMap,
    /// Seconds.
    pub time_spent: u64,
    pub completed_at: jiff::Timestamp,
}

/// Score a submission and build the result record the portal stores.
///
/// Rejects answers that fail validation, and attempts that leave any question
/// unanswered: a stored result always has a full answer map.
pub fn build_result(
    instrument: &dyn Instrument,
    submission: Submission,
) -> Result<AssessmentResult, InstrumentError> {
    if let Some(error) = instrument
        .validate_answers(&submission.answers)
        .into_iter()
        .next()
    {
        return Err(error.into());
    }

    let total = instrument.total_questions();
    if !instrument.is_complete(&submission.answers) {
        return Err(InstrumentError::Incomplete {
            category: instrument.category().to_string(),
            answered: submission.answers.len() as u32,
            total,
        });
    }

    let answered = submission.answers.len() as u32;
    let score = instrument.score(&submission.answers);
    let (correct_answers, subscale_scores) = match &score {
        // Every answered Likert item counts as correct.
        InstrumentScore::Likert { subscales, .. } => {
            let mut map = Map::new();
            for s in subscales {
                map.insert(s.subscale.clone(), Value::String(format!("{:.2}", s.mean)));
            }
            (answered, Some(Value::Object(map)))
        }
        InstrumentScore::Knowledge {
            correct_answers, ..
        } => (*correct_answers, None),
    };

    let mut result = AssessmentResult::new(
        submission.result_id,
        submission.user_id,
        instrument.category(),
        instrument.title(),
        total,
        submission.answers,
    );
    result.answered_questions = Some(answered);
    result.correct_answers = Some(correct_answers);
    result.score = Some(score.overall());
    result.time_spent = Some(submission.time_spent);
    result.completed_at = Some(submission.completed_at);
    result.subscale_scores = subscale_scores;
    result.is_likert_assessment = instrument.is_likert();
    Ok(result)
}
