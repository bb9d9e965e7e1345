use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::answer::AnswerMap;
use crate::error::CoreError;

/// One completed (or partially completed) assessment attempt by one user.
///
/// Field names follow the portal's stored records, so a snapshot of the
/// `assessmentResults` key deserializes directly.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct AssessmentResult {
    pub id: String,
    pub user_id: String,
    pub category: String,
    pub assessment_title: String,
    pub total_questions: u32,
    #[serde(default)]
    pub answers: AnswerMap,

    // Record metadata written at submission time. The matcher ignores it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub answered_questions: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub correct_answers: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub score: Option<u32>,
    /// Seconds.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time_spent: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub completed_at: Option<jiff::Timestamp>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subscale_scores: Option<serde_json::Value>,
    #[serde(default)]
    pub is_likert_assessment: bool,
}

impl AssessmentResult {
    /// A bare result with no metadata.
    pub fn new(
        id: impl Into<String>,
        user_id: impl Into<String>,
        category: impl Into<String>,
        assessment_title: impl Into<String>,
        total_questions: u32,
        answers: AnswerMap,
    ) -> Self {
        Self {
            id: id.into(),
            user_id: user_id.into(),
            category: category.into(),
            assessment_title: assessment_title.into(),
            total_questions,
            answers,
            answered_questions: None,
            correct_answers: None,
            score: None,
            time_spent: None,
            completed_at: None,
            subscale_scores: None,
            is_likert_assessment: false,
        }
    }

    pub fn key(&self) -> AssessmentKey<'_> {
        AssessmentKey {
            category: &self.category,
            assessment_title: &self.assessment_title,
        }
    }

    pub fn has_answers(&self) -> bool {
        !self.answers.is_empty()
    }

    /// Check the fields the matcher relies on.
    pub fn validate(&self) -> Result<(), CoreError> {
        if self.category.trim().is_empty() {
            return Err(CoreError::MissingField("category".to_string()));
        }
        if self.assessment_title.trim().is_empty() {
            return Err(CoreError::MissingField("assessmentTitle".to_string()));
        }
        if self.total_questions == 0 {
            return Err(CoreError::MissingField("totalQuestions".to_string()));
        }
        Ok(())
    }
}

/// Identifies "the same assessment" across users: category and title, compared
/// exactly. There is no template version, so a retitled assessment is a
/// different assessment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AssessmentKey<'a> {
    pub category: &'a str,
    pub assessment_title: &'a str,
}
