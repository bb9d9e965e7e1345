use serde::{Deserialize, Serialize};
use thiserror::Error;
use ts_rs::TS;

use konnekt_core::models::AnswerValue;

/// Lowest and highest points on the Likert scale.
pub const LIKERT_MIN: i64 = 1;
pub const LIKERT_MAX: i64 = 5;

/// How a question is presented and what shape of answer it records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum QuestionKind {
    /// 1–5 agreement scale. Integer answer.
    Likert,
    /// One option. Integer answer (option index).
    MultipleChoice,
    /// Several options. Sequence answer.
    MultipleSelect,
    /// Options in order. Sequence answer.
    Ranking,
    /// Star rating. Integer answer.
    RatingScale,
    /// Free text.
    TextInput,
}

impl QuestionKind {
    /// Whether `answer` has the shape this kind of question records.
    pub fn accepts(&self, answer: &AnswerValue) -> bool {
        match self {
            QuestionKind::Likert | QuestionKind::MultipleChoice | QuestionKind::RatingScale => {
                matches!(answer, AnswerValue::Integer(_))
            }
            QuestionKind::MultipleSelect | QuestionKind::Ranking => {
                matches!(answer, AnswerValue::Sequence(_))
            }
            QuestionKind::TextInput => matches!(answer, AnswerValue::Text(_)),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Question {
    pub text: String,
    pub kind: QuestionKind,
    /// Likert questions only.
    pub subscale: Option<String>,
    /// Likert questions only. Reverse-keyed items score as `6 - response`.
    #[serde(default)]
    pub reverse: bool,
    /// Knowledge questions only. `None` means the question never counts as correct.
    pub correct_answer: Option<AnswerValue>,
}

impl Question {
    pub fn likert(subscale: &str, text: &str, reverse: bool) -> Self {
        Self {
            text: text.to_string(),
            kind: QuestionKind::Likert,
            subscale: Some(subscale.to_string()),
            reverse,
            correct_answer: None,
        }
    }

    pub fn knowledge(kind: QuestionKind, text: &str, correct_answer: Option<AnswerValue>) -> Self {
        Self {
            text: text.to_string(),
            kind,
            subscale: None,
            reverse: false,
            correct_answer,
        }
    }

    /// Likert response after reverse keying.
    pub fn keyed(&self, response: i64) -> i64 {
        if self.reverse {
            LIKERT_MIN + LIKERT_MAX - response
        } else {
            response
        }
    }
}

/// Mean keyed response for one subscale.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct SubscaleScore {
    pub subscale: String,
    /// Rounded to two decimals.
    pub mean: f64,
    pub answered: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(tag = "type", rename_all = "snake_case")]
#[ts(export)]
pub enum InstrumentScore {
    Likert {
        /// In order of first appearance in the instrument.
        subscales: Vec<SubscaleScore>,
        /// Mean of subscale means mapped onto 0–100 (1 → 20, 5 → 100).
        overall: u32,
    },
    Knowledge {
        total_questions: u32,
        correct_answers: u32,
        percentage: u8,
    },
}

impl InstrumentScore {
    pub fn overall(&self) -> u32 {
        match self {
            InstrumentScore::Likert { overall, .. } => *overall,
            InstrumentScore::Knowledge { percentage, .. } => u32::from(*percentage),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, TS, Error)]
#[ts(export)]
#[error("{message}")]
pub struct ValidationError {
    pub question_index: u32,
    pub message: String,
}

pub(crate) fn round_2dp(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
