use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// A respondent's value for one question.
///
/// The shape follows the question kind: Likert, rating and single-choice
/// questions record an integer, ranking and multiple-select questions record
/// a list of option indices, and text questions record free text. On the wire
/// the variant is inferred from the JSON type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(untagged)]
#[ts(export)]
pub enum AnswerValue {
    Integer(i64),
    Sequence(Vec<i64>),
    Text(String),
}

impl AnswerValue {
    pub fn as_integer(&self) -> Option<i64> {
        match self {
            AnswerValue::Integer(v) => Some(*v),
            _ => None,
        }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            AnswerValue::Integer(_) => "integer",
            AnswerValue::Sequence(_) => "sequence",
            AnswerValue::Text(_) => "text",
        }
    }
}

impl From<i64> for AnswerValue {
    fn from(v: i64) -> Self {
        AnswerValue::Integer(v)
    }
}

impl From<Vec<i64>> for AnswerValue {
    fn from(v: Vec<i64>) -> Self {
        AnswerValue::Sequence(v)
    }
}

impl From<&str> for AnswerValue {
    fn from(v: &str) -> Self {
        AnswerValue::Text(v.to_string())
    }
}

/// The stored wrapper around a single answer (`{ "answer": ... }`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Answer {
    pub answer: AnswerValue,
}

/// Sparse question-index → answer map. Unanswered questions are absent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(transparent)]
#[ts(export)]
pub struct AnswerMap(BTreeMap<u32, Answer>);

impl AnswerMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, index: u32) -> Option<&AnswerValue> {
        self.0.get(&index).map(|a| &a.answer)
    }

    pub fn insert(&mut self, index: u32, value: impl Into<AnswerValue>) {
        self.0.insert(
            index,
            Answer {
                answer: value.into(),
            },
        );
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (u32, &AnswerValue)> {
        self.0.iter().map(|(i, a)| (*i, &a.answer))
    }
}

impl<V: Into<AnswerValue>> FromIterator<(u32, V)> for AnswerMap {
    fn from_iter<I: IntoIterator<Item = (u32, V)>>(iter: I) -> Self {
        let mut map = AnswerMap::new();
        for (index, value) in iter {
            map.insert(index, value);
        }
        map
    }
}
