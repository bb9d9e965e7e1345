//! konnekt-instruments
//!
//! Assessment definitions. Pure data — no I/O. Defines the questions,
//! subscales, and scoring rules for each assessment the portal offers, and
//! turns a set of answers into a stored result.

pub mod error;
pub mod instruments;
pub mod scoring;
pub mod submission;

use konnekt_core::models::AnswerMap;
use konnekt_core::ratio::percent;

use scoring::{round_2dp, InstrumentScore, Question, QuestionKind, SubscaleScore, ValidationError};

/// Trait implemented by each assessment.
pub trait Instrument: Send + Sync {
    /// Category key stored on results (e.g., "myndkonnekt_personality").
    fn category(&self) -> &str;

    /// Title stored on results. Together with the category this identifies the
    /// assessment when matching users.
    fn title(&self) -> &str;

    fn description(&self) -> &str;

    fn time_limit_minutes(&self) -> u32;

    fn questions(&self) -> &[Question];

    fn total_questions(&self) -> u32 {
        self.questions().len() as u32
    }

    /// An assessment is scored as Likert when its first question is Likert.
    fn is_likert(&self) -> bool {
        self.questions()
            .first()
            .is_some_and(|q| q.kind == QuestionKind::Likert)
    }

    /// Subscale names in order of first appearance.
    fn subscales(&self) -> Vec<&str> {
        let mut names: Vec<&str> = Vec::new();
        for name in self.questions().iter().filter_map(|q| q.subscale.as_deref()) {
            if !names.contains(&name) {
                names.push(name);
            }
        }
        names
    }

    /// Check every recorded answer against its question.
    fn validate_answers(&self, answers: &AnswerMap) -> Vec<ValidationError> {
        let questions = self.questions();
        let mut errors = Vec::new();
        for (index, answer) in answers.iter() {
            let Some(question) = questions.get(index as usize) else {
                errors.push(ValidationError {
                    question_index: index,
                    message: format!(
                        "{}: question {} does not exist ({} questions)",
                        self.title(),
                        index,
                        questions.len(),
                    ),
                });
                continue;
            };
            if !question.kind.accepts(answer) {
                errors.push(ValidationError {
                    question_index: index,
                    message: format!(
                        "{}: question {} expects a {:?} answer, got {}",
                        self.title(),
                        index,
                        question.kind,
                        answer.kind(),
                    ),
                });
                continue;
            }
            if question.kind == QuestionKind::Likert
                && let Some(value) = answer.as_integer()
                && !(scoring::LIKERT_MIN..=scoring::LIKERT_MAX).contains(&value)
            {
                errors.push(ValidationError {
                    question_index: index,
                    message: format!(
                        "{}: question {} response {} is outside [{}, {}]",
                        self.title(),
                        index,
                        value,
                        scoring::LIKERT_MIN,
                        scoring::LIKERT_MAX,
                    ),
                });
            }
        }
        errors
    }

    /// Every question has an answer.
    fn is_complete(&self, answers: &AnswerMap) -> bool {
        let total = self.total_questions();
        (0..total).all(|i| answers.get(i).is_some())
    }

    fn score(&self, answers: &AnswerMap) -> InstrumentScore {
        if self.is_likert() {
            score_likert(self.questions(), answers)
        } else {
            score_knowledge(self.questions(), answers)
        }
    }
}

fn score_likert(questions: &[Question], answers: &AnswerMap) -> InstrumentScore {
    // (name, total, count) in order of first answered appearance
    let mut totals: Vec<(&str, i64, u32)> = Vec::new();
    for (index, question) in questions.iter().enumerate() {
        let Some(response) = answers.get(index as u32).and_then(|a| a.as_integer()) else {
            continue;
        };
        let name = question.subscale.as_deref().unwrap_or("General");
        let keyed = question.keyed(response);
        match totals.iter_mut().find(|(n, _, _)| *n == name) {
            Some(entry) => {
                entry.1 += keyed;
                entry.2 += 1;
            }
            None => totals.push((name, keyed, 1)),
        }
    }

    let subscales: Vec<SubscaleScore> = totals
        .into_iter()
        .map(|(name, total, count)| SubscaleScore {
            subscale: name.to_string(),
            mean: round_2dp(total as f64 / f64::from(count)),
            answered: count,
        })
        .collect();

    let overall = if subscales.is_empty() {
        0
    } else {
        let mean = subscales.iter().map(|s| s.mean).sum::<f64>() / subscales.len() as f64;
        (mean * 20.0).round() as u32
    };

    InstrumentScore::Likert { subscales, overall }
}

fn score_knowledge(questions: &[Question], answers: &AnswerMap) -> InstrumentScore {
    let total_questions = questions.len() as u32;
    let correct_answers = questions
        .iter()
        .enumerate()
        .filter(|(index, question)| {
            match (answers.get(*index as u32), &question.correct_answer) {
                (Some(given), Some(expected)) => given == expected,
                _ => false,
            }
        })
        .count() as u32;

    InstrumentScore::Knowledge {
        total_questions,
        correct_answers,
        percentage: percent(correct_answers, total_questions),
    }
}

/// Return all registered instruments.
pub fn all_instruments() -> Vec<Box<dyn Instrument>> {
    vec![
        Box::new(instruments::pq24::Pq24),
        Box::new(instruments::bsm24::Bsm24),
    ]
}

/// Look up an instrument by category key.
pub fn get_instrument(category: &str) -> Option<Box<dyn Instrument>> {
    all_instruments()
        .into_iter()
        .find(|i| i.category() == category)
}
