use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// A best match at or above this percentage counts as a strong match.
pub const STRONG_MATCH_THRESHOLD: u8 = 60;

/// A strong-match rate at or above this percentage makes a strong cohort.
pub const STRONG_COHORT_THRESHOLD: u8 = 60;

/// The best-matching assessment between a subject and one other user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct MatchResult {
    pub subject_user_id: String,
    pub candidate_user_id: String,
    pub candidate_name: Option<String>,
    pub category: String,
    pub assessment_title: String,
    /// 0–100.
    pub match_percentage: u8,
    pub compared_questions: u32,
}

impl MatchResult {
    pub fn is_strong(&self) -> bool {
        self.match_percentage >= STRONG_MATCH_THRESHOLD
    }

    pub fn tier(&self) -> MatchTier {
        MatchTier::from_percentage(self.match_percentage)
    }
}

/// Coarse grading of a single match percentage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum MatchTier {
    /// 80 and above.
    High,
    /// 50–79.
    Moderate,
    Low,
}

impl MatchTier {
    pub fn from_percentage(percentage: u8) -> Self {
        match percentage {
            80.. => MatchTier::High,
            50..=79 => MatchTier::Moderate,
            _ => MatchTier::Low,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum ReportStatus {
    /// The subject has no assessment results at all.
    NoAssessments,
    /// The subject has results, but none carry recorded answers.
    AnswersMissing,
    /// Candidates were compared. `matches` may still be empty.
    Computed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "kebab-case")]
#[ts(export)]
pub enum CohortStrength {
    StrongCohort,
    WeakCohort,
}

impl CohortStrength {
    pub fn from_rate(strong_match_rate: u8) -> Self {
        if strong_match_rate >= STRONG_COHORT_THRESHOLD {
            CohortStrength::StrongCohort
        } else {
            CohortStrength::WeakCohort
        }
    }
}

/// Aggregate over the ranked matches. Only present when at least one
/// candidate matched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct CohortSummary {
    pub total_comparisons: u32,
    pub strong_matches: u32,
    pub strong_match_rate: u8,
    pub cohort: CohortStrength,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct CompatibilityReport {
    pub subject_user_id: String,
    pub status: ReportStatus,
    /// One row per matched candidate, descending by `match_percentage`.
    pub matches: Vec<MatchResult>,
    pub summary: Option<CohortSummary>,
    pub missing_answers_encountered: bool,
}

impl CompatibilityReport {
    pub fn empty(subject_user_id: impl Into<String>, status: ReportStatus) -> Self {
        Self {
            subject_user_id: subject_user_id.into(),
            status,
            matches: Vec::new(),
            summary: None,
            missing_answers_encountered: false,
        }
    }
}
