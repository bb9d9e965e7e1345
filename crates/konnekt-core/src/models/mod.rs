pub mod answer;
pub mod assessment;
pub mod report;
pub mod user;

pub use answer::{Answer, AnswerMap, AnswerValue};
pub use assessment::{AssessmentKey, AssessmentResult};
pub use report::{
    CohortStrength, CohortSummary, CompatibilityReport, MatchResult, MatchTier, ReportStatus,
};
pub use user::{User, UserRole};
