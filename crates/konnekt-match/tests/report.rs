use konnekt_core::models::{
    AnswerMap, AnswerValue, AssessmentResult, CohortStrength, MatchTier, ReportStatus, User,
};
use konnekt_match::{build_compatibility_report, select_best_match};

const CATEGORY: &str = "myndkonnekt_personality";
const TITLE: &str = "Personality Questionnaire (PQ24)";

/// `total` Likert answers, all 3.
fn baseline(total: u32) -> AnswerMap {
    (0..total).map(|i| (i, AnswerValue::Integer(3))).collect()
}

/// `total` Likert answers where the first `agreeing` equal the baseline.
fn agreeing(total: u32, agreeing: u32) -> AnswerMap {
    (0..total)
        .map(|i| (i, AnswerValue::Integer(if i < agreeing { 3 } else { 1 })))
        .collect()
}

fn result(id: &str, user: &str, total: u32, answers: AnswerMap) -> AssessmentResult {
    AssessmentResult::new(id, user, CATEGORY, TITLE, total, answers)
}

fn users(ids: &[&str]) -> Vec<User> {
    ids.iter().map(|id| User::new(*id, id.to_uppercase())).collect()
}

fn ranked_ids(report: &konnekt_core::models::CompatibilityReport) -> Vec<&str> {
    report
        .matches
        .iter()
        .map(|m| m.candidate_user_id.as_str())
        .collect()
}

#[test]
fn subject_without_results_reports_no_assessments() {
    let results = vec![result("r1", "c1", 4, baseline(4))];
    let report = build_compatibility_report("s", &results, &users(&["s", "c1"]));

    assert_eq!(report.status, ReportStatus::NoAssessments);
    assert!(report.matches.is_empty());
    assert!(report.summary.is_none());
    assert!(!report.missing_answers_encountered);
}

#[test]
fn subject_with_only_empty_results_reports_answers_missing() {
    let results = vec![
        result("r0", "s", 4, AnswerMap::new()),
        result("r1", "c1", 4, baseline(4)),
    ];
    let report = build_compatibility_report("s", &results, &users(&["s", "c1"]));

    assert_eq!(report.status, ReportStatus::AnswersMissing);
    assert!(report.matches.is_empty());
}

#[test]
fn ties_keep_candidate_input_order() {
    let results = vec![
        result("s1", "s", 10, baseline(10)),
        result("r1", "c1", 10, agreeing(10, 4)),
        result("r2", "c2", 10, agreeing(10, 9)),
        result("r3", "c3", 10, agreeing(10, 9)),
    ];
    let report = build_compatibility_report("s", &results, &users(&["c1", "c2", "s", "c3"]));

    assert_eq!(report.status, ReportStatus::Computed);
    assert_eq!(ranked_ids(&report), vec!["c2", "c3", "c1"]);
    let percentages: Vec<u8> = report.matches.iter().map(|m| m.match_percentage).collect();
    assert_eq!(percentages, vec![90, 90, 40]);
    assert_eq!(report.matches[0].compared_questions, 10);
    assert_eq!(report.matches[0].candidate_name.as_deref(), Some("C2"));
    assert_eq!(report.matches[0].tier(), MatchTier::High);
    assert_eq!(report.matches[2].tier(), MatchTier::Low);
}

#[test]
fn strong_cohort_at_threshold() {
    let results = vec![
        result("s1", "s", 10, baseline(10)),
        result("r1", "c1", 10, agreeing(10, 6)),
        result("r2", "c2", 10, agreeing(10, 6)),
        result("r3", "c3", 10, agreeing(10, 5)),
    ];
    let report = build_compatibility_report("s", &results, &users(&["s", "c1", "c2", "c3"]));

    let summary = report.summary.expect("summary");
    assert_eq!(summary.total_comparisons, 3);
    assert_eq!(summary.strong_matches, 2);
    assert_eq!(summary.strong_match_rate, 67);
    assert_eq!(summary.cohort, CohortStrength::StrongCohort);
}

#[test]
fn weak_cohort_just_below_threshold() {
    // 10 of 17 rounds to 59%.
    let results = vec![
        result("s1", "s", 17, baseline(17)),
        result("r1", "c1", 17, agreeing(17, 10)),
        result("r2", "c2", 17, agreeing(17, 10)),
        result("r3", "c3", 17, agreeing(17, 10)),
    ];
    let report = build_compatibility_report("s", &results, &users(&["s", "c1", "c2", "c3"]));

    assert!(report.matches.iter().all(|m| m.match_percentage == 59));
    let summary = report.summary.expect("summary");
    assert_eq!(summary.strong_matches, 0);
    assert_eq!(summary.strong_match_rate, 0);
    assert_eq!(summary.cohort, CohortStrength::WeakCohort);
}

#[test]
fn empty_subject_attempt_does_not_block_answered_one() {
    let results = vec![
        result("s-empty", "s", 10, AnswerMap::new()),
        result("s-full", "s", 10, baseline(10)),
        result("r1", "c1", 10, agreeing(10, 8)),
    ];
    let report = build_compatibility_report("s", &results, &users(&["s", "c1"]));

    assert_eq!(report.status, ReportStatus::Computed);
    assert_eq!(report.matches.len(), 1);
    assert_eq!(report.matches[0].match_percentage, 80);
    assert!(report.missing_answers_encountered);
}

#[test]
fn empty_attempt_without_counterpart_is_not_flagged() {
    let mut other = result("s-other", "s", 5, AnswerMap::new());
    other.category = "myndkonnekt_behavioral".to_string();
    other.assessment_title = "Behavioral Skills & Issues Measure (BSM24)".to_string();

    let results = vec![
        other,
        result("s-full", "s", 10, baseline(10)),
        result("r1", "c1", 10, agreeing(10, 8)),
    ];
    let report = build_compatibility_report("s", &results, &users(&["s", "c1"]));

    assert_eq!(report.matches.len(), 1);
    assert!(!report.missing_answers_encountered);
}

#[test]
fn candidate_with_empty_counterpart_is_flagged_and_omitted() {
    let results = vec![
        result("s1", "s", 10, baseline(10)),
        result("r1", "c1", 10, AnswerMap::new()),
        result("r2", "c2", 10, agreeing(10, 7)),
    ];
    let report = build_compatibility_report("s", &results, &users(&["s", "c1", "c2"]));

    assert_eq!(ranked_ids(&report), vec!["c2"]);
    assert!(report.missing_answers_encountered);
}

#[test]
fn candidate_without_shared_assessment_is_omitted() {
    let mut unrelated = result("r1", "c1", 10, baseline(10));
    unrelated.assessment_title = "Personality Questionnaire (PQ24) v2".to_string();

    let results = vec![result("s1", "s", 10, baseline(10)), unrelated];
    let report = build_compatibility_report("s", &results, &users(&["s", "c1"]));

    assert_eq!(report.status, ReportStatus::Computed);
    assert!(report.matches.is_empty());
    assert!(report.summary.is_none());
    assert!(!report.missing_answers_encountered);
}

#[test]
fn malformed_candidate_record_degrades_one_row() {
    let results = vec![
        result("s1", "s", 10, baseline(10)),
        result("bad", "c1", 0, baseline(10)),
        result("r2", "c2", 10, agreeing(10, 10)),
    ];
    let report = build_compatibility_report("s", &results, &users(&["s", "c1", "c2"]));

    assert_eq!(ranked_ids(&report), vec!["c2"]);
    assert_eq!(report.matches[0].match_percentage, 100);
}

#[test]
fn malformed_subject_record_is_excluded() {
    let mut bad = result("s-bad", "s", 10, baseline(10));
    bad.category = String::new();

    let results = vec![
        bad,
        result("s1", "s", 10, baseline(10)),
        result("r1", "c1", 10, agreeing(10, 7)),
    ];
    let report = build_compatibility_report("s", &results, &users(&["s", "c1"]));

    assert_eq!(report.matches.len(), 1);
    assert_eq!(report.matches[0].match_percentage, 70);
}

#[test]
fn best_match_keeps_first_subject_result_on_tie() {
    let first = result("s1", "s", 4, baseline(4));
    let second = result("s2", "s", 4, baseline(4));
    let candidate = result("r1", "c1", 4, agreeing(4, 2));

    let selection = select_best_match(&[&first, &second], &[&candidate]).unwrap();
    let best = selection.best.expect("best match");
    assert_eq!(best.assessment.id, "s1");
    assert_eq!(best.percentage, 50);
    assert!(!selection.missing_answers);
}

#[test]
fn best_match_picks_highest_across_assessments() {
    let personality = result("s1", "s", 4, baseline(4));
    let mut behavioral = result("s2", "s", 4, baseline(4));
    behavioral.category = "myndkonnekt_behavioral".to_string();

    let c_personality = result("r1", "c1", 4, agreeing(4, 1));
    let mut c_behavioral = result("r2", "c1", 4, agreeing(4, 3));
    c_behavioral.category = "myndkonnekt_behavioral".to_string();

    let selection =
        select_best_match(&[&personality, &behavioral], &[&c_personality, &c_behavioral]).unwrap();
    let best = selection.best.expect("best match");
    assert_eq!(best.assessment.id, "s2");
    assert_eq!(best.percentage, 75);
}

#[test]
fn zero_percent_overlap_still_ranks() {
    let results = vec![
        result("s1", "s", 4, baseline(4)),
        result("r1", "c1", 4, agreeing(4, 0)),
    ];
    let report = build_compatibility_report("s", &results, &users(&["s", "c1"]));

    assert_eq!(report.matches.len(), 1);
    assert_eq!(report.matches[0].match_percentage, 0);
}

#[test]
fn pair_without_shared_answered_question_is_not_ranked() {
    let subject: AnswerMap = [(0, 3), (1, 3)]
        .into_iter()
        .map(|(i, v)| (i, AnswerValue::Integer(v)))
        .collect();
    let disjoint: AnswerMap = [(2, 3), (3, 3)]
        .into_iter()
        .map(|(i, v)| (i, AnswerValue::Integer(v)))
        .collect();

    let results = vec![
        result("s1", "s", 4, subject.clone()),
        result("r1", "c1", 4, disjoint),
        result("r2", "c2", 4, subject),
    ];
    let report = build_compatibility_report("s", &results, &users(&["s", "c1", "c2"]));

    assert_eq!(ranked_ids(&report), vec!["c2"]);
    assert_eq!(report.matches[0].match_percentage, 100);
    assert_eq!(report.matches[0].compared_questions, 2);
    assert!(!report.missing_answers_encountered);

    let summary = report.summary.expect("summary");
    assert_eq!(summary.total_comparisons, 1);
    assert_eq!(summary.strong_match_rate, 100);
    assert_eq!(summary.cohort, CohortStrength::StrongCohort);
}

#[test]
fn match_tier_boundaries() {
    assert_eq!(MatchTier::from_percentage(0), MatchTier::Low);
    assert_eq!(MatchTier::from_percentage(49), MatchTier::Low);
    assert_eq!(MatchTier::from_percentage(50), MatchTier::Moderate);
    assert_eq!(MatchTier::from_percentage(79), MatchTier::Moderate);
    assert_eq!(MatchTier::from_percentage(80), MatchTier::High);
    assert_eq!(MatchTier::from_percentage(100), MatchTier::High);
}

#[test]
fn inputs_are_not_mutated() {
    let results = vec![
        result("s1", "s", 4, baseline(4)),
        result("r1", "c1", 4, agreeing(4, 2)),
    ];
    let before = results.clone();
    let _ = build_compatibility_report("s", &results, &users(&["s", "c1"]));
    assert_eq!(results, before);
}

#[test]
fn cohort_serializes_kebab_case() {
    let json = serde_json::to_string(&CohortStrength::StrongCohort).unwrap();
    assert_eq!(json, "\"strong-cohort\"");
    let json = serde_json::to_string(&CohortStrength::WeakCohort).unwrap();
    assert_eq!(json, "\"weak-cohort\"");
}
