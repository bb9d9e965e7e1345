use konnekt_core::models::{AnswerMap, AnswerValue};
use konnekt_match::compare::answers_equal;
use konnekt_match::{compare_answers, compute_match};

fn map(entries: &[(u32, AnswerValue)]) -> AnswerMap {
    entries.iter().cloned().collect()
}

fn int(v: i64) -> AnswerValue {
    AnswerValue::Integer(v)
}

fn seq(v: &[i64]) -> AnswerValue {
    AnswerValue::Sequence(v.to_vec())
}

fn text(v: &str) -> AnswerValue {
    AnswerValue::Text(v.to_string())
}

fn mixed_pair() -> (AnswerMap, AnswerMap) {
    let a = map(&[
        (0, int(4)),
        (1, seq(&[1, 2, 3])),
        (2, text("Team player")),
        (3, int(2)),
        (5, text("4")),
    ]);
    let b = map(&[
        (0, int(4)),
        (1, seq(&[1, 3, 2])),
        (2, text("  team PLAYER ")),
        (4, int(5)),
        (5, int(4)),
    ]);
    (a, b)
}

#[test]
fn comparison_is_symmetric() {
    let (a, b) = mixed_pair();
    for n in 0..8 {
        assert_eq!(compute_match(&a, &b, n), compute_match(&b, &a, n), "n = {n}");
        assert_eq!(compare_answers(&a, &b, n), compare_answers(&b, &a, n), "n = {n}");
    }
}

#[test]
fn self_match_is_full() {
    let (a, b) = mixed_pair();
    assert_eq!(compute_match(&a, &a, 6), 100);
    assert_eq!(compute_match(&b, &b, 6), 100);
}

#[test]
fn disjoint_answers_yield_zero() {
    let a = map(&[(0, int(1)), (2, int(3))]);
    let b = map(&[(1, int(1)), (3, int(3))]);
    let score = compare_answers(&a, &b, 4);
    assert_eq!(score.compared, 0);
    assert_eq!(score.matched, 0);
    assert_eq!(score.percentage, 0);
}

#[test]
fn empty_maps_yield_zero() {
    assert_eq!(compute_match(&AnswerMap::new(), &AnswerMap::new(), 10), 0);
}

#[test]
fn loop_bound_is_nominal_question_count() {
    let a = map(&[(0, int(1)), (5, int(1))]);
    let b = map(&[(0, int(1)), (5, int(1))]);
    let score = compare_answers(&a, &b, 1);
    assert_eq!(score.compared, 1);
    assert_eq!(score.percentage, 100);

    let c = map(&[(0, int(1)), (5, int(2))]);
    assert_eq!(compute_match(&a, &c, 1), 100);
    assert_eq!(compute_match(&a, &c, 6), 50);
}

#[test]
fn permuted_ranking_is_not_a_match() {
    let a = map(&[(0, seq(&[1, 2, 3]))]);
    let b = map(&[(0, seq(&[3, 2, 1]))]);
    assert_eq!(compute_match(&a, &b, 1), 0);
}

#[test]
fn sequences_of_different_length_do_not_match() {
    assert!(!answers_equal(&seq(&[1, 2]), &seq(&[1, 2, 3])));
    assert!(answers_equal(&seq(&[]), &seq(&[])));
}

#[test]
fn text_ignores_case_and_surrounding_whitespace() {
    let a = map(&[(0, text(" Yes "))]);
    let b = map(&[(0, text("yes"))]);
    assert_eq!(compute_match(&a, &b, 1), 100);
}

#[test]
fn text_keeps_inner_whitespace() {
    assert!(!answers_equal(&text("team player"), &text("teamplayer")));
}

#[test]
fn integer_never_equals_text() {
    assert!(!answers_equal(&int(4), &text("4")));
    assert!(!answers_equal(&int(4), &seq(&[4])));
}

#[test]
fn percentage_rounds_half_up() {
    // 1 of 8 is 12.5%
    let a: AnswerMap = (0..8).map(|i| (i, int(1))).collect();
    let b: AnswerMap = (0..8).map(|i| (i, int(if i == 0 { 1 } else { 2 }))).collect();
    assert_eq!(compute_match(&a, &b, 8), 13);

    // 2 of 3 is 66.67%
    let c = map(&[(0, int(1)), (1, int(1)), (2, int(1))]);
    let d = map(&[(0, int(1)), (1, int(1)), (2, int(9))]);
    assert_eq!(compute_match(&c, &d, 3), 67);
}

#[test]
fn unanswered_questions_are_skipped_not_mismatched() {
    let a = map(&[(0, int(3)), (1, int(4)), (2, int(5))]);
    let b = map(&[(0, int(3)), (2, int(1))]);
    let score = compare_answers(&a, &b, 3);
    assert_eq!(score.compared, 2);
    assert_eq!(score.matched, 1);
    assert_eq!(score.percentage, 50);
}

#[test]
fn answer_map_reads_stored_json() {
    let json = r#"{"0": {"answer": 4}, "1": {"answer": [2, 0, 1]}, "3": {"answer": "Yes"}}"#;
    let answers: AnswerMap = serde_json::from_str(json).unwrap();
    assert_eq!(answers.len(), 3);
    assert_eq!(answers.get(0), Some(&int(4)));
    assert_eq!(answers.get(1), Some(&seq(&[2, 0, 1])));
    assert_eq!(answers.get(2), None);
    assert_eq!(answers.get(3), Some(&text("Yes")));
}
