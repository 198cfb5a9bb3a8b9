//! Attempt-comparison integration tests.
//!
//! Tests the progress workflow end-to-end: run sessions against a topic,
//! save the reports as JSON, reload them, and compare attempts.

use chrono::Utc;
use uuid::Uuid;

use radquiz_core::feedback::FeedbackBand;
use radquiz_core::model::{Question, QuestionKind, Topic};
use radquiz_core::report::{MissedQuestion, SessionReport, TopicSummary};
use radquiz_core::session::QuizSession;

fn make_report(correct: u32, total: u32, missed_ids: &[&str]) -> SessionReport {
    let percentage = ((correct as f64 / total as f64) * 100.0).round() as u32;
    SessionReport {
        id: Uuid::new_v4(),
        created_at: Utc::now(),
        topic: TopicSummary {
            id: "radiation-protection".into(),
            name: "Radiation Protection".into(),
            question_count: total as usize,
        },
        total,
        correct,
        percentage,
        band: FeedbackBand::for_percentage(percentage),
        missed: missed_ids
            .iter()
            .map(|id| MissedQuestion {
                id: id.to_string(),
                text: format!("Prompt for {id}"),
                selected: "wrong".into(),
                correct: "right".into(),
                explanation: String::new(),
            })
            .collect(),
        duration_ms: 45_000,
    }
}

fn make_topic(n: usize) -> Topic {
    Topic {
        id: "progress-topic".into(),
        name: "Progress Topic".into(),
        description: String::new(),
        questions: (0..n)
            .map(|i| Question {
                id: format!("q{i}"),
                text: format!("Prompt {i}"),
                kind: QuestionKind::MultipleChoice,
                options: vec!["right".into(), "wrong".into()],
                correct_answer: "A".into(),
                explanation: String::new(),
            })
            .collect(),
    }
}

#[test]
fn detect_improvement_between_attempts() {
    let baseline = make_report(4, 10, &["rpr-001", "rpr-002", "rpr-003"]);
    let current = make_report(8, 10, &["rpr-001"]);

    let cmp = current.compare(&baseline);

    assert!(cmp.improved());
    assert_eq!(cmp.delta, 40);
    assert_eq!(cmp.fixed, vec!["rpr-002", "rpr-003"]);
    assert!(cmp.newly_missed.is_empty());
}

#[test]
fn detect_decline_between_attempts() {
    let baseline = make_report(9, 10, &[]);
    let current = make_report(5, 10, &["rpr-004", "rpr-007"]);

    let cmp = current.compare(&baseline);

    assert!(cmp.declined());
    assert_eq!(cmp.delta, -40);
    assert_eq!(cmp.newly_missed, vec!["rpr-004", "rpr-007"]);
}

#[test]
fn band_movement_is_tracked() {
    let baseline = make_report(4, 10, &[]);
    let current = make_report(9, 10, &[]);

    let cmp = current.compare(&baseline);

    assert_eq!(cmp.baseline_band, FeedbackBand::KeepLearning);
    assert_eq!(cmp.current_band, FeedbackBand::ExcellentMastery);
}

#[test]
fn no_change_with_identical_attempts() {
    let report = make_report(7, 10, &["rpr-009"]);
    let cmp = report.compare(&report);

    assert!(!cmp.improved());
    assert!(!cmp.declined());
    assert!(cmp.fixed.is_empty());
    assert!(cmp.newly_missed.is_empty());
}

#[test]
fn json_roundtrip_preserves_data() {
    let report = make_report(6, 10, &["rpr-002", "rpr-005"]);
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("attempt.json");

    report.save_json(&path).unwrap();
    let loaded = SessionReport::load_json(&path).unwrap();

    assert_eq!(loaded.topic.id, "radiation-protection");
    assert_eq!(loaded.correct, 6);
    assert_eq!(loaded.percentage, 60);
    assert_eq!(loaded.band, FeedbackBand::GoodEffort);
    assert_eq!(loaded.missed.len(), 2);
}

#[test]
fn markdown_report_format() {
    let baseline = make_report(5, 10, &["rpr-001"]);
    let current = make_report(2, 10, &["rpr-001", "rpr-002", "rpr-003"]);

    let md = current.compare(&baseline).to_markdown();

    assert!(md.contains("radiation-protection"));
    assert!(md.contains("50% -> 20%"));
    assert!(md.contains("-30 points"));
    assert!(md.contains("Newly missed"));
}

#[test]
fn full_session_to_comparison_workflow() {
    let dir = tempfile::tempdir().unwrap();
    let topic = make_topic(4);

    // First attempt: one correct answer.
    let mut session = QuizSession::start(topic).unwrap();
    for i in 0..session.total() {
        let choice = if i == 0 { "right" } else { "wrong" };
        session.select_answer(choice).unwrap();
        session.advance().unwrap();
    }
    let first = session.report().unwrap();
    assert_eq!(first.correct, 1);
    assert_eq!(first.missed.len(), 3);
    first.save_json(&dir.path().join("first.json")).unwrap();

    // Second attempt after review: everything correct.
    session.retake();
    while session.current_question().is_some() {
        session.select_answer("right").unwrap();
        session.advance().unwrap();
    }
    let second = session.report().unwrap();
    assert_eq!(second.percentage, 100);
    second.save_json(&dir.path().join("second.json")).unwrap();

    // Compare the reloaded attempts.
    let baseline = SessionReport::load_json(&dir.path().join("first.json")).unwrap();
    let current = SessionReport::load_json(&dir.path().join("second.json")).unwrap();
    let cmp = current.compare(&baseline);

    assert!(cmp.improved());
    assert_eq!(cmp.delta, 75);
    assert_eq!(cmp.fixed.len(), 3);
    assert!(cmp.newly_missed.is_empty());
    assert_eq!(cmp.current_band, FeedbackBand::ExcellentMastery);
}
