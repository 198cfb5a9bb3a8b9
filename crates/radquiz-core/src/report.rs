//! Session report types with JSON persistence and attempt comparison.

use std::collections::HashSet;
use std::path::Path;

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::feedback::FeedbackBand;

/// The final record of one finished practice session.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionReport {
    /// Unique report identifier.
    pub id: Uuid,
    /// When the report was produced.
    pub created_at: DateTime<Utc>,
    /// Summary of the topic that was practiced.
    pub topic: TopicSummary,
    /// Number of questions asked.
    pub total: u32,
    /// Number answered correctly.
    pub correct: u32,
    /// Rounded whole-number percentage.
    pub percentage: u32,
    /// Qualitative band for the percentage.
    pub band: FeedbackBand,
    /// Questions answered incorrectly, in the order they were missed.
    pub missed: Vec<MissedQuestion>,
    /// Wall-clock practice time in milliseconds.
    pub duration_ms: u64,
}

/// Summary of a topic (without the full question definitions).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TopicSummary {
    pub id: String,
    pub name: String,
    pub question_count: usize,
}

/// One incorrectly answered question, kept for review.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MissedQuestion {
    /// Question identifier.
    pub id: String,
    /// The prompt.
    pub text: String,
    /// What the learner selected.
    pub selected: String,
    /// The option the answer key designates.
    pub correct: String,
    /// The question's explanation.
    #[serde(default)]
    pub explanation: String,
}

impl SessionReport {
    /// Save the report as JSON to a file.
    pub fn save_json(&self, path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(self).context("failed to serialize report")?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, json)
            .with_context(|| format!("failed to write report to {}", path.display()))?;
        Ok(())
    }

    /// Load a report from a JSON file.
    pub fn load_json(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read report from {}", path.display()))?;
        let report: SessionReport =
            serde_json::from_str(&content).context("failed to parse report JSON")?;
        Ok(report)
    }

    /// Compare this attempt against an earlier attempt at the same topic.
    ///
    /// The caller is responsible for passing two reports for the same
    /// topic; mismatched topics still compare, but the question-level
    /// movement is meaningless.
    pub fn compare(&self, baseline: &SessionReport) -> AttemptComparison {
        let baseline_missed: HashSet<&str> =
            baseline.missed.iter().map(|m| m.id.as_str()).collect();
        let current_missed: HashSet<&str> = self.missed.iter().map(|m| m.id.as_str()).collect();

        let fixed = baseline
            .missed
            .iter()
            .filter(|m| !current_missed.contains(m.id.as_str()))
            .map(|m| m.id.clone())
            .collect();
        let newly_missed = self
            .missed
            .iter()
            .filter(|m| !baseline_missed.contains(m.id.as_str()))
            .map(|m| m.id.clone())
            .collect();

        AttemptComparison {
            topic_id: self.topic.id.clone(),
            baseline_percentage: baseline.percentage,
            current_percentage: self.percentage,
            delta: self.percentage as i64 - baseline.percentage as i64,
            baseline_band: baseline.band,
            current_band: self.band,
            fixed,
            newly_missed,
        }
    }
}

/// Result of comparing two attempts at one topic.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AttemptComparison {
    /// Topic both attempts practiced.
    pub topic_id: String,
    /// Percentage of the earlier attempt.
    pub baseline_percentage: u32,
    /// Percentage of the later attempt.
    pub current_percentage: u32,
    /// Percentage-point movement between the attempts.
    pub delta: i64,
    /// Band of the earlier attempt.
    pub baseline_band: FeedbackBand,
    /// Band of the later attempt.
    pub current_band: FeedbackBand,
    /// Questions missed in the baseline but answered correctly now.
    pub fixed: Vec<String>,
    /// Questions answered correctly in the baseline but missed now.
    pub newly_missed: Vec<String>,
}

impl AttemptComparison {
    /// Whether the later attempt scored higher.
    pub fn improved(&self) -> bool {
        self.delta > 0
    }

    /// Whether the later attempt scored lower.
    pub fn declined(&self) -> bool {
        self.delta < 0
    }

    /// Format the comparison as markdown.
    pub fn to_markdown(&self) -> String {
        let mut md = String::new();

        md.push_str(&format!(
            "**{}**: {}% -> {}% ({:+} points)\n\n",
            self.topic_id, self.baseline_percentage, self.current_percentage, self.delta
        ));
        md.push_str(&format!(
            "Band: {} -> {}\n\n",
            self.baseline_band.label(),
            self.current_band.label()
        ));

        if !self.fixed.is_empty() {
            md.push_str("### Fixed since the baseline\n\n");
            for id in &self.fixed {
                md.push_str(&format!("- {id}\n"));
            }
            md.push('\n');
        }

        if !self.newly_missed.is_empty() {
            md.push_str("### Newly missed\n\n");
            for id in &self.newly_missed {
                md.push_str(&format!("- {id}\n"));
            }
        }

        md
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::feedback::percentage;

    fn make_report(correct: u32, total: u32, missed_ids: &[&str]) -> SessionReport {
        let pct = percentage(correct, total);
        SessionReport {
            id: Uuid::nil(),
            created_at: Utc::now(),
            topic: TopicSummary {
                id: "ct-physics".into(),
                name: "CT Physics".into(),
                question_count: total as usize,
            },
            total,
            correct,
            percentage: pct,
            band: FeedbackBand::for_percentage(pct),
            missed: missed_ids
                .iter()
                .map(|id| MissedQuestion {
                    id: id.to_string(),
                    text: format!("Prompt {id}"),
                    selected: "wrong".into(),
                    correct: "right".into(),
                    explanation: String::new(),
                })
                .collect(),
            duration_ms: 90_000,
        }
    }

    #[test]
    fn json_roundtrip() {
        let report = make_report(7, 10, &["q1", "q4", "q9"]);
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("report.json");

        report.save_json(&path).unwrap();
        let loaded = SessionReport::load_json(&path).unwrap();

        assert_eq!(loaded.topic.id, "ct-physics");
        assert_eq!(loaded.correct, 7);
        assert_eq!(loaded.percentage, 70);
        assert_eq!(loaded.band, FeedbackBand::GreatJob);
        assert_eq!(loaded.missed.len(), 3);
    }

    #[test]
    fn save_creates_parent_directories() {
        let report = make_report(5, 10, &[]);
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested/deeper/report.json");
        report.save_json(&path).unwrap();
        assert!(path.exists());
    }

    #[test]
    fn compare_detects_improvement() {
        let baseline = make_report(4, 10, &["q1", "q2", "q3", "q4", "q5", "q6"]);
        let current = make_report(8, 10, &["q1", "q7"]);

        let cmp = current.compare(&baseline);
        assert!(cmp.improved());
        assert!(!cmp.declined());
        assert_eq!(cmp.delta, 40);
        assert_eq!(cmp.baseline_band, FeedbackBand::KeepLearning);
        assert_eq!(cmp.current_band, FeedbackBand::GreatJob);
        assert_eq!(cmp.fixed, vec!["q2", "q3", "q4", "q5", "q6"]);
        assert_eq!(cmp.newly_missed, vec!["q7"]);
    }

    #[test]
    fn compare_detects_decline() {
        let baseline = make_report(9, 10, &["q1"]);
        let current = make_report(6, 10, &["q1", "q2", "q3", "q4"]);

        let cmp = current.compare(&baseline);
        assert!(cmp.declined());
        assert_eq!(cmp.delta, -30);
        assert!(cmp.fixed.is_empty());
        assert_eq!(cmp.newly_missed, vec!["q2", "q3", "q4"]);
    }

    #[test]
    fn compare_identical_attempts() {
        let report = make_report(7, 10, &["q1", "q2", "q3"]);
        let cmp = report.compare(&report);
        assert!(!cmp.improved());
        assert!(!cmp.declined());
        assert_eq!(cmp.delta, 0);
        assert!(cmp.fixed.is_empty());
        assert!(cmp.newly_missed.is_empty());
    }

    #[test]
    fn markdown_output() {
        let baseline = make_report(4, 10, &["q1", "q2"]);
        let current = make_report(9, 10, &["q3"]);

        let md = current.compare(&baseline).to_markdown();
        assert!(md.contains("ct-physics"));
        assert!(md.contains("40% -> 90%"));
        assert!(md.contains("+50 points"));
        assert!(md.contains("Fixed since the baseline"));
        assert!(md.contains("- q1"));
        assert!(md.contains("Newly missed"));
        assert!(md.contains("- q3"));
    }
}
