//! Score percentage and feedback banding.
//!
//! A finished session maps its rounded percentage onto one of four fixed
//! bands. Band text is a static lookup, not computed.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Qualitative performance band for a final score.
///
/// Serialized under its display label so saved reports read naturally.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FeedbackBand {
    #[serde(rename = "Excellent Mastery")]
    ExcellentMastery,
    #[serde(rename = "Great Job")]
    GreatJob,
    #[serde(rename = "Good Effort")]
    GoodEffort,
    #[serde(rename = "Keep Learning")]
    KeepLearning,
}

/// Round a score to a whole percentage.
pub fn percentage(correct: u32, total: u32) -> u32 {
    if total == 0 {
        return 0;
    }
    ((correct as f64 / total as f64) * 100.0).round() as u32
}

impl FeedbackBand {
    /// Select the band for a rounded percentage.
    ///
    /// Thresholds are fixed: 90 and above is excellent, 70 to 89 great,
    /// 50 to 69 good, anything below 50 keep learning.
    pub fn for_percentage(pct: u32) -> Self {
        match pct {
            p if p >= 90 => FeedbackBand::ExcellentMastery,
            p if p >= 70 => FeedbackBand::GreatJob,
            p if p >= 50 => FeedbackBand::GoodEffort,
            _ => FeedbackBand::KeepLearning,
        }
    }

    /// The band's display label.
    pub fn label(&self) -> &'static str {
        match self {
            FeedbackBand::ExcellentMastery => "Excellent Mastery",
            FeedbackBand::GreatJob => "Great Job",
            FeedbackBand::GoodEffort => "Good Effort",
            FeedbackBand::KeepLearning => "Keep Learning",
        }
    }

    /// Canned summary message for the band.
    pub fn message(&self) -> &'static str {
        match self {
            FeedbackBand::ExcellentMastery => {
                "Outstanding performance. You have a strong command of this material."
            }
            FeedbackBand::GreatJob => "Strong result. You know most of this material well.",
            FeedbackBand::GoodEffort => "A fair result with clear room to grow.",
            FeedbackBand::KeepLearning => "This topic needs more study time.",
        }
    }

    /// Canned strengths text for the band.
    pub fn strengths(&self) -> &'static str {
        match self {
            FeedbackBand::ExcellentMastery => {
                "Accurate recall across nearly the entire question set."
            }
            FeedbackBand::GreatJob => "Solid grasp of the core concepts.",
            FeedbackBand::GoodEffort => "Comfortable with about half of the material.",
            FeedbackBand::KeepLearning => "A foundation to build on.",
        }
    }

    /// Canned focus-area text for the band.
    pub fn focus(&self) -> &'static str {
        match self {
            FeedbackBand::ExcellentMastery => {
                "Keep the material fresh with an occasional review session."
            }
            FeedbackBand::GreatJob => "Review the questions you missed, then retake the topic.",
            FeedbackBand::GoodEffort => {
                "Work through the explanation for every missed question before retaking."
            }
            FeedbackBand::KeepLearning => {
                "Revisit the study materials for this topic, then practice again."
            }
        }
    }
}

impl fmt::Display for FeedbackBand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
