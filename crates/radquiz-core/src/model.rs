//! Core data model types for radquiz.
//!
//! These are the fundamental types that the entire radquiz system uses
//! to represent questions, answer keys, and topics.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A single assessable question within a topic.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Question {
    /// Unique identifier, stable within its topic.
    pub id: String,
    /// The prompt shown to the learner.
    pub text: String,
    /// Which answer-matching rule applies to `correct_answer`.
    pub kind: QuestionKind,
    /// Ordered answer choices. Never empty; exactly two for true/false.
    pub options: Vec<String>,
    /// The answer key. For multiple choice this is a letter designating
    /// the correct option by position ("A" = options[0], "B" = options[1],
    /// and so on); for true/false it is the literal correct option string.
    /// Interpretation depends on `kind` — see [`Question::is_correct`].
    pub correct_answer: String,
    /// Shown after answering, whether or not the answer was correct.
    #[serde(default)]
    pub explanation: String,
}

impl Question {
    /// Whether `selected` is the correct answer to this question.
    ///
    /// Multiple choice converts the selected option's zero-based position
    /// to a letter and compares it against the key. True/false compares
    /// the option string itself, case-sensitively. The two branches must
    /// stay separate: a true/false key is the literal word, not a letter.
    pub fn is_correct(&self, selected: &str) -> bool {
        match self.kind {
            QuestionKind::MultipleChoice => self
                .options
                .iter()
                .position(|o| o == selected)
                .and_then(letter_for)
                .is_some_and(|letter| self.correct_answer == letter.to_string()),
            QuestionKind::TrueFalse => selected == self.correct_answer,
        }
    }

    /// Resolve the answer key to the option text it designates.
    ///
    /// Returns `None` when the key does not resolve (a letter past the end
    /// of `options`, or a literal that is not an option) — bank validation
    /// flags those questions.
    pub fn correct_option(&self) -> Option<&str> {
        match self.kind {
            QuestionKind::MultipleChoice => index_for_letter(&self.correct_answer)
                .and_then(|i| self.options.get(i))
                .map(String::as_str),
            QuestionKind::TrueFalse => self
                .options
                .iter()
                .find(|o| **o == self.correct_answer)
                .map(String::as_str),
        }
    }
}

/// Convert a zero-based option position to its letter designation
/// (0 → 'A', 1 → 'B', …). Positions past 'Z' have no letter.
pub fn letter_for(index: usize) -> Option<char> {
    if index < 26 {
        Some((b'A' + index as u8) as char)
    } else {
        None
    }
}

/// Convert a letter designation back to a zero-based option position.
pub fn index_for_letter(letter: &str) -> Option<usize> {
    let mut chars = letter.chars();
    match (chars.next(), chars.next()) {
        (Some(c @ 'A'..='Z'), None) => Some(c as usize - 'A' as usize),
        _ => None,
    }
}

/// The two supported question forms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum QuestionKind {
    /// Answer key names the correct option by letter position.
    #[serde(rename = "mcq")]
    MultipleChoice,
    /// Answer key is the literal correct option string.
    #[serde(rename = "tf")]
    TrueFalse,
}

impl fmt::Display for QuestionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QuestionKind::MultipleChoice => write!(f, "mcq"),
            QuestionKind::TrueFalse => write!(f, "tf"),
        }
    }
}

impl FromStr for QuestionKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "mcq" | "multiple-choice" => Ok(QuestionKind::MultipleChoice),
            "tf" | "true-false" => Ok(QuestionKind::TrueFalse),
            other => Err(format!("unknown question kind: {other}")),
        }
    }
}

/// A named, fixed collection of questions plus descriptive metadata.
///
/// Topics are immutable once loaded; sessions never mutate them, so one
/// topic can safely back any number of sessions.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Topic {
    /// Unique identifier for this topic.
    pub id: String,
    /// Human-readable name.
    pub name: String,
    /// Description of what this topic covers.
    #[serde(default)]
    pub description: String,
    /// The questions in this topic.
    #[serde(default)]
    pub questions: Vec<Question>,
}
