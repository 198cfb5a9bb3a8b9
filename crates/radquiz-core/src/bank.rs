//! TOML question-bank parser.
//!
//! Loads topics from TOML files and directories, and validates them.

use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::model::{Question, QuestionKind, Topic};

/// Intermediate TOML structure for parsing topic bank files.
#[derive(Debug, Deserialize)]
struct TomlBankFile {
    topic: TomlTopicHeader,
    #[serde(default)]
    questions: Vec<TomlQuestion>,
}

#[derive(Debug, Deserialize)]
struct TomlTopicHeader {
    id: String,
    name: String,
    #[serde(default)]
    description: String,
}

#[derive(Debug, Deserialize)]
struct TomlQuestion {
    id: String,
    text: String,
    kind: String,
    options: Vec<String>,
    correct_answer: String,
    #[serde(default)]
    explanation: String,
}

/// Parse a single TOML file into a `Topic`.
pub fn parse_topic(path: &Path) -> Result<Topic> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read question bank: {}", path.display()))?;

    parse_topic_str(&content, path)
}

/// Parse a TOML string into a `Topic` (useful for testing).
pub fn parse_topic_str(content: &str, source_path: &Path) -> Result<Topic> {
    let parsed: TomlBankFile = toml::from_str(content)
        .with_context(|| format!("failed to parse TOML: {}", source_path.display()))?;

    let questions = parsed
        .questions
        .into_iter()
        .map(|q| {
            let kind: QuestionKind = q
                .kind
                .parse()
                .map_err(|e: String| anyhow::anyhow!("question '{}': {}", q.id, e))?;
            Ok(Question {
                id: q.id,
                text: q.text,
                kind,
                options: q.options,
                correct_answer: q.correct_answer,
                explanation: q.explanation,
            })
        })
        .collect::<Result<Vec<_>>>()?;

    Ok(Topic {
        id: parsed.topic.id,
        name: parsed.topic.name,
        description: parsed.topic.description,
        questions,
    })
}

/// Recursively load all `.toml` bank files from a directory.
pub fn load_bank_directory(dir: &Path) -> Result<Vec<Topic>> {
    let mut topics = Vec::new();

    if !dir.is_dir() {
        anyhow::bail!("not a directory: {}", dir.display());
    }

    for entry in std::fs::read_dir(dir)
        .with_context(|| format!("failed to read directory: {}", dir.display()))?
    {
        let entry = entry?;
        let path = entry.path();

        if path.is_dir() {
            topics.extend(load_bank_directory(&path)?);
        } else if path.extension().is_some_and(|ext| ext == "toml") {
            match parse_topic(&path) {
                Ok(topic) => topics.push(topic),
                Err(e) => {
                    tracing::warn!("skipping {}: {}", path.display(), e);
                }
            }
        }
    }

    Ok(topics)
}

/// A warning from topic validation.
#[derive(Debug, Clone)]
pub struct ValidationWarning {
    /// The question ID (if applicable).
    pub question_id: Option<String>,
    /// Warning message.
    pub message: String,
}

/// Validate a topic for common issues.
pub fn validate_topic(topic: &Topic) -> Vec<ValidationWarning> {
    let mut warnings = Vec::new();

    if topic.questions.is_empty() {
        warnings.push(ValidationWarning {
            question_id: None,
            message: "topic has no questions".into(),
        });
    }

    // Check for duplicate question IDs
    let mut seen_ids = std::collections::HashSet::new();
    for q in &topic.questions {
        if !seen_ids.insert(&q.id) {
            warnings.push(ValidationWarning {
                question_id: Some(q.id.clone()),
                message: format!("duplicate question ID: {}", q.id),
            });
        }
    }

    for q in &topic.questions {
        if q.text.trim().is_empty() {
            warnings.push(ValidationWarning {
                question_id: Some(q.id.clone()),
                message: "prompt text is empty".into(),
            });
        }

        if q.options.len() < 2 {
            warnings.push(ValidationWarning {
                question_id: Some(q.id.clone()),
                message: format!("only {} option(s); at least two required", q.options.len()),
            });
        }

        if q.kind == QuestionKind::TrueFalse && q.options.len() != 2 {
            warnings.push(ValidationWarning {
                question_id: Some(q.id.clone()),
                message: format!(
                    "true/false question has {} options, expected exactly two",
                    q.options.len()
                ),
            });
        }

        if q.correct_option().is_none() {
            warnings.push(ValidationWarning {
                question_id: Some(q.id.clone()),
                message: format!(
                    "correct answer '{}' does not resolve to an option",
                    q.correct_answer
                ),
            });
        }
    }

    warnings
}
