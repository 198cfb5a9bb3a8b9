//! Session error types.
//!
//! Every variant is a caller-contract violation rather than an expected
//! runtime condition: the driving layer is expected to submit valid
//! options and respect the session state machine. Violations surface as
//! error returns instead of silent no-ops, since a swallowed violation
//! could corrupt score integrity.

use thiserror::Error;

/// Errors raised by the quiz session state machine.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum QuizError {
    /// The topic has no questions to practice.
    #[error("topic '{0}' has no questions")]
    EmptyTopic(String),

    /// The submitted value is not one of the current question's options.
    #[error("'{option}' is not an option for question '{question_id}'")]
    InvalidOption { question_id: String, option: String },

    /// The current question was already answered; its answer is locked.
    #[error("question '{0}' is already answered")]
    AlreadyAnswered(String),

    /// Tried to advance past a question that has not been answered.
    #[error("question '{0}' has not been answered")]
    NotAnswered(String),

    /// The session has already run through every question.
    #[error("session is already finished")]
    SessionFinished,

    /// A report was requested before the session finished.
    #[error("session is not finished")]
    SessionNotFinished,
}
