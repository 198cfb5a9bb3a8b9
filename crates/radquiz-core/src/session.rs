//! The practice session state machine.
//!
//! A session drives a learner through one topic's questions exactly once:
//! shuffled order, one question at a time, answer then advance. Score
//! state changes in exactly one place ([`QuizSession::select_answer`]),
//! and the driving layer can neither skip an unanswered question nor
//! answer one twice.

use chrono::{DateTime, Utc};
use rand::seq::SliceRandom;
use rand::thread_rng;
use uuid::Uuid;

use crate::error::QuizError;
use crate::feedback::{percentage, FeedbackBand};
use crate::model::{Question, Topic};
use crate::report::{MissedQuestion, SessionReport, TopicSummary};

/// What happened when an answer was submitted.
#[derive(Debug, Clone)]
pub struct AnswerOutcome {
    /// Whether the selected option was correct.
    pub correct: bool,
    /// The option text the answer key designates, when it resolves.
    pub correct_option: Option<String>,
    /// The question's explanation, shown regardless of correctness.
    pub explanation: String,
}

/// A single learner's pass through one topic.
///
/// Created by [`QuizSession::start`], mutated only through
/// [`select_answer`](QuizSession::select_answer),
/// [`advance`](QuizSession::advance), and
/// [`retake`](QuizSession::retake). Dropping the session discards it;
/// there is no persisted state to clean up.
#[derive(Debug, Clone)]
pub struct QuizSession {
    topic: Topic,
    /// Permutation of indices into `topic.questions`, fixed until retake.
    order: Vec<usize>,
    current: usize,
    selected: Option<String>,
    answered: bool,
    score: u32,
    missed: Vec<MissedAnswer>,
    finished: bool,
    started_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
struct MissedAnswer {
    question: usize,
    selected: String,
}

impl QuizSession {
    /// Start a fresh session over `topic` with a new random question order.
    pub fn start(topic: Topic) -> Result<Self, QuizError> {
        if topic.questions.is_empty() {
            return Err(QuizError::EmptyTopic(topic.id));
        }
        let mut order: Vec<usize> = (0..topic.questions.len()).collect();
        order.shuffle(&mut thread_rng());
        Ok(Self {
            topic,
            order,
            current: 0,
            selected: None,
            answered: false,
            score: 0,
            missed: Vec::new(),
            finished: false,
            started_at: Utc::now(),
        })
    }

    /// The topic this session practices.
    pub fn topic(&self) -> &Topic {
        &self.topic
    }

    /// The question currently being asked, or `None` once finished.
    pub fn current_question(&self) -> Option<&Question> {
        if self.finished {
            return None;
        }
        self.order.get(self.current).map(|&i| &self.topic.questions[i])
    }

    /// Zero-based position of the current question in the shuffled order.
    pub fn current_index(&self) -> usize {
        self.current
    }

    /// Number of questions in this session.
    pub fn total(&self) -> usize {
        self.order.len()
    }

    /// Count of correctly answered questions so far.
    pub fn score(&self) -> u32 {
        self.score
    }

    /// Whether the current question has been answered.
    pub fn is_answered(&self) -> bool {
        self.answered
    }

    /// The option submitted for the current question, if any.
    pub fn selected_option(&self) -> Option<&str> {
        self.selected.as_deref()
    }

    /// Whether the session has run through every question.
    pub fn is_finished(&self) -> bool {
        self.finished
    }

    /// Questions answered incorrectly so far, in the order they were missed.
    pub fn missed_questions(&self) -> impl Iterator<Item = &Question> {
        self.missed.iter().map(|m| &self.topic.questions[m.question])
    }

    /// Questions in the order this session asks them.
    pub fn question_order(&self) -> impl Iterator<Item = &Question> {
        self.order.iter().map(|&i| &self.topic.questions[i])
    }

    /// Submit an answer for the current question.
    ///
    /// This is the only operation that changes score state, and it does so
    /// exactly once per question: a second submission is rejected with
    /// [`QuizError::AlreadyAnswered`] and changes nothing. `option` must
    /// be one of the current question's option strings.
    pub fn select_answer(&mut self, option: &str) -> Result<AnswerOutcome, QuizError> {
        if self.finished {
            return Err(QuizError::SessionFinished);
        }
        let question = &self.topic.questions[self.order[self.current]];
        if self.answered {
            return Err(QuizError::AlreadyAnswered(question.id.clone()));
        }
        if !question.options.iter().any(|o| o == option) {
            return Err(QuizError::InvalidOption {
                question_id: question.id.clone(),
                option: option.to_string(),
            });
        }

        self.selected = Some(option.to_string());
        self.answered = true;

        let correct = question.is_correct(option);
        let outcome = AnswerOutcome {
            correct,
            correct_option: question.correct_option().map(str::to_string),
            explanation: question.explanation.clone(),
        };
        if correct {
            self.score += 1;
        } else {
            self.missed.push(MissedAnswer {
                question: self.order[self.current],
                selected: option.to_string(),
            });
        }
        Ok(outcome)
    }

    /// Move to the next question, or finish after the last one.
    ///
    /// Rejected while the current question is unanswered, so a learner
    /// cannot skip questions. Score state never changes here.
    pub fn advance(&mut self) -> Result<(), QuizError> {
        if self.finished {
            return Err(QuizError::SessionFinished);
        }
        if !self.answered {
            let question = &self.topic.questions[self.order[self.current]];
            return Err(QuizError::NotAnswered(question.id.clone()));
        }
        if self.current + 1 < self.order.len() {
            self.current += 1;
            self.selected = None;
            self.answered = false;
        } else {
            self.finished = true;
        }
        Ok(())
    }

    /// Throw away all progress and start over with a fresh permutation.
    ///
    /// Valid in any state. The topic itself is never mutated.
    pub fn retake(&mut self) {
        self.order.shuffle(&mut thread_rng());
        self.current = 0;
        self.selected = None;
        self.answered = false;
        self.score = 0;
        self.missed.clear();
        self.finished = false;
        self.started_at = Utc::now();
    }

    /// Produce the final report. Only valid once the session is finished.
    pub fn report(&self) -> Result<SessionReport, QuizError> {
        if !self.finished {
            return Err(QuizError::SessionNotFinished);
        }
        let total = self.order.len() as u32;
        let pct = percentage(self.score, total);
        let missed = self
            .missed
            .iter()
            .map(|m| {
                let q = &self.topic.questions[m.question];
                MissedQuestion {
                    id: q.id.clone(),
                    text: q.text.clone(),
                    selected: m.selected.clone(),
                    correct: q
                        .correct_option()
                        .unwrap_or(q.correct_answer.as_str())
                        .to_string(),
                    explanation: q.explanation.clone(),
                }
            })
            .collect();

        Ok(SessionReport {
            id: Uuid::new_v4(),
            created_at: Utc::now(),
            topic: TopicSummary {
                id: self.topic.id.clone(),
                name: self.topic.name.clone(),
                question_count: self.topic.questions.len(),
            },
            total,
            correct: self.score,
            percentage: pct,
            band: FeedbackBand::for_percentage(pct),
            missed,
            duration_ms: (Utc::now() - self.started_at).num_milliseconds().max(0) as u64,
        })
    }
}
