//! Headless session example — driving the engine without the CLI.
//!
//! ```bash
//! # Run from the workspace root:
//! cargo run --example headless_session
//! ```

use radquiz_core::bank;
use radquiz_core::session::QuizSession;

fn main() -> anyhow::Result<()> {
    let topic = bank::parse_topic("question-banks/ct-physics.toml".as_ref())?;
    println!(
        "Practicing: {} ({} questions)",
        topic.name,
        topic.questions.len()
    );

    let mut session = QuizSession::start(topic)?;

    while let Some(question) = session.current_question().cloned() {
        // Always pick the first option; a real front end asks the learner.
        let outcome = session.select_answer(&question.options[0])?;
        println!(
            "  {} -> {}",
            question.id,
            if outcome.correct { "correct" } else { "incorrect" }
        );
        session.advance()?;
    }

    let report = session.report()?;
    println!(
        "\nScore: {}/{} ({}%) — {}",
        report.correct,
        report.total,
        report.percentage,
        report.band.label()
    );
    println!("{}", report.band.message());

    Ok(())
}
