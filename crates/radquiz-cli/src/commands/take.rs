//! The `radquiz take` command.

use std::io::{BufRead, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use radquiz_core::bank;
use radquiz_core::model::{index_for_letter, letter_for, Topic};
use radquiz_core::report::SessionReport;
use radquiz_core::session::QuizSession;
use radquiz_report::{render_markdown, write_html_report};

use crate::config::load_config_from;

pub fn execute(
    bank_path: Option<PathBuf>,
    topic_id: Option<String>,
    output: Option<PathBuf>,
    format: Option<String>,
    config_path: Option<PathBuf>,
) -> Result<()> {
    let config = load_config_from(config_path.as_deref())?;
    let bank_path = bank_path.unwrap_or_else(|| config.bank_dir.clone());
    let output = output.unwrap_or_else(|| config.output_dir.clone());
    let format = format.unwrap_or_else(|| config.default_format.clone());

    let topic = select_topic(&bank_path, topic_id.as_deref())?;
    for w in bank::validate_topic(&topic) {
        tracing::warn!(
            "bank issue in '{}' ({}): {}",
            topic.id,
            w.question_id.as_deref().unwrap_or("-"),
            w.message
        );
    }

    let stdin = std::io::stdin();
    let mut input = stdin.lock();
    let mut out = std::io::stdout();

    writeln!(out, "Practicing: {} ({} questions)", topic.name, topic.questions.len())?;

    let mut session = QuizSession::start(topic)?;
    loop {
        run_session(&mut session, &mut input, &mut out)?;

        let report = session.report()?;
        print_summary(&report);
        save_report(&report, &output, &format)?;

        write!(out, "\nRetake this topic? [y/N] ")?;
        out.flush()?;
        let mut line = String::new();
        if input.read_line(&mut line)? == 0 || !line.trim().eq_ignore_ascii_case("y") {
            break;
        }
        session.retake();
    }

    Ok(())
}

/// Pick the topic to practice from a bank file or directory.
fn select_topic(bank_path: &Path, topic_id: Option<&str>) -> Result<Topic> {
    let mut topics = if bank_path.is_dir() {
        bank::load_bank_directory(bank_path)?
    } else {
        vec![bank::parse_topic(bank_path)?]
    };

    match topic_id {
        Some(id) => topics
            .into_iter()
            .find(|t| t.id == id)
            .with_context(|| format!("topic '{id}' not found under {}", bank_path.display())),
        None if topics.len() == 1 => Ok(topics.remove(0)),
        None => {
            let available: Vec<&str> = topics.iter().map(|t| t.id.as_str()).collect();
            anyhow::bail!(
                "--topic is required; available topics: {}",
                available.join(", ")
            )
        }
    }
}

/// Ask every remaining question, reading answers as option letters.
fn run_session(
    session: &mut QuizSession,
    input: &mut impl BufRead,
    out: &mut impl Write,
) -> Result<()> {
    while let Some(question) = session.current_question().cloned() {
        writeln!(out)?;
        writeln!(
            out,
            "Question {}/{}: {}",
            session.current_index() + 1,
            session.total(),
            question.text
        )?;
        for (i, option) in question.options.iter().enumerate() {
            if let Some(letter) = letter_for(i) {
                writeln!(out, "  {letter}. {option}")?;
            }
        }

        let last_letter = letter_for(question.options.len().clamp(1, 26) - 1).unwrap_or('Z');
        let choice = loop {
            write!(out, "Answer: ")?;
            out.flush()?;
            let mut line = String::new();
            if input.read_line(&mut line)? == 0 {
                anyhow::bail!("input closed before the quiz finished");
            }
            let entered = line.trim().to_uppercase();
            match index_for_letter(&entered).and_then(|i| question.options.get(i)) {
                Some(option) => break option.clone(),
                None => writeln!(out, "Enter a letter between A and {last_letter}.")?,
            }
        };

        let outcome = session.select_answer(&choice)?;
        if outcome.correct {
            writeln!(out, "Correct!")?;
        } else {
            match &outcome.correct_option {
                Some(correct) => writeln!(out, "Incorrect. The correct answer is: {correct}")?,
                None => writeln!(out, "Incorrect.")?,
            }
        }
        if !outcome.explanation.is_empty() {
            writeln!(out, "{}", outcome.explanation)?;
        }

        session.advance()?;
    }

    Ok(())
}

fn print_summary(report: &SessionReport) {
    use comfy_table::{Cell, Table};

    let mut table = Table::new();
    table.set_header(vec!["Topic", "Correct", "Score", "Band"]);
    table.add_row(vec![
        Cell::new(&report.topic.name),
        Cell::new(format!("{}/{}", report.correct, report.total)),
        Cell::new(format!("{}%", report.percentage)),
        Cell::new(report.band.label()),
    ]);
    println!("\n{table}");

    println!("\n{}", report.band.message());
    println!("  Strengths: {}", report.band.strengths());
    println!("  Focus: {}", report.band.focus());

    if !report.missed.is_empty() {
        println!("\nReview:");
        for miss in &report.missed {
            println!("  - {}", miss.text);
            println!("    Your answer: {} | Correct: {}", miss.selected, miss.correct);
        }
    }
}

fn save_report(report: &SessionReport, output: &Path, format: &str) -> Result<()> {
    std::fs::create_dir_all(output)?;
    let timestamp = chrono::Utc::now().format("%Y-%m-%dT%H%M%S");

    let formats: Vec<&str> = if format == "all" {
        vec!["json", "html", "md"]
    } else {
        format.split(',').collect()
    };

    for fmt in &formats {
        match fmt.trim() {
            "json" => {
                let path = output.join(format!("{}-{timestamp}.json", report.topic.id));
                report.save_json(&path)?;
                eprintln!("Report saved to: {}", path.display());
            }
            "html" => {
                let path = output.join(format!("{}-{timestamp}.html", report.topic.id));
                write_html_report(report, &path)?;
                eprintln!("HTML report: {}", path.display());
            }
            "md" | "markdown" => {
                let path = output.join(format!("{}-{timestamp}.md", report.topic.id));
                std::fs::write(&path, render_markdown(report))?;
                eprintln!("Markdown report: {}", path.display());
            }
            other => {
                eprintln!("Unknown format: {other}");
            }
        }
    }

    Ok(())
}
