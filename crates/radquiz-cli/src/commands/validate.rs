//! The `radquiz validate` command.

use std::path::PathBuf;

use anyhow::Result;

pub fn execute(bank_path: PathBuf) -> Result<()> {
    let topics = if bank_path.is_dir() {
        radquiz_core::bank::load_bank_directory(&bank_path)?
    } else {
        vec![radquiz_core::bank::parse_topic(&bank_path)?]
    };

    let mut total_warnings = 0;

    for topic in &topics {
        println!("Topic: {} ({} questions)", topic.name, topic.questions.len());

        let warnings = radquiz_core::bank::validate_topic(topic);
        for w in &warnings {
            let prefix = w
                .question_id
                .as_ref()
                .map(|id| format!("  [{id}]"))
                .unwrap_or_else(|| "  ".to_string());
            println!("{prefix} WARNING: {}", w.message);
        }
        total_warnings += warnings.len();
    }

    if total_warnings == 0 {
        println!("All question banks valid.");
    } else {
        println!("\n{total_warnings} warning(s) found.");
    }

    Ok(())
}
