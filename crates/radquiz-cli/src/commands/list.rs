//! The `radquiz list` command.

use std::path::PathBuf;

use anyhow::Result;
use comfy_table::{Cell, Table};

use crate::config::load_config_from;

pub fn execute(bank: Option<PathBuf>, config_path: Option<PathBuf>) -> Result<()> {
    let config = load_config_from(config_path.as_deref())?;
    let bank_dir = bank.unwrap_or(config.bank_dir);

    let topics = radquiz_core::bank::load_bank_directory(&bank_dir)?;
    if topics.is_empty() {
        println!("No topics found under {}.", bank_dir.display());
        return Ok(());
    }

    let mut table = Table::new();
    table.set_header(vec!["ID", "Name", "Questions"]);
    for topic in &topics {
        table.add_row(vec![
            Cell::new(&topic.id),
            Cell::new(&topic.name),
            Cell::new(topic.questions.len()),
        ]);
    }
    println!("{table}");

    Ok(())
}
