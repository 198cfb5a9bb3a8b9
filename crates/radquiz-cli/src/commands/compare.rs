//! The `radquiz compare` command.

use std::path::PathBuf;

use anyhow::Result;

use radquiz_core::report::SessionReport;

pub fn execute(baseline_path: PathBuf, current_path: PathBuf, format: String) -> Result<()> {
    let baseline = SessionReport::load_json(&baseline_path)?;
    let current = SessionReport::load_json(&current_path)?;

    if baseline.topic.id != current.topic.id {
        eprintln!(
            "Warning: comparing different topics ('{}' vs '{}')",
            baseline.topic.id, current.topic.id
        );
    }

    let cmp = current.compare(&baseline);

    match format.as_str() {
        "markdown" | "md" => {
            println!("{}", cmp.to_markdown());
        }
        "json" => {
            println!("{}", serde_json::to_string_pretty(&cmp)?);
        }
        _ => {
            // text format
            println!(
                "{}: {}% -> {}% ({:+} points)",
                cmp.topic_id, cmp.baseline_percentage, cmp.current_percentage, cmp.delta
            );
            println!(
                "Band: {} -> {}",
                cmp.baseline_band.label(),
                cmp.current_band.label()
            );

            if !cmp.fixed.is_empty() {
                println!("\nFixed since the baseline:");
                for id in &cmp.fixed {
                    println!("  {id}");
                }
            }
            if !cmp.newly_missed.is_empty() {
                println!("\nNewly missed:");
                for id in &cmp.newly_missed {
                    println!("  {id}");
                }
            }

            if cmp.improved() {
                println!("\nUp {} points from the baseline.", cmp.delta);
            } else if cmp.declined() {
                println!("\nDown {} points from the baseline.", -cmp.delta);
            } else {
                println!("\nNo change from the baseline.");
            }
        }
    }

    Ok(())
}
