//! The `radquiz init` command.

use anyhow::Result;

pub fn execute() -> Result<()> {
    // Create radquiz.toml
    if std::path::Path::new("radquiz.toml").exists() {
        println!("radquiz.toml already exists, skipping.");
    } else {
        std::fs::write("radquiz.toml", SAMPLE_CONFIG)?;
        println!("Created radquiz.toml");
    }

    // Create example question bank
    std::fs::create_dir_all("question-banks")?;
    let example_path = std::path::Path::new("question-banks/example.toml");
    if example_path.exists() {
        println!("question-banks/example.toml already exists, skipping.");
    } else {
        std::fs::write(example_path, EXAMPLE_BANK)?;
        println!("Created question-banks/example.toml");
    }

    println!("\nNext steps:");
    println!("  1. Add your own topics under question-banks/");
    println!("  2. Run: radquiz validate --bank question-banks/example.toml");
    println!("  3. Run: radquiz take --bank question-banks/example.toml");

    Ok(())
}

const SAMPLE_CONFIG: &str = r#"# radquiz configuration

bank_dir = "question-banks"
output_dir = "./radquiz-reports"
default_format = "json"
"#;

const EXAMPLE_BANK: &str = r#"[topic]
id = "example"
name = "Example Topic"
description = "A small example bank to get started"

[[questions]]
id = "ex-001"
text = "Which projection places the image receptor against the anterior chest?"
kind = "mcq"
options = ["AP", "PA", "Lateral", "Oblique"]
correct_answer = "B"
explanation = "PA means the beam enters posteriorly and exits anteriorly into the receptor."

[[questions]]
id = "ex-002"
text = "Increasing kVp increases beam penetrability."
kind = "tf"
options = ["True", "False"]
correct_answer = "True"
explanation = "Higher tube potential raises the average photon energy of the beam."
"#;
