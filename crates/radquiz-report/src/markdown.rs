//! Markdown report renderer.

use radquiz_core::report::SessionReport;

/// Render a finished-session report as markdown.
pub fn render_markdown(report: &SessionReport) -> String {
    let mut md = String::new();

    md.push_str(&format!("# {} — practice report\n\n", report.topic.name));
    md.push_str(&format!(
        "{} | {} questions\n\n",
        report.created_at.format("%Y-%m-%d %H:%M UTC"),
        report.topic.question_count
    ));

    md.push_str(&format!(
        "**Score:** {}/{} ({}%) — **{}**\n\n",
        report.correct,
        report.total,
        report.percentage,
        report.band.label()
    ));
    md.push_str(&format!("{}\n\n", report.band.message()));
    md.push_str(&format!("- Strengths: {}\n", report.band.strengths()));
    md.push_str(&format!("- Focus: {}\n\n", report.band.focus()));

    if !report.missed.is_empty() {
        md.push_str("## Review\n\n");
        for miss in &report.missed {
            md.push_str(&format!("### {}\n\n", miss.text));
            md.push_str(&format!("- Your answer: {}\n", miss.selected));
            md.push_str(&format!("- Correct answer: {}\n", miss.correct));
            if !miss.explanation.is_empty() {
                md.push_str(&format!("- {}\n", miss.explanation));
            }
            md.push('\n');
        }
    }

    md
}
