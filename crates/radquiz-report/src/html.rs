//! HTML report generator.
//!
//! Produces a self-contained HTML file with all CSS inlined.

use anyhow::Result;
use std::path::Path;

use radquiz_core::report::SessionReport;

/// Escape a string for safe HTML insertion.
fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#x27;")
}

/// Generate an HTML page from a finished-session report.
pub fn generate_html(report: &SessionReport) -> String {
    let mut html = String::new();

    html.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n");
    html.push_str("<meta charset=\"utf-8\">\n");
    html.push_str("<meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n");
    html.push_str(&format!(
        "<title>radquiz report — {}</title>\n",
        html_escape(&report.topic.name)
    ));
    html.push_str("<style>\n");
    html.push_str(CSS);
    html.push_str("</style>\n");
    html.push_str("</head>\n<body>\n");

    // Header
    html.push_str("<header>\n");
    html.push_str(&format!("<h1>{}</h1>\n", html_escape(&report.topic.name)));
    html.push_str(&format!(
        "<p class=\"meta\">{} questions | {} | {:.1} minutes</p>\n",
        report.topic.question_count,
        report.created_at.format("%Y-%m-%d %H:%M UTC"),
        report.duration_ms as f64 / 60_000.0
    ));
    html.push_str("</header>\n");

    // Score dashboard
    html.push_str("<section class=\"dashboard\">\n");
    html.push_str(&format!(
        "<div class=\"tile\"><span class=\"value\">{}/{}</span><span class=\"label\">Correct</span></div>\n",
        report.correct, report.total
    ));
    html.push_str(&format!(
        "<div class=\"tile\"><span class=\"value\">{}%</span><span class=\"label\">Score</span></div>\n",
        report.percentage
    ));
    html.push_str(&format!(
        "<div class=\"tile band\"><span class=\"value\">{}</span><span class=\"label\">Band</span></div>\n",
        html_escape(report.band.label())
    ));
    html.push_str("</section>\n");

    // Band text
    html.push_str("<section class=\"feedback\">\n");
    html.push_str(&format!("<p>{}</p>\n", html_escape(report.band.message())));
    html.push_str("<ul>\n");
    html.push_str(&format!(
        "<li><strong>Strengths:</strong> {}</li>\n",
        html_escape(report.band.strengths())
    ));
    html.push_str(&format!(
        "<li><strong>Focus:</strong> {}</li>\n",
        html_escape(report.band.focus())
    ));
    html.push_str("</ul>\n</section>\n");

    // Missed-question review
    if !report.missed.is_empty() {
        html.push_str("<section class=\"review\">\n");
        html.push_str("<h2>Review</h2>\n");
        html.push_str("<table class=\"review-table\">\n");
        html.push_str(
            "<thead><tr><th>Question</th><th>Your answer</th><th>Correct answer</th><th>Explanation</th></tr></thead>\n",
        );
        html.push_str("<tbody>\n");
        for miss in &report.missed {
            html.push_str(&format!(
                "<tr><td>{}</td><td class=\"wrong\">{}</td><td class=\"right\">{}</td><td>{}</td></tr>\n",
                html_escape(&miss.text),
                html_escape(&miss.selected),
                html_escape(&miss.correct),
                html_escape(&miss.explanation),
            ));
        }
        html.push_str("</tbody></table>\n");
        html.push_str("</section>\n");
    }

    // Raw JSON
    html.push_str("<section class=\"raw-data\">\n");
    html.push_str("<details>\n<summary>Raw JSON Data</summary>\n");
    html.push_str("<pre><code>");
    html.push_str(
        &serde_json::to_string_pretty(report)
            .unwrap_or_default()
            .replace('<', "&lt;")
            .replace('>', "&gt;"),
    );
    html.push_str("</code></pre>\n");
    html.push_str("</details>\n</section>\n");

    html.push_str("</body>\n</html>\n");
    html
}

/// Write an HTML report to a file.
pub fn write_html_report(report: &SessionReport, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, generate_html(report))?;
    Ok(())
}

const CSS: &str = r#"
body {
    font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, sans-serif;
    max-width: 900px;
    margin: 0 auto;
    padding: 2rem;
    color: #1a202c;
    background: #f7fafc;
}
header h1 { margin-bottom: 0.25rem; }
.meta { color: #718096; margin-top: 0; }
.dashboard { display: flex; gap: 1rem; margin: 1.5rem 0; }
.tile {
    background: white;
    border: 1px solid #e2e8f0;
    border-radius: 8px;
    padding: 1rem 1.5rem;
    display: flex;
    flex-direction: column;
}
.tile .value { font-size: 1.6rem; font-weight: 600; }
.tile .label { color: #718096; font-size: 0.85rem; }
.tile.band .value { color: #2b6cb0; }
.feedback { background: white; border: 1px solid #e2e8f0; border-radius: 8px; padding: 1rem 1.5rem; }
.review-table { width: 100%; border-collapse: collapse; background: white; }
.review-table th, .review-table td {
    border: 1px solid #e2e8f0;
    padding: 0.5rem 0.75rem;
    text-align: left;
    vertical-align: top;
}
.review-table th { background: #edf2f7; }
td.wrong { color: #c53030; }
td.right { color: #2f855a; }
.raw-data { margin-top: 2rem; }
.raw-data pre { background: #edf2f7; padding: 1rem; overflow-x: auto; border-radius: 8px; }
"#;
