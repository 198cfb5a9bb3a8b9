//! radquiz-report — rendering of finished practice sessions.
//!
//! Turns a `SessionReport` from `radquiz-core` into Markdown or a
//! self-contained HTML page.

pub mod html;
pub mod markdown;

pub use html::{generate_html, write_html_report};
pub use markdown::render_markdown;
