//! Markdown rendering for the goal-description preview.
//!
//! Raw HTML in the source is dropped, not passed through: the preview
//! renders user input.

#[cfg(test)]
#[path = "markdown_test.rs"]
mod markdown_test;

use pulldown_cmark::{Event, Parser, html};

/// Render markdown to HTML with raw HTML blocks and inline HTML removed.
#[must_use]
pub fn render(source: &str) -> String {
    let events = Parser::new(source).filter(|event| {
        !matches!(event, Event::Html(_) | Event::InlineHtml(_))
    });
    let mut out = String::new();
    html::push_html(&mut out, events);
    out
}
