//! # Template Rendering
//!
//! Pours a digit string into an ASCII-art template.
//!
//! - `_` renders as a space
//! - `*` renders as the next unused digit, or stays `*` once digits run out
//! - any other character renders verbatim
//!
//! The template file is read as whitespace-separated tokens and each token
//! renders as one output line, so spaces must be spelled `_` and blank lines
//! disappear. Digits left over after the last line are appended as one
//! trailing line. Without a template the output is `3.`
//! followed by the digits.

use std::fs;
use std::io;
use std::path::Path;

use tracing::warn;

pub const SPACE_MARKER: char = '_';
pub const DIGIT_MARKER: char = '*';

/// Parsed template: one entry per whitespace-separated token.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Template {
    lines: Vec<String>,
}

impl Template {
    pub fn load(path: impl AsRef<Path>) -> io::Result<Self> {
        Ok(Self::from_text(&fs::read_to_string(path)?))
    }

    pub fn from_text(text: &str) -> Self {
        let lines = text.split_whitespace().map(str::to_string).collect();
        Self { lines }
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Number of digit slots in the template.
    pub fn capacity(&self) -> usize {
        self.lines
            .iter()
            .map(|line| line.chars().filter(|&c| c == DIGIT_MARKER).count())
            .sum()
    }

    /// Renders `digits` into the template.
    pub fn render(&self, digits: &str) -> String {
        let mut digits = digits.chars();
        let mut out: Vec<String> = self
            .lines
            .iter()
            .map(|line| {
                line.chars()
                    .map(|c| match c {
                        SPACE_MARKER => ' ',
                        DIGIT_MARKER => digits.next().unwrap_or(DIGIT_MARKER),
                        other => other,
                    })
                    .collect()
            })
            .collect();

        let rest: String = digits.collect();
        if !rest.is_empty() {
            out.push(rest);
        }
        out.join("\n")
    }
}

/// `3.` followed by the digits, used when no template is available.
pub fn render_fallback(digits: &str) -> String {
    format!("3.{}", digits)
}

/// Renders into `template`, or falls back to the plain form.
pub fn render(template: Option<&Template>, digits: &str) -> String {
    match template {
        Some(template) => template.render(digits),
        None => render_fallback(digits),
    }
}

/// Loads the template at `path` and renders into it.
///
/// A missing or unreadable template is not an error: the plain form is
/// returned instead.
pub fn render_from_path(path: impl AsRef<Path>, digits: &str) -> String {
    let path = path.as_ref();
    match Template::load(path) {
        Ok(template) => template.render(digits),
        Err(err) => {
            warn!(path = %path.display(), error = %err, "template unavailable, printing plain digits");
            render_fallback(digits)
        }
    }
}
