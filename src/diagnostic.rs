// SPDX-FileCopyrightText: 2026 Sébastien Helleu <flashcode@flashtux.org>
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Diagnostic for localization files.

use std::{
    borrow::Cow,
    path::{Path, PathBuf},
};

use clap::ValueEnum;
use colored::Colorize;
use serde::{
    Serialize,
    ser::{SerializeStruct, Serializer},
};

use propexam::props::Malformed;

const HIGHLIGHT_COLOR: &str = "bright yellow";
const HIGHLIGHT_ON_COLOR: &str = "red";

#[derive(
    Debug, Default, Clone, Copy, PartialEq, Eq, Ord, PartialOrd, Hash, Serialize, ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    #[default]
    Info,
    Warning,
    Error,
}

#[derive(Debug, Default)]
pub struct DiagnosticLine {
    pub line_number: usize,
    pub message: String,
    pub highlights: Vec<(usize, usize)>,
}

#[derive(Debug, Default, Serialize)]
pub struct Diagnostic {
    pub path: PathBuf,
    pub rule: &'static str,
    pub severity: Severity,
    pub message: String,
    pub lines: Vec<DiagnosticLine>,
}

impl std::fmt::Display for Severity {
    /// Format the `Severity` as a colored string for display.
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let s = match self {
            Severity::Info => "info".cyan(),
            Severity::Warning => "warning".yellow(),
            Severity::Error => "error".bright_red().bold(),
        };
        write!(f, "{s}")
    }
}

/// Empty gutter, used for continuation lines of a multi-line text.
const GUTTER_EMPTY: &str = "        | ";

/// Separator displayed before and after the lines of a diagnostic.
const GUTTER_BAR: &str = "        |";

impl Serialize for DiagnosticLine {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        // Highlights are stored as byte offsets, clients expect char offsets.
        let char_pos = |byte_pos: usize| self.message[..byte_pos].chars().count();
        let highlights: Vec<(usize, usize)> = self
            .highlights
            .iter()
            .map(|&(start, end)| (char_pos(start), char_pos(end)))
            .collect();
        let mut state = serializer.serialize_struct("DiagnosticLine", 3)?;
        state.serialize_field("line_number", &self.line_number)?;
        state.serialize_field("message", &self.message)?;
        state.serialize_field("highlights", &highlights)?;
        state.end()
    }
}

impl DiagnosticLine {
    /// Return the text with highlighted parts colored; a part overlapping the
    /// previous one is ignored.
    fn colored_text(&self) -> Cow<'_, str> {
        if self.highlights.is_empty() {
            return Cow::Borrowed(&self.message);
        }
        let mut out = String::with_capacity(self.message.len() * 2);
        let mut pos = 0;
        for &(start, end) in &self.highlights {
            if start < pos {
                continue;
            }
            out.push_str(&self.message[pos..start]);
            let part = self.message[start..end]
                .color(HIGHLIGHT_COLOR)
                .bold()
                .on_color(HIGHLIGHT_ON_COLOR);
            out.push_str(&part.to_string());
            pos = end;
        }
        out.push_str(&self.message[pos..]);
        Cow::Owned(out)
    }

    /// Return the line prefixed by a gutter with its number (no number if 0).
    fn to_gutter_string(&self) -> String {
        let gutter = if self.line_number > 0 {
            format!("{:7} | ", self.line_number)
        } else {
            GUTTER_EMPTY.to_string()
        };
        let mut out = gutter.cyan().to_string();
        for (idx, part) in self.colored_text().lines().enumerate() {
            if idx > 0 {
                out.push('\n');
                out.push_str(&GUTTER_EMPTY.cyan().to_string());
            }
            out.push_str(part);
        }
        out
    }
}

impl Diagnostic {
    /// Create a new `Diagnostic` with the given path, rule, severity, and message.
    pub fn new(path: &Path, rule: &'static str, severity: Severity, message: String) -> Self {
        Self {
            path: PathBuf::from(path),
            rule,
            severity,
            message,
            ..Default::default()
        }
    }

    /// Create a `syntax` diagnostic from a parser error, with the offending text.
    pub fn from_malformed(path: &Path, err: &Malformed) -> Self {
        let mut diagnostic =
            Diagnostic::new(path, "syntax", Severity::Error, err.reason.to_string());
        diagnostic.add_message(err.line_number, &err.text, &[]);
        diagnostic
    }

    pub fn add_message(&mut self, line: usize, message: &str, highlights: &[(usize, usize)]) {
        self.lines.push(DiagnosticLine {
            line_number: line,
            message: message.to_string(),
            highlights: highlights.to_vec(),
        });
    }

    /// Return the line numbers of the diagnostic (used to sort diagnostics).
    pub fn line_numbers(&self) -> Vec<usize> {
        self.lines.iter().map(|l| l.line_number).collect()
    }
}

impl std::fmt::Display for Diagnostic {
    /// Format the `Diagnostic` as `path:line: [severity:rule] message`, followed by
    /// the lines of the file involved.
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let location = self
            .lines
            .first()
            .map(|line| format!(":{}", line.line_number))
            .unwrap_or_default();
        write!(
            f,
            "{}{location}: [{}:{}] {}",
            self.path.display().to_string().white().bold(),
            self.severity,
            self.rule,
            self.message,
        )?;
        if self.lines.is_empty() {
            return writeln!(f);
        }
        let bar = GUTTER_BAR.cyan();
        write!(f, "\n{bar}")?;
        for line in &self.lines {
            write!(f, "\n{}", line.to_gutter_string())?;
        }
        writeln!(f, "\n{bar}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use propexam::props::Reason;

    #[test]
    fn test_from_malformed() {
        let err = Malformed::new(3, Reason::InvalidLine, "no equals sign");
        let diag = Diagnostic::from_malformed(Path::new("fr/app.properties"), &err);
        assert_eq!(diag.rule, "syntax");
        assert_eq!(diag.severity, Severity::Error);
        assert_eq!(diag.message, "invalid line");
        assert_eq!(diag.line_numbers(), vec![3]);
        assert_eq!(diag.lines[0].message, "no equals sign");
    }

    #[test]
    fn test_display() {
        colored::control::set_override(false);
        let mut diag = Diagnostic::new(
            Path::new("app.properties"),
            "escapes",
            Severity::Warning,
            "unknown escape sequence".to_string(),
        );
        diag.add_message(5, "key = a\\qb", &[(7, 9)]);
        assert_eq!(
            diag.to_string(),
            "app.properties:5: [warning:escapes] unknown escape sequence\n\
            \x20       |\n\
            \x20     5 | key = a\\qb\n\
            \x20       |\n"
        );
    }

    #[test]
    fn test_display_multiline_and_no_lines() {
        colored::control::set_override(false);
        let mut diag = Diagnostic::new(
            Path::new("app.properties"),
            "encoding",
            Severity::Error,
            "invalid characters for encoding UTF-8".to_string(),
        );
        assert_eq!(
            diag.to_string(),
            "app.properties: [error:encoding] invalid characters for encoding UTF-8\n"
        );
        diag.add_message(2, "first\nsecond", &[]);
        assert_eq!(
            diag.to_string(),
            "app.properties:2: [error:encoding] invalid characters for encoding UTF-8\n\
            \x20       |\n\
            \x20     2 | first\n\
            \x20       | second\n\
            \x20       |\n"
        );
    }

    #[test]
    fn test_serialize_highlights_as_chars() {
        let mut diag = Diagnostic::new(
            Path::new("app.properties"),
            "escapes",
            Severity::Warning,
            "unknown escape sequence".to_string(),
        );
        diag.add_message(1, "é = \\q", &[(5, 7)]);
        let json = serde_json::to_string(&diag).unwrap();
        assert!(json.contains(r#""severity":"warning""#));
        assert!(json.contains(r#""highlights":[[4,6]]"#));
    }
}
