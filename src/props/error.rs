// SPDX-FileCopyrightText: 2026 Sébastien Helleu <flashcode@flashtux.org>
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Error raised on malformed properties content.

use serde::Serialize;
use thiserror::Error;

/// Reason why the content is malformed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Reason {
    /// A line that is not a comment, not blank and has no `=`.
    InvalidLine,

    /// The part before `=` is empty or only whitespace.
    EmptyKey,

    /// The last line of input ends with a continuation backslash.
    UnterminatedContinuation,

    /// A plural group without explicit or implicit `other` value.
    PluralMissingOther,
}

impl std::fmt::Display for Reason {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let s = match self {
            Reason::InvalidLine => "invalid line",
            Reason::EmptyKey => "empty key",
            Reason::UnterminatedContinuation => "unterminated continuation",
            Reason::PluralMissingOther => "plural missing other",
        };
        write!(f, "{s}")
    }
}

/// The only error kind of the parser.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize)]
#[error("line {line_number}: {reason}")]
pub struct Malformed {
    pub line_number: usize,
    pub reason: Reason,
    pub text: String,
}

impl Malformed {
    /// Create a new `Malformed` error for the logical line starting at `line_number`.
    pub fn new<S: AsRef<str>>(line_number: usize, reason: Reason, text: S) -> Self {
        Self {
            line_number,
            reason,
            text: text.as_ref().to_string(),
        }
    }
}
