// SPDX-FileCopyrightText: 2026 Sébastien Helleu <flashcode@flashtux.org>
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Line normalizer: join raw lines into logical lines.

use crate::props::error::{Malformed, Reason};

/// Whitespace trimmed around keys and values and at the start of continued lines.
pub const WHITESPACE: [char; 2] = [' ', '\t'];

/// One or more raw lines joined by continuation backslashes.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct LogicalLine {
    /// Line number (starting at 1) of the first raw line.
    pub line_number: usize,
    /// Byte offset of the first raw line (each raw line counts with one newline).
    pub start: usize,
    /// Byte offset of the end of the last raw line (newline excluded).
    pub end: usize,
    pub text: String,
    pub comment: bool,
}

#[derive(Debug)]
struct RawLine {
    number: usize,
    start: usize,
    end: usize,
    text: String,
}

/// Return `true` if the line is empty or contains only whitespace.
#[must_use]
pub fn is_blank(line: &str) -> bool {
    line.trim_matches(WHITESPACE).is_empty()
}

/// Return `true` if the string ends with a backslash that is not itself escaped.
#[must_use]
pub fn ends_with_lone_backslash(s: &str) -> bool {
    s.bytes().rev().take_while(|&b| b == b'\\').count() % 2 == 1
}

/// Iterator over logical lines built from an iterator of raw lines.
///
/// Blank lines are skipped, comment lines are yielded as-is (they never continue).
pub struct LogicalLines<I> {
    lines: I,
    comment_chars: &'static [char],
    line_number: usize,
    offset: usize,
    done: bool,
}

impl<I, S> LogicalLines<I>
where
    I: Iterator<Item = S>,
    S: AsRef<str>,
{
    /// Create a new `LogicalLines` where comments start with one of `comment_chars`.
    pub fn new(lines: I, comment_chars: &'static [char]) -> Self {
        Self {
            lines,
            comment_chars,
            line_number: 0,
            offset: 0,
            done: false,
        }
    }

    /// Return `true` if the first non-whitespace char of the line starts a comment.
    fn is_comment(&self, line: &str) -> bool {
        line.trim_start_matches(WHITESPACE)
            .starts_with(self.comment_chars)
    }

    /// Return the next raw line with its trailing carriage return removed.
    fn next_raw(&mut self) -> Option<RawLine> {
        let item = self.lines.next()?;
        let line = item.as_ref();
        self.line_number += 1;
        let start = self.offset;
        self.offset += line.len() + 1;
        let text = line.strip_suffix('\r').unwrap_or(line);
        Some(RawLine {
            number: self.line_number,
            start,
            end: start + text.len(),
            text: text.to_string(),
        })
    }
}

impl<I, S> Iterator for LogicalLines<I>
where
    I: Iterator<Item = S>,
    S: AsRef<str>,
{
    type Item = Result<LogicalLine, Malformed>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        loop {
            let Some(first) = self.next_raw() else {
                self.done = true;
                return None;
            };
            if is_blank(&first.text) {
                continue;
            }
            if self.is_comment(&first.text) {
                return Some(Ok(LogicalLine {
                    line_number: first.number,
                    start: first.start,
                    end: first.end,
                    text: first.text,
                    comment: true,
                }));
            }
            let mut text = first.text;
            let mut end = first.end;
            while ends_with_lone_backslash(&text) {
                text.pop();
                let Some(raw) = self.next_raw() else {
                    self.done = true;
                    return Some(Err(Malformed::new(
                        first.number,
                        Reason::UnterminatedContinuation,
                        text,
                    )));
                };
                text.push_str(raw.text.trim_start_matches(WHITESPACE));
                end = raw.end;
            }
            return Some(Ok(LogicalLine {
                line_number: first.number,
                start: first.start,
                end,
                text,
                comment: false,
            }));
        }
    }
}
