// SPDX-FileCopyrightText: 2026 Sébastien Helleu <flashcode@flashtux.org>
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Implementation of the `escapes` rule: check unknown or incomplete escape sequences.

use propexam::props::entry::Entry;

use crate::checker::Checker;
use crate::diagnostic::Severity;
use crate::rules::rule::RuleChecker;

/// Characters that can follow a backslash (other than `u`).
const KNOWN_ESCAPES: [char; 9] = ['n', 'r', 't', '\\', '=', ':', '#', '!', ' '];

pub struct EscapesRule {}

/// Return the positions of unknown escape sequences and incomplete unicode escapes
/// in a raw value.
fn find_bad_escapes(raw: &str) -> (Vec<(usize, usize)>, Vec<(usize, usize)>) {
    let mut unknown = Vec::new();
    let mut incomplete = Vec::new();
    let mut it = raw.char_indices().peekable();
    while let Some((idx, ch)) = it.next() {
        if ch != '\\' {
            continue;
        }
        match it.next() {
            Some((_, 'u')) => {
                let mut end = idx + 2;
                let mut digits = 0;
                while digits < 4
                    && let Some((pos, c)) = it.peek().copied()
                    && c.is_ascii_hexdigit()
                {
                    end = pos + 1;
                    digits += 1;
                    it.next();
                }
                if digits < 4 {
                    incomplete.push((idx, end));
                }
            }
            Some((pos, c)) if !KNOWN_ESCAPES.contains(&c) => {
                unknown.push((idx, pos + c.len_utf8()));
            }
            _ => {}
        }
    }
    (unknown, incomplete)
}

impl RuleChecker for EscapesRule {
    fn name(&self) -> &'static str {
        "escapes"
    }

    fn is_default(&self) -> bool {
        true
    }

    fn severity(&self) -> Severity {
        Severity::Warning
    }

    /// Check for unknown escape sequences and incomplete unicode escapes in values.
    ///
    /// An unknown escape sequence like `\q` is decoded as the character itself, the
    /// backslash is lost. A unicode escape with less than 4 hexadecimal digits is
    /// decoded with the digits found.
    ///
    /// Wrong entries:
    /// ```text
    /// path = C:\data
    /// letter = \u41
    /// ```
    ///
    /// Correct entries:
    /// ```text
    /// path = C:\\data
    /// letter = \u0041
    /// ```
    ///
    /// Diagnostics reported with severity [`warning`](Severity::Warning):
    /// - `unknown escape sequence`
    /// - `incomplete unicode escape`
    fn check_entry(&self, checker: &mut Checker, entry: &Entry) {
        if !entry.raw_value.contains('\\') {
            return;
        }
        let (unknown, incomplete) = find_bad_escapes(&entry.raw_value);
        if !unknown.is_empty() {
            checker.report_entry("unknown escape sequence".to_string(), entry, &unknown);
        }
        if !incomplete.is_empty() {
            checker.report_entry("incomplete unicode escape".to_string(), entry, &incomplete);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{diagnostic::Diagnostic, rules::rule::Rules};

    fn check_escapes(content: &str) -> Vec<Diagnostic> {
        let rules = Rules::new(vec![Box::new(EscapesRule {})]);
        let mut checker = Checker::new(content.as_bytes(), &rules);
        checker.do_all_checks();
        checker.diagnostics
    }

    #[test]
    fn test_find_bad_escapes() {
        assert_eq!(find_bad_escapes("a\\nb\\u0041\\\\"), (vec![], vec![]));
        assert_eq!(find_bad_escapes("a\\qb"), (vec![(1, 3)], vec![]));
        assert_eq!(find_bad_escapes("\\u41z"), (vec![], vec![(0, 4)]));
        assert_eq!(find_bad_escapes("\\u"), (vec![], vec![(0, 2)]));
        assert_eq!(find_bad_escapes("\\é\\x"), (vec![(0, 3), (3, 5)], vec![]));
    }

    #[test]
    fn test_escapes_ok() {
        let diags = check_escapes(
            "newline = a\\nb\ntab = a\\tb\nbackslash = C:\\\\temp\nletter = \\u0041\n\
             equal = a\\=b\n",
        );
        assert!(diags.is_empty());
    }

    #[test]
    fn test_unknown_escape() {
        let diags = check_escapes("path = C:\\data\\qa\n");
        assert_eq!(diags.len(), 1);
        let diag = &diags[0];
        assert_eq!(diag.severity, Severity::Warning);
        assert_eq!(diag.message, "unknown escape sequence");
        assert_eq!(diag.lines[0].message, "path = C:\\data\\qa");
        assert_eq!(diag.lines[0].highlights, vec![(9, 11), (14, 16)]);
    }

    #[test]
    fn test_incomplete_unicode() {
        let diags = check_escapes("letter = \\u41\n");
        assert_eq!(diags.len(), 1);
        assert_eq!(diags[0].message, "incomplete unicode escape");
        assert_eq!(diags[0].lines[0].highlights, vec![(9, 13)]);
    }
}
