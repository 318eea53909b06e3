// SPDX-FileCopyrightText: 2026 Sébastien Helleu <flashcode@flashtux.org>
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Implementation of the `encoding` rule: check incorrect encoding.

use crate::checker::Checker;
use crate::diagnostic::Severity;
use crate::rules::rule::RuleChecker;

pub struct EncodingRule {}

impl RuleChecker for EncodingRule {
    fn name(&self) -> &'static str {
        "encoding"
    }

    fn is_default(&self) -> bool {
        true
    }

    fn severity(&self) -> Severity {
        Severity::Error
    }

    /// Check for bytes that are invalid in the encoding of the file.
    ///
    /// The encoding is detected with the byte order mark, with a fallback to the
    /// encoding given on command line or in the configuration, then UTF-8.
    ///
    /// Wrong file (UTF-8 expected, Latin-1 byte for `é`):
    /// ```text
    /// tested = test\xe9
    /// ```
    ///
    /// Correct file:
    /// ```text
    /// tested = testé
    /// ```
    ///
    /// Diagnostics reported with severity [`error`](Severity::Error):
    /// - `invalid characters for encoding xxx`
    fn check_file(&self, checker: &mut Checker) {
        if checker.encoding_error() {
            checker.report_file(format!(
                "invalid characters for encoding {}",
                checker.encoding_name()
            ));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{diagnostic::Diagnostic, rules::rule::Rules};

    fn check_encoding(content: &[u8]) -> Vec<Diagnostic> {
        let rules = Rules::new(vec![Box::new(EncodingRule {})]);
        let mut checker = Checker::new(content, &rules);
        checker.do_all_checks();
        checker.diagnostics
    }

    #[test]
    fn test_encoding_ok() {
        let diags = check_encoding("tested = testé\n".as_bytes());
        assert!(diags.is_empty());
    }

    #[test]
    fn test_encoding_latin1() {
        let rules = Rules::new(vec![Box::new(EncodingRule {})]);
        let mut checker = Checker::new(b"tested = test\xe9\n", &rules)
            .with_encoding(Some(encoding_rs::WINDOWS_1252));
        checker.do_all_checks();
        assert!(checker.diagnostics.is_empty());
    }

    #[test]
    fn test_encoding_error() {
        let diags = check_encoding(b"tested = test\xe9\n");
        assert_eq!(diags.len(), 1);
        let diag = &diags[0];
        assert_eq!(diag.severity, Severity::Error);
        assert_eq!(diag.message, "invalid characters for encoding UTF-8");
        assert!(diag.lines.is_empty());
    }
}
