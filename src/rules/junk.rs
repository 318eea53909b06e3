// SPDX-FileCopyrightText: 2026 Sébastien Helleu <flashcode@flashtux.org>
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Implementation of the `junk` rule: check unparsable lines in INI files.

use crate::checker::Checker;
use crate::diagnostic::Severity;
use crate::rules::rule::RuleChecker;

pub struct JunkRule {}

impl RuleChecker for JunkRule {
    fn name(&self) -> &'static str {
        "junk"
    }

    fn is_default(&self) -> bool {
        true
    }

    fn severity(&self) -> Severity {
        Severity::Error
    }

    /// Check for lines of an INI section that are neither a comment, a section header
    /// nor a `key=value` assignment.
    ///
    /// Wrong file:
    /// ```text
    /// [Strings]
    /// Title=Software Update
    /// this line is not valid
    /// ```
    ///
    /// Correct file:
    /// ```text
    /// [Strings]
    /// Title=Software Update
    /// ; this line is a comment
    /// ```
    ///
    /// Diagnostics reported with severity [`error`](Severity::Error):
    /// - `invalid line in section`
    fn check_junk(&self, checker: &mut Checker, line_number: usize, text: &str) {
        checker.report_line("invalid line in section".to_string(), line_number, text);
    }
}
