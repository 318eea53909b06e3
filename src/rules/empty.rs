// SPDX-FileCopyrightText: 2026 Sébastien Helleu <flashcode@flashtux.org>
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Implementation of the `empty` rule: check empty values.

use propexam::props::entry::Entry;

use crate::checker::Checker;
use crate::diagnostic::Severity;
use crate::rules::rule::RuleChecker;

pub struct EmptyRule {}

impl RuleChecker for EmptyRule {
    fn name(&self) -> &'static str {
        "empty"
    }

    fn is_default(&self) -> bool {
        false
    }

    fn severity(&self) -> Severity {
        Severity::Info
    }

    /// Check for empty values.
    ///
    /// This rule is not enabled by default: an empty value is valid and sometimes
    /// intended.
    ///
    /// Wrong entry:
    /// ```text
    /// title =
    /// ```
    ///
    /// Correct entry:
    /// ```text
    /// title = Titre
    /// ```
    ///
    /// Diagnostics reported with severity [`info`](Severity::Info):
    /// - `empty value`
    fn check_entry(&self, checker: &mut Checker, entry: &Entry) {
        if entry.value.is_empty() {
            checker.report_entry("empty value".to_string(), entry, &[]);
        }
    }
}
