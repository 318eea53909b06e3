// SPDX-FileCopyrightText: 2026 Sébastien Helleu <flashcode@flashtux.org>
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Implementation of the `duplicates` rule: check keys defined more than once.

use propexam::props::entry::Entry;

use crate::checker::Checker;
use crate::diagnostic::Severity;
use crate::rules::rule::RuleChecker;

pub struct DuplicatesRule {}

impl RuleChecker for DuplicatesRule {
    fn name(&self) -> &'static str {
        "duplicates"
    }

    fn is_default(&self) -> bool {
        true
    }

    fn severity(&self) -> Severity {
        Severity::Warning
    }

    /// Check for keys (or plural forms of a key) defined more than once.
    ///
    /// The last definition is the one used, the previous ones are silently lost.
    /// A plain value and the `other` plural form of the same key are the same
    /// definition.
    ///
    /// Wrong entries:
    /// ```text
    /// title = Titre
    /// title = Nouveau titre
    /// ```
    ///
    /// Correct entry:
    /// ```text
    /// title = Nouveau titre
    /// ```
    ///
    /// Diagnostics reported with severity [`warning`](Severity::Warning):
    /// - `duplicate key 'xxx' (first defined on line #)`
    fn check_entry(&self, checker: &mut Checker, entry: &Entry) {
        if let Some(line_number) = checker.previous_line() {
            checker.report_entry(
                format!(
                    "duplicate key '{}' (first defined on line {line_number})",
                    entry.full_key()
                ),
                entry,
                &[],
            );
        }
    }
}
