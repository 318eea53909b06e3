// SPDX-FileCopyrightText: 2026 Sébastien Helleu <flashcode@flashtux.org>
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Implementation of the `plural-tags` rule: check unknown plural categories.

use propexam::props::entry::Entry;

use crate::checker::Checker;
use crate::diagnostic::Severity;
use crate::rules::rule::RuleChecker;

/// CLDR plural categories.
const PLURAL_TAGS: [&str; 6] = ["zero", "one", "two", "few", "many", "other"];

pub struct PluralTagsRule {}

impl RuleChecker for PluralTagsRule {
    fn name(&self) -> &'static str {
        "plural-tags"
    }

    fn is_default(&self) -> bool {
        true
    }

    fn severity(&self) -> Severity {
        Severity::Error
    }

    /// Check for plural forms with a tag that is not a CLDR plural category
    /// (`zero`, `one`, `two`, `few`, `many`, `other`).
    ///
    /// Wrong entry:
    /// ```text
    /// files[single] = un fichier
    /// files = %d fichiers
    /// ```
    ///
    /// Correct entry:
    /// ```text
    /// files[one] = un fichier
    /// files = %d fichiers
    /// ```
    ///
    /// Diagnostics reported with severity [`error`](Severity::Error):
    /// - `unknown plural category 'xxx'`
    fn check_entry(&self, checker: &mut Checker, entry: &Entry) {
        if let Some(tag) = &entry.plural_tag
            && !PLURAL_TAGS.contains(&tag.as_str())
        {
            checker.report_entry(format!("unknown plural category '{tag}'"), entry, &[]);
        }
    }
}
