// SPDX-FileCopyrightText: 2026 Sébastien Helleu <flashcode@flashtux.org>
//
// SPDX-License-Identifier: GPL-3.0-or-later

use std::collections::HashSet;

use propexam::props::entry::Entry;

use crate::{
    args,
    checker::Checker,
    diagnostic::Severity,
    rules::{duplicates, empty, encoding, escapes, junk, plural_tags},
};

pub type Rule = Box<dyn RuleChecker + Sync>;

#[derive(Default)]
pub struct Rules {
    pub enabled: Vec<Rule>,
}

impl<'a> Default for &'a Rules {
    fn default() -> &'a Rules {
        static RULES: Rules = Rules { enabled: vec![] };
        &RULES
    }
}

impl std::fmt::Debug for Rules {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Rules")
            .field("enabled", &self.names())
            .finish()
    }
}

impl std::fmt::Display for Rule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} [{}]", self.name(), self.severity())
    }
}

impl Rules {
    pub fn new(rules: Vec<Rule>) -> Self {
        Self { enabled: rules }
    }

    /// Return the names of the enabled rules.
    pub fn names(&self) -> Vec<&'static str> {
        self.enabled.iter().map(|r| r.name()).collect()
    }
}

pub trait RuleChecker {
    fn name(&self) -> &'static str;
    fn is_default(&self) -> bool;
    fn severity(&self) -> Severity;
    fn check_file(&self, _checker: &mut Checker) {}
    fn check_entry(&self, _checker: &mut Checker, _entry: &Entry) {}
    fn check_junk(&self, _checker: &mut Checker, _line_number: usize, _text: &str) {}
}

pub fn get_all_rules() -> Vec<Rule> {
    vec![
        Box::new(duplicates::DuplicatesRule {}),
        Box::new(empty::EmptyRule {}),
        Box::new(encoding::EncodingRule {}),
        Box::new(escapes::EscapesRule {}),
        Box::new(junk::JunkRule {}),
        Box::new(plural_tags::PluralTagsRule {}),
    ]
}

/// Get unknown rule names from a list of names compared to all available rules.
pub fn get_unknown_rules<'a>(
    names: &'a [&str],
    all_rules_names: &HashSet<&'static str>,
) -> Vec<&'a str> {
    let selected_rules_names = names.iter().copied().collect::<HashSet<_>>();
    let mut unknown_rules_names: HashSet<&str> = selected_rules_names
        .difference(all_rules_names)
        .copied()
        .collect();
    // The special rule "all" is always known, we just ignore it.
    unknown_rules_names.remove(&"all");
    if unknown_rules_names.is_empty() {
        return vec![];
    }
    let mut unknown = unknown_rules_names.iter().copied().collect::<Vec<_>>();
    unknown.sort_unstable();
    unknown
}

/// Get the selected rules from the comma-separated lists `select` and `ignore`.
///
/// If `select` is set, only the specified rules are included, otherwise all default
/// rules are included. Then, any rules specified in `ignore` are removed from the
/// selection. Only rules with one of the severities are kept (all if empty).
pub fn get_selected_rules(
    select: Option<&str>,
    ignore: Option<&str>,
    severities: &[Severity],
) -> Result<Rules, Box<dyn std::error::Error>> {
    let all_rules: Vec<Rule> = get_all_rules()
        .into_iter()
        .filter(|r| severities.is_empty() || severities.contains(&r.severity()))
        .collect();
    let all_rules_names: HashSet<&'static str> = all_rules.iter().map(|r| r.name()).collect();
    let mut selected_rules: Vec<Rule> = Vec::new();

    if let Some(select_str) = select {
        let names: Vec<&str> = select_str.split(',').map(str::trim).collect();
        let unknown_rules_names = get_unknown_rules(&names, &all_rules_names);
        if !unknown_rules_names.is_empty() {
            return Err(
                format!("unknown selected rules: {}", unknown_rules_names.join(", ")).into(),
            );
        }
        if names.contains(&"all") {
            selected_rules = all_rules;
        } else {
            for rule in all_rules {
                if names.contains(&rule.name()) {
                    selected_rules.push(rule);
                }
            }
        }
    } else {
        for rule in all_rules {
            if rule.is_default() {
                selected_rules.push(rule);
            }
        }
    }

    if let Some(ignore_str) = ignore {
        let names: Vec<&str> = ignore_str.split(',').map(str::trim).collect();
        let unknown_rules_names = get_unknown_rules(&names, &all_rules_names);
        if !unknown_rules_names.is_empty() {
            return Err(format!(
                "unknown rules to ignore: {}",
                unknown_rules_names.join(", ")
            )
            .into());
        }
        selected_rules.retain(|rule| !names.contains(&rule.name()));
    }

    Ok(Rules::new(selected_rules))
}

/// Display rules used to check files.
pub fn run_rules(_args: &args::RulesArgs) -> i32 {
    let rules = get_all_rules();
    let default_rules: Vec<&Rule> = rules.iter().filter(|r| r.is_default()).collect();
    let other_rules: Vec<&Rule> = rules.iter().filter(|r| !r.is_default()).collect();
    if default_rules.is_empty() {
        println!("No default rules.");
    } else {
        println!("{} default rules:", default_rules.len());
        for rule in &default_rules {
            println!("  {rule}");
        }
    }
    if other_rules.is_empty() {
        println!("No other rules.");
    } else {
        println!("{} other rules:", other_rules.len());
        for rule in &other_rules {
            println!("  {rule}");
        }
    }
    println!("Total: {} rules", default_rules.len() + other_rules.len());
    0
}
