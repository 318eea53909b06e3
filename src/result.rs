// SPDX-FileCopyrightText: 2026 Sébastien Helleu <flashcode@flashtux.org>
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Display check result.

use std::{collections::BTreeMap, path::PathBuf, time::Duration};

use crate::{
    args,
    checker::CheckResult,
    diagnostic::{Diagnostic, Severity},
};

/// Number of diagnostics found in a file, by severity.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
struct Counts {
    info: usize,
    warnings: usize,
    errors: usize,
}

impl Counts {
    fn add(&mut self, severity: Severity) {
        match severity {
            Severity::Info => self.info += 1,
            Severity::Warning => self.warnings += 1,
            Severity::Error => self.errors += 1,
        }
    }

    fn total(&self) -> usize {
        self.info + self.warnings + self.errors
    }
}

/// Sort diagnostics according to the command-line option.
fn sort_diagnostics<'a>(result: &'a [CheckResult], sort: &args::CheckSort) -> Vec<&'a Diagnostic> {
    let mut diags: Vec<&Diagnostic> = result.iter().flat_map(|x| &x.1).collect();
    match sort {
        args::CheckSort::Line => {
            diags.sort_by_key(|diag| (diag.path.as_path(), diag.line_numbers()));
        }
        args::CheckSort::Message => {
            diags.sort_by_key(|diag| {
                (
                    diag.lines.first().map_or("", |line| &line.message),
                    diag.path.as_path(),
                    diag.line_numbers(),
                )
            });
        }
        args::CheckSort::Rule => {
            diags.sort_by_key(|diag| (diag.rule, diag.path.as_path(), diag.line_numbers()));
        }
    }
    diags
}

/// Display diagnostics in human format.
fn display_diagnostics_human(result: &[CheckResult], args: &args::CheckArgs) {
    for diag in sort_diagnostics(result, &args.sort) {
        println!("{diag}");
    }
}

/// Display diagnostics in JSON format.
fn display_diagnostics_json(result: &[CheckResult], args: &args::CheckArgs) {
    let diags = sort_diagnostics(result, &args.sort);
    println!("{}", serde_json::to_string(&diags).unwrap_or_default());
}

/// Display rule statistics.
fn display_rule_stats(result: &[CheckResult]) {
    let mut count_rule_errors = BTreeMap::<&str, usize>::new();
    for rule in result.iter().flat_map(|x| &x.1).map(|r| r.rule) {
        *count_rule_errors.entry(rule).or_insert(0) += 1;
    }
    let mut items: Vec<_> = count_rule_errors.iter().collect();
    items.sort_by(|a, b| b.1.cmp(a.1));
    println!("Errors by rule:");
    for (rule, count) in items {
        println!("  {rule}: {count}");
    }
}

/// Display file statistics.
fn display_file_stats(file_errors: &[(PathBuf, Counts)]) {
    for (filename, counts) in file_errors {
        if counts.total() == 0 {
            println!("{}: all OK!", filename.display());
        } else {
            println!(
                "{}: {} problems ({} errors, {} warnings, {} info)",
                filename.display(),
                counts.total(),
                counts.errors,
                counts.warnings,
                counts.info,
            );
        }
    }
}

/// Display the result of the checks and return the appropriate exit code.
pub fn display_result(result: &[CheckResult], args: &args::CheckArgs, elapsed: &Duration) -> i32 {
    let files_checked = result.len();
    let mut files_with_errors = 0;
    let mut counts = Counts::default();
    let mut file_errors: Vec<(PathBuf, Counts)> = Vec::new();
    for (filename, diags) in result {
        let mut file_counts = Counts::default();
        if !diags.is_empty() {
            files_with_errors += 1;
        }
        for diag in diags {
            counts.add(diag.severity);
            file_counts.add(diag.severity);
        }
        if args.file_stats {
            file_errors.push((filename.clone(), file_counts));
        }
    }
    if !args.quiet {
        match args.output {
            args::OutputFormat::Human => {
                if !args.no_errors {
                    display_diagnostics_human(result, args);
                }
                if args.rule_stats {
                    display_rule_stats(result);
                }
                if args.file_stats {
                    file_errors.sort();
                    display_file_stats(&file_errors);
                }
            }
            args::OutputFormat::Json => {
                if !args.no_errors {
                    display_diagnostics_json(result, args);
                }
            }
        }
    }
    let human = !args.quiet && args.output == args::OutputFormat::Human;
    if files_with_errors == 0 {
        if human {
            if files_checked > 0 {
                println!("{files_checked} files checked: all OK! [{elapsed:?}]");
            } else {
                println!("No files checked [{elapsed:?}]");
            }
        }
        0
    } else {
        if human {
            println!(
                "{files_checked} files checked: \
                {} problems \
                in {files_with_errors} files \
                ({} errors, \
                {} warnings, \
                {} info) \
                [{elapsed:?}]",
                counts.total(),
                counts.errors,
                counts.warnings,
                counts.info,
            );
        }
        1
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    fn diag(path: &str, rule: &'static str, severity: Severity, line: usize) -> Diagnostic {
        let mut diag = Diagnostic::new(Path::new(path), rule, severity, rule.to_string());
        diag.add_message(line, &format!("line {line}"), &[]);
        diag
    }

    fn sample() -> Vec<CheckResult> {
        vec![
            (
                PathBuf::from("b.properties"),
                vec![
                    diag("b.properties", "escapes", Severity::Warning, 7),
                    diag("b.properties", "duplicates", Severity::Warning, 2),
                ],
            ),
            (
                PathBuf::from("a.properties"),
                vec![diag("a.properties", "syntax", Severity::Error, 9)],
            ),
            (PathBuf::from("c.ini"), vec![]),
        ]
    }

    #[test]
    fn test_sort_diagnostics() {
        let result = sample();
        let lines = |diags: Vec<&Diagnostic>| -> Vec<(String, usize)> {
            diags
                .iter()
                .map(|d| (d.path.display().to_string(), d.lines[0].line_number))
                .collect()
        };
        assert_eq!(
            lines(sort_diagnostics(&result, &args::CheckSort::Line)),
            vec![
                ("a.properties".to_string(), 9),
                ("b.properties".to_string(), 2),
                ("b.properties".to_string(), 7),
            ]
        );
        let rules: Vec<&str> = sort_diagnostics(&result, &args::CheckSort::Rule)
            .iter()
            .map(|d| d.rule)
            .collect();
        assert_eq!(rules, vec!["duplicates", "escapes", "syntax"]);
        assert_eq!(
            lines(sort_diagnostics(&result, &args::CheckSort::Message)),
            vec![
                ("b.properties".to_string(), 2),
                ("b.properties".to_string(), 7),
                ("a.properties".to_string(), 9),
            ]
        );
    }

    #[test]
    fn test_exit_code() {
        let args = args::CheckArgs {
            quiet: true,
            ..Default::default()
        };
        let elapsed = Duration::from_millis(1);
        assert_eq!(display_result(&sample(), &args, &elapsed), 1);
        assert_eq!(
            display_result(&[(PathBuf::from("c.ini"), vec![])], &args, &elapsed),
            0
        );
        assert_eq!(display_result(&[], &args, &elapsed), 0);
    }

    #[test]
    fn test_counts() {
        let mut counts = Counts::default();
        counts.add(Severity::Error);
        counts.add(Severity::Info);
        counts.add(Severity::Info);
        assert_eq!(counts.total(), 3);
        assert_eq!(counts.info, 2);
        assert_eq!(counts.warnings, 0);
        assert_eq!(counts.errors, 1);
    }
}
