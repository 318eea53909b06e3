// SPDX-FileCopyrightText: 2026 Sébastien Helleu <flashcode@flashtux.org>
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Checker for localization files.

use std::{
    collections::HashMap,
    path::{Path, PathBuf},
};

use colored::Colorize;
use encoding_rs::Encoding;
use rayon::prelude::*;

use propexam::props::{
    Malformed, Parser,
    entry::{Entry, OTHER_TAG},
    ini::parse_ini,
    parser::PropertiesBuilder,
    source::Source,
};

use crate::{
    args,
    config::{FileMode, Settings},
    diagnostic::{Diagnostic, Severity},
    dir::find_files,
    result::display_result,
    rules::rule::{Rule, Rules, get_selected_rules},
};

pub type CheckResult = (PathBuf, Vec<Diagnostic>);

/// Return the slot of an entry in the parsed properties: a plain value and the
/// `other` form of the same key are stored at the same place.
fn definition_key(entry: &Entry) -> String {
    match entry.plural_tag.as_deref() {
        None | Some(OTHER_TAG) => entry.key.clone(),
        Some(tag) => format!("{}[{tag}]", entry.key),
    }
}

#[derive(Default)]
pub struct Checker<'d, 'r> {
    pub path: PathBuf,
    pub diagnostics: Vec<Diagnostic>,
    data: &'d [u8],
    rules: &'r Rules,
    mode: FileMode,
    encoding: Option<&'static Encoding>,
    encoding_name: &'static str,
    encoding_error: bool,
    definitions: HashMap<String, usize>,
    previous_line: Option<usize>,
    current_rule: &'static str,
    current_severity: Severity,
}

impl<'d, 'r> Checker<'d, 'r> {
    /// Create a new `Checker` for the given data and rules.
    pub fn new(data: &'d [u8], rules: &'r Rules) -> Self {
        Checker {
            data,
            rules,
            ..Default::default()
        }
    }

    /// Set the path of the file being checked.
    pub fn with_path(mut self, path: &Path) -> Self {
        self.path = PathBuf::from(path);
        self
    }

    /// Set the syntax of the file being checked.
    pub fn with_mode(mut self, mode: FileMode) -> Self {
        self.mode = mode;
        self
    }

    /// Set the encoding used when the file has no byte order mark.
    pub fn with_encoding(mut self, encoding: Option<&'static Encoding>) -> Self {
        self.encoding = encoding;
        self
    }

    /// Return the encoding name of the file (after decoding).
    pub fn encoding_name(&self) -> &'static str {
        self.encoding_name
    }

    /// Return `true` if the file has invalid characters for its encoding.
    pub fn encoding_error(&self) -> bool {
        self.encoding_error
    }

    /// Return the line of the first definition of the entry being checked, if the
    /// key was already defined.
    pub fn previous_line(&self) -> Option<usize> {
        self.previous_line
    }

    fn set_current_rule(&mut self, rule: &Rule) {
        self.current_rule = rule.name();
        self.current_severity = rule.severity();
    }

    /// Report a diagnostic for the file being checked.
    pub fn report_file(&mut self, message: String) {
        self.diagnostics.push(Diagnostic::new(
            self.path.as_path(),
            self.current_rule,
            self.current_severity,
            message,
        ));
    }

    /// Report a diagnostic for a line of the file.
    pub fn report_line(&mut self, message: String, line_number: usize, text: &str) {
        let mut diagnostic = Diagnostic::new(
            self.path.as_path(),
            self.current_rule,
            self.current_severity,
            message,
        );
        diagnostic.add_message(line_number, text, &[]);
        self.diagnostics.push(diagnostic);
    }

    /// Report a diagnostic for an entry, highlighting parts of its raw value.
    pub fn report_entry(&mut self, message: String, entry: &Entry, hl_value: &[(usize, usize)]) {
        let line = entry.to_properties_line();
        let offset = line.len() - entry.raw_value.len();
        let highlights: Vec<(usize, usize)> = hl_value
            .iter()
            .map(|(start, end)| (start + offset, end + offset))
            .collect();
        let mut diagnostic = Diagnostic::new(
            self.path.as_path(),
            self.current_rule,
            self.current_severity,
            message,
        );
        diagnostic.add_message(entry.line_number, &line, &highlights);
        self.diagnostics.push(diagnostic);
    }

    /// Report a syntax error returned by the parser.
    fn report_malformed(&mut self, err: &Malformed) {
        self.diagnostics
            .push(Diagnostic::from_malformed(self.path.as_path(), err));
    }

    /// Check an entry with all rules.
    fn check_entry(&mut self, entry: &Entry) {
        let rules = self.rules;
        let key = definition_key(entry);
        self.previous_line = self.definitions.get(&key).copied();
        for rule in &rules.enabled {
            self.set_current_rule(rule);
            rule.check_entry(self, entry);
        }
        self.definitions.entry(key).or_insert(entry.line_number);
    }

    /// Check all entries of a properties file.
    fn check_properties(&mut self, source: &Source) {
        let mut builder = PropertiesBuilder::default();
        for result in Parser::new(source.lines()) {
            match result {
                Ok(entry) => {
                    self.check_entry(&entry);
                    builder.add(entry);
                }
                Err(err) => {
                    self.report_malformed(&err);
                    return;
                }
            }
        }
        if let Err(err) = builder.finish() {
            self.report_malformed(&err);
        }
    }

    /// Check the entries and junk lines of an INI file.
    fn check_ini(&mut self, source: &Source) {
        let rules = self.rules;
        match parse_ini(source.lines()) {
            Ok(ini) => {
                for section in &ini.sections {
                    self.definitions.clear();
                    for entry in &section.assignments {
                        self.check_entry(entry);
                    }
                }
                for junk in &ini.junk {
                    for rule in &rules.enabled {
                        self.set_current_rule(rule);
                        rule.check_junk(self, junk.line_number, &junk.text);
                    }
                }
            }
            Err(err) => self.report_malformed(&err),
        }
    }

    /// Perform all checks on the file.
    pub fn do_all_checks(&mut self) {
        let source = Source::decode(self.data, self.encoding);
        self.encoding_name = source.encoding_name();
        self.encoding_error = source.encoding_error;
        let rules = self.rules;
        for rule in &rules.enabled {
            self.set_current_rule(rule);
            rule.check_file(self);
        }
        match self.mode {
            FileMode::Properties => self.check_properties(&source),
            FileMode::Ini => self.check_ini(&source),
        }
    }
}

/// Check a single file and return the list of diagnostics found.
pub fn check_file(path: &Path, settings: &Settings, rules: &Rules) -> CheckResult {
    let buf = match std::fs::read(path) {
        Ok(buf) => buf,
        Err(err) => {
            return (
                PathBuf::from(path),
                vec![Diagnostic::new(
                    path,
                    "read-error",
                    Severity::Error,
                    format!("could not read file: {err}"),
                )],
            );
        }
    };
    let mut checker = Checker::new(&buf, rules)
        .with_path(path)
        .with_mode(settings.file_mode(path))
        .with_encoding(settings.encoding);
    checker.do_all_checks();
    (PathBuf::from(path), checker.diagnostics)
}

/// Display the settings used to check files.
fn display_settings(args: &args::CheckArgs, settings: &Settings, rules: &Rules) {
    if args.quiet || !args.show_settings {
        return;
    }
    println!("Configuration:");
    println!("  Config file: {}", settings.config_path_display());
    let rules_names = rules.names().join(", ");
    println!(
        "  Rules enabled: {}",
        if rules_names.is_empty() {
            "<none>".to_string()
        } else {
            rules_names
        }
    );
    println!("  Mode: {}", settings.mode);
    println!("  Default encoding: {}", settings.encoding_name());
    println!("  Extensions: {}", settings.extensions.join(", "));
    println!("  Output format: {}", args.output);
}

/// Check and display result for all files.
pub fn run_check(args: &args::CheckArgs) -> i32 {
    let start = std::time::Instant::now();
    let settings = match Settings::load(&args.input, args.select.as_ref(), args.ignore.as_ref())
    {
        Ok(settings) => settings,
        Err(err) => {
            eprintln!("{}: {err}", "Error".bright_red().bold());
            return 1;
        }
    };
    let rules = match get_selected_rules(
        settings.select.as_deref(),
        settings.ignore.as_deref(),
        &args.severity,
    ) {
        Ok(selected_rules) => selected_rules,
        Err(err) => {
            eprintln!("{}: {err}", "Error".bright_red().bold());
            return 1;
        }
    };
    display_settings(args, &settings, &rules);
    let files = find_files(&args.input.files, &settings.extensions);
    let result: Vec<CheckResult> = files
        .par_iter()
        .map(|f| check_file(f, &settings, &rules))
        .collect();
    let elapsed = start.elapsed();
    display_result(&result, args, &elapsed)
}
