// SPDX-FileCopyrightText: 2026 Sébastien Helleu <flashcode@flashtux.org>
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Statistics for localization files.

use std::ops::AddAssign;
use std::path::{Path, PathBuf};

use colored::Colorize;
use rayon::prelude::*;
use serde::Serialize;

use propexam::props::{Properties, PropertyValue};

use crate::args;
use crate::config::Settings;
use crate::dir::find_files;
use crate::file::{ParsedFile, parse_file};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
struct Counts {
    keys: u64,
    values: u64,
    plurals: u64,
    plural_forms: u64,
    empty: u64,
    sections: u64,
    junk: u64,
}

#[derive(Debug, Default, Serialize)]
struct StatsFile {
    path: PathBuf,
    #[serde(flatten)]
    counts: Counts,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

impl AddAssign for Counts {
    /// Add the values from another `Counts` struct to this one.
    fn add_assign(&mut self, other: Self) {
        *self = Self {
            keys: self.keys + other.keys,
            values: self.values + other.values,
            plurals: self.plurals + other.plurals,
            plural_forms: self.plural_forms + other.plural_forms,
            empty: self.empty + other.empty,
            sections: self.sections + other.sections,
            junk: self.junk + other.junk,
        };
    }
}

impl Counts {
    /// Count keys, values and plural forms of parsed properties.
    fn add_properties(&mut self, properties: &Properties) {
        for value in properties.values() {
            self.keys += 1;
            match value {
                PropertyValue::Value(value) => {
                    self.values += 1;
                    if value.is_empty() {
                        self.empty += 1;
                    }
                }
                PropertyValue::Plural(forms) => {
                    self.plurals += 1;
                    self.plural_forms += forms.len() as u64;
                    self.empty += forms.values().filter(|v| v.is_empty()).count() as u64;
                }
            }
        }
    }

    /// Compute the counts for a parsed file.
    fn from_parsed(parsed: &ParsedFile) -> Self {
        let mut counts = Counts::default();
        match parsed {
            ParsedFile::Properties(properties) => counts.add_properties(properties),
            ParsedFile::Ini(ini) => {
                for section in &ini.sections {
                    counts.sections += 1;
                    counts.add_properties(&section.entries);
                }
                let junk = ini.junk.len() as u64;
                counts.junk = junk;
                counts.keys = counts.keys.saturating_sub(junk);
                counts.values = counts.values.saturating_sub(junk);
            }
        }
        counts
    }
}

impl std::fmt::Display for Counts {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "{} keys = {} values + {} plurals ({} forms)",
            format!("{:6}", self.keys).bright_white(),
            format!("{}", self.values).bright_green(),
            format!("{}", self.plurals).bright_cyan(),
            self.plural_forms,
        )?;
        if self.empty > 0 {
            write!(f, ", {}", format!("{} empty", self.empty).yellow())?;
        }
        if self.sections > 0 {
            write!(f, ", {} sections", self.sections)?;
        }
        if self.junk > 0 {
            write!(f, ", {}", format!("{} junk", self.junk).bright_red())?;
        }
        Ok(())
    }
}

impl StatsFile {
    /// Create a new `StatsFile` for the given path.
    #[must_use]
    fn new(path: &Path) -> Self {
        Self {
            path: PathBuf::from(path),
            ..Default::default()
        }
    }
}

/// Compute statistics for a single file at the given path.
fn stats_file(path: &Path, settings: &Settings) -> StatsFile {
    let mut stats = StatsFile::new(path);
    match parse_file(path, settings) {
        Ok(parsed) => stats.counts = Counts::from_parsed(&parsed),
        Err(err) => stats.error = Some(err.to_string()),
    }
    stats
}

/// Compute total for statistics.
fn compute_total_stats(stats: &[StatsFile]) -> StatsFile {
    let mut total = StatsFile::new(Path::new(&format!("Total ({})", stats.len())));
    for stat in stats {
        total.counts += stat.counts;
    }
    total
}

/// Sort the statistics according to the command-line option.
fn sort_stats(stats: &mut [StatsFile], sort: &args::StatsSort) {
    match sort {
        args::StatsSort::Path => {
            stats.sort_by(|a, b| a.path.cmp(&b.path));
        }
        args::StatsSort::Keys => {
            stats.sort_by(|a, b| b.counts.keys.cmp(&a.counts.keys).then(a.path.cmp(&b.path)));
        }
    }
}

/// Display statistics for a list of files, formatted according to the arguments.
fn display_stats(stats: &[StatsFile], args: &args::StatsArgs) {
    match args.output {
        args::OutputFormat::Human => {
            let path_max_len = stats
                .iter()
                .map(|s| s.path.as_os_str().len())
                .max()
                .unwrap_or(0);
            for stat in stats {
                let path = format!("{:width$}", stat.path.display(), width = path_max_len);
                match &stat.error {
                    Some(error) => println!("{path} {}", error.bright_red()),
                    None => println!("{path} {}", stat.counts),
                }
            }
        }
        args::OutputFormat::Json => {
            println!("{}", serde_json::to_string(&stats).unwrap_or_default());
        }
    }
}

/// Compute and display statistics for all files.
pub fn run_stats(args: &args::StatsArgs) -> i32 {
    let settings = match Settings::load(&args.input, None, None) {
        Ok(settings) => settings,
        Err(err) => {
            eprintln!("{}: {err}", "Error".bright_red().bold());
            return 1;
        }
    };
    let files = find_files(&args.input.files, &settings.extensions);
    let mut stats: Vec<StatsFile> = files
        .par_iter()
        .map(|f| stats_file(f, &settings))
        .collect();
    sort_stats(&mut stats, &args.sort);
    let rc = i32::from(stats.iter().any(|s| s.error.is_some()));
    if stats.len() > 1 {
        stats.push(compute_total_stats(&stats));
    }
    display_stats(&stats, args);
    rc
}
