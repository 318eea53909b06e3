// SPDX-FileCopyrightText: 2026 Sébastien Helleu <flashcode@flashtux.org>
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Display the content of files as parsed.

use std::collections::BTreeMap;

use colored::Colorize;

use propexam::props::to_properties_string;

use crate::args;
use crate::config::Settings;
use crate::dir::find_files;
use crate::file::{ParsedFile, parse_file};

/// Format a parsed file in the `.properties` (or INI) syntax.
fn to_text(parsed: &ParsedFile) -> String {
    match parsed {
        ParsedFile::Properties(properties) => to_properties_string(properties),
        ParsedFile::Ini(ini) => ini.to_ini_string(),
    }
}

/// Format the parsed files according to the output format.
fn format_dump(files: &BTreeMap<String, ParsedFile>, output: &args::DumpFormat) -> String {
    match output {
        args::DumpFormat::Json => serde_json::to_string_pretty(files).unwrap_or_default(),
        args::DumpFormat::Text => {
            if files.len() == 1 {
                return files.values().map(to_text).collect();
            }
            files
                .iter()
                .map(|(path, parsed)| format!("# {path}\n{}", to_text(parsed)))
                .collect::<Vec<_>>()
                .join("\n")
        }
    }
}

/// Parse and display the content of all files.
pub fn run_dump(args: &args::DumpArgs) -> i32 {
    let settings = match Settings::load(&args.input, None, None) {
        Ok(settings) => settings,
        Err(err) => {
            eprintln!("{}: {err}", "Error".bright_red().bold());
            return 1;
        }
    };
    let mut rc = 0;
    let mut files = BTreeMap::new();
    for path in find_files(&args.input.files, &settings.extensions) {
        match parse_file(&path, &settings) {
            Ok(parsed) => {
                files.insert(path.display().to_string(), parsed);
            }
            Err(err) => {
                eprintln!("{}: {}: {err}", "Error".bright_red().bold(), path.display());
                rc = 1;
            }
        }
    }
    let out = format_dump(&files, &args.output);
    if out.ends_with('\n') || out.is_empty() {
        print!("{out}");
    } else {
        println!("{out}");
    }
    rc
}
