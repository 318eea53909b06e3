// SPDX-FileCopyrightText: 2026 Sébastien Helleu <flashcode@flashtux.org>
//
// SPDX-License-Identifier: GPL-3.0-or-later

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use serde::Deserialize;

use crate::diagnostic::Severity;

#[derive(Debug, Parser)]
#[command(
    author,
    name = "propexam",
    about = "Blazingly fast linter for localization properties files.",
    after_help = "For help with a specific command, see: `propexam help <command>`."
)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Check files
    Check(CheckArgs),

    /// Display rules used to check files
    Rules(RulesArgs),

    /// Display statistics about files
    Stats(StatsArgs),

    /// Display the content of files as parsed
    Dump(DumpArgs),
}

/// Arguments to find and read files, common to all commands working on files.
#[derive(Debug, Default, Args)]
pub struct InputArgs {
    /// List of files or directories
    #[clap(help = "List of files or directories [default: .]")]
    pub files: Vec<PathBuf>,

    /// Syntax of the files (by default the file extension is used: `.ini` files are INI files)
    #[arg(short, long, value_enum)]
    pub mode: Option<Mode>,

    /// Encoding of the files when there is no byte order mark [default: UTF-8]
    #[arg(long)]
    pub encoding: Option<String>,

    /// Configuration file [default: propexam.toml if found in current directory]
    #[arg(long)]
    pub config: Option<PathBuf>,
}

/// Arguments for the `check` command.
#[derive(Debug, Default, Args)]
#[allow(clippy::struct_excessive_bools)]
pub struct CheckArgs {
    #[command(flatten)]
    pub input: InputArgs,

    /// Display settings used to check files
    #[arg(long)]
    pub show_settings: bool,

    /// Select rules to apply (comma-separated list), the special rule "all" can be used to select all rules
    #[arg(short, long)]
    pub select: Option<String>,

    /// Ignore rules (comma-separated list)
    #[arg(short, long)]
    pub ignore: Option<String>,

    /// Perform only checks with this severity (can be given multiple times); by default all checks are performed
    #[arg(short = 'e', long, value_enum)]
    pub severity: Vec<Severity>,

    /// Do not display errors found
    #[arg(short, long)]
    pub no_errors: bool,

    /// Sort of errors displayed
    #[arg(long, value_enum, default_value_t)]
    pub sort: CheckSort,

    /// Display statistics on errors found per file (used only with `human` output format)
    #[arg(long)]
    pub file_stats: bool,

    /// Display statistics on errors found per rule (used only with `human` output format)
    #[arg(long)]
    pub rule_stats: bool,

    /// Output format
    #[arg(short, long, value_enum, default_value_t)]
    pub output: OutputFormat,

    /// Quiet mode: do not report any error, only set the exit code
    #[arg(short, long)]
    pub quiet: bool,
}

/// Syntax of the files.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    #[default]
    /// Use the file extension
    Auto,

    /// Properties file: `key = value` and plural forms `key[tag] = value`
    Properties,

    /// INI file: sections with `key = value`
    Ini,
}

impl std::fmt::Display for Mode {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Mode::Auto => write!(f, "auto"),
            Mode::Properties => write!(f, "properties"),
            Mode::Ini => write!(f, "ini"),
        }
    }
}

/// Sort of errors.
#[derive(Clone, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum CheckSort {
    #[default]
    /// Sort by path, line number
    Line,

    /// Sort by message (offending line), path, line number
    Message,

    /// Sort by error type (rule), path, line number
    Rule,
}

/// Arguments for the `rules` command.
#[derive(Debug, Args)]
pub struct RulesArgs {}

/// Arguments for the `stats` command.
#[derive(Debug, Default, Args)]
pub struct StatsArgs {
    #[command(flatten)]
    pub input: InputArgs,

    /// Output format
    #[arg(short, long, value_enum, default_value_t)]
    pub output: OutputFormat,

    /// Sort files displayed
    #[arg(short, long, value_enum, default_value_t)]
    pub sort: StatsSort,
}

/// Arguments for the `dump` command.
#[derive(Debug, Default, Args)]
pub struct DumpArgs {
    #[command(flatten)]
    pub input: InputArgs,

    /// Output format
    #[arg(short, long, value_enum, default_value_t)]
    pub output: DumpFormat,
}

/// Output format.
#[derive(Clone, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    /// Human readable text format
    Human,

    /// JSON
    Json,
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            OutputFormat::Human => write!(f, "human"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}

/// Output format of the `dump` command.
#[derive(Clone, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum DumpFormat {
    #[default]
    /// JSON, keys sorted
    Json,

    /// Normalized file content (escaped values, sorted keys)
    Text,
}

/// Sort in stats output.
#[derive(Clone, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum StatsSort {
    #[default]
    /// Sort by path
    Path,

    /// Sort by number of keys (most keys first), then by path
    Keys,
}
