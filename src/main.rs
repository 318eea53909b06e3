// SPDX-FileCopyrightText: 2026 Sébastien Helleu <flashcode@flashtux.org>
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Propexam is a blazingly fast linter for localization properties files, with a
//! comprehensive diagnostic report.
//!
//! It can be used in CI jobs or pre-commit hooks.
//!
//! The following sub-commands are available:
//!
//! - [`check`](#check-files): check files
//! - [`rules`](#rules): display rules used to check files
//! - [`stats`](#stats): display statistics about files
//! - [`dump`](#dump): display the content of files as parsed
//!
//! # Check files
//!
//! The `check` command checks all localization files (*.properties and *.ini) given
//! on command-line or found in the provided directories.
//!
//! The .gitignore rules are respected: ignored files are skipped.
//!
//! Options can also be set in a configuration file `propexam.toml`, in a `[check]`
//! table:
//!
//! ```toml
//! [check]
//! select = "all"
//! ignore = "empty"
//! encoding = "utf-8"
//! ```
//!
//! # Rules
//!
//! The `rules` command displays the rules used to check files.
//!
//! Most rules are enabled by default, and some extra rules can be enabled on-demand.
//!
//! # Stats
//!
//! The `stats` command displays the number of keys, values and plural forms of
//! each file.
//!
//! # Dump
//!
//! The `dump` command displays the parsed content of files, as JSON or normalized
//! properties text.

mod args;
mod checker;
mod config;
mod diagnostic;
mod dir;
mod dump;
mod file;
mod result;
mod rules;
mod stats;

use clap::Parser;

use crate::args::{Cli, Command};
use crate::checker::run_check;
use crate::dump::run_dump;
use crate::rules::rule::run_rules;
use crate::stats::run_stats;

fn main() {
    let args = Cli::parse();
    let rc = match &args.command {
        Command::Check(args) => run_check(args),
        Command::Rules(args) => run_rules(args),
        Command::Stats(args) => run_stats(args),
        Command::Dump(args) => run_dump(args),
    };
    std::process::exit(rc);
}
