// SPDX-FileCopyrightText: 2026 Sébastien Helleu <flashcode@flashtux.org>
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Read and parse a localization file.

use std::path::Path;

use serde::Serialize;
use thiserror::Error;

use propexam::props::{IniFile, Malformed, Properties, parse, parse_ini, source::Source};

use crate::config::{FileMode, Settings};

/// Error when a file can not be read or parsed.
#[derive(Debug, Error)]
pub enum FileError {
    #[error("could not read file: {0}")]
    Read(#[from] std::io::Error),

    #[error("{0}")]
    Parse(#[from] Malformed),
}

/// Content of a parsed file.
#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum ParsedFile {
    Properties(Properties),
    Ini(IniFile),
}

/// Parse the content of a file with the given syntax.
pub fn parse_content(
    data: &[u8],
    mode: FileMode,
    settings: &Settings,
) -> Result<ParsedFile, Malformed> {
    let source = Source::decode(data, settings.encoding);
    match mode {
        FileMode::Properties => Ok(ParsedFile::Properties(parse(source.lines())?)),
        FileMode::Ini => Ok(ParsedFile::Ini(parse_ini(source.lines())?)),
    }
}

/// Read and parse a file, the syntax being given by the settings.
pub fn parse_file(path: &Path, settings: &Settings) -> Result<ParsedFile, FileError> {
    let data = std::fs::read(path)?;
    Ok(parse_content(&data, settings.file_mode(path), settings)?)
}
