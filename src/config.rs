// SPDX-FileCopyrightText: 2026 Sébastien Helleu <flashcode@flashtux.org>
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Configuration file and settings resolved from command-line arguments.

use std::{
    error::Error,
    path::{Path, PathBuf},
};

use encoding_rs::Encoding;
use path_absolutize::Absolutize;
use serde::Deserialize;

use crate::args::{InputArgs, Mode};

/// Configuration file read by default in the current directory.
pub const DEFAULT_CONFIG_FILE: &str = "propexam.toml";

/// Extensions of the files to check by default.
pub const DEFAULT_EXTENSIONS: [&str; 2] = ["properties", "ini"];

#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub check: CheckConfig,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CheckConfig {
    pub select: Option<String>,
    pub ignore: Option<String>,
    pub mode: Option<Mode>,
    pub encoding: Option<String>,
    pub extensions: Option<Vec<String>>,
}

/// Syntax used to parse a given file.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FileMode {
    #[default]
    Properties,
    Ini,
}

/// Settings used to find and parse files: config file overridden by command-line.
#[derive(Debug, Default)]
pub struct Settings {
    pub config_path: Option<PathBuf>,
    pub select: Option<String>,
    pub ignore: Option<String>,
    pub mode: Mode,
    pub encoding: Option<&'static Encoding>,
    pub extensions: Vec<String>,
}

impl Config {
    /// Parse the configuration from a TOML string.
    pub fn from_toml(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    /// Read the configuration file given on command line, or the default one if it exists.
    pub fn load(path: Option<&PathBuf>) -> Result<Option<(PathBuf, Config)>, Box<dyn Error>> {
        let path = match path {
            Some(path) => path.clone(),
            None => {
                let default = PathBuf::from(DEFAULT_CONFIG_FILE);
                if !default.is_file() {
                    return Ok(None);
                }
                default
            }
        };
        let content = std::fs::read_to_string(&path)
            .map_err(|err| format!("could not read config file {}: {err}", path.display()))?;
        let config = Config::from_toml(&content)
            .map_err(|err| format!("invalid config file {}: {err}", path.display()))?;
        Ok(Some((path, config)))
    }
}

/// Get the encoding with its label (e.g. `utf-8`, `latin1`).
pub fn get_encoding(label: &str) -> Result<&'static Encoding, Box<dyn Error>> {
    Encoding::for_label(label.trim().as_bytes())
        .ok_or_else(|| format!("unknown encoding: {label}").into())
}

impl Settings {
    /// Build the settings from the configuration and command-line arguments.
    ///
    /// `select` and `ignore` are the rules given on command line (if any).
    pub fn new(
        config: Option<(PathBuf, Config)>,
        input: &InputArgs,
        select: Option<&String>,
        ignore: Option<&String>,
    ) -> Result<Self, Box<dyn Error>> {
        let (config_path, config) = match config {
            Some((path, config)) => (Some(path), config.check),
            None => (None, CheckConfig::default()),
        };
        let encoding = match input.encoding.as_ref().or(config.encoding.as_ref()) {
            Some(label) => Some(get_encoding(label)?),
            None => None,
        };
        Ok(Self {
            config_path,
            select: select.cloned().or(config.select),
            ignore: ignore.cloned().or(config.ignore),
            mode: input.mode.or(config.mode).unwrap_or_default(),
            encoding,
            extensions: config.extensions.unwrap_or_else(|| {
                DEFAULT_EXTENSIONS.iter().map(|e| (*e).to_string()).collect()
            }),
        })
    }

    /// Load the configuration file and build the settings.
    pub fn load(
        input: &InputArgs,
        select: Option<&String>,
        ignore: Option<&String>,
    ) -> Result<Self, Box<dyn Error>> {
        Settings::new(Config::load(input.config.as_ref())?, input, select, ignore)
    }

    /// Return the syntax used to parse the file.
    pub fn file_mode(&self, path: &Path) -> FileMode {
        match self.mode {
            Mode::Properties => FileMode::Properties,
            Mode::Ini => FileMode::Ini,
            Mode::Auto => {
                if path
                    .extension()
                    .is_some_and(|ext| ext.eq_ignore_ascii_case("ini"))
                {
                    FileMode::Ini
                } else {
                    FileMode::Properties
                }
            }
        }
    }

    /// Return the absolute path to the configuration file, for display.
    pub fn config_path_display(&self) -> String {
        match &self.config_path {
            Some(path) => path
                .absolutize()
                .map_or_else(|_| path.display().to_string(), |p| p.display().to_string()),
            None => "<none>".to_string(),
        }
    }

    /// Return the encoding name used when there is no byte order mark.
    pub fn encoding_name(&self) -> &'static str {
        self.encoding.unwrap_or(encoding_rs::UTF_8).name()
    }
}
