// SPDX-FileCopyrightText: 2026 Sébastien Helleu <flashcode@flashtux.org>
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Parser for localization properties files.
//!
//! A properties file is a list of `key = value` lines:
//!
//! ```text
//! # Comment
//! greeting = Hello world
//! long = first part \
//!        second part
//! files[one] = one file
//! files = %d files
//! ```
//!
//! The parsed result maps each key to a string or to a plural group (plural tag to
//! string); a plain value mixed with plural forms of the same key is the `other`
//! form:
//!
//! ```
//! use propexam::props::{PropertyValue, parse};
//!
//! let props = parse(["files[one] = one file", "files = %d files"]).unwrap();
//! assert_eq!(
//!     props["files"],
//!     PropertyValue::plural([("one", "one file"), ("other", "%d files")])
//! );
//! ```
//!
//! The same rules for comments, blank lines and continuations apply to INI files,
//! see [`props::parse_ini`].

pub mod props;
