// SPDX-FileCopyrightText: 2026 Sébastien Helleu <flashcode@flashtux.org>
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Localization properties and INI file reader module.

pub mod entry;
pub mod error;
pub mod escape;
pub mod ini;
pub mod line;
pub mod parser;
pub mod source;
pub mod value;

pub use error::{Malformed, Reason};
pub use ini::{IniFile, IniSection, parse_ini};
pub use parser::{Parser, parse};
pub use value::{Properties, PropertyValue, to_properties_string};
