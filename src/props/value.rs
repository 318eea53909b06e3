// SPDX-FileCopyrightText: 2026 Sébastien Helleu <flashcode@flashtux.org>
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Values of the parsed properties.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::props::{entry::OTHER_TAG, escape::EscapePropertiesExt};

/// Result of the parsing: key to value or plural group.
pub type Properties = BTreeMap<String, PropertyValue>;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum PropertyValue {
    Value(String),
    /// Plural group: plural tag to string, always with an `other` tag once parsed.
    Plural(BTreeMap<String, String>),
}

impl PropertyValue {
    /// Build a plural group from a list of `(tag, value)`.
    pub fn plural<'a, I>(forms: I) -> Self
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        PropertyValue::Plural(
            forms
                .into_iter()
                .map(|(tag, value)| (tag.to_string(), value.to_string()))
                .collect(),
        )
    }

    /// Return the plain value, `None` for a plural group.
    #[must_use]
    pub fn as_value(&self) -> Option<&str> {
        match self {
            PropertyValue::Value(value) => Some(value),
            PropertyValue::Plural(_) => None,
        }
    }

    /// Return the plural forms, `None` for a plain value.
    #[must_use]
    pub fn as_plural(&self) -> Option<&BTreeMap<String, String>> {
        match self {
            PropertyValue::Value(_) => None,
            PropertyValue::Plural(forms) => Some(forms),
        }
    }
}

/// Write the properties back to the `.properties` syntax, keys sorted.
///
/// Plural forms are written before the `other` form, which is written as a plain
/// `key = value` line.
#[must_use]
pub fn to_properties_string(properties: &Properties) -> String {
    let mut out = String::new();
    for (key, value) in properties {
        match value {
            PropertyValue::Value(value) => {
                out.push_str(&format!("{key} = {}\n", value.escape_properties()));
            }
            PropertyValue::Plural(forms) => {
                for (tag, value) in forms.iter().filter(|(tag, _)| *tag != OTHER_TAG) {
                    out.push_str(&format!("{key}[{tag}] = {}\n", value.escape_properties()));
                }
                if let Some(other) = forms.get(OTHER_TAG) {
                    out.push_str(&format!("{key} = {}\n", other.escape_properties()));
                }
            }
        }
    }
    out
}

impl From<&str> for PropertyValue {
    fn from(value: &str) -> Self {
        PropertyValue::Value(value.to_string())
    }
}
