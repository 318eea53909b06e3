// SPDX-FileCopyrightText: 2026 Sébastien Helleu <flashcode@flashtux.org>
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Properties file entry.

use serde::Serialize;

use crate::props::escape::EscapePropertiesExt;

/// Tag of the plural form used as fallback, mandatory in every plural group.
pub const OTHER_TAG: &str = "other";

/// A `key=value` or `key[tag]=value` assignment.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize)]
pub struct Entry {
    pub line_number: usize,
    pub key: String,
    pub plural_tag: Option<String>,
    /// Value as written in the file (trimmed, escapes not decoded).
    pub raw_value: String,
    pub value: String,
}

/// Split a key `name[tag]` into its base name and plural tag.
///
/// A key without brackets, or with an empty tag, is returned as-is.
#[must_use]
pub fn split_plural_key(key: &str) -> (&str, Option<&str>) {
    if let Some(inner) = key.strip_suffix(']')
        && let Some(pos) = inner.rfind('[')
        && pos + 1 < inner.len()
    {
        (inner[..pos].trim_end_matches([' ', '\t']), Some(&inner[pos + 1..]))
    } else {
        (key, None)
    }
}

impl Entry {
    /// Create a new entry, decoding the escapes of the raw value.
    #[must_use]
    pub fn new(
        line_number: usize,
        key: &str,
        plural_tag: Option<&str>,
        raw_value: &str,
    ) -> Self {
        Self {
            line_number,
            key: key.to_string(),
            plural_tag: plural_tag.map(String::from),
            raw_value: raw_value.to_string(),
            value: raw_value.unescape_properties(),
        }
    }

    /// Return `true` if this entry is a plural form (`key[tag]=value`).
    #[must_use]
    pub fn is_plural(&self) -> bool {
        self.plural_tag.is_some()
    }

    /// Return the key with the plural tag, as written in the file.
    #[must_use]
    pub fn full_key(&self) -> String {
        match &self.plural_tag {
            Some(tag) => format!("{}[{tag}]", self.key),
            None => self.key.clone(),
        }
    }

    /// Convert this entry back to a properties line.
    #[must_use]
    pub fn to_properties_line(&self) -> String {
        format!("{} = {}", self.full_key(), self.raw_value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_plural_key() {
        assert_eq!(split_plural_key("key"), ("key", None));
        assert_eq!(split_plural_key("key[one]"), ("key", Some("one")));
        assert_eq!(split_plural_key("key [other]"), ("key", Some("other")));
        assert_eq!(split_plural_key("a[b][few]"), ("a[b]", Some("few")));
        assert_eq!(split_plural_key("[one]"), ("", Some("one")));
        assert_eq!(split_plural_key("key[]"), ("key[]", None));
        assert_eq!(split_plural_key("key]"), ("key]", None));
    }

    #[test]
    fn test_entry() {
        let entry = Entry::new(4, "greeting", None, "hello\\tworld");
        assert!(!entry.is_plural());
        assert_eq!(entry.value, "hello\tworld");
        assert_eq!(entry.full_key(), "greeting");
        assert_eq!(entry.to_properties_line(), "greeting = hello\\tworld");
        let entry = Entry::new(5, "files", Some("one"), "\\u0031 file");
        assert!(entry.is_plural());
        assert_eq!(entry.value, "1 file");
        assert_eq!(entry.full_key(), "files[one]");
        assert_eq!(entry.to_properties_line(), "files[one] = \\u0031 file");
    }
}
