// SPDX-FileCopyrightText: 2026 Sébastien Helleu <flashcode@flashtux.org>
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! INI file parser, sharing the comment, blank and continuation rules of the
//! properties parser.
//!
//! Content before the first section is the file header. Lines that can not be
//! parsed are kept as junk entries named `_junk_<n>_<start>-<end>`, so the file
//! can be written back.

use serde::Serialize;

use crate::props::{
    entry::Entry,
    error::Malformed,
    escape::EscapePropertiesExt,
    line::{LogicalLines, WHITESPACE},
    parser::split_assignment,
    value::{Properties, PropertyValue},
};

/// Characters starting a comment in an INI file.
pub const INI_COMMENT_CHARS: &[char] = &['#', ';'];

#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize)]
pub struct IniSection {
    pub line_number: usize,
    pub name: String,
    pub entries: Properties,
    /// Assignments of the section in file order, with their line numbers.
    #[serde(skip)]
    pub assignments: Vec<Entry>,
}

/// A line that could not be parsed, kept for round-tripping.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize)]
pub struct Junk {
    /// Synthetic key `_junk_<n>_<start>-<end>` of the entry in its section.
    pub key: String,
    pub line_number: usize,
    pub text: String,
}

#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize)]
pub struct IniFile {
    /// Lines before the first section (usually comments).
    pub header: Vec<String>,
    pub sections: Vec<IniSection>,
    pub junk: Vec<Junk>,
}

enum IniLine<'a> {
    Section(&'a str),
    Entry(&'a str, &'a str),
    Junk,
}

impl IniFile {
    /// Return the first section with this name.
    #[must_use]
    pub fn section(&self, name: &str) -> Option<&IniSection> {
        self.sections.iter().find(|s| s.name == name)
    }

    /// Write the file back to the INI syntax: header, then sections with their
    /// entries (keys sorted); junk entries are written as found.
    #[must_use]
    pub fn to_ini_string(&self) -> String {
        let mut out = String::new();
        for line in &self.header {
            out.push_str(line);
            out.push('\n');
        }
        for section in &self.sections {
            out.push_str(&format!("[{}]\n", section.name));
            for (key, value) in &section.entries {
                let Some(value) = value.as_value() else {
                    continue;
                };
                if self.junk.iter().any(|j| j.key == *key) {
                    out.push_str(value);
                    out.push('\n');
                } else {
                    out.push_str(&format!("{key}={}\n", value.escape_properties()));
                }
            }
        }
        out
    }
}

/// Classify a logical line (not a comment).
fn classify(text: &str) -> IniLine<'_> {
    let trimmed = text.trim_matches(WHITESPACE);
    if let Some(inner) = trimmed.strip_prefix('[') {
        return match inner.strip_suffix(']').map(|s| s.trim_matches(WHITESPACE)) {
            Some(name) if !name.is_empty() && !name.contains(['[', ']']) => {
                IniLine::Section(name)
            }
            _ => IniLine::Junk,
        };
    }
    match split_assignment(text) {
        Some((key, value)) if !key.is_empty() => IniLine::Entry(key, value),
        _ => IniLine::Junk,
    }
}

/// Parse the lines of an INI file.
///
/// # Errors
///
/// Return [`Malformed`] if the last line ends with a continuation backslash; other
/// invalid lines are kept as junk entries.
pub fn parse_ini<L, S>(lines: L) -> Result<IniFile, Malformed>
where
    L: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut ini = IniFile::default();
    let mut junk_count = 0;
    for line in LogicalLines::new(lines.into_iter(), INI_COMMENT_CHARS) {
        let line = line?;
        let kind = if line.comment {
            None
        } else {
            Some(classify(&line.text))
        };
        if let Some(IniLine::Section(name)) = kind {
            ini.sections.push(IniSection {
                line_number: line.line_number,
                name: name.to_string(),
                ..Default::default()
            });
            continue;
        }
        let Some(section) = ini.sections.last_mut() else {
            ini.header.push(line.text.clone());
            continue;
        };
        match kind {
            Some(IniLine::Entry(key, value)) => {
                let entry = Entry::new(line.line_number, key, None, value);
                section
                    .entries
                    .insert(entry.key.clone(), PropertyValue::Value(entry.value.clone()));
                section.assignments.push(entry);
            }
            Some(IniLine::Junk) => {
                junk_count += 1;
                let key = format!("_junk_{junk_count}_{}-{}", line.start, line.end);
                section
                    .entries
                    .insert(key.clone(), PropertyValue::Value(line.text.clone()));
                ini.junk.push(Junk {
                    key,
                    line_number: line.line_number,
                    text: line.text.clone(),
                });
            }
            Some(IniLine::Section(_)) | None => {}
        }
    }
    Ok(ini)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::props::error::Reason;

    #[test]
    fn parse_ini_empty() {
        let ini = parse_ini(["", "  "]).unwrap();
        assert!(ini.header.is_empty());
        assert!(ini.sections.is_empty());
    }

    #[test]
    fn parse_ini_header_and_sections() {
        let ini = parse_ini([
            "; This Source Code Form is subject to the terms",
            "# of the license",
            "",
            "[Strings]",
            "Title = Hello",
            "; comment in section",
            "Body=Line 1\\nLine 2",
            "[Other]",
            "Title=multi\\",
            "  line",
        ])
        .unwrap();
        assert_eq!(
            ini.header,
            vec![
                "; This Source Code Form is subject to the terms",
                "# of the license"
            ]
        );
        assert_eq!(ini.sections.len(), 2);
        let strings = ini.section("Strings").unwrap();
        assert_eq!(strings.line_number, 4);
        assert_eq!(strings.entries.len(), 2);
        assert_eq!(strings.entries["Title"].as_value(), Some("Hello"));
        assert_eq!(strings.entries["Body"].as_value(), Some("Line 1\nLine 2"));
        let other = ini.section("Other").unwrap();
        assert_eq!(other.entries["Title"].as_value(), Some("multiline"));
        assert!(ini.section("Missing").is_none());
        assert!(ini.junk.is_empty());
        let lines: Vec<(usize, &str)> = strings
            .assignments
            .iter()
            .map(|e| (e.line_number, e.raw_value.as_str()))
            .collect();
        assert_eq!(lines, vec![(5, "Hello"), (7, "Line 1\\nLine 2")]);
        assert_eq!(other.assignments[0].value, "multiline");
    }

    #[test]
    fn parse_ini_content_before_section_is_header() {
        let ini = parse_ini(["key=value", "[S]", "a=1"]).unwrap();
        assert_eq!(ini.header, vec!["key=value"]);
        assert_eq!(ini.sections[0].entries.len(), 1);
    }

    #[test]
    fn parse_ini_junk() {
        let ini = parse_ini([
            "; header comment",
            "# more",
            "[Strings]",
            "Title=Hello",
            "oops",
            "[bad",
            "Key = a\\tb",
            "=no key",
        ])
        .unwrap();
        let section = &ini.sections[0];
        assert_eq!(section.name, "Strings");
        assert_eq!(section.entries["Key"].as_value(), Some("a\tb"));
        assert_eq!(section.entries["_junk_1_46-50"].as_value(), Some("oops"));
        assert_eq!(section.entries["_junk_2_51-55"].as_value(), Some("[bad"));
        assert_eq!(section.entries["_junk_3_67-74"].as_value(), Some("=no key"));
        assert_eq!(ini.junk.len(), 3);
        assert_eq!(ini.junk[0].key, "_junk_1_46-50");
        assert_eq!(ini.junk[0].line_number, 5);
        assert_eq!(ini.junk[2].line_number, 8);
    }

    #[test]
    fn ini_to_string() {
        let ini = parse_ini([
            "; header",
            "[Strings]",
            "Title = Hello ",
            "oops",
            "Body=a\\tb",
        ])
        .unwrap();
        assert_eq!(
            ini.to_ini_string(),
            "; header\n[Strings]\nBody=a\\tb\nTitle=Hello\noops\n"
        );
    }

    #[test]
    fn parse_ini_unterminated_continuation() {
        let err = parse_ini(["[S]", "a=1", "b=\\"]).unwrap_err();
        assert_eq!(err.reason, Reason::UnterminatedContinuation);
        assert_eq!(err.line_number, 3);
    }
}
