// SPDX-FileCopyrightText: 2026 Sébastien Helleu <flashcode@flashtux.org>
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Properties file parser.

use std::collections::{BTreeMap, HashMap};

use crate::props::{
    entry::{Entry, OTHER_TAG, split_plural_key},
    error::{Malformed, Reason},
    line::{LogicalLine, LogicalLines, WHITESPACE, ends_with_lone_backslash},
    value::{Properties, PropertyValue},
};

/// Characters starting a comment in a properties file.
pub const COMMENT_CHARS: &[char] = &['#'];

/// Trim a value, keeping a trailing whitespace char escaped with a backslash.
#[must_use]
pub fn trim_value(value: &str) -> &str {
    let value = value.trim_start_matches(WHITESPACE);
    let trimmed = value.trim_end_matches(WHITESPACE);
    if trimmed.len() < value.len() && ends_with_lone_backslash(trimmed) {
        &value[..=trimmed.len()]
    } else {
        trimmed
    }
}

/// Split a logical line on the first `=`, returning the trimmed key and value.
#[must_use]
pub fn split_assignment(text: &str) -> Option<(&str, &str)> {
    let (key, value) = text.split_once('=')?;
    Some((key.trim_matches(WHITESPACE), trim_value(value)))
}

/// Parse a logical line (not a comment) into an entry.
fn parse_entry(line: &LogicalLine) -> Result<Entry, Malformed> {
    let Some((key, value)) = split_assignment(&line.text) else {
        return Err(Malformed::new(
            line.line_number,
            Reason::InvalidLine,
            &line.text,
        ));
    };
    let (name, tag) = split_plural_key(key);
    if name.is_empty() {
        return Err(Malformed::new(line.line_number, Reason::EmptyKey, &line.text));
    }
    Ok(Entry::new(line.line_number, name, tag, value))
}

/// Iterator over the entries of a properties file.
///
/// The iterator stops after the first error.
pub struct Parser<I> {
    lines: LogicalLines<I>,
    failed: bool,
}

impl<I, S> Parser<I>
where
    I: Iterator<Item = S>,
    S: AsRef<str>,
{
    /// Create a new `Parser` from raw lines (without their newline).
    #[must_use]
    pub fn new<L>(lines: L) -> Self
    where
        L: IntoIterator<IntoIter = I>,
    {
        Self {
            lines: LogicalLines::new(lines.into_iter(), COMMENT_CHARS),
            failed: false,
        }
    }
}

impl<I, S> Iterator for Parser<I>
where
    I: Iterator<Item = S>,
    S: AsRef<str>,
{
    type Item = Result<Entry, Malformed>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed {
            return None;
        }
        for line in self.lines.by_ref() {
            let result = match line {
                Ok(line) if line.comment => continue,
                Ok(line) => parse_entry(&line),
                Err(err) => Err(err),
            };
            self.failed = result.is_err();
            return Some(result);
        }
        None
    }
}

/// Accumulate entries into the properties, merging plural forms by key.
#[derive(Debug, Default)]
pub struct PropertiesBuilder {
    properties: Properties,
    plural_lines: HashMap<String, usize>,
}

impl PropertiesBuilder {
    /// Add an entry; a later definition of the same key (or plural form) wins.
    ///
    /// A plain value mixed with plural forms of the same key is the `other` form.
    pub fn add(&mut self, entry: Entry) {
        let Some(tag) = entry.plural_tag else {
            if let Some(PropertyValue::Plural(forms)) = self.properties.get_mut(&entry.key) {
                forms.insert(OTHER_TAG.to_string(), entry.value);
            } else {
                self.properties
                    .insert(entry.key, PropertyValue::Value(entry.value));
            }
            return;
        };
        self.plural_lines
            .entry(entry.key.clone())
            .or_insert(entry.line_number);
        let value = self
            .properties
            .entry(entry.key)
            .or_insert_with(|| PropertyValue::Plural(BTreeMap::new()));
        if let PropertyValue::Value(other) = value {
            let other = std::mem::take(other);
            *value = PropertyValue::Plural(BTreeMap::from([(OTHER_TAG.to_string(), other)]));
        }
        if let PropertyValue::Plural(forms) = value {
            forms.insert(tag, entry.value);
        }
    }

    /// Return the properties.
    ///
    /// # Errors
    ///
    /// Return [`Malformed`] for the first plural group (by line number) without an
    /// `other` value.
    pub fn finish(self) -> Result<Properties, Malformed> {
        let missing_other = self
            .properties
            .iter()
            .filter(|(_, value)| {
                value
                    .as_plural()
                    .is_some_and(|forms| !forms.contains_key(OTHER_TAG))
            })
            .map(|(key, _)| (self.plural_lines.get(key).copied().unwrap_or(0), key))
            .min();
        if let Some((line_number, key)) = missing_other {
            return Err(Malformed::new(
                line_number,
                Reason::PluralMissingOther,
                key,
            ));
        }
        Ok(self.properties)
    }
}

/// Parse the lines of a properties file.
///
/// Each line is given without its newline; a trailing carriage return is ignored.
///
/// # Errors
///
/// Return [`Malformed`] on the first invalid line, empty key, unterminated
/// continuation or plural group without `other` value.
pub fn parse<L, S>(lines: L) -> Result<Properties, Malformed>
where
    L: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut builder = PropertiesBuilder::default();
    for entry in Parser::new(lines) {
        builder.add(entry?);
    }
    builder.finish()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn value(s: &str) -> PropertyValue {
        PropertyValue::from(s)
    }

    fn props(items: &[(&str, PropertyValue)]) -> Properties {
        items
            .iter()
            .map(|(k, v)| ((*k).to_string(), v.clone()))
            .collect()
    }

    fn reason(lines: &[&str]) -> Reason {
        parse(lines).unwrap_err().reason
    }

    #[test]
    fn parse_empty() {
        assert!(parse(Vec::<String>::new()).unwrap().is_empty());
        assert!(parse(["# c", "  ", ""]).unwrap().is_empty());
    }

    #[test]
    fn parse_simple() {
        assert_eq!(parse(["k=v"]).unwrap(), props(&[("k", value("v"))]));
        assert_eq!(parse([" k = v "]).unwrap(), props(&[("k", value("v"))]));
        assert_eq!(parse(["\tk\t=\tv w\t"]).unwrap(), props(&[("k", value("v w"))]));
        assert_eq!(
            parse(["k=a=b"]).unwrap(),
            props(&[("k", value("a=b"))])
        );
    }

    #[test]
    fn parse_sharp_in_value() {
        assert_eq!(
            parse(["sharp=#can be in value"]).unwrap(),
            props(&[("sharp", value("#can be in value"))])
        );
        assert_eq!(
            parse(["key#1=value"]).unwrap(),
            props(&[("key#1", value("value"))])
        );
    }

    #[test]
    fn parse_continuations() {
        assert_eq!(
            parse(["but=not \\", "all of \\", " them "]).unwrap(),
            props(&[("but", value("not all of them"))])
        );
        assert_eq!(
            parse(["k=  \\", "  \\", "  "]).unwrap(),
            props(&[("k", value(""))])
        );
    }

    #[test]
    fn parse_escapes() {
        assert_eq!(parse(["k=\\u0041"]).unwrap(), props(&[("k", value("A"))]));
        assert_eq!(parse(["k=\\\\"]).unwrap(), props(&[("k", value("\\"))]));
        assert_eq!(
            parse(["k=a\\nb\\tc"]).unwrap(),
            props(&[("k", value("a\nb\tc"))])
        );
        assert_eq!(
            parse(["k\\n=v"]).unwrap(),
            props(&[("k\\n", value("v"))])
        );
        assert_eq!(
            parse(["k=trailing\\ ", "j=\\  x"]).unwrap(),
            props(&[("k", value("trailing ")), ("j", value("  x"))])
        );
    }

    #[test]
    fn parse_plurals() {
        let plural = PropertyValue::plural([("one", "1"), ("other", "o")]);
        assert_eq!(
            parse(["p[one]=1", "p[other]=o"]).unwrap(),
            props(&[("p", plural.clone())])
        );
        assert_eq!(
            parse(["p[one]=1", "p=o"]).unwrap(),
            props(&[("p", plural.clone())])
        );
        assert_eq!(
            parse(["p=o", "p[one]=1"]).unwrap(),
            props(&[("p", plural)])
        );
    }

    #[test]
    fn parse_plurals_last_wins() {
        assert_eq!(
            parse(["p=a", "p[one]=1", "p[other]=b"]).unwrap(),
            props(&[("p", PropertyValue::plural([("one", "1"), ("other", "b")]))])
        );
        assert_eq!(
            parse(["p[other]=b", "p[one]=1", "p=a"]).unwrap(),
            props(&[("p", PropertyValue::plural([("one", "1"), ("other", "a")]))])
        );
        assert_eq!(
            parse(["k=1", "k=2"]).unwrap(),
            props(&[("k", value("2"))])
        );
        assert_eq!(
            parse(["k[]=1"]).unwrap(),
            props(&[("k[]", value("1"))])
        );
    }

    #[test]
    fn parse_errors() {
        assert_eq!(reason(&["no-equals"]), Reason::InvalidLine);
        assert_eq!(reason(&["=v"]), Reason::EmptyKey);
        assert_eq!(reason(&["   =v"]), Reason::EmptyKey);
        assert_eq!(reason(&["[one]=v"]), Reason::EmptyKey);
        assert_eq!(reason(&["k=\\"]), Reason::UnterminatedContinuation);
        assert_eq!(reason(&["p[one]=1"]), Reason::PluralMissingOther);
    }

    #[test]
    fn parse_error_line_numbers() {
        let err = parse(["a=1", "", "# comment", "oops"]).unwrap_err();
        assert_eq!(err.line_number, 4);
        assert_eq!(err.text, "oops");
        let err = parse(["a[one]=1", "b[one]=1", "b=2", "c[few]=3"]).unwrap_err();
        assert_eq!(err.line_number, 1);
        assert_eq!(err.text, "a");
        let err = parse(["ok=1", "ok[one]=1", "ok[other]=2", "x[one]=5"]).unwrap_err();
        assert_eq!(err.line_number, 4);
    }

    #[test]
    fn parser_stops_after_error() {
        let mut parser = Parser::new(["a=1", "bad", "b=2"]);
        assert!(parser.next().unwrap().is_ok());
        assert!(parser.next().unwrap().is_err());
        assert!(parser.next().is_none());
    }

    #[test]
    fn parser_entries() {
        let entries: Vec<Entry> = Parser::new(["# c", "a = x\\u0041", "b[one] = 1"])
            .map(Result::unwrap)
            .collect();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].line_number, 2);
        assert_eq!(entries[0].raw_value, "x\\u0041");
        assert_eq!(entries[0].value, "xA");
        assert_eq!(entries[1].line_number, 3);
        assert_eq!(entries[1].key, "b");
        assert_eq!(entries[1].plural_tag.as_deref(), Some("one"));
    }

    #[test]
    fn parse_full_file() {
        let content = [
            "sharp=#can be in value",
            "# comment",
            "#key=value",
            "  # comment2",
            "keyWithNoValue=",
            "valueWithSpaces=   ",
            " key = value ",
            "key2=value2",
            "%s key=%s value",
            "multi=line\\",
            "value",
            "but=not \\",
            "all of \\",
            " them ",
            "explicitPlural[one] = one",
            "explicitPlural[other] = other",
            "implicitPlural[one] = one",
            "implicitPlural = other",
        ];
        let expected = props(&[
            ("sharp", value("#can be in value")),
            ("keyWithNoValue", value("")),
            ("valueWithSpaces", value("")),
            ("key", value("value")),
            ("key2", value("value2")),
            ("%s key", value("%s value")),
            ("multi", value("linevalue")),
            ("but", value("not all of them")),
            (
                "explicitPlural",
                PropertyValue::plural([("one", "one"), ("other", "other")]),
            ),
            (
                "implicitPlural",
                PropertyValue::plural([("one", "one"), ("other", "other")]),
            ),
        ]);
        assert_eq!(parse(content).unwrap(), expected);
        assert_eq!(parse(content.join("\r\n").lines()).unwrap(), expected);
    }

    #[test]
    fn parse_error_scenarios() {
        assert_eq!(
            reason(&["invalid line with no key value"]),
            Reason::InvalidLine
        );
        assert_eq!(
            reason(&["plural[one]=plural with no other value"]),
            Reason::PluralMissingOther
        );
        assert_eq!(
            reason(&["multiline with no last empty line=\\"]),
            Reason::UnterminatedContinuation
        );
        assert_eq!(reason(&["=no key"]), Reason::EmptyKey);
        assert_eq!(reason(&["   =only spaces in key"]), Reason::EmptyKey);
    }
}
