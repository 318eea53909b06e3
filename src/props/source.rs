// SPDX-FileCopyrightText: 2026 Sébastien Helleu <flashcode@flashtux.org>
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Decoding of file content and split into raw lines.

use std::borrow::Cow;

use encoding_rs::Encoding;
use memchr::Memchr;

/// Content of a file decoded to text.
#[derive(Debug)]
pub struct Source<'d> {
    pub text: Cow<'d, str>,
    pub encoding: &'static Encoding,
    /// `true` if some bytes were invalid for the encoding (replaced by U+FFFD).
    pub encoding_error: bool,
}

/// Iterator over the lines of a text, without the newline.
///
/// A newline at the end of the text does not produce an extra empty line.
pub struct TextLines<'a> {
    text: &'a str,
    newlines: Memchr<'a>,
    offset: usize,
}

impl<'a> Iterator for TextLines<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<Self::Item> {
        if self.offset >= self.text.len() {
            return None;
        }
        let start = self.offset;
        let end = self.newlines.next().unwrap_or(self.text.len());
        self.offset = end + 1;
        Some(&self.text[start..end])
    }
}

impl<'d> Source<'d> {
    /// Decode the data with the given encoding (UTF-8 by default).
    ///
    /// A byte order mark takes precedence over the encoding.
    #[must_use]
    pub fn decode(data: &'d [u8], encoding: Option<&'static Encoding>) -> Self {
        let (text, encoding, encoding_error) =
            encoding.unwrap_or(encoding_rs::UTF_8).decode(data);
        Self {
            text,
            encoding,
            encoding_error,
        }
    }

    /// Return the encoding name.
    #[must_use]
    pub fn encoding_name(&self) -> &'static str {
        self.encoding.name()
    }

    /// Return an iterator over the raw lines of the text.
    #[must_use]
    pub fn lines(&self) -> TextLines<'_> {
        TextLines {
            text: &self.text,
            newlines: memchr::memchr_iter(b'\n', self.text.as_bytes()),
            offset: 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lines(data: &[u8]) -> Vec<String> {
        Source::decode(data, None)
            .lines()
            .map(String::from)
            .collect()
    }

    #[test]
    fn test_lines() {
        assert!(lines(b"").is_empty());
        assert_eq!(lines(b"\n"), vec![""]);
        assert_eq!(lines(b"a=1"), vec!["a=1"]);
        assert_eq!(lines(b"a=1\n"), vec!["a=1"]);
        assert_eq!(lines(b"a=1\n\nb=2\r\n"), vec!["a=1", "", "b=2\r"]);
    }

    #[test]
    fn test_decode_utf8() {
        let source = Source::decode("key=testé".as_bytes(), None);
        assert_eq!(source.encoding_name(), "UTF-8");
        assert!(!source.encoding_error);
        assert_eq!(source.text, "key=testé");
    }

    #[test]
    fn test_decode_bom() {
        let source = Source::decode(b"\xEF\xBB\xBFkey=value", None);
        assert_eq!(source.text, "key=value");
        let source = Source::decode(b"\xFF\xFEk\0=\0v\0", None);
        assert_eq!(source.encoding_name(), "UTF-16LE");
        assert_eq!(source.text, "k=v");
    }

    #[test]
    fn test_decode_errors() {
        let data = encoding_rs::ISO_8859_15.encode("key=testé").0;
        let source = Source::decode(&data, None);
        assert!(source.encoding_error);
        assert_eq!(source.text, "key=test\u{FFFD}");
        let source = Source::decode(&data, Some(encoding_rs::ISO_8859_15));
        assert!(!source.encoding_error);
        assert_eq!(source.encoding_name(), "ISO-8859-15");
        assert_eq!(source.text, "key=testé");
    }
}
