// SPDX-FileCopyrightText: 2026 Sébastien Helleu <flashcode@flashtux.org>
//
// SPDX-License-Identifier: GPL-3.0-or-later

use std::iter::Peekable;
use std::str::Chars;

pub trait EscapePropertiesExt {
    fn escape_properties(&self) -> String;
    fn unescape_properties(&self) -> String;
}

/// Read up to 4 hex digits after `\u`, return the code and the number of digits read.
fn read_hex4(it: &mut Peekable<Chars<'_>>) -> (u32, usize) {
    let mut code = 0;
    let mut digits = 0;
    while digits < 4 {
        let Some(value) = it.peek().and_then(|c| c.to_digit(16)) else {
            break;
        };
        code = code * 16 + value;
        digits += 1;
        it.next();
    }
    (code, digits)
}

/// Decode a `\uXXXX` sequence (the `\u` being already consumed) and push it to `out`.
///
/// A high surrogate immediately followed by an escaped low surrogate is combined into
/// one character.
fn push_unicode(it: &mut Peekable<Chars<'_>>, out: &mut String) {
    let (code, digits) = read_hex4(it);
    if digits == 0 {
        return;
    }
    if (0xD800..0xDC00).contains(&code) {
        let mut ahead = it.clone();
        if ahead.next() == Some('\\') && ahead.next() == Some('u') {
            let (low, low_digits) = read_hex4(&mut ahead);
            if low_digits == 4 && (0xDC00..0xE000).contains(&low) {
                let combined = 0x10000 + ((code - 0xD800) << 10) + (low - 0xDC00);
                out.push(char::from_u32(combined).unwrap_or(char::REPLACEMENT_CHARACTER));
                *it = ahead;
                return;
            }
        }
    }
    out.push(char::from_u32(code).unwrap_or(char::REPLACEMENT_CHARACTER));
}

impl EscapePropertiesExt for str {
    /// Escape special characters in a string for properties file format.
    ///
    /// Leading and trailing spaces are escaped so they survive the trimming of values.
    fn escape_properties(&self) -> String {
        let mut out = String::with_capacity(self.len() * 2);
        let first_kept = self.len() - self.trim_start_matches([' ', '\t']).len();
        let last_kept = self.trim_end_matches([' ', '\t']).len();
        for (idx, ch) in self.char_indices() {
            match ch {
                '\n' => out.push_str("\\n"),
                '\r' => out.push_str("\\r"),
                '\t' => out.push_str("\\t"),
                '\\' => out.push_str("\\\\"),
                ' ' if idx < first_kept || idx >= last_kept => out.push_str("\\u0020"),
                c if c.is_control() => out.push_str(&format!("\\u{:04X}", u32::from(c))),
                _ => out.push(ch),
            }
        }
        out
    }

    /// Unescape special character sequences in a value read from a properties file.
    fn unescape_properties(&self) -> String {
        let mut out = String::with_capacity(self.len());
        let mut it = self.chars().peekable();
        while let Some(ch) = it.next() {
            if ch != '\\' {
                out.push(ch);
                continue;
            }
            match it.next() {
                Some('n') => out.push('\n'),
                Some('r') => out.push('\r'),
                Some('t') => out.push('\t'),
                Some('u') => push_unicode(&mut it, &mut out),
                Some(other) => out.push(other),
                None => {}
            }
        }
        out
    }
}
