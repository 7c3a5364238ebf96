//! Single-pass cell tokenizer over a borrowed buffer.
//!
//! The cursor walks the input bytes once. Every boundary it stops on is an
//! ASCII byte (delimiter, `\n`, `\r`, `"`), so slicing the `&str` at cursor
//! positions always lands on a UTF-8 character boundary.

use std::borrow::Cow;

const QUOTE: u8 = b'"';

/// What ended a cell
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Boundary {
    /// A delimiter, already consumed
    Delimiter,
    /// A line terminator, not consumed
    LineEnd,
    Eof,
}

/// Raw text of one cell
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Token<'a> {
    pub text: Cow<'a, str>,
}

pub(crate) struct Cursor<'a> {
    text: &'a str,
    pos: usize,
    delimiter: u8,
    quoting: bool,
}

#[inline]
fn is_line_end(b: u8) -> bool {
    b == b'\n' || b == b'\r'
}

impl<'a> Cursor<'a> {
    pub fn new(text: &'a str, delimiter: u8, quoting: bool) -> Self {
        Cursor {
            text,
            pos: 0,
            delimiter,
            quoting,
        }
    }

    pub fn at_end(&self) -> bool {
        self.pos >= self.text.len()
    }

    /// Skip a run of `\n` / `\r` characters as one row boundary
    pub fn skip_line_end(&mut self) {
        let bytes = self.text.as_bytes();
        while self.pos < bytes.len() && is_line_end(bytes[self.pos]) {
            self.pos += 1;
        }
    }

    /// Read the next cell and report what ended it
    pub fn next_cell(&mut self) -> (Token<'a>, Boundary) {
        let bytes = self.text.as_bytes();
        let token = if self.quoting && bytes.get(self.pos) == Some(&QUOTE) {
            Token {
                text: Cow::Owned(self.read_quoted()),
            }
        } else {
            let start = self.pos;
            self.scan_to_boundary();
            Token {
                text: Cow::Borrowed(&self.text[start..self.pos]),
            }
        };
        (token, self.finish_cell())
    }

    fn scan_to_boundary(&mut self) {
        let bytes = self.text.as_bytes();
        while self.pos < bytes.len() {
            let b = bytes[self.pos];
            if b == self.delimiter || is_line_end(b) {
                break;
            }
            self.pos += 1;
        }
    }

    fn finish_cell(&mut self) -> Boundary {
        match self.text.as_bytes().get(self.pos) {
            None => Boundary::Eof,
            Some(&b) if b == self.delimiter => {
                self.pos += 1;
                Boundary::Delimiter
            }
            Some(_) => Boundary::LineEnd,
        }
    }

    /// Decode a quoted cell starting at the opening quote.
    ///
    /// `""` inside the quotes is a literal quote. Delimiters and terminators
    /// are content until the closing quote; whatever follows the closing
    /// quote up to the next boundary is kept as-is. An unterminated quote
    /// runs to end of input.
    fn read_quoted(&mut self) -> String {
        let bytes = self.text.as_bytes();
        let mut out = String::new();
        self.pos += 1;
        let mut segment = self.pos;

        loop {
            let Some(offset) = bytes[self.pos..].iter().position(|&b| b == QUOTE) else {
                out.push_str(&self.text[segment..]);
                self.pos = bytes.len();
                return out;
            };
            let quote = self.pos + offset;
            out.push_str(&self.text[segment..quote]);

            if bytes.get(quote + 1) == Some(&QUOTE) {
                out.push('"');
                self.pos = quote + 2;
                segment = self.pos;
            } else {
                self.pos = quote + 1;
                break;
            }
        }

        let trailing = self.pos;
        self.scan_to_boundary();
        out.push_str(&self.text[trailing..self.pos]);
        out
    }
}
