//! Sequential field reader over a cell stream.

use std::io::BufRead;

use tracing::trace;

use crate::error::{CellError, Result};
use crate::field;

/// Pulls typed fields, one at a time, from a cell stream.
///
/// Fields are separated by any ASCII whitespace, including line breaks.
/// Text fields are the exception: they run to the end of a line. Input bytes
/// are decoded as ISO-8859-1.
///
/// Every read consumes exactly one field and there is no way to push a field
/// back, so a failed read leaves the stream unusable.
pub struct TokenReader<'a> {
    source: Box<dyn BufRead + 'a>,
    buffer: Vec<u8>,
    line: String,
    cursor: usize,
    line_number: usize,
}

impl<'a> TokenReader<'a> {
    /// Create a reader over any buffered byte source.
    pub fn new(source: impl BufRead + 'a) -> Self {
        Self {
            source: Box::new(source),
            buffer: Vec::new(),
            line: String::new(),
            cursor: 0,
            line_number: 0,
        }
    }

    /// Create a reader over in-memory text.
    pub fn from_text(text: &'a str) -> Self {
        Self::new(text.as_bytes())
    }

    /// Number of the line currently being consumed (1-based).
    pub fn line_number(&self) -> usize {
        self.line_number
    }

    /// Read an integer field.
    pub fn read_int(&mut self, description: &str) -> Result<i32> {
        self.read_int_with(description, |_| true)
    }

    /// Read an integer field and check it with `verify`.
    pub fn read_int_with(&mut self, description: &str, verify: impl Fn(i32) -> bool) -> Result<i32> {
        let text = self.next_field(description)?;
        let value = field::parse_integer(&text)
            .ok_or_else(|| self.format_error(description, "an integer", &text))?;
        if !verify(value) {
            return Err(self.range_error(description, value));
        }
        trace!(field = description, value, "read integer");
        Ok(value)
    }

    /// Read a real-number field.
    pub fn read_double(&mut self, description: &str) -> Result<f64> {
        self.read_double_with(description, |_| true)
    }

    /// Read a real-number field and check it with `verify`.
    pub fn read_double_with(&mut self, description: &str, verify: impl Fn(f64) -> bool) -> Result<f64> {
        let text = self.next_field(description)?;
        let value = field::parse_real(&text)
            .ok_or_else(|| self.format_error(description, "a real number", &text))?;
        if !verify(value) {
            return Err(self.range_error(description, value));
        }
        trace!(field = description, value, "read real");
        Ok(value)
    }

    /// Read a boolean field (`0` or `1`).
    pub fn read_bool(&mut self, description: &str) -> Result<bool> {
        self.read_bool_with(description, |_| true)
    }

    /// Read a boolean field and check it with `verify`.
    pub fn read_bool_with(&mut self, description: &str, verify: impl Fn(bool) -> bool) -> Result<bool> {
        let text = self.next_field(description)?;
        let value =
            field::parse_bool(&text).ok_or_else(|| self.format_error(description, "0 or 1", &text))?;
        if !verify(value) {
            return Err(self.range_error(description, value));
        }
        Ok(value)
    }

    /// Read a single whitespace-delimited string field.
    pub fn read_string(&mut self, description: &str) -> Result<String> {
        self.read_string_with(description, |_| true)
    }

    /// Read a string field and check it with `verify`.
    pub fn read_string_with(&mut self, description: &str, verify: impl Fn(&str) -> bool) -> Result<String> {
        let text = self.next_field(description)?;
        if !verify(&text) {
            return Err(CellError::parsing(
                self.line_number,
                format!("invalid {description}: {text:?}"),
            ));
        }
        Ok(text)
    }

    /// Read a line-delimited text field.
    ///
    /// Returns the rest of the current line when it holds anything besides
    /// blanks, otherwise the whole next line. Leading blanks are dropped and
    /// tabs become spaces.
    pub fn read_text(&mut self, description: &str) -> Result<String> {
        let rest = self.line[self.cursor..].trim_start_matches(is_blank);
        if rest.is_empty() {
            if !self.next_line()? {
                return Err(self.end_of_stream(description));
            }
        } else {
            self.cursor = self.line.len() - rest.len();
        }
        let text = self.line[self.cursor..]
            .trim_start_matches(is_blank)
            .replace('\t', " ");
        self.cursor = self.line.len();
        trace!(field = description, text = text.as_str(), "read text");
        Ok(text)
    }

    fn next_field(&mut self, description: &str) -> Result<String> {
        loop {
            let rest = &self.line[self.cursor..];
            let trimmed = rest.trim_start_matches(is_blank);
            if !trimmed.is_empty() {
                let start = self.cursor + (rest.len() - trimmed.len());
                let len = trimmed.find(is_blank).unwrap_or(trimmed.len());
                self.cursor = start + len;
                return Ok(self.line[start..self.cursor].to_string());
            }
            if !self.next_line()? {
                return Err(self.end_of_stream(description));
            }
        }
    }

    /// Load the next line into the buffer. Returns `false` at end of stream.
    fn next_line(&mut self) -> Result<bool> {
        self.buffer.clear();
        let count = self
            .source
            .read_until(b'\n', &mut self.buffer)
            .map_err(|e| {
                CellError::parsing(self.line_number, format!("failed to read cell data: {e}"))
            })?;
        if count == 0 {
            return Ok(false);
        }
        self.line_number += 1;
        self.line = self.buffer.iter().map(|&byte| char::from(byte)).collect();
        let end = self.line.trim_end_matches(|c: char| c == '\r' || c == '\n').len();
        self.line.truncate(end);
        self.cursor = 0;
        Ok(true)
    }

    fn format_error(&self, description: &str, expected: &str, text: &str) -> CellError {
        CellError::incorrect_format(
            self.line_number,
            format!("{description}: expected {expected}, found {text:?}"),
        )
    }

    fn range_error(&self, description: &str, value: impl std::fmt::Display) -> CellError {
        CellError::parsing(self.line_number, format!("invalid {description}: {value}"))
    }

    fn end_of_stream(&self, description: &str) -> CellError {
        CellError::parsing(
            self.line_number,
            format!("unexpected end of cell data while reading {description}"),
        )
    }
}

fn is_blank(c: char) -> bool {
    c.is_ascii_whitespace()
}

/// Verifier accepting values no smaller than `min`.
pub fn at_least<T: PartialOrd>(min: T) -> impl Fn(T) -> bool {
    move |value| value >= min
}

/// Verifier accepting values in `min..=max`.
pub fn between<T: PartialOrd>(min: T, max: T) -> impl Fn(T) -> bool {
    move |value| value >= min && value <= max
}
