//! Indentation-tracking text sink.
//!
//! The writer never inserts anything on its own: newlines come only from
//! `write_line` and leading spaces only from `write_indent`.

use std::fmt;

/// Line terminator for all printed output.
pub const NEW_LINE: &str = "\r\n";

/// One level of indentation.
pub const INDENT: &str = "  ";

#[derive(Debug, Default)]
pub struct TextWriter {
    output: String,
    indent_level: u32,
}

impl TextWriter {
    pub fn new() -> Self {
        Self {
            output: String::with_capacity(1024),
            indent_level: 0,
        }
    }

    pub fn push_indent(&mut self) {
        self.indent_level += 1;
    }

    /// Callers keep pushes and pops paired; there is deliberately no clamp at
    /// zero.
    pub fn pop_indent(&mut self) {
        debug_assert!(self.indent_level > 0, "pop_indent without matching push_indent");
        self.indent_level -= 1;
    }

    pub fn indent_level(&self) -> u32 {
        self.indent_level
    }

    pub fn write(&mut self, s: &str) {
        self.output.push_str(s);
    }

    pub fn write_line(&mut self) {
        self.output.push_str(NEW_LINE);
    }

    pub fn write_indent(&mut self) {
        for _ in 0..self.indent_level {
            self.output.push_str(INDENT);
        }
    }

    pub fn as_str(&self) -> &str {
        &self.output
    }

    pub fn into_string(self) -> String {
        self.output
    }
}

impl fmt::Display for TextWriter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.output)
    }
}
