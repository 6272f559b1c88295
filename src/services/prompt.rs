// SPDX-FileCopyrightText: 2026 Sephyi <me@sephy.io>
//
// SPDX-License-Identifier: GPL-3.0-only

use std::io::{BufRead, Write};

use crate::error::Result;

/// Plain `Label: ` prompts answered one line at a time.
pub struct LinePrompt<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> LinePrompt<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Ask for one line of free text.
    ///
    /// Only the line terminator is removed. End of input reads as an empty answer,
    /// and bytes that are not UTF-8 come through as replacement characters.
    pub fn ask(&mut self, label: &str) -> Result<String> {
        write!(self.output, "{label}: ")?;
        self.output.flush()?;

        let mut buf = Vec::new();
        self.input.read_until(b'\n', &mut buf)?;
        if buf.last() == Some(&b'\n') {
            buf.pop();
        }
        // A final line without `\n` still drops its `\r`.
        if buf.last() == Some(&b'\r') {
            buf.pop();
        }
        Ok(String::from_utf8_lossy(&buf).into_owned())
    }

    pub fn output(&mut self) -> &mut W {
        &mut self.output
    }
}
