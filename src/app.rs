// SPDX-FileCopyrightText: 2026 Sephyi <me@sephy.io>
//
// SPDX-License-Identifier: PolyForm-Noncommercial-1.0.0

use std::io::{BufRead, Write};

use tracing::debug;

use crate::domain::{CommitLine, CommitType};
use crate::error::{Error, Result};
use crate::services::label::render_labels;
use crate::services::picker::{Picker, Selection};
use crate::services::prompt::LinePrompt;

pub struct App<'t, P> {
    types: &'t [CommitType],
    picker: P,
}

impl<'t, P: Picker> App<'t, P> {
    pub fn new(types: &'t [CommitType], picker: P) -> Self {
        Self { types, picker }
    }

    /// Pick a type, ask for scope and description, then print the commit line.
    ///
    /// Nothing is read from `input` unless exactly one type was picked.
    pub fn run<R: BufRead, W: Write>(&self, input: R, output: W) -> Result<CommitLine> {
        let chosen = self.pick()?;
        debug!(key = chosen.key, "commit type selected");

        let mut prompt = LinePrompt::new(input, output);
        writeln!(prompt.output(), "Type: {}", chosen.key)?;
        let scope = prompt.ask("Scope")?;
        let description = prompt.ask("Description")?;

        let line = CommitLine {
            key: chosen.key.to_string(),
            scope,
            description,
        };
        debug!(
            scope_len = line.scope.len(),
            description_len = line.description.len(),
            "commit line composed"
        );

        let out = prompt.output();
        writeln!(out, "\n{line}")?;
        out.flush()?;

        Ok(line)
    }

    fn pick(&self) -> Result<CommitType> {
        let labels = render_labels(self.types);
        debug!(types = labels.len(), "labels rendered");

        let indices = match self.picker.select(&labels)? {
            Selection::Picked(indices) => indices,
            Selection::Aborted => {
                debug!("picker aborted");
                return Err(Error::Aborted);
            }
        };

        let [index] = indices[..] else {
            return Err(Error::InvalidSelection {
                count: indices.len(),
            });
        };

        self.types.get(index).copied().ok_or_else(|| {
            Error::Picker(format!(
                "picker returned index {index} for {} candidates",
                self.types.len()
            ))
        })
    }
}
