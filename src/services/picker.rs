// SPDX-FileCopyrightText: 2026 Sephyi <me@sephy.io>
//
// SPDX-License-Identifier: PolyForm-Noncommercial-1.0.0

use std::io::{self, IsTerminal};

use console::Term;
use dialoguer::FuzzySelect;
use dialoguer::theme::ColorfulTheme;
use tracing::debug;

use crate::error::{Error, Result};

/// What the user did with the candidate list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selection {
    /// Confirmed indices into the candidate slice.
    Picked(Vec<usize>),
    /// Cancelled without choosing.
    Aborted,
}

/// Interactive narrowing of a candidate list.
///
/// Implementations own their input loop while `select` runs. Failing to
/// operate at all is an `Err`; a user cancel is `Ok(Selection::Aborted)`.
pub trait Picker {
    fn select(&self, candidates: &[String]) -> Result<Selection>;
}

impl<P: Picker + ?Sized> Picker for &P {
    fn select(&self, candidates: &[String]) -> Result<Selection> {
        (**self).select(candidates)
    }
}

/// Fuzzy finder drawn on the stderr terminal.
pub struct FuzzyPicker {
    term: Term,
}

const PROMPT: &str = "Select commit type";

impl FuzzyPicker {
    /// Fails when there is no interactive terminal to draw on or read keys from.
    pub fn new() -> Result<Self> {
        let term = Term::stderr();
        if !term.is_term() {
            return Err(Error::PickerInit("stderr is not a terminal".into()));
        }
        if !io::stdin().is_terminal() {
            return Err(Error::PickerInit("stdin is not a terminal".into()));
        }
        Ok(Self { term })
    }
}

impl Picker for FuzzyPicker {
    fn select(&self, candidates: &[String]) -> Result<Selection> {
        if candidates.is_empty() {
            return Ok(Selection::Picked(Vec::new()));
        }

        debug!(candidates = candidates.len(), "opening fuzzy picker");
        let outcome = FuzzySelect::with_theme(&ColorfulTheme::default())
            .with_prompt(PROMPT)
            .items(candidates)
            .default(0)
            .highlight_matches(true)
            .interact_on_opt(&self.term);

        match outcome {
            Ok(Some(index)) => Ok(Selection::Picked(vec![index])),
            Ok(None) => Ok(Selection::Aborted),
            Err(dialoguer::Error::IO(e)) if e.kind() == io::ErrorKind::Interrupted => {
                Ok(Selection::Aborted)
            }
            Err(e) => Err(e.into()),
        }
    }
}
