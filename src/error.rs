// SPDX-FileCopyrightText: 2026 Sephyi <me@sephy.io>
//
// SPDX-License-Identifier: PolyForm-Noncommercial-1.0.0

// miette's Diagnostic derive generates code that triggers this false positive
#![allow(unused_assignments)]

use std::io::Write;

use miette::Diagnostic;
use thiserror::Error;
use tracing::debug;

#[derive(Error, Diagnostic, Debug)]
pub enum Error {
    #[error("Cannot start the commit type picker: {0}")]
    #[diagnostic(
        code(commitpick::picker::init),
        help("Run commitpick from an interactive terminal")
    )]
    PickerInit(String),

    #[error("Selection aborted by user")]
    Aborted,

    #[error("Please choose single item.")]
    #[diagnostic(code(commitpick::picker::cardinality))]
    InvalidSelection { count: usize },

    #[error("Picker error: {0}")]
    #[diagnostic(code(commitpick::picker::error))]
    Picker(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Process exit status for this failure.
    ///
    /// Cancels, bad selections and fatal errors all exit with 1; they differ in
    /// what gets printed, not in the status.
    pub fn exit_code(&self) -> i32 {
        1
    }

    /// Print this failure the way the process reports it and return the exit status.
    ///
    /// Aborts are silent, a bad selection is a plain line on `out`, anything else
    /// is a diagnostic report on `err`.
    pub fn report(self, out: &mut impl Write, err: &mut impl Write) -> i32 {
        let code = self.exit_code();
        match self {
            Error::Aborted => debug!("selection aborted"),
            e @ Error::InvalidSelection { .. } => {
                debug!("rejected selection");
                writeln!(out, "{e}").ok();
            }
            e => {
                debug!(error = %e, "commitpick failed");
                writeln!(err, "{:?}", miette::Report::new(e)).ok();
            }
        }
        out.flush().ok();
        err.flush().ok();
        code
    }
}

impl From<dialoguer::Error> for Error {
    fn from(e: dialoguer::Error) -> Self {
        Error::Picker(e.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
