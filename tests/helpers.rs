// SPDX-FileCopyrightText: 2026 Sephyi <me@sephy.io>
//
// SPDX-License-Identifier: GPL-3.0-only

use std::cell::RefCell;

use commitpick::error::{Error, Result};
use commitpick::services::picker::{Picker, Selection};

/// Canned picker outcome.
#[allow(dead_code)]
pub enum Script {
    Pick(Vec<usize>),
    Abort,
    Fail(&'static str),
}

/// Picker that answers from a script and records what it was shown.
pub struct ScriptedPicker {
    script: Script,
    pub shown: RefCell<Vec<String>>,
}

#[allow(dead_code)]
impl ScriptedPicker {
    pub fn new(script: Script) -> Self {
        Self {
            script,
            shown: RefCell::new(Vec::new()),
        }
    }

    pub fn pick(index: usize) -> Self {
        Self::new(Script::Pick(vec![index]))
    }
}

impl Picker for ScriptedPicker {
    fn select(&self, candidates: &[String]) -> Result<Selection> {
        *self.shown.borrow_mut() = candidates.to_vec();
        match &self.script {
            Script::Pick(indices) => Ok(Selection::Picked(indices.clone())),
            Script::Abort => Ok(Selection::Aborted),
            Script::Fail(msg) => Err(Error::Picker((*msg).to_string())),
        }
    }
}
