// SPDX-FileCopyrightText: 2026 Sephyi <me@sephy.io>
// SPDX-License-Identifier: GPL-3.0-only

use std::fmt;

/// One selectable commit category.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CommitType {
    pub key: &'static str,
    pub description: &'static str,
}

impl CommitType {
    /// Built-in categories, in the order the picker shows them.
    pub const BUILTIN: &'static [CommitType] = &[
        CommitType::new("add", "Add something"),
        CommitType::new("change", "Change something"),
        CommitType::new("deprecate", "Mark as deprecate something"),
        CommitType::new("remove", "Remove something"),
        CommitType::new("hotfix", "Make a hotfix"),
        CommitType::new("fix", "Just bug fix"),
        CommitType::new("security", "Fix security related issue"),
        CommitType::new("refactor", "Refactoring code"),
        CommitType::new(
            "chore",
            "Something not related the feature (e.g. CI/CD, tools, libraries)",
        ),
        CommitType::new("doc", "Documentation only changes"),
        CommitType::new("test", "Adding or Fix testcase"),
        CommitType::new(
            "style",
            "Just update coding style that should be not changed a feature",
        ),
        CommitType::new("db", "DB only changes (e.g. migrations, SQL)"),
    ];

    pub const fn new(key: &'static str, description: &'static str) -> Self {
        Self { key, description }
    }

    /// Exact, case-sensitive lookup by key.
    pub fn find(types: &[CommitType], key: &str) -> Option<CommitType> {
        types.iter().find(|t| t.key == key).copied()
    }
}

impl fmt::Display for CommitType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key)
    }
}

/// A composed `key(scope): description` line.
///
/// Scope and description are kept exactly as typed, empty strings included.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommitLine {
    pub key: String,
    pub scope: String,
    pub description: String,
}

impl fmt::Display for CommitLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}({}): {}", self.key, self.scope, self.description)
    }
}
