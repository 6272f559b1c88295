// SPDX-FileCopyrightText: 2026 Sephyi <me@sephy.io>
//
// SPDX-License-Identifier: GPL-3.0-only

use console::{Alignment, measure_text_width, pad_str};

use crate::domain::CommitType;

pub const SEPARATOR: &str = " - ";

/// Render one aligned picker label per commit type, in table order.
///
/// Keys are padded to the widest key so every separator starts in the same
/// column:
///
/// ```text
/// add       - Add something
/// deprecate - Mark as deprecate something
/// ```
pub fn render_labels(types: &[CommitType]) -> Vec<String> {
    render_pairs(types.iter().map(|t| (t.key, t.description)))
}

/// Same as [`render_labels`] for arbitrary `(key, description)` pairs.
pub fn render_pairs<'a, I>(pairs: I) -> Vec<String>
where
    I: IntoIterator<Item = (&'a str, &'a str)>,
    I::IntoIter: Clone,
{
    let pairs = pairs.into_iter();
    let width = key_width(pairs.clone());

    pairs
        .map(|(key, description)| {
            let key = pad_str(key, width, Alignment::Left, None);
            format!("{key}{SEPARATOR}{description}")
        })
        .collect()
}

/// Display width of the widest key, 0 for an empty table.
pub fn key_width<'a>(pairs: impl IntoIterator<Item = (&'a str, &'a str)>) -> usize {
    pairs
        .into_iter()
        .map(|(key, _)| measure_text_width(key))
        .max()
        .unwrap_or(0)
}
