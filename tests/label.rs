// SPDX-FileCopyrightText: 2026 Sephyi <me@sephy.io>
//
// SPDX-License-Identifier: GPL-3.0-only

use commitpick::domain::CommitType;
use commitpick::services::label::{SEPARATOR, key_width, render_labels, render_pairs};
use proptest::prelude::*;

// ─── Built-in table ──────────────────────────────────────────────────────────

#[test]
fn builtin_labels_are_aligned() {
    let labels = render_labels(CommitType::BUILTIN);
    insta::assert_snapshot!(labels.join("\n"), @r"
    add       - Add something
    change    - Change something
    deprecate - Mark as deprecate something
    remove    - Remove something
    hotfix    - Make a hotfix
    fix       - Just bug fix
    security  - Fix security related issue
    refactor  - Refactoring code
    chore     - Something not related the feature (e.g. CI/CD, tools, libraries)
    doc       - Documentation only changes
    test      - Adding or Fix testcase
    style     - Just update coding style that should be not changed a feature
    db        - DB only changes (e.g. migrations, SQL)
    ");
}

#[test]
fn builtin_width_is_longest_key() {
    let width = key_width(CommitType::BUILTIN.iter().map(|t| (t.key, t.description)));
    assert_eq!(width, "deprecate".len());
}

#[test]
fn labels_have_no_tabs() {
    for label in render_labels(CommitType::BUILTIN) {
        assert!(!label.contains('\t'), "tab in {label:?}");
    }
}

// ─── Edge cases ──────────────────────────────────────────────────────────────

#[test]
fn empty_table_renders_nothing() {
    assert!(render_labels(&[]).is_empty());
}

#[test]
fn single_entry_has_no_padding() {
    let labels = render_pairs([("fix", "Just bug fix")]);
    assert_eq!(labels, vec!["fix - Just bug fix".to_string()]);
}

#[test]
fn empty_key_and_description() {
    let labels = render_pairs([("", ""), ("ab", "x")]);
    assert_eq!(labels, vec!["   - ".to_string(), "ab - x".to_string()]);
}

#[test]
fn wide_keys_align_by_display_width() {
    // Each CJK character occupies two columns.
    let labels = render_pairs([("修正", "fix"), ("abc", "other")]);
    assert_eq!(labels[0], "修正 - fix");
    assert_eq!(labels[1], "abc  - other");
}

#[test]
fn table_is_left_untouched() {
    let before = CommitType::BUILTIN.to_vec();
    let _ = render_labels(CommitType::BUILTIN);
    assert_eq!(CommitType::BUILTIN, &before[..]);
}

// ─── Properties ──────────────────────────────────────────────────────────────

fn table() -> impl Strategy<Value = Vec<(String, String)>> {
    prop::collection::vec(("[a-z]{0,12}", "[ -~]{0,40}"), 1..20)
}

proptest::proptest! {
    #[test]
    fn one_label_per_entry_in_order(entries in table()) {
        let labels = render_pairs(entries.iter().map(|(k, d)| (k.as_str(), d.as_str())));
        prop_assert_eq!(labels.len(), entries.len());
        for ((key, description), label) in entries.iter().zip(&labels) {
            prop_assert!(label.starts_with(key.as_str()));
            let suffix = format!("{SEPARATOR}{description}");
            prop_assert!(label.ends_with(&suffix));
        }
    }

    #[test]
    fn separator_starts_in_same_column(entries in table()) {
        let labels = render_pairs(entries.iter().map(|(k, d)| (k.as_str(), d.as_str())));
        let width = entries.iter().map(|(k, _)| k.len()).max().unwrap_or(0);
        for label in &labels {
            prop_assert_eq!(&label[width..width + SEPARATOR.len()], SEPARATOR);
        }
    }

    #[test]
    fn rendering_is_idempotent(entries in table()) {
        let pairs: Vec<(&str, &str)> = entries.iter().map(|(k, d)| (k.as_str(), d.as_str())).collect();
        prop_assert_eq!(render_pairs(pairs.iter().copied()), render_pairs(pairs.iter().copied()));
    }
}
