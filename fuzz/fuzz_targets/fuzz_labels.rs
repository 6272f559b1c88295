// SPDX-FileCopyrightText: 2026 Sephyi <me@sephy.io>
//
// SPDX-License-Identifier: GPL-3.0-only

#![no_main]

use libfuzzer_sys::fuzz_target;

use commitpick::services::label::render_pairs;

fuzz_target!(|data: &str| {
    let pairs: Vec<(&str, &str)> = data
        .lines()
        .map(|line| line.split_once('\t').unwrap_or((line, "")))
        .collect();

    let labels = render_pairs(pairs.iter().copied());
    assert_eq!(labels.len(), pairs.len());

    for ((key, description), label) in pairs.iter().zip(&labels) {
        assert!(label.starts_with(key));
        assert!(label.ends_with(&format!(" - {description}")));
    }
});
