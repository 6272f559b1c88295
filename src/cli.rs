// SPDX-FileCopyrightText: 2026 Sephyi <me@sephy.io>
// SPDX-License-Identifier: GPL-3.0-only

use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "commitpick")]
#[command(version)]
#[command(
    about = "Pick a commit type, then compose a `type(scope): description` line",
    long_about = None
)]
pub struct Cli {}
