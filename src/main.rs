// SPDX-FileCopyrightText: 2026 Sephyi <me@sephy.io>
//
// SPDX-License-Identifier: GPL-3.0-only

use std::io;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use commitpick::domain::CommitType;
use commitpick::services::picker::FuzzyPicker;
use commitpick::{App, Cli, Result};

fn main() {
    miette::set_hook(Box::new(|_| {
        Box::new(
            miette::MietteHandlerOpts::new()
                .terminal_links(true)
                .context_lines(2)
                .build(),
        )
    }))
    .ok();

    let _cli = Cli::parse();

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("commitpick=warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .with_ansi(std::env::var("NO_COLOR").is_err())
        .without_time()
        .init();

    if let Err(e) = run() {
        let code = e.report(&mut io::stdout(), &mut io::stderr());
        std::process::exit(code);
    }
}

fn run() -> Result<()> {
    let picker = FuzzyPicker::new()?;
    let app = App::new(CommitType::BUILTIN, picker);
    app.run(io::stdin().lock(), io::stdout().lock())?;
    Ok(())
}
