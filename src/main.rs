// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright (c) 2025 Pegasus Heavy Industries, LLC

//! intcode - compiles a JavaScript subset to label-addressed intermediate code
//!
//! This is the main entry point for the intcode CLI.
//!
//! ## Usage
//!
//! ```text
//! intcode program.js                  # text listing on stdout
//! intcode -e 'var a = 1 + 2' -f json  # JSON rows
//! intcode --profile machine prog.js   # JUMP/JUMPI target
//! ```

mod cli;
mod config;

use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use intcode_codegen::Generator;
use owo_colors::OwoColorize;
use tracing::{debug, info};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use cli::Cli;
use config::{Config, OutputFormat};

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{}: {:#}", "error".red().bold(), e);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<()> {
    let mut config = Config::load(cli.config.as_deref()).context("failed to load configuration")?;
    cli.apply(&mut config);
    init_tracing(&config.loglevel);
    for path in &config.sources {
        debug!("Loaded configuration from {}", path.display());
    }

    let (name, source) = read_source(cli)?;
    info!("Compiling {} with the {} profile", name, config.profile);

    let program =
        intcode_syntax::parse(&source).with_context(|| format!("failed to parse {name}"))?;
    let intcode = Generator::new(&source, config.profile.build())
        .generate(&program)
        .with_context(|| format!("failed to lower {name}"))?;

    match config.format {
        OutputFormat::Text => print!("{intcode}"),
        OutputFormat::Json => println!(
            "{}",
            serde_json::to_string(&intcode).context("failed to serialize listing")?
        ),
    }
    Ok(())
}

/// Returns a display name and the source text.
fn read_source(cli: &Cli) -> Result<(String, String)> {
    if let Some(code) = &cli.eval {
        return Ok(("<eval>".to_string(), code.clone()));
    }
    let path = cli
        .file
        .as_deref()
        .context("no source given (pass a FILE or --eval)")?;
    let source = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    Ok((path.display().to_string(), source))
}

/// Log to stderr, filtered by `RUST_LOG` or else the configured level.
fn init_tracing(loglevel: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(loglevel));
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();
}
