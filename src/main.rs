// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use tracing_subscriber::EnvFilter;

mod cli;
use cli::display::{themed, BOLD, GREEN, RED};
use cli::{build_config, Cli, Commands};

fn main() -> ExitCode {
    init_tracing();
    let cli = Cli::parse();

    match run(cli.command) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("{} {:#}", themed(RED, &[BOLD], "error:"), e);
            ExitCode::FAILURE
        }
    }
}

/// Logs go to stderr so `folio search` output can be piped.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run(command: Commands) -> anyhow::Result<ExitCode> {
    match command {
        Commands::Index {
            input,
            output,
            format,
            allow_invalid,
        } => {
            let config = build_config(&input, output, format, allow_invalid);
            let summary = folio::run_build(&config).context("index build failed")?;
            println!(
                "{} {} docs, {} terms, {} bytes [{}] → {}",
                themed(GREEN, &[BOLD], "built"),
                summary.doc_count,
                summary.vocab_size,
                summary.bytes,
                summary.kind,
                config.output.display()
            );
            if !summary.rejected.is_empty() {
                println!("skipped {} invalid posts", summary.rejected.len());
            }
            Ok(ExitCode::SUCCESS)
        }
        Commands::Inspect { file } => {
            let valid = cli::inspect::run(&file)?;
            Ok(if valid {
                ExitCode::SUCCESS
            } else {
                ExitCode::FAILURE
            })
        }
        Commands::Search { file, query, limit } => {
            cli::results::run(&file, &query, limit)?;
            Ok(ExitCode::SUCCESS)
        }
        Commands::Serve(args) => {
            let config = args.into_config();
            let runtime = tokio::runtime::Builder::new_multi_thread()
                .enable_all()
                .build()
                .context("starting async runtime")?;
            runtime.block_on(folio::server::serve(&config))?;
            Ok(ExitCode::SUCCESS)
        }
    }
}
