// ABOUTME: FitVoice CLI - classify transcripts against the voice command grammar
// ABOUTME: Grammar debugging tool used during mobile development
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FitVoice

//! Usage:
//! ```bash
//! # Classify a transcript
//! fitvoice-cli "start a workout"
//!
//! # Classify from stdin
//! echo "log my weight" | fitvoice-cli
//!
//! # List the supported commands with canonical phrases
//! fitvoice-cli --list
//! ```

use std::io::Read;

use clap::Parser;

use fitvoice::{classify, command_examples};

#[derive(Parser)]
#[command(
    name = "fitvoice-cli",
    about = "Classify voice transcripts into FitVoice app commands"
)]
struct Cli {
    /// Transcript to classify; reads stdin when omitted
    transcript: Option<String>,

    /// List supported commands with canonical phrases
    #[arg(long)]
    list: bool,

    /// Enable debug logging
    #[arg(long, short = 'v')]
    verbose: bool,
}

fn main() -> anyhow::Result<()> {
    let args = Cli::parse();

    let log_level = if args.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt().with_env_filter(log_level).init();

    if args.list {
        for example in command_examples() {
            println!(
                "{:<24} {:<22} {}",
                format!("\"{}\"", example.phrase),
                example.command.as_str(),
                example.action
            );
        }
        return Ok(());
    }

    let transcript = match args.transcript {
        Some(text) => text,
        None => {
            let mut buffer = String::new();
            std::io::stdin().read_to_string(&mut buffer)?;
            buffer
        }
    };

    let command = classify(&transcript);
    println!("{}", serde_json::to_string_pretty(&command)?);
    println!("{}", command.describe());
    Ok(())
}
