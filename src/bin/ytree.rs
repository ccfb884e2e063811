// Copyright 2025 Vivian Voss. Licensed under the Apache License, Version 2.0.
// SPDX-License-Identifier: Apache-2.0

//! ytree CLI tool.
//!
//! Interactive shell over an in-memory B+Tree index.

use anyhow::{anyhow, Context, Result};
use clap::Parser;
use std::path::PathBuf;
use ytree::{BPlusTree, Order};

mod commands;
mod formatters;

#[derive(Parser)]
#[command(name = "ytree")]
#[command(version = "0.1.0")]
#[command(about = "Interactive B+Tree index shell", long_about = None)]
struct Cli {
    /// Tree order (fan-out), 3..=100
    order: Option<u16>,

    /// Bulk-load file: one decimal integer key per line
    input: Option<PathBuf>,

    /// Output format for records and ranges: table|json
    #[arg(short, long, default_value = "table")]
    format: String,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let order = match cli.order {
        Some(value) => Order::new(value).map_err(|e| anyhow!("{}", e))?,
        None => Order::default(),
    };
    let mut tree = BPlusTree::with_order(order);

    if let Some(path) = &cli.input {
        let loaded = commands::load_file(&mut tree, path)
            .with_context(|| format!("Failed to bulk-load {}", path.display()))?;
        println!("Loaded {} keys from {}", loaded, path.display());
    }

    commands::shell::run(tree, &cli.format)
}
