// Copyright 2025 Vivian Voss. Licensed under the Apache License, Version 2.0.
// SPDX-License-Identifier: Apache-2.0

//! Interactive shell (REPL) implementation.

use anyhow::Result;
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;
use ytree::{dump_leaves, dump_tree, BPlusTree, Record};

use crate::formatters;

/// Session state threaded through command dispatch.
struct Session {
    tree: BPlusTree,
    verbose: bool,
    format: String,
}

pub fn run(tree: BPlusTree, format: &str) -> Result<()> {
    println!("ytree shell v0.1.0");
    println!("Order: {}", tree.order().value());
    println!("Type ? for help, q to quit\n");

    let mut session = Session {
        tree,
        verbose: false,
        format: format.to_string(),
    };
    let mut rl = DefaultEditor::new()?;

    loop {
        let readline = rl.readline("ytree> ");

        match readline {
            Ok(line) => {
                let trimmed = line.trim();

                if trimmed.is_empty() {
                    continue;
                }

                // Add to history
                let _ = rl.add_history_entry(trimmed);

                match handle_command(trimmed, &mut session) {
                    Ok(should_exit) => {
                        if should_exit {
                            break;
                        }
                    }
                    Err(e) => eprintln!("Error: {}", e),
                }
            }
            Err(ReadlineError::Interrupted) => {
                println!("^C");
                continue;
            }
            Err(ReadlineError::Eof) => {
                println!("Goodbye!");
                break;
            }
            Err(err) => {
                eprintln!("Error: {:?}", err);
                break;
            }
        }
    }

    Ok(())
}

fn handle_command(input: &str, session: &mut Session) -> Result<bool> {
    let parts: Vec<&str> = input.split_whitespace().collect();
    let command = parts[0];

    match command {
        "q" => {
            println!("Goodbye!");
            return Ok(true);
        }

        "?" => print_help(),

        "i" => {
            let key = parse_key(&parts, 1)?;
            match session.tree.insert(key, Record::new_int(key))? {
                None => println!("Inserted {}", key),
                Some(_) => println!("Duplicate key {} ignored", key),
            }
        }

        "f" => {
            let key = parse_key(&parts, 1)?;
            match session.tree.find(key) {
                Some(record) => println!("{}", formatters::format_found(key, record, &session.format)),
                None => println!("Key {} not found", key),
            }
        }

        "p" => {
            let key = parse_key(&parts, 1)?;
            match (session.tree.find(key), session.tree.locate(key)) {
                (Some(record), Some((leaf, slot))) => {
                    println!("{}", formatters::format_found(key, record, &session.format));
                    println!("  in leaf #{} slot {}", leaf, slot);
                }
                _ => println!("Key {} not found", key),
            }
        }

        "r" => {
            let lo = parse_key(&parts, 1)?;
            let hi = parse_key(&parts, 2)?;
            let pairs = session.tree.range(lo, hi);
            if pairs.is_empty() {
                println!("No keys in [{}, {}]", lo, hi);
            } else {
                print!("{}", formatters::format_pairs(&pairs, &session.format));
            }
        }

        "d" => {
            let key = parse_key(&parts, 1)?;
            if session.tree.delete(key)? {
                println!("Deleted {}", key);
            } else {
                println!("Key {} not found", key);
            }
        }

        "x" => {
            session.tree.purge();
            println!("Tree purged");
        }

        "t" => println!("{}", dump_tree(&session.tree, session.verbose)),

        "l" => println!("{}", dump_leaves(&session.tree, session.verbose)),

        "v" => {
            session.verbose = !session.verbose;
            println!(
                "Verbose output {}",
                if session.verbose { "on" } else { "off" }
            );
        }

        "a" => {
            let stats = session.tree.stats();
            println!("Tree statistics:");
            println!("  Records: {}", stats.record_count);
            println!("  Nodes:   {}", stats.node_count);
            println!("  Height:  {}", stats.height);
            println!("  Order:   {}", stats.order.value());
        }

        _ => {
            println!("Unknown command: {}", command);
            println!("Type ? for available commands");
        }
    }

    Ok(false)
}

fn parse_key(parts: &[&str], index: usize) -> Result<i32> {
    let raw = parts
        .get(index)
        .ok_or_else(|| anyhow::anyhow!("Missing key argument (type ? for usage)"))?;
    raw.parse()
        .map_err(|_| anyhow::anyhow!("Not an integer key: '{}'", raw))
}

fn print_help() {
    println!("Commands:");
    println!("  i <k>       Insert key k (record carries k)");
    println!("  f <k>       Find key k");
    println!("  p <k>       Find key k and show its leaf location");
    println!("  r <k1> <k2> List keys in [k1, k2]");
    println!("  d <k>       Delete key k");
    println!("  x           Purge the tree");
    println!("  t           Print the tree");
    println!("  l           Print the leaf chain");
    println!("  v           Toggle verbose dumps (node ids)");
    println!("  a           Show tree statistics");
    println!("  q           Quit");
    println!("  ?           Show this help");
}
