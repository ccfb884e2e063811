// Copyright 2025 Vivian Voss. Licensed under the Apache License, Version 2.0.
// SPDX-License-Identifier: Apache-2.0

//! Shell commands and bulk loading for the ytree CLI.

use anyhow::{bail, Context, Result};
use std::fs;
use std::path::Path;
use ytree::{BPlusTree, Record};

pub mod shell;

/// Bulk-load keys from a text file, one decimal integer per line.
///
/// Each key is inserted with an integer record carrying the key itself.
/// Blank lines are skipped; duplicates are counted but not re-inserted.
pub fn load_file(tree: &mut BPlusTree, path: &Path) -> Result<usize> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Cannot read {}", path.display()))?;

    let mut loaded = 0;
    for (lineno, line) in content.lines().enumerate() {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }
        let key: i32 = match trimmed.parse() {
            Ok(key) => key,
            Err(_) => bail!("{}:{}: not an integer: '{}'", path.display(), lineno + 1, trimmed),
        };
        if tree.insert(key, Record::new_int(key))?.is_none() {
            loaded += 1;
        }
    }
    Ok(loaded)
}
