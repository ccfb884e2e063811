// Copyright 2025 Vivian Voss. Licensed under the Apache License, Version 2.0.
// SPDX-License-Identifier: Apache-2.0

//! Output formatting for shell results (table and JSON).

use serde_json::json;
use ytree::{Key, Record, RecordKind};

/// Render a single found pair in the requested format.
pub fn format_found(key: Key, record: &Record, format: &str) -> String {
    match format {
        "json" => json!({ "key": key, "record": record }).to_string(),
        _ => format!("{} => {}", key, describe(record)),
    }
}

/// Render range results in the requested format, one pair per line for
/// tables, a JSON array otherwise.
pub fn format_pairs(pairs: &[(Key, &Record)], format: &str) -> String {
    match format {
        "json" => {
            let items: Vec<serde_json::Value> = pairs
                .iter()
                .map(|(key, record)| json!({ "key": key, "record": record }))
                .collect();
            let mut out = serde_json::to_string_pretty(&items).unwrap_or_else(|_| "[]".to_string());
            out.push('\n');
            out
        }
        _ => {
            let mut out = String::new();
            for (key, record) in pairs {
                out.push_str(&format!("{} => {}\n", key, describe(record)));
            }
            out
        }
    }
}

/// Human-readable record summary.
fn describe(record: &Record) -> String {
    match record.kind() {
        RecordKind::Char => format!("char '{}'", record.as_char().unwrap_or('?')),
        RecordKind::Int => format!("int {}", record.as_int().unwrap_or(0)),
        RecordKind::Float => format!("float {}", record.as_float().unwrap_or(0.0)),
        RecordKind::Data => format!("data ({} bytes)", record.size().unwrap_or(0)),
    }
}
