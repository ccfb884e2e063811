// Copyright 2025 Vivian Voss. Licensed under the Apache License, Version 2.0.
// SPDX-License-Identifier: Apache-2.0

//! In-memory B+Tree index engine.
//!
//! Generic ordered index over signed 32-bit keys with typed record values.
//! All nodes live in an arena slab; parent and next-leaf links are compact
//! node ids, so splits and merges re-parent children with plain id writes.
//!
//! ## Features
//!
//! - **Point lookup**: O(log n) descent plus binary search
//! - **Range scans**: inclusive `[lo, hi]` via the linked leaf chain
//! - **Ordered mutation**: insert with split, delete with borrow/merge
//! - **Record lifecycle**: owned typed records with a per-tree release
//!   hook for opaque payloads
//! - **Diagnostics**: rank-by-rank and leaf-chain dumps, stats snapshot
//!
//! ## Example Usage
//!
//! ```rust
//! use ytree::{BPlusTree, Order, Record};
//!
//! let mut tree = BPlusTree::with_order(Order::new(4)?);
//! for key in [5, 1, 9, 3] {
//!     tree.insert(key, Record::new_int(key * 10))?;
//! }
//!
//! let keys: Vec<i32> = tree.iter().map(|(k, _)| k).collect();
//! assert_eq!(keys, vec![1, 3, 5, 9]);
//!
//! let window = tree.range(2, 6);
//! assert_eq!(window.len(), 2); // keys 3 and 5
//! # Ok::<(), ytree::YtreeError>(())
//! ```

mod arena;
mod dump;
mod iter;
mod node;
mod record;
mod tree;
mod types;

#[cfg(test)]
mod btree_test;

// Re-export public API
pub use dump::{dump_leaves, dump_tree};
pub use iter::RangeScan;
pub use record::{Record, RecordKind, ReleaseHook};
pub use tree::{BPlusTree, TreeStats};
pub use types::{Key, NodeId, Order, DEFAULT_ORDER, MAX_ORDER, MIN_ORDER};
