// Copyright 2025 Vivian Voss. Licensed under the Apache License, Version 2.0.
// SPDX-License-Identifier: Apache-2.0

//! Debug visualization of the tree and the leaf chain.
//!
//! Renders to `String` so the shell decides where output goes; library
//! code never prints. The breadth-first walk uses a queue local to the
//! call, so concurrent readers of different trees cannot interfere.

use crate::btree::node::NodeKind;
use crate::btree::tree::BPlusTree;
use crate::btree::types::NodeId;
use std::collections::VecDeque;
use std::fmt::Write as _;

/// Render the tree rank by rank, root first.
///
/// Each node prints as `[k1 k2 ...]`; with `verbose` the arena id is
/// prefixed (`#7[k1 k2]`). One line per rank, leaves last.
pub fn dump_tree(tree: &BPlusTree, verbose: bool) -> String {
    let Some(root) = tree.root else {
        return "(empty tree)".to_string();
    };

    let mut ranks: Vec<Vec<String>> = Vec::new();
    let mut queue: VecDeque<(NodeId, usize)> = VecDeque::new();
    queue.push_back((root, 0));

    while let Some((id, rank)) = queue.pop_front() {
        let Some(node) = tree.arena.get(id) else {
            continue;
        };
        if ranks.len() <= rank {
            ranks.push(Vec::new());
        }
        let mut cell = String::new();
        match &node.kind {
            NodeKind::Internal(internal) => {
                write_keys(&mut cell, id, &internal.keys, verbose);
                for &child in &internal.children {
                    queue.push_back((child, rank + 1));
                }
            }
            NodeKind::Leaf(leaf) => {
                write_keys(&mut cell, id, &leaf.keys, verbose);
            }
        }
        ranks[rank].push(cell);
    }

    ranks
        .iter()
        .map(|rank| rank.join(" "))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Render the leaf chain left to right.
///
/// Leaves print as `[k1 k2 ...]` joined by ` -> `, ending in `-> ()`.
pub fn dump_leaves(tree: &BPlusTree, verbose: bool) -> String {
    let Some(mut cursor) = leftmost(tree) else {
        return "(empty tree)".to_string();
    };

    let mut out = String::new();
    loop {
        let Some(NodeKind::Leaf(leaf)) = tree.arena.get(cursor).map(|n| &n.kind) else {
            break;
        };
        write_keys(&mut out, cursor, &leaf.keys, verbose);
        match leaf.next {
            Some(next) => {
                out.push_str(" -> ");
                cursor = next;
            }
            None => break,
        }
    }
    out.push_str(" -> ()");
    out
}

fn write_keys(out: &mut String, id: NodeId, keys: &[i32], verbose: bool) {
    if verbose {
        let _ = write!(out, "#{}", id);
    }
    out.push('[');
    for (i, key) in keys.iter().enumerate() {
        if i > 0 {
            out.push(' ');
        }
        let _ = write!(out, "{}", key);
    }
    out.push(']');
}

fn leftmost(tree: &BPlusTree) -> Option<NodeId> {
    let mut current = tree.root?;
    loop {
        match &tree.arena.get(current)?.kind {
            NodeKind::Leaf(_) => return Some(current),
            NodeKind::Internal(internal) => {
                current = internal.children.first().copied()?;
            }
        }
    }
}
