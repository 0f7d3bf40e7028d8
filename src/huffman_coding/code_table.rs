//! Walk a finished tree and record the bit path to every leaf.
//!
//! Going left appends a 0, going right appends a 1. A tree that is a lone leaf has no path at
//! all, so that leaf is given the one bit code `0` to keep the body decodable.

use log::debug;

use super::huffman::{Node, NodeData};
use crate::error::{Error, Result};

/// Longest code that fits in a `CodeEntry`.
const MAX_CODE_LEN: usize = 64;

/// The code of one symbol, held in the low `length` bits of `code`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CodeEntry {
    pub code: u64,
    pub length: u8,
}

impl CodeEntry {
    /// True when this code is the leading part of `other`.
    pub fn is_prefix_of(&self, other: &CodeEntry) -> bool {
        self.length <= other.length && other.code >> (other.length - self.length) == self.code
    }
}

/// Codes for all 256 byte values. Symbols absent from the tree have no entry.
#[derive(Debug, Clone)]
pub struct CodeTable {
    entries: [Option<CodeEntry>; 256],
}

impl CodeTable {
    pub fn get(&self, symbol: u8) -> Option<CodeEntry> {
        self.entries[symbol as usize]
    }

    /// Iterate over (symbol, code) for every symbol that has a code.
    pub fn iter(&self) -> impl Iterator<Item = (u8, CodeEntry)> + '_ {
        self.entries
            .iter()
            .enumerate()
            .filter_map(|(sym, e)| e.map(|e| (sym as u8, e)))
    }

    /// Total number of body bits the histogram produces under this table.
    pub fn encoded_bits(&self, freqs: &[u64; 256]) -> u64 {
        self.iter()
            .map(|(sym, e)| freqs[sym as usize] * e.length as u64)
            .sum()
    }
}

/// Build the code table for a tree.
pub fn code_table(root: &Node) -> Result<CodeTable> {
    let mut table = CodeTable {
        entries: [None; 256],
    };
    if let NodeData::Leaf(sym) = root.node_data {
        table.entries[sym as usize] = Some(CodeEntry { code: 0, length: 1 });
        debug!("Single symbol tree, using a one bit code");
        return Ok(table);
    }
    walk(root, 0, 0, &mut table)?;
    Ok(table)
}

/// Recursively walk the tree, recording the code of each leaf reached.
fn walk(node: &Node, code: u64, depth: usize, table: &mut CodeTable) -> Result<()> {
    match &node.node_data {
        NodeData::Kids(left, right) => {
            if depth + 1 > MAX_CODE_LEN {
                return Err(Error::CodeTooLong(depth + 1));
            }
            walk(left, code << 1, depth + 1, table)?;
            walk(right, code << 1 | 1, depth + 1, table)
        }
        NodeData::Leaf(sym) => {
            table.entries[*sym as usize] = Some(CodeEntry {
                code,
                length: depth as u8,
            });
            Ok(())
        }
    }
}
