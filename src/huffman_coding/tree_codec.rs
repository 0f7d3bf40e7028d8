//! Serialize a Huffman tree into the byte aligned part of the container and read it back.
//!
//! The tree is written in pre-order. An internal node is the marker `'0'` followed by its left
//! and right subtrees. A leaf is the marker `'1'` followed by its byte value. A leaf value that
//! is the escape byte `'\\'` (or the legacy `'*'`) is preceded by an escape byte, and the
//! reader skips one escape byte after a leaf marker.

use log::trace;

use super::huffman::{Node, NodeData};
use crate::error::{Error, Result};

pub const INTERNAL: u8 = b'0';
pub const LEAF: u8 = b'1';
pub const ESCAPE: u8 = b'\\';
/// Leaf values written with an escape in front of them.
const ESCAPED: [u8; 2] = [b'*', ESCAPE];

/// Append the pre-order serialization of `node` to `out`.
pub fn serialize_tree(node: &Node, out: &mut Vec<u8>) {
    match &node.node_data {
        NodeData::Kids(left, right) => {
            out.push(INTERNAL);
            serialize_tree(left, out);
            serialize_tree(right, out);
        }
        NodeData::Leaf(sym) => {
            out.push(LEAF);
            if ESCAPED.contains(sym) {
                out.push(ESCAPE);
            }
            out.push(*sym);
        }
    }
}

/// Rebuild a tree from the front of `data`. `tree_size` is the node count from the header;
/// the tree must contain exactly that many nodes. Returns the root and the number of bytes
/// the tree took up, which is where the body starts.
pub fn deserialize_tree(data: &[u8], tree_size: usize) -> Result<(Node, usize)> {
    let mut reader = TreeReader {
        data,
        cursor: 0,
        nodes: 0,
        tree_size,
    };
    let root = reader.node()?;
    if reader.nodes != tree_size {
        return Err(Error::CorruptContainer("tree node count does not match header"));
    }
    trace!("Read {} tree nodes from {} bytes", reader.nodes, reader.cursor);
    Ok((root, reader.cursor))
}

struct TreeReader<'a> {
    data: &'a [u8],
    /// Bytes consumed so far.
    cursor: usize,
    /// Nodes built so far.
    nodes: usize,
    tree_size: usize,
}

impl TreeReader<'_> {
    fn next(&mut self) -> Result<u8> {
        let byte = *self
            .data
            .get(self.cursor)
            .ok_or(Error::CorruptContainer("tree ends early"))?;
        self.cursor += 1;
        Ok(byte)
    }

    fn node(&mut self) -> Result<Node> {
        self.nodes += 1;
        if self.nodes > self.tree_size {
            return Err(Error::CorruptContainer("tree has more nodes than the header declares"));
        }
        match self.next()? {
            LEAF => {
                let mut sym = self.next()?;
                if sym == ESCAPE {
                    sym = self.next()?;
                }
                Ok(Node::leaf(sym, 0))
            }
            INTERNAL => {
                let left = self.node()?;
                let right = self.node()?;
                Ok(Node::parent(left, right))
            }
            _ => Err(Error::CorruptContainer("unknown tree marker")),
        }
    }
}
