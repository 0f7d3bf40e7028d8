use log::{debug, trace};

use super::priority_queue::PriorityQueue;
use crate::error::{Error, Result};

/// What a node carries: two owned subtrees, or a byte value.
#[derive(Eq, PartialEq, Debug, Clone)]
pub enum NodeData {
    Kids(Box<Node>, Box<Node>),
    Leaf(u8),
}

/// A Huffman tree node. Every node has either zero or two children.
#[derive(Eq, PartialEq, Debug, Clone)]
pub struct Node {
    pub weight: u64,
    pub node_data: NodeData,
}

impl Node {
    /// Create a new leaf
    pub fn leaf(symbol: u8, weight: u64) -> Node {
        Node {
            weight,
            node_data: NodeData::Leaf(symbol),
        }
    }

    /// Create a new internal node owning both children. Its weight is the sum of theirs.
    pub fn parent(left: Node, right: Node) -> Node {
        Node {
            weight: left.weight + right.weight,
            node_data: NodeData::Kids(Box::new(left), Box::new(right)),
        }
    }

    pub fn is_leaf(&self) -> bool {
        matches!(self.node_data, NodeData::Leaf(_))
    }

    /// Count of all nodes in this subtree, leaves and internal nodes alike.
    pub fn node_count(&self) -> usize {
        match &self.node_data {
            NodeData::Kids(left, right) => 1 + left.node_count() + right.node_count(),
            NodeData::Leaf(_) => 1,
        }
    }

    /// Count of leaves in this subtree.
    pub fn leaf_count(&self) -> usize {
        match &self.node_data {
            NodeData::Kids(left, right) => left.leaf_count() + right.leaf_count(),
            NodeData::Leaf(_) => 1,
        }
    }
}

/// Load a leaf for every symbol with a non-zero count into a fresh queue. The queue is sized
/// to the number of leaves, which is also the most it ever holds while the tree is built.
pub fn leaf_queue(freqs: &[u64; 256]) -> Result<PriorityQueue> {
    let symbols = freqs.iter().filter(|&&f| f > 0).count();
    let mut pq = PriorityQueue::with_capacity(symbols);
    for (sym, &f) in freqs.iter().enumerate() {
        if f > 0 {
            pq.insert(Node::leaf(sym as u8, f))?;
        }
    }
    Ok(pq)
}

/// Build the Huffman tree from a symbol histogram.
pub fn build_tree(freqs: &[u64; 256]) -> Result<Node> {
    let mut pq = leaf_queue(freqs)?;
    debug!("Building tree from {} distinct symbols", pq.len());
    build_tree_from_queue(&mut pq)
}

/// Merge the two lightest nodes until one remains, and return it as the root.
pub fn build_tree_from_queue(pq: &mut PriorityQueue) -> Result<Node> {
    while pq.len() > 1 {
        let left = pq.extract_min().ok_or(Error::EmptyInput)?;
        let right = pq.extract_min().ok_or(Error::EmptyInput)?;
        trace!(
            "Merging weights {} and {} into {}",
            left.weight,
            right.weight,
            left.weight + right.weight
        );
        pq.insert(Node::parent(left, right))?;
    }
    pq.extract_min().ok_or(Error::EmptyInput)
}
