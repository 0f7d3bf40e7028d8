//! Array backed binary min-heap of tree nodes, ordered by weight.
//!
//! The queue is bounded. Huffman construction never holds more nodes than it started with
//! leaves, so the caller sizes the queue once and an insert past that bound is refused with
//! an error instead of silently losing a subtree.

use super::huffman::Node;
use crate::error::{Error, Result};

#[derive(Debug)]
pub struct PriorityQueue {
    nodes: Vec<Node>,
    capacity: usize,
}

impl PriorityQueue {
    /// Create an empty queue that holds at most `capacity` nodes.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            nodes: Vec::with_capacity(capacity),
            capacity,
        }
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Add a node, sifting it up toward the root while its parent is heavier.
    pub fn insert(&mut self, node: Node) -> Result<()> {
        if self.nodes.len() >= self.capacity {
            return Err(Error::QueueOverflow {
                capacity: self.capacity,
            });
        }
        self.nodes.push(node);
        let mut idx = self.nodes.len() - 1;
        while idx > 0 {
            let dad = (idx - 1) / 2;
            if self.nodes[idx].weight >= self.nodes[dad].weight {
                break;
            }
            self.nodes.swap(idx, dad);
            idx = dad;
        }
        Ok(())
    }

    /// Remove and return the lightest node. The last node takes the root slot and sinks
    /// toward its lighter child until the heap is ordered again.
    pub fn extract_min(&mut self) -> Option<Node> {
        if self.nodes.is_empty() {
            return None;
        }
        let min = self.nodes.swap_remove(0);
        let size = self.nodes.len();
        let mut idx = 0;
        loop {
            let left = 2 * idx + 1;
            let right = 2 * idx + 2;
            let mut lower = idx;
            if left < size && self.nodes[left].weight < self.nodes[lower].weight {
                lower = left;
            }
            if right < size && self.nodes[right].weight < self.nodes[lower].weight {
                lower = right;
            }
            if lower == idx {
                break;
            }
            self.nodes.swap(idx, lower);
            idx = lower;
        }
        Some(min)
    }

    /// Check that no node is lighter than its parent.
    pub fn is_valid(&self) -> bool {
        (1..self.nodes.len()).all(|i| self.nodes[(i - 1) / 2].weight <= self.nodes[i].weight)
    }
}
