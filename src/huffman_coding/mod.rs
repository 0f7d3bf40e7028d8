//! The huffman module builds the prefix codes used by huffpack.
//!
//! Symbols are byte values. Their counts go into a bounded min-heap, the two lightest nodes
//! are merged until a single root remains, and a walk of the finished tree gives each byte
//! its code. The tree itself travels in the container so the decoder never has to rebuild
//! it from counts.
//!
//! Ties between equal weights are settled by the heap, so two encoders may build different
//! but equally good trees. That is fine because the tree is always sent along with the data.
//!

pub mod code_table;
pub mod huffman;
pub mod priority_queue;
pub mod tree_codec;
