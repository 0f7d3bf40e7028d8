//! The compression module drives huffpack in both directions.
//!
//! Compression happens in the following steps:
//! - Frequency count: one pass over the input builds a histogram of the 256 byte values.
//! - Tree build: the histogram feeds a min-heap, which is merged down to a single root.
//! - Code table: a walk of the tree gives every byte its prefix code.
//! - Header: trash bits and tree node count, computed before any body bits are written.
//! - Tree and body: the tree is written in pre-order, then every input byte as its code.
//!
//! Decompression reads the header, rebuilds the tree, and walks it bit by bit through the
//! body, stopping at the last real bit before the trash.
//!

pub mod compress;
pub mod decompress;
pub mod header;
