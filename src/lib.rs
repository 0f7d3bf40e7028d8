//! Huffman coding compressor.
//!
//! Compresses one byte stream into one self describing container and restores it exactly.
//! The container holds a two byte header (trash bit count and tree node count), the
//! Huffman tree in pre-order, and the coded body packed most significant bit first.
//!
//! Basic usage to compress a file is as follows:
//!
//! `$> huffpack -z test.txt -o test.huff`
//!
//! And to restore it:
//!
//! `$> huffpack -d test.huff -o test.txt`
//!
//! As a library:
//!
//! ```
//! let container = huffpack::compress_bytes(b"abracadabra").unwrap();
//! assert_eq!(huffpack::decompress_bytes(&container).unwrap(), b"abracadabra");
//! ```
//!
pub mod bitstream;
pub mod compression;
pub mod error;
pub mod huffman_coding;
pub mod tools;

pub use compression::compress::{compress, compress_bytes, Stats};
pub use compression::decompress::{decompress, decompress_bytes};
pub use error::{Error, Result};
