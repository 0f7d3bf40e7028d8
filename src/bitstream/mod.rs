//! The bitstream module forms the I/O subsystem for huffpack.
//!
//! The container starts byte aligned (header and serialized tree) and ends with a body of
//! Huffman codes packed most significant bit first. The writer collects those codes into
//! bytes and reports how many padding bits the final byte needed. The reader walks the body
//! back out bit by bit and stops at the last real bit so the padding is never decoded.
//!
pub mod bitreader;
pub mod bitwriter;
