use std::io::{Read, Write};

use log::{debug, error, info};

use super::header::Header;
use crate::bitstream::bitreader::BitReader;
use crate::error::{Error, Result};
use crate::huffman_coding::huffman::{Node, NodeData};
use crate::huffman_coding::tree_codec::deserialize_tree;
use crate::tools::cli::HuffOpts;

/// Most nodes a tree over 256 byte values can have.
const MAX_TREE_NODES: u16 = 511;

/// Where the decoder is in the tree.
#[derive(Clone, Copy)]
enum State<'a> {
    AtRoot,
    Descending(&'a Node),
}

/// Decompress a container held in memory.
pub fn decompress_bytes(container: &[u8]) -> Result<Vec<u8>> {
    if container.is_empty() {
        info!("Container is empty, nothing to decode.");
        return Ok(Vec::new());
    }
    if container.len() < 2 {
        return Err(Error::CorruptContainer("container is shorter than its header"));
    }

    let header = Header::from_bytes([container[0], container[1]]);
    debug!(
        "Header says {} tree nodes and {} bits of trash",
        header.tree_size, header.trash
    );
    if header.tree_size == 0 || header.tree_size > MAX_TREE_NODES {
        error!("Invalid tree size {}", header.tree_size);
        return Err(Error::CorruptContainer("invalid tree size"));
    }

    // The header counts nodes, not bytes, so the body starts wherever the tree reader stopped.
    let (root, tree_len) = deserialize_tree(&container[2..], header.tree_size as usize)?;
    let body = &container[2 + tree_len..];
    if body.is_empty() {
        return Err(Error::CorruptContainer("container has a tree but no body"));
    }
    let body_bits = body.len() as u64 * 8 - header.trash as u64;

    let mut br = BitReader::with_limit(body, body_bits);
    let out = decode_body(&root, &mut br)?;
    info!(
        "Decompressed {} bytes into {} bytes.",
        container.len(),
        out.len()
    );
    Ok(out)
}

/// Decompress everything `source` yields and write the result to `sink`.
pub fn decompress<R: Read, W: Write>(mut source: R, mut sink: W) -> Result<usize> {
    let mut container = Vec::new();
    source
        .read_to_end(&mut container)
        .map_err(Error::InputUnavailable)?;
    let out = decompress_bytes(&container)?;
    sink.write_all(&out)
        .and_then(|_| sink.flush())
        .map_err(Error::OutputUnavailable)?;
    Ok(out.len())
}

/// Decompress the input named in opts (HuffOpts) to the output named there.
pub fn decompress_with_opts(opts: &HuffOpts) -> Result<usize> {
    let container = opts.read_input()?;
    let out = decompress_bytes(&container)?;
    opts.write_output(&out)?;
    Ok(out.len())
}

/// Decode the container named in opts without writing anything. Returns the decoded length.
pub fn verify_with_opts(opts: &HuffOpts) -> Result<usize> {
    let container = opts.read_input()?;
    let out = decompress_bytes(&container)?;
    info!("Container is intact, {} bytes decoded.", out.len());
    Ok(out.len())
}

/// Walk the tree one body bit at a time: 0 goes left, 1 goes right, and every leaf reached
/// emits its byte and returns the walk to the root. A lone leaf root emits once per bit.
fn decode_body<R: Read>(root: &Node, br: &mut BitReader<R>) -> Result<Vec<u8>> {
    let mut out = Vec::new();
    let mut state = State::AtRoot;

    while let Some(bit) = br.bit()? {
        let from = match state {
            State::AtRoot => root,
            State::Descending(node) => node,
        };
        let next: &Node = match &from.node_data {
            NodeData::Kids(left, right) => {
                if bit == 0 {
                    &**left
                } else {
                    &**right
                }
            }
            NodeData::Leaf(_) => from,
        };
        state = match next.node_data {
            NodeData::Leaf(sym) => {
                out.push(sym);
                State::AtRoot
            }
            NodeData::Kids(..) => State::Descending(next),
        };
    }

    if let State::Descending(_) = state {
        error!(
            "Body ended part way through a code at {} ({:?} bits unread)",
            br.loc(),
            br.remaining()
        );
        return Err(Error::CorruptContainer("body ends inside a code"));
    }
    Ok(out)
}
