use std::io::{Read, Write};

use log::{debug, info, trace};

use super::header::Header;
use crate::bitstream::bitwriter::BitWriter;
use crate::error::{Error, Result};
use crate::huffman_coding::code_table::{code_table, CodeTable};
use crate::huffman_coding::huffman::build_tree;
use crate::huffman_coding::tree_codec::serialize_tree;
use crate::tools::cli::HuffOpts;
use crate::tools::freq_count::freqs;

/// Numbers reported after a successful compression.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Stats {
    pub input_bytes: usize,
    pub output_bytes: usize,
    /// Distinct byte values in the input.
    pub symbols: usize,
    /// Body bits before padding.
    pub encoded_bits: u64,
}

/*
    The whole input is held in memory. The histogram needs one pass and encoding a second,
    and building the container in memory means nothing reaches the sink unless every step
    succeeded.

    Container layout:
        2 bytes   header, (trash << 13) | tree_size, big-endian
        n bytes   pre-order tree with '0'/'1' markers
        m bytes   Huffman coded body, MSB first, last byte padded with `trash` zero bits
*/

/// Compress a byte slice into a new container.
pub fn compress_bytes(data: &[u8]) -> Result<Vec<u8>> {
    encode(data).map(|(container, _)| container)
}

/// Compress everything `source` yields and write the container to `sink`.
pub fn compress<R: Read, W: Write>(mut source: R, mut sink: W) -> Result<Stats> {
    let mut data = Vec::new();
    source
        .read_to_end(&mut data)
        .map_err(Error::InputUnavailable)?;
    let (container, stats) = encode(&data)?;
    sink.write_all(&container)
        .and_then(|_| sink.flush())
        .map_err(Error::OutputUnavailable)?;
    Ok(stats)
}

/// Compress the input named in opts (HuffOpts) to the output named there.
pub fn compress_with_opts(opts: &HuffOpts) -> Result<Stats> {
    let data = opts.read_input()?;
    let (container, stats) = encode(&data)?;
    opts.write_output(&container)?;
    Ok(stats)
}

fn encode(data: &[u8]) -> Result<(Vec<u8>, Stats)> {
    // Nothing to code. The container is empty too.
    if data.is_empty() {
        info!("Input is empty, writing an empty container.");
        return Ok((Vec::new(), Stats::default()));
    }

    let freqs = freqs(data);
    let root = build_tree(&freqs)?;
    let table = code_table(&root)?;

    // The body length comes from the code table and the histogram, so the header can be
    // written before any body bits.
    let encoded_bits = table.encoded_bits(&freqs);
    let header = Header::new(Header::trash_for(encoded_bits), root.node_count() as u16);
    debug!(
        "Tree has {} nodes, body is {} bits with {} bits of trash",
        header.tree_size, encoded_bits, header.trash
    );

    let mut tree = Vec::with_capacity(header.tree_size as usize * 2);
    serialize_tree(&root, &mut tree);
    let symbols = root.leaf_count();
    drop(root);

    let mut bw = BitWriter::new(2 + tree.len() + (encoded_bits / 8) as usize + 1);
    bw.out16(header.pack());
    tree.iter().for_each(|&b| bw.out8(b));
    trace!("Body starts at {}", bw.loc());

    encode_body(data, &table, &mut bw)?;
    let padding = bw.flush();
    debug_assert_eq!(padding, header.trash);

    let stats = Stats {
        input_bytes: data.len(),
        output_bytes: bw.output.len(),
        symbols,
        encoded_bits,
    };
    info!(
        "Compressed {} bytes ({} symbols) into {} bytes.",
        stats.input_bytes, stats.symbols, stats.output_bytes
    );
    Ok((bw.output, stats))
}

/// Put the code of every input byte on the stream. Every byte must have a code.
fn encode_body(data: &[u8], table: &CodeTable, bw: &mut BitWriter) -> Result<()> {
    for &b in data {
        let entry = table.get(b).ok_or(Error::MissingCode(b))?;
        bw.push_code(entry.code, entry.length);
    }
    Ok(())
}
