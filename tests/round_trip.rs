use huffpack::compression::header::Header;
use huffpack::huffman_coding::code_table::code_table;
use huffpack::huffman_coding::huffman::{build_tree, Node};
use huffpack::huffman_coding::priority_queue::PriorityQueue;
use huffpack::huffman_coding::tree_codec::ESCAPE;
use huffpack::tools::freq_count::freqs;
use huffpack::{compress_bytes, decompress_bytes, Error};
use proptest::prelude::*;

proptest! {
    #[test]
    fn roundtrip(input in prop::collection::vec(any::<u8>(), 0..2000)) {
        let container = compress_bytes(&input).unwrap();
        prop_assert_eq!(decompress_bytes(&container).unwrap(), input);
    }

    #[test]
    fn roundtrip_small_alphabet(input in prop::collection::vec(0..3u8, 1..500)) {
        let container = compress_bytes(&input).unwrap();
        prop_assert_eq!(decompress_bytes(&container).unwrap(), input);
    }

    #[test]
    fn header_packing(trash in 0..8u8, tree_size in 0..8192u16) {
        let header = Header::unpack(Header::new(trash, tree_size).pack());
        prop_assert_eq!(header.trash, trash);
        prop_assert_eq!(header.tree_size, tree_size);
    }

    #[test]
    fn heap_invariant(ops in prop::collection::vec(prop::option::of(0..1000u64), 0..200)) {
        // Some(w) inserts a node of weight w, None extracts the minimum.
        let mut pq = PriorityQueue::with_capacity(256);
        let mut shadow: Vec<u64> = vec![];
        for op in ops {
            match op {
                Some(w) if pq.len() < pq.capacity() => {
                    pq.insert(Node::leaf(0, w)).unwrap();
                    shadow.push(w);
                }
                Some(_) => {}
                None => {
                    let got = pq.extract_min().map(|n| n.weight);
                    shadow.sort_unstable();
                    let expect = if shadow.is_empty() { None } else { Some(shadow.remove(0)) };
                    prop_assert_eq!(got, expect);
                }
            }
            prop_assert!(pq.is_valid());
        }
    }

    #[test]
    fn prefix_free(input in prop::collection::vec(any::<u8>(), 1..1000)) {
        let table = code_table(&build_tree(&freqs(&input)).unwrap()).unwrap();
        let codes: Vec<_> = table.iter().map(|(_, c)| c).collect();
        for (i, a) in codes.iter().enumerate() {
            for (j, b) in codes.iter().enumerate() {
                if i != j {
                    prop_assert!(!a.is_prefix_of(b));
                }
            }
        }
    }
}

#[test]
fn empty_roundtrip() {
    let container = compress_bytes(&[]).unwrap();
    assert!(container.is_empty());
    assert!(decompress_bytes(&container).unwrap().is_empty());
}

#[test]
fn single_byte_roundtrip() {
    let container = compress_bytes(b"x").unwrap();
    assert_eq!(Header::from_bytes([container[0], container[1]]), Header::new(7, 1));
    assert_eq!(decompress_bytes(&container).unwrap(), b"x");
}

#[test]
fn repeated_byte_scenario() {
    let container = compress_bytes(b"AAAA").unwrap();
    let header = Header::from_bytes([container[0], container[1]]);
    assert_eq!(header.tree_size, 1);
    assert_eq!(header.trash, 4);
    assert_eq!(decompress_bytes(&container).unwrap(), b"AAAA");
}

#[test]
fn four_distinct_scenario() {
    let input = [0_u8, 1, 2, 3];
    let table = code_table(&build_tree(&freqs(&input)).unwrap()).unwrap();
    assert!(input.iter().all(|&b| table.get(b).unwrap().length == 2));
    let container = compress_bytes(&input).unwrap();
    assert_eq!(decompress_bytes(&container).unwrap(), input);
}

#[test]
fn all_byte_values_roundtrip() {
    let input: Vec<u8> = (0..=255).collect();
    let container = compress_bytes(&input).unwrap();
    assert_eq!(Header::from_bytes([container[0], container[1]]).tree_size, 511);
    assert_eq!(decompress_bytes(&container).unwrap(), input);
}

#[test]
fn escape_byte_alone_roundtrip() {
    let input = vec![ESCAPE; 9];
    let container = compress_bytes(&input).unwrap();
    assert_eq!(&container[2..5], &[b'1', ESCAPE, ESCAPE]);
    assert_eq!(decompress_bytes(&container).unwrap(), input);
}

#[test]
fn marker_bytes_roundtrip() {
    let input = b"0101\\\\**11\\0*".to_vec();
    let container = compress_bytes(&input).unwrap();
    assert_eq!(decompress_bytes(&container).unwrap(), input);
}

#[test]
fn large_input_roundtrip() {
    // Big enough to take the parallel frequency count.
    let input: Vec<u8> = (0..300_000_u64)
        .map(|i| ((i * i) % 97) as u8 ^ (i % 13) as u8)
        .collect();
    let container = compress_bytes(&input).unwrap();
    assert!(container.len() < input.len());
    assert_eq!(decompress_bytes(&container).unwrap(), input);
}

#[test]
fn truncated_container_is_corrupt() {
    let container = compress_bytes(b"the quick brown fox jumps over the lazy dog").unwrap();
    let mut saw_error = false;
    for cut in 1..container.len() {
        match decompress_bytes(&container[..cut]) {
            Err(Error::CorruptContainer(_)) => saw_error = true,
            Err(e) => panic!("unexpected error {:?}", e),
            Ok(out) => assert_ne!(out, b"the quick brown fox jumps over the lazy dog"),
        }
    }
    assert!(saw_error);
}

#[test]
fn bad_marker_is_corrupt() {
    let mut container = compress_bytes(b"hello").unwrap();
    container[2] = b'7';
    assert!(matches!(
        decompress_bytes(&container),
        Err(Error::CorruptContainer(_))
    ));
}

#[test]
fn stream_api_roundtrip() {
    let input = b"streams in, streams out".to_vec();
    let mut container = vec![];
    let stats = huffpack::compress(input.as_slice(), &mut container).unwrap();
    assert_eq!(stats.output_bytes, container.len());
    let mut restored = vec![];
    huffpack::decompress(container.as_slice(), &mut restored).unwrap();
    assert_eq!(restored, input);
}
