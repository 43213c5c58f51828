use huffarc::{compress, decompress, CodeTable, FrequencyTable, HuffmanTree, Symbol, MAX_TREE_SIZE};

#[test]
fn empty_input_roundtrip() {
    let archive = compress(&[], "").unwrap();
    // header (1 + 0 + 2) + 2 byte tree + 1 payload byte
    assert_eq!(archive.len(), 6);
    let (ext, data) = decompress(&archive).unwrap();
    assert_eq!(ext, "");
    assert!(data.is_empty());
}

#[test]
fn repeated_byte_uses_one_bit_codes() {
    let tree = HuffmanTree::from_frequencies(&FrequencyTable::from_bytes(b"aaaa"));
    assert_eq!(tree.leaf_count(), 2);
    let table = CodeTable::build(&tree);
    assert_eq!(table.get(Symbol::Byte(b'a')).unwrap().len(), 1);
    assert_eq!(table.get(Symbol::Sentinel).unwrap().len(), 1);

    let archive = compress(b"aaaa", "txt").unwrap();
    assert_eq!(decompress(&archive).unwrap(), ("txt".to_string(), b"aaaa".to_vec()));
}

#[test]
fn every_byte_value_once() {
    let input: Vec<u8> = (0..=255u8).collect();
    let tree = HuffmanTree::from_frequencies(&FrequencyTable::from_bytes(&input));
    assert_eq!(tree.leaf_count(), 257);
    assert_eq!(tree.internal_count(), 256);

    let archive = compress(&input, "bin").unwrap();
    let tree_size = u16::from_le_bytes([archive[4], archive[5]]) as usize;
    assert!(tree_size <= MAX_TREE_SIZE);
    assert_eq!(decompress(&archive).unwrap().1, input);
}

#[test]
fn byte_255_and_sentinel_coexist() {
    let mut input = vec![0xFFu8; 300];
    input.extend_from_slice(&[0x00, 0xFE, 0xFF, 0x7F]);
    let archive = compress(&input, "").unwrap();
    assert_eq!(decompress(&archive).unwrap().1, input);
}

#[test]
fn text_compresses() {
    let input = b"It was the best of times, it was the worst of times. ".repeat(40);
    let archive = compress(&input, "txt").unwrap();
    assert!(archive.len() < input.len());
    assert_eq!(decompress(&archive).unwrap().1, input);
}
