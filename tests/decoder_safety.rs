use rand::Rng;
use huffarc::{compress, decompress, ErrorKind, HuffError};

fn invalid(result: Result<(String, Vec<u8>), HuffError>) -> bool {
    matches!(result, Err(e) if e.kind() == ErrorKind::InvalidArchive)
}

#[test]
fn oversized_tree_size_is_rejected() {
    let mut archive = compress(b"some text to compress", "txt").unwrap();
    // ext_len(1) + "txt"(3), then tree_size
    archive[4..6].copy_from_slice(&1000u16.to_le_bytes());
    assert!(invalid(decompress(&archive)));
}

#[test]
fn truncated_archives_are_rejected() {
    let archive = compress(b"abcdefghabcdefgh", "txt").unwrap();
    for cut in 0..archive.len() {
        assert!(invalid(decompress(&archive[..cut])), "cut at {cut}");
    }
}

#[test]
fn truncated_tree_is_rejected() {
    let mut archive = compress(b"hello world", "").unwrap();
    let tree_size = u16::from_le_bytes([archive[1], archive[2]]);
    // claim a shorter tree; the shape now runs out of bits
    archive[1..3].copy_from_slice(&(tree_size / 2).to_le_bytes());
    assert!(decompress(&archive).is_err());
    archive[1..3].copy_from_slice(&0u16.to_le_bytes());
    assert!(invalid(decompress(&archive)));
}

#[test]
fn single_bit_flip_never_panics() {
    let data: Vec<u8> = (0u8..64).chain(0u8..32).collect();
    let archive = compress(&data, "bin").unwrap();
    let total_bits = archive.len() * 8;
    let mut rng = rand::thread_rng();
    for _ in 0..200 {
        let mut buf = archive.clone();
        let bit = rng.gen_range(0..total_bits);
        buf[bit / 8] ^= 1u8 << (7 - (bit % 8));
        // either an error or some output; the decoder must stay in bounds
        let _ = decompress(&buf);
    }
}

#[test]
fn random_garbage_never_panics() {
    let mut rng = rand::thread_rng();
    for _ in 0..200 {
        let len = rng.gen_range(0..64);
        let buf: Vec<u8> = (0..len).map(|_| rng.gen()).collect();
        let _ = decompress(&buf);
    }
}
