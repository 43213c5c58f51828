use std::fs;
use huffarc::{compress_file, extract_file, Config, ErrorKind};
use tempfile::tempdir;

#[test]
fn oversized_tree_leaves_no_output() {
    let dir = tempdir().unwrap();
    let archive = dir.path().join("evil.huf");
    let mut bytes = vec![3, b't', b'x', b't'];
    bytes.extend_from_slice(&1000u16.to_le_bytes());
    bytes.extend(std::iter::repeat(0u8).take(1000));
    fs::write(&archive, &bytes).unwrap();

    let err = extract_file(&archive, None, &Config::default()).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidArchive);
    assert!(!dir.path().join("evil.txt").exists());
    assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 1);
}

#[test]
fn existing_extraction_target_is_untouched() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("keep.txt");
    fs::write(&input, b"original contents").unwrap();
    let archive = dir.path().join("keep.txt.huf");
    compress_file(&input, &archive).unwrap();

    fs::write(&input, b"edited since").unwrap();
    let err = extract_file(&archive, None, &Config::default()).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::AlreadyExists);
    assert_eq!(fs::read(&input).unwrap(), b"edited since");
}

#[test]
fn existing_archive_is_not_overwritten() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("a.txt");
    let archive = dir.path().join("a.txt.huf");
    fs::write(&input, b"aaa").unwrap();
    fs::write(&archive, b"placeholder").unwrap();
    let err = compress_file(&input, &archive).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::AlreadyExists);
    assert_eq!(fs::read(&archive).unwrap(), b"placeholder");
}

#[test]
fn missing_archive_is_not_found() {
    let dir = tempdir().unwrap();
    let err = extract_file(&dir.path().join("gone.huf"), None, &Config::default()).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::NotFound);
}

#[test]
fn corrupt_payload_leaves_no_output() {
    let dir = tempdir().unwrap();
    let archive = dir.path().join("cut.huf");
    let full = huffarc::compress(b"abcabcabcabc", "log").unwrap();
    fs::write(&archive, &full[..full.len() - 1]).unwrap();
    let err = extract_file(&archive, None, &Config::default()).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidArchive);
    assert!(!dir.path().join("cut.log").exists());
    assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 1);
}
