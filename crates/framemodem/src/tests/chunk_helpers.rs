use alloc::vec;

use crate::{produce_byte_chunks, produce_chunks};

#[test]
fn produce_helpers_example() {
    let payload = "data:foo\ndata:bar";
    let chunks = produce_chunks(payload, 4);
    assert_eq!(chunks, vec!["data:", "foo\nd", "ata:b", "ar"]);
    assert_eq!(chunks.concat(), payload);
}

#[test]
fn produce_chunks_keeps_code_points() {
    let payload = "data:f😊o\ndata:b🚀r";
    let chunks = produce_chunks(payload, 7);
    let mut idx = 0;
    for chunk in &chunks {
        idx += chunk.len();
        assert!(payload.is_char_boundary(idx));
    }
    assert_eq!(chunks.concat(), payload);
}

#[test]
fn produce_byte_chunks_splits_code_points() {
    let payload = "中文".as_bytes();
    let chunks = produce_byte_chunks(payload, 3);
    assert_eq!(chunks, vec![&payload[..2], &payload[2..4], &payload[4..]]);
    assert!(core::str::from_utf8(chunks[0]).is_err());
}

#[test]
fn produce_byte_chunks_of_empty_payload() {
    assert!(produce_byte_chunks(b"", 3).is_empty());
}
