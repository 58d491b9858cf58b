#![no_main]

use arbitrary::Arbitrary;
use framemodem::{BlankLineMode, DecoderOptions, StreamFrameDecoder};
use libfuzzer_sys::fuzz_target;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

#[derive(Debug, Arbitrary)]
struct Input {
    flags: u8,
    split_seed: u64,
    raw: Vec<u8>,
    payloads: Vec<String>,
}

fn options(flags: u8) -> DecoderOptions {
    DecoderOptions {
        blank_lines: if flags & 1 != 0 {
            BlankLineMode::CollapseAll
        } else {
            BlankLineMode::CollapseOnce
        },
        trim_trailing_newlines: flags & 2 != 0,
        ..DecoderOptions::default()
    }
}

/// Cut `bytes` into chunks of random length, ignoring character boundaries.
fn split_chunks(bytes: &[u8], split_seed: u64) -> Vec<&[u8]> {
    let mut rng = SmallRng::seed_from_u64(split_seed);
    let mut chunks = Vec::new();
    let mut start = 0;
    while start < bytes.len() {
        let size = rng.random_range(1..=(bytes.len() - start).min(16));
        chunks.push(&bytes[start..start + size]);
        start += size;
    }
    chunks
}

/// Arbitrary bytes must never panic, and the decoder must end up drained.
fn decode_raw(input: &Input) {
    let mut decoder = StreamFrameDecoder::new(options(input.flags));
    for chunk in split_chunks(&input.raw, input.split_seed) {
        let _ = decoder.feed(chunk);
    }
    let _ = decoder.flush();
    assert!(decoder.flush().is_empty());
    assert!(!decoder.has_pending());
}

/// Well-formed streams must come back payload for payload.
fn decode_events(input: &Input) {
    let payloads: Vec<String> = input
        .payloads
        .iter()
        .map(|p| p.chars().filter(|c| *c != '\n' && *c != '\r' && *c != ':').collect())
        .collect();
    let stream = payloads
        .iter()
        .map(|p| format!("data:{p}"))
        .collect::<Vec<_>>()
        .join("\n");

    let chunks = split_chunks(stream.as_bytes(), input.split_seed.rotate_left(17));
    let frames = StreamFrameDecoder::new(options(input.flags)).decode_all(chunks);

    let decoded: Vec<&str> = frames
        .iter()
        .map(|f| f.trim_end_matches('\n'))
        .filter(|f| !f.is_empty())
        .collect();
    let expected: Vec<&str> = payloads
        .iter()
        .map(String::as_str)
        .filter(|p| !p.is_empty())
        .collect();
    assert_eq!(decoded, expected);
}

fuzz_target!(|input: Input| {
    decode_raw(&input);
    decode_events(&input);
});
