#![allow(missing_docs)]

use framemodem::{DecoderOptions, Frame, StreamFrameDecoder, produce_byte_chunks};
use serde::Deserialize;

#[derive(Debug, Deserialize, PartialEq)]
struct Delta {
    delta: String,
}

#[derive(Debug, PartialEq)]
enum TransportError {
    Reset,
}

fn trimmed_decoder() -> StreamFrameDecoder {
    StreamFrameDecoder::new(DecoderOptions {
        trim_trailing_newlines: true,
        ..Default::default()
    })
}

#[test]
fn decodes_json_payloads_from_byte_chunks() {
    let body = "data:{\"delta\":\"你好\"}\n\ndata:{\"delta\":\"，世界\"}\n\ndata:[DONE]\n\n";
    let chunks = produce_byte_chunks(body.as_bytes(), 9)
        .into_iter()
        .map(Ok::<_, TransportError>);

    let mut text = String::new();
    for frame in trimmed_decoder().decode_iter(chunks) {
        let frame = frame.expect("transport is healthy");
        if frame == "[DONE]" {
            break;
        }
        let delta: Delta = serde_json::from_str(&frame).expect("frame is json");
        text.push_str(&delta.delta);
    }
    assert_eq!(text, "你好，世界");
}

#[test]
fn connection_error_flushes_buffered_frames_first() {
    let chunks = vec![
        Ok(b"data:one\n\n".to_vec()),
        Ok(b"data:two\n\ndata:thr".to_vec()),
        Err(TransportError::Reset),
        Ok(b"data:never".to_vec()),
    ];

    let out: Vec<Result<Frame, TransportError>> =
        trimmed_decoder().decode_iter(chunks).collect();
    assert_eq!(
        out,
        vec![
            Ok(Frame::new("one")),
            Ok(Frame::new("two")),
            Ok(Frame::new("thr")),
            Err(TransportError::Reset),
        ]
    );
}

#[test]
fn decode_all_matches_iterator() {
    let body = b"data:a\ndata:b\n\ndata:c";
    let chunks = produce_byte_chunks(body, 4);

    let collected = StreamFrameDecoder::default().decode_all(chunks.iter().copied());
    let iterated: Vec<Frame> = StreamFrameDecoder::default()
        .decode_iter(chunks.into_iter().map(Ok::<_, TransportError>))
        .collect::<Result<_, _>>()
        .unwrap();
    assert_eq!(collected, iterated);
}

#[cfg(feature = "serde")]
#[test]
fn frames_serialize_as_strings() {
    let frames = StreamFrameDecoder::default().decode_all(["data:x\ndata:y"]);
    assert_eq!(serde_json::to_string(&frames).unwrap(), r#"["x","y"]"#);
    let back: Vec<Frame> = serde_json::from_str(r#"["x","y"]"#).unwrap();
    assert_eq!(back, frames);
}
