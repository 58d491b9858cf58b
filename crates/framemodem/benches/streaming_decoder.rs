//! Benchmark – `framemodem::StreamFrameDecoder`
#![allow(missing_docs)]

use std::time::Duration;

use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use framemodem::{DecoderOptions, StreamFrameDecoder, produce_byte_chunks};

/// Produce a deterministic event stream of `events` frames, each carrying a
/// small JSON delta with some multi-byte text so that byte chunking splits
/// characters.
fn make_event_stream(events: usize) -> Vec<u8> {
    let mut s = String::new();
    for i in 0..events {
        s.push_str("data:{\"index\":");
        s.push_str(&i.to_string());
        s.push_str(",\"delta\":\"naïve 文字 🚀\"}\n\n");
    }
    s.push_str("data:[DONE]\n\n");
    s.into_bytes()
}

/// Feed `payload` in `parts` byte chunks and return the number of frames, so
/// the work cannot be optimised away.
fn run_decoder(payload: &[u8], parts: usize, options: DecoderOptions) -> usize {
    let mut decoder = StreamFrameDecoder::new(options);
    let mut produced = 0usize;
    for chunk in produce_byte_chunks(payload, parts) {
        produced += decoder.feed(chunk).len();
    }
    produced + decoder.flush().len()
}

fn bench_streaming_decoder(c: &mut Criterion) {
    let payload = make_event_stream(1_000);

    let mut group = c.benchmark_group("stream_frame_decoder_split");

    for &parts in &[10usize, 1_000, 10_000] {
        for &trim in &[false, true] {
            let options = DecoderOptions {
                trim_trailing_newlines: trim,
                ..Default::default()
            };
            let name = if trim { "trimmed" } else { "raw" };
            group.bench_with_input(
                BenchmarkId::new(parts.to_string(), name),
                &options,
                |b, &o| {
                    b.iter(|| {
                        let count = run_decoder(black_box(&payload), parts, o);
                        black_box(count);
                    });
                },
            );
        }
    }
    group.finish();
}

fn criterion() -> Criterion {
    let mut c = Criterion::default();
    if cfg!(feature = "bench-fast") {
        c = c
            .warm_up_time(Duration::from_millis(10))
            .measurement_time(Duration::from_millis(100))
            .sample_size(10);
    } else {
        c = c
            .warm_up_time(Duration::from_secs(3))
            .measurement_time(Duration::from_secs(5));
    }
    c
}

criterion_group! { name = benches; config = criterion(); targets = bench_streaming_decoder }
criterion_main!(benches);
