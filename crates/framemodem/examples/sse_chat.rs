//! Renders a streamed chat reply as it arrives.
//!
//! A chat backend answers a question with an event stream: every event is a
//! `data:` line carrying a JSON delta, terminated by a blank line, and the
//! stream ends with `data:[DONE]`. The HTTP client hands us raw byte chunks
//! of whatever size the network produced, so characters and delimiters are
//! routinely cut in half.
//!
//! The example feeds such chunks to a [`StreamFrameDecoder`] and prints each
//! delta as soon as its frame is finalized.
//!
//! Run with
//!
//! ```bash
//! cargo run -p framemodem --example sse_chat
//! ```

use std::io::Write;

use framemodem::{DecoderOptions, StreamFrameDecoder};

fn main() {
    // In real life this would come from the network.
    let simulated_stream: [&[u8]; 7] = [
        // 0 – first event, complete
        b"data:{\"delta\":\"The campus \"}\n\n",
        // 1 – second event cut inside a multi-byte character
        b"data:{\"delta\":\"library \xe5\x9b",
        // 2 – rest of the character, and a delimiter cut in half
        b"\xbe\xe4\xb9\xa6\xe9\xa6\x86 \"}\n\nda",
        // 3 – rest of the delimiter
        b"ta:{\"delta\":\"opens at 8am.\"}\n\n",
        // 4 – metadata event
        b"data:{\"finish_reason\":\"stop\"}\n\n",
        // 5 – empty keep-alive chunk
        b"",
        // 6 – terminator
        b"data:[DONE]\n\n",
    ];

    let mut decoder = StreamFrameDecoder::new(DecoderOptions {
        trim_trailing_newlines: true,
        ..DecoderOptions::default()
    });

    let mut stdout = std::io::stdout();
    for chunk in simulated_stream {
        for frame in decoder.feed(chunk) {
            render(&mut stdout, &frame);
        }
    }
    for frame in decoder.flush() {
        render(&mut stdout, &frame);
    }
    println!();
}

fn render(out: &mut impl Write, frame: &str) {
    if frame == "[DONE]" {
        return;
    }
    let event: serde_json::Value = match serde_json::from_str(frame) {
        Ok(event) => event,
        Err(err) => {
            eprintln!("\n[skipped malformed frame: {err}]");
            return;
        }
    };
    if let Some(delta) = event.get("delta").and_then(serde_json::Value::as_str) {
        write!(out, "{delta}").expect("stdout is writable");
        out.flush().expect("stdout is writable");
    } else {
        eprintln!("\n[event] {event}");
    }
}
