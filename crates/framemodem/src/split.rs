use alloc::{borrow::Cow, format, string::String, vec::Vec};

use crate::{
    frame::Frame,
    options::{BlankLineMode, DecoderOptions},
};

/// Splits a finalized batch of text into frames.
///
/// The delimiter strings are derived from the marker once, when the decoder
/// is built.
#[derive(Debug, Clone)]
pub(crate) struct Splitter {
    marker: &'static str,
    /// `"\n" + marker`
    delimiter: String,
    /// `"\n\n" + marker`
    doubled: String,
    blank_lines: BlankLineMode,
    trim_trailing_newlines: bool,
}

impl Splitter {
    pub(crate) fn new(options: &DecoderOptions) -> Self {
        let marker = options.effective_marker();
        Self {
            marker,
            delimiter: format!("\n{marker}"),
            doubled: format!("\n\n{marker}"),
            blank_lines: options.blank_lines,
            trim_trailing_newlines: options.trim_trailing_newlines,
        }
    }

    pub(crate) fn marker(&self) -> &'static str {
        self.marker
    }

    pub(crate) fn starts_frame(&self, text: &str) -> bool {
        text.starts_with(self.marker)
    }

    /// Strip the leading marker, fold blank lines into delimiters, split on
    /// the delimiter and drop empty segments.
    pub(crate) fn split(&self, batch: &str) -> Vec<Frame> {
        let body = batch.strip_prefix(self.marker).unwrap_or(batch);
        let mut frames = Vec::new();

        match self.blank_lines {
            BlankLineMode::CollapseOnce => {
                let body = if body.contains(self.doubled.as_str()) {
                    Cow::Owned(body.replace(self.doubled.as_str(), &self.delimiter))
                } else {
                    Cow::Borrowed(body)
                };
                for segment in body.split(self.delimiter.as_str()) {
                    self.push_segment(&mut frames, segment);
                }
            }
            BlankLineMode::CollapseAll => {
                let mut segments = body.split(self.delimiter.as_str()).peekable();
                while let Some(segment) = segments.next() {
                    let segment = if segments.peek().is_some() {
                        segment.trim_end_matches('\n')
                    } else {
                        segment
                    };
                    self.push_segment(&mut frames, segment);
                }
            }
        }

        frames
    }

    fn push_segment(&self, frames: &mut Vec<Frame>, segment: &str) {
        let segment = if self.trim_trailing_newlines {
            segment.trim_end_matches(['\n', '\r'])
        } else {
            segment
        };
        if !segment.is_empty() {
            frames.push(Frame::new(segment));
        }
    }
}
