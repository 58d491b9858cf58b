/// The marker that starts every frame in a `data:`-prefixed event stream.
pub const DEFAULT_MARKER: &str = "data:";

/// Configuration options for [`StreamFrameDecoder`](crate::StreamFrameDecoder).
///
/// # Examples
///
/// ```rust
/// use framemodem::{BlankLineMode, DecoderOptions, StreamFrameDecoder};
///
/// let mut decoder = StreamFrameDecoder::new(DecoderOptions {
///     blank_lines: BlankLineMode::CollapseAll,
///     trim_trailing_newlines: true,
///     ..Default::default()
/// });
/// decoder.feed("data:{\"delta\":\"hi\"}\n\n\n");
/// assert_eq!(decoder.flush(), ["{\"delta\":\"hi\"}"]);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DecoderOptions {
    /// Prefix that starts a frame. The delimiter between frames is a line
    /// feed followed by this marker.
    ///
    /// An empty marker is treated as [`DEFAULT_MARKER`].
    ///
    /// # Default
    ///
    /// `"data:"`
    pub marker: &'static str,

    /// How blank lines in front of a delimiter are handled.
    ///
    /// # Default
    ///
    /// [`BlankLineMode::CollapseOnce`]
    pub blank_lines: BlankLineMode,

    /// Whether to strip trailing line feeds and carriage returns from each
    /// emitted frame.
    ///
    /// Frames that become empty after trimming are dropped. Event streams
    /// usually terminate each event with a blank line, which otherwise stays
    /// attached to the last frame of a batch.
    ///
    /// # Default
    ///
    /// `false`
    pub trim_trailing_newlines: bool,
}

impl Default for DecoderOptions {
    fn default() -> Self {
        Self {
            marker: DEFAULT_MARKER,
            blank_lines: BlankLineMode::default(),
            trim_trailing_newlines: false,
        }
    }
}

impl DecoderOptions {
    pub(crate) fn effective_marker(&self) -> &'static str {
        if self.marker.is_empty() {
            DEFAULT_MARKER
        } else {
            self.marker
        }
    }
}

/// Treatment of blank lines that precede a delimiter.
///
/// - `CollapseOnce`: a single blank line (`\n\n<marker>`) is folded into the
///   delimiter. Longer runs leave their extra line feeds at the end of the
///   preceding frame.
/// - `CollapseAll`: every line feed directly in front of a delimiter is
///   removed from the preceding frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum BlankLineMode {
    #[default]
    /// Fold exactly one blank line into the delimiter.
    CollapseOnce,
    /// Fold any number of blank lines into the delimiter.
    CollapseAll,
}
