/// Everything that can go wrong while encoding or decoding. Failures are
/// detected eagerly and end the call; the codec never retries or returns a
/// partial image.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// Decoder input that is not a well-formed header.
    #[error("malformed header: {0}")]
    MalformedHeader(&'static str),

    /// Encoder was handed a channel count or color space the format has no
    /// encoding for.
    #[error("cannot encode header: channels {channels}, color space {color_space}")]
    InvalidHeaderInput { channels: u8, color_space: u8 },

    /// The pixel stream ended before the image was complete.
    #[error("pixel stream ended before the image was complete")]
    TruncatedStream,

    /// The pixel stream continues past the last pixel of the image.
    #[error("pixel stream continues past the end of the image")]
    TrailingData,

    /// The file does not finish with the fixed 8-byte end marker.
    #[error("file does not end with the qoi end marker")]
    CorruptEndMarker,

    /// An operation was built with an operand outside its legal range.
    /// This is a bug in the caller, not a property of the input image.
    #[error("{op} operand out of range: {value}")]
    InvalidOperandRange { op: &'static str, value: u8 },
}
