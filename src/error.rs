//! Error types for Opus compatibility and validation checks

use thiserror::Error as ThisError;

/// Native Opus status codes, kept for interop with FFI bindings.
pub mod codes {
    /// No error.
    pub const OK: i32 = 0;
    /// One or more invalid or out-of-range arguments.
    pub const BAD_ARG: i32 = -1;
    /// Not enough bytes allocated in the buffer.
    pub const BUFFER_TOO_SMALL: i32 = -2;
    /// An internal error was detected.
    pub const INTERNAL_ERROR: i32 = -3;
    /// The compressed data passed is corrupted.
    pub const INVALID_PACKET: i32 = -4;
    /// Invalid or unsupported request number.
    pub const UNIMPLEMENTED: i32 = -5;
    /// An encoder or decoder structure is invalid or already freed.
    pub const INVALID_STATE: i32 = -6;
    /// Memory allocation has failed.
    pub const ALLOC_FAIL: i32 = -7;
}

/// Convenient result alias for this crate.
pub type Result<T> = std::result::Result<T, Error>;

/// Opus error variants.
///
/// The first eight mirror the native status codes one-to-one; the rest
/// are richer validation failures raised by this crate before any data
/// would reach a codec.
#[derive(Debug, Clone, PartialEq, Eq, ThisError)]
pub enum Error {
    /// Bad argument passed to a function.
    #[error("Bad arguments passed to Opus function")]
    BadArg,
    /// Provided buffer was too small.
    #[error("Buffer too small")]
    BufferTooSmall,
    /// Internal libopus error.
    #[error("Internal Opus error")]
    InternalError,
    /// Packet is invalid or unsupported.
    #[error("Invalid packet")]
    InvalidPacket,
    /// Feature not implemented.
    #[error("Unimplemented feature")]
    Unimplemented,
    /// Invalid state.
    #[error("Invalid state")]
    InvalidState,
    /// Memory allocation failure.
    #[error("Memory allocation failed")]
    AllocFail,
    /// Unknown error code.
    #[error("Unknown Opus error code: {0}")]
    Unknown(i32),
    /// Sample rate is not one Opus supports.
    #[error("Unsupported sample rate: {0} Hz")]
    UnsupportedSampleRate(i32),
    /// Channel count outside the decodable range.
    #[error("Unsupported channel count: {0}")]
    UnsupportedChannelCount(usize),
    /// Frame budget outside the 2.5 ms..120 ms range at 48 kHz.
    #[error("Invalid frame size: {0} samples per channel")]
    InvalidFrameSize(usize),
    /// Packet payload exceeds what the native API can address.
    #[error("Packet payload too large: {0} bytes")]
    PayloadTooLarge(usize),
    /// Caller-provided output buffer cannot hold the decoded audio.
    #[error("Output buffer too small: needed {needed} samples, got {actual}")]
    OutputBufferTooSmall {
        /// Samples the buffer must hold.
        needed: usize,
        /// Samples the buffer actually holds.
        actual: usize,
    },
    /// Channel layout failed structural validation.
    #[error(
        "Invalid channel layout: {channels} channels, {streams} streams \
         ({coupled_streams} coupled), mapping of length {mapping_len}"
    )]
    InvalidLayout {
        /// Output channels the layout claims to cover.
        channels: u8,
        /// Total decoded streams.
        streams: u8,
        /// Streams that carry a stereo pair.
        coupled_streams: u8,
        /// Length of the channel mapping table.
        mapping_len: usize,
    },
}

impl Error {
    /// Map a libopus error code to [`Error`].
    #[must_use]
    pub fn from_code(code: i32) -> Self {
        match code {
            codes::BAD_ARG => Self::BadArg,
            codes::BUFFER_TOO_SMALL => Self::BufferTooSmall,
            codes::INTERNAL_ERROR => Self::InternalError,
            codes::INVALID_PACKET => Self::InvalidPacket,
            codes::UNIMPLEMENTED => Self::Unimplemented,
            codes::INVALID_STATE => Self::InvalidState,
            codes::ALLOC_FAIL => Self::AllocFail,
            _ => Self::Unknown(code),
        }
    }

    /// Convert [`Error`] back to the nearest libopus code.
    ///
    /// Validation variants collapse onto the native code a real libopus
    /// call would have produced for the same mistake.
    #[must_use]
    pub const fn to_code(&self) -> i32 {
        match self {
            Self::BadArg
            | Self::UnsupportedSampleRate(_)
            | Self::UnsupportedChannelCount(_)
            | Self::InvalidFrameSize(_)
            | Self::PayloadTooLarge(_)
            | Self::InvalidLayout { .. } => codes::BAD_ARG,
            Self::BufferTooSmall | Self::OutputBufferTooSmall { .. } => codes::BUFFER_TOO_SMALL,
            Self::InternalError => codes::INTERNAL_ERROR,
            Self::InvalidPacket => codes::INVALID_PACKET,
            Self::Unimplemented => codes::UNIMPLEMENTED,
            Self::InvalidState => codes::INVALID_STATE,
            Self::AllocFail => codes::ALLOC_FAIL,
            Self::Unknown(code) => *code,
        }
    }
}
