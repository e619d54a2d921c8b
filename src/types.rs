//! Common types used across compatibility and validation checks

/// Supported input/output sample rates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SampleRate {
    /// 8 kHz.
    Hz8000 = 8000,
    /// 12 kHz.
    Hz12000 = 12000,
    /// 16 kHz.
    Hz16000 = 16000,
    /// 24 kHz.
    Hz24000 = 24000,
    /// 48 kHz.
    #[default]
    Hz48000 = 48000,
}

impl SampleRate {
    /// Classify a raw rate in Hz, returning `None` for rates Opus does
    /// not support.
    #[must_use]
    pub const fn from_hz(hz: i32) -> Option<Self> {
        match hz {
            8000 => Some(Self::Hz8000),
            12000 => Some(Self::Hz12000),
            16000 => Some(Self::Hz16000),
            24000 => Some(Self::Hz24000),
            48000 => Some(Self::Hz48000),
            _ => None,
        }
    }

    /// As `i32`.
    #[must_use]
    pub const fn as_i32(self) -> i32 {
        self as i32
    }

    /// Return true if the sample rate is valid for Opus.
    #[must_use]
    pub const fn is_valid(self) -> bool {
        matches!(
            self,
            Self::Hz8000 | Self::Hz12000 | Self::Hz16000 | Self::Hz24000 | Self::Hz48000
        )
    }
}

/// In-memory PCM sample encoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PcmFormat {
    /// Signed 16-bit integer samples.
    Int16,
    /// 32-bit float samples in the -1.0..=1.0 range.
    #[default]
    Float32,
}

impl PcmFormat {
    /// Width of a single sample in bytes.
    #[must_use]
    pub const fn bytes_per_sample(self) -> usize {
        match self {
            Self::Int16 => 2,
            Self::Float32 => 4,
        }
    }
}
