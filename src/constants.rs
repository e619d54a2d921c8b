//! Crate-wide constants and small helpers

use crate::types::SampleRate;

/// Maximum samples per channel in a single Opus frame at 48 kHz.
///
/// 120 ms at 48 kHz = 0.120 * 48000 = 5760 samples.
pub const MAX_FRAME_SAMPLES_48KHZ: usize = 5760;

/// Minimum samples per channel worth budgeting for: one 2.5 ms frame
/// at 8 kHz.
pub const MIN_FRAME_SAMPLES: usize = 20;

/// Maximum packet duration in milliseconds.
pub const MAX_PACKET_DURATION_MS: usize = 120;

/// Most channels any Opus multistream decoder configuration may carry.
pub const MAX_RECOMMENDED_CHANNELS: u8 = 8;

/// Packet budget assumed when the runtime release is unknown or old.
///
/// One Ethernet MTU of compressed audio is safe on every release.
pub const DEFAULT_MAX_PACKET_BYTES: usize = 1500;

/// Floor below which a recommended packet budget is never clamped.
pub const MIN_RECOMMENDED_PACKET_BYTES: usize = 512;

/// Compute the maximum samples per channel for a frame at the given `sample_rate`.
#[must_use]
pub const fn max_frame_samples_for(sample_rate: SampleRate) -> usize {
    // Scale linearly from the 48 kHz base.
    (MAX_FRAME_SAMPLES_48KHZ * (sample_rate as usize)) / 48_000
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn frame_budgets_scale_with_sample_rate() {
        assert_eq!(max_frame_samples_for(SampleRate::Hz48000), 5760);
        assert_eq!(max_frame_samples_for(SampleRate::Hz16000), 1920);
        assert_eq!(max_frame_samples_for(SampleRate::Hz8000), 960);
    }
}
