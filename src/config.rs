//! Decoder configuration validation and buffer budgeting

use tracing::debug;

use crate::constants::{MAX_FRAME_SAMPLES_48KHZ, MAX_RECOMMENDED_CHANNELS, MIN_FRAME_SAMPLES};
use crate::error::{Error, Result};
use crate::layout::ChannelLayout;
use crate::types::{PcmFormat, SampleRate};

/// A validated decoder configuration.
///
/// Checks everything a native decoder constructor would reject, so a
/// config that exists is one the codec will accept. Built with
/// [`DecoderConfig::new`] and refined through the consuming `with_*`
/// builders.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecoderConfig {
    sample_rate: SampleRate,
    channels: u8,
    pcm_format: PcmFormat,
    max_samples_per_channel: usize,
    layout: Option<ChannelLayout>,
}

impl DecoderConfig {
    /// Create a configuration for `channels` output channels.
    ///
    /// Defaults to float PCM and a frame budget of one maximal 120 ms
    /// frame per channel, with no explicit channel layout.
    ///
    /// # Errors
    /// Returns [`Error::UnsupportedChannelCount`] unless `channels` is in
    /// `1..=8`.
    pub fn new(sample_rate: SampleRate, channels: u8) -> Result<Self> {
        if !(1..=MAX_RECOMMENDED_CHANNELS).contains(&channels) {
            return Err(Error::UnsupportedChannelCount(usize::from(channels)));
        }
        debug!(
            "Decoder config: {} Hz, {} channels",
            sample_rate.as_i32(),
            channels
        );
        Ok(Self {
            sample_rate,
            channels,
            pcm_format: PcmFormat::default(),
            max_samples_per_channel: MAX_FRAME_SAMPLES_48KHZ,
            layout: None,
        })
    }

    /// Select the in-memory PCM sample encoding.
    #[must_use]
    pub fn with_pcm_format(mut self, pcm_format: PcmFormat) -> Self {
        self.pcm_format = pcm_format;
        self
    }

    /// Cap the frame budget in samples per channel.
    ///
    /// # Errors
    /// Returns [`Error::InvalidFrameSize`] when `samples` falls outside
    /// `20..=5760`, the 2.5 ms..120 ms range at 48 kHz.
    pub fn with_max_samples_per_channel(mut self, samples: usize) -> Result<Self> {
        if !(MIN_FRAME_SAMPLES..=MAX_FRAME_SAMPLES_48KHZ).contains(&samples) {
            return Err(Error::InvalidFrameSize(samples));
        }
        self.max_samples_per_channel = samples;
        Ok(self)
    }

    /// Attach an explicit multistream channel layout.
    ///
    /// # Errors
    /// Returns [`Error::InvalidLayout`] when the layout covers a channel
    /// count other than this configuration's.
    pub fn with_layout(mut self, layout: ChannelLayout) -> Result<Self> {
        if layout.channels() != self.channels {
            return Err(Error::InvalidLayout {
                channels: self.channels,
                streams: layout.streams(),
                coupled_streams: layout.coupled_streams(),
                mapping_len: layout.mapping().len(),
            });
        }
        self.layout = Some(layout);
        Ok(self)
    }

    /// Configured sample rate.
    #[must_use]
    pub const fn sample_rate(&self) -> SampleRate {
        self.sample_rate
    }

    /// Configured output channel count.
    #[must_use]
    pub const fn channels(&self) -> u8 {
        self.channels
    }

    /// Configured PCM sample encoding.
    #[must_use]
    pub const fn pcm_format(&self) -> PcmFormat {
        self.pcm_format
    }

    /// Frame budget in samples per channel.
    #[must_use]
    pub const fn max_samples_per_channel(&self) -> usize {
        self.max_samples_per_channel
    }

    /// The explicit channel layout, when one was attached.
    #[must_use]
    pub const fn layout(&self) -> Option<&ChannelLayout> {
        self.layout.as_ref()
    }

    /// Whether decoding needs the multistream API.
    ///
    /// True when more than two channels are in play; mono and stereo use
    /// the plain decoder even with an explicit layout attached.
    #[must_use]
    pub fn uses_multistream(&self) -> bool {
        match &self.layout {
            Some(layout) => layout.channels() > 2,
            None => self.channels > 2,
        }
    }

    /// Interleaved samples an output buffer must hold for one maximal
    /// frame under this configuration.
    #[must_use]
    pub const fn required_output_capacity(&self) -> usize {
        self.max_samples_per_channel * self.channels as usize
    }

    /// Check that an output buffer of `available_samples` interleaved
    /// samples can hold a maximal frame.
    ///
    /// # Errors
    /// Returns [`Error::OutputBufferTooSmall`] with the exact shortfall.
    pub fn validate_output_capacity(&self, available_samples: usize) -> Result<()> {
        let needed = self.required_output_capacity();
        if available_samples < needed {
            return Err(Error::OutputBufferTooSmall {
                needed,
                actual: available_samples,
            });
        }
        Ok(())
    }

    /// Check that a compressed payload is addressable by the native API.
    ///
    /// Zero-length payloads are valid; they drive packet loss
    /// concealment.
    ///
    /// # Errors
    /// Returns [`Error::PayloadTooLarge`] when `payload_len` exceeds
    /// `i32::MAX`.
    pub fn validate_payload_size(&self, payload_len: usize) -> Result<()> {
        if payload_len > i32::MAX as usize {
            return Err(Error::PayloadTooLarge(payload_len));
        }
        Ok(())
    }

    /// The layout a decoder should assume for `channels` when none is
    /// given explicitly.
    ///
    /// Mono and stereo need no layout and yield `None`; anything above
    /// two channels gets the standard surround layout.
    #[must_use]
    pub fn default_layout(channels: u8) -> Option<ChannelLayout> {
        if channels > 2 {
            Some(ChannelLayout::standard_surround(channels))
        } else {
            None
        }
    }
}

/// Whether Opus can decode `channels` channels at `sample_rate_hz`.
#[must_use]
pub fn supports_decoding(sample_rate_hz: i32, channels: u8) -> bool {
    SampleRate::from_hz(sample_rate_hz).is_some()
        && (1..=MAX_RECOMMENDED_CHANNELS).contains(&channels)
}

/// Whether Opus can encode `channels` channels at `sample_rate_hz`.
///
/// Plain encoding is mono or stereo only; surround input needs the
/// multistream encoder.
#[must_use]
pub fn supports_encoding(sample_rate_hz: i32, channels: u8) -> bool {
    SampleRate::from_hz(sample_rate_hz).is_some() && (1..=2).contains(&channels)
}
