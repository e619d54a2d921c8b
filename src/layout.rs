//! Multistream channel layouts and their structural validation

use crate::error::{Error, Result};

/// Mapping-table entry for a channel that carries silence instead of a
/// coded stream.
pub const SILENT_CHANNEL: u8 = 255;

/// Describes how decoded streams fan out to output channels.
///
/// A layout carries `streams` total streams, of which `coupled_streams`
/// are stereo pairs, so `streams + coupled_streams` coded channels feed
/// the mapping table. Entry `i` names the coded channel driving output
/// channel `i`, or [`SILENT_CHANNEL`] for silence. Layouts built with
/// [`ChannelLayout::new`] are structurally valid by construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChannelLayout {
    channels: u8,
    streams: u8,
    coupled_streams: u8,
    mapping: Vec<u8>,
}

impl ChannelLayout {
    /// Build and validate a custom layout.
    ///
    /// # Errors
    /// Returns [`Error::UnsupportedChannelCount`] when `channels` is zero,
    /// and [`Error::InvalidLayout`] when the stream counts or the mapping
    /// table are structurally inconsistent.
    pub fn new(channels: u8, streams: u8, coupled_streams: u8, mapping: Vec<u8>) -> Result<Self> {
        let layout = Self {
            channels,
            streams,
            coupled_streams,
            mapping,
        };
        layout.validate()?;
        Ok(layout)
    }

    /// Single mono stream.
    #[must_use]
    pub fn mono() -> Self {
        Self {
            channels: 1,
            streams: 1,
            coupled_streams: 0,
            mapping: vec![0],
        }
    }

    /// One coupled stereo stream.
    #[must_use]
    pub fn stereo() -> Self {
        Self {
            channels: 2,
            streams: 1,
            coupled_streams: 1,
            mapping: vec![0, 1],
        }
    }

    /// The Vorbis-order surround layout for the given channel count.
    ///
    /// 5.1 and 7.1 get their standard coupled layouts; mono and stereo
    /// their plain ones. Every other count falls back to
    /// [`ChannelLayout::discrete`].
    #[must_use]
    pub fn standard_surround(channels: u8) -> Self {
        match channels {
            1 => Self::mono(),
            2 => Self::stereo(),
            // Front L/R and side L/R coupled, center and LFE mono
            6 => Self {
                channels: 6,
                streams: 4,
                coupled_streams: 2,
                mapping: vec![0, 4, 1, 2, 3, 5],
            },
            8 => Self {
                channels: 8,
                streams: 5,
                coupled_streams: 3,
                mapping: vec![0, 6, 1, 2, 3, 4, 5, 7],
            },
            n => Self::discrete(n),
        }
    }

    /// One uncoupled mono stream per channel with an identity mapping.
    ///
    /// A zero channel count is clamped to one.
    #[must_use]
    pub fn discrete(channels: u8) -> Self {
        let channels = channels.max(1);
        Self {
            channels,
            streams: channels,
            coupled_streams: 0,
            mapping: (0..channels).collect(),
        }
    }

    /// Total output channels.
    #[must_use]
    pub const fn channels(&self) -> u8 {
        self.channels
    }

    /// Total decoded streams.
    #[must_use]
    pub const fn streams(&self) -> u8 {
        self.streams
    }

    /// Streams carrying a coupled stereo pair.
    #[must_use]
    pub const fn coupled_streams(&self) -> u8 {
        self.coupled_streams
    }

    /// The channel mapping table, one entry per output channel.
    #[must_use]
    pub fn mapping(&self) -> &[u8] {
        &self.mapping
    }

    /// Coded channels produced by the streams before mapping.
    #[must_use]
    pub const fn coded_channels(&self) -> usize {
        self.streams as usize + self.coupled_streams as usize
    }

    fn validate(&self) -> Result<()> {
        let channel_count = usize::from(self.channels);
        if channel_count == 0 {
            return Err(Error::UnsupportedChannelCount(0));
        }
        let invalid = Error::InvalidLayout {
            channels: self.channels,
            streams: self.streams,
            coupled_streams: self.coupled_streams,
            mapping_len: self.mapping.len(),
        };
        if self.streams == 0 || self.coupled_streams > self.streams {
            return Err(invalid);
        }
        if self.mapping.len() != channel_count {
            return Err(invalid);
        }

        // Each coded channel may feed at most one output channel.
        let slots = self.coded_channels();
        let mut used = vec![false; slots];
        for &entry in &self.mapping {
            if entry == SILENT_CHANNEL {
                continue;
            }
            let slot = usize::from(entry);
            if slot >= slots || used[slot] {
                return Err(invalid);
            }
            used[slot] = true;
        }
        Ok(())
    }
}
