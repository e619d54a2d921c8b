//! Runtime compatibility, validation and capability resolution for the Opus audio codec.
//!
//! No signal processing lives here. The crate answers the questions a
//! binding layer must settle around a native libopus: which release is
//! actually loaded, which optional capabilities it carries, whether a
//! decoder configuration is valid, how large buffers must be, and how to
//! reshape interleaved PCM.
//!
//! Detection never fails. A version string that cannot be recognized
//! degrades to a conservative profile instead of an error:
//!
//! ```
//! use opus_compat::CompatibilityProfile;
//!
//! let profile = CompatibilityProfile::detect("libopus 1.5.2");
//! assert!(profile.supports_inband_fec());
//! assert!(profile.supports_multistream());
//! assert_eq!(profile.max_recommended_packet_bytes(), 8192);
//! ```
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::cargo)]
#![allow(clippy::cast_possible_wrap)]
#![allow(clippy::cast_possible_truncation)]

pub mod config;
pub mod constants;
pub mod error;
pub mod layout;
pub mod pcm;
pub mod profile;
pub mod tags;
pub mod types;
pub mod version;

pub use config::{DecoderConfig, supports_decoding, supports_encoding};
pub use constants::{
    DEFAULT_MAX_PACKET_BYTES, MAX_FRAME_SAMPLES_48KHZ, MAX_PACKET_DURATION_MS,
    MAX_RECOMMENDED_CHANNELS, MIN_FRAME_SAMPLES, MIN_RECOMMENDED_PACKET_BYTES,
    max_frame_samples_for,
};
pub use error::{Error, Result};
pub use layout::{ChannelLayout, SILENT_CHANNEL};
pub use pcm::{deinterleave, deinterleave_into};
pub use profile::CompatibilityProfile;
pub use tags::{CrateTag, LibopusTag};
pub use types::{PcmFormat, SampleRate};
pub use version::SemanticVersion;

/// This crate's own version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Install a `tracing` fmt subscriber for diagnostics.
///
/// Optional and idempotent: when a subscriber is already installed the
/// existing one stays. The library never installs one on its own.
pub fn init() {
    let _ = tracing_subscriber::fmt::try_init();
    if let (Some(oldest), Some(newest)) = (LibopusTag::ALL.first(), LibopusTag::ALL.last()) {
        tracing::info!(
            "opus-compat v{} with {} catalogued libopus releases ({} through {})",
            VERSION,
            LibopusTag::ALL.len(),
            oldest,
            newest
        );
    }
}
