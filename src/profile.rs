//! Runtime capability detection against the libopus release catalog

use std::env;

use tracing::debug;

use crate::constants::{DEFAULT_MAX_PACKET_BYTES, MIN_RECOMMENDED_PACKET_BYTES};
use crate::tags::{CrateTag, LibopusTag};
use crate::version::SemanticVersion;

/// Capabilities and budgets derived from a runtime-reported version.
///
/// Built by [`CompatibilityProfile::detect`] from the string a loaded
/// libopus reports, e.g. via `opus_get_version_string()`. Detection never
/// fails: a string that cannot be recognized yields a profile with no
/// optional capabilities and the conservative packet budget, never an
/// error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompatibilityProfile {
    runtime_version_string: String,
    runtime_version: Option<SemanticVersion>,
    resolved_runtime_tag: Option<LibopusTag>,
    resolved_crate_tag: Option<CrateTag>,
    supports_inband_fec: bool,
    supports_multistream: bool,
    max_recommended_packet_bytes: usize,
}

impl CompatibilityProfile {
    /// Oldest release whose in-band forward error correction is usable.
    pub const MIN_TAG_FOR_FEC: LibopusTag = LibopusTag::V1_1;

    /// Oldest release carrying the stable multistream surround API.
    pub const MIN_TAG_FOR_MULTISTREAM: LibopusTag = LibopusTag::V1_0_0;

    /// Environment variable read by [`CompatibilityProfile::from_env`].
    pub const RUNTIME_VERSION_ENV: &'static str = "OPUS_RUNTIME_VERSION";

    /// Derive the profile for a runtime version string.
    ///
    /// The string is parsed tolerantly, resolved onto the newest catalog
    /// tag not exceeding it, and gated against the capability thresholds
    /// above. Equal inputs always yield equal profiles.
    #[must_use]
    pub fn detect(runtime_version_string: &str) -> Self {
        Self::detect_with_crate_version(env!("CARGO_PKG_VERSION"), runtime_version_string)
    }

    /// [`CompatibilityProfile::detect`] with an explicit crate version in
    /// place of this crate's own.
    #[must_use]
    pub fn detect_with_crate_version(crate_version: &str, runtime_version_string: &str) -> Self {
        let runtime_version = SemanticVersion::parse(runtime_version_string);
        let resolved_runtime_tag = LibopusTag::resolve_nearest(runtime_version);
        let resolved_crate_tag = CrateTag::resolve_nearest(SemanticVersion::parse(crate_version));

        let supports_inband_fec =
            resolved_runtime_tag.is_some_and(|tag| tag >= Self::MIN_TAG_FOR_FEC);
        let supports_multistream =
            resolved_runtime_tag.is_some_and(|tag| tag >= Self::MIN_TAG_FOR_MULTISTREAM);
        let max_recommended_packet_bytes =
            recommended_packet_limit(resolved_runtime_tag).max(MIN_RECOMMENDED_PACKET_BYTES);

        debug!(
            "Resolved {:?} to {:?} (crate {:?}): FEC={}, multistream={}, budget {} bytes",
            runtime_version_string,
            resolved_runtime_tag,
            resolved_crate_tag,
            supports_inband_fec,
            supports_multistream,
            max_recommended_packet_bytes
        );

        Self {
            runtime_version_string: runtime_version_string.to_owned(),
            runtime_version,
            resolved_runtime_tag,
            resolved_crate_tag,
            supports_inband_fec,
            supports_multistream,
            max_recommended_packet_bytes,
        }
    }

    /// Detect from the [`CompatibilityProfile::RUNTIME_VERSION_ENV`]
    /// environment variable.
    ///
    /// An unset or unreadable variable behaves exactly like an empty
    /// version string.
    #[must_use]
    pub fn from_env() -> Self {
        let raw = env::var(Self::RUNTIME_VERSION_ENV).unwrap_or_default();
        Self::detect(&raw)
    }

    /// The version string detection ran on.
    #[must_use]
    pub fn runtime_version_string(&self) -> &str {
        &self.runtime_version_string
    }

    /// Parsed runtime version, when the string was recognizable.
    #[must_use]
    pub const fn runtime_version(&self) -> Option<SemanticVersion> {
        self.runtime_version
    }

    /// Newest catalog tag at or below the runtime version.
    #[must_use]
    pub const fn resolved_runtime_tag(&self) -> Option<LibopusTag> {
        self.resolved_runtime_tag
    }

    /// Newest crate release tag at or below the linked crate version.
    #[must_use]
    pub const fn resolved_crate_tag(&self) -> Option<CrateTag> {
        self.resolved_crate_tag
    }

    /// Whether in-band forward error correction is worth requesting.
    #[must_use]
    pub const fn supports_inband_fec(&self) -> bool {
        self.supports_inband_fec
    }

    /// Whether the multistream surround API is available.
    #[must_use]
    pub const fn supports_multistream(&self) -> bool {
        self.supports_multistream
    }

    /// Largest compressed packet worth submitting to this runtime.
    ///
    /// Never below [`MIN_RECOMMENDED_PACKET_BYTES`].
    #[must_use]
    pub const fn max_recommended_packet_bytes(&self) -> usize {
        self.max_recommended_packet_bytes
    }

    /// Whether this runtime can decode a surround layout with
    /// `channel_count` output channels.
    #[must_use]
    pub const fn supports_surround_decoding(&self, channel_count: u8) -> bool {
        self.supports_multistream && channel_count > 2
    }
}

/// Packet budget for a resolved release tag.
///
/// Releases before v1.1 keep the single-MTU default; v1.1 raised the
/// practical ceiling to 4 KiB and v1.5 to 8 KiB.
fn recommended_packet_limit(tag: Option<LibopusTag>) -> usize {
    let Some(tag) = tag else {
        return DEFAULT_MAX_PACKET_BYTES;
    };
    if tag >= LibopusTag::V1_5 {
        8192
    } else if tag >= LibopusTag::V1_1 {
        4096
    } else {
        DEFAULT_MAX_PACKET_BYTES
    }
}
