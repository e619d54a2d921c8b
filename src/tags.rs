//! Closed catalogs of known libopus and crate release tags

use std::cmp::Ordering;
use std::fmt;

use crate::version::SemanticVersion;

/// An official libopus release tag known to this crate.
///
/// The catalog is closed and ordered by release version; versions newer
/// than the last entry resolve onto it via [`LibopusTag::resolve_nearest`]
/// rather than extending the catalog.
#[allow(missing_docs)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LibopusTag {
    V0_9_4,
    V0_9_5,
    V0_9_6,
    V0_9_7,
    V0_9_8,
    V0_9_9,
    V0_9_10,
    V0_9_11,
    V0_9_14,
    V1_0_0,
    V1_0_1,
    V1_0_2,
    V1_0_3,
    V1_1,
    V1_1_1,
    V1_1_2,
    V1_1_3,
    V1_1_4,
    V1_1_5,
    V1_2,
    V1_2_1,
    V1_3,
    V1_3_1,
    V1_4,
    V1_5,
    V1_5_1,
    V1_5_2,
    V1_6,
    V1_6_1,
}

impl LibopusTag {
    /// Every known tag, oldest first.
    pub const ALL: &'static [Self] = &[
        Self::V0_9_4,
        Self::V0_9_5,
        Self::V0_9_6,
        Self::V0_9_7,
        Self::V0_9_8,
        Self::V0_9_9,
        Self::V0_9_10,
        Self::V0_9_11,
        Self::V0_9_14,
        Self::V1_0_0,
        Self::V1_0_1,
        Self::V1_0_2,
        Self::V1_0_3,
        Self::V1_1,
        Self::V1_1_1,
        Self::V1_1_2,
        Self::V1_1_3,
        Self::V1_1_4,
        Self::V1_1_5,
        Self::V1_2,
        Self::V1_2_1,
        Self::V1_3,
        Self::V1_3_1,
        Self::V1_4,
        Self::V1_5,
        Self::V1_5_1,
        Self::V1_5_2,
        Self::V1_6,
        Self::V1_6_1,
    ];

    /// The upstream tag name, e.g. `"v1.5.2"`.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::V0_9_4 => "v0.9.4",
            Self::V0_9_5 => "v0.9.5",
            Self::V0_9_6 => "v0.9.6",
            Self::V0_9_7 => "v0.9.7",
            Self::V0_9_8 => "v0.9.8",
            Self::V0_9_9 => "v0.9.9",
            Self::V0_9_10 => "v0.9.10",
            Self::V0_9_11 => "v0.9.11",
            Self::V0_9_14 => "v0.9.14",
            Self::V1_0_0 => "v1.0.0",
            Self::V1_0_1 => "v1.0.1",
            Self::V1_0_2 => "v1.0.2",
            Self::V1_0_3 => "v1.0.3",
            Self::V1_1 => "v1.1",
            Self::V1_1_1 => "v1.1.1",
            Self::V1_1_2 => "v1.1.2",
            Self::V1_1_3 => "v1.1.3",
            Self::V1_1_4 => "v1.1.4",
            Self::V1_1_5 => "v1.1.5",
            Self::V1_2 => "v1.2",
            Self::V1_2_1 => "v1.2.1",
            Self::V1_3 => "v1.3",
            Self::V1_3_1 => "v1.3.1",
            Self::V1_4 => "v1.4",
            Self::V1_5 => "v1.5",
            Self::V1_5_1 => "v1.5.1",
            Self::V1_5_2 => "v1.5.2",
            Self::V1_6 => "v1.6",
            Self::V1_6_1 => "v1.6.1",
        }
    }

    /// The release version the tag points at.
    ///
    /// Short tags carry an implicit zero patch: `v1.1` is `1.1.0`.
    #[must_use]
    pub const fn version(self) -> SemanticVersion {
        match self {
            Self::V0_9_4 => SemanticVersion::new(0, 9, 4),
            Self::V0_9_5 => SemanticVersion::new(0, 9, 5),
            Self::V0_9_6 => SemanticVersion::new(0, 9, 6),
            Self::V0_9_7 => SemanticVersion::new(0, 9, 7),
            Self::V0_9_8 => SemanticVersion::new(0, 9, 8),
            Self::V0_9_9 => SemanticVersion::new(0, 9, 9),
            Self::V0_9_10 => SemanticVersion::new(0, 9, 10),
            Self::V0_9_11 => SemanticVersion::new(0, 9, 11),
            Self::V0_9_14 => SemanticVersion::new(0, 9, 14),
            Self::V1_0_0 => SemanticVersion::new(1, 0, 0),
            Self::V1_0_1 => SemanticVersion::new(1, 0, 1),
            Self::V1_0_2 => SemanticVersion::new(1, 0, 2),
            Self::V1_0_3 => SemanticVersion::new(1, 0, 3),
            Self::V1_1 => SemanticVersion::new(1, 1, 0),
            Self::V1_1_1 => SemanticVersion::new(1, 1, 1),
            Self::V1_1_2 => SemanticVersion::new(1, 1, 2),
            Self::V1_1_3 => SemanticVersion::new(1, 1, 3),
            Self::V1_1_4 => SemanticVersion::new(1, 1, 4),
            Self::V1_1_5 => SemanticVersion::new(1, 1, 5),
            Self::V1_2 => SemanticVersion::new(1, 2, 0),
            Self::V1_2_1 => SemanticVersion::new(1, 2, 1),
            Self::V1_3 => SemanticVersion::new(1, 3, 0),
            Self::V1_3_1 => SemanticVersion::new(1, 3, 1),
            Self::V1_4 => SemanticVersion::new(1, 4, 0),
            Self::V1_5 => SemanticVersion::new(1, 5, 0),
            Self::V1_5_1 => SemanticVersion::new(1, 5, 1),
            Self::V1_5_2 => SemanticVersion::new(1, 5, 2),
            Self::V1_6 => SemanticVersion::new(1, 6, 0),
            Self::V1_6_1 => SemanticVersion::new(1, 6, 1),
        }
    }

    /// Resolve the newest tag whose version does not exceed `version`.
    ///
    /// Returns `None` when `version` is `None` (an unparseable runtime
    /// string) or predates the whole catalog. Resolution is monotonic: a
    /// higher input version never maps to an older tag.
    #[must_use]
    pub fn resolve_nearest(version: Option<SemanticVersion>) -> Option<Self> {
        let version = version?;
        let mut best: Option<Self> = None;
        for &tag in Self::ALL {
            if tag.version() <= version && best.is_none_or(|held| tag.version() > held.version()) {
                best = Some(tag);
            }
        }
        best
    }
}

impl Ord for LibopusTag {
    fn cmp(&self, other: &Self) -> Ordering {
        self.version().cmp(&other.version())
    }
}

impl PartialOrd for LibopusTag {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for LibopusTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A published release tag of this crate.
///
/// Mirrors [`LibopusTag`] for the crate's own release line, so a profile
/// can record which binding release its policy decisions came from.
#[allow(missing_docs)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CrateTag {
    V0_1_0,
    V0_2_0,
}

impl CrateTag {
    /// Every known tag, oldest first.
    pub const ALL: &'static [Self] = &[Self::V0_1_0, Self::V0_2_0];

    /// The tag name, e.g. `"v0.2.0"`.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::V0_1_0 => "v0.1.0",
            Self::V0_2_0 => "v0.2.0",
        }
    }

    /// The release version the tag points at.
    #[must_use]
    pub const fn version(self) -> SemanticVersion {
        match self {
            Self::V0_1_0 => SemanticVersion::new(0, 1, 0),
            Self::V0_2_0 => SemanticVersion::new(0, 2, 0),
        }
    }

    /// Resolve the newest tag whose version does not exceed `version`.
    #[must_use]
    pub fn resolve_nearest(version: Option<SemanticVersion>) -> Option<Self> {
        let version = version?;
        let mut best: Option<Self> = None;
        for &tag in Self::ALL {
            if tag.version() <= version && best.is_none_or(|held| tag.version() > held.version()) {
                best = Some(tag);
            }
        }
        best
    }
}

impl Ord for CrateTag {
    fn cmp(&self, other: &Self) -> Ordering {
        self.version().cmp(&other.version())
    }
}

impl PartialOrd for CrateTag {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for CrateTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
