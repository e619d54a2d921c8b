//! Tolerant semantic-version parsing and ordering

use std::fmt;

/// A `(major, minor, patch)` version triple ordered lexicographically.
///
/// Values usually come from free-form runtime banners via
/// [`SemanticVersion::parse`]; the parser never produces a negative
/// component, so the triple is plain unsigned data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SemanticVersion {
    /// Major version component.
    pub major: u32,
    /// Minor version component.
    pub minor: u32,
    /// Patch version component.
    pub patch: u32,
}

impl SemanticVersion {
    /// Create a version from its components.
    #[must_use]
    pub const fn new(major: u32, minor: u32, patch: u32) -> Self {
        Self {
            major,
            minor,
            patch,
        }
    }

    /// Parse a version triple out of free-form text.
    ///
    /// Every character that is not an ASCII digit or `'.'` acts as a
    /// separator, and the first surviving token is the version candidate,
    /// so `"libopus 1.5.2"` parses as `1.5.2`. Dotted pieces that are not
    /// plain non-negative integers are dropped; missing positions default
    /// to zero (`"1.2"` parses as `1.2.0`). Returns `None` when no numeric
    /// component survives.
    ///
    /// ```
    /// use opus_compat::SemanticVersion;
    ///
    /// assert_eq!(
    ///     SemanticVersion::parse("libopus 1.5.2"),
    ///     Some(SemanticVersion::new(1, 5, 2))
    /// );
    /// assert_eq!(SemanticVersion::parse("unknown"), None);
    /// ```
    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        let scrubbed: String = raw
            .chars()
            .map(|c| if c.is_ascii_digit() || c == '.' { c } else { ' ' })
            .collect();
        let candidate = scrubbed.split_whitespace().next()?;

        let parts: Vec<u32> = candidate
            .split('.')
            .filter_map(|piece| piece.parse().ok())
            .collect();
        if parts.is_empty() {
            return None;
        }

        Some(Self::new(
            parts[0],
            parts.get(1).copied().unwrap_or(0),
            parts.get(2).copied().unwrap_or(0),
        ))
    }
}

impl fmt::Display for SemanticVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)
    }
}
