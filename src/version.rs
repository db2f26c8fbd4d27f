use crate::error::{RelcheckError, Result};
use regex::Regex;
use std::fmt;
use std::sync::OnceLock;

/// Semantic version representation
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Version {
    pub major: u32,
    pub minor: u32,
    pub patch: u32,
}

/// Strict MAJOR.MINOR.PATCH pattern. Anything beyond three dot-separated
/// non-negative integers (prefixes, pre-release suffixes, build metadata)
/// is rejected.
fn version_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"^(\d+)\.(\d+)\.(\d+)$").expect("static pattern"))
}

impl Version {
    /// Create a new version
    pub fn new(major: u32, minor: u32, patch: u32) -> Self {
        Version {
            major,
            minor,
            patch,
        }
    }

    /// Parse a version from file content (e.g., "1.2.3\n" -> Version(1,2,3))
    ///
    /// Surrounding whitespace is trimmed; everything else must match the
    /// strict MAJOR.MINOR.PATCH shape.
    pub fn parse(content: &str) -> Result<Self> {
        let trimmed = content.trim();

        let captures = version_pattern().captures(trimmed).ok_or_else(|| {
            RelcheckError::version(format!(
                "Invalid version format: '{}' - expected MAJOR.MINOR.PATCH",
                trimmed
            ))
        })?;

        let component = |idx: usize, name: &str| -> Result<u32> {
            captures[idx].parse::<u32>().map_err(|_| {
                RelcheckError::version(format!("Invalid {} version: {}", name, &captures[idx]))
            })
        };

        Ok(Version {
            major: component(1, "major")?,
            minor: component(2, "minor")?,
            patch: component(3, "patch")?,
        })
    }

    /// The release series this version belongs to, as "MAJOR.MINOR"
    pub fn series(&self) -> String {
        format!("{}.{}", self.major, self.minor)
    }

    /// True when both versions share major and minor components
    pub fn same_series(&self, other: &Version) -> bool {
        self.major == other.major && self.minor == other.minor
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)
    }
}
