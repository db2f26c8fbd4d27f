use crate::boundary::BoundaryWarning;
use crate::version::Version;

/// Result of comparing the VERSION file between two revisions.
///
/// `changed` reflects the raw file comparison. A release is only signalled
/// when the new content also parses as a version; a release branch is only
/// requested when both revisions parse and the major or minor component
/// moved. Malformed content degrades to a warning instead of an error so a
/// caller can still tell "no release" apart from "unparsable version".
#[derive(Debug, Clone, PartialEq)]
pub struct VersionChange {
    /// True iff the file content differs between the two revisions
    pub changed: bool,
    /// The new version, when the after content is well formed
    pub version: Option<Version>,
    /// The previous version, when the before content is well formed
    pub previous: Option<Version>,
    /// Release branch series to cut, named after the previous major.minor
    pub release_branch: Option<String>,
    /// Non-fatal conditions encountered during detection
    pub warnings: Vec<BoundaryWarning>,
}

impl VersionChange {
    fn unchanged() -> Self {
        VersionChange {
            changed: false,
            version: None,
            previous: None,
            release_branch: None,
            warnings: Vec::new(),
        }
    }

    /// True when the change should result in a release
    pub fn release_needed(&self) -> bool {
        self.changed && self.version.is_some()
    }

    /// True when a release branch should be created from the previous series
    pub fn branch_needed(&self) -> bool {
        self.release_branch.is_some()
    }
}

/// Compare two revisions of the VERSION file and decide release intent.
///
/// `previous` and `current` are the file contents at the before and after
/// revisions; `None` means the file does not exist at that revision.
/// Contents are compared after trimming, so a whitespace-only edit is not
/// a release signal.
pub fn detect_change(previous: Option<&str>, current: Option<&str>) -> VersionChange {
    let previous = previous.map(str::trim);
    let current = current.map(str::trim);

    if previous == current {
        return VersionChange::unchanged();
    }

    let mut change = VersionChange {
        changed: true,
        ..VersionChange::unchanged()
    };

    let current_content = match current {
        Some(content) => content,
        None => {
            // File deleted; nothing to release
            change.warnings.push(BoundaryWarning::MissingCurrentFile);
            return change;
        }
    };

    match Version::parse(current_content) {
        Ok(version) => change.version = Some(version),
        Err(_) => {
            change.warnings.push(BoundaryWarning::MalformedCurrentVersion {
                content: current_content.to_string(),
            });
            return change;
        }
    }

    let previous_content = match previous {
        Some(content) => content,
        None => {
            // First tracked version; nothing to compare a series against
            change.warnings.push(BoundaryWarning::MissingPreviousFile);
            return change;
        }
    };

    match Version::parse(previous_content) {
        Ok(prev) => {
            change.previous = Some(prev);
            if let Some(version) = change.version {
                if !version.same_series(&prev) {
                    change.release_branch = Some(prev.series());
                }
            }
        }
        Err(_) => {
            change.warnings.push(BoundaryWarning::MalformedPreviousVersion {
                content: previous_content.to_string(),
            });
        }
    }

    change
}
