use std::fmt;

/// Warnings that occur while inspecting the VERSION file across revisions.
/// These are non-fatal issues that should be reported to the user.
#[derive(Debug, Clone, PartialEq)]
pub enum BoundaryWarning {
    /// The new VERSION content cannot be parsed as a semantic version
    MalformedCurrentVersion { content: String },
    /// The previous VERSION content cannot be parsed as a semantic version
    MalformedPreviousVersion { content: String },
    /// The VERSION file does not exist at the before revision
    MissingPreviousFile,
    /// The VERSION file does not exist at the after revision
    MissingCurrentFile,
    /// The release branch already exists
    BranchExists { branch: String },
    /// Pushing the release branch to the remote failed
    PushFailed { branch: String, reason: String },
}

impl fmt::Display for BoundaryWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BoundaryWarning::MalformedCurrentVersion { content } => {
                write!(
                    f,
                    "New VERSION content '{}' is not MAJOR.MINOR.PATCH; not treating as a release",
                    content
                )
            }
            BoundaryWarning::MalformedPreviousVersion { content } => {
                write!(
                    f,
                    "Previous VERSION content '{}' is not MAJOR.MINOR.PATCH; skipping release branch decision",
                    content
                )
            }
            BoundaryWarning::MissingPreviousFile => {
                write!(f, "VERSION file does not exist at the before revision")
            }
            BoundaryWarning::MissingCurrentFile => {
                write!(f, "VERSION file does not exist at the after revision")
            }
            BoundaryWarning::BranchExists { branch } => {
                write!(f, "Release branch '{}' already exists", branch)
            }
            BoundaryWarning::PushFailed { branch, reason } => {
                write!(f, "Could not push branch '{}': {}", branch, reason)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_warning_display_includes_content() {
        let warning = BoundaryWarning::MalformedCurrentVersion {
            content: "not-a-version".to_string(),
        };
        assert!(warning.to_string().contains("not-a-version"));
    }

    #[test]
    fn test_all_warnings_render() {
        let warnings = vec![
            BoundaryWarning::MalformedCurrentVersion {
                content: "x".to_string(),
            },
            BoundaryWarning::MalformedPreviousVersion {
                content: "y".to_string(),
            },
            BoundaryWarning::MissingPreviousFile,
            BoundaryWarning::MissingCurrentFile,
            BoundaryWarning::BranchExists {
                branch: "rel-2.0".to_string(),
            },
            BoundaryWarning::PushFailed {
                branch: "rel-2.0".to_string(),
                reason: "auth".to_string(),
            },
        ];

        for warning in warnings {
            assert!(!warning.to_string().is_empty());
        }
    }
}
