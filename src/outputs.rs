use crate::detect::VersionChange;
use crate::error::{RelcheckError, Result};
use std::fs::OpenOptions;
use std::io::Write;

/// Step outputs consumed by downstream CI jobs.
///
/// Keys follow the contract: `changed`, `version`, `release_branch`,
/// `version_branch`. An unchanged file yields only `changed=false`; a
/// changed file whose new content is not a version yields nothing at all,
/// so a consumer keying on `changed` never acts on garbage.
pub fn collect(change: &VersionChange) -> Vec<(&'static str, String)> {
    if !change.changed {
        return vec![("changed", "false".to_string())];
    }

    let version = match &change.version {
        Some(version) => version,
        None => return Vec::new(),
    };

    let mut outputs = vec![
        ("changed", "true".to_string()),
        ("version", version.to_string()),
    ];

    if let Some(series) = &change.release_branch {
        outputs.push(("release_branch", "true".to_string()));
        outputs.push(("version_branch", series.clone()));
    }

    outputs
}

/// Writes step outputs as `key=value` lines.
///
/// When `GITHUB_OUTPUT` is set the lines are appended to that file (the
/// GitHub Actions contract); otherwise they go to stdout so the tool is
/// usable from any shell pipeline.
pub fn write(change: &VersionChange) -> Result<()> {
    let lines = collect(change);

    match std::env::var("GITHUB_OUTPUT") {
        Ok(path) if !path.is_empty() => {
            let mut file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(&path)
                .map_err(|e| {
                    RelcheckError::output(format!("Cannot open output file '{}': {}", path, e))
                })?;
            for (key, value) in &lines {
                writeln!(file, "{}={}", key, value)?;
            }
        }
        _ => {
            let stdout = std::io::stdout();
            let mut handle = stdout.lock();
            for (key, value) in &lines {
                writeln!(handle, "{}={}", key, value)?;
            }
        }
    }

    Ok(())
}
