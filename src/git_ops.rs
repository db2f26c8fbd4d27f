use crate::error::{RelcheckError, Result};
use git2::{BranchType, ErrorCode, Repository};
use std::path::Path;

/// Wrapper around git2 Repository for revision and branch operations.
///
/// Provides the high-level operations relcheck needs: reading a tracked
/// file as it existed at an arbitrary revision, and creating/pushing
/// release branches.
pub struct GitRepo {
    repo: Repository,
}

impl GitRepo {
    /// Creates a new GitRepo instance for the current working directory.
    ///
    /// Discovers the git repository in the current directory or parent directories.
    pub fn new() -> Result<Self> {
        GitRepo::open(Path::new("."))
    }

    /// Opens the repository containing `path`.
    pub fn open(path: &Path) -> Result<Self> {
        let repo = Repository::discover(path).map_err(|e| {
            RelcheckError::revision(format!("Not in a git repository: {}", e))
        })?;
        Ok(GitRepo { repo })
    }

    /// Reads a tracked file's content as it existed at a revision.
    ///
    /// The revision may be anything `git rev-parse` accepts (SHA, branch,
    /// tag, `HEAD~1`, ...).
    ///
    /// # Returns
    /// * `Ok(Some(content))` - File exists at the revision, UTF-8 content
    /// * `Ok(None)` - Revision exists but the file does not
    /// * `Err` - Revision cannot be resolved, or the blob is not UTF-8
    pub fn read_file_at(&self, rev: &str, path: &Path) -> Result<Option<String>> {
        let object = self.repo.revparse_single(rev).map_err(|e| {
            RelcheckError::revision(format!("Cannot resolve revision '{}': {}", rev, e))
        })?;

        let commit = object.peel_to_commit().map_err(|e| {
            RelcheckError::revision(format!(
                "Revision '{}' does not point to a commit: {}",
                rev, e
            ))
        })?;

        let tree = commit.tree()?;

        let entry = match tree.get_path(path) {
            Ok(entry) => entry,
            Err(e) if e.code() == ErrorCode::NotFound => return Ok(None),
            Err(e) => return Err(e.into()),
        };

        let blob = entry
            .to_object(&self.repo)?
            .peel_to_blob()
            .map_err(|e| {
                RelcheckError::revision(format!(
                    "'{}' at revision '{}' is not a file: {}",
                    path.display(),
                    rev,
                    e
                ))
            })?;

        let content = std::str::from_utf8(blob.content()).map_err(|_| {
            RelcheckError::version(format!(
                "'{}' at revision '{}' is not valid UTF-8",
                path.display(),
                rev
            ))
        })?;

        Ok(Some(content.to_string()))
    }

    /// Checks whether a local branch with the given name exists.
    pub fn branch_exists(&self, name: &str) -> Result<bool> {
        match self.repo.find_branch(name, BranchType::Local) {
            Ok(_) => Ok(true),
            Err(e) if e.code() == ErrorCode::NotFound => Ok(false),
            Err(e) => Err(e.into()),
        }
    }

    /// Creates a local branch at the commit a revision resolves to.
    ///
    /// Does not overwrite: creating a branch that already exists is a
    /// distinguishable `Branch` error.
    pub fn create_branch(&self, name: &str, rev: &str) -> Result<()> {
        let object = self.repo.revparse_single(rev).map_err(|e| {
            RelcheckError::revision(format!("Cannot resolve revision '{}': {}", rev, e))
        })?;
        let commit = object.peel_to_commit().map_err(|e| {
            RelcheckError::revision(format!(
                "Revision '{}' does not point to a commit: {}",
                rev, e
            ))
        })?;

        self.repo.branch(name, &commit, false).map_err(|e| {
            if e.code() == ErrorCode::Exists {
                RelcheckError::branch(format!("Branch '{}' already exists", name))
            } else {
                e.into()
            }
        })?;

        Ok(())
    }

    /// Pushes a branch to a specified remote.
    ///
    /// Supports SSH authentication via keys from ~/.ssh/ or the SSH agent.
    pub fn push_branch(&self, name: &str, remote_name: &str) -> Result<()> {
        let mut remote = self.repo.find_remote(remote_name).map_err(|_| {
            RelcheckError::branch(format!("No remote named '{}' found", remote_name))
        })?;

        let mut push_options = git2::PushOptions::new();

        let mut callbacks = git2::RemoteCallbacks::new();
        callbacks.credentials(|_url, username_from_url, allowed_types| {
            if allowed_types.contains(git2::CredentialType::SSH_KEY) {
                let home = std::env::var("HOME").unwrap_or_else(|_| ".".to_string());
                let key_paths = vec![
                    format!("{}/.ssh/id_ed25519", home),
                    format!("{}/.ssh/id_rsa", home),
                    format!("{}/.ssh/id_ecdsa", home),
                ];

                for key_path in key_paths {
                    let path = std::path::Path::new(&key_path);
                    if path.exists() {
                        if let Ok(cred) = git2::Cred::ssh_key(
                            username_from_url.unwrap_or("git"),
                            None,
                            path,
                            None,
                        ) {
                            return Ok(cred);
                        }
                    }
                }

                if let Ok(cred) = git2::Cred::ssh_key_from_agent(username_from_url.unwrap_or("git"))
                {
                    return Ok(cred);
                }
            }

            git2::Cred::default()
        });

        // Catch per-reference rejections during push
        callbacks.push_update_reference(|refname, status| {
            if let Some(status) = status {
                eprintln!(
                    "Warning: Could not update reference {}: {}",
                    refname, status
                );
                Err(git2::Error::from_str(&format!(
                    "Push failed for {}",
                    refname
                )))
            } else {
                Ok(())
            }
        });

        push_options.remote_callbacks(callbacks);

        let refspec = format!("refs/heads/{name}:refs/heads/{name}", name = name);
        match remote.push(&[refspec.as_str()], Some(&mut push_options)) {
            Ok(_) => Ok(()),
            Err(e) => {
                if e.class() == git2::ErrorClass::Net {
                    Err(RelcheckError::branch(format!(
                        "Network error during push: {}",
                        e
                    )))
                } else if e.class() == git2::ErrorClass::Reference {
                    Err(RelcheckError::branch(format!(
                        "Reference error during push: {}",
                        e
                    )))
                } else {
                    Err(RelcheckError::branch(format!(
                        "Failed to push branch '{}': {}",
                        name, e
                    )))
                }
            }
        }
    }
}
