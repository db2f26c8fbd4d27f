use anyhow::Result;
use clap::Parser;
use std::path::Path;

use relcheck::{config, detect, git_ops, outputs, ui};

#[derive(clap::Parser)]
#[command(
    name = "relcheck",
    about = "Detect VERSION file bumps between git revisions and cut release branches"
)]
struct Args {
    #[arg(help = "Revision before the change (e.g. the pre-push SHA)")]
    before: String,

    #[arg(help = "Revision after the change (e.g. HEAD)")]
    after: String,

    #[arg(short, long, help = "Custom configuration file path")]
    config: Option<String>,

    #[arg(short, long, help = "Path to the repository (defaults to cwd)")]
    repo: Option<String>,

    #[arg(long, help = "Version file path, overriding the configured one")]
    file: Option<String>,

    #[arg(long, help = "Create and push the release branch when one is needed")]
    create_branch: bool,

    #[arg(short = 'f', long, help = "Skip confirmation prompts")]
    force: bool,

    #[arg(long, help = "Preview what would happen without making changes")]
    dry_run: bool,

    #[arg(short, long, help = "Print version information")]
    version: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    if args.version {
        println!("relcheck {}", env!("CARGO_PKG_VERSION"));
        return Ok(());
    }

    // Load configuration
    let config = match config::load_config(args.config.as_deref()) {
        Ok(cfg) => cfg,
        Err(e) => {
            eprintln!("Error loading config: {}", e);
            std::process::exit(1);
        }
    };

    let version_file = args.file.clone().unwrap_or_else(|| config.version_file.clone());
    let version_path = Path::new(&version_file);

    // Open the repository
    let repo_dir = args.repo.clone().unwrap_or_else(|| ".".to_string());
    let git_repo = match git_ops::GitRepo::open(Path::new(&repo_dir)) {
        Ok(repo) => repo,
        Err(e) => {
            ui::display_error(&format!("Git repository error: {}", e));
            std::process::exit(1);
        }
    };

    // Read the version file at both revisions. An unresolvable revision is
    // fatal; a missing file at a resolvable revision is not.
    let previous = read_version(&git_repo, &args.before, version_path);
    let current = read_version(&git_repo, &args.after, version_path);

    let change = detect::detect_change(previous.as_deref(), current.as_deref());

    ui::display_change_summary(&change, &args.before, &args.after);
    for warning in &change.warnings {
        ui::display_warning(warning);
    }

    // Emit step outputs for downstream jobs (release creation lives there)
    if let Err(e) = outputs::write(&change) {
        ui::display_error(&format!("Failed to write outputs: {}", e));
        std::process::exit(1);
    }

    // Optionally cut the release branch from the previous series
    if args.create_branch {
        if let Some(series) = change.release_branch.clone() {
            cut_release_branch(&git_repo, &config, &series, &args)?;
        }
    }

    Ok(())
}

fn read_version(git_repo: &git_ops::GitRepo, rev: &str, path: &Path) -> Option<String> {
    match git_repo.read_file_at(rev, path) {
        Ok(content) => content,
        Err(e) => {
            ui::display_error(&format!(
                "Failed to read '{}' at revision '{}': {}",
                path.display(),
                rev,
                e
            ));
            std::process::exit(1);
        }
    }
}

/// Create and push the release branch. Failures here are reported but do
/// not fail the run: the release outputs were already emitted and the
/// branch can be cut by hand.
fn cut_release_branch(
    git_repo: &git_ops::GitRepo,
    config: &config::Config,
    series: &str,
    args: &Args,
) -> Result<()> {
    let branch_name = config.branch_name(series);

    if args.dry_run {
        ui::display_status("Dry run:");
        ui::display_success(&format!(
            "  Step 1: would create branch '{}' at '{}'",
            branch_name, args.after
        ));
        ui::display_success(&format!(
            "  Step 2: would push '{}' to '{}'",
            branch_name, config.remote
        ));
        return Ok(());
    }

    match git_repo.branch_exists(&branch_name) {
        Ok(true) => {
            ui::display_warning(&relcheck::boundary::BoundaryWarning::BranchExists {
                branch: branch_name,
            });
            return Ok(());
        }
        Ok(false) => {}
        Err(e) => {
            ui::display_error(&format!("Failed to check branch '{}': {}", branch_name, e));
            return Ok(());
        }
    }

    if !args.force
        && !ui::confirm_action(&format!("Create release branch '{}'?", branch_name))?
    {
        println!("Branch creation cancelled by user.");
        return Ok(());
    }

    ui::display_status(&format!("Creating branch: {}", branch_name));
    if let Err(e) = git_repo.create_branch(&branch_name, &args.after) {
        ui::display_error(&format!(
            "Failed to create branch '{}': {}",
            branch_name, e
        ));
        return Ok(());
    }
    ui::display_success(&format!("Created branch: {}", branch_name));

    ui::display_status(&format!(
        "Pushing branch: {} to remote {}",
        branch_name, config.remote
    ));
    if let Err(e) = git_repo.push_branch(&branch_name, &config.remote) {
        ui::display_warning(&relcheck::boundary::BoundaryWarning::PushFailed {
            branch: branch_name,
            reason: e.to_string(),
        });
        return Ok(());
    }
    ui::display_success(&format!("Pushed branch: {} to remote", branch_name));

    Ok(())
}
