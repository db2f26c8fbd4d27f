use crate::boundary::BoundaryWarning;
use crate::detect::VersionChange;
use anyhow::Result;
use console::style;
use std::io::{self, Write};

pub fn display_error(message: &str) {
    eprintln!("{} {}", style("ERROR:").red().bold(), message);
}

pub fn display_success(message: &str) {
    println!("{} {}", style("✓").green(), message);
}

pub fn display_status(message: &str) {
    println!("{} {}", style("→").yellow(), message);
}

pub fn display_warning(warning: &BoundaryWarning) {
    eprintln!("{} {}", style("WARNING:").yellow().bold(), warning);
}

/// Show the detection result for the two revisions being compared.
pub fn display_change_summary(change: &VersionChange, before: &str, after: &str) {
    println!(
        "\n{}",
        style(format!("VERSION file between '{}' and '{}'", before, after)).bold()
    );

    if !change.changed {
        println!("  Unchanged; no release.");
        return;
    }

    match (&change.previous, &change.version) {
        (Some(prev), Some(version)) => {
            println!("  From: {}", style(prev).red());
            println!("  To:   {}", style(version).green());
        }
        (None, Some(version)) => {
            println!("  New version: {}", style(version).green());
        }
        _ => {
            println!("  Changed, but the new content is not a version.");
        }
    }

    match &change.release_branch {
        Some(series) => println!("  Release branch needed for series {}", style(series).bold()),
        None if change.release_needed() => println!("  No release branch needed."),
        None => {}
    }
}

pub fn confirm_action(prompt: &str) -> Result<bool> {
    print!("\n{} (y/N): ", prompt);
    io::stdout().flush()?;

    let mut input = String::new();
    io::stdin().read_line(&mut input)?;

    let response = input.trim().to_lowercase();
    Ok(response == "y" || response == "yes")
}
