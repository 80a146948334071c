use anyhow::{Context, Result};
use std::path::Path;
use tracing::{info, instrument};

use crate::config::completion_banner;
use crate::core::{PatchReport, SUBSTITUTIONS, StepReport, patch_content};
use crate::io::{backup_path, read_file_safe, updated_path, write_file_safe};

#[instrument]
pub async fn execute_patch(target: &Path, dry_run: bool, json: bool) -> Result<PatchReport> {
    let output = updated_path(target);
    let original_content = read_file_safe(target).await?;

    let patched = patch_content(&original_content, &SUBSTITUTIONS);

    if !json {
        for step in &patched.steps {
            for line in step.status_lines() {
                println!("{}", line);
            }
        }
    }

    let changed = patched.content != original_content;

    if dry_run {
        info!("DRY RUN: Would write {}", output.display());
        if !json {
            print_preview(&patched.steps, &output);
        }
    } else {
        write_file_safe(&output, &patched.content).await?;
        info!("Created {}", output.display());
        if !json {
            println!(
                "{}",
                completion_banner(target, &output, &backup_path(target))
            );
        }
    }

    let report = PatchReport {
        target: target.to_path_buf(),
        output,
        steps: patched.steps,
        changed,
        written: !dry_run,
    };

    if json {
        let rendered =
            serde_json::to_string_pretty(&report).context("Failed to serialize patch report")?;
        println!("{}", rendered);
    }

    Ok(report)
}

fn print_preview(steps: &[StepReport], output: &Path) {
    println!("\n--- DRY RUN: {} not written ---", output.display());
    for (i, step) in steps.iter().enumerate() {
        let Some(pattern) = step.applied_pattern() else {
            continue;
        };
        println!("\n--- Update {} ({}) ---", i + 1, step.name);
        println!("- OLD:\n{}", pattern.old_content);
        println!("+ NEW:\n{}", pattern.new_content);
    }
}
