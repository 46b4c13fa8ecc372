//! Batch command - solve a whole input stream.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use spiralsolve_core::protocol::{render_json, render_text};
use spiralsolve_core::{BatchService, ClosedFormSolver, ParseOptions};
use tokio::io::AsyncReadExt;
use tracing::debug;

pub async fn run(file: Option<PathBuf>, strict: bool, json: bool) -> Result<()> {
    let input = read_input(file.as_deref()).await?;
    debug!(bytes = input.len(), strict, "Read batch input");

    let service = BatchService::with_options(ClosedFormSolver::new(), ParseOptions { strict });
    let answers = service
        .solve_answers(&input)
        .context("Failed to solve batch")?;

    if json {
        println!("{}", render_json(&answers)?);
        return Ok(());
    }

    let output = render_text(answers.iter().map(|a| a.direction));
    if !output.is_empty() {
        println!("{}", output);
    }
    Ok(())
}

async fn read_input(file: Option<&Path>) -> Result<String> {
    match file {
        Some(path) if path != Path::new("-") => tokio::fs::read_to_string(path)
            .await
            .with_context(|| format!("Failed to read {}", path.display())),
        _ => {
            let mut input = String::new();
            tokio::io::stdin()
                .read_to_string(&mut input)
                .await
                .context("Failed to read stdin")?;
            Ok(input)
        }
    }
}
