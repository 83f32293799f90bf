/*
[INPUT]:  Output path from the init-config subcommand
[OUTPUT]: Default YAML configuration file on disk
[POS]:    CLI initialization layer
[UPDATE]: When AppConfig schema changes
*/

use anyhow::{Context, Result, bail};
use console::style;
use std::path::PathBuf;

use tugas_form::AppConfig;
use tugas_form::config::default_config_path;

pub fn run_init_config(output: Option<PathBuf>, force: bool) -> Result<()> {
    let output = match output {
        Some(path) => path,
        None => default_config_path().context("no platform config directory, pass --output")?,
    };

    if output.exists() && !force {
        bail!(
            "{} already exists, pass --force to overwrite",
            output.display()
        );
    }

    if let Some(parent) = output.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("failed to create {}", parent.display()))?;
        }
    }

    let yaml = AppConfig::default().to_yaml()?;
    std::fs::write(&output, yaml)
        .with_context(|| format!("failed to write config to {}", output.display()))?;

    println!("{}", style("SUCCESS!").bold().green());
    println!(
        "Configuration written to: {}",
        style(output.display()).cyan()
    );

    Ok(())
}
