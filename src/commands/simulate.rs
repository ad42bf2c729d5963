//! Simulate subcommand handler

use std::path::Path;

use anyhow::{bail, Context, Result};

use ivp::simulate::{run, Script};
use ivp::Config;

/// Replay a playback script and print the transcript.
#[cfg(not(tarpaulin_include))]
pub fn handle(config: &Config, script_path: &Path, window: Option<f64>) -> Result<()> {
    let mut config = config.clone();
    if let Some(window) = window {
        if !(window.is_finite() && window > 0.0) {
            bail!("--window must be a positive number of seconds, got {}", window);
        }
        config.playback.trigger_window = window;
    }

    let script = Script::load(script_path)
        .with_context(|| format!("Cannot simulate {}", script_path.display()))?;
    let base_dir = script_path.parent().unwrap_or_else(|| Path::new("."));

    let report = run(&script, &config, base_dir);
    for entry in &report.entries {
        println!("{}", entry);
    }
    println!(
        "{} checkpoint presentation(s) over {} step(s)",
        report.presentations(),
        script.steps.len()
    );

    Ok(())
}
