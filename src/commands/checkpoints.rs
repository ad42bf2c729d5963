//! Checkpoints subcommand handler

use anyhow::Result;

use ivp::simulate::format_clock;
use ivp::Config;

/// List checkpoints in the order they trigger.
#[cfg(not(tarpaulin_include))]
pub fn handle_list(config: &Config) -> Result<()> {
    let scheduler = config.scheduler();
    let checkpoints = scheduler.checkpoints();

    if checkpoints.is_empty() {
        println!("No checkpoints configured.");
        return Ok(());
    }

    for (i, cp) in checkpoints.iter().enumerate() {
        println!("#{}  {}  {}", i + 1, format_clock(cp.trigger_time), cp.title());
    }
    println!();
    println!(
        "{} checkpoint(s), trigger window {:.2}s",
        checkpoints.len(),
        scheduler.window()
    );

    Ok(())
}
