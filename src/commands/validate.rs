//! Validate subcommand handler

use std::path::Path;
use std::process::ExitCode;

use anyhow::Result;

use ivp::upload::validate_selection;
use ivp::Config;

/// Check a video file against the upload rules.
///
/// Prints the request that would be sent, or the status a viewer would see.
#[cfg(not(tarpaulin_include))]
pub fn handle(config: &Config, file: &Path) -> Result<ExitCode> {
    match validate_selection(Some(file), &config.upload) {
        Ok(request) => {
            println!(
                "Ready to upload {} ({}) to {} as '{}'",
                request.file_name,
                request.size_display(),
                request.endpoint,
                request.field
            );
            Ok(ExitCode::SUCCESS)
        }
        Err(status) => {
            eprintln!("{}", status);
            Ok(ExitCode::FAILURE)
        }
    }
}
