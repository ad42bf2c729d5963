//! Command line definitions.
//!
//! Lives in the library so `xtask` can render the man page from it.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use clap_complete::Shell;

/// Version string with git hash for dev builds.
#[cfg(not(feature = "release"))]
pub const VERSION: &str = concat!(
    env!("CARGO_PKG_VERSION"),
    "-",
    env!("VERGEN_GIT_SHA"),
    " (",
    env!("IVP_BUILD_DATE"),
    ")"
);

/// Version string for release builds.
#[cfg(feature = "release")]
pub const VERSION: &str = concat!(env!("CARGO_PKG_VERSION"), " (", env!("IVP_BUILD_DATE"), ")");

/// Interactive video player controller.
///
/// Plans and checks timed checkpoints, subtitle slots and uploads for the
/// interactive player.
#[derive(Debug, Parser)]
#[command(name = "ivp", version = VERSION, about, long_about = None)]
pub struct Cli {
    /// Use this config file instead of the default location
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Log debug output to stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// List configured checkpoints in trigger order
    Checkpoints,

    /// Replay a playback script and show when checkpoints appear
    Simulate {
        /// JSON-lines playback script
        script: PathBuf,

        /// Override the trigger window (seconds)
        #[arg(long, value_name = "SECS")]
        window: Option<f64>,
    },

    /// Check that a video file can be uploaded
    Validate {
        /// Video file to check
        file: PathBuf,
    },

    /// Manage configuration
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },

    /// Generate shell completions
    Completions {
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[derive(Debug, Subcommand)]
pub enum ConfigCommands {
    /// Show the effective configuration as TOML
    Show,
    /// Print the config file path
    Path,
    /// Write the default configuration file
    Init {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}
