//! CLI argument definitions using Clap

use clap::{ArgAction, Parser, Subcommand, ValueEnum};

use crate::domain::clipboard::ObservableFormats;
use crate::domain::config::OutputFormat;

/// clipwatch - report what lands on the Windows clipboard, and from where
#[derive(Parser, Debug)]
#[command(name = "clipwatch")]
#[command(version)]
#[command(about = "Report files, text and images copied on Windows, with their source")]
#[command(long_about = None)]
pub struct Cli {
    /// Do not report file drops
    #[arg(long)]
    pub no_files: bool,

    /// Do not report text
    #[arg(long)]
    pub no_text: bool,

    /// Do not report images
    #[arg(long)]
    pub no_images: bool,

    /// Event output format
    #[arg(short = 'o', long, value_name = "FORMAT")]
    pub output: Option<OutputArg>,

    /// Join the viewer chain but do not report changes
    #[arg(long)]
    pub paused: bool,

    /// Log more (-v info, -vv debug); RUST_LOG takes precedence
    #[arg(short = 'v', long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Config subcommand
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Manage configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

/// Config action subcommands
#[derive(Subcommand, Debug)]
pub enum ConfigAction {
    /// Create config file with defaults
    Init,
    /// Set a config value
    Set {
        /// Config key
        key: String,
        /// Config value
        value: String,
    },
    /// Get a config value
    Get {
        /// Config key
        key: String,
    },
    /// List all config values
    List,
    /// Show config file path
    Path,
}

/// Output format argument for clap ValueEnum
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputArg {
    Text,
    Json,
}

impl From<OutputArg> for OutputFormat {
    fn from(arg: OutputArg) -> Self {
        match arg {
            OutputArg::Text => OutputFormat::Text,
            OutputArg::Json => OutputFormat::Json,
        }
    }
}

/// Parsed watch options
#[derive(Debug, Clone, Copy)]
pub struct WatchOptions {
    pub formats: ObservableFormats,
    pub output: OutputFormat,
    pub start_paused: bool,
}

/// Valid config keys
pub const VALID_CONFIG_KEYS: &[&str] = &[
    "observe_files",
    "observe_text",
    "observe_images",
    "output",
    "start_paused",
];

/// Check if a config key is valid
pub fn is_valid_config_key(key: &str) -> bool {
    VALID_CONFIG_KEYS.contains(&key)
}

/// Map verbosity count to a log level filter
pub fn log_level(verbose: u8) -> log::LevelFilter {
    match verbose {
        0 => log::LevelFilter::Warn,
        1 => log::LevelFilter::Info,
        _ => log::LevelFilter::Debug,
    }
}
