// Command-line interface definitions and parsing for uploader

use crate::config::CliConfig;
use crate::core::constants::schemes;
use clap::Parser;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Root directory of the site to upload
    #[arg(value_name = "FILES_DIR")]
    pub files_dir: String,

    /// Credentials file (username, password, host, port)
    #[arg(value_name = "CREDENTIALS_FILE")]
    pub credentials_file: String,

    // Store Options
    /// Scheme used to reach the record store (default: https)
    #[arg(long, value_name = "SCHEME", value_parser = schemes::ALL, help_heading = "Store Options")]
    pub scheme: Option<String>,

    /// Request timeout in seconds (default: 30)
    #[arg(
        short = 't',
        long,
        value_name = "SECONDS",
        help_heading = "Store Options"
    )]
    pub timeout: Option<u64>,

    /// Custom User-Agent header
    #[arg(long, value_name = "AGENT", help_heading = "Store Options")]
    pub user_agent: Option<String>,

    /// Record kind (default: DocModel)
    #[arg(long, value_name = "KIND", help_heading = "Store Options")]
    pub kind: Option<String>,

    /// List the records that would be written without uploading
    #[arg(long, help_heading = "Store Options")]
    pub dry_run: bool,

    // Output & Verbosity
    /// Suppress all output except errors
    #[arg(short = 'q', long, help_heading = "Output & Verbosity")]
    pub quiet: bool,

    /// Enable verbose logging
    #[arg(short = 'v', long, help_heading = "Output & Verbosity")]
    pub verbose: bool,

    /// Disable progress bars
    #[arg(long, help_heading = "Output & Verbosity")]
    pub no_progress: bool,

    // Configuration
    /// Use specific config file
    #[arg(long, value_name = "FILE", help_heading = "Configuration")]
    pub config: Option<String>,

    /// Ignore config files
    #[arg(long, help_heading = "Configuration")]
    pub no_config: bool,
}

/// Convert the parsed CLI into the settings merged over the config file
pub fn cli_to_config(cli: &Cli) -> CliConfig {
    CliConfig {
        scheme: cli.scheme.clone(),
        timeout: cli.timeout,
        user_agent: cli.user_agent.clone(),
        record_kind: cli.kind.clone(),
        quiet: cli.quiet,
        verbose: cli.verbose,
        no_progress: cli.no_progress,
        dry_run: cli.dry_run,
        config_file: cli.config.clone(),
        no_config: cli.no_config,
    }
}
