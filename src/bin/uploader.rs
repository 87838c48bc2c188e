use clap::Parser;
use uploader::config::{CliConfig, Config, load_credentials};
use uploader::discovery::DirectoryScanner;
use uploader::reporting::logging;
use uploader::store::HttpRecordStore;
use uploader::ui::output;
use uploader::ui::{Cli, ProgressReporter, cli_to_config};
use uploader::upload::upload_all;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    match run_uploader_logic(&cli).await {
        Ok(exit_code) => std::process::exit(exit_code),
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    }
}

/// Scan, load credentials and upload; extracted from main() for testing
pub async fn run_uploader_logic(cli: &Cli) -> Result<i32, Box<dyn std::error::Error>> {
    let cli_config = cli_to_config(cli);
    let config = load_and_merge_config(&cli_config)?;

    logging::init_logger(config.verbose.unwrap_or(false), cli_config.quiet);
    logging::log_config_info(&config);

    if !cli_config.quiet {
        output::display_run_header(&cli.files_dir, &cli.credentials_file);
    }

    let files = DirectoryScanner::new(&cli.files_dir)
        .scan()
        .inspect_err(|e| {
            logging::log_error("Could not scan files directory", Some(e));
        })?;
    let binary_count = files.iter().filter(|file| file.is_binary()).count();
    logging::log_discovery_complete(files.len(), binary_count);

    let credentials = load_credentials(&cli.credentials_file).inspect_err(|e| {
        logging::log_error("Could not load credentials", Some(e));
    })?;

    if cli_config.dry_run {
        if !cli_config.quiet {
            output::display_dry_run(&files, config.record_kind());
        }
        return Ok(0);
    }

    let store = HttpRecordStore::connect(&credentials, &config)?;
    logging::log_upload_start(files.len(), store.base_url());

    let mut progress = ProgressReporter::new(!cli_config.quiet && !cli_config.no_progress);
    let summary = upload_all(&store, &files, config.record_kind(), Some(&mut progress))
        .await
        .inspect_err(|e| {
            logging::log_error("can not upload files", Some(e));
        })?;

    if !cli_config.quiet {
        output::display_summary(&summary, store.base_url());
    }

    Ok(0)
}

/// Load configuration from file or standard locations and merge with CLI config
pub fn load_and_merge_config(cli_config: &CliConfig) -> Result<Config, Box<dyn std::error::Error>> {
    let mut config = if cli_config.no_config {
        Config::default()
    } else if let Some(ref config_file) = cli_config.config_file {
        Config::load_from_file(config_file)?
    } else {
        Config::load_from_standard_locations()
    };

    // CLI takes precedence over the config file
    config.merge_with_cli(cli_config);
    config.validate()?;
    Ok(config)
}
