use clap::Parser;
use log::warn;
use simplelog::{ConfigBuilder, WriteLogger};
use std::fs::File;

use octoscope::core::config::{self, Overrides};
use octoscope::tui;

#[derive(Parser)]
#[command(name = "octoscope", about = "Browse GitHub profiles from the terminal")]
struct Args {
    /// GitHub REST API root (e.g. a GitHub Enterprise or mock server URL)
    #[arg(long)]
    api_root: Option<String>,

    /// Log level: off, error, warn, info, debug, trace
    #[arg(long)]
    log_level: Option<String>,
}

#[tokio::main]
async fn main() -> std::io::Result<()> {
    let args = Args::parse();
    dotenv::dotenv().ok();

    // Config errors can't be logged yet; keep them until the logger is up.
    let (file_config, load_error) = match config::load_config() {
        Ok(c) => (c, None),
        Err(e) => (config::OctoscopeConfig::default(), Some(e)),
    };
    let overrides = Overrides {
        cli_api_root: args.api_root,
        cli_log_level: args.log_level,
        ..Overrides::from_env()
    };
    let resolved = config::resolve(&file_config, &overrides);

    // Initialize file logger - writes to octoscope.log in current directory
    let log_config = ConfigBuilder::new().set_time_format_rfc3339().build();
    if let Ok(log_file) = File::create("octoscope.log") {
        let _ = WriteLogger::init(resolved.log_level, log_config, log_file);
    }

    if let Some(e) = load_error {
        warn!("Ignoring config file: {}", e);
    }
    log::info!(
        "Octoscope starting up against {} (web {})",
        resolved.api_root,
        resolved.web_root
    );

    tui::run(resolved)
}
