use clap::Parser;
use prayer_times::core::config::{self, CliOverrides};
use simplelog::{ConfigBuilder, WriteLogger};
use std::fs::File;

#[derive(Parser)]
#[command(name = "prayer-times", about = "Daily prayer times for London in your terminal")]
struct Args {
    /// Aladhan API base URL (default: https://api.aladhan.com/v1)
    #[arg(long)]
    base_url: Option<String>,

    /// Log level: error, warn, info, debug, trace or off
    #[arg(long)]
    log_level: Option<String>,
}

#[tokio::main]
async fn main() -> std::io::Result<()> {
    let args = Args::parse();
    dotenv::dotenv().ok();

    // A broken config file should not keep the timetable from showing.
    let (file_config, config_error) = match config::load_config() {
        Ok(c) => (c, None),
        Err(e) => {
            eprintln!("Warning: {e}; using defaults");
            (config::PrayerConfig::default(), Some(e))
        }
    };
    let resolved = config::resolve(
        &file_config,
        &CliOverrides {
            base_url: args.base_url,
            log_level: args.log_level,
        },
    );

    // File logger: the terminal belongs to the UI
    let log_config = ConfigBuilder::new()
        .set_time_format_rfc3339()
        .build();

    if let Ok(log_file) = File::create(&resolved.log_file) {
        let _ = WriteLogger::init(resolved.log_level, log_config, log_file);
    }

    log::info!("Prayer times starting up against {}", resolved.base_url);
    if let Some(e) = config_error {
        log::warn!("Ignoring config file: {}", e);
    }

    prayer_times::tui::run(resolved)
}
