use bookchat::core::config::{BookchatConfig, load_config, resolve};
use bookchat::tui;
use clap::Parser;
use simplelog::{ConfigBuilder, LevelFilter, WriteLogger};
use std::fs::File;

#[derive(Parser)]
#[command(name = "bookchat", about = "Terminal chat client for the book-library assistant")]
struct Args {
    /// Chatbot server base URL (overrides config file and environment)
    #[arg(short, long)]
    base_url: Option<String>,
}

#[tokio::main]
async fn main() -> std::io::Result<()> {
    let args = Args::parse();
    dotenv::dotenv().ok();

    // Initialize file logger - writes to bookchat.log in current directory
    let log_config = ConfigBuilder::new()
        .set_time_format_rfc3339()
        .build();

    if let Ok(log_file) = File::create("bookchat.log") {
        let _ = WriteLogger::init(LevelFilter::Debug, log_config, log_file);
    }

    let file_config = match load_config() {
        Ok(c) => c,
        Err(e) => {
            log::warn!("Ignoring config file: {}", e);
            BookchatConfig::default()
        }
    };
    let config = resolve(&file_config, args.base_url.as_deref());
    log::info!("Bookchat starting up against {}", config.base_url);

    tui::run(config)
}
