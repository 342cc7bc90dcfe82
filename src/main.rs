use clap::Parser;
use tiltwatch::app::App;
use tiltwatch::config::Config;
use tokio::signal;
use tracing::{error, info};

/// League of Legends loss-streak and live-game monitoring bot.
#[derive(Parser)]
#[command(version, about)]
struct Args {
    /// Path to the configuration file.
    #[arg(long, default_value = "tiltwatch.toml")]
    config: String,
}

#[tokio::main]
async fn main() {
    let _ = dotenvy::dotenv();
    let args = Args::parse();

    let config = match Config::load(&args.config) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to load config: {e}");
            std::process::exit(1);
        }
    };

    config.logging.init();
    info!("tiltwatch starting");

    tokio::select! {
        result = App::run(config) => {
            if let Err(e) = result {
                error!(error = %e, "Fatal error");
                std::process::exit(1);
            }
        }
        _ = signal::ctrl_c() => {
            info!("Shutdown signal received");
        }
    }

    info!("tiltwatch stopped");
}
