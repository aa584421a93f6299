//! Hand gesture analysis over a stream of landmark frames.

use anyhow::{Context, Result};
use clap::Parser;
use hand_gesture::{
    app::{AppConfig, GestureApp, InputSource},
    config::{Config, EXAMPLE_CONFIG},
    constants::{DEFAULT_CANVAS_HEIGHT, DEFAULT_CANVAS_WIDTH},
};
use log::info;
use std::fs::File;
use std::io::{self, BufReader};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// JSON lines file of frames (reads stdin when omitted)
    #[arg(short, long)]
    input: Option<PathBuf>,

    /// Path to configuration file (YAML format)
    #[arg(short = 'C', long)]
    config: Option<PathBuf>,

    /// Canvas width used for world projection
    #[arg(long, default_value_t = DEFAULT_CANVAS_WIDTH)]
    width: f64,

    /// Canvas height used for world projection
    #[arg(long, default_value_t = DEFAULT_CANVAS_HEIGHT)]
    height: f64,

    /// Pose filter (none, exponential[:alpha], moving_average[:window])
    #[arg(short, long)]
    filter: Option<String>,

    /// Print an example configuration file and exit
    #[arg(long)]
    print_config: bool,

    /// Enable debug output
    #[arg(short, long)]
    debug: bool,
}

fn main() -> Result<()> {
    // Parse command line arguments
    let args = Args::parse();

    // Initialize logger
    if args.debug {
        env_logger::init_from_env(env_logger::Env::new().default_filter_or("debug"));
    } else {
        env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));
    }

    if args.print_config {
        print!("{EXAMPLE_CONFIG}");
        return Ok(());
    }

    info!("Hand Gesture Analysis");

    // Load configuration if provided
    let config = if let Some(config_path) = &args.config {
        info!("Loading configuration from: {}", config_path.display());
        match Config::from_file(config_path) {
            Ok(cfg) => cfg,
            Err(e) => {
                log::warn!("Failed to load config file: {}. Using defaults.", e);
                Config::default()
            }
        }
    } else {
        Config::default()
    };

    let app_config = AppConfig {
        input: args.input.map_or(InputSource::Stdin, InputSource::File),
        canvas_width: args.width,
        canvas_height: args.height,
        filter_type: args.filter,
        config,
    };

    let mut app = GestureApp::new(&app_config)?;
    let stdout = io::stdout().lock();

    match &app_config.input {
        InputSource::Stdin => {
            app.run(io::stdin().lock(), stdout)?;
        }
        InputSource::File(path) => {
            let file = File::open(path).with_context(|| format!("Failed to open {}", path.display()))?;
            app.run(BufReader::new(file), stdout)?;
        }
    }

    Ok(())
}
