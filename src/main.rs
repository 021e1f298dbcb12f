//! Eye/head mouse application: blink clicks and head-position cursor control.

use anyhow::Result;
use clap::Parser;
use eye_mouse::app::{AppConfig, EyeMouseApp, VideoSource};
use log::info;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Camera index to use
    #[arg(long, default_value = "0")]
    cam: i32,

    /// Video file to process instead of a camera
    #[arg(short, long)]
    video: Option<String>,

    /// Disable cursor movement and click injection (preview only)
    #[arg(long)]
    no_cursor: bool,

    /// Run without the preview window
    #[arg(long)]
    no_gui: bool,

    /// Launch an on-screen keyboard at startup
    #[arg(long)]
    osk: bool,

    /// Enable debug output
    #[arg(short, long)]
    debug: bool,

    /// Path to configuration file (YAML format)
    #[arg(short = 'C', long)]
    config: Option<String>,
}

fn main() -> Result<()> {
    let args = Args::parse();

    if args.debug {
        env_logger::init_from_env(env_logger::Env::new().default_filter_or("debug"));
    } else {
        env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));
    }

    info!("Eye Mouse");

    let config = if let Some(config_path) = &args.config {
        info!("Loading configuration from: {}", config_path);
        match eye_mouse::config::Config::from_file(config_path) {
            Ok(cfg) => cfg,
            Err(e) => {
                log::warn!("Failed to load config file: {}. Using defaults.", e);
                eye_mouse::config::Config::default()
            }
        }
    } else {
        eye_mouse::config::Config::default()
    };
    config.validate()?;

    let app_config = AppConfig {
        video_source: if let Some(video_path) = args.video {
            VideoSource::File(video_path)
        } else {
            VideoSource::Camera(args.cam)
        },
        gui: !args.no_gui,
        cursor_enabled: !args.no_cursor && config.cursor.enabled,
        launch_osk: args.osk,
    };

    let mut app = EyeMouseApp::new(app_config, config)?;
    app.run()?;

    Ok(())
}
