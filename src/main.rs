// SPDX-License-Identifier: MPL-2.0
use iced_gallery::app::{self, paths, Flags};
use iced_gallery::config::{self, ViewerConfig};
use iced_gallery::directory_scanner;
use iced_gallery::ui::state::AutoplayDelay;
use std::ffi::OsString;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

const HELP: &str = "\
iced_gallery - image gallery viewer

USAGE:
  iced_gallery [OPTIONS] [PATH]...

ARGS:
  [PATH]...              Image files or directories to show

OPTIONS:
  --autoplay             Start the slideshow
  --delay-ms <MS>        Slideshow delay in milliseconds (clamped to 500..=600000)
  --fullscreen           Open the viewer in fullscreen
  --config-dir <DIR>     Directory holding settings.toml
  -h, --help             Print this help
";

fn main() -> iced::Result {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(fmt::layer())
        .init();

    let mut args = pico_args::Arguments::from_env();

    if args.contains(["-h", "--help"]) {
        print!("{HELP}");
        return Ok(());
    }

    let autoplay = args.contains("--autoplay");
    let fullscreen = args.contains("--fullscreen");
    let delay_ms: Option<u64> = match args.opt_value_from_str("--delay-ms") {
        Ok(value) => value,
        Err(err) => {
            tracing::warn!("Ignoring --delay-ms: {err}");
            None
        }
    };
    let config_dir: Option<String> = match args.opt_value_from_str("--config-dir") {
        Ok(value) => value,
        Err(err) => {
            tracing::warn!("Ignoring --config-dir: {err}");
            None
        }
    };
    paths::init_cli_overrides(config_dir);

    let (config, warning) = config::load();
    if let Some(warning) = warning {
        tracing::warn!("Using default preferences: {warning}");
    }

    let mut viewer = ViewerConfig::from(&config);
    if autoplay {
        viewer.auto_play = true;
    }
    if let Some(ms) = delay_ms {
        viewer.autoplay_delay = AutoplayDelay::new(ms);
    }

    let inputs: Vec<OsString> = args.finish();
    let images = match directory_scanner::collect_images(&inputs) {
        Ok(images) => images,
        Err(err) => {
            tracing::warn!("Failed to collect images: {err}");
            Vec::new()
        }
    };

    app::run(Flags {
        images,
        config,
        viewer,
        fullscreen,
    })
}
