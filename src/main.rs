#![allow(non_snake_case)]

mod app;
mod components;
pub mod context;
mod pages;
mod theme;

use std::io::IsTerminal;
use std::path::PathBuf;
use std::sync::OnceLock;

use clap::Parser;
use dioxus::desktop::{Config, WindowBuilder};
use storefront_core::logging::LoggingBuilder;
use storefront_core::{Locale, StorefrontConfig, UiText};

/// Global configuration, set from the command line
static CONFIG: OnceLock<StorefrontConfig> = OnceLock::new();

/// Get the active configuration (defaults if main has not set one)
pub fn get_config() -> StorefrontConfig {
    CONFIG.get().cloned().unwrap_or_default()
}

/// SportZone - demo sports equipment storefront
#[derive(Parser, Debug)]
#[command(name = "storefront-desktop")]
#[command(about = "SportZone - demo sports equipment storefront")]
struct Args {
    /// JSON configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Display language (en, vi); overrides the configuration file
    #[arg(short, long)]
    locale: Option<Locale>,

    /// Simulated request latency in milliseconds; overrides the configuration file
    #[arg(long)]
    submit_delay_ms: Option<u64>,

    /// Log filter directives (e.g. "storefront=debug"); RUST_LOG takes precedence
    #[arg(long)]
    log_filter: Option<String>,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let mut logging = LoggingBuilder::new();
    if let Some(filter) = args.log_filter.as_deref() {
        logging = logging.with_filter(filter);
    }
    // Plain output when piped to a file
    if !std::io::stdout().is_terminal() {
        logging = logging.no_ansi();
    }
    logging.init()?;

    let mut config = match args.config.as_deref() {
        Some(path) => StorefrontConfig::load(path)?,
        None => StorefrontConfig::default(),
    };
    if let Some(locale) = args.locale {
        config.locale = locale;
    }
    if let Some(delay) = args.submit_delay_ms {
        config.submit_delay_ms = delay;
    }
    config.validate()?;

    let title = config.locale.text(UiText::Brand).to_string();
    tracing::info!(
        locale = %config.locale,
        submit_delay_ms = config.submit_delay_ms,
        "Starting storefront"
    );

    // Store configuration globally
    let _ = CONFIG.set(config);

    let window_config = Config::new().with_window(
        WindowBuilder::new()
            .with_title(&title)
            .with_inner_size(dioxus::desktop::LogicalSize::new(1100.0, 900.0))
            .with_resizable(true),
    );

    dioxus::LaunchBuilder::desktop()
        .with_cfg(window_config)
        .launch(app::App);

    Ok(())
}
