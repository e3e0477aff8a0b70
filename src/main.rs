use tracing_subscriber::EnvFilter;

mod app;
mod config;
mod domain;
mod infra;
mod platform;
mod ui;
mod usecase;


use crate::app::App;
use crate::config::{load_settings, Settings};

/// Rows requested per page; also the divisor for the page count.
pub const PAGE_SIZE: u32 = 10;

#[cfg_attr(target_arch = "wasm32", allow(dead_code))]
fn init_tracing(settings: &Settings) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&settings.log_filter))
        .unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}

#[cfg(feature = "desktop")]
fn main() {
    let settings = load_settings();
    init_tracing(&settings);
    tracing::info!(api_base_url = %settings.api_base_url, "starting employee details");

    let mut desktop_cfg = dioxus::desktop::Config::new()
        .with_window(dioxus::desktop::WindowBuilder::new().with_title("Employee Details"));
    match platform::desktop::webview::default_webview_data_dir() {
        Ok(dir) => desktop_cfg = desktop_cfg.with_data_directory(dir),
        Err(err) => tracing::warn!("using default webview data dir: {err:#}"),
    }

    dioxus::LaunchBuilder::desktop()
        .with_cfg(desktop_cfg)
        .with_context(settings)
        .launch(App);
}

#[cfg(all(feature = "web", not(feature = "desktop")))]
fn main() {
    let settings = load_settings();
    #[cfg(not(target_arch = "wasm32"))]
    init_tracing(&settings);

    dioxus::LaunchBuilder::web()
        .with_context(settings)
        .launch(App);
}

#[cfg(all(feature = "mobile", not(feature = "desktop"), not(feature = "web")))]
fn main() {
    let settings = load_settings();
    init_tracing(&settings);

    dioxus::LaunchBuilder::mobile()
        .with_context(settings)
        .launch(App);
}
