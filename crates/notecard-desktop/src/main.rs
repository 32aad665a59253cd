//! Notecard Desktop Application
//!
//! Quick notes shown as cards that open, edit and delete in place.

#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

mod app;
mod components;
mod services;
mod state;
mod theme;
mod views;

use dioxus::desktop::{Config, LogicalSize, WindowBuilder};
use tracing_subscriber::EnvFilter;

fn main() {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("notecard=debug")),
        )
        .init();

    tracing::info!("Starting Notecard...");

    let config = Config::new().with_window(
        WindowBuilder::new()
            .with_title("Notecard")
            .with_inner_size(LogicalSize::new(1100.0, 760.0)),
    );

    dioxus::LaunchBuilder::new()
        .with_cfg(config)
        .launch(app::App);
}
