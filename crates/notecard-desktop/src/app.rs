//! Main application component

use dioxus::prelude::*;

use notecard_core::models::Settings;
use notecard_core::NoteBook;

use crate::services::StorageService;
use crate::state::AppState;
use crate::theme::{resolve_theme, ResolvedTheme, ThemeMode};
use crate::views::Home;

/// Root application component
#[component]
pub fn App() -> Element {
    // State signals
    let mut notebook = use_signal(NoteBook::new);
    let search_query = use_signal(String::new);
    let mut settings = use_signal(Settings::default);
    let mut theme = use_signal(|| resolve_theme(ThemeMode::System));
    let mut storage: Signal<Option<StorageService>> = use_signal(|| None);
    let mut loaded = use_signal(|| false);

    // Load settings and notes once
    use_future(move || async move {
        let service = StorageService::from_env();

        match service.load_settings().await {
            Ok(loaded_settings) => {
                theme.set(resolve_theme(loaded_settings.theme));
                settings.set(loaded_settings);
            }
            Err(e) => {
                tracing::error!("Failed to load settings, using defaults: {}", e);
            }
        }

        match service.load_notes().await {
            Ok(book) => {
                tracing::info!("Loaded {} notes", book.len());
                notebook.set(book);
                storage.set(Some(service));
            }
            Err(e) => {
                // Leave storage unset so an unreadable file is never overwritten
                tracing::error!("Failed to load notes, running in memory only: {}", e);
            }
        }

        loaded.set(true);
    });

    use_context_provider(|| AppState {
        notebook,
        search_query,
        settings,
        theme,
        storage,
        loaded,
    });

    let current_theme = theme();
    let colors = current_theme.palette();
    let current_settings = settings();
    let theme_attr = match current_theme {
        ResolvedTheme::Light => "light",
        ResolvedTheme::Dark => "dark",
    };

    rsx! {
        div {
            class: "app-container",
            "data-theme": "{theme_attr}",
            style: "
                min-height: 100vh;
                font-family: {current_settings.font_family}, system-ui, -apple-system, sans-serif;
                font-size: {current_settings.font_size}px;
                background: {colors.page_bg};
                color: {colors.text_primary};
            ",
            Home {}
        }
    }
}
