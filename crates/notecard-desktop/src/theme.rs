//! Theme configuration for the desktop app

use std::sync::OnceLock;

pub use notecard_core::models::ThemeMode;

/// Cached system dark mode preference (detected once at startup)
static SYSTEM_DARK_MODE: OnceLock<bool> = OnceLock::new();

/// Resolved theme (light or dark)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ResolvedTheme {
    Light,
    #[default]
    Dark,
}

/// Resolve theme mode to actual light/dark theme
#[must_use]
pub fn resolve_theme(mode: ThemeMode) -> ResolvedTheme {
    match mode {
        ThemeMode::Light => ResolvedTheme::Light,
        ThemeMode::Dark => ResolvedTheme::Dark,
        ThemeMode::System => {
            if *SYSTEM_DARK_MODE.get_or_init(detect_system_dark_mode) {
                ResolvedTheme::Dark
            } else {
                ResolvedTheme::Light
            }
        }
    }
}

/// Next mode for the header toggle
#[must_use]
pub const fn next_mode(mode: ThemeMode) -> ThemeMode {
    match mode {
        ThemeMode::System => ThemeMode::Light,
        ThemeMode::Light => ThemeMode::Dark,
        ThemeMode::Dark => ThemeMode::System,
    }
}

/// Label shown on the header toggle
#[must_use]
pub const fn mode_label(mode: ThemeMode) -> &'static str {
    match mode {
        ThemeMode::System => "System",
        ThemeMode::Light => "Light",
        ThemeMode::Dark => "Dark",
    }
}

// Cards are designed dark-first, so anything we cannot read counts as dark.
fn detect_system_dark_mode() -> bool {
    let detected = platform_prefers_dark();
    tracing::debug!("System dark mode preference: {:?}", detected);
    detected.unwrap_or(true)
}

#[cfg(target_os = "macos")]
fn platform_prefers_dark() -> Option<bool> {
    let output = std::process::Command::new("defaults")
        .args(["read", "-g", "AppleInterfaceStyle"])
        .output()
        .ok()?;
    Some(
        String::from_utf8_lossy(&output.stdout)
            .trim()
            .eq_ignore_ascii_case("dark"),
    )
}

#[cfg(target_os = "windows")]
fn platform_prefers_dark() -> Option<bool> {
    // AppsUseLightTheme is 0x0 in dark mode
    let output = std::process::Command::new("reg")
        .args([
            "query",
            r"HKCU\SOFTWARE\Microsoft\Windows\CurrentVersion\Themes\Personalize",
            "/v",
            "AppsUseLightTheme",
        ])
        .output()
        .ok()?;
    Some(String::from_utf8_lossy(&output.stdout).contains("0x0"))
}

#[cfg(not(any(target_os = "macos", target_os = "windows")))]
fn platform_prefers_dark() -> Option<bool> {
    std::env::var("GTK_THEME")
        .ok()
        .map(|theme| theme.to_lowercase().contains("dark"))
}

/// Color palette for the application
#[derive(Debug, Clone, Copy)]
pub struct ColorPalette {
    pub page_bg: &'static str,
    pub card_bg: &'static str,
    pub card_ring: &'static str,
    pub focus_ring: &'static str,
    pub dialog_bg: &'static str,
    pub overlay: &'static str,
    pub fade: &'static str,
    pub text_primary: &'static str,
    pub text_secondary: &'static str,
    pub text_muted: &'static str,
    pub action_bg: &'static str,
    pub accent: &'static str,
    pub accent_hover: &'static str,
    pub accent_text: &'static str,
    pub link: &'static str,
    pub danger: &'static str,
}

/// Light theme colors
pub const LIGHT_PALETTE: ColorPalette = ColorPalette {
    page_bg: "#f8fafc",
    card_bg: "#e2e8f0",
    card_ring: "#94a3b8",
    focus_ring: "#65a30d",
    dialog_bg: "#f1f5f9",
    overlay: "rgba(15, 23, 42, 0.4)",
    fade: "rgba(255, 255, 255, 0.7)",
    text_primary: "#0f172a",
    text_secondary: "#334155",
    text_muted: "#64748b",
    action_bg: "#cbd5e1",
    accent: "#84cc16",
    accent_hover: "#65a30d",
    accent_text: "#1a2e05",
    link: "#2563eb",
    danger: "#dc2626",
};

/// Dark theme colors
pub const DARK_PALETTE: ColorPalette = ColorPalette {
    page_bg: "#0f172a",
    card_bg: "#1e293b",
    card_ring: "#475569",
    focus_ring: "#a3e635",
    dialog_bg: "#334155",
    overlay: "rgba(0, 0, 0, 0.5)",
    fade: "rgba(0, 0, 0, 0.6)",
    text_primary: "#e2e8f0",
    text_secondary: "#cbd5e1",
    text_muted: "#94a3b8",
    action_bg: "#1e293b",
    accent: "#a3e635",
    accent_hover: "#84cc16",
    accent_text: "#1a2e05",
    link: "#60a5fa",
    danger: "#f87171",
};

impl ResolvedTheme {
    /// Get the color palette for this theme
    #[must_use]
    pub const fn palette(self) -> &'static ColorPalette {
        match self {
            Self::Light => &LIGHT_PALETTE,
            Self::Dark => &DARK_PALETTE,
        }
    }
}
