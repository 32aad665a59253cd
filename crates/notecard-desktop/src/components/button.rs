//! Button component

use dioxus::prelude::*;

use crate::state::AppState;

/// Visual weight of a button
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ButtonVariant {
    /// Filled accent, for the one action that commits
    Primary,
    /// Muted full-width action row
    #[default]
    Secondary,
    /// No background
    Ghost,
}

/// Themed button. Children are the label.
#[component]
pub fn Button(
    #[props(default)] variant: ButtonVariant,
    onclick: Option<EventHandler<MouseEvent>>,
    #[props(into, default)] style: String,
    #[props(default)] disabled: bool,
    children: Element,
) -> Element {
    let state = use_context::<AppState>();
    let colors = (state.theme)().palette();

    let (background, color) = match variant {
        ButtonVariant::Primary => (colors.accent, colors.accent_text),
        ButtonVariant::Secondary => (colors.action_bg, colors.text_secondary),
        ButtonVariant::Ghost => ("transparent", colors.text_muted),
    };
    let hover = match variant {
        ButtonVariant::Primary => colors.accent_hover,
        _ => background,
    };
    let mut hovered = use_signal(|| false);
    let current_bg = if hovered() && !disabled { hover } else { background };

    rsx! {
        button {
            r#type: "button",
            class: "button",
            disabled,
            style: "
                border: none;
                outline: none;
                cursor: pointer;
                font-size: 14px;
                font-weight: 500;
                background: {current_bg};
                color: {color};
                {style}
            ",
            onmouseenter: move |_| hovered.set(true),
            onmouseleave: move |_| hovered.set(false),
            onclick: move |evt| {
                if let Some(handler) = onclick {
                    handler.call(evt);
                }
            },
            {children}
        }
    }
}
