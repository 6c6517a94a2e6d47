// src/ui/helpers.rs
use crate::model::{Language, OptionDisplay};
use egui::{Button, Color32, Ui, Vec2};

/// Selector de textos fijos de la interfaz según el idioma activo.
pub fn tr<'a>(lang: Language, vi: &'a str, en: &'a str) -> &'a str {
    match lang {
        Language::Vi => vi,
        Language::En => en,
    }
}

/// Botón de opción a ancho completo, coloreado según su estado visual.
/// Solo es clicable mientras la pregunta sigue sin responder.
pub fn option_button(
    ui: &mut Ui,
    width: f32,
    key: &str,
    text: &str,
    state: OptionDisplay,
) -> bool {
    let mut button = Button::new(format!("{key}.  {text}")).min_size(Vec2::new(width, 36.0));

    button = match state {
        OptionDisplay::Selected => button.fill(ui.visuals().selection.bg_fill),
        OptionDisplay::Correct => button.fill(Color32::DARK_GREEN),
        OptionDisplay::Incorrect => button.fill(Color32::DARK_RED),
        OptionDisplay::Neutral | OptionDisplay::Disabled => button,
    };

    let enabled = matches!(state, OptionDisplay::Neutral | OptionDisplay::Selected);
    ui.add_enabled(enabled, button).clicked()
}
