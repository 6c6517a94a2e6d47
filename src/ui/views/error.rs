use crate::QuizApp;
use crate::ui::helpers::tr;
use crate::ui::layout::centered_panel;
use egui::{Button, Context, RichText, Vec2};

/// Fase terminal de carga fallida: mensaje y un único camino de salida,
/// reintentar mediante reinicio.
pub fn ui_error(app: &mut QuizApp, ctx: &Context, message: &str) {
    let lang = app.session.language();
    centered_panel(ctx, 200.0, 480.0, |ui| {
        ui.vertical_centered(|ui| {
            ui.heading(
                RichText::new(tr(lang, "Lỗi tải dữ liệu", "Failed to load data"))
                    .color(egui::Color32::LIGHT_RED),
            );
            ui.add_space(8.0);
            ui.label(message);
            ui.add_space(16.0);

            let retry = Button::new(tr(lang, "Thử lại", "Try again"))
                .min_size(Vec2::new(160.0, 36.0));
            if ui.add(retry).clicked() {
                app.restart();
            }
        });
    });
}
