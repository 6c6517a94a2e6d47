use crate::QuizApp;
use crate::ui::helpers::tr;
use egui::{Button, CentralPanel, Context, Frame, Ui};

/// Barra superior: toggle de idioma (muestra el idioma al que se cambia,
/// como el original) y reinicio completo.
pub fn top_panel(app: &mut QuizApp, ctx: &Context) {
    egui::TopBottomPanel::top("menu_panel").show(ctx, |ui| {
        ui.horizontal_centered(|ui| {
            let lang = app.session.language();

            if ui.button(tr(lang, "EN", "VI")).clicked() {
                app.session.toggle_language();
                ctx.request_repaint();
            }

            ui.with_layout(
                egui::Layout::right_to_left(egui::Align::Center),
                |ui| {
                    if ui.button(tr(lang, "🔄 Làm lại", "🔄 Restart")).clicked() {
                        app.restart();
                    }
                },
            );
        });
    });
}

/// Panel centrado verticalmente, con un tamaño de contenido máximo y un
/// bloque interior `inner`.
pub fn centered_panel(
    ctx: &Context,
    est_height: f32,
    max_width: f32,
    inner: impl FnOnce(&mut Ui),
) {
    CentralPanel::default().show(ctx, |ui| {
        // Espacio vertical para centrar
        let extra = ((ui.available_height() - est_height) / 2.0).max(0.0);
        ui.add_space(extra);
        Frame::default()
            .fill(ui.visuals().window_fill())
            .inner_margin(egui::Margin::symmetric(16, 16))
            .show(ui, |ui| {
                let w = ui.available_width().min(max_width);
                ui.set_width(w);
                inner(ui);
            });
        ui.add_space(extra);
    });
}

/// Dibuja dos botones del mismo tamaño en una fila, centrados en el ancho
/// dado. Devuelve (clic izquierdo, clic derecho).
pub fn two_button_row(
    ui: &mut Ui,
    panel_width: f32,
    left_label: &str,
    left_enabled: bool,
    right_label: &str,
    right_enabled: bool,
) -> (bool, bool) {
    let btn_w = (panel_width - 8.0) / 2.0;
    let mut clicked_left = false;
    let mut clicked_right = false;
    ui.horizontal(|ui| {
        ui.add_space((ui.available_width() - panel_width) / 2.0);
        clicked_left = ui
            .add_enabled(
                left_enabled,
                Button::new(left_label).min_size([btn_w, 36.0].into()),
            )
            .clicked();
        clicked_right = ui
            .add_enabled(
                right_enabled,
                Button::new(right_label).min_size([btn_w, 36.0].into()),
            )
            .clicked();
    });
    (clicked_left, clicked_right)
}
