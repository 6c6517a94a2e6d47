use crate::QuizApp;
use crate::ui::helpers::tr;
use crate::ui::layout::centered_panel;
use egui::{Button, Context, RichText, Vec2};

/// Tarjeta final con la puntuación. Se llega solo con el botón explícito de
/// la última pregunta respondida; la sesión no tiene fase de resultados.
pub fn ui_results(app: &mut QuizApp, ctx: &Context) {
    let lang = app.session.language();
    let score = app.session.score();
    let total = app.session.total();

    centered_panel(ctx, 220.0, 420.0, |ui| {
        ui.vertical_centered(|ui| {
            ui.heading(tr(lang, "Hoàn thành!", "Finished!"));
            ui.add_space(10.0);
            ui.label(
                RichText::new(format!(
                    "{} {score} / {total}",
                    tr(lang, "Điểm của bạn là:", "Your score is:")
                ))
                .heading(),
            );
            ui.add_space(20.0);

            let btn_w = 160.0;
            let review = Button::new(tr(lang, "Xem lại", "Review"))
                .min_size(Vec2::new(btn_w, 36.0));
            if ui.add(review).clicked() {
                app.show_results = false;
            }
            ui.add_space(5.0);
            let restart = Button::new(tr(lang, "Làm lại", "Restart"))
                .min_size(Vec2::new(btn_w, 36.0));
            if ui.add(restart).clicked() {
                app.restart();
            }
        });
    });
}
