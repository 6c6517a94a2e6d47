use crate::QuizApp;
use crate::ui::helpers::tr;
use crate::ui::layout::centered_panel;
use egui::Context;

pub fn ui_loading(app: &mut QuizApp, ctx: &Context) {
    let lang = app.session.language();
    centered_panel(ctx, 120.0, 420.0, |ui| {
        ui.vertical_centered(|ui| {
            ui.spinner();
            ui.add_space(8.0);
            ui.heading(tr(lang, "Đang tải câu hỏi...", "Loading questions..."));
        });
    });
}
