use crate::QuizApp;
use crate::ui::helpers::{option_button, tr};
use crate::ui::layout::{centered_panel, two_button_row};
use egui::{Context, ProgressBar};
use std::time::Instant;

pub fn ui_quiz(app: &mut QuizApp, ctx: &Context) {
    let lang = app.session.language();
    // Copia de la pregunta actual para no retener el préstamo de la sesión
    // mientras se despachan intents.
    let Some(question) = app.session.current_question().cloned() else {
        return;
    };

    centered_panel(ctx, 460.0, 560.0, |ui| {
        let panel_width = ui.available_width().min(560.0);

        ui.vertical_centered(|ui| {
            // Cabecera de progreso
            ui.label(format!(
                "{} {} / {}",
                tr(lang, "Câu hỏi", "Question"),
                app.session.current_index() + 1,
                app.session.total()
            ));
            ui.add(ProgressBar::new(app.session.progress_fraction()).desired_width(panel_width));
            ui.add_space(12.0);

            ui.heading(question.prompt.get(lang));
            ui.add_space(12.0);

            // Opciones en su orden de presentación
            for option in &question.options {
                let state = app.session.option_display_state(&option.key);
                if option_button(ui, panel_width, &option.key, option.text.get(lang), state) {
                    app.session.select_option(&option.key);
                }
                ui.add_space(4.0);
            }

            ui.add_space(8.0);

            if app.session.is_answered() {
                // Explicación + navegación
                ui.group(|ui| {
                    ui.set_width(panel_width);
                    ui.strong(tr(lang, "Giải thích:", "Explanation:"));
                    ui.label(&question.explanation);
                });
                ui.add_space(8.0);

                let next_label = if app.session.is_last() {
                    tr(lang, "Xem kết quả", "View results")
                } else {
                    tr(lang, "Câu tiếp theo", "Next question")
                };
                let (back, forward) = two_button_row(
                    ui,
                    panel_width,
                    tr(lang, "Câu trước", "Previous"),
                    app.session.current_index() > 0,
                    next_label,
                    true,
                );
                if back {
                    app.session.prev();
                }
                if forward {
                    if app.session.is_last() {
                        app.show_results = true;
                    } else {
                        app.session.next();
                    }
                }
            } else {
                let (back, submit) = two_button_row(
                    ui,
                    panel_width,
                    tr(lang, "Câu trước", "Previous"),
                    app.session.current_index() > 0,
                    tr(lang, "Trả lời", "Submit"),
                    app.session.pending_selection().is_some(),
                );
                if back {
                    app.session.prev();
                }
                if submit {
                    app.session.submit(Instant::now());
                }
            }
        });
    });
}
