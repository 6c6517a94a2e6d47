pub mod helpers;
pub mod layout;
pub mod views;

use crate::QuizApp;
use crate::model::Phase;
use eframe::{App, Frame};
use egui::Context;
use std::time::{Duration, Instant};

impl App for QuizApp {
    fn update(&mut self, ctx: &Context, _frame: &mut Frame) {
        // Intents diferidos: resultado de la carga y timer de auto-avance.
        self.poll_load_result();
        let now = Instant::now();
        self.session.tick(now);

        // Mientras el auto-avance está armado, repintar justo a tiempo para
        // dispararlo; durante la carga, sondear el canal periódicamente.
        if let Some(remaining) = self.session.auto_advance_remaining(now) {
            ctx.request_repaint_after(remaining);
        } else if self.session.phase() == &Phase::Loading {
            ctx.request_repaint_after(Duration::from_millis(100));
        }

        layout::top_panel(self, ctx);

        // Dispatch por fase a las vistas
        match self.session.phase().clone() {
            Phase::Loading => views::loading::ui_loading(self, ctx),
            Phase::LoadFailed(message) => views::error::ui_error(self, ctx, &message),
            Phase::Ready => {
                if self.show_results {
                    views::results::ui_results(self, ctx);
                } else {
                    views::quiz::ui_quiz(self, ctx);
                }
            }
        }
    }
}
