use super::*;
use std::time::Instant;

impl QuizSession {
    /// Marca una opción como selección provisional. La última llamada gana.
    /// No-op si la pregunta ya está respondida, si la clave no pertenece a
    /// la pregunta actual o si la sesión no está lista.
    pub fn select_option(&mut self, key: &str) {
        if self.phase != Phase::Ready || self.is_answered() {
            return;
        }
        let valid = self
            .current_question()
            .map(|q| q.option(key).is_some())
            .unwrap_or(false);
        if !valid {
            return;
        }
        self.pending_selection = Some(key.to_string());
    }

    /// Consolida la selección provisional como respuesta definitiva de la
    /// pregunta actual. Si resulta correcta, arma el auto-avance con el
    /// retardo fijo. No-op sin selección o sobre una pregunta ya respondida.
    pub fn submit(&mut self, now: Instant) {
        if self.phase != Phase::Ready || self.is_answered() {
            return;
        }
        let Some(key) = self.pending_selection.take() else {
            return;
        };

        self.answers.insert(self.current_index, key);
        self.persist_answers();

        if self.answered_correctly() {
            self.auto_advance = Some(AutoAdvance::arm(now));
        }
    }

    /// Dispara el auto-avance pendiente si ya venció su retardo. El handle
    /// se suelta antes de avanzar: el timer solo puede mover el índice una
    /// vez, aunque `next()` acabe en no-op en la última pregunta.
    pub fn tick(&mut self, now: Instant) {
        let due = self
            .auto_advance
            .map(|timer| timer.is_due(now))
            .unwrap_or(false);
        if due {
            self.auto_advance = None;
            self.next();
        }
    }
}
