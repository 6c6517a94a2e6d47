use super::*;
use crate::model::OptionDisplay;
use std::time::{Duration, Instant};

impl QuizSession {
    pub fn phase(&self) -> &Phase {
        &self.phase
    }

    pub fn language(&self) -> Language {
        self.language
    }

    pub fn total(&self) -> usize {
        self.questions.len()
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    pub fn current_question(&self) -> Option<&Question> {
        self.questions.get(self.current_index)
    }

    pub fn is_last(&self) -> bool {
        !self.questions.is_empty() && self.current_index + 1 == self.questions.len()
    }

    pub fn pending_selection(&self) -> Option<&str> {
        self.pending_selection.as_deref()
    }

    /// ¿Tiene la pregunta actual una respuesta consolidada?
    pub fn is_answered(&self) -> bool {
        self.answers.contains_key(&self.current_index)
    }

    pub fn submitted_key(&self) -> Option<&str> {
        self.answers.get(&self.current_index).map(String::as_str)
    }

    pub fn answered_correctly(&self) -> bool {
        match (self.current_question(), self.submitted_key()) {
            (Some(q), Some(key)) => q.correct_answer == key,
            _ => false,
        }
    }

    pub fn answers(&self) -> &BTreeMap<usize, String> {
        &self.answers
    }

    pub fn auto_advance_armed(&self) -> bool {
        self.auto_advance.is_some()
    }

    /// Tiempo que falta para el auto-avance armado, si lo hay. La capa de
    /// presentación lo usa para pedir el repintado justo a tiempo.
    pub fn auto_advance_remaining(&self, now: Instant) -> Option<Duration> {
        self.auto_advance.map(|timer| timer.remaining(now))
    }

    /// Estado visual de una opción de la pregunta actual, recalculado bajo
    /// demanda: sin respuesta, la selección provisional va marcada y el
    /// resto neutro; con respuesta, la correcta en verde, la enviada (si
    /// falló) en rojo y las demás deshabilitadas.
    pub fn option_display_state(&self, key: &str) -> OptionDisplay {
        if !self.is_answered() {
            if self.pending_selection.as_deref() == Some(key) {
                OptionDisplay::Selected
            } else {
                OptionDisplay::Neutral
            }
        } else {
            let correct = self.current_question().map(|q| q.correct_answer.as_str());
            if correct == Some(key) {
                OptionDisplay::Correct
            } else if self.submitted_key() == Some(key) {
                OptionDisplay::Incorrect
            } else {
                OptionDisplay::Disabled
            }
        }
    }

    /// Respuestas almacenadas que coinciden con la clave correcta de su
    /// pregunta. Cero con el mapa vacío.
    pub fn score(&self) -> usize {
        self.answers
            .iter()
            .filter(|(idx, key)| {
                self.questions
                    .get(**idx)
                    .map(|q| q.correct_answer == **key)
                    .unwrap_or(false)
            })
            .count()
    }

    pub fn progress_fraction(&self) -> f32 {
        if self.questions.is_empty() {
            return 0.0;
        }
        (self.current_index + 1) as f32 / self.questions.len() as f32
    }
}
