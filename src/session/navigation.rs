use super::*;

impl QuizSession {
    /// Avanza a la siguiente pregunta. No-op en la última: llegar al final
    /// no transiciona a ningún estado de resultados.
    pub fn next(&mut self) {
        if self.phase != Phase::Ready {
            return;
        }
        if self.current_index + 1 >= self.questions.len() {
            return;
        }
        // Cancela cualquier auto-avance pendiente antes de mover el índice,
        // para que un timer viejo no dispare contra la pregunta nueva.
        self.auto_advance = None;
        self.current_index += 1;
        self.pending_selection = None;
        self.persist_index();
    }

    /// Retrocede una pregunta. Las ya respondidas se revisitan en estado
    /// respondido, con su selección guardada y sin posibilidad de edición.
    pub fn prev(&mut self) {
        if self.phase != Phase::Ready || self.current_index == 0 {
            return;
        }
        self.auto_advance = None;
        self.current_index -= 1;
        self.pending_selection = None;
        self.persist_index();
    }

    /// Reinicio completo: borra el estado en memoria y las dos claves
    /// persistidas y vuelve a `Loading`. Es el único intent permitido en
    /// cualquier fase; el controlador relanza la carga del repositorio.
    /// El idioma no se toca.
    pub fn restart(&mut self) {
        self.auto_advance = None;
        self.questions.clear();
        self.current_index = 0;
        self.answers.clear();
        self.pending_selection = None;
        self.clear_persisted();
        self.phase = Phase::Loading;
    }

    /// Alterna VI ↔ EN sin tocar ningún otro campo.
    pub fn toggle_language(&mut self) {
        self.language = self.language.toggled();
    }
}
