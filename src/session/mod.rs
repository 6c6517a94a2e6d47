use crate::data::DataError;
use crate::model::{Language, Phase, Question};
use crate::storage::ProgressStore;
use crate::timer::AutoAdvance;
use std::collections::BTreeMap;

// Submódulos
pub mod actions;
pub mod navigation;
pub mod persist;
pub mod queries;

/// Sesión de quiz: única dueña del estado en memoria y de las reglas de
/// transición. La construye el controlador al arrancar y nadie más la crea
/// ni la destruye. La presentación solo envía intents y lee las queries.
pub struct QuizSession {
    pub(crate) phase: Phase,
    pub(crate) questions: Vec<Question>,
    pub(crate) current_index: usize,
    pub(crate) answers: BTreeMap<usize, String>,
    pub(crate) pending_selection: Option<String>,
    pub(crate) language: Language,
    /// `Some` ⇔ hay un auto-avance armado. Como mucho uno a la vez.
    pub(crate) auto_advance: Option<AutoAdvance>,
    pub(crate) store: Box<dyn ProgressStore>,
}

impl QuizSession {
    pub fn new(store: Box<dyn ProgressStore>) -> Self {
        Self {
            phase: Phase::Loading,
            questions: Vec::new(),
            current_index: 0,
            answers: BTreeMap::new(),
            pending_selection: None,
            language: Language::default(),
            auto_advance: None,
            store,
        }
    }

    /// Resultado de la carga única del repositorio. En éxito rehidrata el
    /// progreso guardado y pasa a `Ready`; en fallo queda en la fase
    /// terminal `LoadFailed` hasta un reinicio explícito.
    pub fn finish_load(&mut self, result: Result<Vec<Question>, DataError>) {
        match result {
            Ok(questions) => {
                self.questions = questions;
                self.rehydrate();
                self.phase = Phase::Ready;
            }
            Err(err) => {
                self.questions.clear();
                self.phase = Phase::LoadFailed(err.to_string());
            }
        }
    }
}
