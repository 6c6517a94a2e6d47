use crate::data::{DataError, QuestionService};
use crate::model::Question;
use crate::session::QuizSession;
use crate::storage::FileStore;
use std::sync::mpsc::{Receiver, channel};
use std::thread;

type LoadResult = Result<Vec<Question>, DataError>;

/// Controlador de la aplicación: posee la sesión (nada de estado global) y
/// el canal por el que llega el resultado de la carga remota. La capa de
/// presentación recibe el controlador por referencia y despacha intents.
pub struct QuizApp {
    pub session: QuizSession,
    /// Pantalla de resultados: decisión puramente de presentación, la
    /// máquina de estados no tiene fase de resultados.
    pub show_results: bool,
    service: QuestionService,
    load_rx: Option<Receiver<LoadResult>>,
}

impl QuizApp {
    pub fn new() -> Self {
        Self::with_service(QuestionService::new())
    }

    pub fn with_service(service: QuestionService) -> Self {
        let session = QuizSession::new(Box::new(FileStore::open_default()));
        let mut app = Self {
            session,
            show_results: false,
            service,
            load_rx: None,
        };
        app.spawn_load();
        app
    }

    /// Lanza la única petición al repositorio en un hilo aparte. El hilo
    /// solo acarrea el resultado: toda transición de estado ocurre en el
    /// hilo de la interfaz al consumirlo en `poll_load_result`.
    fn spawn_load(&mut self) {
        let (tx, rx) = channel();
        self.load_rx = Some(rx);

        let service = self.service.clone();
        thread::spawn(move || {
            let _ = tx.send(service.load());
        });
    }

    /// Consume el resultado de la carga si ya está disponible.
    pub fn poll_load_result(&mut self) {
        let maybe_result = self
            .load_rx
            .as_ref()
            .and_then(|rx| rx.try_recv().ok());

        if let Some(result) = maybe_result {
            self.load_rx = None;
            self.session.finish_load(result);
        }
    }

    /// Reinicio completo: resetea la sesión (que borra lo persistido) y
    /// relanza la carga del banco.
    pub fn restart(&mut self) {
        self.session.restart();
        self.show_results = false;
        self.spawn_load();
    }
}

impl Default for QuizApp {
    fn default() -> Self {
        Self::new()
    }
}
