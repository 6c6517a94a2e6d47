use super::*;
use crate::storage::{KEY_CURRENT_INDEX, KEY_USER_ANSWERS};

impl QuizSession {
    /// Restaura índice y respuestas guardadas tras una carga con éxito.
    /// Un valor ausente, malformado o fuera de rango equivale a "sin sesión
    /// guardada": nunca se propaga un fallo de parseo al usuario.
    pub(crate) fn rehydrate(&mut self) {
        self.current_index = 0;
        self.answers.clear();
        self.pending_selection = None;
        self.auto_advance = None;

        let total = self.questions.len();

        if let Some(raw) = self.store.get(KEY_CURRENT_INDEX) {
            match raw.trim().parse::<usize>() {
                Ok(idx) if idx < total => self.current_index = idx,
                Ok(idx) => log::warn!("Índice guardado {idx} fuera de rango, se ignora"),
                Err(_) => log::warn!("Índice guardado malformado, se ignora"),
            }
        }

        if let Some(raw) = self.store.get(KEY_USER_ANSWERS) {
            match serde_json::from_str::<BTreeMap<usize, String>>(&raw) {
                Ok(map) => {
                    self.answers = map;
                    self.answers.retain(|&idx, _| idx < total);
                }
                Err(err) => log::warn!("Respuestas guardadas malformadas, se ignoran: {err}"),
            }
        }
    }

    /// Write-through del índice actual. Un fallo del almacén degrada a
    /// sesión no persistente (lo registra el propio store).
    pub(crate) fn persist_index(&mut self) {
        let value = self.current_index.to_string();
        self.store.set(KEY_CURRENT_INDEX, &value);
    }

    /// Write-through del mapa de respuestas, serializado como objeto JSON
    /// con índices en texto: `{"0":"B","2":"A"}`.
    pub(crate) fn persist_answers(&mut self) {
        match serde_json::to_string(&self.answers) {
            Ok(json) => self.store.set(KEY_USER_ANSWERS, &json),
            Err(err) => log::warn!("No se pudieron serializar las respuestas: {err}"),
        }
    }

    pub(crate) fn clear_persisted(&mut self) {
        self.store.remove(KEY_CURRENT_INDEX);
        self.store.remove(KEY_USER_ANSWERS);
    }
}
