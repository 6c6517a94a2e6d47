// src/storage.rs

use std::collections::HashMap;
use std::path::PathBuf;

/// Claves persistidas. No existe ninguna otra entrada en el almacén.
pub const KEY_CURRENT_INDEX: &str = "currentQuestionIndex";
pub const KEY_USER_ANSWERS: &str = "userAnswers";

/// Almacén clave-valor que sobrevive reinicios del proceso. Las escrituras
/// son fire-and-forget: un fallo nunca bloquea la transición en memoria.
pub trait ProgressStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: &str);
    fn remove(&mut self, key: &str);
}

/// Almacén respaldado por un fichero JSON junto al binario. Si el fichero
/// está corrupto o no se puede escribir, la sesión degrada a no persistente
/// con un aviso en el log.
pub struct FileStore {
    path: PathBuf,
    entries: HashMap<String, String>,
}

impl FileStore {
    pub const DEFAULT_PATH: &'static str = "viet_quiz_progress.json";

    pub fn open_default() -> Self {
        Self::open(PathBuf::from(Self::DEFAULT_PATH))
    }

    pub fn open(path: PathBuf) -> Self {
        let entries = match std::fs::read_to_string(&path) {
            Ok(json) => match serde_json::from_str(&json) {
                Ok(map) => map,
                Err(err) => {
                    log::warn!("Progreso guardado ilegible, se descarta: {err}");
                    HashMap::new()
                }
            },
            // Sin fichero: sesión nueva.
            Err(_) => HashMap::new(),
        };

        Self { path, entries }
    }

    fn flush(&self) {
        let json = match serde_json::to_string_pretty(&self.entries) {
            Ok(json) => json,
            Err(err) => {
                log::warn!("No se pudo serializar el progreso: {err}");
                return;
            }
        };
        if let Err(err) = std::fs::write(&self.path, json) {
            log::warn!("No se pudo guardar el progreso en {:?}: {err}", self.path);
        }
    }
}

impl ProgressStore for FileStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) {
        self.entries.insert(key.to_string(), value.to_string());
        self.flush();
    }

    fn remove(&mut self, key: &str) {
        if self.entries.remove(key).is_some() {
            self.flush();
        }
    }
}

/// Doble en memoria para los tests de la sesión.
#[derive(Default)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
}

impl ProgressStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) {
        self.entries.insert(key.to_string(), value.to_string());
    }

    fn remove(&mut self, key: &str) {
        self.entries.remove(key);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_path(name: &str) -> PathBuf {
        let mut path = std::env::temp_dir();
        path.push(format!("viet_quiz_test_{name}_{}.json", std::process::id()));
        path
    }

    #[test]
    fn file_store_round_trip() {
        let path = temp_path("round_trip");
        {
            let mut store = FileStore::open(path.clone());
            store.set(KEY_CURRENT_INDEX, "1");
            store.set(KEY_USER_ANSWERS, r#"{"0":"B"}"#);
        }

        let reopened = FileStore::open(path.clone());
        assert_eq!(reopened.get(KEY_CURRENT_INDEX).as_deref(), Some("1"));
        assert_eq!(reopened.get(KEY_USER_ANSWERS).as_deref(), Some(r#"{"0":"B"}"#));

        let _ = std::fs::remove_file(path);
    }

    #[test]
    fn file_store_remove_deletes_the_entry() {
        let path = temp_path("remove");
        {
            let mut store = FileStore::open(path.clone());
            store.set(KEY_CURRENT_INDEX, "2");
            store.remove(KEY_CURRENT_INDEX);
        }

        let reopened = FileStore::open(path.clone());
        assert_eq!(reopened.get(KEY_CURRENT_INDEX), None);

        let _ = std::fs::remove_file(path);
    }

    #[test]
    fn corrupt_file_is_treated_as_empty() {
        let path = temp_path("corrupt");
        std::fs::write(&path, "ni json ni nada").unwrap();

        let store = FileStore::open(path.clone());
        assert_eq!(store.get(KEY_CURRENT_INDEX), None);
        assert_eq!(store.get(KEY_USER_ANSWERS), None);

        let _ = std::fs::remove_file(path);
    }

    #[test]
    fn memory_store_basics() {
        let mut store = MemoryStore::default();
        assert_eq!(store.get("x"), None);
        store.set("x", "1");
        assert_eq!(store.get("x").as_deref(), Some("1"));
        store.remove("x");
        assert_eq!(store.get("x"), None);
    }
}
