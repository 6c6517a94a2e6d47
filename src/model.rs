use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
pub enum Language {
    #[default]
    Vi,
    En,
}

impl Language {
    /// Devuelve el otro idioma (el toggle VI ↔ EN de la barra superior).
    pub fn toggled(self) -> Self {
        match self {
            Language::Vi => Language::En,
            Language::En => Language::Vi,
        }
    }
}

/// Texto con una variante por idioma. Lookup por enum en vez de campos
/// sueltos `text_vi`/`text_en`, para poder añadir más locales sin tocar
/// el resto del modelo.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct LocalizedText {
    pub vi: String,
    pub en: String,
}

impl LocalizedText {
    pub fn new(vi: impl Into<String>, en: impl Into<String>) -> Self {
        Self {
            vi: vi.into(),
            en: en.into(),
        }
    }

    pub fn get(&self, lang: Language) -> &str {
        match lang {
            Language::Vi => &self.vi,
            Language::En => &self.en,
        }
    }
}

/// Una opción de respuesta. El orden dentro del vector de la pregunta
/// es el orden de presentación.
#[derive(Debug, Clone, PartialEq)]
pub struct AnswerOption {
    pub key: String,
    pub text: LocalizedText,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Question {
    pub id: String,
    pub prompt: LocalizedText,
    pub options: Vec<AnswerOption>,
    /// Debe coincidir con la `key` de exactamente una opción; se valida al
    /// cargar el banco (ver `data::parse_questions`).
    pub correct_answer: String,
    pub explanation: String,
}

impl Question {
    pub fn option(&self, key: &str) -> Option<&AnswerOption> {
        self.options.iter().find(|o| o.key == key)
    }
}

/// Fase global de la sesión. `LoadFailed` es terminal: solo se sale con un
/// reinicio explícito que relanza la carga.
#[derive(Debug, Clone, PartialEq)]
pub enum Phase {
    Loading,
    Ready,
    LoadFailed(String),
}

/// Estado visual de una opción de la pregunta actual.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OptionDisplay {
    Neutral,
    Selected,
    Correct,
    Incorrect,
    Disabled,
}
