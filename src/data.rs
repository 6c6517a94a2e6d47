// src/data.rs

use crate::model::{AnswerOption, LocalizedText, Question};
use serde::Deserialize;
use std::collections::HashSet;
use std::fmt;

/// Endpoint de solo lectura que devuelve el array JSON de preguntas.
pub const DEFAULT_QUESTIONS_URL: &str = "https://6883552921fa24876a9da966.mockapi.io/questions";

/// Fallo terminal de una carga del banco. La sesión no distingue transporte
/// de decodificación: cualquiera deja la carga en fallo hasta un reinicio.
#[derive(Debug, Clone, PartialEq)]
pub enum DataError {
    /// La petición no completó con estado de éxito.
    Fetch(String),
    /// El cuerpo no se pudo decodificar a la forma esperada.
    Parse(String),
    /// El banco decodificó pero viola alguna invariante de datos.
    Invalid(String),
}

impl fmt::Display for DataError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DataError::Fetch(msg) => write!(f, "could not fetch question bank: {msg}"),
            DataError::Parse(msg) => write!(f, "could not decode question bank: {msg}"),
            DataError::Invalid(msg) => write!(f, "invalid question bank: {msg}"),
        }
    }
}

impl std::error::Error for DataError {}

// Forma de cable del endpoint (campos planos por idioma, como el original).
#[derive(Deserialize)]
struct RawOption {
    key: String,
    text_en: String,
    text_vi: String,
}

#[derive(Deserialize)]
struct RawQuestion {
    id: String,
    question_en: String,
    question_vi: String,
    options: Vec<RawOption>,
    correct_answer: String,
    #[serde(default)]
    explanation_vi: String,
}

impl From<RawQuestion> for Question {
    fn from(raw: RawQuestion) -> Self {
        Question {
            id: raw.id,
            prompt: LocalizedText::new(raw.question_vi, raw.question_en),
            options: raw
                .options
                .into_iter()
                .map(|o| AnswerOption {
                    key: o.key,
                    text: LocalizedText::new(o.text_vi, o.text_en),
                })
                .collect(),
            correct_answer: raw.correct_answer,
            explanation: raw.explanation_vi,
        }
    }
}

/// Repositorio de preguntas: una petición bloqueante por llamada, sin
/// reintentos ni backoff. El reintento es relanzar `load()` vía reinicio.
#[derive(Clone)]
pub struct QuestionService {
    endpoint: String,
}

impl QuestionService {
    pub fn new() -> Self {
        Self {
            endpoint: default_endpoint(),
        }
    }

    pub fn with_endpoint(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
        }
    }

    pub fn load(&self) -> Result<Vec<Question>, DataError> {
        log::info!("Descargando banco de preguntas desde {}", self.endpoint);
        let response = reqwest::blocking::get(&self.endpoint)
            .map_err(|err| DataError::Fetch(err.to_string()))?;

        if !response.status().is_success() {
            return Err(DataError::Fetch(format!("HTTP {}", response.status())));
        }

        let body = response
            .text()
            .map_err(|err| DataError::Fetch(err.to_string()))?;
        let questions = parse_questions(&body)?;
        log::info!("Banco cargado: {} preguntas", questions.len());
        Ok(questions)
    }
}

impl Default for QuestionService {
    fn default() -> Self {
        Self::new()
    }
}

fn default_endpoint() -> String {
    std::env::var("VIET_QUIZ_QUESTIONS_URL")
        .ok()
        .filter(|s| !s.trim().is_empty())
        .unwrap_or_else(|| DEFAULT_QUESTIONS_URL.to_string())
}

/// Decodifica y valida el cuerpo del endpoint. Separado del transporte para
/// poder testearlo sin red.
pub fn parse_questions(body: &str) -> Result<Vec<Question>, DataError> {
    let raw: Vec<RawQuestion> =
        serde_json::from_str(body).map_err(|err| DataError::Parse(err.to_string()))?;
    let questions: Vec<Question> = raw.into_iter().map(Question::from).collect();
    validate(&questions)?;
    Ok(questions)
}

// Invariantes del banco: no vacío, claves de opción únicas por pregunta y
// `correct_answer` igual a exactamente una de ellas. Datos que las violan
// son un error de integridad, no se toleran en silencio.
fn validate(questions: &[Question]) -> Result<(), DataError> {
    if questions.is_empty() {
        return Err(DataError::Invalid("question bank is empty".into()));
    }

    for q in questions {
        if q.options.is_empty() {
            return Err(DataError::Invalid(format!(
                "question {} has no options",
                q.id
            )));
        }

        let mut seen = HashSet::new();
        for opt in &q.options {
            if !seen.insert(opt.key.as_str()) {
                return Err(DataError::Invalid(format!(
                    "question {} repeats option key {}",
                    q.id, opt.key
                )));
            }
        }

        if !seen.contains(q.correct_answer.as_str()) {
            return Err(DataError::Invalid(format!(
                "question {} has correct_answer {} that matches no option",
                q.id, q.correct_answer
            )));
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Language;

    const VALID_BODY: &str = r#"[
        {
            "id": "1",
            "question_en": "What is 1 + 1?",
            "question_vi": "1 + 1 bằng mấy?",
            "options": [
                { "key": "A", "text_en": "One", "text_vi": "Một" },
                { "key": "B", "text_en": "Two", "text_vi": "Hai" }
            ],
            "correct_answer": "B",
            "explanation_vi": "1 + 1 = 2."
        }
    ]"#;

    #[test]
    fn parses_wire_shape_into_localized_model() {
        let questions = parse_questions(VALID_BODY).unwrap();
        assert_eq!(questions.len(), 1);

        let q = &questions[0];
        assert_eq!(q.prompt.get(Language::En), "What is 1 + 1?");
        assert_eq!(q.prompt.get(Language::Vi), "1 + 1 bằng mấy?");
        assert_eq!(q.options[1].text.get(Language::Vi), "Hai");
        assert_eq!(q.correct_answer, "B");
        assert_eq!(q.explanation, "1 + 1 = 2.");
    }

    #[test]
    fn option_order_is_preserved() {
        let questions = parse_questions(VALID_BODY).unwrap();
        let keys: Vec<&str> = questions[0].options.iter().map(|o| o.key.as_str()).collect();
        assert_eq!(keys, vec!["A", "B"]);
    }

    #[test]
    fn rejects_body_that_is_not_an_array() {
        let err = parse_questions("{\"hello\": 1}").unwrap_err();
        assert!(matches!(err, DataError::Parse(_)));
    }

    #[test]
    fn rejects_empty_bank() {
        let err = parse_questions("[]").unwrap_err();
        assert!(matches!(err, DataError::Invalid(_)));
    }

    #[test]
    fn rejects_correct_answer_without_matching_option() {
        let body = VALID_BODY.replace("\"correct_answer\": \"B\"", "\"correct_answer\": \"C\"");
        let err = parse_questions(&body).unwrap_err();
        assert!(matches!(err, DataError::Invalid(_)));
    }

    #[test]
    fn rejects_duplicate_option_keys() {
        let body = VALID_BODY.replace(
            "{ \"key\": \"B\", \"text_en\": \"Two\", \"text_vi\": \"Hai\" }",
            "{ \"key\": \"A\", \"text_en\": \"Two\", \"text_vi\": \"Hai\" }",
        );
        // "A" duplicada y "B" ya no existe: vale cualquiera de los dos motivos.
        let err = parse_questions(&body).unwrap_err();
        assert!(matches!(err, DataError::Invalid(_)));
    }

    #[test]
    fn missing_explanation_defaults_to_empty() {
        let body = r#"[
            {
                "id": "1",
                "question_en": "Pick A",
                "question_vi": "Chọn A",
                "options": [{ "key": "A", "text_en": "A", "text_vi": "A" }],
                "correct_answer": "A"
            }
        ]"#;
        let questions = parse_questions(body).unwrap();
        assert_eq!(questions[0].explanation, "");
    }
}
