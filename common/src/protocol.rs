use serde::{Deserialize, Serialize};

use crate::models::Cell;

/// Body for `POST /api/buscar`: ask the solver to locate `word` among the
/// placed cells it previously returned.
#[derive(Debug, Serialize, Deserialize)]
pub struct FindWordRequest {
    #[serde(rename = "palabra")]
    pub word: String,
    pub placed: Vec<Cell>,
}

/// Body for `POST /api/ahorcado/letra`.
#[derive(Debug, Serialize, Deserialize)]
pub struct GuessLetterRequest {
    #[serde(rename = "juegoId")]
    pub session_id: String,
    #[serde(rename = "letra")]
    pub letter: char,
}

/// Body for `POST /api/ahorcado/palabra`.
#[derive(Debug, Serialize, Deserialize)]
pub struct GuessWordRequest {
    #[serde(rename = "juegoId")]
    pub session_id: String,
    #[serde(rename = "palabra")]
    pub word: String,
}

/// Response for `POST /api/matriz`.
#[derive(Debug, Serialize, Deserialize)]
pub struct CreateMatrixResponse {
    /// Cells occupied by the words the solver managed to place.
    pub placed: Vec<Cell>,
    /// The solver's filtered word list (length 3-10, at most 12 words).
    /// Absent on older solver builds, in which case the submitted list
    /// stands. An empty list means every submitted word was rejected.
    #[serde(rename = "palabrasFiltradas", default, skip_serializing_if = "Option::is_none")]
    pub accepted_words: Option<Vec<String>>,
}

impl CreateMatrixResponse {
    /// The effective word list for the generated puzzle. The solver is
    /// authoritative: when it reports a filtered list, that list wins over
    /// whatever was submitted.
    pub fn effective_words(&self, submitted: &[String]) -> Vec<String> {
        match &self.accepted_words {
            Some(words) => words.clone(),
            None => submitted.to_vec(),
        }
    }
}

/// Error envelope the solver attaches to non-success responses.
#[derive(Debug, Serialize, Deserialize)]
pub struct ApiError {
    pub error: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn matrix_response_without_filter_field_keeps_submitted_words() {
        let json = r#"{"placed": [{"fila": 0, "columna": 0, "letra": "C"}]}"#;
        let response: CreateMatrixResponse = serde_json::from_str(json).unwrap();

        let submitted = vec!["CASA".to_string(), "GATO".to_string()];
        assert_eq!(response.effective_words(&submitted), submitted);
    }

    #[test]
    fn matrix_response_with_empty_filter_means_all_rejected() {
        let json = r#"{"placed": [], "palabrasFiltradas": []}"#;
        let response: CreateMatrixResponse = serde_json::from_str(json).unwrap();

        let submitted = vec!["XY".to_string()];
        assert!(response.effective_words(&submitted).is_empty());
    }

    #[test]
    fn guess_letter_request_uses_wire_names() {
        let request = GuessLetterRequest {
            session_id: "abc".to_string(),
            letter: 'A',
        };
        let json = serde_json::to_string(&request).unwrap();
        assert_eq!(json, r#"{"juegoId":"abc","letra":"A"}"#);
    }
}
