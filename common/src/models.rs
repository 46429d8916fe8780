use serde::{Deserialize, Serialize};

/// Lowest number of attempts the solver accepts for a hangman session.
pub const MIN_ATTEMPTS: u32 = 3;
/// Highest number of attempts the solver accepts for a hangman session.
pub const MAX_ATTEMPTS: u32 = 12;

/// A single letter cell on the solver's grid.
///
/// The solver API speaks Spanish on the wire (`fila`/`columna`/`letra`);
/// field renames map it to the names used throughout this workspace.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Cell {
    #[serde(rename = "fila")]
    pub row: usize,
    #[serde(rename = "columna")]
    pub column: usize,
    #[serde(rename = "letra")]
    pub letter: char,
}

/// Lifecycle state of a hangman session. `Won` and `Lost` are terminal.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameStatus {
    #[serde(rename = "en_curso")]
    InProgress,
    #[serde(rename = "ganado")]
    Won,
    #[serde(rename = "perdido")]
    Lost,
}

impl GameStatus {
    pub fn is_terminal(self) -> bool {
        matches!(self, GameStatus::Won | GameStatus::Lost)
    }
}

/// Complete authoritative state of one hangman session, as returned by the
/// solver after every session operation. Clients replace their local copy
/// with this wholesale; they never merge it field by field.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct HangmanSnapshot {
    #[serde(rename = "juegoId")]
    pub id: String,
    /// Masked word, e.g. `"_A_A"`; revealed positions carry their letter.
    #[serde(rename = "palabraOculta")]
    pub revealed_pattern: String,
    #[serde(rename = "longitud")]
    pub word_length: usize,
    #[serde(rename = "intentosRestantes")]
    pub remaining_attempts: u32,
    #[serde(rename = "intentosMaximos")]
    pub max_attempts: u32,
    #[serde(rename = "letrasUsadas")]
    pub used_letters: Vec<char>,
    #[serde(rename = "letrasIncorrectas")]
    pub incorrect_letters: Vec<char>,
    #[serde(rename = "estado")]
    pub status: GameStatus,
    /// Total play time, only present once the session is won.
    #[serde(rename = "tiempoFinal", default)]
    pub elapsed_seconds: Option<f64>,
    /// The hidden word, only disclosed on terminal sessions.
    #[serde(rename = "palabraCompleta", default)]
    pub full_word: Option<String>,
    #[serde(rename = "mensaje", default)]
    pub message: Option<String>,
}

/// Options for creating a new hangman session.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct SessionOptions {
    #[serde(rename = "palabras", default, skip_serializing_if = "Option::is_none")]
    pub words: Option<Vec<String>>,
    #[serde(rename = "maxIntentos", default, skip_serializing_if = "Option::is_none")]
    pub max_attempts: Option<u32>,
}

impl SessionOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Supply a candidate word pool for the solver to pick from. An empty
    /// list is not sent; the solver then falls back to its own pool.
    pub fn with_words(mut self, words: Vec<String>) -> Self {
        if !words.is_empty() {
            self.words = Some(words);
        }
        self
    }

    /// Request a specific attempt budget, clamped to the solver's
    /// accepted range of [`MIN_ATTEMPTS`], [`MAX_ATTEMPTS`].
    pub fn with_max_attempts(mut self, attempts: u32) -> Self {
        self.max_attempts = Some(attempts.clamp(MIN_ATTEMPTS, MAX_ATTEMPTS));
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn snapshot_deserializes_from_wire_names() {
        let json = r#"{
            "juegoId": "abc-123",
            "palabraOculta": "_A_A",
            "longitud": 4,
            "intentosRestantes": 5,
            "intentosMaximos": 7,
            "letrasUsadas": ["A", "X"],
            "letrasIncorrectas": ["X"],
            "estado": "en_curso",
            "tiempoFinal": null,
            "palabraCompleta": null,
            "mensaje": "Letra correcta"
        }"#;

        let snapshot: HangmanSnapshot = serde_json::from_str(json).unwrap();
        assert_eq!(snapshot.id, "abc-123");
        assert_eq!(snapshot.revealed_pattern, "_A_A");
        assert_eq!(snapshot.remaining_attempts, 5);
        assert_eq!(snapshot.used_letters, vec!['A', 'X']);
        assert_eq!(snapshot.status, GameStatus::InProgress);
        assert_eq!(snapshot.elapsed_seconds, None);
        assert_eq!(snapshot.message.as_deref(), Some("Letra correcta"));
    }

    #[test]
    fn snapshot_tolerates_missing_optional_fields() {
        let json = r#"{
            "juegoId": "abc-123",
            "palabraOculta": "GATO",
            "longitud": 4,
            "intentosRestantes": 3,
            "intentosMaximos": 7,
            "letrasUsadas": ["G", "A", "T", "O"],
            "letrasIncorrectas": [],
            "estado": "ganado"
        }"#;

        let snapshot: HangmanSnapshot = serde_json::from_str(json).unwrap();
        assert!(snapshot.status.is_terminal());
        assert_eq!(snapshot.full_word, None);
    }

    #[test]
    fn unknown_status_fails_fast() {
        let json = r#"{
            "juegoId": "abc-123",
            "palabraOculta": "_",
            "longitud": 1,
            "intentosRestantes": 3,
            "intentosMaximos": 3,
            "letrasUsadas": [],
            "letrasIncorrectas": [],
            "estado": "pausado"
        }"#;

        assert!(serde_json::from_str::<HangmanSnapshot>(json).is_err());
    }

    #[test]
    fn session_options_clamp_attempts() {
        let low = SessionOptions::new().with_max_attempts(1);
        assert_eq!(low.max_attempts, Some(MIN_ATTEMPTS));

        let high = SessionOptions::new().with_max_attempts(50);
        assert_eq!(high.max_attempts, Some(MAX_ATTEMPTS));

        let mid = SessionOptions::new().with_max_attempts(7);
        assert_eq!(mid.max_attempts, Some(7));
    }

    #[test]
    fn session_options_omit_empty_word_pool() {
        let options = SessionOptions::new().with_words(Vec::new());
        let json = serde_json::to_string(&options).unwrap();
        assert_eq!(json, "{}");
    }
}
