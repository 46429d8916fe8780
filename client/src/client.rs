use reqwest::{Client, Response};
use serde::de::DeserializeOwned;
use tracing::debug;
use url::Url;

use wordgames_common::{
    models::{Cell, HangmanSnapshot, SessionOptions},
    protocol::{ApiError, CreateMatrixResponse, FindWordRequest, GuessLetterRequest, GuessWordRequest},
};

use crate::{Error, Result, route};

/// HTTP adapter for the wordgames solver API.
///
/// The solver owns word placement, path search, and hangman session truth;
/// this client only shapes requests and decodes responses. All calls are
/// async and leave no client-side state behind.
pub struct SolverClient {
    client: Client,
    base_url: Url,
}

impl SolverClient {
    /// Create a new client connecting to the specified solver URL.
    pub fn new(base_url: &str) -> Result<Self> {
        let base_url = Url::parse(base_url)?;
        let client = Client::new();

        Ok(Self { client, base_url })
    }

    /// Ask the solver to place the given words on a grid.
    ///
    /// The solver is authoritative on validity (word length 3-10, at most
    /// 12 words): callers must use the returned effective word list, not
    /// their input, and must handle it coming back empty.
    pub async fn create_matrix(&self, words: &[String]) -> Result<CreateMatrixResponse> {
        let url = self.base_url.join("/api/matriz")?;
        debug!("creating matrix with {} words", words.len());

        let response = self.client.post(url).json(&words).send().await?;
        Self::decode_json(response).await
    }

    /// Ask the solver for the path of `word` among the placed cells.
    ///
    /// Returns `Ok(None)` when the solver reports no route. Route bodies
    /// with malformed triples lose those triples but still parse.
    pub async fn find_word(&self, placed: &[Cell], word: &str) -> Result<Option<Vec<Cell>>> {
        let url = self.base_url.join("/api/buscar")?;
        let request = FindWordRequest {
            word: word.to_string(),
            placed: placed.to_vec(),
        };

        let response = self.client.post(url).json(&request).send().await?;
        let body = Self::check_status(response).await?.text().await?;
        debug!("path search for {:?} answered: {:?}", word, body);

        Ok(route::parse_route(&body))
    }

    /// Create a new hangman session.
    pub async fn new_session(&self, options: &SessionOptions) -> Result<HangmanSnapshot> {
        let url = self.base_url.join("/api/ahorcado/nuevo")?;

        let response = self.client.post(url).json(options).send().await?;
        Self::decode_json(response).await
    }

    /// Submit a letter guess for an existing session.
    pub async fn guess_letter(&self, session_id: &str, letter: char) -> Result<HangmanSnapshot> {
        let url = self.base_url.join("/api/ahorcado/letra")?;
        let request = GuessLetterRequest {
            session_id: session_id.to_string(),
            letter,
        };

        let response = self.client.post(url).json(&request).send().await?;
        Self::decode_json(response).await
    }

    /// Submit a whole-word guess for an existing session.
    pub async fn guess_word(&self, session_id: &str, word: &str) -> Result<HangmanSnapshot> {
        let url = self.base_url.join("/api/ahorcado/palabra")?;
        let request = GuessWordRequest {
            session_id: session_id.to_string(),
            word: word.to_string(),
        };

        let response = self.client.post(url).json(&request).send().await?;
        Self::decode_json(response).await
    }

    /// Fetch the current authoritative snapshot of a session.
    pub async fn get_session(&self, session_id: &str) -> Result<HangmanSnapshot> {
        let url = self.base_url.join(&format!("/api/ahorcado/{session_id}"))?;

        let response = self.client.get(url).send().await?;
        Self::decode_json(response).await
    }

    async fn decode_json<T: DeserializeOwned>(response: Response) -> Result<T> {
        let response = Self::check_status(response).await?;
        Ok(response.json().await?)
    }

    /// Turn a non-success response into a typed failure, preferring the
    /// solver's own `{"error": ...}` message over a bare status code.
    async fn check_status(response: Response) -> Result<Response> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let message = match response.json::<ApiError>().await {
            Ok(envelope) => envelope.error,
            Err(_) => format!("Error {status}"),
        };
        Err(Error::Solver(message))
    }
}
