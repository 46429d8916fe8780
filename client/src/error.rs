use thiserror::Error;

/// Failures surfaced by the client library.
///
/// Every variant renders as a human-readable message; solver-reported
/// errors pass the server's own text through untouched.
#[derive(Debug, Error)]
pub enum Error {
    /// The solver answered with a non-success status. Carries the server's
    /// `error` message when one was attached, otherwise `Error {status}`.
    #[error("solver error: {0}")]
    Solver(String),

    /// No words survived parsing and no fallback source yielded any.
    #[error("no words were supplied and the fallback source is empty")]
    EmptyWordList,

    /// The solver rejected every submitted word, including the fallback
    /// list. Surfaced explicitly so callers never render a blank puzzle.
    #[error("the solver accepted none of the submitted words")]
    EmptyPuzzle,

    /// A session operation was requested while no session is active.
    #[error("no active hangman session")]
    NoSession,

    #[error("invalid solver base url: {0}")]
    Url(#[from] url::ParseError),

    #[error("request to the solver failed: {0}")]
    Transport(#[from] reqwest::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
