//! Wordgames Client Library
//!
//! This library provides a Rust client for the wordgames solver server,
//! covering both of its games: a letter-grid word search and a hangman
//! guessing game. The solver is authoritative for word placement, path
//! search, and hangman session state; this crate holds the client-side
//! logic — drag geometry, word matching, found-state accumulation, and the
//! hangman snapshot machine.
//!
//! ## Word search
//!
//! ```rust,no_run
//! use wordgames_client::{SelectAction, SolverClient, WordSearchGame};
//!
//! #[tokio::main]
//! async fn main() -> wordgames_client::Result<()> {
//!     let client = SolverClient::new("http://localhost:5000")?;
//!     let game = WordSearchGame::new(client);
//!
//!     // Generate a puzzle from raw text input
//!     let mut puzzle = game.generate_from_text("casa, gato; perro").await?;
//!
//!     // Drive a drag gesture across the board
//!     puzzle.board.apply(SelectAction::Start { row: 0, column: 0 });
//!     puzzle.board.apply(SelectAction::Extend { row: 0, column: 3 });
//!     let outcome = puzzle.board.apply(SelectAction::Release);
//!     println!("release outcome: {:?}", outcome);
//!
//!     // Ask the solver where the words are hidden
//!     let routes = game.solutions(&puzzle).await;
//!     println!("{} routes known", routes.len());
//!     Ok(())
//! }
//! ```
//!
//! ## Hangman
//!
//! ```rust,no_run
//! use wordgames_client::{HangmanGame, SessionOptions, SolverClient};
//!
//! #[tokio::main]
//! async fn main() -> wordgames_client::Result<()> {
//!     let client = SolverClient::new("http://localhost:5000")?;
//!     let game = HangmanGame::new(client);
//!
//!     let options = SessionOptions::new().with_max_attempts(7);
//!     game.create_session(options).await?;
//!
//!     game.guess_letter('A').await?;
//!     if let Some(pattern) = game.spaced_pattern().await {
//!         println!("{}", pattern);
//!     }
//!     Ok(())
//! }
//! ```

mod board;
mod client;
mod error;
mod grid;
mod hangman;
mod route;
mod wordlist;
mod wordsearch;

pub use board::{Board, FoundState, SelectAction, SelectOutcome};
pub use client::SolverClient;
pub use error::{Error, Result};
pub use grid::{GRID_SIZE, Grid};
pub use hangman::{ALPHABET, Guard, GuessOutcome, HangmanGame, HangmanState};
pub use route::parse_route;
pub use wordlist::{FALLBACK_WORDS, fallback_words, parse_words};
pub use wordsearch::{Puzzle, WordSearchGame};

// Re-export common types for convenience
pub use wordgames_common::{models::*, protocol::*};
