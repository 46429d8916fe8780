use std::collections::HashMap;

use tracing::{debug, info, warn};

use wordgames_common::models::Cell;

use crate::{Board, Error, Grid, Result, SolverClient, wordlist};

/// One generated word-search puzzle: the playable board plus the placed
/// cells the solver needs back for path searches.
pub struct Puzzle {
    pub board: Board,
    placed: Vec<Cell>,
    used_fallback: bool,
}

impl Puzzle {
    fn assemble(placed: Vec<Cell>, words: Vec<String>, used_fallback: bool) -> Self {
        let board = Board::new(Grid::new(&placed), words);
        Self {
            board,
            placed,
            used_fallback,
        }
    }

    /// The solver's placed cells, as returned by matrix creation.
    pub fn placed(&self) -> &[Cell] {
        &self.placed
    }

    /// True when the submitted words were all rejected and the fixed
    /// fallback list was substituted.
    pub fn used_fallback(&self) -> bool {
        self.used_fallback
    }
}

/// High-level word-search client: puzzle generation with fallback handling
/// and solution lookup, on top of [`SolverClient`].
pub struct WordSearchGame {
    client: SolverClient,
}

impl WordSearchGame {
    pub fn new(client: SolverClient) -> Self {
        Self { client }
    }

    /// Generate a puzzle from raw word-list text. Blank input falls back
    /// to the fixed word list before anything is submitted.
    pub async fn generate_from_text(&self, raw: &str) -> Result<Puzzle> {
        let words = wordlist::parse_words(raw);
        if words.is_empty() {
            info!("no usable words in input, using the fallback list");
            return self.generate(&wordlist::fallback_words()).await;
        }
        self.generate(&words).await
    }

    /// Generate a puzzle from an already-parsed word list.
    ///
    /// The solver decides which words are playable. If it rejects every
    /// submitted word, the fixed fallback list is tried once; if that also
    /// yields nothing, an explicit failure is returned so callers never
    /// render a blank puzzle.
    pub async fn generate(&self, words: &[String]) -> Result<Puzzle> {
        if words.is_empty() {
            return Err(Error::EmptyWordList);
        }

        let response = self.client.create_matrix(words).await?;
        let accepted = response.effective_words(words);
        if !accepted.is_empty() {
            info!(
                "puzzle generated with {} of {} submitted words",
                accepted.len(),
                words.len()
            );
            return Ok(Puzzle::assemble(response.placed, accepted, false));
        }

        warn!("solver rejected all {} submitted words, retrying with the fallback list", words.len());
        let fallback = wordlist::fallback_words();
        let response = self.client.create_matrix(&fallback).await?;
        let accepted = response.effective_words(&fallback);
        if accepted.is_empty() {
            return Err(Error::EmptyPuzzle);
        }

        info!("puzzle generated from the fallback list ({} words)", accepted.len());
        Ok(Puzzle::assemble(response.placed, accepted, true))
    }

    /// Ask the solver for the path of every target word.
    ///
    /// Words the solver cannot route, and per-word request failures, are
    /// skipped; the map holds whatever was found. Retrying is a fresh
    /// caller action, never automatic.
    pub async fn solutions(&self, puzzle: &Puzzle) -> HashMap<String, Vec<Cell>> {
        let mut routes = HashMap::new();

        for word in puzzle.board.words() {
            match self.client.find_word(puzzle.placed(), word).await {
                Ok(Some(path)) if !path.is_empty() => {
                    debug!("route found for {:?} ({} cells)", word, path.len());
                    routes.insert(word.clone(), path);
                }
                Ok(_) => debug!("no route for {:?}", word),
                Err(e) => warn!("path search for {:?} failed: {}", word, e),
            }
        }

        info!(
            "solutions resolved for {}/{} words",
            routes.len(),
            puzzle.board.words().len()
        );
        routes
    }
}
