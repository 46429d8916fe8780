use std::sync::Arc;

use tokio::sync::RwLock;
use tracing::{debug, info, warn};

use wordgames_common::models::{GameStatus, HangmanSnapshot, SessionOptions};

use crate::{Error, Result, SolverClient};

/// The fixed letter set hangman UIs present for guessing.
pub const ALPHABET: [char; 27] = [
    'A', 'B', 'C', 'D', 'E', 'F', 'G', 'H', 'I', 'J', 'K', 'L', 'M', 'N', 'Ñ', 'O', 'P', 'Q',
    'R', 'S', 'T', 'U', 'V', 'W', 'X', 'Y', 'Z',
];

/// Why a guess was ignored locally instead of being dispatched.
///
/// These are guard conditions, not failures: the guess is prevented before
/// any round trip, and no error is reported for it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Guard {
    /// No session has been created yet.
    NoSession,
    /// The session is already won or lost.
    Terminal,
    /// The guessed letter or word is blank.
    BlankInput,
    /// The letter was guessed before in this session.
    AlreadyUsed,
}

/// Result of a guess operation that did not fail outright.
#[derive(Debug, Clone)]
pub enum GuessOutcome {
    /// The solver's snapshot replaced the local one.
    Applied(HangmanSnapshot),
    /// A local guard stopped the guess before dispatch.
    Ignored(Guard),
    /// The response arrived after a newer request had been issued and was
    /// dropped; the newer response owns the snapshot.
    Stale,
}

/// Client-side hangman session state.
///
/// Owns the latest authoritative snapshot and nothing else: every guess
/// that passes the local guards is dispatched, and the returned snapshot
/// replaces the local one wholesale. Responses are sequenced with tickets
/// so that out of overlapping requests only the most recently issued one
/// may update the state.
#[derive(Debug, Default)]
pub struct HangmanState {
    snapshot: Option<HangmanSnapshot>,
    issued: u64,
    outstanding: u32,
}

impl HangmanState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn snapshot(&self) -> Option<&HangmanSnapshot> {
        self.snapshot.as_ref()
    }

    pub fn status(&self) -> Option<GameStatus> {
        self.snapshot.as_ref().map(|s| s.status)
    }

    pub fn is_terminal(&self) -> bool {
        self.status().is_some_and(GameStatus::is_terminal)
    }

    /// True while at least one request is outstanding. UIs disable the
    /// letter buttons and the word form while this holds, which keeps a
    /// second concurrent guess from being issued against the session.
    pub fn is_busy(&self) -> bool {
        self.outstanding > 0
    }

    /// Guard a letter guess. `None` means the guess may be dispatched.
    pub fn guard_letter(&self, letter: char) -> Option<Guard> {
        let snapshot = match &self.snapshot {
            Some(s) => s,
            None => return Some(Guard::NoSession),
        };
        if snapshot.status.is_terminal() {
            return Some(Guard::Terminal);
        }
        if letter.is_whitespace() {
            return Some(Guard::BlankInput);
        }
        if snapshot.used_letters.contains(&letter) {
            return Some(Guard::AlreadyUsed);
        }
        None
    }

    /// Guard a whole-word guess. `None` means the guess may be dispatched.
    pub fn guard_word(&self, word: &str) -> Option<Guard> {
        let snapshot = match &self.snapshot {
            Some(s) => s,
            None => return Some(Guard::NoSession),
        };
        if snapshot.status.is_terminal() {
            return Some(Guard::Terminal);
        }
        if word.trim().is_empty() {
            return Some(Guard::BlankInput);
        }
        None
    }

    /// Install a fresh session snapshot, discarding the previous session
    /// entirely. Outstanding requests from the old session are invalidated
    /// by bumping the ticket counter past them.
    pub fn replace(&mut self, snapshot: HangmanSnapshot) {
        self.issued += 1;
        self.outstanding = 0;
        self.snapshot = Some(snapshot);
    }

    pub fn clear(&mut self) {
        self.issued += 1;
        self.outstanding = 0;
        self.snapshot = None;
    }

    /// Take a ticket for a request about to be dispatched.
    pub fn begin_request(&mut self) -> u64 {
        self.issued += 1;
        self.outstanding += 1;
        self.issued
    }

    /// Apply a response snapshot. Returns false — leaving the state
    /// untouched — when a newer request was issued after this ticket.
    pub fn accept(&mut self, ticket: u64, snapshot: HangmanSnapshot) -> bool {
        self.outstanding = self.outstanding.saturating_sub(1);
        if ticket != self.issued {
            debug!("dropping stale response (ticket {} < {})", ticket, self.issued);
            return false;
        }
        self.snapshot = Some(snapshot);
        true
    }

    /// Record that the request behind `ticket` failed; the last-known-good
    /// snapshot stays in place.
    pub fn abandon(&mut self, _ticket: u64) {
        self.outstanding = self.outstanding.saturating_sub(1);
    }

    /// The revealed pattern with one space between positions, recomputed
    /// from the snapshot on every read.
    pub fn spaced_pattern(&self) -> Option<String> {
        let snapshot = self.snapshot.as_ref()?;
        let mut spaced = String::with_capacity(snapshot.revealed_pattern.len() * 2);
        for (i, letter) in snapshot.revealed_pattern.chars().enumerate() {
            if i > 0 {
                spaced.push(' ');
            }
            spaced.push(letter);
        }
        Some(spaced)
    }

    /// Share of the attempt budget consumed, as a percentage in 0..=100.
    pub fn progress_percent(&self) -> Option<u8> {
        let snapshot = self.snapshot.as_ref()?;
        if snapshot.max_attempts == 0 {
            return Some(0);
        }
        let used = snapshot.max_attempts.saturating_sub(snapshot.remaining_attempts);
        let percent = (used as f64 / snapshot.max_attempts as f64 * 100.0).round();
        Some(percent.clamp(0.0, 100.0) as u8)
    }

    /// Banner text for a terminal session, `None` while play continues.
    pub fn outcome_banner(&self) -> Option<&'static str> {
        match self.status()? {
            GameStatus::Won => Some("You guessed it! The character is saved."),
            GameStatus::Lost => Some("Out of attempts. Try a new game."),
            GameStatus::InProgress => None,
        }
    }
}

/// High-level hangman client: local guards, solver dispatch, and wholesale
/// snapshot replacement on every authoritative response.
pub struct HangmanGame {
    client: SolverClient,
    state: Arc<RwLock<HangmanState>>,
}

impl HangmanGame {
    pub fn new(client: SolverClient) -> Self {
        Self {
            client,
            state: Arc::new(RwLock::new(HangmanState::new())),
        }
    }

    /// Start a new session, replacing any existing one. The initial
    /// snapshot may already be terminal (the solver can resolve a
    /// one-letter word by itself); it is installed exactly like any other.
    pub async fn create_session(&self, options: SessionOptions) -> Result<HangmanSnapshot> {
        let snapshot = self.client.new_session(&options).await?;
        info!(
            "hangman session {} created ({} attempts, status {:?})",
            snapshot.id, snapshot.max_attempts, snapshot.status
        );

        let mut state = self.state.write().await;
        state.replace(snapshot.clone());
        Ok(snapshot)
    }

    /// Guess a single letter. Guarded locally (terminal session, blank or
    /// already-used letter) before any dispatch; on dispatch failure the
    /// local snapshot is left untouched and the error is returned.
    pub async fn guess_letter(&self, letter: char) -> Result<GuessOutcome> {
        let letter = uppercase(letter);

        let (ticket, session_id) = {
            let mut state = self.state.write().await;
            if let Some(guard) = state.guard_letter(letter) {
                debug!("letter {:?} ignored locally: {:?}", letter, guard);
                return Ok(GuessOutcome::Ignored(guard));
            }
            let Some(snapshot) = state.snapshot() else {
                return Ok(GuessOutcome::Ignored(Guard::NoSession));
            };
            let id = snapshot.id.clone();
            (state.begin_request(), id)
        };

        match self.client.guess_letter(&session_id, letter).await {
            Ok(snapshot) => Ok(self.apply(ticket, snapshot).await),
            Err(e) => {
                self.state.write().await.abandon(ticket);
                warn!("letter guess failed, keeping previous snapshot: {}", e);
                Err(e)
            }
        }
    }

    /// Guess the whole word. Guarded locally (terminal session, blank
    /// word) before any dispatch.
    pub async fn guess_word(&self, word: &str) -> Result<GuessOutcome> {
        let word = word.trim().to_uppercase();

        let (ticket, session_id) = {
            let mut state = self.state.write().await;
            if let Some(guard) = state.guard_word(&word) {
                debug!("word {:?} ignored locally: {:?}", word, guard);
                return Ok(GuessOutcome::Ignored(guard));
            }
            let Some(snapshot) = state.snapshot() else {
                return Ok(GuessOutcome::Ignored(Guard::NoSession));
            };
            let id = snapshot.id.clone();
            (state.begin_request(), id)
        };

        match self.client.guess_word(&session_id, &word).await {
            Ok(snapshot) => Ok(self.apply(ticket, snapshot).await),
            Err(e) => {
                self.state.write().await.abandon(ticket);
                warn!("word guess failed, keeping previous snapshot: {}", e);
                Err(e)
            }
        }
    }

    /// Re-fetch the authoritative snapshot for the active session.
    pub async fn refresh(&self) -> Result<GuessOutcome> {
        let (ticket, session_id) = {
            let mut state = self.state.write().await;
            let Some(snapshot) = state.snapshot() else {
                return Err(Error::NoSession);
            };
            let id = snapshot.id.clone();
            (state.begin_request(), id)
        };

        match self.client.get_session(&session_id).await {
            Ok(snapshot) => Ok(self.apply(ticket, snapshot).await),
            Err(e) => {
                self.state.write().await.abandon(ticket);
                Err(e)
            }
        }
    }

    async fn apply(&self, ticket: u64, snapshot: HangmanSnapshot) -> GuessOutcome {
        let mut state = self.state.write().await;
        if state.accept(ticket, snapshot.clone()) {
            GuessOutcome::Applied(snapshot)
        } else {
            GuessOutcome::Stale
        }
    }

    pub async fn snapshot(&self) -> Option<HangmanSnapshot> {
        self.state.read().await.snapshot().cloned()
    }

    pub async fn is_busy(&self) -> bool {
        self.state.read().await.is_busy()
    }

    pub async fn spaced_pattern(&self) -> Option<String> {
        self.state.read().await.spaced_pattern()
    }

    pub async fn progress_percent(&self) -> Option<u8> {
        self.state.read().await.progress_percent()
    }

    pub async fn outcome_banner(&self) -> Option<&'static str> {
        self.state.read().await.outcome_banner()
    }
}

fn uppercase(letter: char) -> char {
    letter.to_uppercase().next().unwrap_or(letter)
}
