use std::collections::HashSet;

use tracing::{debug, info};

use wordgames_common::models::Cell;

use crate::grid::Grid;

/// A pointer action against the word-search board. The whole drag gesture
/// is expressed through these three variants so every mutation goes through
/// one transition function.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectAction {
    /// Pointer pressed on a cell; it becomes the selection anchor.
    Start { row: usize, column: usize },
    /// Pointer dragged onto a cell while a gesture is active.
    Extend { row: usize, column: usize },
    /// Pointer released; the finalized selection is matched.
    Release,
}

/// What a [`SelectAction`] produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SelectOutcome {
    /// The in-progress selection path. Empty when the anchor and the
    /// current cell share no straight line.
    Selection { cells: Vec<Cell> },
    /// The released selection matched a target word.
    Matched {
        word: String,
        found: usize,
        total: usize,
    },
    /// The released selection matched the last remaining word.
    AllFound { word: String, total: usize },
    /// The released selection matched nothing; the attempt is reported and
    /// the selection cleared. Found state is untouched.
    Rejected { attempt: String },
    /// The action had no effect (release without an active drag, action
    /// outside the grid).
    Ignored,
}

/// Session-long discovered state. Union-only: cells and words are added on
/// confirmed matches and never removed while the puzzle instance lives.
#[derive(Debug, Clone, Default)]
pub struct FoundState {
    cells: HashSet<(usize, usize)>,
    words: Vec<String>,
}

impl FoundState {
    pub fn contains_cell(&self, row: usize, column: usize) -> bool {
        self.cells.contains(&(row, column))
    }

    pub fn cell_count(&self) -> usize {
        self.cells.len()
    }

    /// Matched words, uppercased, in the order they were first found.
    pub fn words(&self) -> &[String] {
        &self.words
    }

    pub fn word_count(&self) -> usize {
        self.words.len()
    }

    fn absorb_cells(&mut self, path: &[Cell]) {
        for cell in path {
            self.cells.insert((cell.row, cell.column));
        }
    }

    /// Record a matched word; returns false when it was already found.
    fn record_word(&mut self, word: &str) -> bool {
        if self.words.iter().any(|w| w == word) {
            return false;
        }
        self.words.push(word.to_string());
        true
    }
}

struct Drag {
    anchor: (usize, usize),
    path: Vec<Cell>,
}

/// One word-search puzzle instance: the fixed grid, the target word list,
/// the current drag gesture, and the monotonically growing found state.
pub struct Board {
    grid: Grid,
    words: Vec<String>,
    found: FoundState,
    drag: Option<Drag>,
}

impl Board {
    /// The target list is uppercased and deduplicated (first occurrence
    /// wins) so duplicate inputs can never double-count progress.
    pub fn new(grid: Grid, words: Vec<String>) -> Self {
        let mut seen = HashSet::new();
        let words: Vec<String> = words
            .into_iter()
            .map(|w| w.to_uppercase())
            .filter(|w| seen.insert(w.clone()))
            .collect();

        Self {
            grid,
            words,
            found: FoundState::default(),
            drag: None,
        }
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// The target words, uppercased, in list order.
    pub fn words(&self) -> &[String] {
        &self.words
    }

    pub fn found(&self) -> &FoundState {
        &self.found
    }

    /// The current drag path; empty when no gesture is active or the
    /// pointer strayed off every straight line through the anchor.
    pub fn selection(&self) -> &[Cell] {
        self.drag.as_ref().map(|d| d.path.as_slice()).unwrap_or(&[])
    }

    pub fn is_selected(&self, row: usize, column: usize) -> bool {
        self.selection()
            .iter()
            .any(|c| c.row == row && c.column == column)
    }

    pub fn is_found(&self, row: usize, column: usize) -> bool {
        self.found.contains_cell(row, column)
    }

    /// The single state-transition function for the board. All pointer
    /// handling funnels through here so partial updates cannot happen.
    pub fn apply(&mut self, action: SelectAction) -> SelectOutcome {
        match action {
            SelectAction::Start { row, column } => self.start(row, column),
            SelectAction::Extend { row, column } => self.extend(row, column),
            SelectAction::Release => self.release(),
        }
    }

    fn start(&mut self, row: usize, column: usize) -> SelectOutcome {
        let Some(cell) = self.grid.cell(row, column) else {
            debug!("ignoring drag start outside the grid: ({}, {})", row, column);
            return SelectOutcome::Ignored;
        };

        debug!("drag started at ({}, {})", row, column);
        let path = vec![cell];
        self.drag = Some(Drag {
            anchor: (row, column),
            path: path.clone(),
        });
        SelectOutcome::Selection { cells: path }
    }

    fn extend(&mut self, row: usize, column: usize) -> SelectOutcome {
        let Some(drag) = self.drag.as_mut() else {
            return SelectOutcome::Ignored;
        };

        drag.path = self.grid.line_between(drag.anchor, (row, column));
        SelectOutcome::Selection {
            cells: drag.path.clone(),
        }
    }

    fn release(&mut self) -> SelectOutcome {
        let Some(drag) = self.drag.take() else {
            return SelectOutcome::Ignored;
        };
        if drag.path.is_empty() {
            return SelectOutcome::Ignored;
        }

        let forward: String = drag.path.iter().map(|c| c.letter).collect();
        let reversed: String = drag.path.iter().rev().map(|c| c.letter).collect();

        let matched = self
            .words
            .iter()
            .find(|w| **w == forward || **w == reversed)
            .cloned();

        let Some(word) = matched else {
            debug!("selection {:?} matched no target word", forward);
            return SelectOutcome::Rejected { attempt: forward };
        };

        self.found.absorb_cells(&drag.path);
        let newly_found = self.found.record_word(&word);

        let found = self.found.word_count();
        let total = self.words.len();

        if newly_found && found == total {
            info!("all {} words found, puzzle complete", total);
            return SelectOutcome::AllFound { word, total };
        }

        info!("word {:?} found ({}/{})", word, found, total);
        SelectOutcome::Matched { word, found, total }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Board with CASA at row 0, cols 0..=3 and GATO at row 5, cols 2..=5.
    fn sample_board() -> Board {
        let mut placed = Vec::new();
        for (i, letter) in "CASA".chars().enumerate() {
            placed.push(Cell { row: 0, column: i, letter });
        }
        for (i, letter) in "GATO".chars().enumerate() {
            placed.push(Cell { row: 5, column: 2 + i, letter });
        }
        Board::new(
            Grid::new(&placed),
            vec!["CASA".to_string(), "GATO".to_string()],
        )
    }

    fn drag(board: &mut Board, from: (usize, usize), to: (usize, usize)) -> SelectOutcome {
        board.apply(SelectAction::Start { row: from.0, column: from.1 });
        board.apply(SelectAction::Extend { row: to.0, column: to.1 });
        board.apply(SelectAction::Release)
    }

    #[test]
    fn matching_drag_confirms_word_and_grows_found_state() {
        let mut board = sample_board();
        assert_eq!(board.found().word_count(), 0);

        let outcome = drag(&mut board, (0, 0), (0, 3));
        assert_eq!(
            outcome,
            SelectOutcome::Matched { word: "CASA".to_string(), found: 1, total: 2 }
        );
        assert_eq!(board.found().cell_count(), 4);
        assert!(board.is_found(0, 0));
        assert!(board.is_found(0, 3));
    }

    #[test]
    fn reversed_drag_matches_the_same_word() {
        let mut board = sample_board();

        let outcome = drag(&mut board, (0, 3), (0, 0));
        assert!(matches!(outcome, SelectOutcome::Matched { ref word, .. } if word == "CASA"));
    }

    #[test]
    fn mismatch_is_rejected_and_found_state_untouched() {
        let mut board = sample_board();
        drag(&mut board, (0, 0), (0, 3));
        let cells_before = board.found().cell_count();

        // A two-cell path can never equal a word from the four-letter list.
        let outcome = drag(&mut board, (0, 0), (1, 0));
        assert!(matches!(outcome, SelectOutcome::Rejected { .. }));
        assert_eq!(board.found().cell_count(), cells_before);
        assert_eq!(board.found().word_count(), 1);
        assert!(board.selection().is_empty());
    }

    #[test]
    fn crooked_drag_produces_empty_selection_and_release_is_ignored() {
        let mut board = sample_board();
        board.apply(SelectAction::Start { row: 0, column: 0 });

        let outcome = board.apply(SelectAction::Extend { row: 2, column: 1 });
        assert_eq!(outcome, SelectOutcome::Selection { cells: Vec::new() });

        assert_eq!(board.apply(SelectAction::Release), SelectOutcome::Ignored);
    }

    #[test]
    fn release_without_drag_is_a_noop() {
        let mut board = sample_board();
        assert_eq!(board.apply(SelectAction::Release), SelectOutcome::Ignored);
        assert_eq!(board.apply(SelectAction::Release), SelectOutcome::Ignored);
    }

    #[test]
    fn extend_without_drag_is_a_noop() {
        let mut board = sample_board();
        assert_eq!(
            board.apply(SelectAction::Extend { row: 1, column: 1 }),
            SelectOutcome::Ignored
        );
    }

    #[test]
    fn finding_every_word_reports_completion() {
        let mut board = sample_board();

        drag(&mut board, (0, 0), (0, 3));
        let outcome = drag(&mut board, (5, 2), (5, 5));
        assert_eq!(
            outcome,
            SelectOutcome::AllFound { word: "GATO".to_string(), total: 2 }
        );
    }

    #[test]
    fn refound_word_does_not_double_count() {
        let mut board = sample_board();

        drag(&mut board, (0, 0), (0, 3));
        let outcome = drag(&mut board, (0, 3), (0, 0));

        assert_eq!(
            outcome,
            SelectOutcome::Matched { word: "CASA".to_string(), found: 1, total: 2 }
        );
        assert_eq!(board.found().word_count(), 1);
    }

    #[test]
    fn duplicate_words_in_the_list_are_collapsed() {
        let board = Board::new(
            Grid::new(&[]),
            vec!["casa".to_string(), "CASA".to_string(), "gato".to_string()],
        );
        assert_eq!(board.words(), ["CASA".to_string(), "GATO".to_string()]);
    }

    #[test]
    fn found_cells_never_shrink() {
        let mut board = sample_board();
        let mut last = 0;

        let gestures = [
            ((0, 0), (0, 3)),
            ((0, 0), (3, 3)),
            ((5, 2), (5, 5)),
            ((0, 3), (0, 0)),
            ((9, 9), (9, 0)),
        ];
        for (from, to) in gestures {
            drag(&mut board, from, to);
            let count = board.found().cell_count();
            assert!(count >= last);
            last = count;
        }
    }
}
