use wordgames_client::{Puzzle, SelectAction, SelectOutcome, SolverClient, WordSearchGame};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    // Initialize logging
    tracing_subscriber::fmt::init();

    let client = SolverClient::new("http://localhost:5000")?;
    let game = WordSearchGame::new(client);

    // Generate a puzzle; blank input would fall back to the fixed list
    let mut puzzle = game.generate_from_text("casa, gato; perro\nmesa").await?;
    if puzzle.used_fallback() {
        println!("⚠️ All submitted words were rejected, playing the fallback list");
    }

    println!("Target words: {:?}", puzzle.board.words());
    display_board(&puzzle);

    // Ask the solver where every word hides
    let routes = game.solutions(&puzzle).await;
    println!("Solver knows routes for {} words", routes.len());

    // Replay the first route as a drag gesture: press on the first cell,
    // drag to the last, release
    if let Some((word, path)) = routes.iter().next() {
        let (first, last) = (path[0], path[path.len() - 1]);
        println!("\nDragging {:?} from ({}, {}) to ({}, {})", word, first.row, first.column, last.row, last.column);

        puzzle.board.apply(SelectAction::Start { row: first.row, column: first.column });
        puzzle.board.apply(SelectAction::Extend { row: last.row, column: last.column });

        match puzzle.board.apply(SelectAction::Release) {
            SelectOutcome::Matched { word, found, total } => {
                println!("✅ {:?} found! ({}/{})", word, found, total);
            }
            SelectOutcome::AllFound { word, total } => {
                println!("🎉 {:?} found — all {} words complete!", word, total);
            }
            SelectOutcome::Rejected { attempt } => {
                println!("❌ {:?} is not in the list", attempt);
            }
            outcome => println!("release outcome: {:?}", outcome),
        }
    }

    println!(
        "\nFound so far: {} words, {} cells",
        puzzle.board.found().word_count(),
        puzzle.board.found().cell_count()
    );

    Ok(())
}

fn display_board(puzzle: &Puzzle) {
    let grid = puzzle.board.grid();
    println!("Board:");
    for row in 0..grid.size() {
        print!("  ");
        for column in 0..grid.size() {
            let letter = grid.letter(row, column).unwrap_or(' ');
            if puzzle.board.is_found(row, column) {
                print!("[{letter}]");
            } else {
                print!(" {letter} ");
            }
        }
        println!("  {}", row);
    }
}
