use wordgames_client::{ALPHABET, GuessOutcome, HangmanGame, SessionOptions, SolverClient};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    // Initialize logging
    tracing_subscriber::fmt::init();

    let client = SolverClient::new("http://localhost:5000")?;
    let game = HangmanGame::new(client);

    // Start a session with a 7-attempt budget and our own word pool
    let options = SessionOptions::new()
        .with_words(vec!["GATO".to_string(), "PERRO".to_string()])
        .with_max_attempts(7);
    let snapshot = game.create_session(options).await?;
    println!("Session {} started, {} letters to guess", snapshot.id, snapshot.word_length);

    // Guess the five most common letters, stopping if the game ends
    for letter in ['A', 'E', 'O', 'R', 'T'] {
        match game.guess_letter(letter).await? {
            GuessOutcome::Applied(snapshot) => {
                println!(
                    "{}  —  {} of {} attempts left",
                    game.spaced_pattern().await.unwrap_or_default(),
                    snapshot.remaining_attempts,
                    snapshot.max_attempts
                );
                if let Some(banner) = game.outcome_banner().await {
                    println!("{banner}");
                    break;
                }
            }
            GuessOutcome::Ignored(guard) => println!("Letter {letter} ignored locally: {guard:?}"),
            GuessOutcome::Stale => println!("Response for {letter} superseded by a newer guess"),
        }
    }

    // Try the whole word if the session is still open
    if let GuessOutcome::Applied(snapshot) = game.guess_word("gato").await? {
        println!("After word guess: status {:?}", snapshot.status);
        if let Some(word) = snapshot.full_word {
            println!("The word was {word}");
        }
    }

    // The full alphabet a UI would render as buttons
    let used: Vec<char> = game
        .snapshot()
        .await
        .map(|s| s.used_letters)
        .unwrap_or_default();
    let unused: String = ALPHABET.iter().copied().filter(|l| !used.contains(l)).collect();
    println!("Letters never tried: {unused}");

    println!("Progress: {}%", game.progress_percent().await.unwrap_or(0));

    Ok(())
}
