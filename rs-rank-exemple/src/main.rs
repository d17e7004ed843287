use rs_rank_core::{ScoreOptions, Scorer};
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Log to stderr; RUST_LOG overrides the default 'info' verbosity
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    // Score files live in a temporary directory for this walkthrough;
    // a real consumer would point these at its own data directory
    let dir = tempfile::tempdir()?;

    let mut options = ScoreOptions::default();

    // Highest substring length considered (the default is 4)
    options.ngram = 4;

    // Candidates containing this marker are excluded from entropy scoring
    // ('*' is the default; shown here to make the knob visible)
    options.wildcard = '*';

    // With paths configured, compute mode persists both tables as JSON
    options.cohesion_path = Some(dir.path().join("cohesion.json"));
    options.entropy_path = Some(dir.path().join("entropy.json"));

    // Compute mode: build the frequency table from the text and derive
    // both score tables
    let text = "the cat sat on the mat and the cat ran to the mat";
    let scorer = Scorer::from_text(text, &options)?;

    // Point lookups; an unscored word resolves to a defined default
    // instead of an error
    for word in ["the", "cat", "mat", "at", "xyz"] {
        let (left, right) = scorer.context_entropy(word);
        println!(
            "{word}: cohesion={:.3} entropy=({left:.3}, {right:.3})",
            scorer.cohesion_score(word)
        );
    }

    // Attempting compute mode on an empty text
    match Scorer::from_text("   ", &options) {
        Ok(_) => println!("Should not happen"),
        Err(_) => println!("An empty text cannot be scored"),
    }

    // Load mode: a fresh instance reads the persisted tables back and
    // answers the same queries without recomputing
    let loaded = Scorer::from_store(&options)?;
    assert_eq!(loaded.cohesion_score("the"), scorer.cohesion_score("the"));
    assert_eq!(loaded.context_entropy("cat"), scorer.context_entropy("cat"));
    println!("Reloaded scores match the computed ones");

    // Load mode fails loudly when no scores were ever saved at the
    // configured locations
    let mut missing = ScoreOptions::default();
    missing.cohesion_path = Some(dir.path().join("nowhere-cohesion.json"));
    missing.entropy_path = Some(dir.path().join("nowhere-entropy.json"));
    match Scorer::from_store(&missing) {
        Ok(_) => println!("Should not happen"),
        Err(err) => println!("Missing persisted scores are an explicit failure: {err}"),
    }

    Ok(())
}
