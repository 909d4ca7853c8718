//! One question per level, plus the fallback path.
//!
//! Run with: `cargo run --example demo`
//! Set `LOG_LEVEL=debug` to see the engine's per-question trace, or
//! `LOG_LEVEL=warn` to see only fallbacks and range repairs.
//!
//! Every level is generated with a fixed seed and the coefficient range the
//! game recommends for it, so the output is reproducible. Each block shows the
//! level, its skill family, the prompt, and the four options with the correct
//! one marked.

use algebra_drill_gen::{generate_question, profiles, to_client_payload, QuizRequest};
use tracing_subscriber::EnvFilter;

fn init_tracing() {
    let filter = EnvFilter::try_from_env("LOG_LEVEL").unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .init();
}

fn main() {
    init_tracing();

    for profile in profiles() {
        let range = profile.recommended_range;
        let spec = generate_question(
            QuizRequest::new(profile.level.get())
                .with_range(range.min, range.max)
                .with_seed(u64::from(profile.level.get())),
        );

        println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
        println!("  [{}]  {}  ({})  range {}..={}",
            profile.level, profile.topic, spec.family, range.min, range.max);
        println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
        println!("  Q: {}", spec.question);
        for option in &spec.options {
            let mark = if *option == spec.correct_answer { "+" } else { " " };
            println!("  [{mark}] {option}");
        }
        println!();
    }

    // Unknown levels never fail: they serve a level-1 question and log a warning.
    let fallback = generate_question(QuizRequest::new(200).with_seed(1));
    println!("Level 200 falls back to: {}", fallback.question);

    // The shape the quiz page consumes.
    let payload = to_client_payload(&generate_question(QuizRequest::new(48).with_seed(3)));
    match serde_json::to_string_pretty(&payload) {
        Ok(text) => println!("{text}"),
        Err(err) => eprintln!("could not serialize payload: {err}"),
    }
}
