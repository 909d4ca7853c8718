//! # algebra_drill_gen
//!
//! An offline, deterministic multiple-choice algebra question generator.
//!
//! The library covers 63 difficulty levels, from combining like terms up to
//! cancelling a common binomial factor. Every question comes with its exact
//! answer and three wrong answers built from named student slips (added the
//! exponents instead of multiplying them, forgot to distribute, expanded a
//! difference of squares as a perfect square, …), all rendered as short
//! markup strings with `<sup>` exponents and two-row fractions.
//!
//! ## How it works
//!
//! 1. Create a [`QuizRequest`] with a level, an optional coefficient range and
//!    an optional RNG seed.
//! 2. Call [`generate_question`]: the dispatcher picks the level's solver,
//!    which draws operands, computes a [`StructuredResult`] and renders the
//!    prompt and the correct answer.
//! 3. The solver hands its operands to the family's distractor generator,
//!    which returns an [`OptionPool`] of exactly four distinct options in
//!    random order, one of them the correct answer.
//!
//! ## Key features
//!
//! - **Deterministic**: pass `rng_seed: Some(u64)` to reproduce the exact same
//!   question, or drive [`generate_question_with_rng`] with your own stream.
//! - **Never fails**: an unknown level serves a level-1 question and a bad
//!   coefficient range is repaired; both are logged through `tracing`.
//! - **Structured answers**: [`QuestionSpec::result`] carries the coefficients
//!   and exponents of the answer, so hosts can grade without parsing markup.
//!
//! ## Quick start
//!
//! ```rust
//! use algebra_drill_gen::{generate_question, QuizRequest};
//!
//! // Minimal: level only (range 1..=10, entropy seeding).
//! let spec = generate_question(QuizRequest::new(48));
//! println!("Q: {}", spec.question);
//!
//! // Reproducible, with the range the game uses for this level:
//! let spec = generate_question(QuizRequest::new(48).with_range(2, 12).with_seed(42));
//! for option in &spec.options {
//!     let mark = if *option == spec.correct_answer { "+" } else { " " };
//!     println!("[{mark}] {option}");
//! }
//! ```

pub mod client_adapter;
pub mod quiz_engine;

// Convenience re-exports so callers can use `algebra_drill_gen::generate_question`
// directly without reaching into `quiz_engine::`.
pub use client_adapter::to_client_payload;
pub use quiz_engine::{
    generate_question, generate_question_with_rng, profile, profiles, CoefficientRange,
    Level, LevelError, LevelProfile, OptionPool, OptionPoolError, QuestionSpec, QuizRequest,
    RangeError, RequestedLevel, SkillFamily, StructuredResult,
};
