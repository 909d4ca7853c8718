//! Core quiz engine: level dispatch, solvers, distractors and rendering.
//!
//! ## Module overview
//!
//! | Module        | Purpose |
//! |---------------|---------|
//! | `models`      | Shared types: terms, structured results, levels, ranges, request/response structs |
//! | `error`       | Typed errors for level parsing and range validation |
//! | `format`      | Markup rendering for terms, constants, fractions and `Expr` trees |
//! | `retry`       | Bounded retry helper used by redraw and padding loops |
//! | `helpers`     | Operand draws and the `Solved` assembly step shared by every solver |
//! | `catalog`     | Skill families, topic titles and recommended ranges per level |
//! | `generator`   | Level table and the entry points `generate_question*()` |
//! | `skills`      | 63 level solvers grouped by syllabus section |
//! | `distractors` | Option-pool builder and one wrong-answer generator per family |

pub mod catalog;
pub mod distractors;
pub mod error;
pub mod format;
pub mod generator;
pub mod helpers;
pub mod models;
pub mod retry;
pub mod skills;

// Re-export the public API surface so callers can use
// `quiz_engine::generate_question` without reaching into sub-modules.
pub use catalog::{profile, profiles, LevelProfile, SkillFamily};
pub use error::{LevelError, OptionPoolError, RangeError};
pub use generator::{generate_question, generate_question_with_rng};
pub use models::{
    CoefficientRange, Level, OptionPool, QuestionSpec, QuizRequest, RequestedLevel,
    StructuredResult, Term, Var,
};
