//! Skill-family solvers, grouped by the part of the syllabus they cover.
//!
//! Every public solver has the same shape:
//!
//! ```ignore
//! pub fn <name>(rng: &mut dyn RngCore, range: CoefficientRange) -> Solved
//! ```
//!
//! `range` arrives normalized and unsigned; solvers call `.signed()` where a
//! level allows negative operands. The dispatcher in `generator.rs` maps each
//! level to one of these functions.

/// Levels 1–19
pub mod combining;
/// Levels 20–37
pub mod monomials;
/// Levels 38–47
pub mod distributive;
/// Levels 48–56
pub mod products;
/// Levels 57–63
pub mod factoring;

/// Redraws allowed when a level rejects an operand combination. Every loop
/// has a fixed fallback draw once this runs out.
pub const REDRAW_ATTEMPTS: usize = 50;
