//! Shared operand draws and the final assembly step used by every solver.
//!
//! ## RNG ordering
//!
//! Solvers draw operands in the order they appear in the prompt, then hand the
//! same stream to their distractor generator. Reordering draws inside a solver
//! changes every seeded output for that level.

use rand::Rng;

use crate::quiz_engine::{
    catalog::SkillFamily,
    models::{CoefficientRange, Level, OptionPool, QuestionSpec, StructuredResult},
};

/// Draw a non-zero coefficient with magnitude in `range.min..=range.max`,
/// negated half the time when `range.allow_negative` is set.
pub fn coeff<R: Rng + ?Sized>(rng: &mut R, range: CoefficientRange) -> i64 {
    let magnitude = rng.gen_range(range.min..=range.max);
    apply_sign(rng, range, magnitude)
}

/// Like [`coeff`], but the magnitude is drawn from `0..=range.max`, so a
/// zero coefficient is possible.
pub fn coeff_or_zero<R: Rng + ?Sized>(rng: &mut R, range: CoefficientRange) -> i64 {
    let magnitude = rng.gen_range(0..=range.max);
    apply_sign(rng, range, magnitude)
}

fn apply_sign<R: Rng + ?Sized>(rng: &mut R, range: CoefficientRange, magnitude: i64) -> i64 {
    if range.allow_negative && rng.gen_bool(0.5) { -magnitude } else { magnitude }
}

/// Draw an exponent in `lo..=hi`.
pub fn exponent<R: Rng + ?Sized>(rng: &mut R, lo: i64, hi: i64) -> i64 {
    rng.gen_range(lo..=hi.max(lo))
}

/// Fair coin, used for "which way round" choices in prompts.
pub fn coin<R: Rng + ?Sized>(rng: &mut R) -> bool {
    rng.gen_bool(0.5)
}

/// Everything a solver produced for one instance.
#[derive(Debug, Clone)]
pub struct Solved {
    pub question: String,
    pub correct_answer: String,
    pub result: StructuredResult,
    pub options: OptionPool,
}

impl Solved {
    pub fn new(
        question: impl Into<String>,
        correct_answer: impl ToString,
        result: StructuredResult,
        options: OptionPool,
    ) -> Self {
        Solved {
            question: question.into(),
            correct_answer: correct_answer.to_string(),
            result,
            options,
        }
    }

    /// Attach catalogue metadata to build the caller-facing spec.
    pub fn into_spec(self, level: Level, family: SkillFamily) -> QuestionSpec {
        QuestionSpec {
            level,
            family,
            question: self.question,
            correct_answer: self.correct_answer,
            options: self.options,
            result: self.result,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn unsigned_draws_stay_in_range() {
        let mut rng = StdRng::seed_from_u64(5);
        let range = CoefficientRange::normalized(2, 6);
        for _ in 0..500 {
            let c = coeff(&mut rng, range);
            assert!((2..=6).contains(&c), "got {c}");
        }
    }

    #[test]
    fn signed_draws_produce_both_signs_and_never_zero() {
        let mut rng = StdRng::seed_from_u64(6);
        let range = CoefficientRange::normalized(1, 4).signed();
        let draws: Vec<i64> = (0..300).map(|_| coeff(&mut rng, range)).collect();
        assert!(draws.iter().any(|&c| c < 0));
        assert!(draws.iter().any(|&c| c > 0));
        assert!(draws.iter().all(|&c| c != 0 && c.abs() <= 4));
    }

    #[test]
    fn zero_eligible_draws_can_hit_zero() {
        let mut rng = StdRng::seed_from_u64(7);
        let range = CoefficientRange::normalized(3, 3);
        assert!((0..300).any(|_| coeff_or_zero(&mut rng, range) == 0));
    }

    #[test]
    fn exponent_handles_degenerate_bounds() {
        let mut rng = StdRng::seed_from_u64(8);
        assert_eq!(exponent(&mut rng, 4, 2), 4);
    }
}
