//! Levels 1–19: collecting like terms, constants and a second variable.

use rand::RngCore;

use crate::quiz_engine::{
    distractors::combining as wrong,
    format::{format_constant, format_term, group, Placement},
    helpers::{coeff, coeff_or_zero, exponent, Solved},
    models::{CoefficientRange, StructuredResult, Term, Var},
    retry::try_up_to,
    skills::REDRAW_ATTEMPTS,
};

const X: Option<Var> = Some(Var::X);
const Y: Option<Var> = Some(Var::Y);

/// Render prompt terms in order, first one leading.
fn chain(terms: &[Term]) -> String {
    terms
        .iter()
        .enumerate()
        .map(|(i, t)| {
            let placement = if i == 0 { Placement::Leading } else { Placement::Following };
            format_term(t.coefficient, t.variable, t.exponent, placement)
        })
        .collect()
}

fn like_terms(rng: &mut dyn RngCore, range: CoefficientRange, question: String, sum: i64) -> Solved {
    let result = StructuredResult::Monomial { coefficient: sum, exponent: 1 };
    let options = wrong::like_terms(rng, sum, range);
    Solved::new(question, result, result, options)
}

/// Levels 1–2: `ax + bx`, both positive.
pub fn sum_of_two(rng: &mut dyn RngCore, range: CoefficientRange) -> Solved {
    let a = coeff(rng, range);
    let b = coeff(rng, range);
    like_terms(rng, range, chain(&[Term::x(a, 1), Term::x(b, 1)]), a + b)
}

/// Levels 3–4: `ax - bx` with `a > b`, so the answer stays positive.
///
/// A single-value range has no ordered pair, so `a` steps one past `max`.
pub fn ordered_difference(rng: &mut dyn RngCore, range: CoefficientRange) -> Solved {
    let fallback = (range.max + 1, range.max);
    let (a, b) = if range.min == range.max {
        fallback
    } else {
        try_up_to(REDRAW_ATTEMPTS, |_| {
            let a = coeff(rng, range);
            let b = coeff(rng, range);
            (a > b).then_some((a, b))
        })
        .unwrap_or(fallback)
    };
    let question = format!("{} - {}", format_term(a, X, 1, Placement::Leading), format_term(b, X, 1, Placement::Leading));
    like_terms(rng, range, question, a - b)
}

/// Levels 5–6: `ax - bx`, answer may be zero or negative.
pub fn difference(rng: &mut dyn RngCore, range: CoefficientRange) -> Solved {
    let a = coeff(rng, range);
    let b = coeff(rng, range);
    let question = format!("{} - {}", format_term(a, X, 1, Placement::Leading), format_term(b, X, 1, Placement::Leading));
    like_terms(rng, range, question, a - b)
}

/// Level 7: `ax - bx` written as adding a negative term.
pub fn plus_negative(rng: &mut dyn RngCore, range: CoefficientRange) -> Solved {
    let a = coeff(rng, range);
    let mut b = coeff(rng, range.signed());
    if b >= 0 {
        b = -coeff(rng, range);
    }
    like_terms(rng, range, chain(&[Term::x(a, 1), Term::x(b, 1)]), a + b)
}

/// Levels 8–9: both coefficients signed.
pub fn signed_sum(rng: &mut dyn RngCore, range: CoefficientRange) -> Solved {
    let a = coeff(rng, range.signed());
    let b = coeff(rng, range.signed());
    like_terms(rng, range, chain(&[Term::x(a, 1), Term::x(b, 1)]), a + b)
}

/// Level 10: `ax + (-bx)`.
pub fn add_negative_group(rng: &mut dyn RngCore, range: CoefficientRange) -> Solved {
    let a = coeff(rng, range);
    let b = -coeff(rng, range);
    let question = format!(
        "{} + {}",
        format_term(a, X, 1, Placement::Leading),
        group(format_term(b, X, 1, Placement::Leading))
    );
    like_terms(rng, range, question, a + b)
}

/// Levels 11–12: three signed terms.
pub fn sum_of_three(rng: &mut dyn RngCore, range: CoefficientRange) -> Solved {
    let a = coeff(rng, range.signed());
    let b = coeff(rng, range.signed());
    let c = coeff(rng, range.signed());
    like_terms(rng, range, chain(&[Term::x(a, 1), Term::x(b, 1), Term::x(c, 1)]), a + b + c)
}

/// Level 13: `ax + b + cx`. The constant may be zero.
pub fn with_constant(rng: &mut dyn RngCore, range: CoefficientRange) -> Solved {
    let a = coeff(rng, range.signed());
    let b = coeff_or_zero(rng, range.signed());
    let c = coeff(rng, range.signed());
    let question = format!(
        "{}{}{}",
        format_term(a, X, 1, Placement::Leading),
        format_constant(b, Placement::Following),
        format_term(c, X, 1, Placement::Following)
    );
    let result = StructuredResult::Linear { x_coefficient: a + c, constant: b };
    let options = wrong::with_constant(rng, a + c, b);
    Solved::new(question, result, result, options)
}

/// Level 14: `ax + b + cx + d`.
pub fn with_two_constants(rng: &mut dyn RngCore, range: CoefficientRange) -> Solved {
    let a = coeff(rng, range.signed());
    let b = coeff_or_zero(rng, range.signed());
    let c = coeff(rng, range.signed());
    let d = coeff_or_zero(rng, range.signed());
    let question = format!(
        "{}{}{}{}",
        format_term(a, X, 1, Placement::Leading),
        format_constant(b, Placement::Following),
        format_term(c, X, 1, Placement::Following),
        format_constant(d, Placement::Following)
    );
    let result = StructuredResult::Linear { x_coefficient: a + c, constant: b + d };
    let options = wrong::with_constant(rng, a + c, b + d);
    Solved::new(question, result, result, options)
}

/// Level 15: `axⁿ + b + cxⁿ`.
pub fn power_with_constant(rng: &mut dyn RngCore, range: CoefficientRange) -> Solved {
    let n = exponent(rng, 2, 5);
    let a = coeff(rng, range.signed());
    let b = coeff_or_zero(rng, range.signed());
    let c = coeff(rng, range.signed());
    let question = format!(
        "{}{}{}",
        format_term(a, X, n, Placement::Leading),
        format_constant(b, Placement::Following),
        format_term(c, X, n, Placement::Following)
    );
    let result = StructuredResult::PowerLinear { x_coefficient: a + c, x_exponent: n, constant: b };
    let options = wrong::power_with_constant(rng, a + c, n, b);
    Solved::new(question, result, result, options)
}

/// Level 16: `axⁿ + bxᵐ + cxⁿ` with `n != m`.
pub fn mixed_powers(rng: &mut dyn RngCore, range: CoefficientRange) -> Solved {
    let n = exponent(rng, 2, 5);
    let mut m = exponent(rng, 2, 5);
    if n == m {
        m = n + 1;
    }
    let a = coeff(rng, range.signed());
    let b = coeff(rng, range.signed());
    let c = coeff(rng, range.signed());
    let question = chain(&[Term::x(a, n), Term::x(b, m), Term::x(c, n)]);
    let result = StructuredResult::TwoTerm {
        term1_coefficient: a + c,
        term1_exponent: n,
        term2_coefficient: b,
        term2_exponent: m,
    };
    let options = wrong::mixed_powers(rng, a + c, n, b, m);
    Solved::new(question, result, result, options)
}

fn two_variables_with(rng: &mut dyn RngCore, range: CoefficientRange, n: i64, m: i64) -> Solved {
    let a = coeff(rng, range.signed());
    let b = coeff(rng, range.signed());
    let c = coeff(rng, range.signed());
    let d = coeff(rng, range.signed());
    let question = chain(&[
        Term { coefficient: a, variable: X, exponent: n },
        Term { coefficient: b, variable: Y, exponent: m },
        Term { coefficient: c, variable: X, exponent: n },
        Term { coefficient: d, variable: Y, exponent: m },
    ]);
    let result = StructuredResult::TwoVariable { x_coefficient: a + c, y_coefficient: b + d, x_exponent: n, y_exponent: m };
    let options = wrong::two_variables(rng, a + c, b + d, n, m);
    Solved::new(question, result, result, options)
}

/// Level 17: `ax + by + cx + dy`.
pub fn two_variables(rng: &mut dyn RngCore, range: CoefficientRange) -> Solved {
    two_variables_with(rng, range, 1, 1)
}

/// Level 18: `axⁿ + by + cxⁿ + dy`.
pub fn two_variables_one_power(rng: &mut dyn RngCore, range: CoefficientRange) -> Solved {
    let n = exponent(rng, 2, 5);
    two_variables_with(rng, range, n, 1)
}

/// Level 19: `axⁿ + byᵐ + cxⁿ + dyᵐ` with `n != m`.
pub fn two_variables_powers(rng: &mut dyn RngCore, range: CoefficientRange) -> Solved {
    let n = exponent(rng, 2, 5);
    let mut m = exponent(rng, 2, 5);
    if n == m {
        m = n + 1;
    }
    two_variables_with(rng, range, n, m)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn ordered_difference_stays_positive() {
        let range = CoefficientRange::normalized(1, 10);
        for seed in 0..100 {
            let mut rng = StdRng::seed_from_u64(seed);
            let solved = ordered_difference(&mut rng, range);
            match solved.result {
                StructuredResult::Monomial { coefficient, .. } => assert!(coefficient > 0, "seed={seed}"),
                other => panic!("unexpected shape {other:?}"),
            }
            assert!(solved.question.contains(" - "));
        }
    }

    #[test]
    fn ordered_difference_survives_single_value_range() {
        let mut rng = StdRng::seed_from_u64(1);
        let solved = ordered_difference(&mut rng, CoefficientRange::normalized(4, 4));
        assert_eq!(solved.question, "5x - 4x");
        assert_eq!(solved.correct_answer, "x");
    }

    #[test]
    fn single_value_range_skips_the_redraw_loop() {
        // Only the distractor engine touches the stream, so both calls agree.
        let range = CoefficientRange::normalized(4, 4);
        let a = ordered_difference(&mut StdRng::seed_from_u64(9), range);
        let b = like_terms(&mut StdRng::seed_from_u64(9), range, a.question.clone(), 1);
        assert_eq!(a.options, b.options);
    }

    #[test]
    fn ordered_difference_draws_inside_a_two_value_range() {
        for seed in 0..50 {
            let mut rng = StdRng::seed_from_u64(seed);
            let solved = ordered_difference(&mut rng, CoefficientRange::normalized(2, 3));
            assert_eq!(solved.question, "3x - 2x", "seed={seed}");
        }
    }

    #[test]
    fn level_ten_wraps_negative_term() {
        let mut rng = StdRng::seed_from_u64(3);
        let solved = add_negative_group(&mut rng, CoefficientRange::default());
        assert!(solved.question.contains(" + (-"), "{}", solved.question);
    }

    #[test]
    fn mixed_powers_keeps_exponents_apart() {
        for seed in 0..100 {
            let mut rng = StdRng::seed_from_u64(seed);
            if let StructuredResult::TwoTerm { term1_exponent, term2_exponent, .. } =
                mixed_powers(&mut rng, CoefficientRange::default()).result
            {
                assert_ne!(term1_exponent, term2_exponent);
            }
        }
    }

    #[test]
    fn constant_levels_sum_constants() {
        for seed in 0..50 {
            let mut rng = StdRng::seed_from_u64(seed);
            let solved = with_two_constants(&mut rng, CoefficientRange::default());
            assert!(matches!(solved.result, StructuredResult::Linear { .. }));
            assert!(solved.options.contains(&solved.correct_answer));
        }
    }
}
