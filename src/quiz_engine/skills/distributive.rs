//! Levels 38–47: distributing over brackets, then products of powers of two
//! variables.

use rand::RngCore;

use crate::quiz_engine::{
    distractors::distributive as wrong,
    format::{factor, format_constant, format_term, group, term, times, Placement},
    helpers::{coeff, exponent, Solved},
    models::{CoefficientRange, StructuredResult, Term, Var},
    retry::try_up_to,
    skills::REDRAW_ATTEMPTS,
};

const X: Option<Var> = Some(Var::X);

/// `bx^m + c` rendered as the inside of a bracket.
fn inner(b: i64, m: i64, c: i64) -> String {
    group(format!(
        "{}{}",
        format_term(b, X, m, Placement::Leading),
        format_constant(c, Placement::Following)
    ))
}

fn linear(rng: &mut dyn RngCore, question: String, a: i64, b: i64, c: i64) -> Solved {
    let result = StructuredResult::Linear { x_coefficient: a * b, constant: a * c };
    let options = wrong::constant_over_binomial(rng, a, b, c);
    Solved::new(question, result, result, options)
}

/// Level 38: `a(bx + c)`, all positive.
pub fn constant_over_binomial(rng: &mut dyn RngCore, range: CoefficientRange) -> Solved {
    let a = coeff(rng, range);
    let b = coeff(rng, range);
    let c = coeff(rng, range);
    linear(rng, format!("{a}{}", inner(b, 1, c)), a, b, c)
}

/// Level 39: positive `a`, at least one of `b`, `c` negative.
pub fn constant_over_signed_binomial(rng: &mut dyn RngCore, range: CoefficientRange) -> Solved {
    let a = coeff(rng, range);
    let (b, c) = try_up_to(REDRAW_ATTEMPTS, |_| {
        let b = coeff(rng, range.signed());
        let c = coeff(rng, range.signed());
        (b < 0 || c < 0).then_some((b, c))
    })
    .unwrap_or_else(|| (coeff(rng, range), -coeff(rng, range)));
    linear(rng, format!("{a}{}", inner(b, 1, c)), a, b, c)
}

/// Level 40: everything signed, at least one negative.
pub fn signed_constant_over_binomial(rng: &mut dyn RngCore, range: CoefficientRange) -> Solved {
    let a = coeff(rng, range.signed());
    let (b, c) = try_up_to(REDRAW_ATTEMPTS, |_| {
        let b = coeff(rng, range.signed());
        let c = coeff(rng, range.signed());
        (a < 0 || b < 0 || c < 0).then_some((b, c))
    })
    .unwrap_or_else(|| (-coeff(rng, range), coeff(rng, range)));
    let lead = if a < 0 { group(a) } else { a.to_string() };
    linear(rng, format!("{lead}{}", inner(b, 1, c)), a, b, c)
}

/// Level 41: `ax(bx + c)` with `a > 0`, `c < 0`.
pub fn variable_over_binomial(rng: &mut dyn RngCore, range: CoefficientRange) -> Solved {
    let a = coeff(rng, range);
    let b = coeff(rng, range.signed());
    let c = -coeff(rng, range);
    let question = format!("{}{}", term(Term::x(a, 1)), inner(b, 1, c));
    let result = StructuredResult::TwoTerm {
        term1_coefficient: a * b,
        term1_exponent: 2,
        term2_coefficient: a * c,
        term2_exponent: 1,
    };
    let options = wrong::variable_over_binomial(rng, a, b, c);
    Solved::new(question, result, result, options)
}

/// Level 42: `axⁿ(bxᵐ + c)`.
pub fn power_over_binomial(rng: &mut dyn RngCore, range: CoefficientRange) -> Solved {
    let a = coeff(rng, range.signed());
    let n = exponent(rng, 2, 5);
    let b = coeff(rng, range.signed());
    let m = exponent(rng, 1, 4);
    let c = coeff(rng, range.signed());
    let question = format!("{}{}", term(Term::x(a, n)), inner(b, m, c));
    let result = StructuredResult::TwoTerm {
        term1_coefficient: a * b,
        term1_exponent: n + m,
        term2_coefficient: a * c,
        term2_exponent: n,
    };
    let options = wrong::power_over_binomial(rng, a, n, b, m, c);
    Solved::new(question, result, result, options)
}

fn power_over_terms_with(rng: &mut dyn RngCore, range: CoefficientRange, a: i64, n: i64, b: i64, m: i64, p: i64) -> Solved {
    let c = coeff(rng, range.signed());
    let question = format!(
        "{}{}",
        term(Term::x(a, n)),
        group(format!(
            "{}{}",
            format_term(b, X, m, Placement::Leading),
            format_term(c, X, p, Placement::Following)
        ))
    );
    let (first, second) = ((a * b, n + m), (a * c, n + p));
    let (hi, lo) = if first.1 > second.1 { (first, second) } else { (second, first) };
    let result = StructuredResult::TwoTerm {
        term1_coefficient: hi.0,
        term1_exponent: hi.1,
        term2_coefficient: lo.0,
        term2_exponent: lo.1,
    };
    let options = wrong::power_over_terms(rng, (hi.0, hi.1, lo.0, lo.1), a, n, b, m, c, p);
    Solved::new(question, result, result, options)
}

/// Level 43: `axⁿ(bxᵐ + cx)` with `m > 1`.
pub fn power_over_power_and_term(rng: &mut dyn RngCore, range: CoefficientRange) -> Solved {
    let a = coeff(rng, range.signed());
    let n = exponent(rng, 2, 4);
    let b = coeff(rng, range.signed());
    let m = exponent(rng, 2, 3);
    power_over_terms_with(rng, range, a, n, b, m, 1)
}

/// Level 44: `axⁿ(bxᵐ + cxᵖ)` with `p < m`.
pub fn power_over_two_powers(rng: &mut dyn RngCore, range: CoefficientRange) -> Solved {
    let a = coeff(rng, range.signed());
    let n = exponent(rng, 2, 4);
    let b = coeff(rng, range.signed());
    let m = exponent(rng, 2, 4);
    let p = exponent(rng, 1, m - 1);
    power_over_terms_with(rng, range, a, n, b, m, p)
}

/// Level 45: `xⁿ × yᵐ × xᵏ`.
pub fn variable_powers(rng: &mut dyn RngCore, _range: CoefficientRange) -> Solved {
    let n = exponent(rng, 1, 4);
    let m = exponent(rng, 1, 4);
    let k = exponent(rng, 1, 4);
    let question = times(&[term(Term::x(1, n)), term(Term::y(1, m)), term(Term::x(1, k))]);
    let result = StructuredResult::VariableProduct { coefficient: 1, x_exponent: n + k, y_exponent: m };
    let options = wrong::variable_powers(rng, n, m, k);
    Solved::new(question, result, result, options)
}

fn scaled_variable_powers_with(rng: &mut dyn RngCore, range: CoefficientRange) -> Solved {
    let a = coeff(rng, range);
    let b = coeff(rng, range);
    let c = coeff(rng, range);
    let n = exponent(rng, 1, 4);
    let m = exponent(rng, 1, 4);
    let k = exponent(rng, 1, 4);
    let question = times(&[factor(Term::x(a, n)), factor(Term::y(b, m)), factor(Term::x(c, k))]);
    let result = StructuredResult::VariableProduct { coefficient: a * b * c, x_exponent: n + k, y_exponent: m };
    let options = wrong::scaled_variable_powers(rng, a, b, c, n, m, k);
    Solved::new(question, result, result, options)
}

/// Level 46: `axⁿ × byᵐ × cxᵏ`, positive coefficients.
pub fn scaled_variable_powers(rng: &mut dyn RngCore, range: CoefficientRange) -> Solved {
    scaled_variable_powers_with(rng, range.unsigned())
}

/// Level 47: signed coefficients, negatives in brackets.
pub fn signed_scaled_variable_powers(rng: &mut dyn RngCore, range: CoefficientRange) -> Solved {
    scaled_variable_powers_with(rng, range.signed())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn level_39_always_has_a_negative_inside() {
        for seed in 0..100 {
            let mut rng = StdRng::seed_from_u64(seed);
            let solved = constant_over_signed_binomial(&mut rng, CoefficientRange::normalized(2, 8));
            assert!(solved.question.contains('-'), "seed={seed}: {}", solved.question);
        }
    }

    #[test]
    fn level_40_brackets_negative_multiplier() {
        for seed in 0..100 {
            let mut rng = StdRng::seed_from_u64(seed);
            let solved = signed_constant_over_binomial(&mut rng, CoefficientRange::normalized(2, 10));
            if solved.question.starts_with('-') {
                panic!("negative multiplier must be bracketed: {}", solved.question);
            }
        }
    }

    #[test]
    fn distributed_terms_descend() {
        for seed in 0..100 {
            let mut rng = StdRng::seed_from_u64(seed);
            let solved = power_over_two_powers(&mut rng, CoefficientRange::normalized(2, 8));
            let StructuredResult::TwoTerm { term1_exponent, term2_exponent, .. } = solved.result else {
                panic!("unexpected shape");
            };
            assert!(term1_exponent > term2_exponent);
        }
    }

    #[test]
    fn multi_variable_exponents_add() {
        for seed in 0..50 {
            let mut rng = StdRng::seed_from_u64(seed);
            let solved = variable_powers(&mut rng, CoefficientRange::default());
            let StructuredResult::VariableProduct { coefficient, x_exponent, y_exponent } = solved.result else {
                panic!("unexpected shape");
            };
            // Replay the prompt's exponent draws: xⁿ × yᵐ × xᵏ.
            let mut replay = StdRng::seed_from_u64(seed);
            let n = exponent(&mut replay, 1, 4);
            let m = exponent(&mut replay, 1, 4);
            let k = exponent(&mut replay, 1, 4);
            assert_eq!(coefficient, 1);
            assert_eq!((x_exponent, y_exponent), (n + k, m), "seed={seed}");
        }
    }
}
