//! Levels 20–37: multiplying, dividing and raising single monomials.
//!
//! Division levels draw the quotient first and multiply it back up, so every
//! prompt divides exactly.

use rand::RngCore;
use tracing::debug;

use crate::quiz_engine::{
    distractors::monomials as wrong,
    format::{factor, format_fraction, term, times, Expr},
    helpers::{coeff, exponent, Solved},
    models::{CoefficientRange, StructuredResult, Term},
    retry::try_up_to,
    skills::REDRAW_ATTEMPTS,
};

/// Search budget for a balanced levels 36–37 split before mirroring the divisor.
pub const COMBINED_SEARCH_ATTEMPTS: usize = 100;

fn product(rng: &mut dyn RngCore, question: String, coefficient: i64, exp: i64, n: i64, m: i64) -> Solved {
    let result = StructuredResult::Monomial { coefficient, exponent: exp };
    let options = wrong::multiplication(rng, coefficient, exp, n, m);
    Solved::new(question, result, result, options)
}

/// Level 20: `a × bx`.
pub fn constant_times_term(rng: &mut dyn RngCore, range: CoefficientRange) -> Solved {
    let a = coeff(rng, range);
    let b = coeff(rng, range);
    let question = times(&[a.to_string(), term(Term::x(b, 1))]);
    product(rng, question, a * b, 1, 1, 1)
}

/// Level 21: signed `a × (bx)`.
pub fn signed_constant_times_term(rng: &mut dyn RngCore, range: CoefficientRange) -> Solved {
    let a = coeff(rng, range.signed());
    let b = coeff(rng, range.signed());
    let question = times(&[a.to_string(), factor(Term::x(b, 1))]);
    product(rng, question, a * b, 1, 1, 1)
}

/// Operands of one `axⁿ × bxᵐ` prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProductDraw {
    pub left: Term,
    pub right: Term,
}

fn draw_term_and_power(rng: &mut dyn RngCore, range: CoefficientRange) -> ProductDraw {
    let a = coeff(rng, range);
    let b = coeff(rng, range);
    let n = exponent(rng, 2, 4);
    ProductDraw { left: Term::x(a, 1), right: Term::x(b, n) }
}

fn draw_bare_powers(rng: &mut dyn RngCore, _range: CoefficientRange) -> ProductDraw {
    let n = exponent(rng, 2, 5);
    let m = exponent(rng, 2, 5);
    ProductDraw { left: Term::x(1, n), right: Term::x(1, m) }
}

fn draw_powers(rng: &mut dyn RngCore, range: CoefficientRange) -> ProductDraw {
    let a = coeff(rng, range);
    let b = coeff(rng, range);
    let n = exponent(rng, 2, 5);
    let m = exponent(rng, 2, 5);
    ProductDraw { left: Term::x(a, n), right: Term::x(b, m) }
}

/// Exponents add: `axⁿ × bxᵐ = ab·xⁿ⁺ᵐ`.
fn multiply(rng: &mut dyn RngCore, draw: ProductDraw, bracketed: bool) -> Solved {
    let render: fn(Term) -> String = if bracketed { factor } else { term };
    let question = times(&[render(draw.left), render(draw.right)]);
    let (n, m) = (draw.left.exponent, draw.right.exponent);
    product(rng, question, draw.left.coefficient * draw.right.coefficient, n + m, n, m)
}

/// Level 22: `ax × bxⁿ`.
pub fn term_times_power(rng: &mut dyn RngCore, range: CoefficientRange) -> Solved {
    let draw = draw_term_and_power(rng, range);
    multiply(rng, draw, false)
}

/// Level 23: `xⁿ × xᵐ`.
pub fn bare_powers(rng: &mut dyn RngCore, range: CoefficientRange) -> Solved {
    let draw = draw_bare_powers(rng, range);
    multiply(rng, draw, false)
}

/// Level 24: `axⁿ × bxᵐ`.
pub fn powers(rng: &mut dyn RngCore, range: CoefficientRange) -> Solved {
    let draw = draw_powers(rng, range);
    multiply(rng, draw, false)
}

/// Level 25: signed `axⁿ × bxᵐ`.
pub fn signed_powers(rng: &mut dyn RngCore, range: CoefficientRange) -> Solved {
    let draw = draw_powers(rng, range.signed());
    multiply(rng, draw, true)
}

/// Operands of one `axⁿ / bxᵐ` prompt, with `a = quotient · b`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DivisionDraw {
    pub numerator: Term,
    pub denominator: Term,
    pub quotient: i64,
}

fn draw_division(rng: &mut dyn RngCore, range: CoefficientRange, n: i64, m: i64) -> DivisionDraw {
    let quotient = coeff(rng, range.halved());
    let b = coeff(rng, range);
    DivisionDraw {
        numerator: Term::x(quotient * b, n),
        denominator: if m == 0 { Term::constant(b) } else { Term::x(b, m) },
        quotient,
    }
}

fn quotient_question(rng: &mut dyn RngCore, draw: DivisionDraw, reciprocal: bool) -> Solved {
    let question = Expr::fraction(Expr::single(draw.numerator), Expr::single(draw.denominator)).to_string();
    let exp = draw.numerator.exponent - draw.denominator.exponent;
    let result = StructuredResult::Monomial { coefficient: draw.quotient, exponent: exp };
    let answer = wrong::quotient(draw.quotient, exp, reciprocal);
    let options = wrong::division(rng, draw.quotient, exp, reciprocal);
    Solved::new(question, answer, result, options)
}

/// Exponent pair with `n < m`, so the quotient has a negative exponent.
fn falling_exponents(rng: &mut dyn RngCore) -> (i64, i64) {
    try_up_to(REDRAW_ATTEMPTS, |_| {
        let n = exponent(rng, 1, 5);
        let m = exponent(rng, 2, 6);
        (n < m).then_some((n, m))
    })
    .unwrap_or((1, 2))
}

fn draw_constant_division(rng: &mut dyn RngCore, range: CoefficientRange) -> DivisionDraw {
    draw_division(rng, range, 1, 0)
}

fn draw_signed_constant_division(rng: &mut dyn RngCore, range: CoefficientRange) -> DivisionDraw {
    draw_division(rng, range.signed(), 1, 0)
}

fn draw_power_division(rng: &mut dyn RngCore, range: CoefficientRange) -> DivisionDraw {
    let n = exponent(rng, 1, 6);
    let m = exponent(rng, 1, 6);
    draw_division(rng, range.signed(), n, m)
}

fn draw_falling_division(rng: &mut dyn RngCore, range: CoefficientRange) -> DivisionDraw {
    let (n, m) = falling_exponents(rng);
    draw_division(rng, range.signed(), n, m)
}

/// Level 26: `ax / b`.
pub fn divide_by_constant(rng: &mut dyn RngCore, range: CoefficientRange) -> Solved {
    let draw = draw_constant_division(rng, range);
    quotient_question(rng, draw, false)
}

/// Level 27: signed `ax / b`.
pub fn signed_divide_by_constant(rng: &mut dyn RngCore, range: CoefficientRange) -> Solved {
    let draw = draw_signed_constant_division(rng, range);
    quotient_question(rng, draw, false)
}

/// Level 28: `axⁿ / bxᵐ`, any exponent order.
pub fn divide_powers(rng: &mut dyn RngCore, range: CoefficientRange) -> Solved {
    let draw = draw_power_division(rng, range);
    quotient_question(rng, draw, false)
}

/// Level 29: `n < m`, negative exponent shown as is.
pub fn divide_to_negative_power(rng: &mut dyn RngCore, range: CoefficientRange) -> Solved {
    let draw = draw_falling_division(rng, range);
    quotient_question(rng, draw, false)
}

/// Level 30: `n < m`, answer written as `c / xᵏ`.
pub fn divide_to_reciprocal(rng: &mut dyn RngCore, range: CoefficientRange) -> Solved {
    let draw = draw_falling_division(rng, range);
    quotient_question(rng, draw, true)
}

/// Operands of one `(axⁿ)ᵐ` prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PowerDraw {
    pub base: Term,
    pub power: i64,
}

fn draw_power_of_power(rng: &mut dyn RngCore, _range: CoefficientRange) -> PowerDraw {
    let n = exponent(rng, 2, 5);
    let m = exponent(rng, 2, 4);
    PowerDraw { base: Term::x(1, n), power: m }
}

fn draw_raised_monomial(rng: &mut dyn RngCore, range: CoefficientRange, force_negative: bool) -> PowerDraw {
    let n = exponent(rng, 1, 4);
    let m = exponent(rng, 2, 3);
    let mut a = coeff(rng, range);
    if force_negative && a > 0 {
        a = -a;
    }
    PowerDraw { base: Term::x(a, n), power: m }
}

/// Exponents multiply: `(axⁿ)ᵐ = aᵐ·xⁿᵐ`.
/// `bare` marks the unit-coefficient `(xⁿ)ᵐ` form, whose slips skip the
/// coefficient.
fn raise(rng: &mut dyn RngCore, draw: PowerDraw, bare: bool) -> Solved {
    let PowerDraw { base, power: m } = draw;
    let (a, n) = (base.coefficient, base.exponent);
    let coefficient = a.pow(m as u32);
    let question = Expr::power(Expr::single(base), m).to_string();
    let result = StructuredResult::Monomial { coefficient, exponent: n * m };
    let options = if bare {
        wrong::power_of_power(rng, n * m, n, m)
    } else {
        wrong::power_of_monomial(rng, coefficient, n * m, a, n, m)
    };
    Solved::new(question, result, result, options)
}

/// Level 31: `(xⁿ)ᵐ`.
pub fn power_of_power(rng: &mut dyn RngCore, range: CoefficientRange) -> Solved {
    let draw = draw_power_of_power(rng, range);
    raise(rng, draw, true)
}

/// Level 32: `(axⁿ)ᵐ` with `a > 0`.
pub fn power_of_positive_monomial(rng: &mut dyn RngCore, range: CoefficientRange) -> Solved {
    let draw = draw_raised_monomial(rng, range, false);
    raise(rng, draw, false)
}

/// Level 33: `a < 0`.
pub fn power_of_negative_monomial(rng: &mut dyn RngCore, range: CoefficientRange) -> Solved {
    let draw = draw_raised_monomial(rng, range.signed(), true);
    raise(rng, draw, false)
}

/// Level 34: any sign.
pub fn power_of_signed_monomial(rng: &mut dyn RngCore, range: CoefficientRange) -> Solved {
    let draw = draw_raised_monomial(rng, range.signed(), false);
    raise(rng, draw, false)
}

/// Level 35: `xⁿ × xᵐ / xᵏ`.
pub fn multiply_then_divide(rng: &mut dyn RngCore, _range: CoefficientRange) -> Solved {
    let n = exponent(rng, 2, 6);
    let m = exponent(rng, 2, 6);
    let k = exponent(rng, 1, n + m - 1);
    let question = format_fraction(
        &times(&[term(Term::x(1, n)), term(Term::x(1, m))]),
        &term(Term::x(1, k)),
    );
    let result = StructuredResult::Monomial { coefficient: 1, exponent: n + m - k };
    let options = wrong::combined(rng, 1, n + m - k, n, m, k);
    Solved::new(question, result, result, options)
}

/// Operands of one `axⁿ × bxᵐ / cxᵏ` prompt with `a·b = quotient·c`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CombinedDraw {
    pub a: i64,
    pub b: i64,
    pub c: i64,
    pub quotient: i64,
    pub n: i64,
    pub m: i64,
    pub k: i64,
}

fn combined_exponents(rng: &mut dyn RngCore) -> (i64, i64, i64) {
    let n = exponent(rng, 1, 5);
    let m = exponent(rng, 1, 5);
    let k = exponent(rng, 0, n + m - 1);
    (n, m, k)
}

/// Search for coefficients where `quotient · c` splits evenly into `a · b`
/// with `b` inside `min..=3·max`.
pub fn search_combined(rng: &mut dyn RngCore, range: CoefficientRange) -> Option<CombinedDraw> {
    try_up_to(COMBINED_SEARCH_ATTEMPTS, |_| {
        let quotient = coeff(rng, range.halved());
        let c = coeff(rng, range);
        let a = coeff(rng, range);
        let numerator = quotient * c;
        if numerator % a != 0 {
            return None;
        }
        let b = numerator / a;
        if b == 0 || b.abs() > range.max * 3 || b.abs() < range.min {
            return None;
        }
        let (n, m, k) = combined_exponents(rng);
        Some(CombinedDraw { a, b, c, quotient, n, m, k })
    })
}

/// Divisible by construction: `a = c` and `b = quotient`.
fn mirrored_combined(rng: &mut dyn RngCore, range: CoefficientRange) -> CombinedDraw {
    let quotient = coeff(rng, range.halved());
    let c = coeff(rng, range);
    let (n, m, k) = combined_exponents(rng);
    CombinedDraw { a: c, b: quotient, c, quotient, n, m, k }
}

/// Operands for levels 36–37. Wide ranges rarely yield a balanced split, so
/// an exhausted search falls back to [`mirrored_combined`].
pub fn draw_combined(rng: &mut dyn RngCore, range: CoefficientRange) -> CombinedDraw {
    search_combined(rng, range).unwrap_or_else(|| {
        debug!(
            attempts = COMBINED_SEARCH_ATTEMPTS,
            min = range.min,
            max = range.max,
            "no balanced operand split found; mirroring the divisor"
        );
        mirrored_combined(rng, range)
    })
}

fn combined_with(rng: &mut dyn RngCore, range: CoefficientRange) -> Solved {
    let d = draw_combined(rng, range);
    let question = format_fraction(
        &times(&[factor(Term::x(d.a, d.n)), factor(Term::x(d.b, d.m))]),
        &factor(Term::x(d.c, d.k)),
    );
    let exp = d.n + d.m - d.k;
    let result = StructuredResult::Monomial { coefficient: d.quotient, exponent: exp };
    let options = wrong::combined(rng, d.quotient, exp, d.n, d.m, d.k);
    Solved::new(question, result, result, options)
}

/// Level 36: `axⁿ × bxᵐ / cxᵏ`, all positive.
pub fn multiply_divide_monomials(rng: &mut dyn RngCore, range: CoefficientRange) -> Solved {
    combined_with(rng, range.unsigned())
}

/// Level 37: signed coefficients.
pub fn signed_multiply_divide_monomials(rng: &mut dyn RngCore, range: CoefficientRange) -> Solved {
    combined_with(rng, range.signed())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn division_draws_divide_exactly() {
        for seed in 0..200 {
            let mut rng = StdRng::seed_from_u64(seed);
            let range = CoefficientRange::normalized(1, 10).signed();
            let draw = draw_division(&mut rng, range, 4, 2);
            assert_eq!(draw.numerator.coefficient, draw.quotient * draw.denominator.coefficient);
            assert!(draw.quotient.abs() <= 5, "quotient exceeds half the range");
        }
    }

    #[test]
    fn reciprocal_level_answers_with_fraction() {
        for seed in 0..50 {
            let mut rng = StdRng::seed_from_u64(seed);
            let solved = divide_to_reciprocal(&mut rng, CoefficientRange::default());
            assert!(solved.correct_answer.contains("fraction"), "seed={seed}");
            match solved.result {
                StructuredResult::Monomial { exponent, .. } => assert!(exponent < 0),
                other => panic!("unexpected {other:?}"),
            }
        }
    }

    #[test]
    fn negative_base_sign_follows_outer_power() {
        for seed in 0..50 {
            let mut rng = StdRng::seed_from_u64(seed);
            let solved = power_of_negative_monomial(&mut rng, CoefficientRange::normalized(2, 5));
            let StructuredResult::Monomial { coefficient, .. } = solved.result else {
                panic!("unexpected shape");
            };
            // An odd outer power keeps the sign of the negative base.
            if solved.question.ends_with("<sup>3</sup>") {
                assert!(coefficient < 0);
            } else {
                assert!(coefficient > 0);
            }
        }
    }

    type Solve = fn(&mut dyn RngCore, CoefficientRange) -> Solved;

    const RANGES: [(i64, i64); 4] = [(1, 1), (1, 10), (3, 3), (1, 1000)];

    #[test]
    fn every_division_level_multiplies_back_to_its_numerator() {
        let levels: [(u8, Solve, fn(&mut dyn RngCore, CoefficientRange) -> DivisionDraw); 5] = [
            (26, divide_by_constant, draw_constant_division),
            (27, signed_divide_by_constant, draw_signed_constant_division),
            (28, divide_powers, draw_power_division),
            (29, divide_to_negative_power, draw_falling_division),
            (30, divide_to_reciprocal, draw_falling_division),
        ];
        for (level, solve, draw) in levels {
            for (min, max) in RANGES {
                let range = CoefficientRange::normalized(min, max);
                for seed in 0..60 {
                    let d = draw(&mut StdRng::seed_from_u64(seed), range);
                    let solved = solve(&mut StdRng::seed_from_u64(seed), range);
                    let StructuredResult::Monomial { coefficient, exponent } = solved.result else {
                        panic!("level {level}: unexpected shape {:?}", solved.result);
                    };
                    assert_ne!(d.denominator.coefficient, 0);
                    assert_eq!(
                        coefficient * d.denominator.coefficient,
                        d.numerator.coefficient,
                        "level {level} seed {seed}: {d:?}"
                    );
                    assert_eq!(exponent + d.denominator.exponent, d.numerator.exponent, "level {level} seed {seed}");
                }
            }
        }
    }

    #[test]
    fn multiplication_levels_add_exponents() {
        let levels: [(u8, Solve, fn(&mut dyn RngCore, CoefficientRange) -> ProductDraw); 4] = [
            (22, term_times_power, draw_term_and_power),
            (23, bare_powers, draw_bare_powers),
            (24, powers, draw_powers),
            (25, signed_powers, |rng, range| draw_powers(rng, range.signed())),
        ];
        for (level, solve, draw) in levels {
            for seed in 0..80 {
                let range = CoefficientRange::default();
                let d = draw(&mut StdRng::seed_from_u64(seed), range);
                let solved = solve(&mut StdRng::seed_from_u64(seed), range);
                let (n, m) = (d.left.exponent, d.right.exponent);
                assert_eq!(
                    solved.result,
                    StructuredResult::Monomial {
                        coefficient: d.left.coefficient * d.right.coefficient,
                        exponent: n + m,
                    },
                    "level {level} seed {seed}"
                );
            }
        }
    }

    #[test]
    fn power_levels_multiply_exponents() {
        let levels: [(u8, Solve, fn(&mut dyn RngCore, CoefficientRange) -> PowerDraw); 4] = [
            (31, power_of_power, draw_power_of_power),
            (32, power_of_positive_monomial, |rng, range| draw_raised_monomial(rng, range, false)),
            (33, power_of_negative_monomial, |rng, range| draw_raised_monomial(rng, range.signed(), true)),
            (34, power_of_signed_monomial, |rng, range| draw_raised_monomial(rng, range.signed(), false)),
        ];
        for (level, solve, draw) in levels {
            for seed in 0..80 {
                let range = CoefficientRange::normalized(1, 6);
                let d = draw(&mut StdRng::seed_from_u64(seed), range);
                let solved = solve(&mut StdRng::seed_from_u64(seed), range);
                assert_eq!(
                    solved.result,
                    StructuredResult::Monomial {
                        coefficient: d.base.coefficient.pow(d.power as u32),
                        exponent: d.base.exponent * d.power,
                    },
                    "level {level} seed {seed}"
                );
            }
        }
    }

    #[test]
    fn combined_draw_balances_coefficients() {
        for (min, max) in RANGES {
            let range = CoefficientRange::normalized(min, max).signed();
            for seed in 0..100 {
                let d = draw_combined(&mut StdRng::seed_from_u64(seed), range);
                assert_eq!(d.a * d.b, d.quotient * d.c, "range {min}..={max} seed {seed}");
                assert!(d.n + d.m - d.k > 0);
            }
        }
    }

    #[test]
    fn mirrored_fallback_divides_exactly() {
        let range = CoefficientRange::normalized(1, 1000).signed();
        for seed in 0..100 {
            let d = mirrored_combined(&mut StdRng::seed_from_u64(seed), range);
            assert_eq!(d.a * d.b, d.quotient * d.c);
            assert!((0..d.n + d.m).contains(&d.k));
        }
    }

    #[test]
    fn wide_range_combined_level_stays_a_quotient() {
        let range = CoefficientRange::normalized(1, 1000);
        for seed in 0..200 {
            let solved = signed_multiply_divide_monomials(&mut StdRng::seed_from_u64(seed), range);
            assert!(solved.question.contains("class=\"fraction\""), "seed={seed}: {}", solved.question);
            assert!(solved.question.contains("&times;"));
        }
    }

    #[test]
    fn positive_combined_level_has_no_negative_operands() {
        for seed in 0..50 {
            let mut rng = StdRng::seed_from_u64(seed);
            let solved = multiply_divide_monomials(&mut rng, CoefficientRange::normalized(1, 8));
            assert!(!solved.question.contains('-'), "seed={seed}: {}", solved.question);
        }
    }
}
