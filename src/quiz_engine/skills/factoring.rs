//! Levels 57–63: dividing polynomials, then cancelling a common binomial
//! factor. Every solver draws the quotient first and multiplies back up, so
//! division is always exact.

use rand::RngCore;

use crate::quiz_engine::{
    distractors::factoring::{self as wrong, Power},
    format::Expr,
    helpers::{coeff, coin, exponent, Solved},
    models::{CoefficientRange, OptionPool, StructuredResult, Term},
    retry::try_up_to,
    skills::REDRAW_ATTEMPTS,
};

/// One exact division prompt: `numerator / denominator = result`.
#[derive(Debug, Clone)]
pub struct Division {
    pub numerator: Vec<Term>,
    pub denominator: Vec<Term>,
    pub result: StructuredResult,
    pub options: OptionPool,
}

impl From<Division> for Solved {
    fn from(d: Division) -> Self {
        let question = Expr::fraction(Expr::sum(d.numerator), Expr::sum(d.denominator)).to_string();
        Solved::new(question, d.result, d.result, d.options)
    }
}

fn linear(x_coefficient: i64, constant: i64) -> StructuredResult {
    StructuredResult::Linear { x_coefficient, constant }
}

fn sign(rng: &mut dyn RngCore) -> i64 {
    if coin(rng) { 1 } else { -1 }
}

fn binomial_by_constant(rng: &mut dyn RngCore, range: CoefficientRange) -> Division {
    let signed = range.signed();
    let c = coeff(rng, signed);
    let x = coeff(rng, signed);
    let k = coeff(rng, signed);
    let (a, b) = (x * c, k * c);
    Division {
        numerator: vec![Term::x(a, 1), Term::constant(b)],
        denominator: vec![Term::constant(c)],
        result: linear(x, k),
        options: wrong::simple_division(rng, a, b, c, x, k),
    }
}

/// Two distinct quotient exponents in `1..=3`.
fn distinct_exponents(rng: &mut dyn RngCore) -> (i64, i64) {
    try_up_to(REDRAW_ATTEMPTS, |_| {
        let e1 = exponent(rng, 1, 3);
        let e2 = exponent(rng, 1, 3);
        (e1 != e2).then_some((e1, e2))
    })
    .unwrap_or((2, 1))
}

fn polynomial_by_monomial(rng: &mut dyn RngCore, range: CoefficientRange) -> Division {
    let signed = range.signed();
    let c = coeff(rng, signed);
    let r1 = coeff(rng, signed);
    let r2 = coeff(rng, signed);
    let n = exponent(rng, 1, 3);
    let (e1, e2) = distinct_exponents(rng);

    let (first, second) = (Power { coefficient: r1, exponent: e1 }, Power { coefficient: r2, exponent: e2 });
    let [hi, lo] = if e1 > e2 { [first, second] } else { [second, first] };
    let lift = |p: Power| Power { coefficient: p.coefficient * c, exponent: p.exponent + n };
    let numerator = [lift(hi), lift(lo)];

    Division {
        numerator: numerator.iter().map(|p| Term::x(p.coefficient, p.exponent)).collect(),
        denominator: vec![Term::x(c, n)],
        result: StructuredResult::TwoTerm {
            term1_coefficient: hi.coefficient,
            term1_exponent: hi.exponent,
            term2_coefficient: lo.coefficient,
            term2_exponent: lo.exponent,
        },
        options: wrong::monomial_division(rng, numerator, c, n, [hi, lo]),
    }
}

fn difference_of_squares(rng: &mut dyn RngCore, range: CoefficientRange) -> Division {
    let a = coeff(rng, range.unsigned());
    let s = sign(rng);
    Division {
        numerator: vec![Term::x(1, 2), Term::constant(-(a * a))],
        denominator: vec![Term::x(1, 1), Term::constant(s * a)],
        result: linear(1, -s * a),
        options: wrong::factor_difference_of_squares(rng, a, -s * a),
    }
}

fn perfect_square(rng: &mut dyn RngCore, range: CoefficientRange) -> Division {
    let a = coeff(rng, range.unsigned());
    let k = sign(rng) * a;
    Division {
        numerator: vec![Term::x(1, 2), Term::x(2 * k, 1), Term::constant(a * a)],
        denominator: vec![Term::x(1, 1), Term::constant(k)],
        result: linear(1, k),
        options: wrong::factor_perfect_square(rng, a, k),
    }
}

fn scaled_perfect_square(rng: &mut dyn RngCore, range: CoefficientRange) -> Division {
    let a = coeff(rng, range.unsigned());
    let n = coeff(rng, range.unsigned());
    let k = sign(rng) * a;
    Division {
        numerator: vec![Term::x(n, 2), Term::x(2 * n * k, 1), Term::constant(n * a * a)],
        denominator: vec![Term::x(1, 1), Term::constant(k)],
        result: linear(n, n * k),
        options: wrong::factor_scaled_perfect_square(rng, n, n, n * k),
    }
}

fn binomial_product_with(rng: &mut dyn RngCore, range: CoefficientRange, n: i64) -> Division {
    let signed = range.signed();
    let a = coeff(rng, signed);
    let b = coeff(rng, signed);
    let c = coeff(rng, signed);
    let d = coeff(rng, signed);
    let ((den_x, den_c), (ans_x, ans_c)) = if coin(rng) { ((a, b), (c, d)) } else { ((c, d), (a, b)) };

    Division {
        numerator: vec![
            Term::x(n * den_x * ans_x, 2),
            Term::x(n * (den_x * ans_c + den_c * ans_x), 1),
            Term::constant(n * den_c * ans_c),
        ],
        denominator: vec![Term::x(den_x, 1), Term::constant(den_c)],
        result: linear(n * ans_x, n * ans_c),
        options: wrong::factor_binomial_product(rng, n, (den_x, den_c), n * ans_x, n * ans_c),
    }
}

fn binomial_product(rng: &mut dyn RngCore, range: CoefficientRange) -> Division {
    binomial_product_with(rng, range, 1)
}

fn scaled_binomial_product(rng: &mut dyn RngCore, range: CoefficientRange) -> Division {
    let n = coeff(rng, range.unsigned());
    binomial_product_with(rng, range, n)
}

/// Level 57: `(ax + b) / c`.
pub fn divide_binomial_by_constant(rng: &mut dyn RngCore, range: CoefficientRange) -> Solved {
    binomial_by_constant(rng, range).into()
}

/// Level 58: `(axᵏ + bxᵐ) / cxⁿ`, numerator written highest power first.
pub fn divide_polynomial_by_monomial(rng: &mut dyn RngCore, range: CoefficientRange) -> Solved {
    polynomial_by_monomial(rng, range).into()
}

/// Level 59: `(x² - a²) / (x ± a)`.
pub fn factor_difference_of_squares(rng: &mut dyn RngCore, range: CoefficientRange) -> Solved {
    difference_of_squares(rng, range).into()
}

/// Level 60: `(x ± a)² / (x ± a)` with the square expanded.
pub fn factor_perfect_square(rng: &mut dyn RngCore, range: CoefficientRange) -> Solved {
    perfect_square(rng, range).into()
}

/// Level 61: `n(x ± a)² / (x ± a)`.
pub fn factor_scaled_perfect_square(rng: &mut dyn RngCore, range: CoefficientRange) -> Solved {
    scaled_perfect_square(rng, range).into()
}

/// Level 62: `(ax + b)(cx + d) / (ax + b)` with the product expanded.
pub fn factor_binomial_product(rng: &mut dyn RngCore, range: CoefficientRange) -> Solved {
    binomial_product(rng, range).into()
}

/// Level 63: as level 62 with a common multiplier `n`.
pub fn factor_scaled_binomial_product(rng: &mut dyn RngCore, range: CoefficientRange) -> Solved {
    scaled_binomial_product(rng, range).into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;

    use rand::rngs::StdRng;
    use rand::SeedableRng;

    /// Coefficients by exponent, zero terms dropped.
    fn collect(terms: impl IntoIterator<Item = (i64, i64)>) -> BTreeMap<i64, i64> {
        let mut poly = BTreeMap::new();
        for (coefficient, exponent) in terms {
            *poly.entry(exponent).or_insert(0) += coefficient;
        }
        poly.retain(|_, c| *c != 0);
        poly
    }

    fn result_terms(result: StructuredResult) -> Vec<(i64, i64)> {
        match result {
            StructuredResult::Linear { x_coefficient, constant } => vec![(x_coefficient, 1), (constant, 0)],
            StructuredResult::TwoTerm { term1_coefficient, term1_exponent, term2_coefficient, term2_exponent } => {
                vec![(term1_coefficient, term1_exponent), (term2_coefficient, term2_exponent)]
            }
            other => panic!("unexpected shape {other:?}"),
        }
    }

    #[test]
    fn every_division_level_multiplies_back_to_its_numerator() {
        let levels: [(u8, fn(&mut dyn RngCore, CoefficientRange) -> Division); 7] = [
            (57, binomial_by_constant),
            (58, polynomial_by_monomial),
            (59, difference_of_squares),
            (60, perfect_square),
            (61, scaled_perfect_square),
            (62, binomial_product),
            (63, scaled_binomial_product),
        ];
        for (level, draw) in levels {
            for (min, max) in [(1, 1), (1, 10), (4, 4), (1, 1000)] {
                let range = CoefficientRange::normalized(min, max);
                for seed in 0..60 {
                    let d = draw(&mut StdRng::seed_from_u64(seed), range);
                    let quotient = result_terms(d.result);
                    let product = quotient.iter().flat_map(|&(qc, qe)| {
                        d.denominator.iter().map(move |t| (qc * t.coefficient, qe + t.exponent))
                    });
                    let numerator = d.numerator.iter().map(|t| (t.coefficient, t.exponent));
                    assert_eq!(
                        collect(product),
                        collect(numerator),
                        "level {level} seed {seed} range {min}..={max}: {d:?}"
                    );
                }
            }
        }
    }

    #[test]
    fn solvers_render_their_division() {
        let range = CoefficientRange::default();
        let d = scaled_binomial_product(&mut StdRng::seed_from_u64(12), range);
        let solved = factor_scaled_binomial_product(&mut StdRng::seed_from_u64(12), range);
        assert_eq!(solved.result, d.result);
        assert_eq!(solved.options, d.options);
        assert_eq!(solved.question, Solved::from(d).question);
    }

    #[test]
    fn constant_division_is_exact() {
        for seed in 0..100 {
            let mut rng = StdRng::seed_from_u64(seed);
            let solved = divide_binomial_by_constant(&mut rng, CoefficientRange::normalized(2, 9));
            assert!(solved.question.contains("class=\"fraction\""));
            assert!(matches!(solved.result, StructuredResult::Linear { x_coefficient, constant } if x_coefficient != 0 && constant != 0));
        }
    }

    #[test]
    fn monomial_division_orders_numerator_and_result() {
        for seed in 0..100 {
            let mut rng = StdRng::seed_from_u64(seed);
            let solved = divide_polynomial_by_monomial(&mut rng, CoefficientRange::normalized(1, 6));
            let StructuredResult::TwoTerm { term1_exponent, term2_exponent, .. } = solved.result else {
                panic!("unexpected shape");
            };
            assert!(term1_exponent > term2_exponent, "seed={seed}");
            assert!((1..=3).contains(&term2_exponent) && term1_exponent <= 3);
        }
    }

    #[test]
    fn difference_of_squares_cancels_to_other_factor() {
        let range = CoefficientRange::normalized(5, 5);
        for seed in 0..20 {
            let mut rng = StdRng::seed_from_u64(seed);
            let solved = factor_difference_of_squares(&mut rng, range);
            if solved.question.contains("<span class=\"denominator\">x + 5</span>") {
                assert_eq!(solved.correct_answer, "x - 5");
            } else {
                assert_eq!(solved.correct_answer, "x + 5");
            }
        }
    }

    #[test]
    fn binomial_cancellation_keeps_the_other_factor() {
        for seed in 0..100 {
            let mut rng = StdRng::seed_from_u64(seed);
            let solved = factor_scaled_binomial_product(&mut rng, CoefficientRange::normalized(1, 5));
            let StructuredResult::Linear { x_coefficient, .. } = solved.result else {
                panic!("unexpected shape");
            };
            assert_ne!(x_coefficient, 0);
            assert!(solved.options.contains(&solved.correct_answer));
        }
    }
}
