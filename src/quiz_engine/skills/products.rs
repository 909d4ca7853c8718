//! Levels 48–56: special products and the general product of two binomials.

use rand::RngCore;

use crate::quiz_engine::{
    distractors::products as wrong,
    format::{group, Expr},
    helpers::{coeff, coin, Solved},
    models::{CoefficientRange, StructuredResult, Term},
};

/// `(ax + b)` as it appears in a prompt.
fn binomial(a: i64, b: i64) -> String {
    group(Expr::sum([Term::x(a, 1), Term::constant(b)]))
}

fn squared(a: i64, b: i64) -> String {
    Expr::power(Expr::sum([Term::x(a, 1), Term::constant(b)]), 2).to_string()
}

fn quadratic(x2: i64, x: i64, constant: i64) -> StructuredResult {
    StructuredResult::Quadratic {
        term1_coefficient: x2,
        term1_exponent: 2,
        term2_coefficient: x,
        term2_exponent: 1,
        constant,
    }
}

/// Two factors in random order.
fn either_order(rng: &mut dyn RngCore, first: String, second: String) -> String {
    if coin(rng) { format!("{first}{second}") } else { format!("{second}{first}") }
}

/// Level 48: `(x + a)(x - a)`.
pub fn difference_of_squares(rng: &mut dyn RngCore, range: CoefficientRange) -> Solved {
    let a = coeff(rng, range.unsigned());
    let question = either_order(rng, binomial(1, a), binomial(1, -a));
    let result = quadratic(1, 0, -(a * a));
    let options = wrong::difference_of_squares(rng, a);
    Solved::new(question, result, result, options)
}

fn perfect_square_with(rng: &mut dyn RngCore, a: i64) -> Solved {
    let result = quadratic(1, 2 * a, a * a);
    let options = wrong::perfect_square(rng, 2 * a, a * a);
    Solved::new(squared(1, a), result, result, options)
}

/// Level 49: `(x + a)²`.
pub fn perfect_square_sum(rng: &mut dyn RngCore, range: CoefficientRange) -> Solved {
    let a = coeff(rng, range.unsigned());
    perfect_square_with(rng, a)
}

/// Level 50: `(x - a)²`.
pub fn perfect_square_difference(rng: &mut dyn RngCore, range: CoefficientRange) -> Solved {
    let a = coeff(rng, range.unsigned());
    perfect_square_with(rng, -a)
}

/// Level 51: either sign.
pub fn perfect_square(rng: &mut dyn RngCore, range: CoefficientRange) -> Solved {
    let a = coeff(rng, range.signed());
    perfect_square_with(rng, a)
}

/// Level 52: `(ax + b)(ax - b)`.
pub fn scaled_difference_of_squares(rng: &mut dyn RngCore, range: CoefficientRange) -> Solved {
    let a = coeff(rng, range.unsigned());
    let b = coeff(rng, range.unsigned());
    let question = either_order(rng, binomial(a, b), binomial(a, -b));
    let result = quadratic(a * a, 0, -(b * b));
    let options = wrong::scaled_difference_of_squares(rng, a, b);
    Solved::new(question, result, result, options)
}

fn scaled_perfect_square_with(rng: &mut dyn RngCore, a: i64, b: i64) -> Solved {
    let middle = 2 * a * b;
    let result = quadratic(a * a, middle, b * b);
    let options = wrong::scaled_perfect_square(rng, a, b, middle);
    Solved::new(squared(a, b), result, result, options)
}

/// Level 53: `(ax + b)²`.
pub fn scaled_perfect_square_sum(rng: &mut dyn RngCore, range: CoefficientRange) -> Solved {
    let a = coeff(rng, range.unsigned());
    let b = coeff(rng, range.unsigned());
    scaled_perfect_square_with(rng, a, b)
}

/// Level 54: `(ax - b)²`.
pub fn scaled_perfect_square_difference(rng: &mut dyn RngCore, range: CoefficientRange) -> Solved {
    let a = coeff(rng, range.unsigned());
    let b = coeff(rng, range.unsigned());
    scaled_perfect_square_with(rng, a, -b)
}

/// Level 55: `(ax ± b)²`.
pub fn scaled_perfect_square(rng: &mut dyn RngCore, range: CoefficientRange) -> Solved {
    let a = coeff(rng, range.unsigned());
    let b = coeff(rng, range.signed());
    scaled_perfect_square_with(rng, a, b)
}

/// Level 56: `(ax + b)(cx + d)`, everything signed.
pub fn binomial_product(rng: &mut dyn RngCore, range: CoefficientRange) -> Solved {
    let signed = range.signed();
    let a = coeff(rng, signed);
    let b = coeff(rng, signed);
    let c = coeff(rng, signed);
    let d = coeff(rng, signed);
    let question = format!("{}{}", binomial(a, b), binomial(c, d));
    let result = quadratic(a * c, a * d + b * c, b * d);
    let options = wrong::binomial_product(rng, a, b, c, d);
    Solved::new(question, result, result, options)
}
