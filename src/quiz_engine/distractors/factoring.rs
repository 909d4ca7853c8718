//! Wrong answers for polynomial division and cancelling a common factor
//! (levels 57–63).

use rand::Rng;

use crate::quiz_engine::{
    distractors::pool::{jitter, PoolBuilder},
    format::Expr,
    models::{OptionPool, StructuredResult, Term},
};

fn linear(x: i64, c: i64) -> String {
    StructuredResult::Linear { x_coefficient: x, constant: c }.to_string()
}

fn two_terms(c1: i64, e1: i64, c2: i64, e2: i64) -> String {
    Expr::sum([Term::x(c1, e1), Term::x(c2, e2)]).to_string()
}

fn square_form(middle: i64, constant: i64) -> String {
    Expr::sum([Term::x(1, 2), Term::x(middle, 1), Term::constant(constant)]).to_string()
}

/// Nudge `x` by up to one and `c` by up to two steps of `unit`. Skips the
/// answer itself and the all-zero binomial.
fn nearby_linear<R: Rng + ?Sized>(rng: &mut R, x: i64, c: i64, unit: i64) -> Option<String> {
    let rx = x + jitter(rng, 1) * unit;
    let rc = c + jitter(rng, 2) * unit;
    let unchanged = rx == x && rc == c;
    (!unchanged && (rx != 0 || rc != 0)).then(|| linear(rx, rc))
}

/// `(ax + b) / c` answers. `x` and `constant` are the quotient.
pub fn simple_division<R: Rng + ?Sized>(rng: &mut R, a: i64, b: i64, c: i64, x: i64, constant: i64) -> OptionPool {
    let mut pool = PoolBuilder::new(linear(x, constant));

    // Divided only one of the two terms.
    pool.offer(linear(x, b));
    pool.offer(linear(a, constant));
    pool.offer(linear(a * c, b * c));
    pool.offer(linear(x, -constant));

    pool.pad(rng, |rng| nearby_linear(rng, x, constant, 1));
    pool.finish(rng, |i| linear(x + i as i64, constant + i as i64))
}

/// One numerator term `coefficient·x^exponent` of a level-58 prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Power {
    pub coefficient: i64,
    pub exponent: i64,
}

/// `(axᵏ + bxᵐ) / cxⁿ` answers. `numerator` and `result` are both in
/// descending exponent order, term for term.
pub fn monomial_division<R: Rng + ?Sized>(
    rng: &mut R,
    numerator: [Power; 2],
    c: i64,
    n: i64,
    result: [Power; 2],
) -> OptionPool {
    let [top, bottom] = numerator;
    let [t1, t2] = result;
    let mut pool = PoolBuilder::new(two_terms(t1.coefficient, t1.exponent, t2.coefficient, t2.exponent));

    let (m1, m2) = (top.exponent * n, bottom.exponent * n);
    pool.offer_if(
        m1 != t1.exponent || m2 != t2.exponent,
        two_terms(t1.coefficient, m1, t2.coefficient, m2),
    );
    pool.offer(two_terms(t1.coefficient, t1.exponent, bottom.coefficient, bottom.exponent));
    // Coefficients divided, exponents left alone.
    pool.offer(two_terms(t1.coefficient, top.exponent, t2.coefficient, bottom.exponent));
    pool.offer(two_terms(top.coefficient * c, t1.exponent, bottom.coefficient * c, t2.exponent));

    pool.pad(rng, |rng| {
        let r1 = t1.coefficient + jitter(rng, 1);
        let r2 = t2.coefficient + jitter(rng, 1);
        let mut e1 = t1.exponent + jitter(rng, 1);
        let mut e2 = t2.exponent + jitter(rng, 1);
        if e1 == 0 {
            e1 = 1;
        }
        if e2 == 0 {
            e2 = 1;
        }
        if e1 == e2 {
            e1 += 1;
        }
        Some(two_terms(r1, e1, r2, e2))
    });
    pool.finish(rng, |i| {
        let i = i as i64;
        two_terms(t1.coefficient + i, t1.exponent + i % 2, t2.coefficient + i, t2.exponent - i % 2)
    })
}

fn nearby_constant<R: Rng + ?Sized>(rng: &mut R, constant: i64) -> Option<String> {
    let rc = constant + jitter(rng, 2);
    (rc != constant && rc != -constant).then(|| linear(1, rc))
}

/// `(x² - a²) / (x ± a)` answers. `constant` is the answer's `∓a`.
pub fn factor_difference_of_squares<R: Rng + ?Sized>(rng: &mut R, a: i64, constant: i64) -> OptionPool {
    let mut pool = PoolBuilder::new(linear(1, constant));

    pool.offer(linear(1, -constant));
    // Left the numerator as it was, or got its sign wrong.
    pool.offer(square_form(0, -(a * a)));
    pool.offer(square_form(0, a * a));
    pool.offer(Expr::single(Term::x(1, 1)));

    pool.pad(rng, |rng| nearby_constant(rng, constant));
    pool.finish(rng, |i| linear(1, constant + i as i64))
}

/// `(x ± a)² / (x ± a)` answers. `constant` is the answer's `±a`.
pub fn factor_perfect_square<R: Rng + ?Sized>(rng: &mut R, a: i64, constant: i64) -> OptionPool {
    let mut pool = PoolBuilder::new(linear(1, constant));

    pool.offer(linear(1, -constant));
    pool.offer(square_form(0, -(a * a)));
    // The expanded square that is not the numerator.
    pool.offer_if(constant < 0, square_form(2 * a, a * a));
    pool.offer_if(constant > 0, square_form(-2 * a, a * a));

    pool.pad(rng, |rng| nearby_constant(rng, constant));
    pool.finish(rng, |i| linear(1, constant + i as i64))
}

/// `n(x ± a)² / (x ± a)` answers. The answer is `nx ± na`.
pub fn factor_scaled_perfect_square<R: Rng + ?Sized>(rng: &mut R, n: i64, x: i64, constant: i64) -> OptionPool {
    let (bare_x, bare_c) = (x / n, constant / n);
    let mut pool = PoolBuilder::new(linear(x, constant));

    // Forgot n entirely, or applied it to one term only.
    pool.offer(linear(bare_x, bare_c));
    pool.offer(linear(x, -constant));
    pool.offer(linear(x, bare_c));
    pool.offer(linear(bare_x, constant));

    pool.pad(rng, |rng| nearby_linear(rng, x, constant, 1));
    pool.finish(rng, |i| linear(x + i as i64, constant + i as i64))
}

/// `n(ax + b)(cx + d) / (ax + b)` answers. `(a, b)` is the cancelled factor,
/// the answer is `n(cx + d)` given as `x`, `constant`.
pub fn factor_binomial_product<R: Rng + ?Sized>(
    rng: &mut R,
    n: i64,
    (a, b): (i64, i64),
    x: i64,
    constant: i64,
) -> OptionPool {
    let mut pool = PoolBuilder::new(linear(x, constant));

    // Kept the wrong factor.
    pool.offer(linear(n * a, n * b));
    pool.offer_if(n != 1, linear(x / n, constant / n));
    pool.offer_if(n != 1, linear(a, b));
    pool.offer(linear(x, -constant));

    pool.pad(rng, |rng| nearby_linear(rng, x, constant, n));
    pool.finish(rng, |i| linear(x + i as i64, constant + i as i64))
}
