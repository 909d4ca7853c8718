//! Wrong answers for distribution and multi-variable products (levels 38–47).

use rand::Rng;

use crate::quiz_engine::{
    distractors::pool::{jitter, PoolBuilder},
    format::Expr,
    models::{OptionPool, StructuredResult, Term},
};

fn linear(x: i64, c: i64) -> Expr {
    Expr::sum([Term::x(x, 1), Term::constant(c)])
}

fn two_terms(c1: i64, e1: i64, c2: i64, e2: i64) -> Expr {
    Expr::sum([Term::x(c1, e1), Term::x(c2, e2)])
}

fn xy(coefficient: i64, x_exponent: i64, y_exponent: i64) -> String {
    StructuredResult::VariableProduct { coefficient, x_exponent, y_exponent }.to_string()
}

/// `a(bx + c)` answers: partial distribution, added factors, everything summed.
pub fn constant_over_binomial<R: Rng + ?Sized>(rng: &mut R, a: i64, b: i64, c: i64) -> OptionPool {
    let (x, k) = (a * b, a * c);
    let mut pool = PoolBuilder::new(StructuredResult::Linear { x_coefficient: x, constant: k });

    pool.offer(linear(a * b, c));
    pool.offer(linear(a, a * c));
    pool.offer(linear(a + b, a * c));
    pool.offer(linear(a * b, a + c));
    pool.offer(Expr::single(Term::x(a + b + c, 1)));

    pool.pad(rng, |rng| {
        let rx = x + jitter(rng, 2);
        let rc = k + jitter(rng, 2);
        (rx != 0 || rc != 0).then(|| linear(rx, rc))
    });
    pool.finish(rng, |i| linear(x + i as i64, k + i as i64))
}

/// `ax(bx + c)` answers.
pub fn variable_over_binomial<R: Rng + ?Sized>(rng: &mut R, a: i64, b: i64, c: i64) -> OptionPool {
    let (t1, t2) = (a * b, a * c);
    let mut pool = PoolBuilder::new(two_terms(t1, 2, t2, 1));

    // Exponents not added, x not carried to c, a not carried to c, a and b added.
    pool.offer(two_terms(a * b, 1, a * c, 1));
    pool.offer(Expr::sum([Term::x(a * b, 2), Term::constant(a * c)]));
    pool.offer(two_terms(a * b, 2, c, 1));
    pool.offer(two_terms(a + b, 2, a * c, 1));

    pool.pad(rng, |rng| {
        let r1 = t1 + jitter(rng, 1);
        let r2 = t2 + jitter(rng, 1);
        let e1 = (2 + jitter(rng, 1)).max(1);
        Some(two_terms(r1, e1, r2, 1))
    });
    pool.finish(rng, |i| two_terms(t1 + i as i64, 2, t2 + i as i64, 1))
}

/// Random neighbour of a two-term answer with distinct exponents.
fn nearby_two_terms<R: Rng + ?Sized>(rng: &mut R, t1: i64, e1: i64, t2: i64, e2: i64) -> Expr {
    let r1 = t1 + jitter(rng, 1);
    let r2 = t2 + jitter(rng, 1);
    let mut re1 = (e1 + jitter(rng, 1)).max(1);
    let re2 = (e2 + jitter(rng, 1)).max(1);
    if re1 == re2 {
        re1 += 1;
    }
    two_terms(r1, re1, r2, re2)
}

/// `axⁿ(bxᵐ + c)` answers.
pub fn power_over_binomial<R: Rng + ?Sized>(rng: &mut R, a: i64, n: i64, b: i64, m: i64, c: i64) -> OptionPool {
    let (t1, e1, t2, e2) = (a * b, n + m, a * c, n);
    let mut pool = PoolBuilder::new(two_terms(t1, e1, t2, e2));

    pool.offer_if(n + m != n * m, two_terms(a * b, n * m, a * c, n));
    pool.offer(Expr::sum([Term::x(a * b, n + m), Term::constant(a * c)]));
    pool.offer(two_terms(a * b, n, a * c, n));
    pool.offer_if(a * c != c, two_terms(a * b, n + m, c, n));

    pool.pad(rng, |rng| Some(nearby_two_terms(rng, t1, e1, t2, e2)));
    pool.finish(rng, |i| two_terms(t1 + i as i64, e1, t2 + i as i64, e2))
}

/// `axⁿ(bxᵐ + cxᵖ)` answers. The correct result is passed already ordered
/// by descending exponent.
#[allow(clippy::too_many_arguments)]
pub fn power_over_terms<R: Rng + ?Sized>(
    rng: &mut R,
    result: (i64, i64, i64, i64),
    a: i64,
    n: i64,
    b: i64,
    m: i64,
    c: i64,
    p: i64,
) -> OptionPool {
    let (t1, e1, t2, e2) = result;
    let mut pool = PoolBuilder::new(two_terms(t1, e1, t2, e2));

    pool.offer_if(n + m != n * m || n + p != n * p, two_terms(a * b, n * m, a * c, n * p));
    // x^n carried to only one of the two terms, or to neither.
    pool.offer(two_terms(a * b, n + m, a * c, p));
    pool.offer(two_terms(a * b, m, a * c, n + p));
    pool.offer(two_terms(a * b, m, a * c, p));

    pool.pad(rng, |rng| Some(nearby_two_terms(rng, t1, e1, t2, e2)));
    pool.finish(rng, |i| two_terms(t1 + i as i64, e1, t2 + i as i64, e2))
}

/// `xⁿ·yᵐ·xᵏ` answers.
pub fn variable_powers<R: Rng + ?Sized>(rng: &mut R, n: i64, m: i64, k: i64) -> OptionPool {
    let (xe, ye) = (n + k, m);
    let mut pool = PoolBuilder::new(xy(1, xe, ye));

    pool.offer_if(n * k != xe && n * k > 0, xy(1, n * k, ye));
    pool.offer_if(n + m + k != xe, xy(1, n + m + k, ye));
    pool.offer_if(m != xe || xe != ye, xy(1, m, xe));
    pool.offer_if(xe != ye, xy(1, xe, xe));
    pool.offer(Expr::product([Term::x(1, n), Term::y(1, m), Term::x(1, k)]));
    pool.offer(Expr::power(Expr::product([Term::x(1, 1), Term::y(1, 1)]), n + m + k));

    pool.pad(rng, |rng| {
        let mut rx = (xe + jitter(rng, 1)).max(1);
        let ry = (ye + jitter(rng, 1)).max(1);
        if rx == xe && ry == ye {
            rx += 1;
        }
        Some(xy(1, rx, ry))
    });
    pool.finish(rng, |i| xy(1, xe + i as i64, ye + 1))
}

/// `axⁿ·byᵐ·cxᵏ` answers. `a`, `b`, `c` are the prompt coefficients.
#[allow(clippy::too_many_arguments)]
pub fn scaled_variable_powers<R: Rng + ?Sized>(
    rng: &mut R,
    a: i64,
    b: i64,
    c: i64,
    n: i64,
    m: i64,
    k: i64,
) -> OptionPool {
    let (coefficient, xe, ye) = (a * b * c, n + k, m);
    let mut pool = PoolBuilder::new(xy(coefficient, xe, ye));

    pool.offer_if(coefficient != 0, xy(-coefficient, xe, ye));
    pool.offer_if(a + b + c != coefficient, xy(a + b + c, xe, ye));
    pool.offer_if(n * k != xe && n * k > 0, xy(coefficient, n * k, ye));
    pool.offer_if(n + m + k != xe, xy(coefficient, n + m + k, ye));
    pool.offer_if(m != xe || xe != ye, xy(coefficient, m, xe));
    // Dropped the middle coefficient.
    pool.offer_if(a * c != coefficient && b != 1, xy(a * c, xe, ye));

    pool.pad(rng, |rng| {
        let mut rc = coefficient + jitter(rng, 1) * a;
        if rc == coefficient {
            rc += if b > 1 { b } else { 2 };
        }
        if rc == 0 {
            rc = a + c;
        }
        let rx = (xe + jitter(rng, 1)).max(1);
        let ry = (ye + jitter(rng, 1)).max(1);
        Some(xy(rc, rx, ry))
    });
    pool.finish(rng, |i| xy(coefficient + i as i64, xe + i as i64, ye + 1))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn forgot_to_distribute_is_offered() {
        // 2(3x + 4) = 6x + 8. Five misconceptions compete for three slots.
        let mut seen_partial = false;
        for seed in 0..40 {
            let mut rng = StdRng::seed_from_u64(seed);
            let out = constant_over_binomial(&mut rng, 2, 3, 4);
            assert!(out.contains("6x + 8"));
            seen_partial |= out.contains("6x + 4");
        }
        assert!(seen_partial);
    }

    #[test]
    fn variable_powers_render_products() {
        let mut rng = StdRng::seed_from_u64(4);
        let out = variable_powers(&mut rng, 2, 3, 1);
        assert!(out.contains("x<sup>3</sup>y<sup>3</sup>"));
        assert_eq!(out.len(), 4);
    }

    #[test]
    fn negative_product_answer_is_present_once() {
        for seed in 0..30 {
            let mut rng = StdRng::seed_from_u64(seed);
            let out = scaled_variable_powers(&mut rng, -2, 3, 1, 1, 2, 2);
            let correct = "-6x<sup>3</sup>y<sup>2</sup>";
            assert_eq!(out.iter().filter(|o| *o == correct).count(), 1);
        }
    }
}
