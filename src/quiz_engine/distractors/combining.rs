//! Wrong answers for the like-terms levels (1–19).

use rand::Rng;

use crate::quiz_engine::{
    distractors::pool::{jitter, PoolBuilder},
    format::Expr,
    models::{CoefficientRange, OptionPool, StructuredResult, Term, Var},
};

/// `cx` answers. Sign slips, a dropped variable, and a squared variable.
pub fn like_terms<R: Rng + ?Sized>(rng: &mut R, coefficient: i64, range: CoefficientRange) -> OptionPool {
    let result = StructuredResult::Monomial { coefficient, exponent: 1 };
    let mut pool = PoolBuilder::new(result);

    pool.offer(Expr::single(Term::x(coefficient + 1, 1)));
    pool.offer(Expr::single(Term::x(coefficient - 1, 1)));
    pool.offer(coefficient);
    if coefficient != 0 {
        pool.offer(Expr::single(Term::x(coefficient, 2)));
        pool.offer(Expr::single(Term::x(-coefficient, 1)));
    } else {
        pool.offer(Expr::single(Term::x(1, 1)));
        pool.offer(Expr::single(Term::x(-1, 1)));
    }

    let max = range.max;
    pool.pad(rng, |rng| {
        let mut r = rng.gen_range(-max..=max);
        if r == 0 && coefficient != 0 {
            r = 1;
        }
        [Expr::single(Term::x(r, 1)).to_string(), r.to_string()]
    });
    pool.finish(rng, |i| Expr::single(Term::x(coefficient + 2 * max + i as i64, 1)))
}

/// `ax + c` answers.
pub fn with_constant<R: Rng + ?Sized>(rng: &mut R, x_coefficient: i64, constant: i64) -> OptionPool {
    let mut pool = PoolBuilder::new(StructuredResult::Linear { x_coefficient, constant });

    if x_coefficient == 0 {
        pool.offer(constant + 1);
        pool.offer(constant - 1);
        pool.offer(Expr::single(Term::x(1, 1)));
        pool.offer_if(constant != 0, Expr::single(Term::x(constant, 1)));
        pool.offer(Expr::sum([Term::x(1, 1), Term::constant(constant)]));
    } else {
        pool.offer(Expr::sum([Term::x(x_coefficient + 1, 1), Term::constant(constant)]));
        pool.offer(Expr::sum([Term::x(x_coefficient, 1), Term::constant(constant - 1)]));
        // Merged the constant into the x term, or the x term into the constant.
        pool.offer(Expr::single(Term::x(x_coefficient + constant, 1)));
        pool.offer(x_coefficient + constant);
        pool.offer(Expr::sum([Term::x(x_coefficient, 2), Term::constant(constant)]));
    }

    pool.pad(rng, |rng| {
        let rx = x_coefficient + jitter(rng, 1);
        let mut rc = constant + jitter(rng, 1);
        if x_coefficient == 0 && rx == 0 && rc == constant {
            rc += 1;
        }
        Some(Expr::sum([Term::x(rx, 1), Term::constant(rc)]))
    });
    pool.finish(rng, |i| {
        let n = i as i64;
        Expr::sum([Term::x(n, 1), Term::constant(n)])
    })
}

/// `axⁿ + c` answers.
pub fn power_with_constant<R: Rng + ?Sized>(
    rng: &mut R,
    x_coefficient: i64,
    x_exponent: i64,
    constant: i64,
) -> OptionPool {
    let mut pool = PoolBuilder::new(StructuredResult::PowerLinear { x_coefficient, x_exponent, constant });
    let shape = |a: i64, e: i64, c: i64| Expr::sum([Term::x(a, e), Term::constant(c)]);

    pool.offer(shape(x_coefficient + 1, x_exponent, constant));
    pool.offer(shape(x_coefficient, x_exponent, constant - 1));
    pool.offer(shape(x_coefficient, x_exponent + 1, constant));
    pool.offer(Expr::single(Term::x(x_coefficient + constant, x_exponent)));

    pool.pad(rng, |rng| {
        Some(shape(x_coefficient + jitter(rng, 1), x_exponent, constant + jitter(rng, 1)))
    });
    pool.finish(rng, |i| shape(i as i64, x_exponent, i as i64))
}

/// `axⁿ + bxᵐ` answers.
pub fn mixed_powers<R: Rng + ?Sized>(
    rng: &mut R,
    term1_coefficient: i64,
    term1_exponent: i64,
    term2_coefficient: i64,
    term2_exponent: i64,
) -> OptionPool {
    let (t1, e1, t2, e2) = (term1_coefficient, term1_exponent, term2_coefficient, term2_exponent);
    let mut pool = PoolBuilder::new(StructuredResult::TwoTerm {
        term1_coefficient,
        term1_exponent,
        term2_coefficient,
        term2_exponent,
    });
    let shape = |a: i64, ea: i64, b: i64| Expr::sum([Term::x(a, ea), Term::x(b, e2)]);

    // Unlike terms combined anyway, once keeping and once adding exponents.
    pool.offer(Expr::single(Term::x(t1 + t2, e1)));
    pool.offer(Expr::single(Term::x(t1 + t2, e1 + e2)));
    pool.offer(shape(t1 + 1, e1, t2));
    pool.offer(shape(t1, e1 + 1, t2));

    pool.pad(rng, |rng| Some(shape(t1 + jitter(rng, 1), e1, t2 + jitter(rng, 1))));
    pool.finish(rng, |i| shape(i as i64, e1, i as i64))
}

/// `ax^n + by^m` answers for levels 17–19. Exponent 1 on both variables gets
/// the "fused into xy" misconception; powers get exponent slips instead.
pub fn two_variables<R: Rng + ?Sized>(
    rng: &mut R,
    x_coefficient: i64,
    y_coefficient: i64,
    x_exponent: i64,
    y_exponent: i64,
) -> OptionPool {
    let (a, b, n, m) = (x_coefficient, y_coefficient, x_exponent, y_exponent);
    let mut pool = PoolBuilder::new(StructuredResult::TwoVariable {
        x_coefficient,
        y_coefficient,
        x_exponent,
        y_exponent,
    });
    let shape = |a: i64, n: i64, b: i64, m: i64| Expr::sum([Term::x(a, n), Term::y(b, m)]);

    pool.offer(shape(a + 1, n, b, m));
    pool.offer(shape(a, n, b - 1, m));
    if n == 1 && m == 1 {
        pool.offer(Expr::single(Term::new(a + b, Var::XY, 1)));
        pool.offer(Expr::single(Term::x(a + b, 1)));
        pool.offer(shape(a, 2, b, 1));
    } else {
        pool.offer(shape(a, n + 1, b, m));
        if m == 1 {
            // Copied the x exponent onto y.
            pool.offer(shape(a, n, b, n));
        } else {
            pool.offer(shape(a, n, b, m + 1));
        }
        pool.offer(Expr::single(Term::x(a + b, n)));
    }

    pool.pad(rng, |rng| Some(shape(a + jitter(rng, 1), n, b + jitter(rng, 1), m)));
    pool.finish(rng, |i| shape(i as i64, n, i as i64, m))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn like_terms_includes_named_slips() {
        // Five misconceptions for 7x are offered, so the pool is full before padding.
        let mut rng = StdRng::seed_from_u64(0);
        let out = like_terms(&mut rng, 7, CoefficientRange::default());
        assert_eq!(out.len(), 4);
        assert!(out.contains("7x"));
        let known = ["8x", "6x", "7", "7x<sup>2</sup>", "-7x"];
        assert!(out.iter().filter(|o| *o != "7x").all(|o| known.contains(&o.as_str())));
    }

    #[test]
    fn zero_answer_keeps_literal_zero_once() {
        for seed in 0..30 {
            let mut rng = StdRng::seed_from_u64(seed);
            let out = like_terms(&mut rng, 0, CoefficientRange::default());
            assert_eq!(out.iter().filter(|o| *o == "0").count(), 1);
            assert_eq!(out.len(), 4);
        }
    }

    #[test]
    fn constant_only_answer_gets_variable_distractors() {
        let mut rng = StdRng::seed_from_u64(2);
        let out = with_constant(&mut rng, 0, 3);
        assert!(out.contains("3"));
        assert_eq!(out.len(), 4);
        assert!(!out.iter().any(|o| o.is_empty() || o == "0"));
    }

    #[test]
    fn fused_xy_only_for_linear_terms() {
        for seed in 0..20 {
            let mut rng = StdRng::seed_from_u64(seed);
            let out = two_variables(&mut rng, 3, 4, 2, 3);
            assert!(!out.iter().any(|o| o.contains("xy")), "seed={seed}: {out:?}");
        }
    }
}
