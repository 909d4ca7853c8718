//! Wrong answers for binomial products (levels 48–56). Every answer here is a
//! quadratic `px² + qx + r`.

use rand::Rng;

use crate::quiz_engine::{
    distractors::pool::{jitter, PoolBuilder},
    format::Expr,
    models::{OptionPool, StructuredResult, Term},
};

fn quadratic(x2: i64, x: i64, constant: i64) -> String {
    StructuredResult::Quadratic {
        term1_coefficient: x2,
        term1_exponent: 2,
        term2_coefficient: x,
        term2_exponent: 1,
        constant,
    }
    .to_string()
}

/// `(x + a)(x - a)` answers.
pub fn difference_of_squares<R: Rng + ?Sized>(rng: &mut R, a: i64) -> OptionPool {
    let constant = -(a * a);
    let mut pool = PoolBuilder::new(quadratic(1, 0, constant));

    // Expanded as one of the perfect squares.
    pool.offer(quadratic(1, 2 * a, a * a));
    pool.offer(quadratic(1, -2 * a, a * a));
    pool.offer(quadratic(1, 0, a * a));
    pool.offer(Expr::sum([Term::x(1, 1), Term::constant(constant)]));
    pool.offer(constant);

    pool.pad(rng, |rng| {
        let rc = constant + jitter(rng, 2);
        let re = (2 + jitter(rng, 1)).max(1);
        (rc != constant || re != 2).then(|| Expr::sum([Term::x(1, re), Term::constant(rc)]))
    });
    pool.finish(rng, |i| Expr::sum([Term::x(1, 2 + i as i64), Term::constant(constant - i as i64)]))
}

/// `(x ± a)²` answers. `middle` carries the sign of the square.
pub fn perfect_square<R: Rng + ?Sized>(rng: &mut R, middle: i64, constant: i64) -> OptionPool {
    let mut pool = PoolBuilder::new(quadratic(1, middle, constant));

    pool.offer(quadratic(1, -middle, constant));
    pool.offer(quadratic(1, 0, constant));
    pool.offer(quadratic(1, 0, -constant));
    pool.offer(quadratic(1, middle, -constant));

    pool.pad(rng, |rng| {
        let rc = constant + jitter(rng, 2);
        let rx = middle + jitter(rng, 2);
        (rc != constant || rx != middle).then(|| quadratic(1, rx, rc))
    });
    pool.finish(rng, |i| quadratic(1, middle + i as i64, constant + i as i64))
}

/// `(ax + b)(ax - b)` answers.
pub fn scaled_difference_of_squares<R: Rng + ?Sized>(rng: &mut R, a: i64, b: i64) -> OptionPool {
    let (lead, constant) = (a * a, -(b * b));
    let mut pool = PoolBuilder::new(quadratic(lead, 0, constant));

    pool.offer(quadratic(lead, 2 * a * b, b * b));
    pool.offer(quadratic(lead, -2 * a * b, b * b));
    // Squared only one of the two parts.
    pool.offer(quadratic(a, 0, constant));
    pool.offer(quadratic(lead, 0, b * b));
    pool.offer(quadratic(lead, 0, -b));

    pool.pad(rng, |rng| {
        let rc = constant + jitter(rng, 2);
        let rl = lead + jitter(rng, 1);
        (rc != constant || rl != lead).then(|| quadratic(rl, 0, rc))
    });
    pool.finish(rng, |i| quadratic(lead + i as i64, 0, constant - i as i64))
}

/// `(ax ± b)²` answers.
pub fn scaled_perfect_square<R: Rng + ?Sized>(rng: &mut R, a: i64, b: i64, middle: i64) -> OptionPool {
    let (lead, constant) = (a * a, b * b);
    let mut pool = PoolBuilder::new(quadratic(lead, middle, constant));

    pool.offer(quadratic(lead, -middle, constant));
    pool.offer(quadratic(lead, 0, constant));
    pool.offer(quadratic(lead, 0, -constant));
    pool.offer(quadratic(a, middle, constant));
    pool.offer(quadratic(lead, middle, b));

    pool.pad(rng, |rng| {
        let rc = constant + jitter(rng, 2);
        let rx = middle + jitter(rng, 2) * a;
        (rc != constant || rx != middle).then(|| quadratic(lead, rx, rc))
    });
    pool.finish(rng, |i| {
        let i = i as i64;
        quadratic(lead + i, middle + i, constant + i)
    })
}

/// `(ax + b)(cx + d)` answers: first-and-last only, added brackets, one
/// half of the middle term, flipped constant.
pub fn binomial_product<R: Rng + ?Sized>(rng: &mut R, a: i64, b: i64, c: i64, d: i64) -> OptionPool {
    let (t1, t2, k) = (a * c, a * d + b * c, b * d);
    let mut pool = PoolBuilder::new(quadratic(t1, t2, k));

    pool.offer(quadratic(t1, 0, k));
    pool.offer(Expr::sum([Term::x(a + c, 1), Term::constant(b + d)]));
    pool.offer_if(a * d != t2, quadratic(t1, a * d, k));
    pool.offer_if(b * c != t2, quadratic(t1, b * c, k));
    pool.offer(quadratic(t1, t2, -k));

    pool.pad(rng, |rng| {
        let r1 = t1 + jitter(rng, 1);
        let r2 = t2 + jitter(rng, 2);
        let rc = k + jitter(rng, 2);
        let all_zero = r1 == 0 && r2 == 0 && rc == 0;
        let unchanged = r1 == t1 && r2 == t2 && rc == k;
        (!all_zero && !unchanged).then(|| quadratic(r1, r2, rc))
    });
    pool.finish(rng, |i| {
        let i = i as i64;
        quadratic(t1 + i, t2 + i, k + i)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn difference_of_squares_for_three() {
        let mut rng = StdRng::seed_from_u64(11);
        let out = difference_of_squares(&mut rng, 3);
        assert!(out.contains("x<sup>2</sup> - 9"));
        assert_eq!(out.len(), 4);
    }

    #[test]
    fn binomial_product_with_zero_middle_term() {
        // (2x + 3)(2x - 3): ad + bc = 0, so the middle-term slips are skipped.
        for seed in 0..30 {
            let mut rng = StdRng::seed_from_u64(seed);
            let out = binomial_product(&mut rng, 2, 3, 2, -3);
            assert!(out.contains("4x<sup>2</sup> - 9"));
            assert_eq!(out.len(), 4);
        }
    }

    #[test]
    fn perfect_square_offers_other_sign() {
        let hits = (0..30)
            .filter(|&seed| {
                let mut rng = StdRng::seed_from_u64(seed);
                perfect_square(&mut rng, 6, 9).contains("x<sup>2</sup> - 6x + 9")
            })
            .count();
        assert!(hits > 0);
    }
}
