//! Wrong answers for single-monomial results (levels 20–37): products,
//! quotients, powers of powers and the combined multiply/divide levels.

use rand::Rng;

use crate::quiz_engine::{
    distractors::pool::{jitter, PoolBuilder},
    format::Expr,
    models::{OptionPool, Term},
};

fn mono(coefficient: i64, exponent: i64) -> String {
    Expr::single(Term::x(coefficient, exponent)).to_string()
}

/// Render a quotient. With `reciprocal` set, a negative exponent is shown as
/// `c / x^k` instead of `cx^-k`.
pub fn quotient(coefficient: i64, exponent: i64, reciprocal: bool) -> String {
    if reciprocal && exponent < 0 {
        if coefficient == 0 {
            return "0".to_string();
        }
        Expr::fraction(Expr::single(Term::constant(coefficient)), Expr::single(Term::x(1, -exponent))).to_string()
    } else {
        mono(coefficient, exponent)
    }
}

/// `cxᵉ` product answers. `n` and `m` are the operand exponents, used for
/// the "multiplied the exponents" slip.
pub fn multiplication<R: Rng + ?Sized>(rng: &mut R, coefficient: i64, exponent: i64, n: i64, m: i64) -> OptionPool {
    let mut pool = PoolBuilder::new(mono(coefficient, exponent));

    pool.offer(mono(coefficient, exponent + 1));
    if exponent > 1 {
        pool.offer(mono(coefficient, exponent - 1));
    } else {
        pool.offer(mono(coefficient, 2));
    }
    pool.offer(mono(coefficient + 1, exponent));
    pool.offer(mono(coefficient - 1, exponent));
    pool.offer_if(coefficient != 0, coefficient);
    pool.offer_if(n * m != exponent && (n > 1 || m > 1), mono(coefficient, n * m));

    pool.pad(rng, |rng| {
        let rc = coefficient + jitter(rng, 2);
        let re = (exponent + jitter(rng, 1)).max(1);
        [mono(if rc == 0 { 1 } else { rc }, re), rc.to_string()]
    });
    pool.finish(rng, |i| mono(coefficient + i as i64 + 1, exponent + i as i64))
}

/// Quotient answers for levels 26–30. Fraction-shaped distractors only
/// appear when the answer itself is rendered as a fraction.
pub fn division<R: Rng + ?Sized>(rng: &mut R, coefficient: i64, exponent: i64, reciprocal: bool) -> OptionPool {
    let render = |c: i64, e: i64| quotient(c, e, reciprocal);
    let mut pool = PoolBuilder::new(render(coefficient, exponent));

    pool.offer(render(coefficient + 1, exponent));
    pool.offer(render(coefficient - 1, exponent));
    pool.offer(render(coefficient, exponent + 1));
    pool.offer_if(exponent != 1, render(coefficient, exponent - 1));
    pool.offer(render(-coefficient, exponent));
    pool.offer_if(exponent != 0 && coefficient != 0, coefficient);

    pool.pad(rng, |rng| {
        let rc = coefficient + jitter(rng, 2);
        let mut re = exponent + jitter(rng, 1);
        if re == 0 && exponent != 0 {
            re = exponent.signum();
        }
        Some(render(rc, re))
    });

    let as_fraction = reciprocal && exponent < 0;
    pool.finish(rng, |i| {
        let i = i as i64;
        if as_fraction {
            Expr::fraction(
                Expr::single(Term::constant(coefficient + i + 1)),
                Expr::single(Term::x(1, -exponent + i)),
            )
            .to_string()
        } else {
            mono(coefficient + i + 1, exponent + i)
        }
    })
}

/// `(xⁿ)ᵐ` answers: added exponents, kept one exponent, turned `m` into a
/// coefficient.
pub fn power_of_power<R: Rng + ?Sized>(rng: &mut R, exponent: i64, n: i64, m: i64) -> OptionPool {
    let mut pool = PoolBuilder::new(mono(1, exponent));

    pool.offer_if(n + m != exponent, mono(1, n + m));
    pool.offer(mono(1, exponent + 1));
    pool.offer_if(exponent > 1, mono(1, exponent - 1));
    pool.offer_if(n != exponent, mono(1, n));
    pool.offer_if(m != exponent, mono(1, m));
    pool.offer_if(m != 1, mono(m, exponent));

    pool.pad(rng, |rng| {
        let re = exponent + jitter(rng, 2);
        let skip = re == exponent || re < 1 || re == n + m || re == n || re == m;
        (!skip).then(|| mono(1, re))
    });
    pool.finish(rng, |i| mono(1, exponent + i as i64 + 1))
}

/// `(axⁿ)ᵐ` answers. For a negative base the opposite-sign answer is the
/// signature error and survives trimming.
pub fn power_of_monomial<R: Rng + ?Sized>(
    rng: &mut R,
    coefficient: i64,
    exponent: i64,
    a: i64,
    n: i64,
    m: i64,
) -> OptionPool {
    let mut pool = PoolBuilder::new(mono(coefficient, exponent));

    if a < 0 {
        pool.offer_protected(mono(-coefficient, exponent));
    }
    pool.offer_if(n + m != exponent, mono(coefficient, n + m));
    // Raised only the variable to the power.
    pool.offer_if(a.abs() != 1, mono(a, n * m));
    pool.offer_if(a.abs() != 1 && a * m != coefficient, mono(a * m, exponent));
    pool.offer(mono(coefficient + 1, exponent));
    pool.offer(mono(coefficient - 1, exponent));
    pool.offer(mono(coefficient, exponent + 1));
    pool.offer_if(exponent > 1, mono(coefficient, exponent - 1));
    pool.offer_if(a >= 0 && coefficient != 0, mono(-coefficient, exponent));

    pool.pad(rng, |rng| {
        let rc = coefficient + jitter(rng, 3);
        let re = (exponent + jitter(rng, 1)).max(1);
        let skip = re == n + m || rc == a * m;
        (!skip).then(|| mono(if rc == 0 { 1 } else { rc }, re))
    });
    pool.finish(rng, |i| mono(coefficient.abs() + i as i64 + 1, exponent + i as i64))
}

/// `xⁿ·xᵐ / xᵏ`-style answers (levels 35–37).
pub fn combined<R: Rng + ?Sized>(
    rng: &mut R,
    coefficient: i64,
    exponent: i64,
    n: i64,
    m: i64,
    k: i64,
) -> OptionPool {
    let mut pool = PoolBuilder::new(mono(coefficient, exponent));

    // Added the divisor's exponent, or multiplied the numerator exponents.
    pool.offer(mono(coefficient, n + m + k));
    pool.offer(mono(coefficient, n * m - k));
    pool.offer(mono(coefficient + 1, exponent));
    pool.offer(mono(coefficient - 1, exponent));
    pool.offer(mono(coefficient, exponent + 1));
    pool.offer_if(exponent != 1, mono(coefficient, exponent - 1));
    pool.offer(mono(-coefficient, exponent));
    pool.offer_if(exponent != 0 && coefficient != 0, coefficient);

    pool.pad(rng, |rng| {
        let rc = coefficient + jitter(rng, 2);
        let mut re = exponent + jitter(rng, 1);
        if re == 0 && exponent != 0 {
            re = exponent.signum();
        }
        Some(mono(if rc == 0 { 1 } else { rc }, re))
    });
    pool.finish(rng, |i| mono(coefficient + i as i64 + 1, exponent + i as i64))
}
