//! Markup rendering for terms, constants, fractions and whole expressions.
//!
//! The primitives (`format_term`, `format_constant`, `format_fraction`) return
//! an empty string for a zero coefficient and never substitute `"0"` on their
//! own. [`Expr`] is the one place that applies the zero fallback, so solvers
//! and distractors build `Expr` values instead of concatenating strings.
//!
//! Markup conventions shared with the presentation layer:
//! - exponents: `x<sup>3</sup>` (negative exponents rendered verbatim)
//! - fractions: `<div class="fraction"><span class="numerator">…</span><span class="denominator">…</span></div>`
//! - products in prompts: ` &times; `

use std::fmt;

use crate::quiz_engine::models::{StructuredResult, Term, Var};

/// Where a term sits inside a sum.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Placement {
    /// First visible term: only a leading `-` for negatives.
    Leading,
    /// Any later term: `" + "` / `" - "` acts as the separator.
    Following,
}

fn sign_prefix(value: i64, placement: Placement) -> &'static str {
    match placement {
        Placement::Leading   => if value < 0 { "-" } else { "" },
        Placement::Following => if value < 0 { " - " } else { " + " },
    }
}

/// Render `coefficient · variable^exponent`.
///
/// Returns `""` when `coefficient == 0`. A magnitude-1 coefficient is elided
/// when a variable is present, exponent 1 drops the `<sup>` marker, and
/// exponent 0 (or no variable) collapses to a bare constant.
pub fn format_term(coefficient: i64, variable: Option<Var>, exponent: i64, placement: Placement) -> String {
    if coefficient == 0 {
        return String::new();
    }
    let var = match variable {
        Some(v) if exponent != 0 => v,
        _ => return format_constant(coefficient, placement),
    };
    let magnitude = coefficient.unsigned_abs();
    let coeff = if magnitude == 1 { String::new() } else { magnitude.to_string() };
    let exp = if exponent == 1 { String::new() } else { sup(exponent) };
    format!("{}{coeff}{var}{exp}", sign_prefix(coefficient, placement))
}

/// Render a bare integer with the same sign convention as [`format_term`].
pub fn format_constant(value: i64, placement: Placement) -> String {
    if value == 0 {
        return String::new();
    }
    format!("{}{}", sign_prefix(value, placement), value.unsigned_abs())
}

/// Two-row fraction container. Empty halves default to `"0"` / `"1"`.
pub fn format_fraction(numerator: &str, denominator: &str) -> String {
    let num = if numerator.is_empty() { "0" } else { numerator };
    let den = if denominator.is_empty() { "1" } else { denominator };
    format!(
        "<div class=\"fraction\"><span class=\"numerator\">{num}</span><span class=\"denominator\">{den}</span></div>"
    )
}

/// Exponent marker.
pub fn sup(exponent: i64) -> String {
    format!("<sup>{exponent}</sup>")
}

/// Render a single term in leading position.
pub fn term(t: Term) -> String {
    format_term(t.coefficient, t.variable, t.exponent, Placement::Leading)
}

/// Wrap a rendered factor in parentheses when its coefficient is negative,
/// as in `3 &times; (-2x)`.
pub fn factor(t: Term) -> String {
    let s = term(t);
    if t.coefficient < 0 { format!("({s})") } else { s }
}

/// Join prompt factors with a multiplication sign.
pub fn times(factors: &[String]) -> String {
    factors.join(" &times; ")
}

/// Parenthesize a rendered group: `(x + 3)`.
pub fn group(inner: impl fmt::Display) -> String {
    format!("({inner})")
}

// ---------------------------------------------------------------------------
// Expression tree
// ---------------------------------------------------------------------------

/// A renderable expression. `Display` produces the final markup, with `"0"`
/// standing in for an expression whose every term vanished.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Expr {
    /// Terms joined by `+`/`-` separators.
    Sum(Vec<Term>),
    /// Terms written side by side: `x<sup>5</sup>y<sup>2</sup>`.
    Product(Vec<Term>),
    /// Two-row fraction.
    Fraction(Box<Expr>, Box<Expr>),
    /// Parenthesized base raised to a power: `(xy)<sup>7</sup>`.
    Power(Box<Expr>, i64),
}

impl Expr {
    pub fn sum(terms: impl IntoIterator<Item = Term>) -> Self {
        Expr::Sum(terms.into_iter().collect())
    }

    pub fn product(terms: impl IntoIterator<Item = Term>) -> Self {
        Expr::Product(terms.into_iter().collect())
    }

    pub fn single(t: Term) -> Self {
        Expr::Sum(vec![t])
    }

    pub fn fraction(numerator: Expr, denominator: Expr) -> Self {
        Expr::Fraction(Box::new(numerator), Box::new(denominator))
    }

    pub fn power(base: Expr, exponent: i64) -> Self {
        Expr::Power(Box::new(base), exponent)
    }

    /// Rendered markup without the `"0"` fallback; empty when nothing is visible.
    fn raw(&self) -> String {
        match self {
            Expr::Sum(terms) => {
                let mut out = String::new();
                for t in terms {
                    let placement = if out.is_empty() { Placement::Leading } else { Placement::Following };
                    out.push_str(&format_term(t.coefficient, t.variable, t.exponent, placement));
                }
                out
            }
            Expr::Product(terms) => terms.iter().map(|t| term(*t)).collect(),
            Expr::Fraction(num, den) => format_fraction(&num.raw(), &den.raw()),
            Expr::Power(base, exponent) => format!("({}){}", base, sup(*exponent)),
        }
    }
}

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = self.raw();
        if s.is_empty() { write!(f, "0") } else { write!(f, "{s}") }
    }
}

impl From<StructuredResult> for Expr {
    fn from(result: StructuredResult) -> Self {
        match result {
            StructuredResult::Monomial { coefficient, exponent } => Expr::single(Term::x(coefficient, exponent)),
            StructuredResult::Linear { x_coefficient, constant } => {
                Expr::sum([Term::x(x_coefficient, 1), Term::constant(constant)])
            }
            StructuredResult::PowerLinear { x_coefficient, x_exponent, constant } => {
                Expr::sum([Term::x(x_coefficient, x_exponent), Term::constant(constant)])
            }
            StructuredResult::TwoTerm { term1_coefficient, term1_exponent, term2_coefficient, term2_exponent } => {
                Expr::sum([Term::x(term1_coefficient, term1_exponent), Term::x(term2_coefficient, term2_exponent)])
            }
            StructuredResult::Quadratic {
                term1_coefficient,
                term1_exponent,
                term2_coefficient,
                term2_exponent,
                constant,
            } => Expr::sum([
                Term::x(term1_coefficient, term1_exponent),
                Term::x(term2_coefficient, term2_exponent),
                Term::constant(constant),
            ]),
            StructuredResult::TwoVariable { x_coefficient, y_coefficient, x_exponent, y_exponent } => {
                Expr::sum([Term::x(x_coefficient, x_exponent), Term::y(y_coefficient, y_exponent)])
            }
            StructuredResult::VariableProduct { coefficient, x_exponent, y_exponent } => {
                if coefficient == 0 {
                    Expr::Sum(Vec::new())
                } else {
                    Expr::product([Term::x(coefficient, x_exponent), Term::y(1, y_exponent)])
                }
            }
        }
    }
}

/// Canonical answer markup for a result.
impl fmt::Display for StructuredResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", Expr::from(*self))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const X: Option<Var> = Some(Var::X);

    #[test]
    fn zero_coefficient_renders_empty() {
        for exp in [-2, 0, 1, 3] {
            for var in [None, Some(Var::X), Some(Var::Y)] {
                for placement in [Placement::Leading, Placement::Following] {
                    assert_eq!(format_term(0, var, exp, placement), "");
                }
            }
        }
        assert_eq!(format_constant(0, Placement::Following), "");
    }

    #[test]
    fn unit_coefficient_is_elided() {
        assert_eq!(format_term(1, X, 1, Placement::Leading), "x");
        assert_eq!(format_term(-1, X, 1, Placement::Leading), "-x");
        assert_eq!(format_term(1, X, 1, Placement::Following), " + x");
        assert_eq!(format_term(-1, X, 1, Placement::Following), " - x");
    }

    #[test]
    fn exponents_render_as_superscript() {
        assert_eq!(format_term(3, X, 2, Placement::Leading), "3x<sup>2</sup>");
        assert_eq!(format_term(-4, X, -2, Placement::Leading), "-4x<sup>-2</sup>");
        assert_eq!(format_term(5, X, 0, Placement::Leading), "5");
        assert_eq!(format_term(-5, X, 0, Placement::Following), " - 5");
        assert_eq!(format_term(1, None, 1, Placement::Leading), "1");
    }

    #[test]
    fn constants_follow_sign_convention() {
        assert_eq!(format_constant(7, Placement::Leading), "7");
        assert_eq!(format_constant(-7, Placement::Leading), "-7");
        assert_eq!(format_constant(7, Placement::Following), " + 7");
        assert_eq!(format_constant(-7, Placement::Following), " - 7");
    }

    #[test]
    fn fraction_defaults_empty_halves() {
        assert_eq!(
            format_fraction("", ""),
            "<div class=\"fraction\"><span class=\"numerator\">0</span><span class=\"denominator\">1</span></div>"
        );
    }

    #[test]
    fn sum_skips_vanished_leading_term() {
        let e = Expr::sum([Term::x(0, 2), Term::x(-3, 1), Term::constant(4)]);
        assert_eq!(e.to_string(), "-3x + 4");
        assert_eq!(Expr::sum([Term::x(0, 1), Term::constant(0)]).to_string(), "0");
    }

    #[test]
    fn product_and_power_render() {
        let p = Expr::product([Term::x(6, 5), Term::y(1, 2)]);
        assert_eq!(p.to_string(), "6x<sup>5</sup>y<sup>2</sup>");
        let q = Expr::power(Expr::product([Term::x(1, 1), Term::y(1, 1)]), 7);
        assert_eq!(q.to_string(), "(xy)<sup>7</sup>");
    }

    #[test]
    fn negative_factor_is_parenthesized() {
        assert_eq!(factor(Term::x(-2, 1)), "(-2x)");
        assert_eq!(factor(Term::x(2, 3)), "2x<sup>3</sup>");
        assert_eq!(times(&["3".into(), factor(Term::x(-2, 1))]), "3 &times; (-2x)");
    }

    #[test]
    fn results_render_canonically() {
        let q = StructuredResult::Quadratic {
            term1_coefficient: 1,
            term1_exponent: 2,
            term2_coefficient: 0,
            term2_exponent: 1,
            constant: -9,
        };
        assert_eq!(q.to_string(), "x<sup>2</sup> - 9");
        let m = StructuredResult::Monomial { coefficient: 0, exponent: 1 };
        assert_eq!(m.to_string(), "0");
        let l = StructuredResult::Linear { x_coefficient: 0, constant: -4 };
        assert_eq!(l.to_string(), "-4");
        let p = StructuredResult::VariableProduct { coefficient: -1, x_exponent: 3, y_exponent: 1 };
        assert_eq!(p.to_string(), "-x<sup>3</sup>y");
    }
}
