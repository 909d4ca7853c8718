//! Skill families and per-level metadata.
//!
//! A [`SkillFamily`] names one solver/distractor pairing. Several levels can
//! share a family (levels 1–12 all combine like terms) and differ only in how
//! operands are drawn. The recommended coefficient ranges are the ones the
//! game's difficulty controller feeds in for each level; the engine itself
//! accepts any range.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::quiz_engine::{
    generator,
    models::{CoefficientRange, Level},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SkillFamily {
    CombineLikeTerms,
    CombineWithConstants,
    CombinePowerWithConstant,
    CombinePowers,
    CombineTwoVariables,
    CombineTwoVariablesOnePower,
    CombineTwoVariablesPowers,
    MultiplyMonomials,
    DivideMonomials,
    PowerOfPower,
    PowerOfMonomial,
    MultiplyDivideMonomials,
    DistributeConstant,
    DistributeVariable,
    DistributePower,
    DistributePowerOverTerms,
    MultiplyVariablePowers,
    MultiplyScaledVariablePowers,
    DifferenceOfSquares,
    PerfectSquare,
    ScaledDifferenceOfSquares,
    ScaledPerfectSquare,
    BinomialProduct,
    DivideBinomialByConstant,
    DividePolynomialByMonomial,
    FactorDifferenceOfSquares,
    FactorPerfectSquare,
    FactorScaledPerfectSquare,
    FactorBinomialProduct,
}

impl SkillFamily {
    /// Short prompt pattern shown next to the title, in question markup.
    pub fn pattern(self) -> &'static str {
        match self {
            SkillFamily::CombineLikeTerms             => "ax + bx",
            SkillFamily::CombineWithConstants         => "ax + b + cx",
            SkillFamily::CombinePowerWithConstant     => "ax<sup>n</sup> + b + cx<sup>n</sup>",
            SkillFamily::CombinePowers                => "ax<sup>n</sup> + bx<sup>m</sup> + cx<sup>n</sup>",
            SkillFamily::CombineTwoVariables          => "ax + by + cx + dy",
            SkillFamily::CombineTwoVariablesOnePower  => "ax<sup>n</sup> + by + cx<sup>n</sup> + dy",
            SkillFamily::CombineTwoVariablesPowers    => "ax<sup>n</sup> + by<sup>m</sup> + cx<sup>n</sup> + dy<sup>m</sup>",
            SkillFamily::MultiplyMonomials            => "ax<sup>n</sup> &times; bx<sup>m</sup>",
            SkillFamily::DivideMonomials              => "ax<sup>n</sup> / bx<sup>m</sup>",
            SkillFamily::PowerOfPower                 => "(x<sup>n</sup>)<sup>m</sup>",
            SkillFamily::PowerOfMonomial              => "(ax<sup>n</sup>)<sup>m</sup>",
            SkillFamily::MultiplyDivideMonomials      => "ax<sup>n</sup> &times; bx<sup>m</sup> / cx<sup>k</sup>",
            SkillFamily::DistributeConstant           => "a(bx + c)",
            SkillFamily::DistributeVariable           => "ax(bx + c)",
            SkillFamily::DistributePower              => "ax<sup>n</sup>(bx<sup>m</sup> + c)",
            SkillFamily::DistributePowerOverTerms     => "ax<sup>n</sup>(bx<sup>m</sup> + cx<sup>p</sup>)",
            SkillFamily::MultiplyVariablePowers       => "x<sup>n</sup> &times; y<sup>m</sup> &times; x<sup>k</sup>",
            SkillFamily::MultiplyScaledVariablePowers => "ax<sup>n</sup> &times; by<sup>m</sup> &times; cx<sup>k</sup>",
            SkillFamily::DifferenceOfSquares          => "(x + a)(x - a)",
            SkillFamily::PerfectSquare                => "(x &pm; a)<sup>2</sup>",
            SkillFamily::ScaledDifferenceOfSquares    => "(ax + b)(ax - b)",
            SkillFamily::ScaledPerfectSquare          => "(ax &pm; b)<sup>2</sup>",
            SkillFamily::BinomialProduct              => "(ax + b)(cx + d)",
            SkillFamily::DivideBinomialByConstant     => "(ax + b) / c",
            SkillFamily::DividePolynomialByMonomial   => "(ax<sup>k</sup> + bx<sup>m</sup>) / cx<sup>n</sup>",
            SkillFamily::FactorDifferenceOfSquares    => "(x<sup>2</sup> - a<sup>2</sup>) / (x &pm; a)",
            SkillFamily::FactorPerfectSquare          => "(x &pm; a)<sup>2</sup> / (x &pm; a)",
            SkillFamily::FactorScaledPerfectSquare    => "n(x &pm; a)<sup>2</sup> / (x &pm; a)",
            SkillFamily::FactorBinomialProduct        => "n(ax + b)(cx + d) / (ax + b)",
        }
    }
}

impl fmt::Display for SkillFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            SkillFamily::CombineLikeTerms             => "Combining Like Terms",
            SkillFamily::CombineWithConstants         => "Combining Terms & Constants",
            SkillFamily::CombinePowerWithConstant     => "Combining Powers & Constants",
            SkillFamily::CombinePowers                => "Combining Terms with Exponents",
            SkillFamily::CombineTwoVariables          => "Combining Multi-Variable Terms",
            SkillFamily::CombineTwoVariablesOnePower  => "Combining Multi-Variable Terms with a Power",
            SkillFamily::CombineTwoVariablesPowers    => "Combining Multi-Variable Powers",
            SkillFamily::MultiplyMonomials            => "Multiplication with Exponents",
            SkillFamily::DivideMonomials              => "Division with Exponents",
            SkillFamily::PowerOfPower                 => "Power of a Power",
            SkillFamily::PowerOfMonomial              => "Power of a Monomial",
            SkillFamily::MultiplyDivideMonomials      => "Combined Multiplication & Division",
            SkillFamily::DistributeConstant           => "Distributive Property",
            SkillFamily::DistributeVariable           => "Distributing a Variable",
            SkillFamily::DistributePower              => "Distributing a Power",
            SkillFamily::DistributePowerOverTerms     => "Distributing a Power over Terms",
            SkillFamily::MultiplyVariablePowers       => "Multiplying Powers of Two Variables",
            SkillFamily::MultiplyScaledVariablePowers => "Advanced Multiplication",
            SkillFamily::DifferenceOfSquares          => "Difference of Squares",
            SkillFamily::PerfectSquare                => "Square of a Sum/Difference",
            SkillFamily::ScaledDifferenceOfSquares    => "Difference of Squares with Coefficients",
            SkillFamily::ScaledPerfectSquare          => "Square of a Sum/Difference with Coefficients",
            SkillFamily::BinomialProduct              => "General Binomial Multiplication",
            SkillFamily::DivideBinomialByConstant     => "Simple Polynomial Division",
            SkillFamily::DividePolynomialByMonomial   => "Polynomial / Monomial Division",
            SkillFamily::FactorDifferenceOfSquares    => "Factoring a Difference of Squares",
            SkillFamily::FactorPerfectSquare          => "Factoring a Perfect Square",
            SkillFamily::FactorScaledPerfectSquare    => "Factoring a Scaled Perfect Square",
            SkillFamily::FactorBinomialProduct        => "Factoring a Binomial Product",
        };
        write!(f, "{}", s)
    }
}

/// Catalogue entry for one level.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LevelProfile {
    pub level: Level,
    pub family: SkillFamily,
    /// Topic heading shown on the level-select screen.
    pub topic: String,
    pub recommended_range: CoefficientRange,
}

fn topic(level: u8) -> &'static str {
    match level {
        1..=12  => "Combining Like Terms",
        13..=14 => "Combining Terms & Constants",
        15..=16 => "Combining Terms with Exponents",
        17..=19 => "Combining Multi-Variable Terms",
        20..=21 => "Multiplication",
        22..=25 => "Multiplication with Exponents",
        26..=27 => "Simple Division",
        28..=30 => "Division with Exponents",
        31..=34 => "Power Rules",
        35..=37 => "Combined Operations",
        38..=40 => "Distributive Property a(bx+c)",
        41..=44 => "Distributive Property ax<sup>n</sup>(bx<sup>m</sup>+c)",
        45..=47 => "Advanced Multiplication",
        48      => "Difference of Squares (x+a)(x-a)",
        49..=51 => "Square of a Sum/Difference (x&pm;a)<sup>2</sup>",
        52      => "Difference of Squares (ax+b)(ax-b)",
        53..=55 => "Square of a Sum/Difference (ax&pm;b)<sup>2</sup>",
        56      => "General Binomial Multiplication",
        57      => "Simple Polynomial Division",
        58      => "Polynomial / Monomial Division",
        59..=61 => "Factoring",
        _       => "Factoring n(ax+b)(cx+d)/(ax+b)",
    }
}

/// `(min, max)` coefficient magnitudes the game uses per level, index 0 = level 1.
const RECOMMENDED_RANGES: [(i64, i64); 63] = [
    (1, 5), (1, 15), (1, 10), (1, 20), (1, 10), (1, 20), (1, 10), (1, 10), (1, 20), (1, 15), // 1-10
    (1, 10), (1, 20), (1, 10), (1, 15), (1, 10), (1, 10), (1, 10), (1, 10), (1, 10), (1, 10), // 11-20
    (1, 10), (1, 8), (1, 5), (1, 8), (1, 8), (1, 15), (1, 15), (1, 10), (1, 10), (1, 10),     // 21-30
    (1, 5), (2, 5), (2, 5), (2, 5), (1, 5), (1, 8), (1, 8), (2, 8), (2, 8), (2, 10),          // 31-40
    (2, 10), (2, 8), (2, 8), (2, 8), (1, 5), (1, 8), (1, 8), (2, 12), (2, 12), (2, 12),       // 41-50
    (2, 12), (2, 8), (2, 8), (2, 8), (2, 8), (2, 10), (2, 10), (2, 8), (2, 12), (2, 12),      // 51-60
    (2, 8), (2, 10), (2, 8),                                                                  // 61-63
];

/// Look up the catalogue entry for `level`.
pub fn profile(level: Level) -> LevelProfile {
    let (min, max) = RECOMMENDED_RANGES[level.get() as usize - 1];
    LevelProfile {
        level,
        family: generator::skill(level).family,
        topic: topic(level.get()).to_string(),
        recommended_range: CoefficientRange::normalized(min, max),
    }
}

/// Every level's catalogue entry in order.
pub fn profiles() -> Vec<LevelProfile> {
    Level::all().map(profile).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalogue_covers_every_level() {
        let all = profiles();
        assert_eq!(all.len(), 63);
        for (i, p) in all.iter().enumerate() {
            assert_eq!(p.level.get() as usize, i + 1);
            assert!(p.recommended_range.min <= p.recommended_range.max);
        }
    }

    #[test]
    fn families_are_contiguous_blocks() {
        // A family never reappears after another one has started.
        let all = profiles();
        let mut seen = Vec::new();
        for p in &all {
            if seen.last() != Some(&p.family) {
                assert!(!seen.contains(&p.family), "{:?} is split across levels", p.family);
                seen.push(p.family);
            }
        }
        assert_eq!(seen.len(), 29);
    }

    #[test]
    fn power_levels_recommend_nontrivial_base() {
        for lvl in 32..=34_i64 {
            let p = profile(Level::try_from(lvl).unwrap());
            assert_eq!(p.family, SkillFamily::PowerOfMonomial);
            assert_eq!(p.recommended_range.min, 2);
        }
    }

    #[test]
    fn topics_follow_level_bands() {
        assert_eq!(profile(Level::FIRST).topic, "Combining Like Terms");
        assert_eq!(profile(Level::try_from(26_i64).unwrap()).topic, "Simple Division");
        assert_eq!(
            profile(Level::try_from(63_i64).unwrap()).topic,
            "Factoring n(ax+b)(cx+d)/(ax+b)"
        );
    }
}
