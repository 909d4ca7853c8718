use rand::{rngs::StdRng, RngCore, SeedableRng};
use tracing::{debug, warn};

use crate::quiz_engine::{
    catalog::SkillFamily,
    helpers::Solved,
    models::{CoefficientRange, Level, QuestionSpec, QuizRequest},
    skills::{combining, distributive, factoring, monomials, products},
};

type Solver = fn(&mut dyn RngCore, CoefficientRange) -> Solved;

/// One row of the level table.
#[derive(Debug, Clone, Copy)]
pub struct Skill {
    pub level: u8,
    pub family: SkillFamily,
    solve: Solver,
}

impl Skill {
    const fn new(level: u8, family: SkillFamily, solve: Solver) -> Self {
        Skill { level, family, solve }
    }

    pub fn solve(&self, rng: &mut dyn RngCore, range: CoefficientRange) -> Solved {
        (self.solve)(rng, range)
    }
}

use SkillFamily::*;

static REGISTRY: [Skill; 63] = [
    Skill::new(1,  CombineLikeTerms,             combining::sum_of_two),
    Skill::new(2,  CombineLikeTerms,             combining::sum_of_two),
    Skill::new(3,  CombineLikeTerms,             combining::ordered_difference),
    Skill::new(4,  CombineLikeTerms,             combining::ordered_difference),
    Skill::new(5,  CombineLikeTerms,             combining::difference),
    Skill::new(6,  CombineLikeTerms,             combining::difference),
    Skill::new(7,  CombineLikeTerms,             combining::plus_negative),
    Skill::new(8,  CombineLikeTerms,             combining::signed_sum),
    Skill::new(9,  CombineLikeTerms,             combining::signed_sum),
    Skill::new(10, CombineLikeTerms,             combining::add_negative_group),
    Skill::new(11, CombineLikeTerms,             combining::sum_of_three),
    Skill::new(12, CombineLikeTerms,             combining::sum_of_three),
    Skill::new(13, CombineWithConstants,         combining::with_constant),
    Skill::new(14, CombineWithConstants,         combining::with_two_constants),
    Skill::new(15, CombinePowerWithConstant,     combining::power_with_constant),
    Skill::new(16, CombinePowers,                combining::mixed_powers),
    Skill::new(17, CombineTwoVariables,          combining::two_variables),
    Skill::new(18, CombineTwoVariablesOnePower,  combining::two_variables_one_power),
    Skill::new(19, CombineTwoVariablesPowers,    combining::two_variables_powers),
    Skill::new(20, MultiplyMonomials,            monomials::constant_times_term),
    Skill::new(21, MultiplyMonomials,            monomials::signed_constant_times_term),
    Skill::new(22, MultiplyMonomials,            monomials::term_times_power),
    Skill::new(23, MultiplyMonomials,            monomials::bare_powers),
    Skill::new(24, MultiplyMonomials,            monomials::powers),
    Skill::new(25, MultiplyMonomials,            monomials::signed_powers),
    Skill::new(26, DivideMonomials,              monomials::divide_by_constant),
    Skill::new(27, DivideMonomials,              monomials::signed_divide_by_constant),
    Skill::new(28, DivideMonomials,              monomials::divide_powers),
    Skill::new(29, DivideMonomials,              monomials::divide_to_negative_power),
    Skill::new(30, DivideMonomials,              monomials::divide_to_reciprocal),
    Skill::new(31, PowerOfPower,                 monomials::power_of_power),
    Skill::new(32, PowerOfMonomial,              monomials::power_of_positive_monomial),
    Skill::new(33, PowerOfMonomial,              monomials::power_of_negative_monomial),
    Skill::new(34, PowerOfMonomial,              monomials::power_of_signed_monomial),
    Skill::new(35, MultiplyDivideMonomials,      monomials::multiply_then_divide),
    Skill::new(36, MultiplyDivideMonomials,      monomials::multiply_divide_monomials),
    Skill::new(37, MultiplyDivideMonomials,      monomials::signed_multiply_divide_monomials),
    Skill::new(38, DistributeConstant,           distributive::constant_over_binomial),
    Skill::new(39, DistributeConstant,           distributive::constant_over_signed_binomial),
    Skill::new(40, DistributeConstant,           distributive::signed_constant_over_binomial),
    Skill::new(41, DistributeVariable,           distributive::variable_over_binomial),
    Skill::new(42, DistributePower,              distributive::power_over_binomial),
    Skill::new(43, DistributePowerOverTerms,     distributive::power_over_power_and_term),
    Skill::new(44, DistributePowerOverTerms,     distributive::power_over_two_powers),
    Skill::new(45, MultiplyVariablePowers,       distributive::variable_powers),
    Skill::new(46, MultiplyScaledVariablePowers, distributive::scaled_variable_powers),
    Skill::new(47, MultiplyScaledVariablePowers, distributive::signed_scaled_variable_powers),
    Skill::new(48, DifferenceOfSquares,          products::difference_of_squares),
    Skill::new(49, PerfectSquare,                products::perfect_square_sum),
    Skill::new(50, PerfectSquare,                products::perfect_square_difference),
    Skill::new(51, PerfectSquare,                products::perfect_square),
    Skill::new(52, ScaledDifferenceOfSquares,    products::scaled_difference_of_squares),
    Skill::new(53, ScaledPerfectSquare,          products::scaled_perfect_square_sum),
    Skill::new(54, ScaledPerfectSquare,          products::scaled_perfect_square_difference),
    Skill::new(55, ScaledPerfectSquare,          products::scaled_perfect_square),
    Skill::new(56, BinomialProduct,              products::binomial_product),
    Skill::new(57, DivideBinomialByConstant,     factoring::divide_binomial_by_constant),
    Skill::new(58, DividePolynomialByMonomial,   factoring::divide_polynomial_by_monomial),
    Skill::new(59, FactorDifferenceOfSquares,    factoring::factor_difference_of_squares),
    Skill::new(60, FactorPerfectSquare,          factoring::factor_perfect_square),
    Skill::new(61, FactorScaledPerfectSquare,    factoring::factor_scaled_perfect_square),
    Skill::new(62, FactorBinomialProduct,        factoring::factor_binomial_product),
    Skill::new(63, FactorBinomialProduct,        factoring::factor_scaled_binomial_product),
];

/// Table row for `level`.
pub fn skill(level: Level) -> &'static Skill {
    &REGISTRY[level.get() as usize - 1]
}

/// Generate one question with a caller-owned random stream.
///
/// `range` is normalized before use and its `allow_negative` flag is ignored:
/// each level decides for itself where negative operands appear.
pub fn generate_question_with_rng(rng: &mut impl RngCore, level: Level, range: CoefficientRange) -> QuestionSpec {
    let range = CoefficientRange::normalized(range.min, range.max);
    let skill = skill(level);
    let spec = skill.solve(rng, range).into_spec(level, skill.family);
    debug!(level = level.get(), family = ?spec.family, question = %spec.question, "generated question");
    spec
}

/// Core dispatch: resolves the level, repairs the range and routes to the
/// level's solver.
pub fn generate_question(request: QuizRequest) -> QuestionSpec {
    let mut rng: StdRng = match request.rng_seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None       => StdRng::from_entropy(),
    };

    let level = request.level.resolve().unwrap_or_else(|err| {
        warn!(requested = %request.level, %err, "unknown level, falling back to level 1");
        Level::FIRST
    });

    let range = CoefficientRange::new(request.min_coefficient, request.max_coefficient).unwrap_or_else(|err| {
        let repaired = CoefficientRange::normalized(request.min_coefficient, request.max_coefficient);
        warn!(%err, min = repaired.min, max = repaired.max, "coefficient range repaired");
        repaired
    });

    generate_question_with_rng(&mut rng, level, range)
}
