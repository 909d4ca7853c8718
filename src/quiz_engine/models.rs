use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::quiz_engine::error::{LevelError, OptionPoolError, RangeError};

// ---------------------------------------------------------------------------
// Algebra primitives
// ---------------------------------------------------------------------------

/// Variable symbol carried by a term. `XY` is only produced by distractors that
/// fuse two variables into one ("added x and y coefficients into xy").
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Var {
    X,
    Y,
    XY,
}

impl Var {
    pub fn symbol(self) -> &'static str {
        match self {
            Var::X  => "x",
            Var::Y  => "y",
            Var::XY => "xy",
        }
    }
}

impl fmt::Display for Var {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// A single `coefficient · variable^exponent` unit. A term without a variable
/// (or with exponent 0) is a bare constant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Term {
    pub coefficient: i64,
    pub variable: Option<Var>,
    pub exponent: i64,
}

impl Term {
    pub fn new(coefficient: i64, variable: Var, exponent: i64) -> Self {
        Term { coefficient, variable: Some(variable), exponent }
    }

    pub fn x(coefficient: i64, exponent: i64) -> Self {
        Term::new(coefficient, Var::X, exponent)
    }

    pub fn y(coefficient: i64, exponent: i64) -> Self {
        Term::new(coefficient, Var::Y, exponent)
    }

    pub fn constant(value: i64) -> Self {
        Term { coefficient: value, variable: None, exponent: 0 }
    }
}

// ---------------------------------------------------------------------------
// Structured results
// ---------------------------------------------------------------------------

/// The exact algebraic outcome of one skill instance, before rendering.
/// Each skill family produces exactly one of these shapes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum StructuredResult {
    /// `c·x^e`
    Monomial { coefficient: i64, exponent: i64 },
    /// `a·x + c`
    Linear { x_coefficient: i64, constant: i64 },
    /// `a·x^e + c`
    PowerLinear { x_coefficient: i64, x_exponent: i64, constant: i64 },
    /// `a·x^e1 + b·x^e2`
    TwoTerm { term1_coefficient: i64, term1_exponent: i64, term2_coefficient: i64, term2_exponent: i64 },
    /// `a·x^e1 + b·x^e2 + c`
    Quadratic {
        term1_coefficient: i64,
        term1_exponent: i64,
        term2_coefficient: i64,
        term2_exponent: i64,
        constant: i64,
    },
    /// `a·x^e1 + b·y^e2`
    TwoVariable { x_coefficient: i64, y_coefficient: i64, x_exponent: i64, y_exponent: i64 },
    /// `c·x^e1·y^e2`
    VariableProduct { coefficient: i64, x_exponent: i64, y_exponent: i64 },
}

// ---------------------------------------------------------------------------
// Request types
// ---------------------------------------------------------------------------

pub const MIN_LEVEL: u8 = 1;
pub const MAX_LEVEL: u8 = 63;

/// Upper bound on coefficient magnitude accepted from callers. Keeps products
/// of four operands well inside `i64`.
pub const MAX_COEFFICIENT: i64 = 1000;

/// A difficulty level in `1..=63`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "i64")]
pub struct Level(u8);

impl Level {
    pub const FIRST: Level = Level(MIN_LEVEL);

    pub fn get(self) -> u8 {
        self.0
    }

    /// Every level in catalogue order.
    pub fn all() -> impl Iterator<Item = Level> {
        (MIN_LEVEL..=MAX_LEVEL).map(Level)
    }
}

impl TryFrom<i64> for Level {
    type Error = LevelError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        if (MIN_LEVEL as i64..=MAX_LEVEL as i64).contains(&value) {
            Ok(Level(value as u8))
        } else {
            Err(LevelError::OutOfRange(value))
        }
    }
}

impl From<Level> for i64 {
    fn from(level: Level) -> i64 {
        level.0 as i64
    }
}

impl FromStr for Level {
    type Err = LevelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value: i64 = s
            .trim()
            .parse()
            .map_err(|_| LevelError::NotANumber(s.to_string()))?;
        Level::try_from(value)
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Level {}", self.0)
    }
}

/// A level as the caller supplied it. JSON clients send either `12` or
/// `"12"`; anything that does not resolve to `1..=63` falls back to level 1.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RequestedLevel {
    Number(i64),
    Text(String),
}

impl RequestedLevel {
    pub fn resolve(&self) -> Result<Level, LevelError> {
        match self {
            RequestedLevel::Number(n) => Level::try_from(*n),
            RequestedLevel::Text(s)   => s.parse(),
        }
    }
}

impl fmt::Display for RequestedLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RequestedLevel::Number(n) => write!(f, "{n}"),
            RequestedLevel::Text(s)   => write!(f, "{s:?}"),
        }
    }
}

impl From<i64> for RequestedLevel {
    fn from(n: i64) -> Self {
        RequestedLevel::Number(n)
    }
}

impl From<i32> for RequestedLevel {
    fn from(n: i32) -> Self {
        RequestedLevel::Number(n.into())
    }
}

impl From<u8> for RequestedLevel {
    fn from(n: u8) -> Self {
        RequestedLevel::Number(n.into())
    }
}

impl From<&str> for RequestedLevel {
    fn from(s: &str) -> Self {
        RequestedLevel::Text(s.to_string())
    }
}

impl From<String> for RequestedLevel {
    fn from(s: String) -> Self {
        RequestedLevel::Text(s)
    }
}

/// Bounds on the magnitude of randomly drawn coefficients.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CoefficientRange {
    pub min: i64,
    pub max: i64,
    #[serde(default)]
    pub allow_negative: bool,
}

impl CoefficientRange {
    /// Validated constructor: `1 <= min <= max <= MAX_COEFFICIENT`.
    pub fn new(min: i64, max: i64) -> Result<Self, RangeError> {
        if min < 1 {
            return Err(RangeError::NonPositiveMin(min));
        }
        if min > max {
            return Err(RangeError::Inverted { min, max });
        }
        if max > MAX_COEFFICIENT {
            return Err(RangeError::TooLarge { max, limit: MAX_COEFFICIENT });
        }
        Ok(CoefficientRange { min, max, allow_negative: false })
    }

    /// Repair an arbitrary pair into a usable range.
    pub fn normalized(min: i64, max: i64) -> Self {
        let min = min.clamp(1, MAX_COEFFICIENT);
        let max = max.clamp(min, MAX_COEFFICIENT);
        CoefficientRange { min, max, allow_negative: false }
    }

    /// Same bounds, draws may come out negative.
    pub fn signed(self) -> Self {
        CoefficientRange { allow_negative: true, ..self }
    }

    /// Same bounds, draws are always positive.
    pub fn unsigned(self) -> Self {
        CoefficientRange { allow_negative: false, ..self }
    }

    /// Same lower bound, upper bound halved (never below `min`). Used where a
    /// quotient is drawn first and multiplied back up.
    pub fn halved(self) -> Self {
        CoefficientRange { max: (self.max / 2).max(self.min), ..self }
    }
}

impl Default for CoefficientRange {
    fn default() -> Self {
        CoefficientRange { min: 1, max: 10, allow_negative: false }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuizRequest {
    /// Requested level. Anything that is not a number in `1..=63` falls
    /// back to level 1.
    pub level: RequestedLevel,
    #[serde(default = "default_min_coefficient")]
    pub min_coefficient: i64,
    #[serde(default = "default_max_coefficient")]
    pub max_coefficient: i64,
    #[serde(default)]
    pub rng_seed: Option<u64>,
}

fn default_min_coefficient() -> i64 {
    1
}

fn default_max_coefficient() -> i64 {
    10
}

impl QuizRequest {
    /// Request with the default range `1..=10` and entropy seeding.
    pub fn new(level: impl Into<RequestedLevel>) -> Self {
        QuizRequest {
            level: level.into(),
            min_coefficient: default_min_coefficient(),
            max_coefficient: default_max_coefficient(),
            rng_seed: None,
        }
    }

    pub fn with_range(mut self, min: i64, max: i64) -> Self {
        self.min_coefficient = min;
        self.max_coefficient = max;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.rng_seed = Some(seed);
        self
    }
}

// ---------------------------------------------------------------------------
// Output types
// ---------------------------------------------------------------------------

/// Number of answer choices in every option pool.
pub const OPTION_COUNT: usize = 4;

/// Exactly four distinct, non-empty rendered answers, one of them correct.
/// Inside the crate only the distractor engine builds one; deserializing
/// checks the size and distinctness rules.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<String>", into = "Vec<String>")]
pub struct OptionPool(Vec<String>);

impl OptionPool {
    pub(crate) fn from_vec(options: Vec<String>) -> Self {
        OptionPool(options)
    }

    pub fn as_slice(&self) -> &[String] {
        &self.0
    }

    pub fn iter(&self) -> std::slice::Iter<'_, String> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn contains(&self, option: &str) -> bool {
        self.0.iter().any(|o| o == option)
    }

    pub fn into_vec(self) -> Vec<String> {
        self.0
    }
}

impl TryFrom<Vec<String>> for OptionPool {
    type Error = OptionPoolError;

    fn try_from(options: Vec<String>) -> Result<Self, Self::Error> {
        if options.len() != OPTION_COUNT {
            return Err(OptionPoolError::WrongSize(options.len()));
        }
        if options.iter().any(String::is_empty) {
            return Err(OptionPoolError::EmptyOption);
        }
        let duplicate = options
            .iter()
            .enumerate()
            .find_map(|(i, o)| options[i + 1..].contains(o).then(|| o.clone()));
        if let Some(option) = duplicate {
            return Err(OptionPoolError::Duplicate(option));
        }
        Ok(OptionPool(options))
    }
}

impl From<OptionPool> for Vec<String> {
    fn from(pool: OptionPool) -> Self {
        pool.0
    }
}

impl<'a> IntoIterator for &'a OptionPool {
    type Item = &'a String;
    type IntoIter = std::slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// One generated multiple-choice question.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuestionSpec {
    pub level: Level,
    pub family: crate::quiz_engine::catalog::SkillFamily,
    /// Prompt markup (operands, not the result).
    pub question: String,
    /// Canonical rendering of `result`.
    pub correct_answer: String,
    pub options: OptionPool,
    pub result: StructuredResult,
}
