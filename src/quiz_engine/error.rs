use thiserror::Error;

/// A requested level that is not in the catalogue.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LevelError {
    #[error("level '{0}' is not a number")]
    NotANumber(String),
    #[error("level {0} is outside 1..=63")]
    OutOfRange(i64),
}

/// A caller-supplied coefficient range that cannot be used as-is.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RangeError {
    #[error("minimum coefficient must be at least 1 (got {0})")]
    NonPositiveMin(i64),
    #[error("minimum coefficient {min} exceeds maximum {max}")]
    Inverted { min: i64, max: i64 },
    #[error("maximum coefficient {max} exceeds the supported limit {limit}")]
    TooLarge { max: i64, limit: i64 },
}

/// A deserialized option list that breaks the pool rules.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum OptionPoolError {
    #[error("an option pool holds exactly 4 options (got {0})")]
    WrongSize(usize),
    #[error("option pool contains an empty option")]
    EmptyOption,
    #[error("option {0:?} appears more than once")]
    Duplicate(String),
}
