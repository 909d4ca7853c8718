//! Misconception-based wrong answers, one generator per skill family.
//!
//! Each generator takes the operands of the question (not just the answer),
//! offers the wrong results of named slips to a [`pool::PoolBuilder`], pads
//! with small perturbations and returns a finished four-option pool.

pub mod pool;

pub mod combining;
pub mod distributive;
pub mod factoring;
pub mod monomials;
pub mod products;
