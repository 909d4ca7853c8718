//! The option-pool skeleton every distractor generator runs through:
//! seed → misconceptions → filter → pad → trim → shuffle.

use std::fmt::Display;

use rand::seq::SliceRandom;
use rand::Rng;
use tracing::warn;

use crate::quiz_engine::{
    models::{OptionPool, OPTION_COUNT},
    retry::try_up_to,
};

/// Attempts allowed per missing slot before the deterministic filler kicks in.
pub const PAD_ATTEMPTS: usize = 10;

#[derive(Debug, Clone)]
struct Entry {
    text: String,
    protected: bool,
}

/// Collects candidate answers for one question. The correct answer is always
/// the first entry and is never removed.
#[derive(Debug, Clone)]
pub struct PoolBuilder {
    correct: String,
    entries: Vec<Entry>,
}

impl PoolBuilder {
    pub fn new(correct: impl Display) -> Self {
        let correct = correct.to_string();
        PoolBuilder {
            entries: vec![Entry { text: correct.clone(), protected: true }],
            correct,
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn contains(&self, candidate: &str) -> bool {
        self.entries.iter().any(|e| e.text == candidate)
    }

    /// Empty strings and duplicates are rejected; `"0"` only survives as the
    /// correct answer itself.
    pub fn accepts(&self, candidate: &str) -> bool {
        !candidate.is_empty()
            && (candidate != "0" || self.correct == "0")
            && !self.contains(candidate)
    }

    fn push(&mut self, text: String, protected: bool) -> bool {
        if self.accepts(&text) {
            self.entries.push(Entry { text, protected });
            true
        } else {
            false
        }
    }

    /// Add a misconception-based candidate. Returns whether it was kept.
    pub fn offer(&mut self, candidate: impl Display) -> bool {
        self.push(candidate.to_string(), false)
    }

    /// Add a candidate only when `condition` holds.
    pub fn offer_if(&mut self, condition: bool, candidate: impl Display) -> bool {
        condition && self.offer(candidate)
    }

    /// Add a signature-error candidate that trimming must not remove.
    pub fn offer_protected(&mut self, candidate: impl Display) -> bool {
        self.push(candidate.to_string(), true)
    }

    /// Fill missing slots from `perturb`, which yields candidates in order of
    /// preference for one attempt. Each slot gets [`PAD_ATTEMPTS`] tries.
    pub fn pad<R, I, F>(&mut self, rng: &mut R, mut perturb: F)
    where
        R: Rng + ?Sized,
        I: IntoIterator,
        I::Item: Display,
        F: FnMut(&mut R) -> I,
    {
        while self.entries.len() < OPTION_COUNT {
            let found = try_up_to(PAD_ATTEMPTS, |_| {
                perturb(rng)
                    .into_iter()
                    .map(|c| c.to_string())
                    .find(|c| self.accepts(c))
            });
            match found {
                Some(text) => self.entries.push(Entry { text, protected: false }),
                None => break,
            }
        }
    }

    /// Trim to four, top up with `filler` if still short, shuffle.
    ///
    /// `filler(i)` is a deterministic candidate for slot `i`; when it collides
    /// a numbered placeholder is used instead.
    pub fn finish<R, S, F>(mut self, rng: &mut R, filler: F) -> OptionPool
    where
        R: Rng + ?Sized,
        S: Display,
        F: Fn(usize) -> S,
    {
        while self.entries.len() > OPTION_COUNT {
            self.remove_one(rng);
        }

        if self.entries.len() < OPTION_COUNT {
            warn!(
                correct = %self.correct,
                have = self.entries.len(),
                "option pool short after padding; using synthetic fillers"
            );
        }
        while self.entries.len() < OPTION_COUNT {
            let slot = self.entries.len();
            if !self.push(filler(slot).to_string(), false) {
                let mut n = slot + 1;
                while !self.push(format!("Option {n}"), false) {
                    n += 1;
                }
            }
        }

        let mut options: Vec<String> = self.entries.into_iter().map(|e| e.text).collect();
        options.shuffle(rng);
        OptionPool::from_vec(options)
    }

    /// Drop a uniformly random unprotected entry; if every extra entry is
    /// protected, drop the oldest one that is not the correct answer.
    fn remove_one<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        let removable: Vec<usize> = self
            .entries
            .iter()
            .enumerate()
            .filter(|(_, e)| !e.protected && e.text != self.correct)
            .map(|(i, _)| i)
            .collect();
        let victim = match removable.choose(rng) {
            Some(&i) => Some(i),
            None => self.entries.iter().position(|e| e.text != self.correct),
        };
        if let Some(i) = victim {
            self.entries.remove(i);
        }
    }
}

/// Uniform offset in `-spread..=spread`.
pub fn jitter<R: Rng + ?Sized>(rng: &mut R, spread: i64) -> i64 {
    rng.gen_range(-spread..=spread)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn rejects_empty_duplicate_and_stray_zero() {
        let mut pool = PoolBuilder::new("7x");
        assert!(!pool.offer(""));
        assert!(!pool.offer("7x"));
        assert!(!pool.offer("0"));
        assert!(pool.offer("8x"));
        assert!(!pool.offer("8x"));
        assert_eq!(pool.len(), 2);
    }

    #[test]
    fn zero_is_kept_when_it_is_the_answer() {
        let pool = PoolBuilder::new("0");
        assert!(!pool.accepts("0"), "correct answer is already present");
        assert!(pool.accepts("x"));
    }

    #[test]
    fn trims_to_four_and_keeps_correct_and_protected() {
        for seed in 0..50u64 {
            let mut rng = StdRng::seed_from_u64(seed);
            let mut pool = PoolBuilder::new("a");
            pool.offer_protected("p");
            for c in ["b", "c", "d", "e", "f", "g"] {
                pool.offer(c);
            }
            let out = pool.finish(&mut rng, |i| format!("fill{i}"));
            assert_eq!(out.len(), 4);
            assert!(out.contains("a"));
            assert!(out.contains("p"), "protected entry trimmed (seed={seed})");
        }
    }

    #[test]
    fn pads_with_filler_when_perturbations_collide() {
        let mut rng = StdRng::seed_from_u64(1);
        let mut pool = PoolBuilder::new("x");
        pool.pad(&mut rng, |_| Some("x"));
        let out = pool.finish(&mut rng, |_| "x");
        assert_eq!(out.len(), 4);
        assert!(out.contains("x"));
        assert!(out.contains("Option 2"));
        let mut sorted = out.clone().into_vec();
        sorted.sort();
        sorted.dedup();
        assert_eq!(sorted.len(), 4);
    }

    #[test]
    fn pad_uses_first_acceptable_candidate() {
        let mut rng = StdRng::seed_from_u64(3);
        let mut pool = PoolBuilder::new("x");
        let mut n = 0;
        pool.pad(&mut rng, |_| {
            n += 1;
            ["x".to_string(), format!("{n}x")]
        });
        assert_eq!(pool.len(), 4);
        assert!(pool.contains("1x") && pool.contains("2x") && pool.contains("3x"));
    }

    #[test]
    fn jitter_stays_in_bounds() {
        let mut rng = StdRng::seed_from_u64(9);
        for _ in 0..200 {
            let j = jitter(&mut rng, 2);
            assert!((-2..=2).contains(&j));
        }
    }
}
