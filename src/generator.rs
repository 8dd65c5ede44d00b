//! Initial array generation
//!
//! Four distributions, matching the shapes that make the algorithms behave
//! differently: uniform noise, almost-sorted input (insertion sort's best
//! case), reversed input (the classic worst case) and heavy duplication.

use crate::constants::{FEW_UNIQUE_COUNT, NEARLY_SORTED_SWAP_FRACTION, VALUE_MAX, VALUE_MIN};
use crate::engine::Value;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Shape of a generated array
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Distribution {
    #[default]
    RandomUniform,
    NearlySorted,
    Reversed,
    FewUnique,
}

impl Distribution {
    pub const ALL: [Distribution; 4] = [
        Distribution::RandomUniform,
        Distribution::NearlySorted,
        Distribution::Reversed,
        Distribution::FewUnique,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Distribution::RandomUniform => "random",
            Distribution::NearlySorted => "nearly-sorted",
            Distribution::Reversed => "reversed",
            Distribution::FewUnique => "few-unique",
        }
    }

    /// Next distribution in cycling order
    pub fn next(self) -> Self {
        match self {
            Distribution::RandomUniform => Distribution::NearlySorted,
            Distribution::NearlySorted => Distribution::Reversed,
            Distribution::Reversed => Distribution::FewUnique,
            Distribution::FewUnique => Distribution::RandomUniform,
        }
    }
}

impl fmt::Display for Distribution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown distribution '{name}' (expected one of: random, nearly-sorted, reversed, few-unique)")]
pub struct ParseDistributionError {
    pub name: String,
}

impl FromStr for Distribution {
    type Err = ParseDistributionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "random" | "uniform" | "random-uniform" => Ok(Distribution::RandomUniform),
            "nearly-sorted" | "nearlySorted" | "nearly_sorted" => Ok(Distribution::NearlySorted),
            "reversed" => Ok(Distribution::Reversed),
            "few-unique" | "fewUnique" | "few_unique" => Ok(Distribution::FewUnique),
            _ => Err(ParseDistributionError {
                name: s.to_string(),
            }),
        }
    }
}

/// Produces arrays under a [`Distribution`]
#[derive(Debug, Clone)]
pub struct ArrayGenerator {
    rng: SmallRng,
}

impl ArrayGenerator {
    /// Generator seeded from the operating system
    pub fn new() -> Self {
        ArrayGenerator {
            rng: SmallRng::from_os_rng(),
        }
    }

    /// Reproducible generator
    pub fn seeded(seed: u64) -> Self {
        ArrayGenerator {
            rng: SmallRng::seed_from_u64(seed),
        }
    }

    pub fn generate(&mut self, distribution: Distribution, size: usize) -> Vec<Value> {
        match distribution {
            Distribution::RandomUniform => self.random(size),
            Distribution::NearlySorted => self.nearly_sorted(size),
            Distribution::Reversed => (1..=size as Value).rev().collect(),
            Distribution::FewUnique => self.few_unique(size),
        }
    }

    fn random(&mut self, size: usize) -> Vec<Value> {
        (0..size)
            .map(|_| self.rng.random_range(VALUE_MIN..=VALUE_MAX))
            .collect()
    }

    fn nearly_sorted(&mut self, size: usize) -> Vec<Value> {
        let mut array: Vec<Value> = (1..=size as Value).collect();
        let swaps = (size as f64 * NEARLY_SORTED_SWAP_FRACTION).floor() as usize;
        for _ in 0..swaps {
            let a = self.rng.random_range(0..size);
            let b = self.rng.random_range(0..size);
            array.swap(a, b);
        }
        array
    }

    fn few_unique(&mut self, size: usize) -> Vec<Value> {
        let palette = self.random(FEW_UNIQUE_COUNT);
        (0..size)
            .map(|_| palette[self.rng.random_range(0..palette.len())])
            .collect()
    }
}

impl Default for ArrayGenerator {
    fn default() -> Self {
        Self::new()
    }
}
