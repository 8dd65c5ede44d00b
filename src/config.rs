//! Command-line configuration

use crate::constants::{
    DEFAULT_ARRAY_SIZE, DEFAULT_SPEED, MAX_ARRAY_SIZE, MAX_SPEED, MIN_ARRAY_SIZE, MIN_SPEED,
};
use crate::engine::{Algorithm, Value};
use crate::generator::Distribution;
use crate::playback::PlaybackMode;
use clap::Parser;
use std::path::PathBuf;

/// Step through sorting algorithms in the terminal
#[derive(Parser, Debug, Clone)]
#[command(name = "sortty", version, about)]
pub struct Cli {
    /// Algorithm to visualize: bubble, selection, insertion, merge, quick, heap
    #[arg(short, long, default_value = "bubble")]
    pub algorithm: Algorithm,

    /// Shape of the generated array: random, nearly-sorted, reversed, few-unique
    #[arg(short, long, default_value = "random")]
    pub distribution: Distribution,

    /// Number of elements to generate
    #[arg(short = 'n', long, default_value_t = DEFAULT_ARRAY_SIZE)]
    pub size: usize,

    /// Playback speed from 1 (slowest) to 10 (fastest)
    #[arg(short, long, default_value_t = DEFAULT_SPEED)]
    pub speed: u8,

    /// Advance one step per key press instead of on a timer
    #[arg(long)]
    pub step_mode: bool,

    /// Seed for reproducible arrays
    #[arg(long)]
    pub seed: Option<u64>,

    /// Explicit input array, e.g. `--values 3,1,2` (overrides the generator)
    #[arg(long, value_delimiter = ',', allow_negative_numbers = true)]
    pub values: Option<Vec<Value>>,

    /// Print the trace as JSON and exit instead of opening the TUI
    #[arg(long)]
    pub trace: bool,

    /// Write logs to this file (the TUI otherwise runs without logging)
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}

impl Cli {
    pub fn mode(&self) -> PlaybackMode {
        if self.step_mode {
            PlaybackMode::Step
        } else {
            PlaybackMode::Continuous
        }
    }

    pub fn clamped_speed(&self) -> u8 {
        self.speed.clamp(MIN_SPEED, MAX_SPEED)
    }

    pub fn clamped_size(&self) -> usize {
        self.size.clamp(MIN_ARRAY_SIZE, MAX_ARRAY_SIZE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cli = Cli::parse_from(["sortty"]);
        assert_eq!(cli.algorithm, Algorithm::Bubble);
        assert_eq!(cli.distribution, Distribution::RandomUniform);
        assert_eq!(cli.size, DEFAULT_ARRAY_SIZE);
        assert_eq!(cli.mode(), PlaybackMode::Continuous);
        assert!(cli.values.is_none());
    }

    #[test]
    fn test_explicit_values() {
        let cli = Cli::parse_from(["sortty", "--algorithm", "quick", "--values", "5,-1,3", "--trace"]);
        assert_eq!(cli.algorithm, Algorithm::Quick);
        assert_eq!(cli.values, Some(vec![5, -1, 3]));
        assert!(cli.trace);
    }

    #[test]
    fn test_unknown_algorithm_rejected() {
        assert!(Cli::try_parse_from(["sortty", "--algorithm", "bogo"]).is_err());
    }

    #[test]
    fn test_clamping() {
        let cli = Cli::parse_from(["sortty", "--speed", "42", "--size", "0", "--step-mode"]);
        assert_eq!(cli.clamped_speed(), MAX_SPEED);
        assert_eq!(cli.clamped_size(), MIN_ARRAY_SIZE);
        assert_eq!(cli.mode(), PlaybackMode::Step);
    }
}
