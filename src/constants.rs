// Tunables for generation and playback

/// Slowest playback speed
pub const MIN_SPEED: u8 = 1;

/// Fastest playback speed
pub const MAX_SPEED: u8 = 10;

/// Speed used when none is given on the command line
pub const DEFAULT_SPEED: u8 = 5;

/// Tick delay is `BASE_DELAY_MS - speed * DELAY_STEP_MS`
/// Speeds 1..=10 map to 1000ms..=100ms
pub const BASE_DELAY_MS: u64 = 1100;
pub const DELAY_STEP_MS: u64 = 100;

/// Array size bounds for the generator controls
pub const MIN_ARRAY_SIZE: usize = 1;
pub const MAX_ARRAY_SIZE: usize = 200;
pub const DEFAULT_ARRAY_SIZE: usize = 30;

/// Inclusive range for generated values
pub const VALUE_MIN: i32 = 1;
pub const VALUE_MAX: i32 = 100;

/// Fraction of the array length swapped when building a nearly-sorted array
pub const NEARLY_SORTED_SWAP_FRACTION: f64 = 0.1;

/// Number of distinct values in a few-unique array
pub const FEW_UNIQUE_COUNT: usize = 5;
