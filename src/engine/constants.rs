// Constants for the sort engine

/// Smallest value the generator will place in the array
pub const VALUE_MIN: u32 = 10;

/// Largest value the generator will place in the array
pub const VALUE_MAX: u32 = 509;

/// Exclusive value ceiling; bar heights are normalized against this
pub const VALUE_LIMIT: u32 = 510;

/// Smallest array size the shell may request
pub const MIN_ARRAY_SIZE: usize = 10;

/// Largest array size the shell may request
pub const MAX_ARRAY_SIZE: usize = 200;

/// Array size used on startup
pub const DEFAULT_ARRAY_SIZE: usize = 100;

/// Slowest speed setting (pacing interval 100ms)
pub const MIN_SPEED: u32 = 1;

/// Fastest speed setting (pacing interval 1ms)
pub const MAX_SPEED: u32 = 100;

/// Speed setting used on startup
pub const DEFAULT_SPEED: u32 = 50;

/// Coarse interval at which a paused worker re-checks its flags
pub const PAUSE_POLL_MS: u64 = 50;
