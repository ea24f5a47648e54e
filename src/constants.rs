// Puzzle configuration constants
pub const BALL_COUNT: u32 = 12;
pub const BASELINE_WEIGHT: f64 = 1.0;
pub const ANOMALY_OFFSET: f64 = 0.01;

// The guess form stays locked until this many weighings are recorded
pub const WEIGHINGS_BEFORE_GUESS: usize = 2;
