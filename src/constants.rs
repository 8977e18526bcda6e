// Game timing constants
pub const TARGET_FPS: f64 = 60.0;
pub const FRAME_INTERVAL_MS: f64 = 1000.0 / TARGET_FPS;

// Input poll timeout for the terminal front end
pub const INPUT_POLL_MS: u64 = 8;

// Delay before the whole-word clip so it never overlaps the last letter clip
pub const WORD_AUDIO_DELAY_MS: u64 = 300;

// Network constants
pub const DEFAULT_SERVER_URL: &str = "http://localhost:3000";
pub const REQUEST_TIMEOUT_SECS: u64 = 5;
