use log::Level;

pub const CONTENT_DOCUMENT: &str = include_str!("../content.json");

pub const FRAME_INTERVAL_MS: u32 = 16;
pub const AUTO_SLEEP_FRAMES: u32 = 60;
pub const LAG_THRESHOLD_MS: f64 = 500.0;

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug  // Reveal mount/teardown and crossings are logged at debug
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}
