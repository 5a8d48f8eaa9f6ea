//! Process-wide animation engine settings.
//!
//! `main` calls [`init`] once before rendering. Sections read the settings
//! with [`engine`]; if nothing was registered they get the defaults.

use once_cell::sync::OnceCell;

use crate::config;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EngineConfig {
    /// Frame clock period.
    pub frame_interval_ms: u32,
    /// Idle frames before a section's clock is put to sleep.
    pub auto_sleep_frames: u32,
    /// A frame gap longer than this is counted as one regular frame.
    pub lag_threshold_ms: f64,
}

impl Default for EngineConfig {
    fn default() -> Self {
        EngineConfig {
            frame_interval_ms: config::FRAME_INTERVAL_MS,
            auto_sleep_frames: config::AUTO_SLEEP_FRAMES,
            lag_threshold_ms: config::LAG_THRESHOLD_MS,
        }
    }
}

impl EngineConfig {
    /// Elapsed time to feed the controllers for a measured frame gap.
    pub fn frame_elapsed(&self, measured_ms: f64) -> f64 {
        if measured_ms < 0.0 || measured_ms > self.lag_threshold_ms {
            self.frame_interval_ms as f64
        } else {
            measured_ms
        }
    }
}

pub struct EngineCell(OnceCell<EngineConfig>);

impl EngineCell {
    pub const fn new() -> Self {
        EngineCell(OnceCell::new())
    }

    /// Register the settings. Only the first call wins.
    pub fn init(&self, config: EngineConfig) -> bool {
        self.0.set(config).is_ok()
    }

    pub fn get(&self) -> EngineConfig {
        *self.0.get_or_init(EngineConfig::default)
    }
}

static ENGINE: EngineCell = EngineCell::new();

pub fn init(config: EngineConfig) -> bool {
    ENGINE.init(config)
}

pub fn engine() -> EngineConfig {
    ENGINE.get()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_only_once() {
        let cell = EngineCell::new();
        let custom = EngineConfig {
            frame_interval_ms: 33,
            ..EngineConfig::default()
        };
        assert!(cell.init(custom));
        assert!(!cell.init(EngineConfig::default()));
        assert_eq!(cell.get().frame_interval_ms, 33);
    }

    #[test]
    fn test_defaults_without_init() {
        let cell = EngineCell::new();
        assert_eq!(cell.get(), EngineConfig::default());
        assert!(!cell.init(EngineConfig::default()));
    }

    #[test]
    fn test_lag_smoothing() {
        let config = EngineConfig::default();
        assert_eq!(config.frame_elapsed(20.0), 20.0);
        assert_eq!(config.frame_elapsed(4000.0), 16.0);
        assert_eq!(config.frame_elapsed(-3.0), 16.0);
    }
}
