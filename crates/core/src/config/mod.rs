use serde::{Deserialize, Serialize};

/// Top-level configuration structure for the application.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    pub array: ArrayConfig,
    pub playback: PlaybackConfig,
}

/// Shape of the randomly generated input array.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ArrayConfig {
    pub size: usize,
    pub min_value: i32,
    pub max_value: i32,
}

impl Default for ArrayConfig {
    fn default() -> Self {
        Self {
            size: 30,
            min_value: 5,
            max_value: 100,
        }
    }
}

/// Animation pacing on a 1 (slowest) to 10 (fastest) scale.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlaybackConfig {
    pub speed: u32,
}

impl Default for PlaybackConfig {
    fn default() -> Self {
        Self { speed: 5 }
    }
}

impl PlaybackConfig {
    /// Milliseconds between frames: 1000 ms at speed 1 down to 100 ms at
    /// speed 10. Out-of-range speeds clamp to the scale.
    pub fn frame_interval_ms(&self) -> u64 {
        let speed = u64::from(self.speed.clamp(1, 10));
        1100 - speed * 100
    }
}
