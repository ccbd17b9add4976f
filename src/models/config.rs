use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Default autoplay period in milliseconds.
pub const DEFAULT_AUTOPLAY_INTERVAL_MS: u64 = 5000;

/// Default minimum horizontal swipe distance in pixels.
pub const DEFAULT_SWIPE_THRESHOLD_PX: f64 = 50.0;

/// Top-level settings from `Slidekit Config.yaml`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SiteSettings {
    #[serde(default)]
    pub carousel: CarouselSettings,

    #[serde(default)]
    pub logging: LoggingSettings,
}

/// Per-carousel behaviour shared by every instance on a page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CarouselSettings {
    /// Whether carousels advance on their own at all.
    #[serde(default = "default_autoplay")]
    pub autoplay: bool,

    #[serde(default = "default_autoplay_interval_ms")]
    pub autoplay_interval_ms: u64,

    /// A swipe must move strictly further than this to navigate.
    #[serde(default = "default_swipe_threshold_px")]
    pub swipe_threshold_px: f64,
}

impl Default for CarouselSettings {
    fn default() -> Self {
        Self {
            autoplay: true,
            autoplay_interval_ms: DEFAULT_AUTOPLAY_INTERVAL_MS,
            swipe_threshold_px: DEFAULT_SWIPE_THRESHOLD_PX,
        }
    }
}

impl CarouselSettings {
    pub fn autoplay_interval(&self) -> Duration {
        Duration::from_millis(self.autoplay_interval_ms)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoggingSettings {
    #[serde(default)]
    pub debug: bool,

    #[serde(default = "default_console")]
    pub console: bool,

    #[serde(default = "default_log_directory")]
    pub directory: String,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            debug: false,
            console: true,
            directory: default_log_directory(),
        }
    }
}

fn default_autoplay() -> bool {
    true
}

fn default_autoplay_interval_ms() -> u64 {
    DEFAULT_AUTOPLAY_INTERVAL_MS
}

fn default_swipe_threshold_px() -> f64 {
    DEFAULT_SWIPE_THRESHOLD_PX
}

fn default_console() -> bool {
    true
}

fn default_log_directory() -> String {
    "logs".to_string()
}
