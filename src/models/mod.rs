//! Data models for slidekit.
//!
//! - [`CarouselState`]: slide-index state machine of a single carousel, with
//!   wraparound navigation and bounds-checked direct jumps
//! - [`SiteSettings`]: settings loaded from `Slidekit Config.yaml`
//!   ([`CarouselSettings`] for timing and gestures, [`LoggingSettings`] for output)
//!
//! The models perform no I/O. Shared access goes through
//! [`CarouselStore`](crate::state::CarouselStore).

pub mod carousel;
pub mod config;

pub use carousel::{CarouselError, CarouselState, SlideChange, indicator_label};
pub use config::{
    CarouselSettings, DEFAULT_AUTOPLAY_INTERVAL_MS, DEFAULT_SWIPE_THRESHOLD_PX, LoggingSettings,
    SiteSettings,
};
