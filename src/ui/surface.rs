// Host surface - the page-side half of a carousel
//
// The controller never touches a DOM directly. It talks to a CarouselSurface,
// which a browser binding, a test double or the demo binary implements.

use std::sync::{Mutex, MutexGuard, PoisonError};

/// Elements and styling hooks of one carousel container on the host page
///
/// Methods take `&self`: mutations go to the host's own element handles.
#[cfg_attr(test, mockall::automock)]
pub trait CarouselSurface: Send + Sync {
    /// Whether the slide track element exists
    fn has_container(&self) -> bool;

    /// Number of slide elements found inside the container
    fn slide_count(&self) -> usize;

    /// Whether the page provides a container for indicator dots
    fn has_indicator_container(&self) -> bool;

    /// Append the indicator for slide `index` with its accessible label
    fn create_indicator(&self, index: usize, label: &str);

    /// Toggle the `active` class on indicator `index`
    fn set_indicator_active(&self, index: usize, active: bool);

    /// Write the inline transform of the slide track
    fn set_track_transform(&self, transform: &str);

    /// Whether the visitor asked for reduced motion
    fn prefers_reduced_motion(&self) -> bool;
}

/// One generated indicator dot
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Indicator {
    pub label: String,
    pub active: bool,
}

#[derive(Debug, Default)]
struct Recorded {
    indicators: Vec<Indicator>,
    track_transform: Option<String>,
    reduced_motion: bool,
    transform_writes: usize,
}

/// In-memory surface that records every mutation
///
/// Used by the demo binary and by tests that inspect the visual contract.
#[derive(Debug)]
pub struct RecordingSurface {
    slide_count: usize,
    has_container: bool,
    has_indicator_container: bool,
    recorded: Mutex<Recorded>,
}

impl RecordingSurface {
    /// A complete carousel with `slide_count` slides and an indicator container
    pub fn new(slide_count: usize) -> Self {
        Self {
            slide_count,
            has_container: true,
            has_indicator_container: true,
            recorded: Mutex::new(Recorded::default()),
        }
    }

    pub fn without_container(mut self) -> Self {
        self.has_container = false;
        self
    }

    pub fn without_indicators(mut self) -> Self {
        self.has_indicator_container = false;
        self
    }

    pub fn with_reduced_motion(self, reduced_motion: bool) -> Self {
        self.set_reduced_motion(reduced_motion);
        self
    }

    /// Change the visitor's motion preference, as a media-query listener would
    pub fn set_reduced_motion(&self, reduced_motion: bool) {
        self.lock().reduced_motion = reduced_motion;
    }

    pub fn indicators(&self) -> Vec<Indicator> {
        self.lock().indicators.clone()
    }

    /// Positions of every indicator currently marked active
    pub fn active_indicators(&self) -> Vec<usize> {
        self.lock()
            .indicators
            .iter()
            .enumerate()
            .filter(|(_, indicator)| indicator.active)
            .map(|(index, _)| index)
            .collect()
    }

    /// Last transform written to the track, if any
    pub fn track_transform(&self) -> Option<String> {
        self.lock().track_transform.clone()
    }

    /// How many times the track transform was written
    pub fn transform_writes(&self) -> usize {
        self.lock().transform_writes
    }

    fn lock(&self) -> MutexGuard<'_, Recorded> {
        self.recorded.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl CarouselSurface for RecordingSurface {
    fn has_container(&self) -> bool {
        self.has_container
    }

    fn slide_count(&self) -> usize {
        self.slide_count
    }

    fn has_indicator_container(&self) -> bool {
        self.has_indicator_container
    }

    fn create_indicator(&self, index: usize, label: &str) {
        let mut recorded = self.lock();
        if recorded.indicators.len() <= index {
            recorded.indicators.resize(
                index + 1,
                Indicator {
                    label: String::new(),
                    active: false,
                },
            );
        }
        recorded.indicators[index] = Indicator {
            label: label.to_string(),
            active: false,
        };
    }

    fn set_indicator_active(&self, index: usize, active: bool) {
        if let Some(indicator) = self.lock().indicators.get_mut(index) {
            indicator.active = active;
        }
    }

    fn set_track_transform(&self, transform: &str) {
        let mut recorded = self.lock();
        recorded.track_transform = Some(transform.to_string());
        recorded.transform_writes += 1;
    }

    fn prefers_reduced_motion(&self) -> bool {
        self.lock().reduced_motion
    }
}
