use crate::models::DEFAULT_SWIPE_THRESHOLD_PX;

/// Navigation requested by a completed swipe
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SwipeDirection {
    /// Finger moved leftward: show the next slide
    Next,
    /// Finger moved rightward: show the previous slide
    Previous,
}

/// Tracks one touch sequence and classifies it on release
///
/// A touch end without a matching start measures from x = 0, the same
/// origin the tracker starts with.
#[derive(Debug, Clone)]
pub struct SwipeTracker {
    threshold_px: f64,
    start_x: f64,
}

impl SwipeTracker {
    pub fn new(threshold_px: f64) -> Self {
        Self {
            threshold_px,
            start_x: 0.0,
        }
    }

    pub fn threshold_px(&self) -> f64 {
        self.threshold_px
    }

    pub fn touch_start(&mut self, x: f64) {
        self.start_x = x;
    }

    /// Finish the gesture at `x`
    ///
    /// # Returns
    /// A direction when the horizontal travel is strictly beyond the threshold
    pub fn touch_end(&mut self, x: f64) -> Option<SwipeDirection> {
        classify_swipe(self.start_x, x, self.threshold_px)
    }
}

impl Default for SwipeTracker {
    fn default() -> Self {
        Self::new(DEFAULT_SWIPE_THRESHOLD_PX)
    }
}

/// Classify a horizontal drag from `start_x` to `end_x`
pub fn classify_swipe(start_x: f64, end_x: f64, threshold_px: f64) -> Option<SwipeDirection> {
    let diff = start_x - end_x;

    if !diff.is_finite() || diff.abs() <= threshold_px {
        return None;
    }

    if diff > 0.0 {
        Some(SwipeDirection::Next)
    } else {
        Some(SwipeDirection::Previous)
    }
}
