// Carousel metrics module
//
// Lightweight counters for how carousels on a page are being driven

use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{Duration, Instant};

/// Page-wide carousel metrics
///
/// Uses atomic operations so controllers and timer tasks can record without
/// locks. Share one instance between controllers through an `Arc`.
#[derive(Debug)]
pub struct Metrics {
    /// Navigations that actually moved to a different slide
    pub slide_changes: AtomicU64,

    /// Button, dot, swipe and keyboard navigations
    pub manual_navigations: AtomicU64,

    /// Autoplay timer ticks that advanced a carousel
    pub autoplay_ticks: AtomicU64,

    /// Touch gestures that passed the swipe threshold
    pub swipes_recognized: AtomicU64,

    /// Direct jumps refused for an out-of-range index
    pub rejected_navigations: AtomicU64,

    start_time: Instant,
}

impl Metrics {
    pub fn new() -> Self {
        Self {
            slide_changes: AtomicU64::new(0),
            manual_navigations: AtomicU64::new(0),
            autoplay_ticks: AtomicU64::new(0),
            swipes_recognized: AtomicU64::new(0),
            rejected_navigations: AtomicU64::new(0),
            start_time: Instant::now(),
        }
    }

    pub fn record_slide_change(&self) {
        self.slide_changes.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_manual_navigation(&self) {
        self.manual_navigations.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_autoplay_tick(&self) {
        self.autoplay_ticks.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_swipe(&self) {
        self.swipes_recognized.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_rejected_navigation(&self) {
        self.rejected_navigations.fetch_add(1, Ordering::Relaxed);
    }

    pub fn uptime(&self) -> Duration {
        self.start_time.elapsed()
    }

    /// Log metrics summary
    pub fn log_summary(&self) {
        tracing::info!("=== Carousel Metrics Summary ===");
        tracing::info!("Uptime: {:.2}s", self.uptime().as_secs_f64());
        tracing::info!(
            "Slide changes: {} ({} manual, {} autoplay ticks)",
            self.slide_changes.load(Ordering::Relaxed),
            self.manual_navigations.load(Ordering::Relaxed),
            self.autoplay_ticks.load(Ordering::Relaxed)
        );
        tracing::info!(
            "Swipes recognized: {}, rejected navigations: {}",
            self.swipes_recognized.load(Ordering::Relaxed),
            self.rejected_navigations.load(Ordering::Relaxed)
        );
    }
}

impl Default for Metrics {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;

    #[test]
    fn test_metrics_creation() {
        let metrics = Metrics::new();
        assert_eq!(metrics.slide_changes.load(Ordering::Relaxed), 0);
        assert_eq!(metrics.autoplay_ticks.load(Ordering::Relaxed), 0);
    }

    #[test]
    fn test_counters() {
        let metrics = Metrics::new();

        metrics.record_slide_change();
        metrics.record_slide_change();
        metrics.record_manual_navigation();
        metrics.record_autoplay_tick();
        metrics.record_swipe();
        metrics.record_rejected_navigation();

        assert_eq!(metrics.slide_changes.load(Ordering::Relaxed), 2);
        assert_eq!(metrics.manual_navigations.load(Ordering::Relaxed), 1);
        assert_eq!(metrics.autoplay_ticks.load(Ordering::Relaxed), 1);
        assert_eq!(metrics.swipes_recognized.load(Ordering::Relaxed), 1);
        assert_eq!(metrics.rejected_navigations.load(Ordering::Relaxed), 1);
    }

    #[test]
    fn test_uptime() {
        let metrics = Metrics::new();
        thread::sleep(Duration::from_millis(10));
        assert!(metrics.uptime().as_millis() >= 10);
    }
}
