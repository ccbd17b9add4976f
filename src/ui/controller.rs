// Carousel Controller - Bridges a host surface with carousel state
//
// This module contains the CarouselController which coordinates between:
// - CarouselSurface (the host page's elements)
// - CarouselStore (slide index and autoplay flag)
// - Scheduler (the autoplay timer)
//
// It handles:
// - Host events → navigation and autoplay control
// - State changes → track transform and indicator updates
// - The hover and reduced-motion autoplay policy

use crate::metrics::Metrics;
use crate::models::{CarouselError, CarouselSettings, SlideChange, indicator_label};
use crate::services::{Scheduler, SwipeDirection, SwipeTracker, TickFn, TimerHandle};
use crate::state::{CarouselEvent, CarouselStore};
use crate::ui::surface::CarouselSurface;
use std::fmt;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError, Weak};
use tokio::sync::broadcast;

/// Input delivered by the host page to one carousel
#[derive(Debug, Clone, PartialEq)]
pub enum HostEvent {
    /// The "next" control was clicked
    NextClicked,
    /// The "previous" control was clicked
    PrevClicked,
    /// Indicator dot `index` was clicked
    DotClicked(usize),
    /// A touch began at horizontal page coordinate `x`
    TouchStart { x: f64 },
    /// The touch ended at horizontal page coordinate `x`
    TouchEnd { x: f64 },
    /// Pointer entered the carousel region
    PointerEnter,
    /// Pointer left the carousel region
    PointerLeave,
    /// A key was pressed while the carousel had focus, named as in
    /// `KeyboardEvent.key`
    KeyDown(String),
}

/// Mutable per-instance bookkeeping, guarded by one lock so every operation
/// and timer tick on an instance runs to completion before the next
struct Ops {
    autoplay: Option<TimerHandle>,
    /// Bumped for every timer started; a tick only counts for the current one
    timer_generation: u64,
    swipe: SwipeTracker,
}

struct Inner {
    store: CarouselStore,
    surface: Arc<dyn CarouselSurface>,
    scheduler: Arc<dyn Scheduler>,
    settings: CarouselSettings,
    metrics: Option<Arc<Metrics>>,
    has_indicators: bool,
    ops: Mutex<Ops>,
}

/// Controller for a single carousel instance
///
/// Cheap to clone; clones drive the same carousel. The autoplay timer holds
/// only a weak reference, so dropping the last clone cancels it.
///
/// # Example
/// ```ignore
/// let surface = Arc::new(RecordingSurface::new(4));
/// let scheduler = Arc::new(TokioScheduler::current());
///
/// if let Some(carousel) = CarouselController::mount(surface, scheduler, settings, None) {
///     carousel.handle_event(HostEvent::NextClicked)?;
///     assert_eq!(carousel.current_index(), 1);
/// }
/// ```
#[derive(Clone)]
pub struct CarouselController {
    inner: Arc<Inner>,
}

impl CarouselController {
    /// Mount a carousel on `surface`, or skip it silently
    ///
    /// # Returns
    /// `None` when the surface has no slide container or no slides
    pub fn mount(
        surface: Arc<dyn CarouselSurface>,
        scheduler: Arc<dyn Scheduler>,
        settings: CarouselSettings,
        metrics: Option<Arc<Metrics>>,
    ) -> Option<Self> {
        match Self::try_mount(surface, scheduler, settings, metrics) {
            Ok(controller) => Some(controller),
            Err(e) => {
                tracing::debug!("Skipping carousel: {}", e);
                None
            }
        }
    }

    /// Mount a carousel on `surface`
    ///
    /// Generates one indicator per slide when the surface has an indicator
    /// container, marks the first active, then starts autoplay.
    ///
    /// # Errors
    /// [`CarouselError::MissingContainer`] or [`CarouselError::NoSlides`]
    pub fn try_mount(
        surface: Arc<dyn CarouselSurface>,
        scheduler: Arc<dyn Scheduler>,
        settings: CarouselSettings,
        metrics: Option<Arc<Metrics>>,
    ) -> Result<Self, CarouselError> {
        if !surface.has_container() {
            return Err(CarouselError::MissingContainer);
        }

        let slide_count = surface.slide_count();
        let store = CarouselStore::new(slide_count)?;

        let has_indicators = surface.has_indicator_container();
        if has_indicators {
            for index in 0..slide_count {
                surface.create_indicator(index, &indicator_label(index));
            }
            surface.set_indicator_active(0, true);
        }

        let swipe = SwipeTracker::new(settings.swipe_threshold_px);
        let controller = Self {
            inner: Arc::new(Inner {
                store,
                surface,
                scheduler,
                settings,
                metrics,
                has_indicators,
                ops: Mutex::new(Ops {
                    autoplay: None,
                    timer_generation: 0,
                    swipe,
                }),
            }),
        };

        tracing::debug!(
            "Mounted carousel: slides={}, indicators={}",
            slide_count,
            has_indicators
        );

        controller.start_autoplay();
        Ok(controller)
    }

    pub fn current_index(&self) -> usize {
        self.inner.store.read(|state| state.current_index())
    }

    pub fn slide_count(&self) -> usize {
        self.inner.store.read(|state| state.slide_count())
    }

    pub fn is_autoplay_active(&self) -> bool {
        self.inner.store.read(|state| state.is_autoplay_active())
    }

    /// Subscribe to slide and autoplay changes of this carousel
    pub fn subscribe(&self) -> broadcast::Receiver<CarouselEvent> {
        self.inner.store.subscribe()
    }

    /// Show slide `index`
    ///
    /// Autoplay keeps running; use [`handle_event`](Self::handle_event) with
    /// [`HostEvent::DotClicked`] for the user-facing variant that stops it.
    ///
    /// # Errors
    /// [`CarouselError::IndexOutOfRange`] when `index >= slide_count`; the
    /// carousel is left untouched
    pub fn go_to_slide(&self, index: usize) -> Result<(), CarouselError> {
        let _ops = self.inner.lock_ops();
        self.inner.go_to(index).map(|_| ())
    }

    pub fn next_slide(&self) {
        let _ops = self.inner.lock_ops();
        self.inner.navigate(SwipeDirection::Next);
    }

    pub fn prev_slide(&self) {
        let _ops = self.inner.lock_ops();
        self.inner.navigate(SwipeDirection::Previous);
    }

    /// Start advancing every autoplay interval
    ///
    /// Does nothing when autoplay is disabled, the visitor prefers reduced
    /// motion, or a timer is already running.
    pub fn start_autoplay(&self) {
        let mut ops = self.inner.lock_ops();
        Inner::start_autoplay(&self.inner, &mut ops);
    }

    /// Cancel the autoplay timer, if any
    pub fn stop_autoplay(&self) {
        let mut ops = self.inner.lock_ops();
        self.inner.stop_autoplay(&mut ops);
    }

    /// Apply one host event
    ///
    /// Manual navigation stops autoplay after moving. Hovering pauses
    /// autoplay until the pointer leaves again.
    ///
    /// # Errors
    /// [`CarouselError::IndexOutOfRange`] for a click on a dot that does not exist
    pub fn handle_event(&self, event: HostEvent) -> Result<(), CarouselError> {
        let mut ops = self.inner.lock_ops();

        match event {
            HostEvent::NextClicked => self.inner.manual(&mut ops, SwipeDirection::Next),
            HostEvent::PrevClicked => self.inner.manual(&mut ops, SwipeDirection::Previous),
            HostEvent::DotClicked(index) => {
                self.inner.go_to(index)?;
                self.inner.record(Metrics::record_manual_navigation);
                self.inner.stop_autoplay(&mut ops);
            }
            HostEvent::TouchStart { x } => ops.swipe.touch_start(x),
            HostEvent::TouchEnd { x } => {
                if let Some(direction) = ops.swipe.touch_end(x) {
                    tracing::debug!("Swipe recognized: {:?}", direction);
                    self.inner.record(Metrics::record_swipe);
                    self.inner.manual(&mut ops, direction);
                }
            }
            HostEvent::PointerEnter => self.inner.stop_autoplay(&mut ops),
            HostEvent::PointerLeave => Inner::start_autoplay(&self.inner, &mut ops),
            HostEvent::KeyDown(key) => match key.as_str() {
                "ArrowLeft" => self.inner.manual(&mut ops, SwipeDirection::Previous),
                "ArrowRight" => self.inner.manual(&mut ops, SwipeDirection::Next),
                _ => {}
            },
        }

        Ok(())
    }
}

impl Inner {
    fn lock_ops(&self) -> MutexGuard<'_, Ops> {
        self.ops.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn record(&self, record: fn(&Metrics)) {
        if let Some(metrics) = &self.metrics {
            record(metrics);
        }
    }

    fn go_to(&self, index: usize) -> Result<SlideChange, CarouselError> {
        match self.store.go_to(index) {
            Ok(change) => {
                self.render(change);
                Ok(change)
            }
            Err(e) => {
                tracing::warn!("Rejected carousel navigation: {}", e);
                self.record(Metrics::record_rejected_navigation);
                Err(e)
            }
        }
    }

    fn navigate(&self, direction: SwipeDirection) -> SlideChange {
        let change = match direction {
            SwipeDirection::Next => self.store.advance(),
            SwipeDirection::Previous => self.store.retreat(),
        };
        self.render(change);
        change
    }

    fn manual(&self, ops: &mut Ops, direction: SwipeDirection) {
        self.navigate(direction);
        self.record(Metrics::record_manual_navigation);
        self.stop_autoplay(ops);
    }

    /// Position the track and move the active marker to `change.to`
    fn render(&self, change: SlideChange) {
        let transform = self.store.read(|state| state.track_transform());
        self.surface.set_track_transform(&transform);

        if self.has_indicators {
            let slide_count = self.store.read(|state| state.slide_count());
            for index in 0..slide_count {
                self.surface.set_indicator_active(index, index == change.to);
            }
        }

        if !change.is_noop() {
            self.record(Metrics::record_slide_change);
            tracing::debug!("Carousel moved from slide {} to {}", change.from, change.to);
        }
    }

    fn start_autoplay(this: &Arc<Self>, ops: &mut Ops) {
        if !this.settings.autoplay {
            return;
        }
        if this.surface.prefers_reduced_motion() {
            tracing::debug!("Reduced motion preferred, autoplay not started");
            return;
        }
        if ops.autoplay.is_some() {
            return;
        }

        ops.timer_generation += 1;
        let generation = ops.timer_generation;
        let weak: Weak<Self> = Arc::downgrade(this);
        let tick: TickFn = Arc::new(move || {
            if let Some(inner) = weak.upgrade() {
                inner.autoplay_tick(generation);
            }
        });

        let period = this.settings.autoplay_interval();
        ops.autoplay = Some(this.scheduler.schedule_repeating(period, tick));
        this.store.set_autoplay_active(true);
        tracing::debug!("Autoplay started every {:?}", period);
    }

    fn stop_autoplay(&self, ops: &mut Ops) {
        if let Some(mut handle) = ops.autoplay.take() {
            handle.cancel();
            tracing::debug!("Autoplay stopped");
        }
        self.store.set_autoplay_active(false);
    }

    fn autoplay_tick(&self, generation: u64) {
        let ops = self.lock_ops();

        // A cancelled timer's tick can already be waiting on the lock
        if ops.autoplay.is_none() || ops.timer_generation != generation {
            tracing::trace!("Ignoring stale autoplay tick");
            return;
        }

        self.navigate(SwipeDirection::Next);
        self.record(Metrics::record_autoplay_tick);
    }
}

impl fmt::Debug for CarouselController {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = self.inner.store.snapshot();
        f.debug_struct("CarouselController")
            .field("slide_count", &state.slide_count())
            .field("current_index", &state.current_index())
            .field("autoplay_active", &state.is_autoplay_active())
            .finish()
    }
}
