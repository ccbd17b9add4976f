// State management module
//
// This module provides the CarouselStore which wraps CarouselState with
// thread-safe access and emits change events for subscribers.

use crate::models::{CarouselError, CarouselState, SlideChange};
use std::sync::{Arc, PoisonError, RwLock};
use tokio::sync::broadcast;

/// Change events emitted when carousel state is modified
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CarouselEvent {
    /// The visible slide changed
    SlideChanged { from: usize, to: usize },

    /// A recurring autoplay timer was scheduled
    AutoplayStarted,

    /// The autoplay timer was cancelled
    AutoplayStopped,
}

/// Thread-safe carousel state with event emission
///
/// Mirrors the way the GUI state layer works elsewhere in the crate:
/// - [`read()`](Self::read) for reading state under a read lock
/// - [`update()`](Self::update) for mutations, diffed into [`CarouselEvent`]s
/// - [`subscribe()`](Self::subscribe) for listening to those events
///
/// Clones share the same state and channel.
#[derive(Clone, Debug)]
pub struct CarouselStore {
    state: Arc<RwLock<CarouselState>>,

    /// Buffered broadcast of state changes; lagging receivers drop the oldest
    events_tx: broadcast::Sender<CarouselEvent>,
}

impl CarouselStore {
    /// Create a store for `slide_count` slides
    ///
    /// # Returns
    /// A store with a broadcast buffer of 64 events, or
    /// [`CarouselError::NoSlides`] when `slide_count` is zero
    pub fn new(slide_count: usize) -> Result<Self, CarouselError> {
        let state = CarouselState::new(slide_count)?;
        let (events_tx, _) = broadcast::channel(64);

        Ok(Self {
            state: Arc::new(RwLock::new(state)),
            events_tx,
        })
    }

    /// Clone of the current state
    pub fn snapshot(&self) -> CarouselState {
        self.read(|state| state.clone())
    }

    /// Run `f` with read access to the state
    pub fn read<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&CarouselState) -> R,
    {
        let state = self.state.read().unwrap_or_else(PoisonError::into_inner);
        f(&state)
    }

    /// Apply `update_fn`, then emit an event for everything it changed
    ///
    /// # Returns
    /// The closure's result together with the emitted events
    pub fn update<F, R>(&self, update_fn: F) -> (R, Vec<CarouselEvent>)
    where
        F: FnOnce(&mut CarouselState) -> R,
    {
        let mut state = self.state.write().unwrap_or_else(PoisonError::into_inner);
        let old_state = state.clone();

        let result = update_fn(&mut state);

        let changes = Self::detect_changes(&old_state, &state);
        for change in &changes {
            // No subscribers is fine
            let _ = self.events_tx.send(change.clone());
        }

        (result, changes)
    }

    /// Subscribe to future state changes
    pub fn subscribe(&self) -> broadcast::Receiver<CarouselEvent> {
        self.events_tx.subscribe()
    }

    fn detect_changes(old: &CarouselState, new: &CarouselState) -> Vec<CarouselEvent> {
        let mut changes = Vec::new();

        if old.current_index() != new.current_index() {
            changes.push(CarouselEvent::SlideChanged {
                from: old.current_index(),
                to: new.current_index(),
            });
        }

        if old.is_autoplay_active() != new.is_autoplay_active() {
            changes.push(if new.is_autoplay_active() {
                CarouselEvent::AutoplayStarted
            } else {
                CarouselEvent::AutoplayStopped
            });
        }

        changes
    }

    // Convenience methods for the state machine transitions

    pub fn advance(&self) -> SlideChange {
        self.update(CarouselState::advance).0
    }

    pub fn retreat(&self) -> SlideChange {
        self.update(CarouselState::retreat).0
    }

    pub fn go_to(&self, index: usize) -> Result<SlideChange, CarouselError> {
        self.update(|state| state.go_to(index)).0
    }

    pub fn set_autoplay_active(&self, active: bool) -> Vec<CarouselEvent> {
        self.update(|state| state.set_autoplay_active(active)).1
    }
}
