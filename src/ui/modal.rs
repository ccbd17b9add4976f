// Modal Controller - one open dialog at a time
//
// Trigger links open a modal by id. A modal closes from its close button, a
// click on its own backdrop, or Escape. While one is open the page body does
// not scroll.

use std::collections::BTreeSet;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use thiserror::Error;

/// Errors raised when an event names a modal the page does not have
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ModalError {
    #[error("no modal with id '{0}'")]
    UnknownModal(String),
}

/// Modal elements and page-level hooks of the host page
#[cfg_attr(test, mockall::automock)]
pub trait ModalSurface: Send + Sync {
    /// Whether an element with this id exists
    fn has_modal(&self, id: &str) -> bool;

    /// Toggle the `active` class on the modal
    fn set_modal_active(&self, id: &str, active: bool);

    /// Hide or restore the body's overflow
    fn set_scroll_locked(&self, locked: bool);

    /// Move focus to the first focusable element inside the modal
    fn focus_first_element(&self, id: &str);
}

/// Input delivered by the host page to the modal controller
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ModalEvent {
    /// An element with `data-modal-target` pointing at the id was clicked
    TriggerClicked(String),
    /// The modal's close button was clicked
    CloseClicked(String),
    /// A click landed on the modal element itself, outside its content
    BackdropClicked(String),
    /// A key was pressed anywhere on the page
    KeyDown(String),
}

pub struct ModalController {
    surface: Arc<dyn ModalSurface>,
    active: Mutex<Option<String>>,
}

impl ModalController {
    pub fn new(surface: Arc<dyn ModalSurface>) -> Self {
        Self {
            surface,
            active: Mutex::new(None),
        }
    }

    /// Id of the open modal, if any
    pub fn active_modal(&self) -> Option<String> {
        self.lock().clone()
    }

    /// Open modal `id`, closing whichever modal was open before
    ///
    /// # Errors
    /// [`ModalError::UnknownModal`] when the page has no such modal
    pub fn open(&self, id: &str) -> Result<(), ModalError> {
        if !self.surface.has_modal(id) {
            tracing::debug!("Ignoring open of unknown modal '{}'", id);
            return Err(ModalError::UnknownModal(id.to_string()));
        }

        let mut active = self.lock();
        match active.take() {
            Some(previous) if previous != id => self.surface.set_modal_active(&previous, false),
            _ => {}
        }

        self.surface.set_modal_active(id, true);
        self.surface.set_scroll_locked(true);
        self.surface.focus_first_element(id);
        *active = Some(id.to_string());

        tracing::debug!("Opened modal '{}'", id);
        Ok(())
    }

    /// Close modal `id`; closing a modal that is not open does nothing
    ///
    /// # Errors
    /// [`ModalError::UnknownModal`] when the page has no such modal
    pub fn close(&self, id: &str) -> Result<(), ModalError> {
        if !self.surface.has_modal(id) {
            return Err(ModalError::UnknownModal(id.to_string()));
        }

        let mut active = self.lock();
        if active.as_deref() != Some(id) {
            return Ok(());
        }

        self.surface.set_modal_active(id, false);
        self.surface.set_scroll_locked(false);
        *active = None;

        tracing::debug!("Closed modal '{}'", id);
        Ok(())
    }

    pub fn handle_event(&self, event: ModalEvent) -> Result<(), ModalError> {
        match event {
            ModalEvent::TriggerClicked(id) => self.open(&id),
            ModalEvent::CloseClicked(id) | ModalEvent::BackdropClicked(id) => self.close(&id),
            ModalEvent::KeyDown(key) if key == "Escape" => match self.active_modal() {
                Some(id) => self.close(&id),
                None => Ok(()),
            },
            ModalEvent::KeyDown(_) => Ok(()),
        }
    }

    fn lock(&self) -> MutexGuard<'_, Option<String>> {
        self.active.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl std::fmt::Debug for ModalController {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ModalController")
            .field("active", &self.active_modal())
            .finish()
    }
}

#[derive(Debug, Default)]
struct RecordedModals {
    active: BTreeSet<String>,
    scroll_locked: bool,
    focused: Option<String>,
}

/// In-memory page holding a fixed set of modals
#[derive(Debug)]
pub struct RecordingModalSurface {
    ids: Vec<String>,
    recorded: Mutex<RecordedModals>,
}

impl RecordingModalSurface {
    pub fn new<I, S>(ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            ids: ids.into_iter().map(Into::into).collect(),
            recorded: Mutex::new(RecordedModals::default()),
        }
    }

    /// Ids of every modal currently carrying the `active` class
    pub fn active_modals(&self) -> Vec<String> {
        self.lock().active.iter().cloned().collect()
    }

    pub fn is_scroll_locked(&self) -> bool {
        self.lock().scroll_locked
    }

    /// Modal that last received focus
    pub fn focused(&self) -> Option<String> {
        self.lock().focused.clone()
    }

    fn lock(&self) -> MutexGuard<'_, RecordedModals> {
        self.recorded.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl ModalSurface for RecordingModalSurface {
    fn has_modal(&self, id: &str) -> bool {
        self.ids.iter().any(|known| known == id)
    }

    fn set_modal_active(&self, id: &str, active: bool) {
        let mut recorded = self.lock();
        if active {
            recorded.active.insert(id.to_string());
        } else {
            recorded.active.remove(id);
        }
    }

    fn set_scroll_locked(&self, locked: bool) {
        self.lock().scroll_locked = locked;
    }

    fn focus_first_element(&self, id: &str) {
        self.lock().focused = Some(id.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockall::Sequence;
    use mockall::predicate::eq;

    fn page() -> (ModalController, Arc<RecordingModalSurface>) {
        let surface = Arc::new(RecordingModalSurface::new(["quote", "brochure"]));
        (ModalController::new(surface.clone()), surface)
    }

    #[test]
    fn test_trigger_opens_and_locks_scroll() {
        let (modals, surface) = page();

        modals
            .handle_event(ModalEvent::TriggerClicked("quote".to_string()))
            .unwrap();

        assert_eq!(modals.active_modal().as_deref(), Some("quote"));
        assert_eq!(surface.active_modals(), vec!["quote"]);
        assert!(surface.is_scroll_locked());
        assert_eq!(surface.focused().as_deref(), Some("quote"));
    }

    #[test]
    fn test_opening_second_modal_replaces_first() {
        let (modals, surface) = page();

        modals.open("quote").unwrap();
        modals.open("brochure").unwrap();

        assert_eq!(surface.active_modals(), vec!["brochure"]);
        assert_eq!(modals.active_modal().as_deref(), Some("brochure"));
        assert!(surface.is_scroll_locked());
    }

    #[test]
    fn test_close_paths_unlock_scroll() {
        let (modals, surface) = page();

        for close in [
            ModalEvent::CloseClicked("quote".to_string()),
            ModalEvent::BackdropClicked("quote".to_string()),
            ModalEvent::KeyDown("Escape".to_string()),
        ] {
            modals.open("quote").unwrap();
            modals.handle_event(close).unwrap();

            assert_eq!(modals.active_modal(), None);
            assert!(surface.active_modals().is_empty());
            assert!(!surface.is_scroll_locked());
        }
    }

    #[test]
    fn test_escape_without_open_modal_is_ignored() {
        let (modals, surface) = page();

        modals
            .handle_event(ModalEvent::KeyDown("Escape".to_string()))
            .unwrap();
        modals
            .handle_event(ModalEvent::KeyDown("Enter".to_string()))
            .unwrap();

        assert_eq!(modals.active_modal(), None);
        assert!(!surface.is_scroll_locked());
    }

    #[test]
    fn test_closing_inactive_modal_keeps_open_one() {
        let (modals, surface) = page();
        modals.open("quote").unwrap();

        modals.close("brochure").unwrap();

        assert_eq!(modals.active_modal().as_deref(), Some("quote"));
        assert!(surface.is_scroll_locked());
    }

    #[test]
    fn test_unknown_modal_rejected() {
        let (modals, surface) = page();

        let err = modals.open("missing").unwrap_err();

        assert_eq!(err, ModalError::UnknownModal("missing".to_string()));
        assert!(modals.close("missing").is_err());
        assert!(!surface.is_scroll_locked());
    }

    #[test]
    fn test_open_calls_surface_in_order() {
        let mut surface = MockModalSurface::new();
        let mut seq = Sequence::new();

        surface.expect_has_modal().return_const(true);
        surface
            .expect_set_modal_active()
            .with(eq("quote"), eq(true))
            .times(1)
            .in_sequence(&mut seq)
            .return_const(());
        surface
            .expect_set_scroll_locked()
            .with(eq(true))
            .times(1)
            .in_sequence(&mut seq)
            .return_const(());
        surface
            .expect_focus_first_element()
            .with(eq("quote"))
            .times(1)
            .in_sequence(&mut seq)
            .return_const(());

        let modals = ModalController::new(Arc::new(surface));
        modals.open("quote").unwrap();
    }
}
