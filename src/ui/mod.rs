// UI module - carousel control against a host page
//
// This module contains:
// - CarouselSurface: the host page contract, with an in-memory RecordingSurface
// - CarouselController: one carousel's event handling, rendering and autoplay
// - CarouselRegistry: all carousels mounted on a page
// - ModalController: the single open modal and body scroll lock

pub mod controller;
pub mod modal;
pub mod registry;
pub mod surface;

pub use controller::{CarouselController, HostEvent};
pub use modal::{ModalController, ModalError, ModalEvent, ModalSurface, RecordingModalSurface};
pub use registry::CarouselRegistry;
pub use surface::{CarouselSurface, Indicator, RecordingSurface};
