// slidekit - headless carousel and form widgets for static marketing sites
//
// This is the library crate containing the widget state machines and their
// host-page contracts. The binary crate (main.rs) runs a recorded demo.

pub mod config;
pub mod logging;
pub mod metrics;
pub mod models;
pub mod services;
pub mod state;
pub mod ui;

// Re-export commonly used types for convenience
pub use config::ConfigManager;
pub use metrics::Metrics;
pub use models::{CarouselError, CarouselSettings, CarouselState, SiteSettings};
pub use state::{CarouselEvent, CarouselStore};
pub use ui::{
    CarouselController, CarouselRegistry, CarouselSurface, HostEvent, ModalController, ModalEvent,
};

/// Application version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Application name
pub const APP_NAME: &str = env!("CARGO_PKG_NAME");
