//! slidekit - headless carousel demo
//!
//! Runs the carousel controller against an in-memory page so its behaviour can
//! be watched in the logs without a browser.
//!
//! # Execution Flow
//!
//! 1. Load `Slidekit Config.yaml` from the directory given as the first
//!    argument (default `Slidekit Data`), with `SLIDEKIT__*` overrides
//! 2. Initialize logging → `<directory>/slidekit.<date>`
//! 3. Create a current-thread tokio runtime for autoplay timers
//! 4. Mount two recording carousels, one of them with reduced motion
//! 5. Let autoplay run for three periods, then replay a hover and a swipe
//! 6. Open and dismiss an enquiry modal, then filter a product grid
//! 7. Log final positions and metrics

use anyhow::Result;
use slidekit::services::{ProductFilter, TokioScheduler};
use slidekit::ui::{CarouselSurface, RecordingModalSurface, RecordingSurface};
use slidekit::{
    APP_NAME, CarouselRegistry, ConfigManager, HostEvent, Metrics, ModalController, ModalEvent,
    VERSION,
};
use std::sync::Arc;

fn main() -> Result<()> {
    let config_dir = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "Slidekit Data".to_string());

    let config_manager = ConfigManager::new(&config_dir)?;
    let settings = config_manager.load_settings()?;

    let _log_guard = slidekit::logging::setup_logging(&settings.logging, "slidekit")?;
    tracing::info!("Starting {} v{}", APP_NAME, VERSION);

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;

    let metrics = Arc::new(Metrics::new());

    runtime.block_on(async {
        let scheduler = Arc::new(TokioScheduler::current());

        let hero = Arc::new(RecordingSurface::new(4));
        let calm = Arc::new(RecordingSurface::new(3).with_reduced_motion(true));
        let surfaces: Vec<Arc<dyn CarouselSurface>> = vec![
            hero.clone(),
            calm.clone(),
            Arc::new(RecordingSurface::new(0)),
        ];

        let registry = CarouselRegistry::mount_all(
            surfaces,
            scheduler,
            &settings.carousel,
            Some(metrics.clone()),
        );

        let period = settings.carousel.autoplay_interval();
        tokio::time::sleep(period * 3 + period / 2).await;

        if let Some(carousel) = registry.get(0) {
            tracing::info!("Autoplay left hero carousel on slide {}", carousel.current_index());

            carousel.handle_event(HostEvent::PointerEnter)?;
            carousel.handle_event(HostEvent::PointerLeave)?;
            carousel.handle_event(HostEvent::TouchStart { x: 200.0 })?;
            carousel.handle_event(HostEvent::TouchEnd { x: 140.0 })?;

            tracing::info!(
                "After swipe: slide {}, autoplay {}, track {:?}, active dots {:?}",
                carousel.current_index(),
                carousel.is_autoplay_active(),
                hero.track_transform(),
                hero.active_indicators()
            );
        }

        if let Some(carousel) = registry.get(1) {
            tracing::info!(
                "Reduced-motion carousel stayed on slide {} (autoplay {})",
                carousel.current_index(),
                carousel.is_autoplay_active()
            );
        }

        registry.stop_all();
        anyhow::Ok(())
    })?;

    let modal_page = Arc::new(RecordingModalSurface::new(["enquiry"]));
    let modals = ModalController::new(modal_page.clone());
    modals.handle_event(ModalEvent::TriggerClicked("enquiry".to_string()))?;
    tracing::info!(
        "Modal open: {:?}, scroll locked {}",
        modals.active_modal(),
        modal_page.is_scroll_locked()
    );
    modals.handle_event(ModalEvent::KeyDown("Escape".to_string()))?;
    tracing::info!("After Escape: modal {:?}", modals.active_modal());

    if let Some(mut filter) = ProductFilter::new(
        ["all", "pumps", "valves"],
        ["pumps", "valves", "pumps", "fittings"],
    ) {
        let category = filter.select(1)?.to_string();
        tracing::info!(
            "Filter '{}' shows cards {:?}",
            category,
            filter.visible_cards()
        );
    }

    metrics.log_summary();
    tracing::info!("Demo complete");
    Ok(())
}
