use crate::metrics::Metrics;
use crate::models::CarouselSettings;
use crate::services::Scheduler;
use crate::ui::controller::CarouselController;
use crate::ui::surface::CarouselSurface;
use std::sync::Arc;

/// Every carousel mounted on one page, in discovery order
///
/// Containers that cannot be mounted are skipped, so indexes here may be
/// lower than the container's position on the page.
#[derive(Debug, Default)]
pub struct CarouselRegistry {
    instances: Vec<CarouselController>,
}

impl CarouselRegistry {
    /// Mount a controller for each surface, sharing one scheduler and metrics
    pub fn mount_all<I>(
        surfaces: I,
        scheduler: Arc<dyn Scheduler>,
        settings: &CarouselSettings,
        metrics: Option<Arc<Metrics>>,
    ) -> Self
    where
        I: IntoIterator<Item = Arc<dyn CarouselSurface>>,
    {
        let mut discovered = 0;
        let instances: Vec<CarouselController> = surfaces
            .into_iter()
            .inspect(|_| discovered += 1)
            .filter_map(|surface| {
                CarouselController::mount(
                    surface,
                    Arc::clone(&scheduler),
                    settings.clone(),
                    metrics.clone(),
                )
            })
            .collect();

        tracing::info!(
            "Mounted {} of {} carousels",
            instances.len(),
            discovered
        );

        Self { instances }
    }

    pub fn len(&self) -> usize {
        self.instances.len()
    }

    pub fn is_empty(&self) -> bool {
        self.instances.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&CarouselController> {
        self.instances.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &CarouselController> {
        self.instances.iter()
    }

    /// Stop autoplay on every carousel, e.g. when the page is hidden
    pub fn stop_all(&self) {
        for carousel in &self.instances {
            carousel.stop_autoplay();
        }
    }
}
