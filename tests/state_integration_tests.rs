//! Integration tests for carousel change events
//!
//! These tests verify that the store and controller:
//! - Emit slide and autoplay events on mutations
//! - Deliver events to every subscriber
//! - Stay silent when nothing observable changed

use slidekit::services::ManualScheduler;
use slidekit::ui::RecordingSurface;
use slidekit::{CarouselController, CarouselEvent, CarouselSettings, CarouselStore, HostEvent};
use std::sync::Arc;
use tokio::time::{Duration, timeout};

#[tokio::test]
async fn test_slide_change_event_emitted() {
    let store = CarouselStore::new(3).unwrap();
    let mut rx = store.subscribe();

    store.advance();

    let event = timeout(Duration::from_millis(100), rx.recv())
        .await
        .expect("Timeout waiting for event")
        .expect("Channel closed");

    assert_eq!(event, CarouselEvent::SlideChanged { from: 0, to: 1 });
}

#[tokio::test]
async fn test_multiple_subscribers_receive_events() {
    let store = CarouselStore::new(2).unwrap();
    let mut rx1 = store.subscribe();
    let mut rx2 = store.subscribe();

    store.set_autoplay_active(true);

    for rx in [&mut rx1, &mut rx2] {
        let event = timeout(Duration::from_millis(100), rx.recv())
            .await
            .expect("Timeout")
            .expect("Channel closed");
        assert_eq!(event, CarouselEvent::AutoplayStarted);
    }
}

#[test]
fn test_controller_event_sequence_for_button_click() {
    let scheduler = ManualScheduler::new();
    let carousel = CarouselController::mount(
        Arc::new(RecordingSurface::new(4)),
        Arc::new(scheduler.clone()),
        CarouselSettings::default(),
        None,
    )
    .unwrap();
    let mut rx = carousel.subscribe();

    carousel.handle_event(HostEvent::NextClicked).unwrap();

    assert_eq!(
        rx.try_recv().unwrap(),
        CarouselEvent::SlideChanged { from: 0, to: 1 }
    );
    assert_eq!(rx.try_recv().unwrap(), CarouselEvent::AutoplayStopped);
    assert!(rx.try_recv().is_err());
}

#[test]
fn test_autoplay_tick_emits_slide_change() {
    let scheduler = ManualScheduler::new();
    let carousel = CarouselController::mount(
        Arc::new(RecordingSurface::new(2)),
        Arc::new(scheduler.clone()),
        CarouselSettings::default(),
        None,
    )
    .unwrap();
    let mut rx = carousel.subscribe();

    scheduler.advance(Duration::from_millis(10_000));

    assert_eq!(
        rx.try_recv().unwrap(),
        CarouselEvent::SlideChanged { from: 0, to: 1 }
    );
    assert_eq!(
        rx.try_recv().unwrap(),
        CarouselEvent::SlideChanged { from: 1, to: 0 }
    );
}

#[test]
fn test_repeated_stop_emits_once() {
    let scheduler = ManualScheduler::new();
    let carousel = CarouselController::mount(
        Arc::new(RecordingSurface::new(3)),
        Arc::new(scheduler.clone()),
        CarouselSettings::default(),
        None,
    )
    .unwrap();
    let mut rx = carousel.subscribe();

    carousel.stop_autoplay();
    carousel.stop_autoplay();

    assert_eq!(rx.try_recv().unwrap(), CarouselEvent::AutoplayStopped);
    assert!(rx.try_recv().is_err());
}

#[test]
fn test_subscriber_without_runtime() {
    let store = CarouselStore::new(5).unwrap();
    let mut rx = store.subscribe();

    store.go_to(4).unwrap();

    let event = tokio_test::block_on(rx.recv()).unwrap();
    assert_eq!(event, CarouselEvent::SlideChanged { from: 0, to: 4 });
}
