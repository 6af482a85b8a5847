// Host-side tests for the click bus and click attribution.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}
#[path = "../src/core/mod.rs"]
mod core;

use crate::constants::CLICK_LIFETIME_FRAMES;
use crate::core::*;

#[test]
fn event_is_live_for_exactly_the_lifetime_window() {
    let mut bus = ClickBus::new();
    bus.record(10.0, 20.0, 100, 2);
    for frame in 100..=219 {
        assert_eq!(bus.live_for(2, frame).len(), 1, "missing at frame {frame}");
    }
    assert!(bus.live_for(2, 220).is_empty());
    assert!(bus.live_for(2, 500).is_empty());
}

#[test]
fn prune_drops_only_expired_events() {
    let mut bus = ClickBus::new();
    bus.record(0.0, 0.0, 10, 0);
    bus.record(0.0, 0.0, 50, 1);
    bus.prune(10 + CLICK_LIFETIME_FRAMES - 1);
    assert_eq!(bus.len(), 2);
    bus.prune(10 + CLICK_LIFETIME_FRAMES);
    assert_eq!(bus.len(), 1);
    assert_eq!(bus.live_for(1, 130)[0].frame, 50);
    bus.prune(50 + CLICK_LIFETIME_FRAMES);
    assert!(bus.is_empty());
}

#[test]
fn live_for_filters_by_layer_and_keeps_order() {
    let mut bus = ClickBus::new();
    bus.record(1.0, 1.0, 5, 3);
    bus.record(2.0, 2.0, 6, 1);
    bus.record(3.0, 3.0, 7, 3);
    let hits = bus.live_for(3, 8);
    assert_eq!(hits.len(), 2);
    assert_eq!(hits[0].x, 1.0);
    assert_eq!(hits[1].x, 3.0);
    assert!(bus.live_for(0, 8).is_empty());
}

#[test]
fn recorded_event_keeps_its_attribution() {
    let mut zoom = ZoomController::new(6);
    let mut bus = ClickBus::new();
    zoom.set_level(1.9);
    let ev = bus.record(5.0, 5.0, 100, zoom.attributed_index());
    assert_eq!(ev.layer, 2);

    // Moving the zoom afterwards does not re-attribute the click
    zoom.set_level(4.2);
    assert_eq!(bus.live_for(2, 150).len(), 1);
    assert!(bus.live_for(4, 150).is_empty());
}

#[test]
fn event_age_saturates_before_its_frame() {
    let ev = ClickEvent {
        x: 0.0,
        y: 0.0,
        frame: 30,
        layer: 0,
    };
    assert_eq!(ev.age(10), 0);
    assert!(ev.is_live(10));
    assert_eq!(ev.age(149), 119);
    assert!(!ev.is_live(150));
}
