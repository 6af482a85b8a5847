// Host-side tests for pure keyboard functions.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod keys {
    include!("../src/core/keys.rs");
}

use keys::*;

const LAYERS: usize = 6;
const VOLUME_STEP: f32 = 0.05;

#[test]
fn digits_jump_to_layers() {
    assert_eq!(layer_for_digit("1", LAYERS), Some(0));
    assert_eq!(layer_for_digit("3", LAYERS), Some(2));
    assert_eq!(layer_for_digit("6", LAYERS), Some(5));
    assert_eq!(
        key_action("4", LAYERS, VOLUME_STEP),
        Some(KeyAction::JumpTo(3))
    );
}

#[test]
fn digits_outside_the_layer_range_are_ignored() {
    for key in ["0", "7", "9", "12"] {
        assert_eq!(layer_for_digit(key, LAYERS), None, "key {key}");
        assert_eq!(key_action(key, LAYERS, VOLUME_STEP), None, "key {key}");
    }
}

#[test]
fn arrows_step_zoom_and_volume() {
    assert_eq!(
        key_action("ArrowRight", LAYERS, VOLUME_STEP),
        Some(KeyAction::Step(1.0))
    );
    assert_eq!(
        key_action("ArrowLeft", LAYERS, VOLUME_STEP),
        Some(KeyAction::Step(-1.0))
    );
    assert_eq!(
        key_action("ArrowUp", LAYERS, VOLUME_STEP),
        Some(KeyAction::Volume(0.05))
    );
    assert_eq!(
        key_action("ArrowDown", LAYERS, VOLUME_STEP),
        Some(KeyAction::Volume(-0.05))
    );
}

#[test]
fn other_keys_do_nothing() {
    for key in ["a", "Enter", " ", "Escape", "", "ArrowUpp"] {
        assert_eq!(key_action(key, LAYERS, VOLUME_STEP), None, "key {key:?}");
    }
}

#[test]
fn fewer_layers_shrink_the_digit_range() {
    assert_eq!(layer_for_digit("3", 2), None);
    assert_eq!(layer_for_digit("2", 2), Some(1));
}
