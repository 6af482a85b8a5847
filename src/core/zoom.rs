//! Continuous zoom position and the cross-fade pair derived from it.

use crate::constants::{KEY_ZOOM_STEP, WHEEL_ZOOM_SENSITIVITY};

/// Two adjacent layers and the blend between them for one frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BlendPair {
    pub index: usize,
    pub next_index: usize,
    /// Opacity of `next_index`, in `[0, 1)`. `index` is drawn at `1 - blend`.
    pub blend: f32,
}

impl BlendPair {
    #[inline]
    pub fn current_alpha(&self) -> f32 {
        1.0 - self.blend
    }

    #[inline]
    pub fn next_alpha(&self) -> f32 {
        self.blend
    }
}

/// Wrap any real `z` into `[0, layer_count)` using true modulo.
#[inline]
pub fn wrap_zoom(z: f32, layer_count: usize) -> f32 {
    let l = layer_count.max(1) as f32;
    let wrapped = z.rem_euclid(l);
    // -tiny + l rounds to exactly l in f32
    if wrapped >= l {
        0.0
    } else {
        wrapped
    }
}

/// Owns the unbounded zoom accumulator for `layer_count` layers.
#[derive(Clone, Debug)]
pub struct ZoomController {
    level: f32,
    layer_count: usize,
}

impl ZoomController {
    pub fn new(layer_count: usize) -> Self {
        Self {
            level: 0.0,
            layer_count: layer_count.max(1),
        }
    }

    #[inline]
    pub fn level(&self) -> f32 {
        self.level
    }

    #[inline]
    pub fn layer_count(&self) -> usize {
        self.layer_count
    }

    /// Overwrite the raw level; it is re-wrapped on the next `normalize`.
    pub fn set_level(&mut self, level: f32) {
        self.level = level;
    }

    pub fn apply_wheel(&mut self, delta_y: f32) {
        self.level += delta_y * WHEEL_ZOOM_SENSITIVITY;
    }

    /// Absolute positioning from a slider fraction (clamped to `[0, 1]`).
    pub fn jump_to_fraction(&mut self, fraction: f32) {
        self.set_level(fraction.clamp(0.0, 1.0) * self.layer_count as f32);
    }

    pub fn jump_to_layer(&mut self, layer: usize) {
        self.set_level((layer % self.layer_count) as f32);
    }

    /// Keyboard nudge in units of `KEY_ZOOM_STEP`.
    pub fn step(&mut self, steps: f32) {
        self.level += steps * KEY_ZOOM_STEP;
    }

    pub fn normalize(&mut self) -> f32 {
        self.level = wrap_zoom(self.level, self.layer_count);
        self.level
    }

    /// The layer pair to draw. Normalizes first.
    pub fn blend_pair(&mut self) -> BlendPair {
        let z = self.normalize();
        let index = (z.floor() as usize).min(self.layer_count - 1);
        let blend = z - index as f32;
        BlendPair {
            index,
            next_index: (index + 1) % self.layer_count,
            blend,
        }
    }

    /// Nearest whole layer (rounding), used to tag clicks.
    pub fn attributed_index(&self) -> usize {
        let z = wrap_zoom(self.level, self.layer_count);
        (z + 0.5).floor() as usize % self.layer_count
    }
}
