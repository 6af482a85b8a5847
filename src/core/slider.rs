//! Bottom-anchored zoom slider: layout, hit testing, drag mapping and drawing.

use crate::constants::*;
use crate::core::paint::{Painter, Rgba, TextAlign, TextBaseline, TextStyle};
use glam::Vec2;

const TRACK_COLOR: Rgba = Rgba::gray(90);
const KNOB_COLOR: Rgba = Rgba::rgb(210, 160, 255);
const TICK_COLOR: Rgba = Rgba::gray(150);
const TICK_LABEL_COLOR: Rgba = Rgba::gray(180);

#[derive(Clone, Debug)]
pub struct Slider {
    /// Top-left corner of the track.
    pub origin: Vec2,
    pub width: f32,
    pub height: f32,
    dragging: bool,
}

impl Slider {
    pub fn new(view_w: f32, view_h: f32) -> Self {
        let mut s = Self {
            origin: Vec2::ZERO,
            width: SLIDER_WIDTH,
            height: SLIDER_HEIGHT,
            dragging: false,
        };
        s.layout(view_w, view_h);
        s
    }

    /// Re-center horizontally and re-anchor to the bottom edge.
    pub fn layout(&mut self, view_w: f32, view_h: f32) {
        self.origin = Vec2::new(view_w / 2.0 - self.width / 2.0, view_h - SLIDER_BOTTOM_OFFSET);
    }

    pub fn hit(&self, p: Vec2) -> bool {
        p.x > self.origin.x
            && p.x < self.origin.x + self.width
            && p.y > self.origin.y - SLIDER_HIT_ABOVE
            && p.y < self.origin.y + SLIDER_HIT_BELOW
    }

    /// Begin a drag if the press lands on the slider. Returns whether it did.
    pub fn press(&mut self, p: Vec2) -> bool {
        if self.hit(p) {
            self.dragging = true;
        }
        self.dragging
    }

    pub fn release(&mut self) {
        self.dragging = false;
    }

    #[inline]
    pub fn is_dragging(&self) -> bool {
        self.dragging
    }

    /// Horizontal pointer position as a fraction of the track, clamped to `[0, 1]`.
    pub fn fraction_at(&self, x: f32) -> f32 {
        ((x - self.origin.x) / self.width).clamp(0.0, 1.0)
    }

    pub fn knob_x(&self, zoom: f32, layer_count: usize) -> f32 {
        let l = layer_count.max(1) as f32;
        self.origin.x + (zoom.rem_euclid(l) / l) * self.width
    }

    pub fn tick_x(&self, i: usize, layer_count: usize) -> f32 {
        self.origin.x + (i as f32 / layer_count.max(1) as f32) * self.width
    }

    pub fn draw(&self, p: &mut dyn Painter, zoom: f32, layer_count: usize, view_w: f32) {
        p.fill_round_rect(
            self.origin,
            Vec2::new(self.width, self.height),
            SLIDER_CORNER_RADIUS,
            TRACK_COLOR,
        );

        let knob = Vec2::new(self.knob_x(zoom, layer_count), self.origin.y + self.height / 2.0);
        p.fill_circle(knob, SLIDER_KNOB_DIAMETER, KNOB_COLOR);

        p.text(
            &zoom_label(zoom, layer_count),
            Vec2::new(view_w / 2.0, self.origin.y - 8.0),
            TextStyle {
                size: SLIDER_TEXT_SIZE,
                align: TextAlign::Center,
                baseline: TextBaseline::Bottom,
                color: Rgba::gray(255),
            },
        );
    }

    pub fn draw_ticks<'a>(
        &self,
        p: &mut dyn Painter,
        names: impl ExactSizeIterator<Item = &'a str>,
    ) {
        let n = names.len();
        for (i, name) in names.enumerate() {
            let x = self.tick_x(i, n);
            p.line(
                Vec2::new(x, self.origin.y - SLIDER_TICK_OVERHANG),
                Vec2::new(x, self.origin.y + self.height + SLIDER_TICK_OVERHANG),
                1.0,
                TICK_COLOR,
            );
            p.text(
                name,
                Vec2::new(x, self.origin.y + self.height + 10.0),
                TextStyle {
                    size: TICK_TEXT_SIZE,
                    align: TextAlign::Center,
                    baseline: TextBaseline::Top,
                    color: TICK_LABEL_COLOR,
                },
            );
        }
    }
}

pub fn zoom_label(zoom: f32, layer_count: usize) -> String {
    format!("Zoom (loops): {:.2}", zoom.rem_euclid(layer_count.max(1) as f32))
}
