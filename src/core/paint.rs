//! Immediate-mode drawing seam between scenes and the canvas.
//!
//! Coordinates are CSS pixels with the origin at the top-left. Alpha follows
//! the 0..=255 convention so scene code can scale it by a layer's opacity.

use glam::Vec2;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    /// 0..=255
    pub a: f32,
}

impl Rgba {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255.0 }
    }

    pub const fn gray(v: u8) -> Self {
        Self::rgb(v, v, v)
    }

    /// Same color with alpha replaced (clamped to 0..=255).
    pub fn alpha(self, a: f32) -> Self {
        Self {
            a: a.clamp(0.0, 255.0),
            ..self
        }
    }

    pub fn is_transparent(&self) -> bool {
        self.a <= 0.0
    }

    pub fn css(&self) -> String {
        format!("rgba({},{},{},{:.3})", self.r, self.g, self.b, self.a / 255.0)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TextAlign {
    Left,
    Center,
    Right,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TextBaseline {
    Top,
    Middle,
    Bottom,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TextStyle {
    pub size: f32,
    pub align: TextAlign,
    pub baseline: TextBaseline,
    pub color: Rgba,
}

pub trait Painter {
    /// Opaque fill of the whole surface.
    fn clear(&mut self, color: Rgba);

    fn fill_rect(&mut self, pos: Vec2, size: Vec2, color: Rgba);

    fn fill_round_rect(&mut self, pos: Vec2, size: Vec2, radius: f32, color: Rgba);

    /// Axis lengths are full diameters; `rotation` is in radians.
    fn fill_ellipse(&mut self, center: Vec2, size: Vec2, rotation: f32, color: Rgba);

    fn stroke_ellipse(&mut self, center: Vec2, size: Vec2, weight: f32, color: Rgba);

    fn line(&mut self, from: Vec2, to: Vec2, weight: f32, color: Rgba);

    /// Closed filled polygon.
    fn fill_polygon(&mut self, points: &[Vec2], color: Rgba);

    fn text(&mut self, text: &str, pos: Vec2, style: TextStyle);

    fn fill_circle(&mut self, center: Vec2, diameter: f32, color: Rgba) {
        self.fill_ellipse(center, Vec2::splat(diameter), 0.0, color);
    }

    fn point(&mut self, at: Vec2, color: Rgba) {
        self.fill_rect(at - Vec2::splat(0.5), Vec2::ONE, color);
    }
}

/// Last fill and stroke styles sent to a stateful 2D context, so repeated
/// colors skip the style setter.
///
/// Resizing a canvas resets every context property, so the cache is tied to
/// the backing-store size it was filled at and forgets itself when that
/// changes.
#[derive(Debug, Default)]
pub struct StyleCache {
    surface: (u32, u32),
    fill: Option<String>,
    stroke: Option<String>,
}

impl StyleCache {
    /// Call once per frame with the current backing-store size.
    pub fn begin(&mut self, surface: (u32, u32)) {
        if surface != self.surface {
            self.surface = surface;
            self.invalidate();
        }
    }

    pub fn invalidate(&mut self) {
        self.fill = None;
        self.stroke = None;
    }

    /// Returns the css to apply, or `None` if it is already current.
    pub fn fill(&mut self, color: Rgba) -> Option<String> {
        swap_style(&mut self.fill, color)
    }

    pub fn stroke(&mut self, color: Rgba) -> Option<String> {
        swap_style(&mut self.stroke, color)
    }
}

fn swap_style(slot: &mut Option<String>, color: Rgba) -> Option<String> {
    let css = color.css();
    if slot.as_deref() == Some(css.as_str()) {
        return None;
    }
    *slot = Some(css.clone());
    Some(css)
}
