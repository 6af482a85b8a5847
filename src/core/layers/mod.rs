//! The six scenes and the context they draw with.
//!
//! Each scene owns its entities and exposes `name()` plus
//! `display(alpha, ctx, painter)`. `alpha` is the scene's cross-fade opacity in
//! `[0, 1]` and scales every color it draws and every sound it asks for.

mod bacteria;
mod cells;
mod cosmic;
mod ecosystem;
mod neural;
mod swarms;

pub use bacteria::{Bacterium, BacteriaLayer};
pub use cells::{Cell, CellLayer};
pub use cosmic::CosmicLayer;
pub use ecosystem::EcosystemLayer;
pub use neural::NeuralLayer;
pub use swarms::{ring_diameter, Orbiter, SwarmLayer};

use crate::constants::{LABEL_TEXT_SIZE, LABEL_TOP};
use crate::core::clicks::ClickEvent;
use crate::core::cue::AudioCue;
use crate::core::noise::Noise;
use crate::core::paint::{Painter, Rgba, TextAlign, TextBaseline, TextStyle};
use glam::Vec2;
use rand::rngs::StdRng;
use rand::Rng;

/// Per-frame inputs shared by every scene.
#[derive(Clone, Copy, Debug)]
pub struct FrameInput {
    pub frame: u64,
    pub view: Vec2,
    pub pointer: Vec2,
    pub pointer_down: bool,
}

/// Noise-time coordinates wrap here to keep f32 resolution.
const DRIFT_PERIOD: f64 = 4096.0;

impl FrameInput {
    /// Phase `frame * rate` in radians, reduced to `[0, TAU)` before it
    /// narrows to f32 so oscillations never stall on a long-running page.
    #[inline]
    pub fn angle(&self, rate: f32) -> f32 {
        (self.frame as f64 * rate as f64).rem_euclid(std::f64::consts::TAU) as f32
    }

    /// Noise-time coordinate `frame * rate`, wrapped at `DRIFT_PERIOD`.
    #[inline]
    pub fn drift(&self, rate: f32) -> f32 {
        (self.frame as f64 * rate as f64).rem_euclid(DRIFT_PERIOD) as f32
    }
}

pub struct SceneCtx<'a> {
    pub input: &'a FrameInput,
    /// Live clicks attributed to the scene being drawn.
    pub clicks: &'a [ClickEvent],
    pub noise: &'a Noise,
    pub rng: &'a mut StdRng,
    pub cues: &'a mut Vec<AudioCue>,
}

pub enum Layer {
    Cells(CellLayer),
    Bacteria(BacteriaLayer),
    Swarms(SwarmLayer),
    Neural(NeuralLayer),
    Ecosystem(EcosystemLayer),
    Cosmic(CosmicLayer),
}

impl Layer {
    /// The explorer's scenes, in zoom order.
    pub fn all(view: Vec2, rng: &mut StdRng) -> Vec<Layer> {
        vec![
            Layer::Cells(CellLayer::new(view, rng)),
            Layer::Bacteria(BacteriaLayer::new(view, rng)),
            Layer::Swarms(SwarmLayer::new(rng)),
            Layer::Neural(NeuralLayer::new(view, rng)),
            Layer::Ecosystem(EcosystemLayer),
            Layer::Cosmic(CosmicLayer),
        ]
    }

    pub fn name(&self) -> &'static str {
        match self {
            Layer::Cells(_) => CellLayer::NAME,
            Layer::Bacteria(_) => BacteriaLayer::NAME,
            Layer::Swarms(_) => SwarmLayer::NAME,
            Layer::Neural(_) => NeuralLayer::NAME,
            Layer::Ecosystem(_) => EcosystemLayer::NAME,
            Layer::Cosmic(_) => CosmicLayer::NAME,
        }
    }

    pub fn display(&mut self, alpha: f32, ctx: &mut SceneCtx<'_>, p: &mut dyn Painter) {
        let alpha = alpha.clamp(0.0, 1.0);
        match self {
            Layer::Cells(l) => l.display(alpha, ctx, p),
            Layer::Bacteria(l) => l.display(alpha, ctx, p),
            Layer::Swarms(l) => l.display(alpha, ctx, p),
            Layer::Neural(l) => l.display(alpha, ctx, p),
            Layer::Ecosystem(l) => l.display(alpha, ctx, p),
            Layer::Cosmic(l) => l.display(alpha, ctx, p),
        }
        label(p, self.name(), ctx.input.view, alpha);
    }
}

/// Full-bleed background wash.
pub(crate) fn wash(p: &mut dyn Painter, view: Vec2, color: Rgba) {
    p.fill_rect(Vec2::ZERO, view, color);
}

fn label(p: &mut dyn Painter, name: &str, view: Vec2, alpha: f32) {
    p.text(
        name,
        Vec2::new(view.x / 2.0, LABEL_TOP),
        TextStyle {
            size: LABEL_TEXT_SIZE,
            align: TextAlign::Center,
            baseline: TextBaseline::Top,
            color: Rgba::gray(255).alpha(240.0 * alpha),
        },
    );
}

/// Uniform sample in `[lo, hi)`; degenerate ranges collapse to `lo`.
pub(crate) fn rand_in(rng: &mut StdRng, lo: f32, hi: f32) -> f32 {
    if hi > lo {
        rng.gen_range(lo..hi)
    } else {
        lo
    }
}

pub(crate) fn rand_point(rng: &mut StdRng, view: Vec2) -> Vec2 {
    Vec2::new(rand_in(rng, 0.0, view.x), rand_in(rng, 0.0, view.y))
}

/// Linear remap of `v` from `[a0, a1]` onto `[b0, b1]`.
pub(crate) fn remap(v: f32, a0: f32, a1: f32, b0: f32, b1: f32) -> f32 {
    if (a1 - a0).abs() < f32::EPSILON {
        return b0;
    }
    b0 + (v - a0) / (a1 - a0) * (b1 - b0)
}
