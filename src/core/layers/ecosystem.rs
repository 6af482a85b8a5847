use super::{wash, SceneCtx};
use crate::constants::{BLOOM_COUNT, BLOOM_PETALS};
use crate::core::cue::{AudioCue, Tone};
use crate::core::paint::{Painter, Rgba};
use glam::Vec2;
use std::f32::consts::TAU;

/// Noise-shaped coral blooms wandering the screen. Holding the pointer grows
/// a living bloom under it.
pub struct EcosystemLayer;

impl EcosystemLayer {
    pub const NAME: &'static str = "Abstract Ecosystem";

    pub fn display(&mut self, a: f32, ctx: &mut SceneCtx<'_>, p: &mut dyn Painter) {
        let input = ctx.input;
        let view = input.view;
        let drift = input.drift(0.004);
        let morph = input.drift(0.014);
        wash(p, view, Rgba::rgb(44, 16, 28).alpha(255.0 * a));

        let coral = Rgba::rgb(205, 120, 185).alpha(210.0 * a);
        let mut outline = Vec::with_capacity(BLOOM_PETALS);
        for i in 0..BLOOM_COUNT {
            let fi = i as f32;
            let center = Vec2::new(
                ctx.noise.sample2(fi * 0.11, drift) * view.x,
                ctx.noise.sample2(fi * 0.17, drift + 99.0) * view.y,
            );
            outline.clear();
            for k in 0..BLOOM_PETALS {
                let ang = k as f32 * TAU / BLOOM_PETALS as f32;
                let rr = 34.0 + ctx.noise.sample3(fi, ang, morph) * 90.0;
                outline.push(center + Vec2::from_angle(ang) * rr);
            }
            p.fill_polygon(&outline, coral);
        }

        if input.pointer_down {
            let r = 56.0 + input.angle(0.12).sin() * 22.0;
            p.fill_circle(input.pointer, r, Rgba::rgb(160, 255, 210).alpha(190.0 * a));
            ctx.cues
                .push(AudioCue::blip_shaped(Tone::Bloom, 240.0, 0.12, 0.02, 0.18));
        }
    }
}
