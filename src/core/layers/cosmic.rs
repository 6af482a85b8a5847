use super::{wash, SceneCtx};
use crate::constants::{STAR_COUNT, TWINKLE_PERIOD_FRAMES};
use crate::core::cue::{AudioCue, Tone};
use crate::core::paint::{Painter, Rgba};
use glam::Vec2;

/// Slowly drifting noise starfield with a periodic twinkle tone.
pub struct CosmicLayer;

impl CosmicLayer {
    pub const NAME: &'static str = "Cosmic Infinity";

    pub fn display(&mut self, a: f32, ctx: &mut SceneCtx<'_>, p: &mut dyn Painter) {
        let input = ctx.input;
        let view = input.view;
        let t = input.drift(0.0016);
        wash(p, view, Rgba::gray(0).alpha(255.0 * a));

        let star = Rgba::gray(255).alpha(255.0 * a);
        for i in 0..STAR_COUNT {
            let fi = i as f32;
            let at = Vec2::new(
                ctx.noise.sample2(fi * 0.09, t) * view.x,
                ctx.noise.sample2(fi * 0.12, t + 77.0) * view.y,
            );
            p.point(at, star);
        }

        if a > 0.5 && input.frame % TWINKLE_PERIOD_FRAMES == 0 {
            ctx.cues
                .push(AudioCue::blip_shaped(Tone::Pulse, 110.0, 0.06, 0.05, 0.3));
        }
    }
}
