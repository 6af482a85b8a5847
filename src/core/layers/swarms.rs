use super::{rand_in, wash, SceneCtx};
use crate::constants::SWARM_PARTICLE_COUNT;
use crate::core::cue::{AudioCue, Tone};
use crate::core::paint::{Painter, Rgba};
use glam::Vec2;
use rand::rngs::StdRng;
use std::f32::consts::TAU;

#[derive(Clone, Debug)]
pub struct Orbiter {
    pub angle: f32,
    pub radius: f32,
    pub speed: f32,
}

/// Particles on concentric orbits; clicks set off expanding rings.
pub struct SwarmLayer {
    pub orbiters: Vec<Orbiter>,
}

impl SwarmLayer {
    pub const NAME: &'static str = "Molecular Swarms";

    pub fn new(rng: &mut StdRng) -> Self {
        let orbiters = (0..SWARM_PARTICLE_COUNT)
            .map(|_| Orbiter {
                angle: rand_in(rng, 0.0, TAU),
                radius: rand_in(rng, 24.0, 240.0),
                speed: rand_in(rng, 0.004, 0.012),
            })
            .collect();
        Self { orbiters }
    }

    pub fn display(&mut self, a: f32, ctx: &mut SceneCtx<'_>, p: &mut dyn Painter) {
        let input = ctx.input;
        wash(p, input.view, Rgba::rgb(0, 0, 45).alpha(255.0 * a));

        let center = input.view / 2.0;
        let dot = Rgba::rgb(255, 220, 120).alpha(180.0 * a);
        for o in &self.orbiters {
            let at = center + Vec2::from_angle(o.angle + input.angle(o.speed)) * o.radius;
            p.fill_circle(at, 5.0, dot);
        }

        for ev in ctx.clicks {
            p.stroke_ellipse(
                Vec2::new(ev.x, ev.y),
                Vec2::splat(ring_diameter(input.frame, ev.frame)),
                2.0,
                Rgba::rgb(255, 255, 140).alpha(220.0 * a),
            );
            ctx.cues.push(AudioCue::blip(Tone::Pulse, 220.0, 0.22));
        }
    }
}

/// Ring grows one pixel per frame and restarts every 60 frames.
pub fn ring_diameter(frame: u64, stamped: u64) -> f32 {
    20.0 + (frame.saturating_sub(stamped) % 60) as f32
}
