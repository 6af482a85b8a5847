use super::{rand_in, rand_point, remap, wash, SceneCtx};
use crate::constants::{BACTERIA_COUNT, HUM_LEVEL, HUM_RAMP_SEC};
use crate::core::cue::{AudioCue, Tone};
use crate::core::paint::{Painter, Rgba};
use glam::Vec2;
use rand::rngs::StdRng;
use std::f32::consts::TAU;

const FIELD_SCALE: f32 = 0.003;
const FIELD_TIME: f32 = 0.005;
const STEER_RATE: f32 = 0.06;
const POINTER_BIAS: f32 = 0.04;
const SWIM_SPEED: f32 = 2.0;

#[derive(Clone, Debug)]
pub struct Bacterium {
    pub pos: Vec2,
    pub heading: f32,
    pub len: f32,
    pub wobble: f32,
}

/// Rod-shaped swimmers steered by a drifting noise field and the pointer.
pub struct BacteriaLayer {
    pub swimmers: Vec<Bacterium>,
}

impl BacteriaLayer {
    pub const NAME: &'static str = "Bacteria";

    pub fn new(view: Vec2, rng: &mut StdRng) -> Self {
        let swimmers = (0..BACTERIA_COUNT)
            .map(|_| Bacterium {
                pos: rand_point(rng, view),
                heading: rand_in(rng, 0.0, TAU),
                len: rand_in(rng, 28.0, 42.0),
                wobble: rand_in(rng, 0.03, 0.06),
            })
            .collect();
        Self { swimmers }
    }

    pub fn display(&mut self, a: f32, ctx: &mut SceneCtx<'_>, p: &mut dyn Painter) {
        let input = ctx.input;
        let view = input.view;
        wash(p, view, Rgba::rgb(12, 50, 28).alpha(220.0 * a));

        let bias = remap(input.pointer.x, 0.0, view.x, -POINTER_BIAS, POINTER_BIAS)
            + remap(input.pointer.y, 0.0, view.y, -POINTER_BIAS, POINTER_BIAS);

        for b in &mut self.swimmers {
            let target = ctx
                .noise
                .sample3(b.pos.x * FIELD_SCALE, b.pos.y * FIELD_SCALE, input.drift(FIELD_TIME))
                * TAU;
            b.heading += (target - b.heading) * STEER_RATE + bias;
            let dir = Vec2::from_angle(b.heading);
            b.pos = wrap(b.pos + dir * SWIM_SPEED, view);

            p.fill_ellipse(
                b.pos,
                Vec2::new(b.len, 14.0),
                b.heading,
                Rgba::rgb(0, 210, 120).alpha(210.0 * a),
            );
            let tail = b.pos + dir * (-b.len * 0.35);
            p.fill_ellipse(
                tail,
                Vec2::new(b.len * 0.4 + input.angle(b.wobble).sin() * 6.0, 8.0),
                b.heading,
                Rgba::rgb(0, 180, 90).alpha(160.0 * a),
            );
        }

        ctx.cues.push(AudioCue::Level {
            tone: Tone::Hum,
            amp: a * HUM_LEVEL,
            ramp_sec: HUM_RAMP_SEC,
        });
    }
}

fn wrap(p: Vec2, view: Vec2) -> Vec2 {
    Vec2::new(wrap_axis(p.x, view.x), wrap_axis(p.y, view.y))
}

fn wrap_axis(v: f32, len: f32) -> f32 {
    let len = len.max(1.0);
    let w = v.rem_euclid(len);
    if w >= len {
        0.0
    } else {
        w
    }
}
