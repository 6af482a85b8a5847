use super::{rand_in, rand_point, wash, SceneCtx};
use crate::constants::{CELL_CAP, CELL_SEED_COUNT, CELL_SPAWN_JITTER};
use crate::core::cue::{AudioCue, Tone};
use crate::core::paint::{Painter, Rgba};
use glam::Vec2;
use rand::rngs::StdRng;
use std::f32::consts::TAU;

#[derive(Clone, Debug)]
pub struct Cell {
    pub pos: Vec2,
    pub radius: f32,
    pub speed: f32,
    pub phase: f32,
}

/// Pulsing cells; clicks split off daughter cells.
pub struct CellLayer {
    pub cells: Vec<Cell>,
}

impl CellLayer {
    pub const NAME: &'static str = "Cells";

    pub fn new(view: Vec2, rng: &mut StdRng) -> Self {
        let cells = (0..CELL_SEED_COUNT)
            .map(|_| Cell {
                pos: rand_point(rng, view),
                radius: rand_in(rng, 36.0, 62.0),
                speed: rand_in(rng, 0.005, 0.02),
                phase: rand_in(rng, 0.0, TAU),
            })
            .collect();
        Self { cells }
    }

    pub fn display(&mut self, a: f32, ctx: &mut SceneCtx<'_>, p: &mut dyn Painter) {
        let input = ctx.input;
        wash(p, input.view, Rgba::rgb(25, 35, 60).alpha(200.0 * a));

        for c in &self.cells {
            let r = c.radius + (input.angle(c.speed) + c.phase).sin() * 8.0;
            p.fill_circle(c.pos, r * 1.6, Rgba::rgb(120, 200, 255).alpha(40.0 * a));
            p.fill_circle(c.pos, r, Rgba::rgb(120, 210, 255).alpha(180.0 * a));
            p.fill_circle(c.pos, r * 0.35, Rgba::gray(255).alpha(220.0 * a));
        }

        for ev in ctx.clicks {
            let jitter = Vec2::new(
                rand_in(ctx.rng, -CELL_SPAWN_JITTER, CELL_SPAWN_JITTER),
                rand_in(ctx.rng, -CELL_SPAWN_JITTER, CELL_SPAWN_JITTER),
            );
            let daughter = Cell {
                pos: Vec2::new(ev.x, ev.y) + jitter,
                radius: rand_in(ctx.rng, 28.0, 44.0),
                speed: rand_in(ctx.rng, 0.008, 0.018),
                phase: rand_in(ctx.rng, 0.0, TAU),
            };
            self.divide(daughter);
            ctx.cues.push(AudioCue::blip(Tone::Pop, 420.0, 0.28));
        }
    }

    /// Append a daughter cell, evicting the oldest daughter once at `CELL_CAP`.
    /// Seed cells are never evicted.
    pub fn divide(&mut self, daughter: Cell) {
        if self.cells.len() >= CELL_CAP && self.cells.len() > CELL_SEED_COUNT {
            self.cells.remove(CELL_SEED_COUNT);
        }
        self.cells.push(daughter);
    }
}
