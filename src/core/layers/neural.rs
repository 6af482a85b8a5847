use super::{rand_point, wash, SceneCtx};
use crate::constants::{NEURON_COUNT, NEURON_LINK_DISTANCE};
use crate::core::cue::{AudioCue, Tone};
use crate::core::paint::{Painter, Rgba};
use glam::Vec2;
use rand::rngs::StdRng;

/// Static graph of neurons linked by proximity; clicks fire a glow.
pub struct NeuralLayer {
    pub nodes: Vec<Vec2>,
}

impl NeuralLayer {
    pub const NAME: &'static str = "Neural Webs";

    pub fn new(view: Vec2, rng: &mut StdRng) -> Self {
        Self {
            nodes: (0..NEURON_COUNT).map(|_| rand_point(rng, view)).collect(),
        }
    }

    /// Index pairs `(i, j)`, `i < j`, closer than the link distance.
    pub fn links(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        let n = self.nodes.len();
        (0..n)
            .flat_map(move |i| (i + 1..n).map(move |j| (i, j)))
            .filter(|&(i, j)| self.nodes[i].distance(self.nodes[j]) < NEURON_LINK_DISTANCE)
    }

    pub fn display(&mut self, a: f32, ctx: &mut SceneCtx<'_>, p: &mut dyn Painter) {
        let pulse = ctx.input.angle(0.22).sin();
        wash(p, ctx.input.view, Rgba::rgb(8, 12, 36).alpha(255.0 * a));

        let axon = Rgba::rgb(210, 160, 255).alpha(160.0 * a);
        for (i, j) in self.links() {
            p.line(self.nodes[i], self.nodes[j], 1.2, axon);
        }

        let soma = Rgba::rgb(205, 140, 255).alpha(220.0 * a);
        for n in &self.nodes {
            p.fill_circle(*n, 12.0, soma);
        }

        for ev in ctx.clicks {
            let w = 42.0 + pulse * 16.0;
            p.fill_circle(
                Vec2::new(ev.x, ev.y),
                w,
                Rgba::rgb(255, 190, 255).alpha(220.0 * a),
            );
            ctx.cues.push(AudioCue::blip(Tone::Bloom, 520.0, 0.22));
        }
    }
}
