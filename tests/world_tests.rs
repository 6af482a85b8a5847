// Host-side tests for the frame loop, click reactions and scene behavior.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}
#[path = "../src/core/mod.rs"]
mod core;

use crate::constants::{CELL_CAP, CELL_SEED_COUNT};
use crate::core::*;
use glam::Vec2;

#[derive(Clone, Debug, PartialEq)]
enum Op {
    Clear,
    Rect,
    RoundRect,
    Ellipse,
    StrokeEllipse,
    Line,
    Polygon(usize),
    Text(String, Rgba),
}

#[derive(Default)]
struct Recorder {
    ops: Vec<Op>,
}

impl Recorder {
    fn texts(&self) -> Vec<(String, Rgba)> {
        self.ops
            .iter()
            .filter_map(|op| match op {
                Op::Text(s, c) => Some((s.clone(), *c)),
                _ => None,
            })
            .collect()
    }

    fn count(&self, want: &Op) -> usize {
        self.ops.iter().filter(|op| *op == want).count()
    }
}

impl Painter for Recorder {
    fn clear(&mut self, _color: Rgba) {
        self.ops.push(Op::Clear);
    }
    fn fill_rect(&mut self, _pos: Vec2, _size: Vec2, _color: Rgba) {
        self.ops.push(Op::Rect);
    }
    fn fill_round_rect(&mut self, _pos: Vec2, _size: Vec2, _radius: f32, _color: Rgba) {
        self.ops.push(Op::RoundRect);
    }
    fn fill_ellipse(&mut self, _center: Vec2, _size: Vec2, _rotation: f32, _color: Rgba) {
        self.ops.push(Op::Ellipse);
    }
    fn stroke_ellipse(&mut self, _center: Vec2, _size: Vec2, _weight: f32, _color: Rgba) {
        self.ops.push(Op::StrokeEllipse);
    }
    fn line(&mut self, _from: Vec2, _to: Vec2, _weight: f32, _color: Rgba) {
        self.ops.push(Op::Line);
    }
    fn fill_polygon(&mut self, points: &[Vec2], _color: Rgba) {
        self.ops.push(Op::Polygon(points.len()));
    }
    fn text(&mut self, text: &str, _pos: Vec2, style: TextStyle) {
        self.ops.push(Op::Text(text.to_string(), style.color));
    }
}

fn world() -> World {
    World::new(800.0, 600.0, 7)
}

/// Run one frame, returning what was drawn and what was asked to sound.
fn step(w: &mut World) -> (Recorder, Vec<AudioCue>) {
    let mut rec = Recorder::default();
    let mut cues = Vec::new();
    w.frame(&mut rec, &mut cues);
    (rec, cues)
}

fn blips(cues: &[AudioCue], tone: Tone, freq: f32) -> usize {
    cues.iter()
        .filter(|c| matches!(c, AudioCue::Blip { tone: t, freq_hz, .. } if *t == tone && *freq_hz == freq))
        .count()
}

fn cell_count(w: &World) -> usize {
    match &w.layers[0] {
        Layer::Cells(c) => c.cells.len(),
        _ => panic!("layer 0 should be Cells"),
    }
}

#[test]
fn scenes_are_in_zoom_order() {
    let w = world();
    let names: Vec<_> = w.layers.iter().map(Layer::name).collect();
    assert_eq!(
        names,
        [
            "Cells",
            "Bacteria",
            "Molecular Swarms",
            "Neural Webs",
            "Abstract Ecosystem",
            "Cosmic Infinity"
        ]
    );
}

#[test]
fn frame_draws_outgoing_then_incoming_then_overlay() {
    let mut w = world();
    w.zoom.set_level(0.5);
    let (rec, _) = step(&mut w);

    assert_eq!(rec.ops[0], Op::Clear);
    let texts = rec.texts();
    assert_eq!(texts.len(), 2 + 1 + 6);
    assert_eq!(texts[0].0, "Cells");
    assert_eq!(texts[1].0, "Bacteria");
    assert_eq!(texts[0].1.a, 120.0);
    assert_eq!(texts[1].1.a, 120.0);
    assert_eq!(texts[2].0, "Zoom (loops): 0.50");
    assert_eq!(texts[2].1.a, 255.0);
    assert_eq!(texts[3].0, "Cells");
    assert_eq!(texts[8].0, "Cosmic Infinity");
    assert_eq!(rec.count(&Op::RoundRect), 1);
}

#[test]
fn frame_counter_advances_once_per_frame() {
    let mut w = world();
    assert_eq!(w.frame_count(), 0);
    for _ in 0..5 {
        step(&mut w);
    }
    assert_eq!(w.frame_count(), 5);
}

#[test]
fn click_is_attributed_at_press_and_reacts_through_its_lifetime() {
    let mut w = world();
    w.zoom.set_level(1.9);
    for _ in 0..100 {
        step(&mut w);
    }
    let ev = w.on_press(100.0, 100.0);
    w.on_release();
    assert_eq!(ev.frame, 100);
    assert_eq!(ev.layer, 2);

    // Molecular Swarms draws one ring per live click
    for frame in 101..=219 {
        let (rec, _) = step(&mut w);
        assert_eq!(w.frame_count(), frame);
        assert_eq!(rec.count(&Op::StrokeEllipse), 1, "ring missing at frame {frame}");
    }
    let (rec, _) = step(&mut w);
    assert_eq!(w.frame_count(), 220);
    assert_eq!(rec.count(&Op::StrokeEllipse), 0);
    assert!(w.clicks.is_empty());
}

#[test]
fn no_cues_until_audio_is_ready() {
    let mut w = world();
    w.on_press(100.0, 100.0);
    w.on_release();
    let (_, cues) = step(&mut w);
    assert!(cues.is_empty());

    w.set_audio_ready();
    let (_, cues) = step(&mut w);
    assert_eq!(blips(&cues, Tone::Pop, 420.0), 1);
}

#[test]
fn cells_divide_once_per_frame_per_live_click() {
    let mut w = world();
    assert_eq!(cell_count(&w), CELL_SEED_COUNT);
    w.on_press(300.0, 300.0);
    w.on_release();
    for _ in 0..10 {
        step(&mut w);
    }
    assert_eq!(cell_count(&w), CELL_SEED_COUNT + 10);
}

#[test]
fn cell_growth_is_capped_and_seeds_survive() {
    let mut w = world();
    let Layer::Cells(cells) = &mut w.layers[0] else {
        panic!("layer 0 should be Cells");
    };
    let seeds: Vec<Vec2> = cells.cells.iter().map(|c| c.pos).collect();
    for i in 0..1000 {
        cells.divide(Cell {
            pos: Vec2::new(i as f32, 0.0),
            radius: 30.0,
            speed: 0.01,
            phase: 0.0,
        });
    }
    assert_eq!(cells.cells.len(), CELL_CAP);
    let kept: Vec<Vec2> = cells.cells[..CELL_SEED_COUNT].iter().map(|c| c.pos).collect();
    assert_eq!(kept, seeds);
    assert_eq!(cells.cells.last().map(|c| c.pos.x), Some(999.0));
}

#[test]
fn click_reaction_repeats_every_frame_while_live() {
    let mut w = world();
    w.set_audio_ready();
    w.zoom.jump_to_layer(3);
    let ev = w.on_press(200.0, 200.0);
    w.on_release();
    assert_eq!(ev.layer, 3);
    for _ in 0..10 {
        let (_, cues) = step(&mut w);
        assert_eq!(blips(&cues, Tone::Bloom, 520.0), 1);
    }
}

#[test]
fn hum_follows_bacteria_and_is_silenced_when_it_leaves() {
    let mut w = world();
    w.set_audio_ready();
    w.zoom.jump_to_layer(1);
    let (_, cues) = step(&mut w);
    assert!(cues.contains(&AudioCue::Level {
        tone: Tone::Hum,
        amp: 0.06,
        ramp_sec: 0.2
    }));

    w.zoom.jump_to_layer(3);
    let (_, cues) = step(&mut w);
    assert!(cues.contains(&AudioCue::Level {
        tone: Tone::Hum,
        amp: 0.0,
        ramp_sec: 0.2
    }));

    let (_, cues) = step(&mut w);
    assert!(cues.iter().all(|c| c.tone() != Tone::Hum));
}

#[test]
fn slider_drag_positions_zoom_absolutely() {
    let mut w = world();
    let y = w.slider.origin.y + 4.0;
    w.on_press(400.0, y);
    assert!(w.slider.is_dragging());
    assert_eq!(w.clicks.len(), 1);

    w.on_move(400.0, y);
    assert_eq!(w.zoom.level(), 3.0);
    w.on_move(320.0, y + 200.0);
    assert_eq!(w.zoom.level(), 1.5);

    w.on_release();
    assert!(!w.slider.is_dragging());
    w.on_move(600.0, y);
    assert_eq!(w.zoom.level(), 1.5);
}

#[test]
fn pointer_moves_off_the_slider_leave_zoom_alone() {
    let mut w = world();
    w.zoom.set_level(2.25);
    w.on_press(50.0, 50.0);
    w.on_move(400.0, w.slider.origin.y + 4.0);
    assert_eq!(w.zoom.level(), 2.25);
}

#[test]
fn resize_reanchors_slider() {
    let mut w = world();
    w.on_resize(1000.0, 500.0);
    assert_eq!(w.view(), Vec2::new(1000.0, 500.0));
    assert_eq!(w.slider.origin, Vec2::new(340.0, 456.0));
}

#[test]
fn wheel_and_keys_move_zoom() {
    let mut w = world();
    w.on_wheel(-625.0);
    assert!((w.zoom.level() - 1.0).abs() < 1e-5);
    w.on_key(KeyAction::JumpTo(4));
    assert_eq!(w.zoom.level(), 4.0);
    w.on_key(KeyAction::Step(-1.0));
    assert!((w.zoom.level() - 3.9).abs() < 1e-5);
    w.on_key(KeyAction::Volume(0.05));
    assert!((w.zoom.level() - 3.9).abs() < 1e-5);
}

#[test]
fn cosmic_twinkles_on_its_period_only() {
    let mut w = world();
    w.set_audio_ready();
    w.zoom.jump_to_layer(5);
    let mut hits = Vec::new();
    for _ in 0..230 {
        let (_, cues) = step(&mut w);
        if blips(&cues, Tone::Pulse, 110.0) > 0 {
            hits.push(w.frame_count());
        }
    }
    assert_eq!(hits, [110, 220]);
}

#[test]
fn ecosystem_grows_a_bloom_while_pointer_held() {
    let mut w = world();
    w.set_audio_ready();
    w.zoom.jump_to_layer(4);
    w.on_press(100.0, 100.0);
    let (held, cues) = step(&mut w);
    assert_eq!(blips(&cues, Tone::Bloom, 240.0), 1);

    w.on_release();
    let (released, cues) = step(&mut w);
    assert_eq!(blips(&cues, Tone::Bloom, 240.0), 0);
    assert_eq!(held.count(&Op::Ellipse), released.count(&Op::Ellipse) + 1);
    assert_eq!(released.count(&Op::Polygon(18)), 26);
}

#[test]
fn bacteria_stay_on_screen() {
    let mut w = world();
    w.zoom.jump_to_layer(1);
    w.on_move(790.0, 10.0);
    for _ in 0..300 {
        step(&mut w);
    }
    let Layer::Bacteria(b) = &w.layers[1] else {
        panic!("layer 1 should be Bacteria");
    };
    for s in &b.swimmers {
        assert!((0.0..800.0).contains(&s.pos.x) && (0.0..600.0).contains(&s.pos.y));
    }
}

#[test]
fn swarm_rings_restart_every_sixty_frames() {
    assert_eq!(ring_diameter(100, 100), 20.0);
    assert_eq!(ring_diameter(130, 100), 50.0);
    assert_eq!(ring_diameter(160, 100), 20.0);
}

#[test]
fn neurons_link_only_when_close() {
    let mut rng = <rand::rngs::StdRng as rand::SeedableRng>::seed_from_u64(1);
    let mut layer = NeuralLayer::new(Vec2::new(800.0, 600.0), &mut rng);
    layer.nodes = vec![
        Vec2::new(0.0, 0.0),
        Vec2::new(100.0, 0.0),
        Vec2::new(500.0, 0.0),
        Vec2::new(600.0, 100.0),
    ];
    let links: Vec<_> = layer.links().collect();
    assert_eq!(links, [(0, 1), (2, 3)]);
}

fn input_at(frame: u64) -> FrameInput {
    FrameInput {
        frame,
        view: Vec2::new(800.0, 600.0),
        pointer: Vec2::ZERO,
        pointer_down: false,
    }
}

#[test]
fn scene_clock_keeps_moving_after_f32_frame_resolution_runs_out() {
    use std::f32::consts::TAU;
    // Beyond 2^24 consecutive frame numbers collapse to the same f32
    let base = 1u64 << 24;
    assert_eq!(base as f32, (base + 1) as f32);

    for rate in [0.03_f32, 0.12, 0.22] {
        let a = input_at(base).angle(rate);
        let b = input_at(base + 1).angle(rate);
        assert!((0.0..=TAU).contains(&a) && (0.0..=TAU).contains(&b));
        let step = (b - a).rem_euclid(TAU);
        assert!((step - rate).abs() < 1e-4, "angle step {step} at rate {rate}");
    }

    for rate in [0.0016_f32, 0.004, 0.014] {
        let a = input_at(base).drift(rate);
        let b = input_at(base + 1).drift(rate);
        assert!((0.0..=4096.0).contains(&a));
        assert!((b - a - rate).abs() < 1e-3, "drift step {} at rate {rate}", b - a);
    }
}

#[test]
fn scene_clock_matches_frame_count_early_on() {
    let input = input_at(100);
    assert!((input.angle(0.01) - 1.0).abs() < 1e-5);
    assert!((input.drift(0.005) - 0.5).abs() < 1e-6);
}
