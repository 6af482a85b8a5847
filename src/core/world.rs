//! The explorer's render-loop state: scenes, zoom, click bus, slider and the
//! frame clock. Constructed once at startup and driven by the DOM callbacks
//! and the animation-frame loop.

use crate::constants::HUM_RAMP_SEC;
use crate::core::clicks::{ClickBus, ClickEvent};
use crate::core::cue::{AudioCue, Tone};
use crate::core::keys::KeyAction;
use crate::core::layers::{FrameInput, Layer, SceneCtx};
use crate::core::noise::Noise;
use crate::core::paint::{Painter, Rgba};
use crate::core::slider::Slider;
use crate::core::zoom::{BlendPair, ZoomController};
use glam::Vec2;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

pub struct World {
    pub layers: Vec<Layer>,
    pub zoom: ZoomController,
    pub clicks: ClickBus,
    pub slider: Slider,
    view: Vec2,
    pointer: Vec2,
    pointer_down: bool,
    frame: u64,
    audio_ready: bool,
    noise: Noise,
    rng: StdRng,
    /// Tones holding a sustained level as of the previous frame.
    sustained: [bool; 4],
}

impl World {
    pub fn new(width: f32, height: f32, seed: u64) -> Self {
        let view = Vec2::new(width, height);
        let mut rng = StdRng::seed_from_u64(seed);
        let noise = Noise::new(rng.gen());
        let layers = Layer::all(view, &mut rng);
        let zoom = ZoomController::new(layers.len());
        Self {
            layers,
            zoom,
            clicks: ClickBus::new(),
            slider: Slider::new(width, height),
            view,
            pointer: Vec2::ZERO,
            pointer_down: false,
            frame: 0,
            audio_ready: false,
            noise,
            rng,
            sustained: [false; 4],
        }
    }

    #[inline]
    pub fn layer_count(&self) -> usize {
        self.layers.len()
    }

    #[inline]
    pub fn frame_count(&self) -> u64 {
        self.frame
    }

    #[inline]
    pub fn view(&self) -> Vec2 {
        self.view
    }

    #[inline]
    pub fn audio_ready(&self) -> bool {
        self.audio_ready
    }

    pub fn set_audio_ready(&mut self) {
        self.audio_ready = true;
    }

    pub fn on_resize(&mut self, width: f32, height: f32) {
        self.view = Vec2::new(width, height);
        self.slider.layout(width, height);
    }

    /// Pointer press: maybe begin a slider drag, and always record a click
    /// tagged with the nearest whole layer.
    pub fn on_press(&mut self, x: f32, y: f32) -> ClickEvent {
        let at = Vec2::new(x, y);
        self.pointer = at;
        self.pointer_down = true;
        if self.slider.press(at) {
            log::debug!("[input] slider drag start at x={:.1}", x);
        }
        let layer = self.zoom.attributed_index();
        self.clicks.record(x, y, self.frame, layer)
    }

    pub fn on_move(&mut self, x: f32, y: f32) {
        self.pointer = Vec2::new(x, y);
        if self.pointer_down && self.slider.is_dragging() {
            let fraction = self.slider.fraction_at(x);
            self.zoom.jump_to_fraction(fraction);
        }
    }

    pub fn on_release(&mut self) {
        self.pointer_down = false;
        self.slider.release();
    }

    pub fn on_wheel(&mut self, delta_y: f32) {
        self.zoom.apply_wheel(delta_y);
    }

    /// Zoom-related key actions. Volume is handled by the audio side.
    pub fn on_key(&mut self, action: KeyAction) {
        match action {
            KeyAction::Step(steps) => self.zoom.step(steps),
            KeyAction::JumpTo(layer) => self.zoom.jump_to_layer(layer),
            KeyAction::Volume(_) => {}
        }
    }

    /// Draw one frame. Audio requests are appended to `cues` once audio has
    /// been started by a user gesture; before that they are discarded.
    pub fn frame(&mut self, p: &mut dyn Painter, cues: &mut Vec<AudioCue>) -> BlendPair {
        self.frame += 1;
        let frame = self.frame;
        p.clear(Rgba::gray(0));

        let pair = self.zoom.blend_pair();
        let input = FrameInput {
            frame,
            view: self.view,
            pointer: self.pointer,
            pointer_down: self.pointer_down,
        };

        let mut emitted = Vec::new();
        for (layer, alpha) in [
            (pair.index, pair.current_alpha()),
            (pair.next_index, pair.next_alpha()),
        ] {
            let live = self.clicks.live_for(layer, frame);
            let mut ctx = SceneCtx {
                input: &input,
                clicks: live.as_slice(),
                noise: &self.noise,
                rng: &mut self.rng,
                cues: &mut emitted,
            };
            self.layers[layer].display(alpha, &mut ctx, p);
        }

        if !self.clicks.is_empty() {
            self.clicks.prune(frame);
        }

        let zoom = self.zoom.level();
        let count = self.layer_count();
        self.slider.draw(p, zoom, count, self.view.x);
        self.slider.draw_ticks(p, self.layers.iter().map(Layer::name));

        self.settle_sustained(&mut emitted);
        if self.audio_ready {
            cues.extend(emitted);
        }
        pair
    }

    /// Silence any tone whose sustaining scene stopped asking for it.
    fn settle_sustained(&mut self, emitted: &mut Vec<AudioCue>) {
        let mut now = [false; 4];
        for cue in emitted.iter() {
            if let AudioCue::Level { tone, .. } = cue {
                now[tone.slot()] = true;
            }
        }
        for tone in Tone::ALL {
            let slot = tone.slot();
            if self.sustained[slot] && !now[slot] {
                emitted.push(AudioCue::Level {
                    tone,
                    amp: 0.0,
                    ramp_sec: HUM_RAMP_SEC,
                });
            }
        }
        self.sustained = now;
    }
}
