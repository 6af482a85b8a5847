use crate::audio::AudioBank;
use crate::canvas::CanvasPainter;
use crate::constants::HEARTBEAT_EVERY_FRAMES;
use crate::core::{AudioCue, Layer, World};
use crate::dom;
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub struct FrameContext {
    pub world: Rc<RefCell<World>>,
    pub audio: Rc<RefCell<Option<AudioBank>>>,
    pub canvas: web::HtmlCanvasElement,
    pub painter: CanvasPainter,
    pub cues: Vec<AudioCue>,
    pub last_heartbeat: Instant,
}

impl FrameContext {
    pub fn frame(&mut self) {
        self.cues.clear();
        let mut world = self.world.borrow_mut();
        let scale = dom::backing_scale(&self.canvas, world.view().x);
        self.painter.begin_frame(scale);
        world.frame(&mut self.painter, &mut self.cues);

        if let Some(bank) = self.audio.borrow().as_ref() {
            for cue in &self.cues {
                bank.play(cue);
            }
        }

        let n = world.frame_count();
        if n % HEARTBEAT_EVERY_FRAMES == 0 {
            let now = Instant::now();
            let secs = (now - self.last_heartbeat).as_secs_f32();
            self.last_heartbeat = now;
            let cells = match world.layers.first() {
                Some(Layer::Cells(c)) => c.cells.len(),
                _ => 0,
            };
            log::debug!(
                "[frame] n={} fps={:.1} zoom={:.2} clicks={} cells={}",
                n,
                HEARTBEAT_EVERY_FRAMES as f32 / secs.max(1e-3),
                world.zoom.level(),
                world.clicks.len(),
                cells
            );
        }
    }
}

pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext>>) {
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        frame_ctx.borrow_mut().frame();
        request_frame(&tick_clone);
    }) as Box<dyn FnMut()>));
    request_frame(&tick);
}

fn request_frame(tick: &Rc<RefCell<Option<Closure<dyn FnMut()>>>>) {
    if let (Some(w), Some(cb)) = (web::window(), tick.borrow().as_ref()) {
        _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
    }
}
