#![cfg(target_arch = "wasm32")]
use crate::core::World;
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;

mod audio;
mod canvas;
mod constants;
mod core;
mod dom;
mod events;
mod frame;

const CANVAS_ID: &str = "app-canvas";

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("micro-world starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

async fn init() -> anyhow::Result<()> {
    let document = dom::window_document().ok_or_else(|| anyhow::anyhow!("no document"))?;
    let canvas = dom::canvas_by_id(&document, CANVAS_ID)?;
    let painter = canvas::CanvasPainter::new(&canvas)?;

    let css = dom::sync_canvas_backing_size(&canvas);
    let seed = js_sys::Date::now() as u64;
    let world = Rc::new(RefCell::new(World::new(css.x, css.y, seed)));
    log::info!(
        "[world] {} layers, view {:.0}x{:.0}, seed {}",
        world.borrow().layer_count(),
        css.x,
        css.y,
        seed
    );

    // Filled by the first pointer press
    let audio = Rc::new(RefCell::new(None));

    let wiring = events::InputWiring {
        canvas: canvas.clone(),
        world: world.clone(),
        audio: audio.clone(),
    };
    events::wire_canvas_resize(&wiring);
    events::wire_input_handlers(&wiring);
    events::wire_wheel(&wiring);
    events::wire_global_keydown(&wiring);

    let frame_ctx = Rc::new(RefCell::new(frame::FrameContext {
        world,
        audio,
        canvas,
        painter,
        cues: Vec::new(),
        last_heartbeat: Instant::now(),
    }));
    frame::start_loop(frame_ctx);
    Ok(())
}
