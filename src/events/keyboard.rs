use super::InputWiring;
use crate::constants::MASTER_GAIN_STEP;
use crate::core::{key_action, KeyAction};
use wasm_bindgen::JsCast;
use web_sys as web;

pub fn handle_global_keydown(ev: &web::KeyboardEvent, w: &InputWiring) {
    let key = ev.key();
    let layer_count = w.world.borrow().layer_count();
    let Some(action) = key_action(&key, layer_count, MASTER_GAIN_STEP) else {
        return;
    };
    match action {
        KeyAction::Volume(delta) => {
            if let Some(bank) = w.audio.borrow().as_ref() {
                bank.nudge_master(delta);
            }
        }
        KeyAction::JumpTo(layer) => {
            log::info!("[keys] jump to layer {}", layer);
            w.world.borrow_mut().on_key(action);
        }
        KeyAction::Step(_) => w.world.borrow_mut().on_key(action),
    }
    ev.prevent_default();
}

pub fn wire_global_keydown(w: &InputWiring) {
    if let Some(window) = web::window() {
        let w = w.clone();
        let closure =
            wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::KeyboardEvent| {
                handle_global_keydown(&ev, &w);
            }) as Box<dyn FnMut(_)>);
        _ = window.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
        closure.forget();
    }
}
