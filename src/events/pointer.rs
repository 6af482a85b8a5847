use super::InputWiring;
use crate::audio::AudioBank;
use crate::dom;
use wasm_bindgen::JsCast;
use web_sys as web;

pub fn wire_input_handlers(w: &InputWiring) {
    wire_pointerdown(w);
    wire_pointermove(w);
    wire_pointerup(w);
}

/// Audio may only start from inside a gesture, so the first press builds the
/// bank. A failed start is retried on the next press.
fn ensure_audio(w: &InputWiring) {
    if w.world.borrow().audio_ready() {
        return;
    }
    match AudioBank::start() {
        Ok(bank) => {
            *w.audio.borrow_mut() = Some(bank);
            w.world.borrow_mut().set_audio_ready();
        }
        Err(e) => log::error!("[audio] start failed: {:?}", e),
    }
}

fn wire_pointerdown(w: &InputWiring) {
    let w = w.clone();
    let canvas_for_listener = w.canvas.clone();

    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::PointerEvent| {
        ensure_audio(&w);
        let pos = dom::pointer_css(&ev, &w.canvas);
        let click = w.world.borrow_mut().on_press(pos.x, pos.y);
        log::debug!(
            "[input] click ({:.0},{:.0}) frame={} layer={}",
            click.x,
            click.y,
            click.frame,
            click.layer
        );
        _ = w.canvas.set_pointer_capture(ev.pointer_id());
        ev.prevent_default();
    }) as Box<dyn FnMut(_)>);
    _ = canvas_for_listener
        .add_event_listener_with_callback("pointerdown", closure.as_ref().unchecked_ref());
    closure.forget();
}

fn wire_pointermove(w: &InputWiring) {
    let w = w.clone();

    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::PointerEvent| {
        let pos = dom::pointer_css(&ev, &w.canvas);
        w.world.borrow_mut().on_move(pos.x, pos.y);
    }) as Box<dyn FnMut(_)>);

    if let Some(wnd) = web::window() {
        _ = wnd.add_event_listener_with_callback("pointermove", closure.as_ref().unchecked_ref());
    }
    closure.forget();
}

fn wire_pointerup(w: &InputWiring) {
    let w = w.clone();

    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::PointerEvent| {
        w.world.borrow_mut().on_release();
        ev.prevent_default();
    }) as Box<dyn FnMut(_)>);

    if let Some(wnd) = web::window() {
        _ = wnd.add_event_listener_with_callback("pointerup", closure.as_ref().unchecked_ref());
        _ = wnd.add_event_listener_with_callback("pointercancel", closure.as_ref().unchecked_ref());
    }
    closure.forget();
}
