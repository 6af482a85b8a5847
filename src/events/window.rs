use super::InputWiring;
use crate::dom;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Keep the backing store and the slider layout in step with the window.
pub fn wire_canvas_resize(w: &InputWiring) {
    let w = w.clone();
    let resize_closure = Closure::wrap(Box::new(move || {
        let css = dom::sync_canvas_backing_size(&w.canvas);
        w.world.borrow_mut().on_resize(css.x, css.y);
        log::debug!("[input] resize {:.0}x{:.0}", css.x, css.y);
    }) as Box<dyn FnMut()>);
    if let Some(window) = web::window() {
        _ = window
            .add_event_listener_with_callback("resize", resize_closure.as_ref().unchecked_ref());
    }
    resize_closure.forget();
}

/// Wheel deltas drive zoom. Registered non-passive so page scrolling can be
/// suppressed.
pub fn wire_wheel(w: &InputWiring) {
    let w = w.clone();
    let canvas = w.canvas.clone();
    let closure = Closure::wrap(Box::new(move |ev: web::WheelEvent| {
        w.world.borrow_mut().on_wheel(ev.delta_y() as f32);
        ev.prevent_default();
    }) as Box<dyn FnMut(_)>);
    let opts = web::AddEventListenerOptions::new();
    opts.set_passive(false);
    _ = canvas.add_event_listener_with_callback_and_add_event_listener_options(
        "wheel",
        closure.as_ref().unchecked_ref(),
        &opts,
    );
    closure.forget();
}
