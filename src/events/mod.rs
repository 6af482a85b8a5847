pub mod keyboard;
pub mod pointer;
pub mod window;

pub use keyboard::wire_global_keydown;
pub use pointer::wire_input_handlers;
pub use window::{wire_canvas_resize, wire_wheel};

use crate::audio::AudioBank;
use crate::core::World;
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

/// Handles shared by every DOM listener.
#[derive(Clone)]
pub struct InputWiring {
    pub canvas: web::HtmlCanvasElement,
    pub world: Rc<RefCell<World>>,
    pub audio: Rc<RefCell<Option<AudioBank>>>,
}
