pub mod clicks;
pub mod cue;
pub mod keys;
pub mod layers;
pub mod noise;
pub mod paint;
pub mod slider;
pub mod world;
pub mod zoom;

pub use clicks::*;
pub use cue::*;
pub use keys::*;
pub use layers::*;
pub use noise::*;
pub use paint::*;
pub use slider::*;
pub use world::*;
pub use zoom::*;
