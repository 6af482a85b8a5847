//! Shared click bus: recent presses tagged with the layer they belong to.

use crate::constants::CLICK_LIFETIME_FRAMES;
use smallvec::SmallVec;

/// One pointer press. Immutable once recorded.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ClickEvent {
    pub x: f32,
    pub y: f32,
    pub frame: u64,
    pub layer: usize,
}

impl ClickEvent {
    #[inline]
    pub fn age(&self, frame: u64) -> u64 {
        frame.saturating_sub(self.frame)
    }

    #[inline]
    pub fn is_live(&self, frame: u64) -> bool {
        self.age(frame) < CLICK_LIFETIME_FRAMES
    }
}

/// Live clicks handed to a single layer for one frame.
pub type LayerClicks = SmallVec<[ClickEvent; 8]>;

#[derive(Clone, Debug, Default)]
pub struct ClickBus {
    events: Vec<ClickEvent>,
}

impl ClickBus {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, x: f32, y: f32, frame: u64, layer: usize) -> ClickEvent {
        let ev = ClickEvent { x, y, frame, layer };
        self.events.push(ev);
        ev
    }

    /// Events attributed to `layer` that are still live at `frame`, oldest first.
    pub fn live_for(&self, layer: usize, frame: u64) -> LayerClicks {
        self.events
            .iter()
            .filter(|e| e.layer == layer && e.is_live(frame))
            .copied()
            .collect()
    }

    /// Drop everything at or past the lifetime window.
    pub fn prune(&mut self, frame: u64) {
        self.events.retain(|e| e.is_live(frame));
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}
