/// What a key press asks the explorer to do.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum KeyAction {
    /// Nudge zoom by this many steps.
    Step(f32),
    /// Jump to an exact layer position.
    JumpTo(usize),
    /// Change master volume by this amount.
    Volume(f32),
}

#[inline]
pub fn layer_for_digit(key: &str, layer_count: usize) -> Option<usize> {
    let d = key.parse::<usize>().ok()?;
    (1..=layer_count).contains(&d).then(|| d - 1)
}

pub fn key_action(key: &str, layer_count: usize, volume_step: f32) -> Option<KeyAction> {
    if let Some(layer) = layer_for_digit(key, layer_count) {
        return Some(KeyAction::JumpTo(layer));
    }
    match key {
        "ArrowRight" => Some(KeyAction::Step(1.0)),
        "ArrowLeft" => Some(KeyAction::Step(-1.0)),
        "ArrowUp" => Some(KeyAction::Volume(volume_step)),
        "ArrowDown" => Some(KeyAction::Volume(-volume_step)),
        _ => None,
    }
}
