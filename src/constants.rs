/// Zoom, click-bus, slider and scene tuning constants.
///
/// These express intended behavior (rates, windows, sizes) and keep magic
/// numbers out of the frame loop and the scene code.
// Zoom input
pub const WHEEL_ZOOM_SENSITIVITY: f32 = -0.0016; // zoom units per wheel delta unit
pub const KEY_ZOOM_STEP: f32 = 0.1; // arrow-key nudge

// Click bus
pub const CLICK_LIFETIME_FRAMES: u64 = 120; // ~2s at 60fps

// Slider layout (CSS pixels)
pub const SLIDER_WIDTH: f32 = 320.0;
pub const SLIDER_HEIGHT: f32 = 12.0;
pub const SLIDER_BOTTOM_OFFSET: f32 = 44.0; // track y measured up from the bottom edge
pub const SLIDER_HIT_ABOVE: f32 = 10.0;
pub const SLIDER_HIT_BELOW: f32 = 22.0; // measured from the track's top edge
pub const SLIDER_CORNER_RADIUS: f32 = 6.0;
pub const SLIDER_KNOB_DIAMETER: f32 = 18.0;
pub const SLIDER_TICK_OVERHANG: f32 = 6.0;

// Labels
pub const LABEL_TEXT_SIZE: f32 = 22.0;
pub const LABEL_TOP: f32 = 16.0;
pub const SLIDER_TEXT_SIZE: f32 = 15.0;
pub const TICK_TEXT_SIZE: f32 = 11.0;

// Cells
pub const CELL_SEED_COUNT: usize = 22;
pub const CELL_CAP: usize = 360; // mitosis evicts the oldest daughter beyond this
pub const CELL_SPAWN_JITTER: f32 = 24.0;

// Entity counts for the remaining scenes
pub const BACTERIA_COUNT: usize = 48;
pub const SWARM_PARTICLE_COUNT: usize = 220;
pub const NEURON_COUNT: usize = 22;
pub const NEURON_LINK_DISTANCE: f32 = 240.0;
pub const BLOOM_COUNT: usize = 26;
pub const BLOOM_PETALS: usize = 18;
pub const STAR_COUNT: usize = 420;
pub const TWINKLE_PERIOD_FRAMES: u64 = 110;

// Audio
pub const BLIP_ATTACK_SEC: f64 = 0.03;
pub const BLIP_RELEASE_SEC: f64 = 0.25;
pub const HUM_LEVEL: f32 = 0.06; // hum amplitude at full Bacteria visibility
pub const HUM_RAMP_SEC: f64 = 0.2;
pub const MASTER_GAIN: f32 = 0.8;
pub const MASTER_GAIN_STEP: f32 = 0.05;

// Diagnostics
pub const HEARTBEAT_EVERY_FRAMES: u64 = 600;
