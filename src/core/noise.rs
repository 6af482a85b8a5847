//! Seeded coherent noise in `[0, 1)`.
//!
//! Octave value noise over an integer lattice: each lattice corner hashes to a
//! value in `[0, 1)`, corners are blended with a cosine ease, and four octaves
//! are summed with a 0.5 falloff. Smooth along every axis, so slowly advancing
//! one coordinate (usually time) gives a continuous drift.

const OCTAVES: u32 = 4;
const FALLOFF: f32 = 0.5;

#[derive(Clone, Copy, Debug)]
pub struct Noise {
    seed: u32,
}

impl Noise {
    pub fn new(seed: u32) -> Self {
        Self { seed }
    }

    #[inline]
    pub fn sample2(&self, x: f32, y: f32) -> f32 {
        self.sample3(x, y, 0.0)
    }

    pub fn sample3(&self, x: f32, y: f32, z: f32) -> f32 {
        let mut sum = 0.0;
        let mut amp = 0.5;
        let mut norm = 0.0;
        let mut freq = 1.0;
        for octave in 0..OCTAVES {
            let salt = self.seed.wrapping_add(octave.wrapping_mul(0x9E37_79B9));
            sum += amp * lattice3(x * freq, y * freq, z * freq, salt);
            norm += amp;
            amp *= FALLOFF;
            freq *= 2.0;
        }
        (sum / norm).clamp(0.0, 0.999_999)
    }
}

#[inline]
fn ease(t: f32) -> f32 {
    0.5 * (1.0 - (t * std::f32::consts::PI).cos())
}

#[inline]
fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}

fn lattice3(x: f32, y: f32, z: f32, seed: u32) -> f32 {
    let (x0, y0, z0) = (x.floor(), y.floor(), z.floor());
    let (tx, ty, tz) = (ease(x - x0), ease(y - y0), ease(z - z0));
    let (xi, yi, zi) = (x0 as i32, y0 as i32, z0 as i32);

    let c = |dx: i32, dy: i32, dz: i32| hash01(xi + dx, yi + dy, zi + dz, seed);

    let x00 = lerp(c(0, 0, 0), c(1, 0, 0), tx);
    let x10 = lerp(c(0, 1, 0), c(1, 1, 0), tx);
    let x01 = lerp(c(0, 0, 1), c(1, 0, 1), tx);
    let x11 = lerp(c(0, 1, 1), c(1, 1, 1), tx);
    let y0v = lerp(x00, x10, ty);
    let y1v = lerp(x01, x11, ty);
    lerp(y0v, y1v, tz)
}

fn hash01(x: i32, y: i32, z: i32, seed: u32) -> f32 {
    let mut n = (x as u32).wrapping_mul(374_761_393)
        ^ (y as u32).wrapping_mul(668_265_263)
        ^ (z as u32).wrapping_mul(2_147_483_647)
        ^ seed.wrapping_mul(0x85EB_CA6B);
    n = (n ^ (n >> 13)).wrapping_mul(1_274_126_177);
    n ^= n >> 16;
    ((n & 0x00FF_FFFF) as f32) / 16_777_216.0
}
