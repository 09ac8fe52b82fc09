use crate::NoiseGenerator;
use crate::utils::{clamp01, smoothstep};
use crate::value_noise::ValueNoise2D;

// Radial continental mask: pushes heights down toward the map border so
// land clusters around the center, with a noise-perturbed shoreline.

// Seed offset of the shoreline warp noise, decorrelating it from the
// terrain field that shares the caller's seed
pub const WARP_SEED_OFFSET: i32 = 9999;
// Lattice spacing of the warp noise, in map cells
pub const WARP_LATTICE: f64 = 120.0;
// How far the warp displaces the normalized radial distance
pub const WARP_AMPLITUDE: f64 = 0.25;
// Normalized distance at which the falloff ramp starts
const EDGE_START: f64 = 0.75;
// Contrast exponent applied to the masked height; slightly below 1 so
// land skews higher
pub const HEIGHT_GAMMA: f64 = 0.9;

// Smooth ramp from 0 at EDGE_START to `strength` at the border,
// clamped to [0, 1].
pub fn falloff(distance: f64, strength: f64) -> f64 {
    let d = clamp01(distance);
    let t = ((d - EDGE_START) / (1.0 - EDGE_START)).max(0.0);
    clamp01(smoothstep(t) * strength)
}

pub struct ContinentMask2D {
    width: usize,
    height: usize,
    strength: f64,
    warp: ValueNoise2D,
}

impl ContinentMask2D {
    pub fn new(width: usize, height: usize, strength: f64, seed: i32) -> Self {
        Self {
            width,
            height,
            strength,
            warp: ValueNoise2D::new(seed.wrapping_add(WARP_SEED_OFFSET), WARP_LATTICE),
        }
    }

    // Subtract the radial falloff from a raw fBm height at cell (x, y).
    pub fn apply(&self, h: f64, x: usize, y: usize) -> f64 {
        let cx = (self.width as f64 - 1.0) / 2.0;
        let cy = (self.height as f64 - 1.0) / 2.0;

        // Normalized radial distance from the grid center, with the
        // half-extents as the radius unit
        let nx = (x as f64 - cx) / cx;
        let ny = (y as f64 - cy) / cy;
        let mut d = (nx * nx + ny * ny).sqrt();

        // Perturb the distance so the shoreline is ragged, not circular
        d += (self.warp.get2(x as f64, y as f64) - 0.5) * WARP_AMPLITUDE;

        clamp01(h - falloff(clamp01(d), self.strength))
    }

    // Full terrain shaping step: mask, then the fixed contrast gamma.
    pub fn shape(&self, h: f64, x: usize, y: usize) -> f64 {
        self.apply(h, x, y).powf(HEIGHT_GAMMA)
    }
}
