use crate::NoiseGenerator;
use crate::hash::hash2;
use crate::utils::{lerp, smoothstep};

// 2D value noise over an integer lattice.
// Coordinates are divided by `scale` (the lattice spacing in map cells),
// the four surrounding lattice corners are hashed, and the corner values
// are bilinearly interpolated with smoothstep-eased fractions.
pub struct ValueNoise2D {
    seed: i32,
    scale: f64, // lattice spacing; larger values zoom the pattern out
}

impl ValueNoise2D {
    pub fn new(seed: i32, scale: f64) -> Self {
        Self { seed, scale }
    }
}

impl NoiseGenerator for ValueNoise2D {
    fn get2(&self, x: f64, y: f64) -> f64 {
        let fx = x / self.scale;
        let fy = y / self.scale;

        // Lower-left lattice corner and the next one over
        let x0 = fx.floor() as i32;
        let y0 = fy.floor() as i32;
        let x1 = x0.wrapping_add(1);
        let y1 = y0.wrapping_add(1);

        // Eased fractional offsets within the cell
        let sx = smoothstep(fx - x0 as f64);
        let sy = smoothstep(fy - y0 as f64);

        let v00 = hash2(x0, y0, self.seed);
        let v10 = hash2(x1, y0, self.seed);
        let v01 = hash2(x0, y1, self.seed);
        let v11 = hash2(x1, y1, self.seed);

        let ix0 = lerp(v00, v10, sx);
        let ix1 = lerp(v01, v11, sx);
        lerp(ix0, ix1, sy)
    }
}
