use crate::NoiseGenerator;
use crate::value_noise::ValueNoise2D;

// Fractal Brownian motion: a weighted sum of value-noise octaves.
// Each octave samples the same lattice at a higher frequency and lower
// amplitude; the sum is divided by the accumulated amplitude so the
// result stays in [0, 1) regardless of the octave count.
pub struct Fbm2D {
    noise: ValueNoise2D,
    octaves: u32,     // number of octaves to sum; callers must pass ≥ 1
    persistence: f64, // amplitude decay per octave, in [0, 1]
    lacunarity: f64,  // frequency growth per octave, ≥ 1
}

impl Fbm2D {
    pub fn new(seed: i32, base_scale: f64, octaves: u32, persistence: f64, lacunarity: f64) -> Self {
        Self {
            noise: ValueNoise2D::new(seed, base_scale),
            octaves,
            persistence,
            lacunarity,
        }
    }
}

impl NoiseGenerator for Fbm2D {
    fn get2(&self, x: f64, y: f64) -> f64 {
        let mut sum = 0.0; // accumulated weighted noise
        let mut amplitude = 1.0; // weight of the current octave
        let mut frequency = 1.0; // coordinate multiplier of the current octave
        let mut norm = 0.0; // total weight, for normalization

        for _ in 0..self.octaves {
            sum += self.noise.get2(x * frequency, y * frequency) * amplitude;
            norm += amplitude;
            amplitude *= self.persistence;
            frequency *= self.lacunarity;
        }

        sum / norm
    }
}

#[cfg(test)]
mod tests {
    use super::Fbm2D;
    use crate::NoiseGenerator;

    #[test]
    fn fbm_determinism() {
        let f1 = Fbm2D::new(38, 64.0, 5, 0.5, 2.0);
        let f2 = Fbm2D::new(38, 64.0, 5, 0.5, 2.0);
        assert_eq!(f1.get2(100.25, 73.5), f2.get2(100.25, 73.5));
    }

    #[test]
    fn fbm_normalized_range() {
        // Weighted average of [0,1) samples stays in [0,1) for any
        // octave count ≥ 1 and persistence in [0,1]
        for &(octaves, persistence) in &[(1u32, 0.5), (4, 0.5), (8, 1.0), (12, 0.0)] {
            let f = Fbm2D::new(-17, 48.0, octaves, persistence, 2.0);
            for y in 0..64 {
                for x in 0..64 {
                    let v = f.get2(x as f64 * 3.1, y as f64 * 2.7);
                    assert!(
                        (0.0..1.0).contains(&v),
                        "octaves {octaves} persistence {persistence}: {v}"
                    );
                }
            }
        }
    }

    #[test]
    fn fbm_single_octave_matches_value_noise() {
        use crate::value_noise::ValueNoise2D;
        let f = Fbm2D::new(5, 32.0, 1, 0.5, 2.0);
        let n = ValueNoise2D::new(5, 32.0);
        let v = f.get2(12.3, 45.6);
        assert!((v - n.get2(12.3, 45.6)).abs() < 1e-12);
    }

    #[test]
    fn fbm_seed_decorrelates() {
        let a = Fbm2D::new(1, 64.0, 5, 0.5, 2.0);
        let b = Fbm2D::new(2, 64.0, 5, 0.5, 2.0);
        // At least one sample in a small set must differ
        let differs = (0..16).any(|i| {
            let x = i as f64 * 7.7;
            a.get2(x, x * 0.3) != b.get2(x, x * 0.3)
        });
        assert!(differs);
    }
}
