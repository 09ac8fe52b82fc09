use crate::fbm::Fbm2D;
use crate::utils::{clamp01, clamp_sea_level};

// Derived climate fields: moisture from an independent fBm field,
// temperature from latitude and elevation.

// Seed offset decorrelating the moisture field from the height field
pub const MOISTURE_SEED_OFFSET: i32 = 7777;
// Moisture always uses a fixed octave stack, independent of the terrain
// octave count
pub const MOISTURE_OCTAVES: u32 = 4;
const MOISTURE_PERSISTENCE: f64 = 0.5;
const MOISTURE_LACUNARITY: f64 = 2.0;

// The fBm field the moisture samples come from.
pub fn moisture_noise(seed: i32, moisture_scale: f64) -> Fbm2D {
    Fbm2D::new(
        seed.wrapping_add(MOISTURE_SEED_OFFSET),
        moisture_scale,
        MOISTURE_OCTAVES,
        MOISTURE_PERSISTENCE,
        MOISTURE_LACUNARITY,
    )
}

// Remap a raw moisture sample around 0.5 by the contrast multiplier.
#[inline]
pub fn moisture_contrast(sample: f64, strength: f64) -> f64 {
    clamp01((sample - 0.5) * strength + 0.5)
}

// Temperature at row `y` of a grid `grid_height` cells tall, for a cell of
// height `h`. Warmest at the vertical center, blended toward neutral 0.5
// by `latitude_gain`, then cooled by elevation above sea level at
// `lapse_rate`. Independent of x by construction.
pub fn temperature_at(
    y: usize,
    grid_height: usize,
    h: f64,
    sea_level: f64,
    latitude_gain: f64,
    lapse_rate: f64,
) -> f64 {
    let cy = (grid_height as f64 - 1.0) / 2.0;
    let lat = (y as f64 - cy).abs() / cy;
    let t = clamp01(0.5 + ((1.0 - lat) - 0.5) * latitude_gain);

    let sea = clamp_sea_level(sea_level);
    let elevation = ((h - sea) / (1.0 - sea)).max(0.0);
    clamp01(t - elevation * lapse_rate)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::NoiseGenerator;

    #[test]
    fn moisture_contrast_clamps() {
        assert_eq!(moisture_contrast(0.5, 3.0), 0.5);
        assert_eq!(moisture_contrast(1.0, 3.0), 1.0);
        assert_eq!(moisture_contrast(0.0, 3.0), 0.0);
        // zero strength collapses everything to the midpoint
        assert_eq!(moisture_contrast(0.9, 0.0), 0.5);
    }

    #[test]
    fn moisture_field_decorrelated_from_height_seed() {
        let m = moisture_noise(38, 180.0);
        let h = Fbm2D::new(38, 180.0, MOISTURE_OCTAVES, 0.5, 2.0);
        let differs = (0..32).any(|i| {
            let x = i as f64 * 11.3;
            m.get2(x, x * 0.7) != h.get2(x, x * 0.7)
        });
        assert!(differs);
    }

    #[test]
    fn temperature_symmetric_around_center_row() {
        let grid_h = 101;
        for y in 0..50 {
            let a = temperature_at(y, grid_h, 0.3, 0.45, 1.0, 0.55);
            let b = temperature_at(grid_h - 1 - y, grid_h, 0.3, 0.45, 1.0, 0.55);
            assert!((a - b).abs() < 1e-12, "rows {y} vs {}", grid_h - 1 - y);
        }
    }

    #[test]
    fn temperature_warmest_at_center() {
        let center = temperature_at(50, 101, 0.2, 0.45, 1.0, 0.55);
        let pole = temperature_at(0, 101, 0.2, 0.45, 1.0, 0.55);
        assert!(center > pole);
    }

    #[test]
    fn elevation_lapse_cools() {
        let low = temperature_at(50, 101, 0.5, 0.45, 1.0, 0.55);
        let high = temperature_at(50, 101, 0.95, 0.45, 1.0, 0.55);
        assert!(high < low);
        // below sea level there is no lapse at all
        let submerged = temperature_at(50, 101, 0.1, 0.45, 1.0, 0.55);
        assert!(submerged >= low);
    }

    #[test]
    fn temperature_total_on_extreme_sea_levels() {
        // sea level 0 and 1 are clamped internally, never dividing by zero
        for sea in [0.0, 1.0] {
            let t = temperature_at(10, 101, 0.5, sea, 1.0, 0.55);
            assert!((0.0..=1.0).contains(&t));
        }
    }
}
