use crate::utils::clamp_sea_level;

// Whittaker-style biome classification: height picks water, beach, rock
// or snow; everything in between falls into a fixed 3×3 climate palette
// indexed by temperature zone and moisture zone.

pub const BEACH_COLOR: [u8; 3] = [220, 210, 140];
pub const ROCK_COLOR: [u8; 3] = [140, 140, 140];
pub const SNOW_COLOR: [u8; 3] = [240, 240, 240];

// Rows are temperature zones (cold → hot), columns moisture zones
// (dry → wet). Not configurable.
pub const BIOME_PALETTE: [[[u8; 3]; 3]; 3] = [
    [[190, 190, 150], [70, 120, 80], [60, 110, 90]],
    [[205, 185, 110], [60, 170, 85], [40, 140, 85]],
    [[220, 200, 120], [170, 180, 90], [25, 130, 55]],
];

// Zone split at 0.33 / 0.66; boundary values fall upward
#[inline]
fn zone(v: f64) -> usize {
    if v < 0.33 {
        0
    } else if v < 0.66 {
        1
    } else {
        2
    }
}

// Classify one cell into an RGB color. Comparisons are strict and applied
// in order, so boundary values fall through to the next branch; a
// degenerate snow/rock ordering narrows the rock band but never panics.
pub fn biome_color(
    h: f64,
    moisture: f64,
    temperature: f64,
    sea_level: f64,
    beach_th: f64,
    rock_th: f64,
    snow_th: f64,
) -> [u8; 3] {
    let sea = clamp_sea_level(sea_level);

    if h < sea {
        // Deeper water is darker; depth ratio is in [0, 1)
        let depth = h / sea;
        return [
            0,
            (40.0 + 60.0 * depth).floor() as u8,
            (120.0 + 120.0 * depth).floor() as u8,
        ];
    }

    // Elevation as a fraction of the span above sea level
    let e = (h - sea) / (1.0 - sea);

    if e < beach_th {
        return BEACH_COLOR;
    }
    if e > snow_th {
        return SNOW_COLOR;
    }
    if e > rock_th {
        return ROCK_COLOR;
    }

    BIOME_PALETTE[zone(temperature)][zone(moisture)]
}

#[cfg(test)]
mod tests {
    use super::*;

    const SEA: f64 = 0.45;
    const BEACH: f64 = 0.06;
    const ROCK: f64 = 0.45;
    const SNOW: f64 = 0.60;

    fn classify(h: f64, m: f64, t: f64) -> [u8; 3] {
        biome_color(h, m, t, SEA, BEACH, ROCK, SNOW)
    }

    #[test]
    fn water_to_land_switch_is_sharp() {
        let below = classify(SEA - 1e-9, 0.5, 0.5);
        let at = classify(SEA, 0.5, 0.5);
        // Water pixels have a zero red channel; the first land band is beach
        assert_eq!(below[0], 0);
        assert_eq!(at, BEACH_COLOR);
    }

    #[test]
    fn water_darkens_with_depth() {
        let deep = classify(0.0, 0.5, 0.5);
        let shallow = classify(SEA - 1e-6, 0.5, 0.5);
        assert!(deep[2] < shallow[2]);
        assert_eq!(deep, [0, 40, 120]);
    }

    #[test]
    fn land_bands_in_order() {
        // elevations measured as fraction above sea level
        let at_e = |e: f64| SEA + e * (1.0 - SEA);
        assert_eq!(classify(at_e(0.03), 0.5, 0.5), BEACH_COLOR);
        assert_eq!(classify(at_e(0.50), 0.5, 0.5), ROCK_COLOR);
        assert_eq!(classify(at_e(0.70), 0.5, 0.5), SNOW_COLOR);
        // mid elevation goes through the climate palette
        assert_eq!(classify(at_e(0.20), 0.5, 0.5), BIOME_PALETTE[1][1]);
    }

    #[test]
    fn band_boundaries_fall_through() {
        // Dyadic sea level and thresholds keep every elevation fraction
        // exact, so these hit the comparisons precisely on the boundary
        let sea = 0.5;
        let (beach, rock, snow) = (0.0625, 0.25, 0.5);
        let at_e = |e: f64| sea + e * (1.0 - sea);
        // e == beach_th is not beach, e == rock_th is not rock,
        // e == snow_th is not snow
        let on_beach = biome_color(at_e(beach), 0.5, 0.5, sea, beach, rock, snow);
        assert_eq!(on_beach, BIOME_PALETTE[1][1]);
        let on_rock = biome_color(at_e(rock), 0.5, 0.5, sea, beach, rock, snow);
        assert_eq!(on_rock, BIOME_PALETTE[1][1]);
        let on_snow = biome_color(at_e(snow), 0.5, 0.5, sea, beach, rock, snow);
        assert_eq!(on_snow, ROCK_COLOR);
    }

    #[test]
    fn climate_zones_select_palette_cells() {
        let at_e = |e: f64| SEA + e * (1.0 - SEA);
        let h = at_e(0.20);
        assert_eq!(classify(h, 0.1, 0.1), BIOME_PALETTE[0][0]);
        assert_eq!(classify(h, 0.9, 0.1), BIOME_PALETTE[0][2]);
        assert_eq!(classify(h, 0.1, 0.9), BIOME_PALETTE[2][0]);
        assert_eq!(classify(h, 0.9, 0.9), BIOME_PALETTE[2][2]);
        // zone boundaries bump upward
        assert_eq!(classify(h, 0.33, 0.66), BIOME_PALETTE[2][1]);
    }

    #[test]
    fn degenerate_snow_below_rock_never_panics() {
        // snow_th < rock_th: snow shadows the upper rock band, but every
        // input still classifies
        let at_e = |e: f64| SEA + e * (1.0 - SEA);
        let c = biome_color(at_e(0.5), 0.5, 0.5, SEA, BEACH, 0.6, 0.2);
        assert_eq!(c, SNOW_COLOR);
    }
}
