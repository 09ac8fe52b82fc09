use crate::field::ScalarField;

// Linear interpolation
#[inline]
pub fn lerp(a: f64, b: f64, t: f64) -> f64 {
    a + (b - a) * t
}

// Cubic easing t²(3−2t): zero slope at t=0 and t=1, which is what keeps
// value noise C¹-continuous across lattice cell boundaries
#[inline]
pub fn smoothstep(t: f64) -> f64 {
    t * t * (3.0 - 2.0 * t)
}

#[inline]
pub fn clamp01(x: f64) -> f64 {
    x.clamp(0.0, 1.0)
}

// Sea level is used as a divisor on both sides of the shoreline;
// keep it strictly inside (0, 1)
#[inline]
pub fn clamp_sea_level(sea_level: f64) -> f64 {
    sea_level.clamp(1e-6, 1.0 - 1e-6)
}

// Convert a scalar field into a grayscale byte buffer (one byte per cell),
// for debug dumps of the intermediate height/moisture/temperature fields
pub fn to_gray_image(field: &ScalarField) -> Vec<u8> {
    field
        .as_slice()
        .iter()
        .map(|&v| (clamp01(v as f64) * 255.0).round() as u8)
        .collect()
}
