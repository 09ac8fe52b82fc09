use crate::field::ScalarField;

// Relief shading: a Lambertian hillshade over the finished height field,
// composited with the biome color, a water dimming factor, an ambient
// floor and a fixed gamma.

// Vertical exaggeration of the height gradients
pub const Z_SCALE: f64 = 8.0;
// Minimum light level; shading modulates only the remainder
pub const AMBIENT: f64 = 0.55;
// Gamma applied to the final light term
pub const LIGHT_GAMMA: f64 = 0.75;
// Water receives a dimmed shade contribution
pub const WATER_SHADE_MUL: f64 = 0.4;
// Z component of the (unnormalized) light direction
const LIGHT_Z: f64 = 0.75;

// Surface-normal lighting at cell (x, y): central differences with
// edge-replicated neighbors, normal against a normalized light vector at
// `light_angle_deg`. Returns the clamped dot product in [0, 1].
pub fn hillshade(
    height: &ScalarField,
    x: usize,
    y: usize,
    light_angle_deg: f64,
    z_scale: f64,
) -> f64 {
    let (xi, yi) = (x as i64, y as i64);
    let h_left = height.get_clamped(xi - 1, yi) as f64;
    let h_right = height.get_clamped(xi + 1, yi) as f64;
    let h_up = height.get_clamped(xi, yi - 1) as f64;
    let h_down = height.get_clamped(xi, yi + 1) as f64;

    let dx = h_right - h_left;
    let dy = h_down - h_up;

    // Surface normal
    let mut nx = -dx * z_scale;
    let mut ny = -dy * z_scale;
    let mut nz = 1.0;
    let inv_n = 1.0 / (nx * nx + ny * ny + nz * nz).sqrt();
    nx *= inv_n;
    ny *= inv_n;
    nz *= inv_n;

    // Light direction
    let a = light_angle_deg.to_radians();
    let mut lx = a.cos();
    let mut ly = a.sin();
    let mut lz = LIGHT_Z;
    let inv_l = 1.0 / (lx * lx + ly * ly + lz * lz).sqrt();
    lx *= inv_l;
    ly *= inv_l;
    lz *= inv_l;

    (nx * lx + ny * ly + nz * lz).max(0.0)
}

// Composite a biome color with a shade term into one RGBA pixel.
pub fn composite(rgb: [u8; 3], shade: f64, is_water: bool, shade_strength: f64) -> [u8; 4] {
    let water_mul = if is_water { WATER_SHADE_MUL } else { 1.0 };
    let raw_light = AMBIENT + shade * shade_strength * water_mul * (1.0 - AMBIENT);
    let light = raw_light.powf(LIGHT_GAMMA);

    let apply = |c: u8| (c as f64 * light).floor().clamp(0.0, 255.0) as u8;
    [apply(rgb[0]), apply(rgb[1]), apply(rgb[2]), 255]
}
