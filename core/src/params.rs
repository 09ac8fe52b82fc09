// Flat parameter record consumed once per generation call.
// The caller (UI or tooling) validates and clamps every field to its
// documented range before handing it over; the pipeline assumes the
// record is well formed and never revalidates.
#[derive(Debug, Clone, PartialEq)]
pub struct GenerationParams {
    // Identifies one deterministic random stream
    pub seed: i32,
    // Lattice spacing of the base terrain noise, in cells
    pub scale: f64,
    // Terrain octave count, ≥ 1
    pub octaves: u32,
    // Octave amplitude decay, [0, 1]
    pub persistence: f64,
    // Octave frequency growth, ≥ 1
    pub lacunarity: f64,
    // Water level in [0, 1]
    pub sea_level: f64,
    // Steepness multiplier of the continental edge falloff
    pub falloff_strength: f64,
    // Light azimuth in degrees, [0, 360)
    pub light_angle_deg: f64,
    // Hillshade contribution, [0, 1]
    pub shade_strength: f64,
    // Lattice spacing of the moisture noise
    pub moisture_scale: f64,
    // Moisture contrast multiplier
    pub moisture_strength: f64,
    // Latitude temperature gain
    pub latitude_gain: f64,
    // Elevation temperature lapse rate
    pub lapse_rate: f64,
    // Elevation-fraction band thresholds above sea level.
    // Callers keep snow_threshold ≥ rock_threshold + 0.01.
    pub beach_threshold: f64,
    pub rock_threshold: f64,
    pub snow_threshold: f64,
}

impl Default for GenerationParams {
    fn default() -> Self {
        Self {
            seed: 38,
            scale: 64.0,
            octaves: 5,
            persistence: 0.5,
            lacunarity: 2.0,
            sea_level: 0.45,
            falloff_strength: 0.75,
            light_angle_deg: 315.0,
            shade_strength: 1.0,
            moisture_scale: 180.0,
            moisture_strength: 1.1,
            latitude_gain: 1.0,
            lapse_rate: 0.55,
            beach_threshold: 0.06,
            rock_threshold: 0.45,
            snow_threshold: 0.60,
        }
    }
}
