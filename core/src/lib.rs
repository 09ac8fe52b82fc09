// core holds the deterministic map generation pipeline:
// lattice hash, value noise, fBm, continent shaping, climate,
// biome classification and relief shading.
pub mod biome;
pub mod climate;
pub mod continent;
pub mod fbm;
pub mod field;
pub mod hash;
pub mod params;
pub mod pipeline;
pub mod shade;
pub mod utils;
pub mod value_noise;

pub use fbm::Fbm2D;
pub use field::ScalarField;
pub use params::GenerationParams;
pub use pipeline::{MapGenerator, TerrainFields};
pub use value_noise::ValueNoise2D;

// 2D noise source that can be sampled at arbitrary (x, y) coordinates.
// Everything in the pipeline that consumes noise goes through this seam,
// so stages can be composed without caring which generator feeds them.
pub trait NoiseGenerator {
    // Sample noise at (x, y).
    fn get2(&self, x: f64, y: f64) -> f64;
}
