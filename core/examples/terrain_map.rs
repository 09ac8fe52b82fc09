use std::time::Instant;

use terramap_core::{GenerationParams, MapGenerator};

fn main() {
    // Render the default parameter set at 512×512 and save it
    let (width, height) = (512usize, 512usize);
    let params = GenerationParams::default();
    let seed = params.seed;

    let start = Instant::now();
    let rgba = MapGenerator::new(params).generate(width, height);
    let elapsed = start.elapsed().as_secs_f32() * 1000.0;

    let filename = format!("terrain_seed_{}.png", seed);
    image::save_buffer(
        &filename,
        &rgba,
        width as u32,
        height as u32,
        image::ColorType::Rgba8,
    )
    .unwrap();
    println!("Saved {} ({:.2} ms)", filename, elapsed);
}
