use image::{Rgb, RgbImage};
use palette::{Gradient, LinSrgb};
use std::path::Path;
use terramap_core::shade::{Z_SCALE, hillshade};
use terramap_core::{GenerationParams, MapGenerator};

// Alternative rendering of the same height field: a smooth color gradient
// instead of the discrete biome classifier, lit with the same hillshade.
// Handy for comparing the classifier's banding against a continuous ramp.
fn main() {
    let size = 512usize;
    let params = GenerationParams::default();
    let light_angle = params.light_angle_deg;
    let fields = MapGenerator::new(params).generate_fields(size, size);

    // Deep water to beach to grass to rock to snow
    let gradient = Gradient::with_domain(vec![
        (0.00, LinSrgb::new(0.0, 0.0, 0.5)),
        (0.45, LinSrgb::new(0.8, 0.8, 0.5)),
        (0.55, LinSrgb::new(0.1, 0.6, 0.2)),
        (0.80, LinSrgb::new(0.5, 0.4, 0.3)),
        (1.00, LinSrgb::new(1.0, 1.0, 1.0)),
    ]);

    let mut img = RgbImage::new(size as u32, size as u32);
    for y in 0..size {
        for x in 0..size {
            let h = fields.height.get(x, y);
            let col: LinSrgb = gradient.get(h);
            let rgb = col.into_format::<u8>();
            let light = (hillshade(&fields.height, x, y, light_angle, Z_SCALE) * 0.5 + 0.5)
                .clamp(0.0, 1.0) as f32;
            img.put_pixel(
                x as u32,
                y as u32,
                Rgb([
                    (rgb.red as f32 * light) as u8,
                    (rgb.green as f32 * light) as u8,
                    (rgb.blue as f32 * light) as u8,
                ]),
            );
        }
    }
    img.save(Path::new("gradient_relief.png")).unwrap();
    println!("Saved gradient_relief.png");
}
