use image::{GrayImage, Luma};
use std::path::Path;
use terramap_core::{GenerationParams, MapGenerator, ScalarField, utils::to_gray_image};

// Dump one scalar field as a grayscale PNG
fn save_field(field: &ScalarField, filename: &str) {
    let gray = to_gray_image(field);
    let (w, h) = (field.width() as u32, field.height() as u32);
    let mut img = GrayImage::new(w, h);
    for y in 0..h {
        for x in 0..w {
            img.put_pixel(x, y, Luma([gray[(y * w + x) as usize]]));
        }
    }
    img.save(Path::new(filename)).unwrap();
    println!("Saved {}", filename);
}

fn main() {
    // Write the three intermediate fields of the default map, useful for
    // eyeballing each pipeline stage in isolation
    let size = 256;
    let fields = MapGenerator::new(GenerationParams::default()).generate_fields(size, size);

    save_field(&fields.height, "height.png");
    save_field(&fields.moisture, "moisture.png");
    save_field(&fields.temperature, "temperature.png");
}
