use terramap_core::{GenerationParams, MapGenerator};
use terramap_storage::SlotStorage;
use terramap_storage::models::{SaveSlotDoc, SlotParams};
use tokio;

#[tokio::main]
async fn main() -> mongodb::error::Result<()> {
    // Render a 256×256 map with the default parameters
    let (width, height) = (256u32, 256u32);
    let params = GenerationParams::default();
    let rgba = MapGenerator::new(params.clone()).generate(width as usize, height as usize);

    // Encode the thumbnail
    let mut png = Vec::new();
    image::write_buffer_with_format(
        &mut std::io::Cursor::new(&mut png),
        &rgba,
        width,
        height,
        image::ExtendedColorType::Rgba8,
        image::ImageFormat::Png,
    )
    .expect("png encode failed");

    // Build the document
    let doc = SaveSlotDoc {
        id: None,
        slot: 0,
        label: format!("Seed {}", params.seed),
        saved_at: bson::DateTime::now(),
        params: SlotParams::from(&params),
        thumbnail: bson::Binary {
            subtype: bson::spec::BinarySubtype::Generic,
            bytes: png,
        },
        width,
        height,
    };

    // Init storage
    let storage = SlotStorage::init("mongodb://localhost:27017", "terramap_db", "save_slots").await?;

    // Insert & read back
    storage.save(doc).await?;
    if let Some(found) = storage.read(0).await? {
        println!(
            "Round-trip success: slot 0 = '{}', {} thumbnail bytes",
            found.label,
            found.thumbnail.bytes.len()
        );
    } else {
        println!("Slot not found!");
    }

    // Clean up
    storage.delete(0).await?;

    Ok(())
}
