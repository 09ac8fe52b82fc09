#[test]
fn test_slot_roundtrip() {
    // Bring things into scope
    use terramap_core::{GenerationParams, MapGenerator};
    use terramap_storage::SlotStorage;
    use terramap_storage::models::{SaveSlotDoc, SlotParams};
    use tokio::runtime::Builder;

    // Build a single-threaded Tokio runtime
    let rt = Builder::new_current_thread()
        .enable_all()
        .build()
        .expect("failed to build Tokio runtime");

    // Run async workflow inside it
    rt.block_on(async {
        // Render a small map and encode the thumbnail
        let (width, height) = (64u32, 64u32);
        let params = GenerationParams::default();
        let rgba = MapGenerator::new(params.clone()).generate(width as usize, height as usize);

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

        let doc = SaveSlotDoc {
            id: None,
            slot: 9,
            label: format!("Seed {}", params.seed),
            saved_at: bson::DateTime::now(),
            params: SlotParams::from(&params),
            thumbnail: bson::Binary {
                subtype: bson::spec::BinarySubtype::Generic,
                bytes: png.clone(),
            },
            width,
            height,
        };

        // Initialize storage (MongoDB must be running)
        let storage = SlotStorage::init("mongodb://localhost:27017", "terramap_db", "save_slots")
            .await
            .expect("storage init failed");

        // Insert, read back, assert
        storage.save(doc).await.expect("save failed");
        let found = storage
            .read(9)
            .await
            .expect("read failed")
            .expect("slot not found");

        assert_eq!(found.params.seed, params.seed);
        assert_eq!(found.thumbnail.bytes, png);
        assert_eq!(found.width, width);

        // Listing includes the slot, in order
        let all = storage.list().await.expect("list failed");
        assert!(all.iter().any(|d| d.slot == 9));

        // Clean up
        storage.delete(9).await.expect("delete failed");
        assert!(storage.read(9).await.expect("read failed").is_none());
    });
}
