//storage holds the MongoDB schema & async CRUD for map save slots

pub mod models;

use crate::models::SaveSlotDoc;
use bson::doc;
use futures_util::stream::TryStreamExt;
use mongodb::{
    Client, Collection, IndexModel,
    options::{ClientOptions, IndexOptions},
};

// Fixed number of named save slots
pub const SLOT_COUNT: i32 = 10;

pub struct SlotStorage {
    col: Collection<SaveSlotDoc>,
}

impl SlotStorage {
    // Initialize the MongoDB collection
    pub async fn init(uri: &str, db_name: &str, col_name: &str) -> mongodb::error::Result<Self> {
        let mut opts = ClientOptions::parse(uri).await?;
        opts.app_name = Some("TerramapStorage".to_string());
        let client = Client::with_options(opts)?;
        let col = client.database(db_name).collection(col_name);

        // One document per slot index
        let index_model = IndexModel::builder()
            .keys(doc! { "slot": 1 })
            .options(IndexOptions::builder().unique(true).build())
            .build();
        col.create_index(index_model).await?;

        Ok(Self { col })
    }

    // Write a slot, replacing whatever was stored there before.
    pub async fn save(&self, doc_obj: SaveSlotDoc) -> mongodb::error::Result<()> {
        let _ = self.col.delete_one(doc! { "slot": doc_obj.slot }).await;
        self.col.insert_one(doc_obj).await?;
        Ok(())
    }

    pub async fn read(&self, slot: i32) -> mongodb::error::Result<Option<SaveSlotDoc>> {
        self.col.find_one(doc! { "slot": slot }).await
    }

    pub async fn delete(&self, slot: i32) -> mongodb::error::Result<()> {
        self.col.delete_one(doc! { "slot": slot }).await?;
        Ok(())
    }

    // All occupied slots, in slot order.
    pub async fn list(&self) -> mongodb::error::Result<Vec<SaveSlotDoc>> {
        let mut cursor = self.col.find(doc! {}).sort(doc! { "slot": 1 }).await?;
        let mut slots = Vec::new();
        while let Some(doc) = cursor.try_next().await? {
            slots.push(doc);
        }
        Ok(slots)
    }

    // Empty every slot.
    pub async fn clear_all(&self) -> mongodb::error::Result<()> {
        self.col.delete_many(doc! {}).await?;
        Ok(())
    }
}
