use bson::oid::ObjectId;
use serde::{Deserialize, Serialize};
use terramap_core::GenerationParams;

// Serde/BSON mirror of the core parameter record. Kept separate so the
// core stays serde-free and the document schema can evolve on its own.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SlotParams {
    pub seed: i32,
    pub scale: f64,
    pub octaves: u32,
    pub persistence: f64,
    pub lacunarity: f64,
    pub sea_level: f64,
    pub falloff_strength: f64,
    pub light_angle_deg: f64,
    pub shade_strength: f64,
    pub moisture_scale: f64,
    pub moisture_strength: f64,
    pub latitude_gain: f64,
    pub lapse_rate: f64,
    pub beach_threshold: f64,
    pub rock_threshold: f64,
    pub snow_threshold: f64,
}

impl From<&GenerationParams> for SlotParams {
    fn from(p: &GenerationParams) -> Self {
        Self {
            seed: p.seed,
            scale: p.scale,
            octaves: p.octaves,
            persistence: p.persistence,
            lacunarity: p.lacunarity,
            sea_level: p.sea_level,
            falloff_strength: p.falloff_strength,
            light_angle_deg: p.light_angle_deg,
            shade_strength: p.shade_strength,
            moisture_scale: p.moisture_scale,
            moisture_strength: p.moisture_strength,
            latitude_gain: p.latitude_gain,
            lapse_rate: p.lapse_rate,
            beach_threshold: p.beach_threshold,
            rock_threshold: p.rock_threshold,
            snow_threshold: p.snow_threshold,
        }
    }
}

impl From<&SlotParams> for GenerationParams {
    fn from(p: &SlotParams) -> Self {
        Self {
            seed: p.seed,
            scale: p.scale,
            octaves: p.octaves,
            persistence: p.persistence,
            lacunarity: p.lacunarity,
            sea_level: p.sea_level,
            falloff_strength: p.falloff_strength,
            light_angle_deg: p.light_angle_deg,
            shade_strength: p.shade_strength,
            moisture_scale: p.moisture_scale,
            moisture_strength: p.moisture_strength,
            latitude_gain: p.latitude_gain,
            lapse_rate: p.lapse_rate,
            beach_threshold: p.beach_threshold,
            rock_threshold: p.rock_threshold,
            snow_threshold: p.snow_threshold,
        }
    }
}

// One named save slot: the parameters that produced a map plus a
// PNG-encoded thumbnail of the result.
#[derive(Debug, Serialize, Deserialize)]
pub struct SaveSlotDoc {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none", default)]
    pub id: Option<ObjectId>,
    // Slot index in [0, SLOT_COUNT)
    pub slot: i32,
    pub label: String,
    pub saved_at: bson::DateTime,
    pub params: SlotParams,
    // PNG bytes of the rendered map
    pub thumbnail: bson::Binary,
    pub width: u32,
    pub height: u32,
}
