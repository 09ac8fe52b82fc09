use std::collections::HashMap;
use std::io::Cursor;
use std::time::Instant;

use eframe::{App, Frame, NativeOptions, egui, run_native};
use egui::{ColorImage, TextureHandle, Vec2};
use terramap_core::{GenerationParams, MapGenerator};
use terramap_storage::models::{SaveSlotDoc, SlotParams};
use terramap_storage::{SLOT_COUNT, SlotStorage};

const MONGO_URI: &str = "mongodb://localhost:27017";
const MONGO_DB: &str = "terramap_db";
const MONGO_COLLECTION: &str = "save_slots";

// Minimum gap the UI keeps between the rock and snow thresholds
const SNOW_ROCK_GAP: f64 = 0.01;

// Deferred slot actions, executed after the saves window is laid out
enum SlotAction {
    Save(i32),
    Load(i32),
    Delete(i32),
    ClearAll,
}

struct MapApp {
    // parameters (UI state, clamped in collect_params)
    seed: i32,
    scale: f64,
    octaves: u32,
    persistence: f64,
    lacunarity: f64,
    sea_level: f64,
    falloff_strength: f64,
    light_angle_deg: f64,
    shade_strength: f64,
    moisture_scale: f64,
    moisture_strength: f64,
    latitude_gain: f64,
    lapse_rate: f64,
    beach_threshold: f64,
    rock_threshold: f64,
    snow_threshold: f64,

    // square map edge length in cells
    map_size: usize,
    // regenerate on every parameter change
    realtime: bool,

    // generated texture and the buffer it came from
    texture: Option<TextureHandle>,
    last_rgba: Option<Vec<u8>>,
    // what the current texture was generated with, for realtime diffing
    last_generated: Option<(GenerationParams, usize)>,

    // timing & status
    last_duration: Option<f32>,
    status_message: String,

    // saves drawer
    saves_open: bool,
    slots: Vec<Option<SaveSlotDoc>>,
    slot_textures: HashMap<i32, TextureHandle>,
}

impl Default for MapApp {
    fn default() -> Self {
        let p = GenerationParams::default();
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
            map_size: 512,
            realtime: false,
            texture: None,
            last_rgba: None,
            last_generated: None,
            last_duration: None,
            status_message: String::new(),
            saves_open: false,
            slots: vec![],
            slot_textures: HashMap::new(),
        }
    }
}

impl MapApp {
    // Clamp every control to its documented range and enforce the
    // snow-above-rock ordering the core assumes. The core never
    // revalidates, so everything must be sane here.
    fn collect_params(&mut self) -> GenerationParams {
        if self.snow_threshold < self.rock_threshold + SNOW_ROCK_GAP {
            self.snow_threshold = (self.rock_threshold + SNOW_ROCK_GAP).min(0.99);
        }

        GenerationParams {
            seed: self.seed,
            scale: self.scale.clamp(2.0, 2048.0),
            octaves: self.octaves.clamp(1, 12),
            persistence: self.persistence.clamp(0.0, 1.0),
            lacunarity: self.lacunarity.clamp(1.0, 10.0),
            sea_level: self.sea_level.clamp(0.0, 1.0),
            falloff_strength: self.falloff_strength.clamp(0.0, 5.0),
            light_angle_deg: self.light_angle_deg.clamp(0.0, 360.0),
            shade_strength: self.shade_strength.clamp(0.0, 1.0),
            moisture_scale: self.moisture_scale.clamp(0.0, 2000.0),
            moisture_strength: self.moisture_strength.clamp(0.0, 3.0),
            latitude_gain: self.latitude_gain.clamp(0.0, 3.0),
            lapse_rate: self.lapse_rate.clamp(0.0, 2.0),
            beach_threshold: self.beach_threshold.clamp(0.0, 0.3),
            rock_threshold: self.rock_threshold.clamp(0.0, 1.0),
            snow_threshold: self.snow_threshold.clamp(0.0, 1.0),
        }
    }

    fn apply_params(&mut self, p: &GenerationParams) {
        self.seed = p.seed;
        self.scale = p.scale;
        self.octaves = p.octaves;
        self.persistence = p.persistence;
        self.lacunarity = p.lacunarity;
        self.sea_level = p.sea_level;
        self.falloff_strength = p.falloff_strength;
        self.light_angle_deg = p.light_angle_deg;
        self.shade_strength = p.shade_strength;
        self.moisture_scale = p.moisture_scale;
        self.moisture_strength = p.moisture_strength;
        self.latitude_gain = p.latitude_gain;
        self.lapse_rate = p.lapse_rate;
        self.beach_threshold = p.beach_threshold;
        self.rock_threshold = p.rock_threshold;
        self.snow_threshold = p.snow_threshold;
    }

    fn regenerate(&mut self, ctx: &egui::Context) {
        let params = self.collect_params();
        let size = self.map_size;

        let start = Instant::now();
        let rgba = MapGenerator::new(params.clone()).generate(size, size);
        self.last_duration = Some(start.elapsed().as_secs_f32() * 1000.0);

        let color_image = ColorImage::from_rgba_unmultiplied([size, size], &rgba);
        self.texture = Some(ctx.load_texture("terrain", color_image, egui::TextureOptions::NEAREST));
        self.last_rgba = Some(rgba);
        self.last_generated = Some((params, size));
        self.status_message = format!(
            "Generated in {:.2} ms (seed {})",
            self.last_duration.unwrap_or(0.0),
            self.seed
        );
        ctx.request_repaint();
    }

    fn save_png(&mut self) {
        let Some(rgba) = &self.last_rgba else {
            self.status_message = "Nothing to save yet".into();
            return;
        };
        let Some((_, size)) = &self.last_generated else {
            return;
        };
        let size = *size;

        if let Some(path) = rfd::FileDialog::new()
            .set_file_name(format!("map_seed_{}.png", self.seed))
            .save_file()
        {
            match image::save_buffer(
                &path,
                rgba,
                size as u32,
                size as u32,
                image::ColorType::Rgba8,
            ) {
                Ok(()) => self.status_message = format!("Saved {}", path.display()),
                Err(e) => self.status_message = format!("PNG save error: {}", e),
            }
        }
    }

    // Fetch all occupied slots and decode their thumbnails into textures.
    fn refresh_slots(&mut self, ctx: &egui::Context) {
        let rt = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .expect("failed to build Tokio runtime");

        self.slots = vec![];
        self.slots.resize_with(SLOT_COUNT as usize, || None);
        self.slot_textures.clear();

        match rt.block_on(SlotStorage::init(MONGO_URI, MONGO_DB, MONGO_COLLECTION)) {
            Ok(storage) => match rt.block_on(storage.list()) {
                Ok(docs) => {
                    for doc in docs {
                        let slot = doc.slot;
                        if !(0..SLOT_COUNT).contains(&slot) {
                            continue;
                        }
                        if let Ok(img) = image::load_from_memory(&doc.thumbnail.bytes) {
                            let rgba = img.to_rgba8();
                            let (w, h) = (rgba.width() as usize, rgba.height() as usize);
                            let color_image =
                                ColorImage::from_rgba_unmultiplied([w, h], rgba.as_raw());
                            self.slot_textures.insert(
                                slot,
                                ctx.load_texture(
                                    format!("slot_{}", slot),
                                    color_image,
                                    egui::TextureOptions::LINEAR,
                                ),
                            );
                        }
                        self.slots[slot as usize] = Some(doc);
                    }
                }
                Err(e) => self.status_message = format!("DB list error: {}", e),
            },
            Err(e) => self.status_message = format!("DB init error: {}", e),
        }
    }

    fn save_slot(&mut self, slot: i32, ctx: &egui::Context) {
        let (Some(rgba), Some((params, size))) = (&self.last_rgba, &self.last_generated) else {
            self.status_message = "Generate a map before saving a slot".into();
            return;
        };
        let size = *size as u32;

        let mut png = Vec::new();
        if let Err(e) = image::write_buffer_with_format(
            &mut Cursor::new(&mut png),
            rgba,
            size,
            size,
            image::ExtendedColorType::Rgba8,
            image::ImageFormat::Png,
        ) {
            self.status_message = format!("Thumbnail encode error: {}", e);
            return;
        }

        let doc = SaveSlotDoc {
            id: None,
            slot,
            label: format!("Seed {}", params.seed),
            saved_at: bson::DateTime::now(),
            params: SlotParams::from(params),
            thumbnail: bson::Binary {
                subtype: bson::spec::BinarySubtype::Generic,
                bytes: png,
            },
            width: size,
            height: size,
        };

        let rt = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .expect("failed to build Tokio runtime");
        match rt.block_on(SlotStorage::init(MONGO_URI, MONGO_DB, MONGO_COLLECTION)) {
            Ok(storage) => {
                self.status_message = match rt.block_on(storage.save(doc)) {
                    Ok(()) => format!("Saved slot {}", slot + 1),
                    Err(e) => format!("DB error: {}", e),
                };
            }
            Err(e) => self.status_message = format!("DB init error: {}", e),
        }
        self.refresh_slots(ctx);
    }

    fn load_slot(&mut self, slot: i32, ctx: &egui::Context) {
        let Some(Some(doc)) = self.slots.get(slot as usize) else {
            return;
        };
        // Loading reuses only the parameters; the map is regenerated,
        // never restored from the stored thumbnail
        let params = GenerationParams::from(&doc.params);
        self.apply_params(&params);
        self.regenerate(ctx);
        self.saves_open = false;
        self.status_message = format!("Loaded slot {}", slot + 1);
    }

    fn delete_slot(&mut self, slot: i32, ctx: &egui::Context) {
        let rt = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .expect("failed to build Tokio runtime");
        match rt.block_on(SlotStorage::init(MONGO_URI, MONGO_DB, MONGO_COLLECTION)) {
            Ok(storage) => {
                self.status_message = match rt.block_on(storage.delete(slot)) {
                    Ok(()) => format!("Deleted slot {}", slot + 1),
                    Err(e) => format!("DB error: {}", e),
                };
            }
            Err(e) => self.status_message = format!("DB init error: {}", e),
        }
        self.refresh_slots(ctx);
    }

    fn clear_all_slots(&mut self, ctx: &egui::Context) {
        let rt = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .expect("failed to build Tokio runtime");
        match rt.block_on(SlotStorage::init(MONGO_URI, MONGO_DB, MONGO_COLLECTION)) {
            Ok(storage) => {
                self.status_message = match rt.block_on(storage.clear_all()) {
                    Ok(()) => "Cleared all slots".into(),
                    Err(e) => format!("DB error: {}", e),
                };
            }
            Err(e) => self.status_message = format!("DB init error: {}", e),
        }
        self.refresh_slots(ctx);
    }

    fn saves_window(&mut self, ctx: &egui::Context) {
        let mut open = self.saves_open;
        let mut action: Option<SlotAction> = None;

        egui::Window::new("Saves")
            .open(&mut open)
            .resizable(true)
            .show(ctx, |ui| {
                if ui.button("Clear all").clicked() {
                    action = Some(SlotAction::ClearAll);
                }
                ui.separator();

                egui::ScrollArea::vertical().show(ui, |ui| {
                    for slot in 0..SLOT_COUNT {
                        let doc = self.slots.get(slot as usize).and_then(|d| d.as_ref());
                        ui.group(|ui| match doc {
                            None => {
                                ui.label(format!("Slot {} — empty", slot + 1));
                                if ui.button("Save here").clicked() {
                                    action = Some(SlotAction::Save(slot));
                                }
                            }
                            Some(doc) => {
                                ui.label(format!("Slot {} — {}", slot + 1, doc.label));
                                let ts = doc
                                    .saved_at
                                    .try_to_rfc3339_string()
                                    .unwrap_or_default();
                                ui.label(ts);
                                if let Some(tex) = self.slot_textures.get(&slot) {
                                    ui.image((tex.id(), Vec2::new(96.0, 96.0)));
                                }
                                ui.horizontal(|ui| {
                                    if ui.button("Load").clicked() {
                                        action = Some(SlotAction::Load(slot));
                                    }
                                    if ui.button("Overwrite").clicked() {
                                        action = Some(SlotAction::Save(slot));
                                    }
                                    if ui.button("Delete").clicked() {
                                        action = Some(SlotAction::Delete(slot));
                                    }
                                });
                            }
                        });
                    }
                });
            });

        self.saves_open = open;

        match action {
            Some(SlotAction::Save(slot)) => self.save_slot(slot, ctx),
            Some(SlotAction::Load(slot)) => self.load_slot(slot, ctx),
            Some(SlotAction::Delete(slot)) => self.delete_slot(slot, ctx),
            Some(SlotAction::ClearAll) => self.clear_all_slots(ctx),
            None => {}
        }
    }
}

impl App for MapApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut Frame) {
        egui::SidePanel::left("controls").show(ctx, |ui| {
            ui.heading("Terrain Map Generator");
            ui.separator();

            ui.label("Seed");
            ui.horizontal(|ui| {
                ui.add(egui::DragValue::new(&mut self.seed).speed(1.0));
                if ui.button("Random").clicked() {
                    // cheap entropy for a UI button; generation itself
                    // stays fully seed-deterministic
                    let nanos = std::time::SystemTime::now()
                        .duration_since(std::time::UNIX_EPOCH)
                        .unwrap_or_default()
                        .subsec_nanos();
                    self.seed = (nanos % 1001) as i32;
                }
            });

            ui.label("Map size");
            ui.add(egui::Slider::new(&mut self.map_size, 128..=1024).step_by(64.0));

            ui.separator();
            ui.label("Terrain noise");
            ui.add(egui::Slider::new(&mut self.scale, 2.0..=2048.0).text("Scale"));
            ui.add(egui::Slider::new(&mut self.octaves, 1..=12).text("Octaves"));
            ui.add(egui::Slider::new(&mut self.persistence, 0.0..=1.0).text("Persistence"));
            ui.add(egui::Slider::new(&mut self.lacunarity, 1.0..=10.0).text("Lacunarity"));

            ui.separator();
            ui.label("Continent");
            ui.add(egui::Slider::new(&mut self.sea_level, 0.0..=1.0).text("Sea level"));
            ui.add(egui::Slider::new(&mut self.falloff_strength, 0.0..=5.0).text("Falloff"));

            ui.separator();
            ui.label("Lighting");
            ui.add(
                egui::Slider::new(&mut self.light_angle_deg, 0.0..=360.0)
                    .text("Light angle °"),
            );
            ui.add(egui::Slider::new(&mut self.shade_strength, 0.0..=1.0).text("Shade"));

            ui.separator();
            ui.label("Climate");
            ui.add(egui::Slider::new(&mut self.moisture_scale, 0.0..=2000.0).text("Moisture scale"));
            ui.add(
                egui::Slider::new(&mut self.moisture_strength, 0.0..=3.0)
                    .text("Moisture contrast"),
            );
            ui.add(egui::Slider::new(&mut self.latitude_gain, 0.0..=3.0).text("Latitude gain"));
            ui.add(egui::Slider::new(&mut self.lapse_rate, 0.0..=2.0).text("Lapse rate"));

            ui.separator();
            ui.label("Relief bands");
            ui.add(egui::Slider::new(&mut self.beach_threshold, 0.0..=0.3).text("Beach"));
            ui.add(egui::Slider::new(&mut self.rock_threshold, 0.0..=1.0).text("Rock"));
            ui.add(egui::Slider::new(&mut self.snow_threshold, 0.0..=1.0).text("Snow"));
            if ui.button("Reset bands").clicked() {
                self.beach_threshold = 0.06;
                self.rock_threshold = 0.45;
                self.snow_threshold = 0.60;
            }

            ui.separator();
            ui.checkbox(&mut self.realtime, "Realtime");

            if ui.button("Generate").clicked() {
                self.regenerate(ctx);
            }
            if ui.button("Save PNG…").clicked() {
                self.save_png();
            }
            if ui.button("Saves…").clicked() {
                self.saves_open = true;
                self.refresh_slots(ctx);
            }

            ui.separator();
            ui.label(&self.status_message);
        });

        // In realtime mode any control change regenerates immediately
        if self.realtime {
            let current = (self.collect_params(), self.map_size);
            let stale = match &self.last_generated {
                Some(last) => *last != current,
                None => true,
            };
            if stale {
                self.regenerate(ctx);
            }
        }

        if self.saves_open {
            self.saves_window(ctx);
        }

        // central display
        egui::CentralPanel::default().show(ctx, |ui| {
            if let Some(tex) = &self.texture {
                let available = ui.available_size();
                let side = available.x.min(available.y);
                ui.image((tex.id(), Vec2::new(side, side)));
            } else {
                ui.centered_and_justified(|ui| {
                    ui.label("Click “Generate” to start");
                });
            }
        });
    }
}

fn main() {
    let opts = NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1000.0, 720.0])
            .with_min_inner_size([480.0, 360.0]),
        ..Default::default()
    };
    run_native(
        "Terramap",
        opts,
        Box::new(|_cc| Ok(Box::new(MapApp::default()))),
    )
    .unwrap();
}
