// Row-major W×H grid of f32 samples in [0, 1].
// One of these holds each of the height, moisture and temperature fields
// for the duration of a single generation call. Values are computed in
// f64 and stored as f32; downstream stages read the rounded values.
pub struct ScalarField {
    width: usize,
    height: usize,
    data: Vec<f32>,
}

impl ScalarField {
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            data: vec![0.0; width * height],
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    #[inline]
    pub fn get(&self, x: usize, y: usize) -> f32 {
        self.data[y * self.width + x]
    }

    #[inline]
    pub fn set(&mut self, x: usize, y: usize, v: f32) {
        self.data[y * self.width + x] = v;
    }

    // Neighbor access with edge replication: out-of-range indices clamp
    // to the border cell, so gradient stencils never read out of bounds.
    #[inline]
    pub fn get_clamped(&self, x: i64, y: i64) -> f32 {
        let cx = x.clamp(0, self.width as i64 - 1) as usize;
        let cy = y.clamp(0, self.height as i64 - 1) as usize;
        self.data[cy * self.width + cx]
    }

    // Flat row-major view, for storage and image buffers
    pub fn as_slice(&self) -> &[f32] {
        &self.data
    }
}
