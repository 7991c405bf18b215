// classify.rs - Color sample to grass height
//
// Height is the distance of a pixel from the "empty" color, normalized by the
// distance from white to black. Near-empty colors snap to exactly 0.
// Must be pure: merging compares heights with ==.

use image::Rgba;

use crate::config::ClassifierConfig;

/// Maps one pixel to a scalar height. 0 means "no grass".
pub trait Classifier: Sync {
    fn classify(&self, sample: Rgba<u8>) -> f64;
}

impl<F> Classifier for F
where
    F: Fn(Rgba<u8>) -> f64 + Sync,
{
    fn classify(&self, sample: Rgba<u8>) -> f64 {
        self(sample)
    }
}

/// Euclidean RGB distance from the empty color. Alpha is ignored.
#[derive(Debug, Clone, Copy)]
pub struct DistanceClassifier {
    empty: [f64; 3],
    threshold: f64,
    max_dist: f64,
}

impl DistanceClassifier {
    pub fn new(config: &ClassifierConfig) -> Self {
        let [r, g, b] = config.empty_color;
        Self {
            empty: [r as f64, g as f64, b as f64],
            threshold: config.threshold,
            // |(255, 255, 255)|, independent of the configured empty color
            max_dist: (3.0f64 * 255.0 * 255.0).sqrt(),
        }
    }

    fn dist_sq(&self, p: Rgba<u8>) -> f64 {
        let dr = p[0] as f64 - self.empty[0];
        let dg = p[1] as f64 - self.empty[1];
        let db = p[2] as f64 - self.empty[2];
        dr * dr + dg * dg + db * db
    }
}

impl Default for DistanceClassifier {
    fn default() -> Self {
        Self::new(&ClassifierConfig::default())
    }
}

impl Classifier for DistanceClassifier {
    fn classify(&self, sample: Rgba<u8>) -> f64 {
        let height = self.dist_sq(sample).sqrt() / self.max_dist;
        if height < self.threshold { 0.0 } else { height }
    }
}
