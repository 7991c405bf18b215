// config.rs - Conversion parameters
//
// Defaults reproduce the shipped placement maps: 20 cell clusters, an 80 entry
// vertical search window, white as "no grass", 0.1 height threshold.
// Values may come from a RON file; any missing field keeps its default.

use std::fs;
use std::path::Path;

use log::warn;
use serde::Deserialize;

use crate::error::{ClusterError, Result};

pub const MAX_CLUSTER_SIZE: u32 = 20;
pub const MAX_LOOKAHEAD: usize = 80;
pub const EMPTY_COLOR: [u8; 3] = [255, 255, 255];
pub const HEIGHT_THRESHOLD: f64 = 0.1;

/// Parameters of the two clustering passes.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default)]
pub struct ClusterConfig {
    /// Cap on both width (row pass) and height (cluster pass).
    pub max_cluster_size: u32,
    /// Number of list entries the cluster pass looks ahead of each box.
    pub max_lookahead: usize,
    /// Build row runs on the rayon pool instead of the calling thread.
    pub parallel_rows: bool,
}

impl Default for ClusterConfig {
    fn default() -> Self {
        Self {
            max_cluster_size: MAX_CLUSTER_SIZE,
            max_lookahead: MAX_LOOKAHEAD,
            parallel_rows: false,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default)]
pub struct ClassifierConfig {
    /// Color that marks a cell without grass.
    pub empty_color: [u8; 3],
    /// Normalized distances below this classify as 0.
    pub threshold: f64,
}

impl Default for ClassifierConfig {
    fn default() -> Self {
        Self { empty_color: EMPTY_COLOR, threshold: HEIGHT_THRESHOLD }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub cluster: ClusterConfig,
    pub classifier: ClassifierConfig,
    /// Run the full property check on the result before it is emitted.
    pub verify: bool,
}

impl Config {
    /// Read a RON config file, e.g. `(cluster: (max_lookahead: 120))`.
    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)?;
        Self::parse(&text)
    }

    pub fn parse(text: &str) -> Result<Self> {
        let config: Config = ron::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.cluster.max_cluster_size == 0 {
            return Err(ClusterError::Config("max_cluster_size must be at least 1".into()));
        }
        if self.cluster.max_lookahead == 0 {
            return Err(ClusterError::Config("max_lookahead must be at least 1".into()));
        }
        let t = self.classifier.threshold;
        if !t.is_finite() || !(0.0..=1.0).contains(&t) {
            return Err(ClusterError::Config(format!("threshold {t} outside [0, 1]")));
        }

        if self.cluster.max_cluster_size != MAX_CLUSTER_SIZE {
            warn!("max_cluster_size = {} (default {})", self.cluster.max_cluster_size, MAX_CLUSTER_SIZE);
        }
        if self.cluster.max_lookahead != MAX_LOOKAHEAD {
            warn!("max_lookahead = {} (default {}), output will differ on tall regions",
                self.cluster.max_lookahead, MAX_LOOKAHEAD);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_constants() {
        let c = Config::default();
        assert_eq!(c.cluster.max_cluster_size, 20);
        assert_eq!(c.cluster.max_lookahead, 80);
        assert_eq!(c.classifier.empty_color, [255, 255, 255]);
        assert_eq!(c.classifier.threshold, 0.1);
        assert!(!c.verify);
    }

    #[test]
    fn partial_file_keeps_defaults() {
        let c = Config::parse("(cluster: (max_lookahead: 120), verify: true)").unwrap();
        assert_eq!(c.cluster.max_lookahead, 120);
        assert_eq!(c.cluster.max_cluster_size, 20);
        assert_eq!(c.classifier, ClassifierConfig::default());
        assert!(c.verify);
    }

    #[test]
    fn rejects_zero_sizes() {
        assert!(matches!(
            Config::parse("(cluster: (max_cluster_size: 0))"),
            Err(ClusterError::Config(_))
        ));
        assert!(matches!(
            Config::parse("(cluster: (max_lookahead: 0))"),
            Err(ClusterError::Config(_))
        ));
    }

    #[test]
    fn rejects_bad_threshold() {
        let mut c = Config::default();
        c.classifier.threshold = 1.5;
        assert!(c.validate().is_err());
        c.classifier.threshold = f64::NAN;
        assert!(c.validate().is_err());
    }

    #[test]
    fn malformed_text_is_parse_error() {
        assert!(matches!(Config::parse("(cluster: "), Err(ClusterError::Parse(_))));
    }
}
