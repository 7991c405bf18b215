// ============================================================================
// GRASS CLUSTERS - Placement map to rectangle list
// ============================================================================
//
// Turns a grass placement image into a list of uniform-height rectangles the
// grass renderer can spawn blades from:
//
//   image -> classify -> row pass -> cluster pass -> ([(h,x,y,w,h), ...])
//
// A conversion is one synchronous batch job. Any error aborts it before
// anything is written.

pub mod classify;
pub mod cluster;
pub mod config;
pub mod emit;
pub mod error;
pub mod grid;
pub mod verify;

use std::path::Path;

use image::DynamicImage;
use log::info;

pub use classify::{Classifier, DistanceClassifier};
pub use cluster::{Cluster, build_row, build_runs, merge_vertical};
pub use config::{ClassifierConfig, ClusterConfig, Config};
pub use error::{ClusterError, Result};
pub use grid::HeightGrid;

/// Result of a conversion plus the counts worth reporting.
#[derive(Debug, Clone)]
pub struct Conversion {
    pub clusters: Vec<Cluster>,
    /// Boxes left after the row pass, before vertical merging.
    pub row_boxes: usize,
    pub grid_width: u32,
    pub grid_height: u32,
}

/// Run both passes over an already classified grid.
pub fn convert_grid(grid: &HeightGrid, config: &Config) -> Result<Conversion> {
    config.validate()?;
    let cluster_cfg = &config.cluster;

    let runs = build_runs(grid, cluster_cfg);
    let row_boxes = runs.len();

    let clusters = if config.verify {
        let merged = merge_vertical(runs.clone(), cluster_cfg);
        verify::verify_all(&runs, &merged, grid, cluster_cfg.max_cluster_size)?;
        info!("Verified {} boxes", merged.len());
        merged
    } else {
        let merged = merge_vertical(runs, cluster_cfg);
        verify::check_caps(&merged, cluster_cfg.max_cluster_size)?;
        merged
    };

    Ok(Conversion {
        clusters,
        row_boxes,
        grid_width: grid.width(),
        grid_height: grid.height(),
    })
}

/// Classify a decoded image with a caller supplied classifier, then cluster it.
pub fn convert_with(img: &DynamicImage, classifier: &dyn Classifier, config: &Config) -> Result<Conversion> {
    let grid = HeightGrid::from_image(img, classifier)?;
    convert_grid(&grid, config)
}

/// Classify with the distance classifier described by `config`, then cluster.
pub fn convert_image(img: &DynamicImage, config: &Config) -> Result<Conversion> {
    let classifier = DistanceClassifier::new(&config.classifier);
    convert_with(img, &classifier, config)
}

/// Decode `input`, convert it and write the cluster list to `output`.
/// The output file is only created once the conversion has succeeded.
pub fn process(input: &Path, output: &Path, config: &Config) -> Result<Conversion> {
    info!("Parsing {}", input.display());
    let img = image::open(input)?;
    let conversion = convert_image(&img, config)?;
    emit::save(output, &conversion.clusters)?;
    Ok(conversion)
}
