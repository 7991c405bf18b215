// runs.rs - Row pass
//
// Each cell extends the first run of its row (in creation order) whose right
// edge touches it and whose value matches, else starts a new run. Scanning
// left to right only one run can touch x, but the creation-order first-match
// rule is kept so non-monotonic callers see the same behavior.

use log::info;
use rayon::prelude::*;

use super::Cluster;
use crate::config::ClusterConfig;
use crate::grid::HeightGrid;

impl Cluster {
    fn accepts_cell(&self, value: f64, x: u32, y: u32, max_w: u32) -> bool {
        self.w < max_w && self.right() == x && self.y == y && self.value == value
    }
}

/// Runs for one row of classified values, left to right.
pub fn build_row(values: &[f64], y: u32, max_w: u32) -> Vec<Cluster> {
    let mut runs: Vec<Cluster> = Vec::new();
    for (x, &value) in values.iter().enumerate() {
        let x = x as u32;
        match runs.iter_mut().find(|r| r.accepts_cell(value, x, y, max_w)) {
            Some(run) => run.w += 1,
            None => runs.push(Cluster::cell(value, x, y)),
        }
    }
    runs
}

/// Row pass over the whole grid. Output is row-major: rows in increasing y,
/// each row's runs in creation order. Row order must hold for the cluster pass.
pub fn build_runs(grid: &HeightGrid, config: &ClusterConfig) -> Vec<Cluster> {
    let max_w = config.max_cluster_size;
    info!("Row pass: building 1xN runs with N <= {}", max_w);

    let runs: Vec<Cluster> = if config.parallel_rows {
        let per_row: Vec<Vec<Cluster>> = grid.rows()
            .par_iter()
            .enumerate()
            .map(|(y, row)| build_row(row, y as u32, max_w))
            .collect();
        per_row.into_iter().flatten().collect()
    } else {
        grid.rows()
            .iter()
            .enumerate()
            .flat_map(|(y, row)| build_row(row, y as u32, max_w))
            .collect()
    };

    info!("Row pass finished with {} boxes", runs.len());
    runs
}
