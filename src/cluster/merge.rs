// merge.rs - Cluster pass
//
// Visits every surviving run once, in list order, and lets it swallow runs
// directly below it that share x, width and value. The search only looks
// `max_lookahead` list entries ahead; a matching run further away is left
// alone even if it would fit. Absorbed entries are tagged during the pass
// and compacted out afterwards so indices stay stable while scanning.

use log::info;

use super::Cluster;
use crate::config::ClusterConfig;

impl Cluster {
    fn accepts_below(&self, other: &Cluster, max_h: u32) -> bool {
        self.h + other.h <= max_h
            && self.x == other.x
            && self.bottom() == other.y
            && self.w == other.w
            && self.value == other.value
    }
}

/// Vertically merge a row-major run list. Input must be ordered by
/// non-decreasing y, which `build_runs` guarantees.
pub fn merge_vertical(mut runs: Vec<Cluster>, config: &ClusterConfig) -> Vec<Cluster> {
    let max_h = config.max_cluster_size;
    let window = config.max_lookahead;
    let n = runs.len();
    let mut absorbed = vec![false; n];

    info!("Cluster pass: merging {} runs into MxN boxes (window {})", n, window);

    for i in 0..n {
        if absorbed[i] { continue; }

        let end = (i + 1).saturating_add(window).min(n);
        for j in (i + 1)..end {
            if absorbed[j] { continue; }

            // Row-major: nothing past this point can touch the bottom edge
            if runs[j].y > runs[i].bottom() { break; }

            let below = runs[j];
            if runs[i].accepts_below(&below, max_h) {
                runs[i].h += below.h;
                absorbed[j] = true;
                if runs[i].h >= max_h { break; }
            }
        }
    }

    // Compact survivors in place
    let mut w = 0;
    for r in 0..n {
        if absorbed[r] { continue; }
        runs[w] = runs[r];
        w += 1;
    }
    runs.truncate(w);

    info!("Cluster pass finished with {} boxes", runs.len());
    runs
}
