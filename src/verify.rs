// verify.rs - Checks on a finished cluster list
//
// caps     : 1 <= w, h <= cap
// disjoint : no cell claimed twice
// coverage : same cells covered before and after the cluster pass
// uniform  : every covered cell carries the cluster's value

use crate::cluster::Cluster;
use crate::error::{ClusterError, Result};
use crate::grid::HeightGrid;

pub fn check_caps(clusters: &[Cluster], cap: u32) -> Result<()> {
    for (index, c) in clusters.iter().enumerate() {
        if c.w == 0 || c.h == 0 || c.w > cap || c.h > cap {
            return Err(ClusterError::CapExceeded { index, w: c.w, h: c.h, cap });
        }
    }
    Ok(())
}

/// Owner index per cell over the bounding area of `clusters`.
fn paint(clusters: &[Cluster]) -> Result<(u32, Vec<Option<usize>>)> {
    let w = clusters.iter().map(Cluster::right).max().unwrap_or(0);
    let h = clusters.iter().map(Cluster::bottom).max().unwrap_or(0);
    let mut owner = vec![None; (w as usize) * (h as usize)];

    for (i, c) in clusters.iter().enumerate() {
        for (x, y) in c.cells() {
            let slot = &mut owner[(y * w + x) as usize];
            if let Some(a) = *slot {
                return Err(ClusterError::Overlap { a, b: i });
            }
            *slot = Some(i);
        }
    }
    Ok((w, owner))
}

pub fn check_disjoint(clusters: &[Cluster]) -> Result<()> {
    paint(clusters).map(|_| ())
}

/// `before` and `after` must cover exactly the same cells.
pub fn check_coverage(before: &[Cluster], after: &[Cluster]) -> Result<()> {
    let (bw, b) = paint(before)?;
    let (aw, a) = paint(after)?;

    let covered = |w: u32, cells: &[Option<usize>], x: u32, y: u32| {
        x < w && cells.get((y * w + x) as usize).is_some_and(Option::is_some)
    };

    let w = bw.max(aw);
    let h = (b.len().max(a.len()) as u32).div_ceil(w.max(1));
    for y in 0..h {
        for x in 0..w {
            if covered(bw, &b[..], x, y) != covered(aw, &a[..], x, y) {
                return Err(ClusterError::CoverageMismatch { x, y });
            }
        }
    }
    Ok(())
}

pub fn check_uniform(clusters: &[Cluster], grid: &HeightGrid) -> Result<()> {
    for (index, c) in clusters.iter().enumerate() {
        for (x, y) in c.cells() {
            if grid.get(x, y) != Some(c.value) {
                return Err(ClusterError::NonUniform { index, x, y });
            }
        }
    }
    Ok(())
}

/// Every check, given the row pass output, the final list and the grid.
pub fn verify_all(runs: &[Cluster], clusters: &[Cluster], grid: &HeightGrid, cap: u32) -> Result<()> {
    check_caps(clusters, cap)?;
    check_disjoint(clusters)?;
    check_coverage(runs, clusters)?;
    check_uniform(clusters, grid)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn caps() {
        assert!(check_caps(&[Cluster::new(1.0, 0, 0, 20, 20)], 20).is_ok());
        assert!(matches!(
            check_caps(&[Cluster::new(1.0, 0, 0, 1, 1), Cluster::new(1.0, 0, 1, 21, 1)], 20),
            Err(ClusterError::CapExceeded { index: 1, w: 21, .. })
        ));
        assert!(check_caps(&[Cluster::new(1.0, 0, 0, 0, 1)], 20).is_err());
    }

    #[test]
    fn overlap_detected() {
        let cs = [Cluster::new(1.0, 0, 0, 2, 2), Cluster::new(1.0, 1, 1, 2, 2)];
        assert!(matches!(check_disjoint(&cs), Err(ClusterError::Overlap { a: 0, b: 1 })));
        assert!(check_disjoint(&[Cluster::new(1.0, 0, 0, 2, 2), Cluster::new(1.0, 2, 0, 2, 2)]).is_ok());
    }

    #[test]
    fn coverage_mismatch_detected() {
        let before = [Cluster::new(1.0, 0, 0, 2, 1), Cluster::new(1.0, 0, 1, 2, 1)];
        assert!(check_coverage(&before, &[Cluster::new(1.0, 0, 0, 2, 2)]).is_ok());
        assert!(matches!(
            check_coverage(&before, &[Cluster::new(1.0, 0, 0, 2, 1)]),
            Err(ClusterError::CoverageMismatch { x: 0, y: 1 })
        ));
        assert!(check_coverage(&before, &[Cluster::new(1.0, 0, 0, 2, 3)]).is_err());
    }

    #[test]
    fn uniformity_against_grid() {
        let grid = HeightGrid::from_rows(vec![vec![0.5, 0.5], vec![0.5, 0.2]]).unwrap();
        assert!(check_uniform(&[Cluster::new(0.5, 0, 0, 2, 1)], &grid).is_ok());
        assert!(matches!(
            check_uniform(&[Cluster::new(0.5, 0, 0, 2, 2)], &grid),
            Err(ClusterError::NonUniform { index: 0, x: 1, y: 1 })
        ));
        assert!(check_uniform(&[Cluster::new(0.5, 1, 1, 2, 1)], &grid).is_err());
    }
}
