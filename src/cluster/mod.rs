// cluster/ - Greedy rectangle clustering
//
// Two passes over a classified grid:
//   1. runs  - coalesce equal cells of one row into 1-high runs
//   2. merge - stack column-aligned runs of equal width into taller clusters
//
// Neither pass is optimal. The exact boundaries they produce are what the
// renderer has always been fed, so keep them.

mod merge;
mod runs;

pub use merge::merge_vertical;
pub use runs::{build_row, build_runs};

/// Axis-aligned rectangle of cells sharing one height value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Cluster {
    pub value: f64,
    pub x: u32,
    pub y: u32,
    pub w: u32,
    pub h: u32,
}

impl Cluster {
    /// Single cell at (x, y).
    pub fn cell(value: f64, x: u32, y: u32) -> Self {
        Self { value, x, y, w: 1, h: 1 }
    }

    pub fn new(value: f64, x: u32, y: u32, w: u32, h: u32) -> Self {
        Self { value, x, y, w, h }
    }

    /// Exclusive right edge.
    #[inline]
    pub fn right(&self) -> u32 {
        self.x + self.w
    }

    /// Exclusive bottom edge.
    #[inline]
    pub fn bottom(&self) -> u32 {
        self.y + self.h
    }

    pub fn area(&self) -> u32 {
        self.w * self.h
    }

    #[inline]
    pub fn contains(&self, x: u32, y: u32) -> bool {
        x >= self.x && x < self.right() && y >= self.y && y < self.bottom()
    }

    /// No grass here.
    pub fn is_empty(&self) -> bool {
        self.value == 0.0
    }

    pub fn overlaps(&self, other: &Cluster) -> bool {
        self.x < other.right() && other.x < self.right()
            && self.y < other.bottom() && other.y < self.bottom()
    }

    /// Iterate the cells covered, row by row.
    pub fn cells(&self) -> impl Iterator<Item = (u32, u32)> + '_ {
        (self.y..self.bottom()).flat_map(move |y| (self.x..self.right()).map(move |x| (x, y)))
    }
}
