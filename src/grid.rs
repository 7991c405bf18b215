// grid.rs - Classified height grid
//
// One f64 height per pixel, stored row-major as the image is scanned.

use image::{DynamicImage, GenericImageView};
use log::info;

use crate::classify::Classifier;
use crate::error::{ClusterError, Result};

#[derive(Debug, Clone, PartialEq)]
pub struct HeightGrid {
    width: u32,
    rows: Vec<Vec<f64>>,
}

impl HeightGrid {
    /// Classify every pixel of `img`. Fails on a zero-sized image or on any
    /// non-finite height.
    pub fn from_image(img: &DynamicImage, classifier: &dyn Classifier) -> Result<Self> {
        let (width, height) = img.dimensions();
        if width == 0 || height == 0 {
            return Err(ClusterError::EmptyImage { width, height });
        }
        info!("Classifying {}x{} grid", width, height);

        let rows = (0..height)
            .map(|y| {
                (0..width)
                    .map(|x| {
                        let value = classifier.classify(img.get_pixel(x, y));
                        if value.is_finite() {
                            Ok(value)
                        } else {
                            Err(ClusterError::NonFiniteHeight { x, y, value })
                        }
                    })
                    .collect::<Result<Vec<f64>>>()
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Self { width, rows })
    }

    /// Build a grid from already classified rows. All rows must have the same
    /// length and every value must be finite.
    pub fn from_rows(rows: Vec<Vec<f64>>) -> Result<Self> {
        let width = rows.first().map_or(0, |r| r.len()) as u32;
        let height = rows.len() as u32;
        if width == 0 {
            return Err(ClusterError::EmptyImage { width, height });
        }
        for (y, row) in rows.iter().enumerate() {
            if row.len() != width as usize {
                return Err(ClusterError::Config(format!(
                    "row {} has {} cells, expected {}", y, row.len(), width
                )));
            }
            if let Some((x, &value)) = row.iter().enumerate().find(|(_, v)| !v.is_finite()) {
                return Err(ClusterError::NonFiniteHeight { x: x as u32, y: y as u32, value });
            }
        }
        Ok(Self { width, rows })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.rows.len() as u32
    }

    pub fn row(&self, y: u32) -> &[f64] {
        &self.rows[y as usize]
    }

    pub fn rows(&self) -> &[Vec<f64>] {
        &self.rows
    }

    #[inline]
    pub fn get(&self, x: u32, y: u32) -> Option<f64> {
        self.rows.get(y as usize)?.get(x as usize).copied()
    }
}
