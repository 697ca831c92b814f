//! Page-relative geometry for OCR text regions

use serde::{Deserialize, Serialize};

use crate::error::{MedLinkError, Result};

/// Normalized bounding box of a text region, relative to its page
///
/// All coordinates live in `[0, 1]`. The owning entity carries the page
/// index, so the box itself is pure geometry.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoundingBox {
    /// Left edge, fraction of page width
    pub x: f64,
    /// Top edge, fraction of page height
    pub y: f64,
    /// Width, fraction of page width
    pub width: f64,
    /// Height, fraction of page height
    pub height: f64,
}

impl BoundingBox {
    /// Create a new bounding box
    #[must_use]
    pub const fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self { x, y, width, height }
    }

    /// Geometric center of the box
    #[must_use]
    pub fn center(&self) -> (f64, f64) {
        (self.x + self.width / 2.0, self.y + self.height / 2.0)
    }

    /// Vertical center, used for header/footer band tests
    #[must_use]
    pub fn center_y(&self) -> f64 {
        self.y + self.height / 2.0
    }

    /// Euclidean distance between box centers
    #[must_use]
    pub fn center_distance(&self, other: &Self) -> f64 {
        let (ax, ay) = self.center();
        let (bx, by) = other.center();
        ((ax - bx).powi(2) + (ay - by).powi(2)).sqrt()
    }

    /// Check that all coordinates are normalized
    pub fn validate(&self) -> Result<()> {
        let in_unit = |v: f64| (0.0..=1.0).contains(&v) && v.is_finite();
        if !in_unit(self.x) || !in_unit(self.y) {
            return Err(MedLinkError::validation(format!(
                "bounding box origin out of [0,1]: ({}, {})",
                self.x, self.y
            )));
        }
        if !in_unit(self.width) || !in_unit(self.height) {
            return Err(MedLinkError::validation(format!(
                "bounding box size out of [0,1]: {}x{}",
                self.width, self.height
            )));
        }
        Ok(())
    }
}
