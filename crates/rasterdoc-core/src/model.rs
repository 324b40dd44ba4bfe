use crate::config::PageFormat;
use crate::error::{RasterDocError, Result};
use image::DynamicImage;
use serde::{Deserialize, Serialize};

/// A fully rendered pixel buffer with known dimensions, produced by a
/// `Renderer`. The payload is opaque to the pagination engine; only the
/// dimensions feed the placement computation. Owned by one pagination call
/// and dropped once the document artifact exists.
pub struct RasterSurface {
    /// Pixel width of the rendered surface.
    pub width_px: u32,
    /// Pixel height of the rendered surface.
    pub height_px: u32,
    /// Decoded image payload, handed to the encoder untouched.
    pub image: DynamicImage,
}

impl RasterSurface {
    /// Wraps a decoded image, rejecting degenerate dimensions up front.
    pub fn from_image(image: DynamicImage) -> Result<Self> {
        let width_px = image.width();
        let height_px = image.height();
        if width_px == 0 || height_px == 0 {
            return Err(RasterDocError::InvalidSurface {
                width: width_px,
                height: height_px,
            });
        }
        Ok(Self {
            width_px,
            height_px,
            image,
        })
    }
}

/// One placement instruction: draw the (full, unscaled-in-aspect) surface on
/// page `page_index` at the given offset. `y_mm` is measured from the top
/// edge of the page and is negative on every page after the first, so that
/// only the remaining band of the image falls inside the page window.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct Placement {
    /// 0-based, sequential page index.
    pub page_index: usize,
    /// Horizontal offset in mm (always 0; the surface spans the page width).
    pub x_mm: f64,
    /// Vertical offset in mm from the page top; negative past page 0.
    pub y_mm: f64,
    /// Rendered width in mm (equals the page width).
    pub width_mm: f64,
    /// Rendered height in mm (the scaled surface height, identical across
    /// all placements of one surface).
    pub height_mm: f64,
}

impl Placement {
    /// Vertical span of image content visible on this page, as offsets into
    /// the scaled image (`[start_mm, end_mm)` within `[0, height_mm]`).
    pub fn visible_band(&self, format: &PageFormat) -> (f64, f64) {
        let start = -self.y_mm;
        let end = (start + format.height_mm).min(self.height_mm);
        (start, end)
    }
}

/// Ordered pagination result for one surface: the sole output of the engine.
/// Ownership transfers to the document encoder, which consumes and discards
/// it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlacementPlan {
    pub format: PageFormat,
    /// Surface height after scaling to the page width, in mm (fractional).
    pub scaled_height_mm: f64,
    pub placements: Vec<Placement>,
}

impl PlacementPlan {
    pub fn page_count(&self) -> usize {
        self.placements.len()
    }

    /// Computes layout statistics for this plan.
    pub fn stats(&self) -> PlanStats {
        let num_pages = self.placements.len();
        let total_height_mm = num_pages as f64 * self.format.height_mm;
        let last_page_fill_mm = if num_pages > 0 {
            self.scaled_height_mm - (num_pages as f64 - 1.0) * self.format.height_mm
        } else {
            0.0
        };
        let trailing_blank_mm = (total_height_mm - self.scaled_height_mm).max(0.0);
        let fill_ratio = if total_height_mm > 0.0 {
            self.scaled_height_mm / total_height_mm
        } else {
            0.0
        };
        PlanStats {
            num_pages,
            scaled_height_mm: self.scaled_height_mm,
            page_height_mm: self.format.height_mm,
            last_page_fill_mm,
            trailing_blank_mm,
            fill_ratio,
        }
    }
}

/// Statistics about how a surface fills its pages.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct PlanStats {
    /// Total number of pages in the plan.
    pub num_pages: usize,
    /// Scaled surface height in mm.
    pub scaled_height_mm: f64,
    /// Page height in mm.
    pub page_height_mm: f64,
    /// Height of the visible band on the final page.
    pub last_page_fill_mm: f64,
    /// Blank space left on the final page.
    pub trailing_blank_mm: f64,
    /// scaled_height / (num_pages * page_height), 0.0 to 1.0.
    pub fill_ratio: f64,
}

impl PlanStats {
    /// Returns a human-readable summary of the statistics.
    pub fn summary(&self) -> String {
        format!(
            "Pages: {}, Scaled height: {:.2} mm, Last page fill: {:.2} mm, Trailing blank: {:.2} mm, Fill: {:.2}%",
            self.num_pages,
            self.scaled_height_mm,
            self.last_page_fill_mm,
            self.trailing_blank_mm,
            self.fill_ratio * 100.0,
        )
    }
}
