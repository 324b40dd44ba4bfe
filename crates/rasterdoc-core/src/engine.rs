use crate::config::PageFormat;
use crate::error::{RasterDocError, Result};
use crate::model::{Placement, PlacementPlan, RasterSurface};
use tracing::instrument;

#[instrument(skip_all, fields(width_px = surface.width_px, height_px = surface.height_px))]
/// Computes the page-by-page placement of `surface` for `format`.
///
/// The surface is scaled so its rendered width equals the full page width
/// (aspect preserved, no cropping). Every page re-places the whole image,
/// shifted upward by the height already consumed; the page's clipping
/// window shows exactly the remaining band. The result covers the scaled
/// surface once, gapless and without duplicated content.
pub fn paginate(surface: &RasterSurface, format: &PageFormat) -> Result<PlacementPlan> {
    paginate_extent(surface.width_px, surface.height_px, format)
}

/// Layout-only variant of [`paginate`] for callers that have dimensions but
/// no pixel payload.
///
/// Notes:
/// - Height math is plain f64 division; nothing is rounded before the loop
///   comparison, so a surface landing exactly on a page boundary does not
///   emit a trailing blank page (the loop condition is strict `> 0`).
/// - Page count is unbounded above; a pathological tall surface yields an
///   arbitrarily long plan and any practical ceiling belongs to the caller.
pub fn paginate_extent(width_px: u32, height_px: u32, format: &PageFormat) -> Result<PlacementPlan> {
    format.validate()?;
    if width_px == 0 || height_px == 0 {
        return Err(RasterDocError::InvalidSurface {
            width: width_px,
            height: height_px,
        });
    }

    let scaled_height_mm = height_px as f64 * format.width_mm / width_px as f64;

    let mut placements = vec![Placement {
        page_index: 0,
        x_mm: 0.0,
        y_mm: 0.0,
        width_mm: format.width_mm,
        height_mm: scaled_height_mm,
    }];

    let mut height_left = scaled_height_mm - format.height_mm;
    while height_left > 0.0 {
        // Shift the full image up by the height consumed so far; only the
        // unconsumed band falls inside this page's window.
        let position = height_left - scaled_height_mm;
        placements.push(Placement {
            page_index: placements.len(),
            x_mm: 0.0,
            y_mm: position,
            width_mm: format.width_mm,
            height_mm: scaled_height_mm,
        });
        height_left -= format.height_mm;
    }

    Ok(PlacementPlan {
        format: *format,
        scaled_height_mm,
        placements,
    })
}
