//! Core library for paginating rendered raster surfaces into documents.
//!
//! - Engine: `paginate` scales a raster to the page width and computes one
//!   placement per page (the full image re-placed at a negative vertical
//!   offset; the page's clipping window crops the visible band)
//! - Capabilities: `Renderer` produces surfaces, `DocumentEncoder` turns a
//!   placement plan into bytes; a `lopdf`-backed `PdfEncoder` is provided
//! - Data model is serde-serializable; a JSON exporter is provided for
//!   layout-only consumers and the CLI crate.
//!
//! Quick example:
//! ```ignore
//! use image::ImageReader;
//! use rasterdoc_core::{PageFormat, RasterSurface, paginate};
//! # fn main() -> anyhow::Result<()> {
//! let img = ImageReader::open("receipt.png")?.decode()?;
//! let surface = RasterSurface::from_image(img)?;
//! let plan = paginate(&surface, &PageFormat::A4)?;
//! println!("pages: {}", plan.page_count());
//! # Ok(()) }
//! ```

pub mod config;
pub mod encode;
pub mod engine;
pub mod error;
pub mod export;
pub mod model;
pub mod pdf;
pub mod pipeline;
pub mod render;

pub use config::*;
pub use encode::*;
pub use engine::*;
pub use error::*;
pub use export::*;
pub use model::*;
pub use pdf::*;
pub use pipeline::*;
pub use render::*;

/// Convenience prelude for common types and functions.
/// Importing `rasterdoc_core::prelude::*` brings the primary APIs into scope.
pub mod prelude {
    pub use crate::config::PageFormat;
    pub use crate::encode::{DocumentEncoder, artifact_file_name};
    pub use crate::engine::{paginate, paginate_extent};
    pub use crate::error::{RasterDocError, Result};
    pub use crate::model::{Placement, PlacementPlan, PlanStats, RasterSurface};
    pub use crate::pdf::PdfEncoder;
    pub use crate::pipeline::{DocumentArtifact, export_document};
    pub use crate::render::{ImageFileRenderer, Renderer};
}
