use crate::error::{RasterDocError, Result};
use crate::model::RasterSurface;
use image::ImageReader;
use std::path::{Path, PathBuf};

/// Capability interface for whatever produces raster surfaces.
///
/// The reference is an opaque string the implementation interprets (a file
/// path, a DOM node id, a scene handle). Failures (missing reference,
/// capture error) surface as `Render` and are never retried by this crate.
pub trait Renderer {
    fn capture(&mut self, reference: &str) -> Result<RasterSurface>;
}

/// Renderer that treats the reference as an image path under a base
/// directory and decodes it from disk.
#[derive(Debug, Default, Clone)]
pub struct ImageFileRenderer {
    base_dir: Option<PathBuf>,
}

impl ImageFileRenderer {
    pub fn new() -> Self {
        Self { base_dir: None }
    }

    /// Resolves relative references against `dir`.
    pub fn with_base_dir(dir: impl Into<PathBuf>) -> Self {
        Self {
            base_dir: Some(dir.into()),
        }
    }

    fn resolve(&self, reference: &str) -> PathBuf {
        match &self.base_dir {
            Some(base) if Path::new(reference).is_relative() => base.join(reference),
            _ => PathBuf::from(reference),
        }
    }
}

impl Renderer for ImageFileRenderer {
    fn capture(&mut self, reference: &str) -> Result<RasterSurface> {
        let path = self.resolve(reference);
        if !path.is_file() {
            return Err(RasterDocError::Render(format!(
                "no such renderable: {}",
                path.display()
            )));
        }
        let image = ImageReader::open(&path)?.with_guessed_format()?.decode()?;
        RasterSurface::from_image(image)
    }
}
