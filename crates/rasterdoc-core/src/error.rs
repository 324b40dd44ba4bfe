use thiserror::Error;

#[derive(Debug, Error)]
pub enum RasterDocError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Image error: {0}")]
    Image(#[from] image::ImageError),
    #[error("Invalid raster surface: {width}x{height} px")]
    InvalidSurface { width: u32, height: u32 },
    #[error("Invalid page format: {width_mm}x{height_mm} mm")]
    InvalidFormat { width_mm: f64, height_mm: f64 },
    #[error("Render failure: {0}")]
    Render(String),
    #[error("Encoding failure: {0}")]
    Encode(String),
}

impl From<lopdf::Error> for RasterDocError {
    fn from(e: lopdf::Error) -> Self {
        RasterDocError::Encode(e.to_string())
    }
}

pub type Result<T> = std::result::Result<T, RasterDocError>;
