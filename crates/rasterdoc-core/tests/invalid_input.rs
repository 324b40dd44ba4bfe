use image::DynamicImage;
use rasterdoc_core::error::RasterDocError;
use rasterdoc_core::{PageFormat, RasterSurface, paginate_extent};

/// Zero-width surface
#[test]
fn test_zero_width() {
    let result = paginate_extent(0, 1000, &PageFormat::A4);
    assert!(result.is_err());
    match result {
        Err(RasterDocError::InvalidSurface { width, height }) => {
            assert_eq!(width, 0);
            assert_eq!(height, 1000);
        }
        _ => panic!("Expected InvalidSurface error"),
    }
}

#[test]
fn test_zero_height() {
    let result = paginate_extent(1000, 0, &PageFormat::A4);
    assert!(result.is_err());
    match result {
        Err(RasterDocError::InvalidSurface { width, height }) => {
            assert_eq!(width, 1000);
            assert_eq!(height, 0);
        }
        _ => panic!("Expected InvalidSurface error"),
    }
}

#[test]
fn test_both_dimensions_zero() {
    let result = paginate_extent(0, 0, &PageFormat::A4);
    assert!(matches!(
        result,
        Err(RasterDocError::InvalidSurface { .. })
    ));
}

/// Degenerate page formats are rejected before any placement is computed.
#[test]
fn test_zero_format_width() {
    let fmt = PageFormat::new(0.0, 297.0);
    let result = fmt.validate();
    assert!(result.is_err());
    match result {
        Err(RasterDocError::InvalidFormat {
            width_mm,
            height_mm,
        }) => {
            assert_eq!(width_mm, 0.0);
            assert_eq!(height_mm, 297.0);
        }
        _ => panic!("Expected InvalidFormat error"),
    }
}

#[test]
fn test_negative_format_height() {
    let fmt = PageFormat::new(210.0, -1.0);
    assert!(paginate_extent(1000, 1000, &fmt).is_err());
}

#[test]
fn test_non_finite_format() {
    let fmt = PageFormat::new(f64::NAN, 297.0);
    assert!(fmt.validate().is_err());
    let fmt = PageFormat::new(210.0, f64::INFINITY);
    assert!(fmt.validate().is_err());
}

/// Surface construction refuses empty images, so a `RasterSurface` in hand
/// is already paginate-able.
#[test]
fn test_empty_image_rejected_at_construction() {
    let img = DynamicImage::new_rgb8(0, 10);
    assert!(matches!(
        RasterSurface::from_image(img),
        Err(RasterDocError::InvalidSurface { .. })
    ));
}

#[test]
fn test_named_formats_parse() {
    assert_eq!("a4".parse::<PageFormat>(), Ok(PageFormat::A4));
    assert_eq!("Letter".parse::<PageFormat>(), Ok(PageFormat::LETTER));
    assert!("tabloid".parse::<PageFormat>().is_err());
}
