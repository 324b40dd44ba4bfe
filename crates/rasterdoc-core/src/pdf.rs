use crate::encode::DocumentEncoder;
use crate::error::Result;
use crate::model::{PlacementPlan, RasterSurface};
use image::codecs::jpeg::JpegEncoder;
use lopdf::content::{Content, Operation};
use lopdf::{Document, Object, Stream, dictionary};

/// Millimetres to PDF points (1 pt = 1/72 inch).
pub const MM_TO_PT: f64 = 72.0 / 25.4;

/// PDF encoder backed by `lopdf`.
///
/// The raster is embedded once as a DCT-encoded image XObject and referenced
/// from every page's content stream; each page draws it at the placement
/// offset and the page MediaBox clips the visible band. No per-page
/// re-encoding happens regardless of page count.
pub struct PdfEncoder {
    jpeg_quality: u8,
}

impl PdfEncoder {
    pub fn new() -> Self {
        Self { jpeg_quality: 90 }
    }

    /// JPEG quality used for the embedded image (1..=100).
    pub fn with_quality(jpeg_quality: u8) -> Self {
        Self { jpeg_quality }
    }
}

impl Default for PdfEncoder {
    fn default() -> Self {
        Self::new()
    }
}

impl DocumentEncoder for PdfEncoder {
    fn assemble(&mut self, surface: &RasterSurface, plan: &PlacementPlan) -> Result<Vec<u8>> {
        let mut doc = Document::with_version("1.5");
        let pages_id = doc.new_object_id();

        // One JPEG for the whole document; every page references it.
        let mut jpeg: Vec<u8> = Vec::new();
        let rgb = surface.image.to_rgb8();
        JpegEncoder::new_with_quality(&mut jpeg, self.jpeg_quality).encode_image(&rgb)?;

        let image_id = doc.add_object(Stream::new(
            dictionary! {
                "Type" => "XObject",
                "Subtype" => "Image",
                "Width" => surface.width_px as i64,
                "Height" => surface.height_px as i64,
                "ColorSpace" => "DeviceRGB",
                "BitsPerComponent" => 8,
                "Filter" => "DCTDecode",
            },
            jpeg,
        ));

        let page_w_pt = plan.format.width_mm * MM_TO_PT;
        let page_h_pt = plan.format.height_mm * MM_TO_PT;

        let mut page_ids: Vec<Object> = Vec::with_capacity(plan.placements.len());
        for placement in &plan.placements {
            let w_pt = placement.width_mm * MM_TO_PT;
            let h_pt = placement.height_mm * MM_TO_PT;
            let x_pt = placement.x_mm * MM_TO_PT;
            // Placements measure from the page top; PDF origin is bottom-left.
            let y_pt = page_h_pt - placement.y_mm * MM_TO_PT - h_pt;

            let content = Content {
                operations: vec![
                    Operation::new("q", vec![]),
                    Operation::new(
                        "cm",
                        vec![
                            (w_pt as f32).into(),
                            0.into(),
                            0.into(),
                            (h_pt as f32).into(),
                            (x_pt as f32).into(),
                            (y_pt as f32).into(),
                        ],
                    ),
                    Operation::new("Do", vec!["Im0".into()]),
                    Operation::new("Q", vec![]),
                ],
            };
            let content_id = doc.add_object(Stream::new(dictionary! {}, content.encode()?));
            let page_id = doc.add_object(dictionary! {
                "Type" => "Page",
                "Parent" => pages_id,
                "MediaBox" => vec![
                    0.into(),
                    0.into(),
                    (page_w_pt as f32).into(),
                    (page_h_pt as f32).into(),
                ],
                "Resources" => dictionary! {
                    "XObject" => dictionary! { "Im0" => image_id },
                },
                "Contents" => content_id,
            });
            page_ids.push(page_id.into());
        }

        let count = page_ids.len() as i64;
        doc.objects.insert(
            pages_id,
            Object::Dictionary(dictionary! {
                "Type" => "Pages",
                "Kids" => page_ids,
                "Count" => count,
            }),
        );
        let catalog_id = doc.add_object(dictionary! {
            "Type" => "Catalog",
            "Pages" => pages_id,
        });
        doc.trailer.set("Root", catalog_id);

        let mut bytes: Vec<u8> = Vec::new();
        doc.save_to(&mut bytes)?;
        Ok(bytes)
    }

    fn extension(&self) -> &str {
        "pdf"
    }
}
