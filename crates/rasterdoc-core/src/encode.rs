use crate::error::Result;
use crate::model::{PlacementPlan, RasterSurface};

/// Capability interface for the document encoder.
///
/// The engine hands over the source surface once plus the complete, ordered
/// placement plan; the encoder owns binary assembly and is the only stage
/// that may reject a structurally valid plan (`Encode` errors).
pub trait DocumentEncoder {
    fn assemble(&mut self, surface: &RasterSurface, plan: &PlacementPlan) -> Result<Vec<u8>>;

    /// File extension of the produced artifact, without the dot.
    fn extension(&self) -> &str;
}

/// Artifact naming used at the output boundary: `order-<id>.<ext>`.
pub fn artifact_file_name(artifact_id: &str, extension: &str) -> String {
    format!("order-{}.{}", artifact_id, extension)
}
