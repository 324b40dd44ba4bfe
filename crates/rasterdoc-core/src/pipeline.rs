use crate::config::PageFormat;
use crate::encode::{DocumentEncoder, artifact_file_name};
use crate::engine::paginate;
use crate::error::Result;
use crate::render::Renderer;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, instrument};

/// A finished document: the bytes plus the `order-<id>.<ext>` file name the
/// caller should persist them under. Delivery (download, HTTP response,
/// plain file write) is the caller's business.
pub struct DocumentArtifact {
    pub file_name: String,
    pub bytes: Vec<u8>,
}

impl DocumentArtifact {
    /// Writes the artifact into `dir` and returns the full path.
    pub fn save_into(&self, dir: impl AsRef<Path>) -> Result<PathBuf> {
        let path = dir.as_ref().join(&self.file_name);
        fs::write(&path, &self.bytes)?;
        Ok(path)
    }
}

#[instrument(skip(renderer, encoder))]
/// End-to-end flow: capture the surface, paginate it, hand the plan to the
/// encoder once, name the result.
///
/// The captured surface lives exactly as long as this call, success or
/// failure; renderer and encoder errors propagate as typed results and are
/// never retried here (both stages are the only I/O in the flow, so retry
/// policy belongs to the caller).
pub fn export_document<R: Renderer, E: DocumentEncoder>(
    renderer: &mut R,
    encoder: &mut E,
    reference: &str,
    artifact_id: &str,
    format: &PageFormat,
) -> Result<DocumentArtifact> {
    let surface = renderer.capture(reference)?;
    let plan = paginate(&surface, format)?;
    debug!(pages = plan.page_count(), "placement plan computed");
    let bytes = encoder.assemble(&surface, &plan)?;
    Ok(DocumentArtifact {
        file_name: artifact_file_name(artifact_id, encoder.extension()),
        bytes,
    })
}
