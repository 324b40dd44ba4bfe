//! Minimal end-to-end run: decode a PNG, paginate onto A4, write the PDF.
//!
//! Usage: cargo run -p rasterdoc-core --example paginate_png -- input.png

use rasterdoc_core::prelude::*;

fn main() -> Result<()> {
    let path = std::env::args().nth(1).unwrap_or("input.png".into());

    let mut renderer = ImageFileRenderer::new();
    let surface = renderer.capture(&path)?;
    let plan = paginate(&surface, &PageFormat::A4)?;
    println!("{}", plan.stats().summary());

    let bytes = PdfEncoder::new().assemble(&surface, &plan)?;
    std::fs::write("out.pdf", &bytes)?;
    println!("wrote out.pdf ({} bytes)", bytes.len());
    Ok(())
}
