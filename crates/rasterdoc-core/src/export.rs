use crate::model::PlacementPlan;
use serde_json::{Value, json};

/// Serialize a placement plan as a JSON object `{ pages, meta }`.
/// Suitable for layout-only consumers that drive their own encoder.
pub fn to_json_plan(plan: &PlacementPlan) -> Value {
    let pages_val = plan
        .placements
        .iter()
        .map(|p| {
            let (band_start, band_end) = p.visible_band(&plan.format);
            json!({
                "index": p.page_index,
                "placement": {
                    "x_mm": p.x_mm,
                    "y_mm": p.y_mm,
                    "width_mm": p.width_mm,
                    "height_mm": p.height_mm,
                },
                "visibleBand": { "start_mm": band_start, "end_mm": band_end },
            })
        })
        .collect::<Vec<_>>();
    let stats = plan.stats();
    json!({
        "pages": pages_val,
        "meta": {
            "schemaVersion": "1",
            "app": "rasterdoc",
            "version": env!("CARGO_PKG_VERSION"),
            "pageFormat": { "width_mm": plan.format.width_mm, "height_mm": plan.format.height_mm },
            "scaledHeight_mm": plan.scaled_height_mm,
            "pageCount": plan.page_count(),
            "fillRatio": stats.fill_ratio,
        },
    })
}
