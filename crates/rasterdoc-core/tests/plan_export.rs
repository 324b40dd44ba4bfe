use rasterdoc_core::{PageFormat, paginate_extent, to_json_plan};

#[test]
fn test_json_plan_shape() {
    let plan = paginate_extent(1000, 4000, &PageFormat::A4).unwrap();
    let value = to_json_plan(&plan);

    let pages = value["pages"].as_array().unwrap();
    assert_eq!(pages.len(), 3);
    assert_eq!(pages[0]["index"], 0);
    assert_eq!(pages[0]["placement"]["y_mm"], 0.0);
    assert_eq!(pages[1]["placement"]["y_mm"], -297.0);
    assert_eq!(pages[2]["placement"]["y_mm"], -594.0);

    let meta = &value["meta"];
    assert_eq!(meta["pageCount"], 3);
    assert_eq!(meta["scaledHeight_mm"], 840.0);
    assert_eq!(meta["pageFormat"]["width_mm"], 210.0);
    assert_eq!(meta["app"], "rasterdoc");
}

#[test]
fn test_json_visible_bands() {
    let plan = paginate_extent(1000, 4000, &PageFormat::A4).unwrap();
    let value = to_json_plan(&plan);
    let pages = value["pages"].as_array().unwrap();

    assert_eq!(pages[0]["visibleBand"]["start_mm"], 0.0);
    assert_eq!(pages[0]["visibleBand"]["end_mm"], 297.0);
    assert_eq!(pages[2]["visibleBand"]["start_mm"], 594.0);
    assert_eq!(pages[2]["visibleBand"]["end_mm"], 840.0);
}

/// Plans survive a serde round trip. JSON floats only parse back to within
/// an ulp of the written value, so the mm fields are compared with an
/// epsilon rather than bit-for-bit.
#[test]
fn test_plan_serde_roundtrip() {
    const EPS: f64 = 1e-9;

    let plan = paginate_extent(640, 9000, &PageFormat::LETTER).unwrap();
    let json = serde_json::to_string(&plan).unwrap();
    let back: rasterdoc_core::PlacementPlan = serde_json::from_str(&json).unwrap();
    assert_eq!(back.page_count(), plan.page_count());
    assert_eq!(back.format, plan.format);
    assert!((back.scaled_height_mm - plan.scaled_height_mm).abs() < EPS);
    for (a, b) in back.placements.iter().zip(&plan.placements) {
        assert_eq!(a.page_index, b.page_index);
        assert_eq!(a.x_mm, b.x_mm);
        assert!((a.y_mm - b.y_mm).abs() < EPS);
        assert_eq!(a.width_mm, b.width_mm);
        assert!((a.height_mm - b.height_mm).abs() < EPS);
    }
}
