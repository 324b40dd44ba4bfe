use rasterdoc_core::PageFormat;
use rasterdoc_core::paginate_extent;

const EPS: f64 = 1e-9;

/// Offsets step down by exactly one page height per page:
/// offset(0) = 0, offset(i) = offset(i-1) - page_height.
#[test]
fn test_offsets_step_by_page_height() {
    let fmt = PageFormat::A4;
    let plan = paginate_extent(800, 12_345, &fmt).unwrap();
    assert!(plan.page_count() > 1);

    assert_eq!(plan.placements[0].y_mm, 0.0);
    for w in plan.placements.windows(2) {
        let step = w[0].y_mm - w[1].y_mm;
        assert!(
            (step - fmt.height_mm).abs() < EPS,
            "step {} != page height {}",
            step,
            fmt.height_mm
        );
    }
}

#[test]
fn test_offsets_strictly_decreasing() {
    let plan = paginate_extent(1000, 30_000, &PageFormat::A4).unwrap();
    for w in plan.placements.windows(2) {
        assert!(w[1].y_mm < w[0].y_mm);
    }
}

/// Every placement re-uses the full scaled image: same width, same height,
/// x pinned to the left edge.
#[test]
fn test_placements_share_extent() {
    let plan = paginate_extent(640, 9_000, &PageFormat::A4).unwrap();
    let h = plan.scaled_height_mm;
    for p in &plan.placements {
        assert_eq!(p.x_mm, 0.0);
        assert_eq!(p.width_mm, 210.0);
        assert_eq!(p.height_mm, h);
    }
}
