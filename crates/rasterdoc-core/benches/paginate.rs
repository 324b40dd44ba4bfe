use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use rasterdoc_core::prelude::*;

fn bench_paginate(c: &mut Criterion) {
    let mut group = c.benchmark_group("paginate_extent");

    // width fixed at 1080 px, heights from one page to thousands of pages
    let heights = vec![2_000u32, 50_000, 1_000_000];

    for height_px in heights {
        let pages = paginate_extent(1080, height_px, &PageFormat::A4)
            .unwrap()
            .page_count();
        group.throughput(Throughput::Elements(pages as u64));
        group.bench_with_input(
            BenchmarkId::new("a4", height_px),
            &height_px,
            |b, &height_px| {
                b.iter(|| {
                    let plan = paginate_extent(1080, height_px, &PageFormat::A4).unwrap();
                    black_box(plan)
                });
            },
        );
    }

    group.finish();
}

criterion_group!(benches, bench_paginate);
criterion_main!(benches);
