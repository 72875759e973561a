use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use printnest::entities::{DesignItem, SheetParams};
use printnest::io::import::import;
use rowfill::config::RowFillConfig;
use rowfill::opt::scheduler::RowFillOptimizer;
use rowfill::strategy::select;
use std::hint::black_box;

criterion_main!(benches);
criterion_group!(benches, scheduler_bench, selection_bench);

const N_ITEMS: [usize; 3] = [10, 100, 1000];

/// A catalog of business cards, labels and flyers, cycling through a fixed set of formats.
fn catalog(n_items: usize) -> Vec<DesignItem> {
    let formats = [(85.0, 55.0), (60.0, 40.0), (148.0, 105.0), (30.0, 120.0), (99.0, 210.0)];
    (0..n_items)
        .map(|i| {
            let (w, h) = formats[i % formats.len()];
            DesignItem::new(format!("item_{i}"), "", w, h).with_priority((i % 3) as f32)
        })
        .collect()
}

fn scheduler_bench(c: &mut Criterion) {
    let mut group = c.benchmark_group("scheduler");
    let config = RowFillConfig::default();
    for n_items in N_ITEMS {
        let instance = import(&catalog(n_items), SheetParams::default()).unwrap();
        group.bench_with_input(BenchmarkId::from_parameter(n_items), &instance, |b, instance| {
            b.iter(|| {
                let mut optimizer = RowFillOptimizer::new(instance.clone(), config.clone());
                black_box(optimizer.solve())
            })
        });
    }
    group.finish();
}

fn selection_bench(c: &mut Criterion) {
    let mut group = c.benchmark_group("selection");
    let config = RowFillConfig::default();
    for n_items in N_ITEMS {
        let items = catalog(n_items);
        group.bench_with_input(BenchmarkId::from_parameter(n_items), &items, |b, items| {
            b.iter(|| black_box(select(items, SheetParams::default(), &config).unwrap()))
        });
    }
    group.finish();
}
