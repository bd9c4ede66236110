use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};

use chrono::{Days, NaiveDate};
use larder_inventory::{ExpiryClassifier, InventoryItem, waste_report};

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 6, 15).unwrap()
}

/// Snapshot with expiry dates spread over roughly -30..+60 days, in a
/// scrambled order so the sort has real work to do.
fn snapshot(size: usize) -> Vec<InventoryItem> {
    let t = today();
    (0..size)
        .map(|i| {
            let offset = (i * 37 % 91) as i64 - 30;
            let expiry = if offset >= 0 {
                t + Days::new(offset as u64)
            } else {
                t - Days::new(offset.unsigned_abs())
            };
            InventoryItem::new(i as i64, format!("item {i}"), 1, "other", t, expiry).unwrap()
        })
        .collect()
}

fn bench_classify_snapshot(c: &mut Criterion) {
    let mut group = c.benchmark_group("classify_snapshot");
    let classifier = ExpiryClassifier::default();

    for size in [10usize, 100, 1_000, 10_000] {
        let items = snapshot(size);
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &items, |b, items| {
            b.iter(|| classifier.classify_snapshot(black_box(items), today()));
        });
    }

    group.finish();
}

fn bench_waste_report(c: &mut Criterion) {
    let items = snapshot(10_000);
    c.bench_function("waste_report/10000", |b| {
        b.iter(|| waste_report(black_box(&items), today()));
    });
}

criterion_group!(benches, bench_classify_snapshot, bench_waste_report);
criterion_main!(benches);
