use std::io::Write;

use catalog::{FileItemSource, Item, ItemCollection, ItemSource};
use criterion::{Criterion, criterion_group, criterion_main};
use serde_json::json;

const CATEGORIES: [&str; 4] = ["books", "games", "music", "tools"];

/// Build a collection of N items spread evenly across the categories.
fn make_collection(n: usize) -> ItemCollection {
    (0..n)
        .map(|i| {
            Item::new(json!({
                "id": i,
                "name": format!("item-{i}"),
                "category": CATEGORIES[i % CATEGORIES.len()],
            }))
        })
        .collect()
}

fn bench_filter_10000_items(c: &mut Criterion) {
    let collection = make_collection(10_000);
    let category = json!("games");

    c.bench_function("catalog/filter_10000_items", |b| {
        b.iter(|| collection.clone().filter_by_category(&category));
    });
}

fn bench_load_1000_items_from_file(c: &mut Criterion) {
    let rt = tokio::runtime::Runtime::new().unwrap();
    let mut file = tempfile::NamedTempFile::new().unwrap();
    serde_json::to_writer(&mut file, &make_collection(1_000)).unwrap();
    file.flush().unwrap();
    let source = FileItemSource::new(file.path());

    c.bench_function("catalog/load_1000_items_from_file", |b| {
        b.iter(|| {
            rt.block_on(async {
                source.load().await.unwrap();
            });
        });
    });
}

criterion_group!(
    benches,
    bench_filter_10000_items,
    bench_load_1000_items_from_file
);
criterion_main!(benches);
