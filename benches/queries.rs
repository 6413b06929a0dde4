use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};

use jobstore::{core::store::RecordStore, source::memory::MemorySource};

const EMPLOYERS: [&str; 5] = ["Acme Inc", "Acme Analytics", "LaunchCode", "Globex", "Initech"];
const TITLES: [&str; 4] = ["Software Engineer", "Data Analyst", "Web Developer", "QA Tester"];

fn store_with(rows: usize) -> RecordStore {
    let mut source = MemorySource::new(["id", "name", "employer", "location", "position type"]);
    for i in 0..rows {
        source.push_row([
            i.to_string(),
            format!("{} {}", TITLES[i % TITLES.len()], i % 97),
            EMPLOYERS[i % EMPLOYERS.len()].to_string(),
            format!("City {}", i % 31),
            TITLES[(i / 7) % TITLES.len()].to_string(),
        ]);
    }
    let store = RecordStore::new(source);
    store.try_load().expect("load");
    store
}

fn bench_distinct(c: &mut Criterion) {
    let store = store_with(20_000);
    c.bench_function("distinct_values_employer_20k", |b| {
        b.iter(|| {
            let _ = store.distinct_values("employer").expect("employer");
        });
    });
}

fn bench_column_search(c: &mut Criterion) {
    let store = store_with(20_000);
    c.bench_function("find_by_column_and_value_20k", |b| {
        b.iter(|| {
            let _ = store
                .find_by_column_and_value("employer", "acme")
                .expect("employer");
        });
    });
}

fn bench_value_search(c: &mut Criterion) {
    let mut group = c.benchmark_group("find_by_value");
    for rows in [1_000usize, 10_000usize, 50_000usize] {
        let store = store_with(rows);
        group.bench_with_input(BenchmarkId::from_parameter(rows), &rows, |b, _| {
            b.iter(|| {
                let _ = store.find_by_value("analyst");
            });
        });
    }
    group.finish();
}

criterion_group!(benches, bench_distinct, bench_column_search, bench_value_search);
criterion_main!(benches);
