//! Criterion benchmarks for the metrics hot path.
//!
//! The dashboard recomputes everything on each filter change, so cleaning,
//! ranking, and the cross-dataset join are the latency-critical transforms.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use polars::prelude::*;

use immolab_core::data::clean;
use immolab_core::metrics::{mean_price_by_zip, price_to_rent, rank_cantons};

const CANTONS: [&str; 8] = ["VD", "ZH", "GE", "BE", "TI", "VS", "SG", "LU"];

fn make_listings(n: usize) -> DataFrame {
    let zip: Vec<i64> = (0..n).map(|i| 1000 + (i as i64 % 400)).collect();
    let canton: Vec<&str> = (0..n).map(|i| CANTONS[i % CANTONS.len()]).collect();
    let price: Vec<f64> = (0..n).map(|i| 1200.0 + (i as f64 * 7.3) % 3000.0).collect();
    let rooms: Vec<f64> = (0..n).map(|i| 1.5 + (i % 8) as f64 * 0.5).collect();
    let area: Vec<f64> = (0..n).map(|i| 25.0 + (i as f64 * 3.1) % 150.0).collect();

    df!(
        "zip_code" => zip,
        "canton" => canton,
        "price_chf" => price,
        "rooms" => rooms,
        "area_m2" => area,
    )
    .unwrap()
}

fn bench_clean(c: &mut Criterion) {
    let df = make_listings(10_000);
    c.bench_function("clean_10k_rows", |b| {
        b.iter(|| clean(black_box(&df)).unwrap())
    });
}

fn bench_ranking(c: &mut Criterion) {
    let df = clean(&make_listings(10_000)).unwrap();
    c.bench_function("rank_cantons_10k_rows", |b| {
        b.iter(|| rank_cantons(black_box(&df), "Avg Rent/m²").unwrap())
    });
}

fn bench_price_to_rent(c: &mut Criterion) {
    let rent = clean(&make_listings(10_000)).unwrap();
    let buy = clean(&make_listings(8_000)).unwrap();
    let rent_agg = mean_price_by_zip(&rent).unwrap();
    let buy_agg = mean_price_by_zip(&buy).unwrap();

    c.bench_function("price_to_rent_400_zips", |b| {
        b.iter(|| price_to_rent(black_box(&buy_agg), black_box(&rent_agg)).unwrap())
    });
}

criterion_group!(benches, bench_clean, bench_ranking, bench_price_to_rent);
criterion_main!(benches);
