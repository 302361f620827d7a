//! Benchmarks for icon fragment decoding.

use criterion::{Criterion, black_box, criterion_group, criterion_main};
use iconmark::icon::{IconId, IconReference, decode, encode};

fn bench_decode_plain(c: &mut Criterion) {
    let html = "<p>No icons in this paragraph.</p>".repeat(200);
    c.bench_function("decode_plain", |b| b.iter(|| decode(black_box(&html))));
}

fn bench_decode_dense(c: &mut Criterion) {
    let mut html = String::new();
    for id in IconId::ALL {
        html.push_str("<p>");
        html.push_str(&encode(&IconReference::new(*id).with_color("#3b82f6")));
        html.push_str(" item</p>");
    }
    c.bench_function("decode_dense", |b| b.iter(|| decode(black_box(&html))));
}

criterion_group!(benches, bench_decode_plain, bench_decode_dense);
criterion_main!(benches);
