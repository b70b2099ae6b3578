// benches/extract.rs
use criterion::{criterion_group, criterion_main, Criterion, black_box};

use rfc_digest::config::options::Loads;
use rfc_digest::core::dom::ParseMode;
use rfc_digest::runner::{lists_from_html, rfc_from_html};

const INDEX: &str = include_str!("../tests/fixtures/index.html");
const ENUMS: &str = include_str!("../tests/fixtures/rfc_enumerations.html");

fn bench_extract(c: &mut Criterion) {
    c.bench_function("rfc_full", |b| {
        b.iter(|| {
            let rfc = rfc_from_html(black_box(ENUMS), Loads::default(), ParseMode::Lenient).unwrap();
            black_box(rfc.votes().len())
        })
    });

    c.bench_function("rfc_votes_only", |b| {
        let loads = Loads { votes: true, ..Loads::NONE };
        b.iter(|| {
            let rfc = rfc_from_html(black_box(ENUMS), loads, ParseMode::Lenient).unwrap();
            black_box(rfc.votes().len())
        })
    });

    c.bench_function("index_all_phases", |b| {
        b.iter(|| {
            let lists = lists_from_html(black_box(INDEX), &[], ParseMode::Lenient).unwrap();
            black_box(lists.len())
        })
    });
}

criterion_group!(benches, bench_extract);
criterion_main!(benches);
