use criterion::{black_box, criterion_group, criterion_main, Criterion};

use rust_cards::{DeckKind, ShuffleRng, Table};

fn bench_shuffles(c: &mut Criterion) {
    let mut table = Table::default();
    let deck = table.standard_deck(DeckKind::Standard54);
    let mut rng = ShuffleRng::new(42);

    c.bench_function("swap_shuffle_54", |b| {
        b.iter(|| table.shuffle(deck, black_box(&mut rng)))
    });

    c.bench_function("ideal_shuffle_54", |b| {
        b.iter(|| table.ideal_shuffle(deck))
    });

    c.bench_function("cut_from_top_54", |b| {
        b.iter(|| table.cut_from_top(deck, black_box(17)))
    });
}

fn bench_standard_deck(c: &mut Criterion) {
    c.bench_function("build_standard_54", |b| {
        b.iter(|| {
            let mut table = Table::default();
            black_box(table.standard_deck(DeckKind::Standard54))
        })
    });
}

criterion_group!(benches, bench_shuffles, bench_standard_deck);
criterion_main!(benches);
