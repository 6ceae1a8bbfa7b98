use criterion::{black_box, criterion_group, criterion_main, Criterion};

use set_odds::cards::find_first_triple;
use set_odds::{catalog, estimate_probability_seeded, sample_without_replacement, Game, GameRng};

fn bench_triple_search(c: &mut Criterion) {
    let mut rng = GameRng::new(1);
    let hand = sample_without_replacement(catalog().cards(), 15, &mut rng).unwrap();
    c.bench_function("find_first_triple/15", |b| b.iter(|| find_first_triple(black_box(&hand))));
}

fn bench_single_game(c: &mut Criterion) {
    c.bench_function("game/12", |b| {
        let mut root = GameRng::new(7);
        b.iter(|| Game::new(catalog(), 12, root.fork()).unwrap().run().unwrap())
    });
}

fn bench_driver(c: &mut Criterion) {
    c.bench_function("driver/12x100", |b| {
        b.iter(|| estimate_probability_seeded(black_box(12), 100, 42).unwrap())
    });
}

criterion_group!(benches, bench_triple_search, bench_single_game, bench_driver);
criterion_main!(benches);
