use criterion::*;

use reversi_core::Board;
use reversi_player::{play_to_completion, recommend_move, StdRandom};

fn criterion_playout(c: &mut Criterion) {
    let mut rng = StdRandom::new(0);

    c.bench_function("play_to_completion", |b| {
        b.iter(|| {
            let mut board = Board::new();
            play_to_completion(&mut board, &mut rng).unwrap()
        })
    });

    let mut group = c.benchmark_group("recommend_move");
    group.sample_size(20);
    for trials in [100u32, 1000] {
        group.bench_with_input(BenchmarkId::from_parameter(trials), &trials, |b, &trials| {
            b.iter(|| recommend_move(&Board::new(), black_box(trials), &mut rng).unwrap())
        });
    }
    group.finish();
}

criterion_group!(playout, criterion_playout);
criterion_main!(playout);
