use criterion::{black_box, criterion_group, criterion_main, Criterion};

use game::perft::perft;
use game::Board;

fn perft_benchmarks(c: &mut Criterion) {
    c.bench_function("perft 4 startpos", |b| {
        let mut board = Board::starting_position();
        b.iter(|| black_box(perft(&mut board, 4)));
    });

    c.bench_function("perft 3 kiwipete", |b| {
        let mut board =
            Board::from_fen("r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1")
                .unwrap();
        b.iter(|| black_box(perft(&mut board, 3)));
    });
}

criterion_group!(benches, perft_benchmarks);
criterion_main!(benches);
