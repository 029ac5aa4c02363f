use std::collections::HashSet;

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use tetris_blocks::core::Block;
use tetris_blocks::types::ColorPalette;

fn bench_random_color(c: &mut Criterion) {
    c.bench_function("random_color", |b| b.iter(|| black_box(ColorPalette::random())));
}

fn bench_fill_set(c: &mut Criterion) {
    c.bench_function("fill_board_set_200", |b| {
        b.iter(|| {
            let mut set = HashSet::with_capacity(200);
            for y in 0..20 {
                for x in 0..10 {
                    set.insert(Block::new(x, y, ColorPalette::Teal));
                }
            }
            black_box(set.len())
        })
    });
}

fn bench_contains(c: &mut Criterion) {
    let set: HashSet<Block> = (0..200)
        .map(|i| Block::new(i % 10, i / 10, ColorPalette::ALL[(i % 6) as usize]))
        .collect();
    let probe = Block::new(7, 13, ColorPalette::Blue);

    c.bench_function("contains_block", |b| {
        b.iter(|| black_box(set.contains(black_box(&probe))))
    });
}

criterion_group!(benches, bench_random_color, bench_fill_set, bench_contains);
criterion_main!(benches);
