use boggle_solver::{load_sample_dictionary, Board, Solver, Trie};
use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use std::hint::black_box;

const BOARDS: [(&str, &str); 3] = [
    ("4x4", "stan/erqt/aead/nrst"),
    ("5x5", "boggl/esrat/quean/tnest/dorpe"),
    ("6x6", "starte/renate/quadst/eaterr/toners/nastee"),
];

fn bench_trie_build(c: &mut Criterion) {
    let words: Vec<&str> = include_str!("../dictionary/words.txt").lines().collect();
    let mut group = c.benchmark_group("trie");
    group.throughput(Throughput::Elements(words.len() as u64));
    group.bench_function("build_sample", |b| {
        b.iter(|| Trie::from_words(black_box(&words)))
    });
    group.finish();
}

fn bench_solve(c: &mut Criterion) {
    let solver = Solver::new(load_sample_dictionary());
    let mut group = c.benchmark_group("solve");
    for (name, text) in BOARDS {
        let board = Board::parse(text).expect("benchmark board is valid");
        group.throughput(Throughput::Elements(board.len() as u64));
        group.bench_with_input(BenchmarkId::from_parameter(name), &board, |b, board| {
            b.iter(|| solver.solve(black_box(board)))
        });
    }
    group.finish();
}

fn bench_solve_batch(c: &mut Criterion) {
    let solver = Solver::new(load_sample_dictionary());
    let boards: Vec<Board> = BOARDS
        .iter()
        .cycle()
        .take(32)
        .map(|(_, text)| Board::parse(text).expect("benchmark board is valid"))
        .collect();
    c.bench_function("solve_batch_32", |b| {
        b.iter(|| solver.solve_batch(black_box(&boards)))
    });
}

criterion_group!(benches, bench_trie_build, bench_solve, bench_solve_batch);
criterion_main!(benches);
