use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;
use sudoku_cover::cover::matrix::Matrix;
use sudoku_cover::sudoku::grid::Grid;
use sudoku_cover::sudoku::solver::solve;

const CLASSIC: &str =
    "53..7....6..195....98....6.8...6...34..8.3..17...2...6.6....28....419..5....8..79";

// Arto Inkala's "world's hardest sudoku".
const HARD: &str =
    "8..........36......7..9.2...5...7.......457.....1...3...1....68..85...1..9....4..";

fn bench_matrix(c: &mut Criterion) {
    c.bench_function("matrix construction", |b| {
        b.iter(|| black_box(Matrix::new()));
    });
}

fn bench_solve(c: &mut Criterion) {
    let matrix = Matrix::new();
    let classic: Grid = CLASSIC.parse().unwrap();
    let hard: Grid = HARD.parse().unwrap();
    let empty = Grid::empty();

    let mut group = c.benchmark_group("solve");

    group.bench_function("classic - all solutions", |b| {
        b.iter(|| {
            let solutions: Vec<Grid> = solve(&matrix, &classic).collect();
            black_box(solutions);
        });
    });

    group.bench_function("hard - first solution", |b| {
        b.iter(|| {
            let solution = solve(&matrix, &hard).next();
            black_box(solution);
        });
    });

    group.bench_function("empty grid - first solution", |b| {
        b.iter(|| {
            let solution = solve(&matrix, &empty).next();
            black_box(solution);
        });
    });

    group.finish();
}

criterion_group!(benches, bench_matrix, bench_solve);

criterion_main!(benches);
