//! Benchmarks for elimination and the cofactor determinant.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use unital_linalg::Matrix;

fn system_5x6() -> Matrix {
    Matrix::from_rows(&[
        vec![2.0, 5.0, 4.0, 6.0, 7.0, 3.0],
        vec![8.0, 7.0, 4.0, 4.0, 7.0, 1.0],
        vec![1.0, 8.0, 7.0, 9.0, 0.0, 1.0],
        vec![8.0, 6.0, 57.0, 6.0, 2.0, 1.0],
        vec![3.0, 6.0, 4.0, 7.0, 8.0, 3.0],
    ])
    .unwrap()
}

fn bench_gaussian(c: &mut Criterion) {
    let m = system_5x6();
    c.bench_function("gaussian 5x6", |b| {
        b.iter(|| black_box(&m).gaussian());
    });
}

fn bench_det(c: &mut Criterion) {
    let m = system_5x6().slice(0, -1, 0, 0);
    c.bench_function("cofactor det 5x5", |b| {
        b.iter(|| black_box(&m).det().unwrap());
    });
}

criterion_group!(benches, bench_gaussian, bench_det);
criterion_main!(benches);
