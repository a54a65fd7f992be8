use criterion::{black_box, criterion_group, criterion_main, Criterion};
use matrix::{Float, Matrix};

fn square(n: usize, v: Float) -> Matrix {
    Matrix::from_data(n, n, vec![v; n * n]).expect("could not build matrix")
}

pub fn compute_add(c: &mut Criterion) {
    let this = black_box(square(25, 1.23123));
    let other = black_box(square(25, 1.23123));

    c.bench_function("compute_add", |b| b.iter(|| this.compute_add(&other)));
}

pub fn compute_subtract(c: &mut Criterion) {
    let this = black_box(square(25, 1.23123));
    let other = black_box(square(25, 1.23123));

    c.bench_function("compute_subtract", |b| {
        b.iter(|| this.compute_subtract(&other))
    });
}

pub fn compute_scalar_multiply(c: &mut Criterion) {
    let this = black_box(square(25, 1.23123));

    c.bench_function("compute_scalar_multiply", |b| {
        b.iter(|| this.compute_scalar_multiply(black_box(22.0)))
    });
}

pub fn compute_multiply(c: &mut Criterion) {
    let this = black_box(square(30, 1.23123));
    let other = black_box(square(30, 1.23123));

    c.bench_function("compute_multiply", |b| {
        b.iter(|| this.compute_multiply(&other))
    });
}

pub fn transpose(c: &mut Criterion) {
    let mut this = black_box(
        Matrix::from_data(20, 30, vec![1.23123; 600]).expect("could not build matrix"),
    );

    c.bench_function("transpose", |b| {
        b.iter(|| {
            this.transpose();
        })
    });
}

criterion_group!(
    benches,
    compute_add,
    compute_subtract,
    compute_scalar_multiply,
    compute_multiply,
    transpose,
);
criterion_main!(benches);
