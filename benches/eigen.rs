use criterion::{criterion_group, criterion_main, Criterion};
use std::hint::black_box;

use zmatrix::linalg::{cofactor_determinant, hessenberg, CharacteristicPolynomial, Determinant};
use zmatrix::{Complex, Matrix};

// ---------------------------------------------------------------------------
// Helpers: diagonally dominant complex matrices, always regular
// ---------------------------------------------------------------------------

fn dominant(n: usize) -> Matrix {
    Matrix::from_fn(n, n, |i, j| {
        let re = ((i + 1) * (j + 2)) as f64 * 0.1 + if i == j { n as f64 * 2.0 } else { 0.0 };
        let im = (i as f64 - j as f64) * 0.05;
        Complex::new(re, im)
    })
}

// ---------------------------------------------------------------------------
// Determinant
// ---------------------------------------------------------------------------

fn determinant(c: &mut Criterion) {
    let mut g = c.benchmark_group("determinant");
    for n in [4, 6, 8] {
        let m = dominant(n);
        g.bench_function(format!("lup_{}", n), |b| {
            b.iter(|| Determinant::new(black_box(&m)).unwrap().value())
        });
    }
    for n in [4, 6, 8] {
        let m = dominant(n);
        g.bench_function(format!("cofactor_{}", n), |b| {
            b.iter(|| cofactor_determinant(black_box(&m)).unwrap())
        });
    }
    g.finish();
}

// ---------------------------------------------------------------------------
// Inverse (adjugate) and rank
// ---------------------------------------------------------------------------

fn inverse(c: &mut Criterion) {
    let mut g = c.benchmark_group("inverse");
    for n in [3, 5, 7] {
        let m = dominant(n);
        g.bench_function(format!("adjugate_{}", n), |b| {
            b.iter(|| black_box(&m).clone().inverse().unwrap())
        });
    }
    let singular = Matrix::from_fn(5, 5, |i, j| Complex::from((5 * i + j) as f64));
    g.bench_function("rank_singular_5", |b| b.iter(|| black_box(&singular).rank()));
    g.finish();
}

// ---------------------------------------------------------------------------
// Eigenvalue pipeline
// ---------------------------------------------------------------------------

fn eigen(c: &mut Criterion) {
    let mut g = c.benchmark_group("eigen");
    for n in [4, 8] {
        let m = dominant(n);
        g.bench_function(format!("hessenberg_{}", n), |b| {
            b.iter(|| hessenberg(black_box(&m)).unwrap())
        });
        g.bench_function(format!("charpoly_{}", n), |b| {
            b.iter(|| CharacteristicPolynomial::new(black_box(&m)).unwrap())
        });
        g.bench_function(format!("eigenvalues_{}", n), |b| {
            b.iter(|| black_box(&m).eigenvalues().unwrap())
        });
    }
    g.finish();
}

criterion_group!(benches, determinant, inverse, eigen);
criterion_main!(benches);
