// Copyright (c) 2025 Felix Kahle.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use munkres_hungarian::problem::HungarianProblem;
use munkres_model::matrix::Matrix;
use rand::{Rng, SeedableRng, rngs::StdRng};
use std::hint::black_box;

const SHAPES: &[(usize, usize)] = &[(8, 8), (32, 32), (64, 64), (32, 48), (96, 64), (128, 128)];

fn random_costs(rng: &mut StdRng, num_rows: usize, num_cols: usize) -> Matrix<i64> {
    let data = (0..num_rows * num_cols)
        .map(|_| rng.random_range(0..1_000))
        .collect();
    Matrix::from_vec(num_rows, num_cols, data).expect("shape matches data length")
}

fn random_float_costs(rng: &mut StdRng, num_rows: usize, num_cols: usize) -> Matrix<f64> {
    let data = (0..num_rows * num_cols)
        .map(|_| rng.random_range(0.0..1_000.0))
        .collect();
    Matrix::from_vec(num_rows, num_cols, data).expect("shape matches data length")
}

fn bench_integer_instances(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(0x5eed);
    let mut group = c.benchmark_group("hungarian_i64");

    for &(num_rows, num_cols) in SHAPES {
        let costs = random_costs(&mut rng, num_rows, num_cols);
        let mut problem = HungarianProblem::new();
        problem
            .set_cost_matrix(costs)
            .expect("random costs are non-negative");

        let label = format!("{}x{}", num_rows, num_cols);
        group.throughput(Throughput::Elements((num_rows * num_cols) as u64));
        group.bench_with_input(BenchmarkId::new("solve", &label), &label, |b, _| {
            b.iter(|| {
                let stats = problem.solve().expect("cost matrix is set");
                black_box(stats.augmentations);
            })
        });
    }
    group.finish();
}

fn bench_float_instances(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(0xf10a7);
    let mut group = c.benchmark_group("hungarian_f64");

    for &(num_rows, num_cols) in SHAPES {
        let costs = random_float_costs(&mut rng, num_rows, num_cols);
        let mut problem = HungarianProblem::new();
        problem
            .set_cost_matrix(costs)
            .expect("random costs are non-negative");

        let label = format!("{}x{}", num_rows, num_cols);
        group.throughput(Throughput::Elements((num_rows * num_cols) as u64));
        group.bench_with_input(BenchmarkId::new("solve", &label), &label, |b, _| {
            b.iter(|| {
                problem.solve().expect("cost matrix is set");
                black_box(problem.assignment().expect("problem is solved").total_cost());
            })
        });
    }
    group.finish();
}

criterion_group!(benches, bench_integer_instances, bench_float_instances);
criterion_main!(benches);
