//! Benchmarks for tuple navigation.

use criterion::{criterion_group, criterion_main, Criterion};
use trituple::algo::boundary::vertex_tuples;
use trituple::prelude::*;

fn create_grid_faces(n: usize) -> Vec<[i32; 3]> {
    let mut faces = Vec::with_capacity(n * n * 2);

    for j in 0..n {
        for i in 0..n {
            let v00 = (j * (n + 1) + i) as i32;
            let v10 = v00 + 1;
            let v01 = v00 + (n + 1) as i32;
            let v11 = v01 + 1;

            faces.push([v00, v10, v11]);
            faces.push([v00, v11, v01]);
        }
    }

    faces
}

fn bench_adjacency_construction(c: &mut Criterion) {
    let faces = create_grid_faces(50);

    c.bench_function("build_adjacency_50x50", |b| {
        b.iter(|| TriangleAdjacency::build(&faces, &AdjacencyOptions::default()).unwrap());
    });
}

fn bench_navigation(c: &mut Criterion) {
    let faces = create_grid_faces(50);
    let adjacency = TriangleAdjacency::build(&faces, &AdjacencyOptions::default()).unwrap();
    let tables = adjacency.tables(&faces).unwrap();
    let starts: Vec<TupleState> = vertex_tuples(tables).into_iter().flatten().collect();

    c.bench_function("vertex_rings_all", |b| {
        b.iter(|| {
            let mut count = 0;
            for state in &starts {
                let mut nav = TupleNavigator::new(tables, state.face, state.edge);
                nav.set_state(*state);
                count += nav.ring().count();
            }
            count
        });
    });

    c.bench_function("face_fans_all", |b| {
        b.iter(|| {
            let mut count = 0;
            for state in &starts {
                let mut nav = TupleNavigator::new(tables, state.face, state.edge);
                nav.set_state(*state);
                count += nav.fan().count();
            }
            count
        });
    });
}

fn bench_boundary_scan(c: &mut Criterion) {
    let faces = create_grid_faces(50);
    let adjacency = TriangleAdjacency::build(&faces, &AdjacencyOptions::default()).unwrap();
    let tables = adjacency.tables(&faces).unwrap();

    c.bench_function("boundary_vertices_parallel", |b| {
        let options = BoundaryOptions::default();
        b.iter(|| boundary_vertices(tables, &options));
    });

    c.bench_function("boundary_vertices_sequential", |b| {
        let options = BoundaryOptions::default().sequential();
        b.iter(|| boundary_vertices(tables, &options));
    });
}

criterion_group!(
    benches,
    bench_adjacency_construction,
    bench_navigation,
    bench_boundary_scan
);
criterion_main!(benches);
