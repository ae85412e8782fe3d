#[macro_use]
extern crate criterion;
extern crate perfect_maze;
extern crate rand;

use criterion::Criterion;
use perfect_maze::cells::Cartesian2DCoordinate;
use perfect_maze::generators;
use perfect_maze::grid::MediumGridGraph;
use perfect_maze::pathing;
use perfect_maze::units::Dimension;
use rand::{SeedableRng, XorShiftRng};

fn bench_shortest_path_32_u16(c: &mut Criterion) {
    let mut g = MediumGridGraph::new(Dimension(32)).unwrap();
    let mut rng: XorShiftRng = SeedableRng::from_seed([5, 6, 7, 8]);
    generators::recursive_backtracker(&mut g, &mut rng).unwrap();

    let start = Cartesian2DCoordinate::new(0, 0);
    let end = Cartesian2DCoordinate::new(31, 31);

    c.bench_function("shortest_path_32_u16", move |b| {
        b.iter(|| pathing::shortest_path(&g, start, end).unwrap())
    });
}

criterion_group!(benches, bench_shortest_path_32_u16);
criterion_main!(benches);
