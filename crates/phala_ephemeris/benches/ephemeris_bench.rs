use criterion::{Criterion, black_box, criterion_group, criterion_main};
use phala_ephemeris::{GeoLocation, Moment, ascendant_tropical_deg, compute_positions, tropical_longitudes};

fn positions_bench(c: &mut Criterion) {
    let moment = match Moment::new(2024, 3, 23, 19, 30, 5.5, GeoLocation::new(28.6, 77.2)) {
        Ok(m) => m,
        Err(e) => panic!("bench moment: {e}"),
    };

    let mut group = c.benchmark_group("ephemeris");
    group.bench_function("tropical_longitudes", |b| {
        b.iter(|| tropical_longitudes(black_box(8847.3)))
    });
    group.bench_function("ascendant_tropical", |b| {
        b.iter(|| ascendant_tropical_deg(black_box(8847.3), 28.6, 77.2))
    });
    group.bench_function("compute_positions", |b| {
        b.iter(|| compute_positions(black_box(&moment)))
    });
    group.finish();
}

criterion_group!(benches, positions_bench);
criterion_main!(benches);
