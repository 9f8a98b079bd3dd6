use criterion::{Criterion, black_box, criterion_group, criterion_main};
use phala_chart::normalize_chart;
use phala_rules::{Track, evaluate, evaluate_both};
use serde_json::json;

fn rules_bench(c: &mut Criterion) {
    let player = normalize_chart(&json!({
        "planets": {
            "Sun": 12.0, "Moon": 300.0, "Mars": 315.0, "Mercury": 20.0,
            "Jupiter": 95.0, "Venus": 310.0, "Saturn": 200.0, "Rahu": 48.0
        },
        "ascendant": 280.0
    }));
    let event = normalize_chart(&json!({
        "planets": {
            "Sun": 160.0, "Moon": 182.0, "Mars": 75.0, "Mercury": 170.0,
            "Jupiter": 40.0, "Venus": 70.0, "Saturn": 330.0, "Rahu": 5.0
        },
        "ascendant": 10.0,
        "bowling_ascendant_rashi": "Makara"
    }));

    let mut group = c.benchmark_group("rules");
    group.bench_function("evaluate_batting", |b| {
        b.iter(|| evaluate(black_box(&player), black_box(&event), Track::Batting))
    });
    group.bench_function("evaluate_both", |b| {
        b.iter(|| evaluate_both(black_box(&player), black_box(&event)))
    });
    group.finish();
}

criterion_group!(benches, rules_bench);
criterion_main!(benches);
