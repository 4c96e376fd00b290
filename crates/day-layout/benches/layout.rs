use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use day_layout::generate::generate_events;
use day_layout::{format_events, lay_out_day_with, ColumnPolicy, LayoutOptions};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::hint::black_box;

fn bench_layout(c: &mut Criterion) {
    let mut group = c.benchmark_group("lay_out_day");

    for count in [10usize, 100, 1000] {
        let events = format_events(generate_events(count, &mut StdRng::seed_from_u64(1)));

        for policy in [ColumnPolicy::Group, ColumnPolicy::Expand] {
            let options = LayoutOptions::new(600).with_policy(policy);
            group.bench_with_input(
                BenchmarkId::new(format!("{:?}", policy).to_lowercase(), count),
                &events,
                |b, events| b.iter(|| lay_out_day_with(black_box(events), &options)),
            );
        }
    }

    group.finish();
}

criterion_group!(benches, bench_layout);
criterion_main!(benches);
