/*!
 * Policy Benchmarks
 * Simulation cost of each policy as the process set grows
 */

use cpu_sched_sim::{render_report, simulate, Algorithm, ProcessSpec, SimConfig};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

// Deterministic mixed workload: staggered arrivals, bursts 1..=20, all three priorities
fn workload(count: usize) -> Vec<ProcessSpec> {
    (0..count)
        .map(|i| {
            let i = i as u64;
            ProcessSpec::new(
                format!("P{}", i + 1),
                (i * 7) % (count as u64 * 3),
                (i * 13) % 20 + 1,
                (i % 3) as u8 + 1,
            )
        })
        .collect()
}

fn bench_policies(c: &mut Criterion) {
    let config = SimConfig::default();

    for algorithm in Algorithm::ALL {
        let mut group = c.benchmark_group(format!("simulate/{}", algorithm));

        for count in [10usize, 100, 1000] {
            let specs = workload(count);
            group.throughput(Throughput::Elements(count as u64));
            group.bench_with_input(BenchmarkId::from_parameter(count), &specs, |b, specs| {
                b.iter(|| simulate(black_box(algorithm), black_box(specs), &config))
            });
        }

        group.finish();
    }
}

fn bench_report_rendering(c: &mut Criterion) {
    let config = SimConfig::default();
    let outcome = simulate(Algorithm::RoundRobin, &workload(200), &config);

    c.bench_function("render_report/round_robin_200", |b| {
        b.iter(|| render_report(black_box(&outcome)))
    });
}

criterion_group!(benches, bench_policies, bench_report_rendering);
criterion_main!(benches);
