#![allow(missing_docs, unused_crate_dependencies)]

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use itertools::Itertools;
use semval::Version;

const PRE_RELEASES: &[&str] = &["", "alpha", "alpha.1", "beta.11", "rc.1", "0A.x-y-z"];

fn version_strings(count: u64) -> Vec<String> {
    (0..count)
        .map(|i| {
            let pre_release = PRE_RELEASES[i as usize % PRE_RELEASES.len()];
            let mut s = format!("{}.{}.{}", i % 3, i % 7, i % 11);
            if !pre_release.is_empty() {
                s += "-";
                s += pre_release;
            }
            if i % 2 == 0 {
                s += &format!("+build.{i}");
            }
            s
        })
        .collect()
}

fn criterion_benchmark(c: &mut Criterion) {
    for size in [1000, 100, 10] {
        let strings = version_strings(size);

        c.bench_with_input(BenchmarkId::new("parse", size), &strings, |b, input| {
            b.iter(|| {
                input
                    .iter()
                    .map(|s| Version::parse(s).unwrap())
                    .collect_vec()
            });
        });

        let versions = strings.iter().map(|s| Version::parse(s).unwrap()).collect_vec();

        c.bench_with_input(BenchmarkId::new("render", size), &versions, |b, input| {
            b.iter(|| input.iter().map(Version::to_string).collect_vec());
        });

        c.bench_with_input(BenchmarkId::new("sort_by_precedence", size), &versions, |b, input| {
            b.iter_batched(
                || input.clone(),
                |mut versions| versions.sort_by(Version::cmp_precedence),
                criterion::BatchSize::SmallInput,
            );
        });
    }
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
