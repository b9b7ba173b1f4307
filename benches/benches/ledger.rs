//! Benchmarks for header commits and bridge mints on each backend.

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion, Throughput};
use lucid_benchmarks::db::{generate_headers, BenchBackend, BenchSetup};
use lucid_chain_types::MintRecord;
use lucid_identifiers::{Identity, SourceTxId};
#[allow(
    unused_imports,
    clippy::allow_attributes,
    reason = "used by the library half"
)]
use {lucid_db_store_sled as _, lucid_db_types as _, lucid_test_utils as _, tempfile as _};

/// Batch sizes to test across benchmarks.
const BATCH_SIZES: &[usize] = &[1, 10, 100, 1_000];

fn bench_put_headers(c: &mut Criterion) {
    for backend in BenchBackend::available_backends() {
        let mut group = c.benchmark_group(format!("put_headers_{}", backend.name()));
        for &count in BATCH_SIZES {
            let headers = generate_headers(count);
            group.throughput(Throughput::Elements(count as u64));
            group.bench_with_input(BenchmarkId::from_parameter(count), &headers, |b, headers| {
                b.iter_batched(
                    || BenchSetup::new(backend),
                    |setup| {
                        for header in headers {
                            black_box(setup.header_db.try_put_header(header).unwrap());
                        }
                    },
                    BatchSize::PerIteration,
                );
            });
        }
        group.finish();
    }
}

fn bench_record_mints(c: &mut Criterion) {
    for backend in BenchBackend::available_backends() {
        let mut group = c.benchmark_group(format!("record_mints_{}", backend.name()));
        for &count in BATCH_SIZES {
            let ids: Vec<_> = (0..count)
                .map(|i| SourceTxId::from(format!("tx-{i}").as_str()))
                .collect();
            group.throughput(Throughput::Elements(count as u64));
            group.bench_with_input(BenchmarkId::from_parameter(count), &ids, |b, ids| {
                b.iter_batched(
                    || BenchSetup::new(backend),
                    |setup| {
                        for id in ids {
                            let record = MintRecord::new(Identity::default(), 1);
                            black_box(setup.bridge_db.record_mint(id, record, u128::MAX).unwrap());
                        }
                    },
                    BatchSize::PerIteration,
                );
            });
        }
        group.finish();
    }
}

criterion_group!(benches, bench_put_headers, bench_record_mints);
criterion_main!(benches);
