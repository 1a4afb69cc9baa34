//! # Canonseal Pipeline Benchmarks
//!
//! Throughput checks for the stages a CI sealing run pays for:
//!
//! | Stage | Work | Target |
//! |-------|------|--------|
//! | digest | SHA-256 over record bytes | >500 MB/s |
//! | build | aggregate 1k records | <50ms |
//! | sign | Ed25519 detached | <1ms |
//! | verify | Ed25519 detached | <2ms |

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use seal_crypto::{sha256, Ed25519KeyPair};
use seal_pipeline::{build_manifest, verify_detached, Record, RecordStatus};

fn bench_digest_throughput(c: &mut Criterion) {
    let mut group = c.benchmark_group("digest");

    for size in [1024usize, 64 * 1024, 1024 * 1024] {
        let data = vec![0xA5u8; size];
        group.throughput(Throughput::Bytes(size as u64));
        group.bench_with_input(BenchmarkId::new("sha256", size), &data, |b, data| {
            b.iter(|| black_box(sha256(data)))
        });
    }

    group.finish();
}

fn bench_build_manifest(c: &mut Criterion) {
    let mut group = c.benchmark_group("aggregator");

    for count in [10usize, 100, 1000] {
        let records: Vec<Record> = (0..count)
            .map(|i| {
                Record::new(
                    format!("REC-{:05}", i),
                    RecordStatus::Pass,
                    vec![(i % 251) as u8; 512],
                )
            })
            .collect();

        group.throughput(Throughput::Elements(count as u64));
        group.bench_with_input(
            BenchmarkId::new("build_manifest", count),
            &records,
            |b, records| b.iter(|| black_box(build_manifest(records, "BATCH-BENCH"))),
        );
    }

    group.finish();
}

fn bench_sign_verify(c: &mut Criterion) {
    let keypair = Ed25519KeyPair::from_seed([0xB7u8; 32]);
    let manifest_bytes = vec![0x42u8; 4096];
    let public_key_hex = keypair.public_key().to_hex();
    let signature_hex = keypair.sign(&manifest_bytes).to_hex();

    let mut group = c.benchmark_group("signing");

    group.bench_function("sign_manifest_4k", |b| {
        b.iter(|| black_box(keypair.sign(&manifest_bytes)))
    });

    group.bench_function("verify_manifest_4k", |b| {
        b.iter(|| {
            black_box(verify_detached(&public_key_hex, &manifest_bytes, &signature_hex).is_ok())
        })
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_digest_throughput,
    bench_build_manifest,
    bench_sign_verify
);
criterion_main!(benches);
