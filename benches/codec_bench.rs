// In compresso-core/benches/codec_bench.rs

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use compresso::config::CompressoConfig;
use compresso::kernels::{dispatch_decode, dispatch_encode};
use compresso::pipeline::smart_compress;
use compresso::types::Algorithm;

/// Generates a vector of highly compressible data.
fn generate_low_entropy_bytes(size: usize) -> Vec<u8> {
    let mut data = Vec::with_capacity(size);
    let pattern = b"abcdefgABCDEFG12345";
    while data.len() < size {
        data.extend_from_slice(pattern);
    }
    data.truncate(size);
    data
}

/// Generates long runs of identical bytes, the best case for RLE.
fn generate_run_bytes(size: usize) -> Vec<u8> {
    (0..size).map(|i| (i / 1000) as u8).collect()
}

/// Generates a vector of less compressible, more random-looking data.
fn generate_high_entropy_bytes(size: usize) -> Vec<u8> {
    let mut data = Vec::with_capacity(size);
    let pattern: Vec<u8> = (0..=255u8).collect();
    while data.len() < size {
        data.extend_from_slice(&pattern);
    }
    data.truncate(size);
    data
}

// --- Benchmark Suite ---

const BENCH_DATA_SIZE: usize = 65536; // 64 KB

fn bench_codecs(c: &mut Criterion) {
    let config = CompressoConfig::default();
    let datasets = [
        ("Low Entropy", generate_low_entropy_bytes(BENCH_DATA_SIZE)),
        ("Runs", generate_run_bytes(BENCH_DATA_SIZE)),
        ("High Entropy", generate_high_entropy_bytes(BENCH_DATA_SIZE)),
    ];

    let mut group = c.benchmark_group("Codec Kernels");
    group.throughput(criterion::Throughput::Bytes(BENCH_DATA_SIZE as u64));
    group.sample_size(20);

    for (label, data) in &datasets {
        for algorithm in Algorithm::ALL {
            let mut encoded = Vec::new();
            let metadata = dispatch_encode(algorithm, data, &mut encoded, &config).unwrap();

            group.bench_function(format!("Encode {} ({})", algorithm, label), |b| {
                let mut out = Vec::new();
                b.iter(|| {
                    dispatch_encode(algorithm, black_box(data), &mut out, &config).unwrap();
                    black_box(out.len())
                })
            });
            group.bench_function(format!("Decode {} ({})", algorithm, label), |b| {
                let mut out = Vec::new();
                b.iter(|| {
                    dispatch_decode(algorithm, black_box(&encoded), &metadata, &mut out).unwrap();
                    black_box(out.len())
                })
            });
        }
    }
    group.finish();

    let mut smart = c.benchmark_group("Smart Compression");
    smart.throughput(criterion::Throughput::Bytes(BENCH_DATA_SIZE as u64));
    smart.sample_size(10);
    for (label, data) in &datasets {
        smart.bench_function(format!("Smart ({})", label), |b| {
            b.iter(|| black_box(smart_compress(black_box(data), &config).unwrap()))
        });
    }
    smart.finish();
}

criterion_group!(benches, bench_codecs);
criterion_main!(benches);
