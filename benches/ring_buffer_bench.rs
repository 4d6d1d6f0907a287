//! Criterion benchmark untuk Ring Buffer
//!
//! Run dengan: cargo bench

use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use torus::RingBuffer;

fn bench_bulk_cycle(c: &mut Criterion) {
    let mut group = c.benchmark_group("ring_buffer");

    // Enqueue+dequeue cycle pada berbagai chunk size
    for chunk_size in [16usize, 64, 256, 1024] {
        group.throughput(Throughput::Bytes(chunk_size as u64));
        group.bench_function(format!("enqueue_dequeue_{}", chunk_size), |b| {
            let mut rb: RingBuffer<65536> = RingBuffer::new();
            let src = vec![0xA5u8; chunk_size];
            let mut dst = vec![0u8; chunk_size];
            b.iter(|| {
                rb.enqueue(black_box(&src));
                black_box(rb.dequeue(&mut dst).unwrap());
            });
        });
    }

    group.finish();
}

fn bench_wraparound(c: &mut Criterion) {
    let mut group = c.benchmark_group("wraparound");
    group.throughput(Throughput::Bytes(96));

    // Chunk 96 pada kapasitas 128: mayoritas transfer melewati physical
    // end dan memaksa split copy
    group.bench_function("split_copy_96_of_128", |b| {
        let mut rb: RingBuffer<128> = RingBuffer::new();
        let src = [0x5Au8; 96];
        let mut dst = [0u8; 96];
        b.iter(|| {
            rb.enqueue(black_box(&src));
            black_box(rb.dequeue(&mut dst).unwrap());
        });
    });

    group.finish();
}

fn bench_queries(c: &mut Criterion) {
    let mut group = c.benchmark_group("queries");
    group.throughput(Throughput::Elements(1));

    group.bench_function("len", |b| {
        let mut rb: RingBuffer<65536> = RingBuffer::new();
        rb.enqueue(&[0u8; 1024]);
        b.iter(|| black_box(rb.len()));
    });

    group.finish();
}

criterion_group!(benches, bench_bulk_cycle, bench_wraparound, bench_queries);
criterion_main!(benches);
