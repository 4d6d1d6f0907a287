//! Truncation Demo - Best-Effort Ring Buffer Semantics
//!
//! Demonstrasi perilaku yang sering salah diimplementasikan:
//! 1. Overflow: enqueue melebihi kapasitas, excess di-drop secara diam
//! 2. Short read: dequeue melebihi isi, hasilnya partial, bukan error
//! 3. Wraparound: transfer melewati physical end di-split jadi dua copy
//!
//! Usage:
//!   cargo run --release --example truncation_demo

use std::time::Instant;
use torus::RingBuffer;

fn main() {
    println!("🍩 Torus Ring Buffer - Demo v0.1");
    println!("================================\n");

    demo_truncation();
    demo_short_read();
    demo_wraparound();
    benchmark_bulk_transfer();

    println!("\n✅ Demo complete!");
}

fn demo_truncation() {
    println!("📦 Overflow Truncation");
    println!("----------------------");

    let mut rb: RingBuffer<128> = RingBuffer::new();
    let oversized = vec![0xABu8; 200];

    let accepted = rb.enqueue(&oversized);
    println!("  Requested: {} bytes", oversized.len());
    println!("  Accepted:  {} bytes (excess dropped)", accepted);
    println!("  Occupied:  {} / {}", rb.len(), rb.capacity());
    println!("  Full:      {}\n", rb.is_full());
}

fn demo_short_read() {
    println!("📦 Short Read");
    println!("-------------");

    let mut rb: RingBuffer<128> = RingBuffer::new();
    rb.enqueue(b"only ten b");

    let mut out = [0u8; 64];
    let produced = rb.dequeue(&mut out).unwrap();
    println!("  Requested: {} bytes", out.len());
    println!("  Produced:  {} bytes (partial, bukan error)", produced);
    println!("  Empty now: {}\n", rb.is_empty());
}

fn demo_wraparound() {
    println!("📦 Wraparound Split");
    println!("-------------------");

    let mut rb: RingBuffer<128> = RingBuffer::new();
    let mut sink = [0u8; 128];

    // Dorong cursor ke offset 126
    rb.enqueue(&[0u8; 126]);
    rb.dequeue(&mut sink[..126]).unwrap();

    // Write berikutnya split: offset 126..128 lalu wrap ke 0..3
    let src = [0x11, 0x22, 0x33, 0x44, 0x55];
    rb.enqueue(&src);

    let mut out = [0u8; 5];
    rb.dequeue(&mut out).unwrap();
    println!("  Wrote {:02X?} across the physical end", src);
    println!("  Read  {:02X?} back in order", out);
    println!("  Intact: {}\n", out == src);
}

fn benchmark_bulk_transfer() {
    println!("📊 Bulk Transfer Benchmark");
    println!("--------------------------");

    const ITERATIONS: usize = 1_000_000;
    const CHUNK: usize = 64;

    let mut rb: RingBuffer<65536> = RingBuffer::new();
    let src = [0xA5u8; CHUNK];
    let mut dst = [0u8; CHUNK];

    // Warm up
    for _ in 0..1000 {
        rb.enqueue(&src);
        rb.dequeue(&mut dst).unwrap();
    }

    let start = Instant::now();
    for _ in 0..ITERATIONS {
        rb.enqueue(&src);
        rb.dequeue(&mut dst).unwrap();
    }
    let duration = start.elapsed();

    let cycle_ns = duration.as_nanos() as f64 / ITERATIONS as f64;
    let throughput = (ITERATIONS * CHUNK) as f64 / duration.as_secs_f64() / 1_000_000.0;

    println!("  Chunk size: {} bytes", CHUNK);
    println!("  Operations: {}", ITERATIONS);
    println!("  Cycle latency: {:.2} ns/op", cycle_ns);
    println!("  Throughput:    {:.2} MB/sec", throughput);
}
