//! Core module: Fixed-Capacity Byte Ring Buffer
//!
//! Prinsip desain:
//! - No-Allocation: storage inline di dalam struct, tidak ada heap
//! - Branch-Free Indexing: physical offset via bitmask, tanpa division
//! - Bulk Copy: transfer wraparound di-split jadi dua copy contiguous

mod ring_buffer;

pub use ring_buffer::{RingBuffer, RingBufferError};
