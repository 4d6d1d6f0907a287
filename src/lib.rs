//! # torus - Fixed-Capacity Byte Ring Buffer
//!
//! Antrian byte FIFO dengan kapasitas tetap (power of 2) untuk embedded
//! dan low-latency path:
//!
//! - No-Allocation: storage inline, cocok untuk stack atau `static`
//! - Branch-Free Indexing: physical offset = `cursor & (N - 1)`
//! - Bulk Transfer: enqueue/dequeue per chunk, wraparound di-split
//! - Best-Effort Semantics: overflow di-truncate secara diam, bukan error
//!
//! ## Example
//!
//! ```
//! use torus::{RingBuffer, RingBufferError};
//!
//! let mut rb: RingBuffer<128> = RingBuffer::new();
//!
//! // Enqueue: returns jumlah byte yang diterima
//! let accepted = rb.enqueue(b"hello torus");
//! assert_eq!(accepted, 11);
//!
//! // Dequeue: copy keluar sebanyak yang tersedia (short read bukan error)
//! let mut out = [0u8; 16];
//! let produced = rb.dequeue(&mut out).unwrap();
//! assert_eq!(&out[..produced], b"hello torus");
//!
//! // Dequeue saat buffer kosong adalah satu-satunya failure
//! assert_eq!(rb.dequeue(&mut out), Err(RingBufferError::Empty));
//! ```

#![warn(missing_docs)]

pub mod core;

pub use crate::core::{RingBuffer, RingBufferError};
