//! compression/mod.rs
//! Chunked compression and decompression on top of stream sessions.
//!
//! Notes:
//! - Pipes own one session handle each and keep stream state across chunks.
//! - Helpers run a whole buffer through a fresh pipe.
//! - Stream iterators drive a pipe from any `Read` source.

pub mod types;
pub mod registry;
pub mod codecs;
pub mod helpers;
pub mod stream;

pub use types::*;
pub use registry::*;
pub use codecs::{DeflatePipe, InflatePipe};
pub use helpers::*;
