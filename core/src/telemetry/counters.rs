//! telemetry/counters.rs
//! Mutable counters used while a pipe processes a stream.
//!
//! Summary: Collects call counts and byte counts per pipe.
//! Converted into an immutable `SessionSnapshot` on demand.
use std::ops::AddAssign;
use serde::{Deserialize, Serialize};

#[derive(Default, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionCounters {
    /// Chunks piped through the session.
    pub chunks: u64,
    /// Codec step calls (a chunk may take several).
    pub codec_calls: u64,
    pub bytes_in: u64,
    pub bytes_out: u64,
}

impl SessionCounters {
    /// Record one piped chunk.
    pub fn add_chunk(&mut self, in_len: usize, out_len: usize) {
        self.chunks += 1;
        self.bytes_in += in_len as u64;
        self.bytes_out += out_len as u64;
    }

    pub fn add_codec_call(&mut self) {
        self.codec_calls += 1;
    }

    pub fn merge(&mut self, other: &SessionCounters) {
        self.chunks += other.chunks;
        self.codec_calls += other.codec_calls;
        self.bytes_in += other.bytes_in;
        self.bytes_out += other.bytes_out;
    }
}

impl AddAssign for SessionCounters {
    fn add_assign(&mut self, rhs: Self) {
        self.merge(&rhs);
    }
}
