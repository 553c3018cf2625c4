//! session/handle.rs
//! Caller-owned stream handle.
//!
//! Summary: Holds allocator hooks, the input cursor, running totals and the
//! codec state for one deflate or inflate session. The initializer only
//! populates what a session needs before its first step; it never
//! allocates the handle itself.

use std::fmt;
use flate2::{Compress, Decompress};

use crate::types::{StreamFormat, StreamMode};

/// Allocator hooks of a handle (zlib's `zalloc`/`zfree`/`opaque` triple).
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum Allocator {
    /// Freshly allocated handle, nothing chosen yet.
    #[default]
    Unset,
    /// Route codec allocations through the global allocator.
    PlatformDefault,
}

/// Codec state held inside a handle.
#[derive(Default)]
pub(crate) enum CodecState {
    #[default]
    Uninitialized,
    Deflate(Box<Compress>),
    Inflate(Box<Decompress>),
}

/// Compression stream handle.
///
/// `StreamHandle::default()` is the zero-initialized handle every
/// initializer expects. Re-initializing a handle that is already active is
/// a caller error: it is not rejected, and the previous session is dropped.
#[derive(Default)]
pub struct StreamHandle {
    pub(crate) allocator: Allocator,
    pub(crate) next_in: Option<Vec<u8>>,
    pub(crate) in_pos: usize,
    pub(crate) total_in: u64,
    pub(crate) total_out: u64,
    pub(crate) msg: Option<String>,
    pub(crate) format: StreamFormat,
    pub(crate) state: CodecState,
}

impl StreamHandle {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the pending input with a copy of `data`.
    pub fn set_input(&mut self, data: &[u8]) {
        self.next_in = Some(data.to_vec());
        self.in_pos = 0;
    }

    /// Unread part of the pending input; `None` is the null input pointer.
    pub fn next_in(&self) -> Option<&[u8]> {
        self.next_in.as_deref().map(|buf| &buf[self.in_pos..])
    }

    /// Bytes still available to read from the pending input.
    pub fn avail_in(&self) -> usize {
        self.next_in.as_ref().map_or(0, |buf| buf.len() - self.in_pos)
    }

    pub fn total_in(&self) -> u64 {
        self.total_in
    }

    pub fn total_out(&self) -> u64 {
        self.total_out
    }

    /// Last codec error message, if any step failed.
    pub fn msg(&self) -> Option<&str> {
        self.msg.as_deref()
    }

    pub fn allocator(&self) -> Allocator {
        self.allocator
    }

    /// Format chosen at initialization (zlib until initialized otherwise).
    pub fn format(&self) -> StreamFormat {
        self.format
    }

    /// Mode the handle is ready for, or `None` while uninitialized.
    pub fn mode(&self) -> Option<StreamMode> {
        match self.state {
            CodecState::Uninitialized => None,
            CodecState::Deflate(_) => Some(StreamMode::Deflate),
            CodecState::Inflate(_) => Some(StreamMode::Inflate),
        }
    }

    pub fn is_ready(&self) -> bool {
        self.mode().is_some()
    }

    /// Advance the input cursor after a codec step consumed `n` bytes.
    pub(crate) fn consume(&mut self, n: usize) {
        self.in_pos += n;
        self.total_in += n as u64;
        if self.avail_in() == 0 {
            // Fully drained input is released; the cursor stays valid.
            if let Some(buf) = self.next_in.as_mut() {
                buf.clear();
            }
            self.in_pos = 0;
        }
    }

    /// Clear cursors and totals, keeping allocator hooks.
    pub(crate) fn clear_progress(&mut self) {
        self.total_in = 0;
        self.total_out = 0;
        self.msg = None;
    }
}

impl fmt::Debug for StreamHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StreamHandle")
            .field("allocator", &self.allocator)
            .field("mode", &self.mode())
            .field("avail_in", &self.avail_in())
            .field("next_in_is_null", &self.next_in.is_none())
            .field("total_in", &self.total_in)
            .field("total_out", &self.total_out)
            .field("msg", &self.msg)
            .finish()
    }
}
