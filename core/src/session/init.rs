//! session/init.rs
//! Compression session initializer.
//!
//! Brings a freshly allocated `StreamHandle` into a ready state for either
//! deflate or inflate, returning the raw zlib status code unmodified.
//!
//! Contract:
//! - `Z_OK` means the handle is ready for its first step.
//! - Any other code means the handle is not initialized: do not step it and
//!   do not tear it down.
//! - Calling an initializer on an already active handle is the caller's
//!   responsibility. It is not guarded here; the previous session is
//!   discarded.
//! - No logging, retries or interpretation happen at this layer.

use flate2::{Compress, Compression, Decompress};

use crate::constants::{level, status, DEFAULT_LEVEL_DEFLATE};
use crate::session::handle::{Allocator, CodecState, StreamHandle};
use crate::types::StreamFormat;

/// Initialize `handle` for zlib compression at the default level.
pub fn initialize_deflate(handle: &mut StreamHandle) -> i32 {
    initialize_deflate_with(handle, level::Z_DEFAULT_COMPRESSION, StreamFormat::Zlib)
}

/// Initialize `handle` for zlib decompression.
pub fn initialize_inflate(handle: &mut StreamHandle) -> i32 {
    initialize_inflate_with(handle, StreamFormat::Zlib)
}

/// Initialize `handle` for compression with an explicit level and format.
///
/// `level` is `Z_DEFAULT_COMPRESSION` or `0..=9`; anything else returns
/// `Z_STREAM_ERROR` and leaves the handle uninitialized.
pub fn initialize_deflate_with(handle: &mut StreamHandle, lvl: i32, format: StreamFormat) -> i32 {
    handle.allocator = Allocator::PlatformDefault;

    let compression = match lvl {
        level::Z_DEFAULT_COMPRESSION => Compression::new(DEFAULT_LEVEL_DEFLATE),
        level::Z_NO_COMPRESSION..=level::Z_BEST_COMPRESSION => Compression::new(lvl as u32),
        _ => {
            handle.state = CodecState::Uninitialized;
            return status::Z_STREAM_ERROR;
        }
    };

    handle.format = format;
    handle.state = CodecState::Deflate(Box::new(Compress::new(compression, format.zlib_header())));
    handle.clear_progress();
    status::Z_OK
}

/// Initialize `handle` for decompression of the given format.
///
/// Clears the input cursor (`avail_in = 0`, `next_in = null`) since no
/// input has been supplied yet.
pub fn initialize_inflate_with(handle: &mut StreamHandle, format: StreamFormat) -> i32 {
    handle.allocator = Allocator::PlatformDefault;
    handle.next_in = None;
    handle.in_pos = 0;

    handle.format = format;
    handle.state = CodecState::Inflate(Box::new(Decompress::new(format.zlib_header())));
    handle.clear_progress();
    status::Z_OK
}
