//! constants.rs
//! zlib status codes, level/flush sentinels, and session defaults.
//!
//! Values follow the zlib C convention so raw codes can be handed to
//! callers that already speak it.

/// Raw status codes returned by every session entry point.
pub mod status {
    pub const Z_OK: i32            = 0;
    pub const Z_STREAM_END: i32    = 1;
    pub const Z_NEED_DICT: i32     = 2;
    pub const Z_ERRNO: i32         = -1;
    pub const Z_STREAM_ERROR: i32  = -2;
    pub const Z_DATA_ERROR: i32    = -3;
    pub const Z_MEM_ERROR: i32     = -4;
    pub const Z_BUF_ERROR: i32     = -5;
    pub const Z_VERSION_ERROR: i32 = -6;
}

/// Compression level sentinels.
pub mod level {
    pub const Z_DEFAULT_COMPRESSION: i32 = -1;
    pub const Z_NO_COMPRESSION: i32      = 0;
    pub const Z_BEST_SPEED: i32          = 1;
    pub const Z_BEST_COMPRESSION: i32    = 9;
}

/// Flush modes accepted by deflate/inflate steps.
pub mod flush {
    pub const Z_NO_FLUSH: i32   = 0;
    pub const Z_SYNC_FLUSH: i32 = 2;
    pub const Z_FULL_FLUSH: i32 = 3;
    pub const Z_FINISH: i32     = 4;
}

/// Level used when `Z_DEFAULT_COMPRESSION` is requested.
pub const DEFAULT_LEVEL_DEFLATE: u32 = 6;

/// Output growth step for pipes and helpers (16 KiB).
pub const DEFAULT_CHUNK_SIZE: usize = 16 * 1024;

/// Max chunk size sanity bound (32 MiB).
pub const MAX_CHUNK_SIZE: usize = 32 * 1024 * 1024;

/// Default cap on inflated output per pipe (1 GiB).
pub const DEFAULT_MAX_OUTPUT: usize = 1024 * 1024 * 1024;
