//! zstream-core
//!
//! zlib stream sessions: a caller-owned stream handle, a two-mode
//! initializer that returns raw zlib status codes, and chunked pipes and
//! helpers built on top of it.

#![forbid(unsafe_code)]

// Shared and top level
pub mod constants;
pub mod types;
pub mod utils;
pub mod config;
pub mod logging;

// Session core and layers above it
pub mod session;
pub mod compression;
pub mod telemetry;

// -----------------------------------------------------------------------------
// Prelude (Rust users)
// -----------------------------------------------------------------------------
pub mod prelude {
    pub use crate::config::SessionParams;
    pub use crate::constants::{level, status};
    pub use crate::compression::{
        compress_data, decompress_data, CompressionError, Compressor, Decompressor, DeflatePipe,
        InflatePipe,
    };
    pub use crate::session::{
        deflate, deflate_end, inflate, inflate_end, initialize_deflate, initialize_inflate,
        StreamHandle,
    };
    pub use crate::types::{Flush, Status, StreamFormat};
}
