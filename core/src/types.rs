//! types.rs
//! Typed views over the raw zlib codes, plus stream format/mode enums.
use std::fmt;
use num_enum::{IntoPrimitive, TryFromPrimitive};
use serde::{Deserialize, Serialize};

use crate::constants::{flush, status};

/// Typed zlib status. Entry points return the raw `i32`; this enum is for
/// naming codes in logs and errors.
#[repr(i32)]
#[derive(Copy, Clone, Debug, PartialEq, Eq, TryFromPrimitive, IntoPrimitive)]
pub enum Status {
    Ok            = status::Z_OK,
    StreamEnd     = status::Z_STREAM_END,
    NeedDict      = status::Z_NEED_DICT,
    Errno         = status::Z_ERRNO,
    StreamError   = status::Z_STREAM_ERROR,
    DataError     = status::Z_DATA_ERROR,
    MemError      = status::Z_MEM_ERROR,
    BufError      = status::Z_BUF_ERROR,
    VersionError  = status::Z_VERSION_ERROR,
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Status::Ok           => "Z_OK",
            Status::StreamEnd    => "Z_STREAM_END",
            Status::NeedDict     => "Z_NEED_DICT",
            Status::Errno        => "Z_ERRNO",
            Status::StreamError  => "Z_STREAM_ERROR",
            Status::DataError    => "Z_DATA_ERROR",
            Status::MemError     => "Z_MEM_ERROR",
            Status::BufError     => "Z_BUF_ERROR",
            Status::VersionError => "Z_VERSION_ERROR",
        };
        f.write_str(name)
    }
}

/// Flush mode for a single deflate/inflate step.
#[repr(i32)]
#[derive(Copy, Clone, Debug, PartialEq, Eq, TryFromPrimitive, IntoPrimitive)]
pub enum Flush {
    None   = flush::Z_NO_FLUSH,
    Sync   = flush::Z_SYNC_FLUSH,
    Full   = flush::Z_FULL_FLUSH,
    Finish = flush::Z_FINISH,
}

impl From<Flush> for flate2::FlushCompress {
    fn from(f: Flush) -> Self {
        match f {
            Flush::None   => flate2::FlushCompress::None,
            Flush::Sync   => flate2::FlushCompress::Sync,
            Flush::Full   => flate2::FlushCompress::Full,
            Flush::Finish => flate2::FlushCompress::Finish,
        }
    }
}

impl From<Flush> for flate2::FlushDecompress {
    fn from(f: Flush) -> Self {
        match f {
            Flush::None   => flate2::FlushDecompress::None,
            // Full flush has no inflate-side meaning; zlib treats it as sync.
            Flush::Sync | Flush::Full => flate2::FlushDecompress::Sync,
            Flush::Finish => flate2::FlushDecompress::Finish,
        }
    }
}

/// Container around the DEFLATE bit stream.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StreamFormat {
    /// RFC 1950 header + Adler-32 trailer.
    #[default]
    Zlib,
    /// Bare RFC 1951 blocks.
    Raw,
}

impl StreamFormat {
    pub(crate) fn zlib_header(self) -> bool {
        matches!(self, StreamFormat::Zlib)
    }
}

/// Direction a handle was initialized for.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum StreamMode {
    Deflate,
    Inflate,
}

impl fmt::Display for StreamMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StreamMode::Deflate => f.write_str("deflate"),
            StreamMode::Inflate => f.write_str("inflate"),
        }
    }
}
