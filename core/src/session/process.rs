//! session/process.rs
//! Incremental deflate/inflate steps and teardown on an initialized handle.
//!
//! Each step reads from the handle's pending input and writes into the
//! spare capacity of `out` (its `avail_out`). Codes come back raw, the
//! same way the initializer returns them.

use crate::constants::status;
use crate::session::handle::{CodecState, StreamHandle};
use crate::types::Flush;

fn map_status(s: flate2::Status) -> i32 {
    match s {
        flate2::Status::Ok        => status::Z_OK,
        flate2::Status::BufError  => status::Z_BUF_ERROR,
        flate2::Status::StreamEnd => status::Z_STREAM_END,
    }
}

/// Run one compression step.
///
/// Returns `Z_STREAM_ERROR` when the handle is not ready for deflate.
pub fn deflate(handle: &mut StreamHandle, out: &mut Vec<u8>, flush: Flush) -> i32 {
    let (result, consumed, produced) = {
        let CodecState::Deflate(codec) = &mut handle.state else {
            return status::Z_STREAM_ERROR;
        };
        let input: &[u8] = match handle.next_in.as_deref() {
            Some(buf) => &buf[handle.in_pos..],
            None => &[],
        };

        let before_in = codec.total_in();
        let before_out = codec.total_out();
        let result = codec.compress_vec(input, out, flush.into());
        (
            result,
            (codec.total_in() - before_in) as usize,
            codec.total_out() - before_out,
        )
    };

    handle.consume(consumed);
    handle.total_out += produced;

    match result {
        Ok(s) => map_status(s),
        Err(e) => {
            handle.msg = Some(e.to_string());
            status::Z_STREAM_ERROR
        }
    }
}

/// Run one decompression step.
///
/// Corrupt input returns `Z_DATA_ERROR` with `msg` set.
pub fn inflate(handle: &mut StreamHandle, out: &mut Vec<u8>, flush: Flush) -> i32 {
    let (result, consumed, produced) = {
        let CodecState::Inflate(codec) = &mut handle.state else {
            return status::Z_STREAM_ERROR;
        };
        let input: &[u8] = match handle.next_in.as_deref() {
            Some(buf) => &buf[handle.in_pos..],
            None => &[],
        };

        let before_in = codec.total_in();
        let before_out = codec.total_out();
        let result = codec.decompress_vec(input, out, flush.into());
        (
            result,
            (codec.total_in() - before_in) as usize,
            codec.total_out() - before_out,
        )
    };

    handle.consume(consumed);
    handle.total_out += produced;

    match result {
        Ok(s) => map_status(s),
        Err(e) => {
            handle.msg = Some(e.to_string());
            status::Z_DATA_ERROR
        }
    }
}

/// Tear down a deflate session. The handle returns to uninitialized.
pub fn deflate_end(handle: &mut StreamHandle) -> i32 {
    match handle.state {
        CodecState::Deflate(_) => {
            handle.state = CodecState::Uninitialized;
            status::Z_OK
        }
        _ => status::Z_STREAM_ERROR,
    }
}

/// Tear down an inflate session. The handle returns to uninitialized.
pub fn inflate_end(handle: &mut StreamHandle) -> i32 {
    match handle.state {
        CodecState::Inflate(_) => {
            handle.state = CodecState::Uninitialized;
            status::Z_OK
        }
        _ => status::Z_STREAM_ERROR,
    }
}

/// Restart a ready deflate session for a new stream, keeping its level.
pub fn deflate_reset(handle: &mut StreamHandle) -> i32 {
    match &mut handle.state {
        CodecState::Deflate(codec) => {
            codec.reset();
            handle.clear_progress();
            status::Z_OK
        }
        _ => status::Z_STREAM_ERROR,
    }
}

/// Restart a ready inflate session for a new stream of the same format.
pub fn inflate_reset(handle: &mut StreamHandle) -> i32 {
    let zlib_header = handle.format.zlib_header();
    match &mut handle.state {
        CodecState::Inflate(codec) => {
            codec.reset(zlib_header);
            handle.clear_progress();
            status::Z_OK
        }
        _ => status::Z_STREAM_ERROR,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::init::{initialize_deflate, initialize_inflate};

    #[test]
    fn step_on_uninitialized_handle_is_stream_error() {
        let mut h = StreamHandle::default();
        let mut out = Vec::with_capacity(16);
        assert_eq!(deflate(&mut h, &mut out, Flush::Finish), status::Z_STREAM_ERROR);
        assert_eq!(inflate(&mut h, &mut out, Flush::None), status::Z_STREAM_ERROR);
        assert!(out.is_empty());
    }

    #[test]
    fn step_in_wrong_mode_is_stream_error() {
        let mut h = StreamHandle::default();
        assert_eq!(initialize_inflate(&mut h), status::Z_OK);
        let mut out = Vec::with_capacity(16);
        assert_eq!(deflate(&mut h, &mut out, Flush::Finish), status::Z_STREAM_ERROR);
        assert_eq!(deflate_end(&mut h), status::Z_STREAM_ERROR);
        assert_eq!(inflate_end(&mut h), status::Z_OK);
    }

    #[test]
    fn end_twice_is_stream_error() {
        let mut h = StreamHandle::default();
        assert_eq!(initialize_deflate(&mut h), status::Z_OK);
        assert_eq!(deflate_end(&mut h), status::Z_OK);
        assert!(!h.is_ready());
        assert_eq!(deflate_end(&mut h), status::Z_STREAM_ERROR);
    }

    #[test]
    fn reset_allows_second_stream() {
        let mut h = StreamHandle::default();
        assert_eq!(initialize_deflate(&mut h), status::Z_OK);

        let mut first = Vec::with_capacity(64);
        h.set_input(b"one");
        assert_eq!(deflate(&mut h, &mut first, Flush::Finish), status::Z_STREAM_END);

        assert_eq!(deflate_reset(&mut h), status::Z_OK);
        assert_eq!(h.total_in(), 0);

        let mut second = Vec::with_capacity(64);
        h.set_input(b"one");
        assert_eq!(deflate(&mut h, &mut second, Flush::Finish), status::Z_STREAM_END);
        assert_eq!(first, second);
    }

    #[test]
    fn totals_track_progress() {
        let mut h = StreamHandle::default();
        assert_eq!(initialize_deflate(&mut h), status::Z_OK);
        let mut out = Vec::with_capacity(128);
        h.set_input(b"hello hello hello");
        assert_eq!(deflate(&mut h, &mut out, Flush::Finish), status::Z_STREAM_END);
        assert_eq!(h.total_in(), 17);
        assert_eq!(h.total_out(), out.len() as u64);
        assert_eq!(h.avail_in(), 0);
    }
}
