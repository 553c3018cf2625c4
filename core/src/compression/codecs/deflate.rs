//! Deflate/inflate pipes over a session handle.
//!
//! A pipe owns one `StreamHandle`, initializes it on construction and then
//! processes a stream chunk by chunk. Output buffers grow in `chunk_size`
//! steps until the codec stops making progress.

use tracing::{debug, error, instrument, warn};

use crate::config::SessionParams;
use crate::constants::status;
use crate::compression::types::{CompressionError, Compressor, Decompressor};
use crate::session::{
    deflate, deflate_end, deflate_reset, inflate, inflate_end, initialize_deflate_with,
    initialize_inflate_with, StreamHandle,
};
use crate::telemetry::{SessionCounters, SessionSnapshot, SessionTimer, Stage};
use crate::types::{Flush, StreamMode};
use crate::utils::status_name;

fn process_failed(mode: StreamMode, code: i32, handle: &StreamHandle) -> CompressionError {
    CompressionError::ProcessFailed {
        mode,
        status: code,
        msg: handle.msg().unwrap_or("no codec message").to_string(),
    }
}

/// Stateful compressor for one zlib (or raw deflate) stream.
pub struct DeflatePipe {
    handle: StreamHandle,
    params: SessionParams,
    finished: bool,
    counters: SessionCounters,
    timer: SessionTimer,
}

impl DeflatePipe {
    pub fn new() -> Result<Self, CompressionError> {
        Self::with_params(SessionParams::default())
    }

    #[instrument(skip_all, fields(level = params.level, format = ?params.format))]
    pub fn with_params(params: SessionParams) -> Result<Self, CompressionError> {
        params.validate()?;

        let mut handle = StreamHandle::new();
        let mut timer = SessionTimer::new();
        let code = timer.time(Stage::Init, || {
            initialize_deflate_with(&mut handle, params.level, params.format)
        });
        if code != status::Z_OK {
            error!(status = %status_name(code), "failed to initialize deflate stream");
            return Err(CompressionError::InitFailed { mode: StreamMode::Deflate, status: code });
        }

        debug!("deflate pipe ready");
        Ok(Self { handle, params, finished: false, counters: SessionCounters::default(), timer })
    }

    /// Compress `data`. With `is_last` the stream is finished and the pipe
    /// accepts no further input.
    pub fn pipe(&mut self, data: &[u8], is_last: bool) -> Result<Vec<u8>, CompressionError> {
        if self.finished {
            return Err(CompressionError::StateError("deflate pipe already finished".into()));
        }

        self.handle.set_input(data);
        let flush = if is_last { Flush::Finish } else { Flush::None };
        let step = self.params.chunk_size;
        let mut out = Vec::with_capacity(step);

        loop {
            if out.len() == out.capacity() {
                out.reserve(step);
            }
            let before = (self.handle.total_in(), self.handle.total_out());
            let handle = &mut self.handle;
            let code = self.timer.time(Stage::Deflate, || deflate(handle, &mut out, flush));
            self.counters.add_codec_call();

            match code {
                status::Z_STREAM_END => {
                    self.finished = true;
                    break;
                }
                status::Z_OK | status::Z_BUF_ERROR => {
                    let room_left = out.len() < out.capacity();
                    if !is_last && self.handle.avail_in() == 0 && room_left {
                        break;
                    }
                    let progressed = before != (self.handle.total_in(), self.handle.total_out());
                    if !progressed && room_left {
                        if is_last {
                            error!(status = %status_name(code), "deflate stalled before stream end");
                            return Err(process_failed(StreamMode::Deflate, code, &self.handle));
                        }
                        break;
                    }
                }
                other => {
                    error!(status = %status_name(other), "failed to deflate");
                    return Err(process_failed(StreamMode::Deflate, other, &self.handle));
                }
            }
        }

        self.counters.add_chunk(data.len(), out.len());
        Ok(out)
    }

    /// Start a new stream on the same handle and level.
    pub fn reset(&mut self) -> Result<(), CompressionError> {
        let code = deflate_reset(&mut self.handle);
        if code != status::Z_OK {
            return Err(process_failed(StreamMode::Deflate, code, &self.handle));
        }
        self.finished = false;
        Ok(())
    }

    pub fn is_finished(&self) -> bool {
        self.finished
    }

    pub fn counters(&self) -> &SessionCounters {
        &self.counters
    }

    pub fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot::from(&self.counters, &self.timer)
    }
}

impl Drop for DeflatePipe {
    fn drop(&mut self) {
        deflate_end(&mut self.handle);
    }
}

impl Compressor for DeflatePipe {
    fn compress_chunk(&mut self, input: &[u8], out: &mut Vec<u8>) -> Result<(), CompressionError> {
        let chunk = self.pipe(input, false)?;
        out.extend_from_slice(&chunk);
        Ok(())
    }

    fn finish(&mut self, out: &mut Vec<u8>) -> Result<(), CompressionError> {
        if self.finished {
            return Ok(());
        }
        let tail = self.pipe(&[], true)?;
        out.extend_from_slice(&tail);
        Ok(())
    }
}

/// Stateful decompressor for one zlib (or raw deflate) stream.
pub struct InflatePipe {
    handle: StreamHandle,
    params: SessionParams,
    finished: bool,
    counters: SessionCounters,
    timer: SessionTimer,
}

impl InflatePipe {
    pub fn new() -> Result<Self, CompressionError> {
        Self::with_params(SessionParams::default())
    }

    #[instrument(skip_all, fields(format = ?params.format, max_output = params.max_output))]
    pub fn with_params(params: SessionParams) -> Result<Self, CompressionError> {
        params.validate()?;

        let mut handle = StreamHandle::new();
        let mut timer = SessionTimer::new();
        let code = timer.time(Stage::Init, || initialize_inflate_with(&mut handle, params.format));
        if code != status::Z_OK {
            error!(status = %status_name(code), "failed to initialize inflate stream");
            return Err(CompressionError::InitFailed { mode: StreamMode::Inflate, status: code });
        }

        debug!("inflate pipe ready");
        Ok(Self { handle, params, finished: false, counters: SessionCounters::default(), timer })
    }

    /// Decompress `data`, returning whatever output it completes.
    ///
    /// Bytes after the end of the compressed stream are dropped.
    pub fn pipe(&mut self, data: &[u8]) -> Result<Vec<u8>, CompressionError> {
        if self.finished {
            if data.is_empty() {
                return Ok(Vec::new());
            }
            return Err(CompressionError::StateError("input after end of stream".into()));
        }

        self.handle.set_input(data);
        let step = self.params.chunk_size;
        let max = self.params.max_output;
        let mut out = Vec::with_capacity(step);

        loop {
            if out.len() == out.capacity() {
                out.reserve(step);
            }
            let before = (self.handle.total_in(), self.handle.total_out());
            let handle = &mut self.handle;
            let code = self.timer.time(Stage::Inflate, || inflate(handle, &mut out, Flush::None));
            self.counters.add_codec_call();

            let have = self.counters.bytes_out as usize + out.len();
            if have > max {
                warn!(have, max, "inflated output over limit");
                return Err(CompressionError::OutputLimitExceeded { have, max });
            }

            match code {
                status::Z_STREAM_END => {
                    self.finished = true;
                    if self.handle.avail_in() > 0 {
                        warn!(trailing = self.handle.avail_in(), "ignoring bytes after end of stream");
                    }
                    break;
                }
                status::Z_OK | status::Z_BUF_ERROR => {
                    let room_left = out.len() < out.capacity();
                    let progressed = before != (self.handle.total_in(), self.handle.total_out());
                    if room_left && (self.handle.avail_in() == 0 || !progressed) {
                        break;
                    }
                }
                other => {
                    error!(status = %status_name(other), "failed to inflate");
                    return Err(process_failed(StreamMode::Inflate, other, &self.handle));
                }
            }
        }

        self.counters.add_chunk(data.len(), out.len());
        Ok(out)
    }

    /// True once the end of the compressed stream has been seen.
    pub fn is_finished(&self) -> bool {
        self.finished
    }

    pub fn counters(&self) -> &SessionCounters {
        &self.counters
    }

    pub fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot::from(&self.counters, &self.timer)
    }
}

impl Drop for InflatePipe {
    fn drop(&mut self) {
        inflate_end(&mut self.handle);
    }
}

impl Decompressor for InflatePipe {
    fn decompress_chunk(&mut self, input: &[u8], out: &mut Vec<u8>) -> Result<(), CompressionError> {
        let chunk = self.pipe(input)?;
        out.extend_from_slice(&chunk);
        Ok(())
    }

    fn is_finished(&self) -> bool {
        self.finished
    }

    fn finish(&mut self) -> Result<(), CompressionError> {
        if self.finished {
            Ok(())
        } else {
            Err(CompressionError::TruncatedStream { consumed: self.counters.bytes_in })
        }
    }
}
