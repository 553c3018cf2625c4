//! telemetry/snapshot.rs
//!
//! Immutable view of a session's counters and timings, ready to serialize.

use std::time::Duration;
use serde::{Deserialize, Serialize};

use crate::telemetry::counters::SessionCounters;
use crate::telemetry::timers::{SessionTimer, StageTimes};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionSnapshot {
    pub chunks: u64,
    pub codec_calls: u64,
    pub bytes_in: u64,
    pub bytes_out: u64,
    /// `bytes_out / bytes_in`; below 1.0 when deflate shrank the data.
    pub ratio: f64,
    pub throughput_in_bytes_per_sec: f64,
    pub elapsed: Duration,
    pub stage_times: StageTimes,
}

impl SessionSnapshot {
    pub fn from(counters: &SessionCounters, timer: &SessionTimer) -> Self {
        let elapsed = timer.elapsed();

        let ratio = if counters.bytes_in > 0 {
            counters.bytes_out as f64 / counters.bytes_in as f64
        } else {
            0.0
        };

        let throughput = if elapsed.as_secs_f64() > 0.0 {
            counters.bytes_in as f64 / elapsed.as_secs_f64()
        } else {
            0.0
        };

        Self {
            chunks: counters.chunks,
            codec_calls: counters.codec_calls,
            bytes_in: counters.bytes_in,
            bytes_out: counters.bytes_out,
            ratio,
            throughput_in_bytes_per_sec: throughput,
            elapsed,
            stage_times: timer.stage_times.clone(),
        }
    }

    /// Stage time can never exceed wall time.
    pub fn sanity_check(&self) -> bool {
        self.ratio >= 0.0 && self.stage_times.total() <= self.elapsed
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}
