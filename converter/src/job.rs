//! Conversion Jobs
//!
//! Runs one raw PCM buffer through a conversion plan, one scheduling period
//! at a time, the way a pipeline would call the engine.

use std::sync::atomic::{AtomicBool, Ordering};

use anyhow::Context;
use bytes::{Bytes, BytesMut};
use engine::{ConversionMode, ConversionPlan, SrcConfig, SrcError, StageInfo, StreamParams};
use interfaces::{AudioStream, AudioStreamConfig};
use serde::Serialize;
use tracing::{debug, info, warn};

use crate::config::{FallbackPolicy, JobConfig};

/// Stream capacity in scheduling periods
const STREAM_PERIODS: usize = 4;

/// Summary of one finished job
#[derive(Debug, Clone, Serialize)]
pub struct JobReport {
    /// Input file
    pub input: String,
    /// Output file
    pub output: String,
    /// Conversion mode, `None` when the audio was passed through unmodified
    pub mode: Option<ConversionMode>,
    /// Active stages
    pub stages: Vec<StageInfo>,
    /// FIR kernel backend
    pub kernel: Option<String>,
    /// Frames read from the input
    pub frames_in: u64,
    /// Frames written to the output
    pub frames_out: u64,
    /// Whether the job stopped early on request
    pub cancelled: bool,
}

/// Convert `input` according to `job`
pub fn convert_bytes(
    job: &JobConfig,
    engine: &SrcConfig,
    input: Bytes,
    cancel: &AtomicBool,
) -> anyhow::Result<(Bytes, JobReport)> {
    let frame_bytes = job.channels * job.format.container_bytes();
    let whole = input.len() - input.len() % frame_bytes;
    if whole != input.len() {
        warn!(
            "Job {}: dropping {} trailing bytes of a partial frame",
            job.label(),
            input.len() - whole
        );
    }
    let input = input.slice(..whole);

    let mut params = StreamParams::new(job.source_rate, job.sink_rate, job.channels, job.format);
    if let Some(period) = job.period_frames {
        params = params.with_period(period);
    }

    let mut report = JobReport {
        input: job.input.display().to_string(),
        output: job.output.display().to_string(),
        mode: None,
        stages: Vec::new(),
        kernel: None,
        frames_in: 0,
        frames_out: 0,
        cancelled: false,
    };

    let mut plan = match ConversionPlan::create(params, engine) {
        Ok(plan) => plan,
        Err(e @ SrcError::RateUnsupported { .. }) if job.fallback == FallbackPolicy::Passthrough => {
            warn!("Job {}: {}, passing audio through unmodified", job.label(), e);
            let frames = (input.len() / frame_bytes) as u64;
            report.frames_in = frames;
            report.frames_out = frames;
            return Ok((input, report));
        }
        Err(e) => {
            return Err(e).with_context(|| format!("creating plan for job {}", job.label()));
        }
    };
    report.mode = Some(plan.mode());
    report.stages = plan.stages();
    report.kernel = Some(plan.kernel().to_string());

    let capacity = STREAM_PERIODS * params.period_frames.max(params.source_period_frames()) + 64;
    let stream_config = AudioStreamConfig::new(job.format, job.channels, capacity);
    let mut source = AudioStream::new(stream_config)?;
    let mut sink = AudioStream::new(stream_config)?;

    let expected = input.len() as u64 * job.sink_rate as u64 / job.source_rate.max(1) as u64;
    let mut output = BytesMut::with_capacity(expected as usize + capacity * frame_bytes);
    let mut scratch = Vec::with_capacity(capacity * frame_bytes);
    let mut pending = input;
    let mut periods = 0u64;

    loop {
        if cancel.load(Ordering::Relaxed) {
            warn!("Job {}: cancelled after {} periods", job.label(), periods);
            report.cancelled = true;
            break;
        }

        let taken = source.write_bytes(&pending[..pending.len().min(capacity * frame_bytes)])?;
        pending = pending.slice(taken * frame_bytes..);

        if !plan.is_ready(&source, &sink) {
            if taken == 0 {
                break;
            }
            continue;
        }
        let done = plan.convert(&mut source, &mut sink)?;
        periods += 1;

        sink.read_bytes(&mut scratch, usize::MAX);
        output.extend_from_slice(&scratch);
        scratch.clear();

        if periods % 1000 == 0 {
            debug!(
                "Job {}: {} periods, last consumed {} produced {}",
                job.label(),
                periods,
                done.frames_consumed,
                done.frames_produced
            );
        }
    }

    let (frames_in, frames_out) = plan.totals();
    report.frames_in = frames_in;
    report.frames_out = frames_out;
    info!(
        "Job {}: {} frames in, {} frames out over {} periods",
        job.label(),
        frames_in,
        frames_out,
        periods
    );
    Ok((output.freeze(), report))
}

/// Read the job input, convert it and write the output file
pub fn run_job(job: &JobConfig, engine: &SrcConfig, cancel: &AtomicBool) -> anyhow::Result<JobReport> {
    info!(
        "Job {}: {} Hz -> {} Hz, {} ch {}",
        job.label(),
        job.source_rate,
        job.sink_rate,
        job.channels,
        job.format
    );
    let input = std::fs::read(&job.input)
        .with_context(|| format!("reading {}", job.input.display()))?;
    let (output, report) = convert_bytes(job, engine, Bytes::from(input), cancel)?;
    std::fs::write(&job.output, &output)
        .with_context(|| format!("writing {}", job.output.display()))?;
    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use common::SampleFormat;
    use std::path::PathBuf;

    fn job(source_rate: u32, sink_rate: u32, channels: usize, format: SampleFormat) -> JobConfig {
        JobConfig {
            input: PathBuf::from("in.raw"),
            output: PathBuf::from("out.raw"),
            source_rate,
            sink_rate,
            channels,
            format,
            period_frames: None,
            fallback: FallbackPolicy::Fail,
        }
    }

    fn pcm16(samples: &[i16]) -> Bytes {
        samples.iter().flat_map(|s| s.to_le_bytes()).collect::<Vec<u8>>().into()
    }

    #[test]
    fn test_equal_rates_copy_bytes() {
        let input = pcm16(&[1000, -1000, 2000, -2000, 3, 4]);
        let cancel = AtomicBool::new(false);
        let (output, report) =
            convert_bytes(&job(48000, 48000, 2, SampleFormat::S16), &SrcConfig::default(), input.clone(), &cancel)
                .unwrap();
        assert_eq!(output, input);
        assert_eq!(report.mode, Some(ConversionMode::Copy));
        assert_eq!((report.frames_in, report.frames_out), (3, 3));
    }

    #[test]
    fn test_upsampling_output_length() {
        let samples: Vec<i16> = (0..1600).map(|n| ((n % 40) * 500 - 10000) as i16).collect();
        let cancel = AtomicBool::new(false);
        let (output, report) =
            convert_bytes(&job(16000, 48000, 1, SampleFormat::S16), &SrcConfig::default(), pcm16(&samples), &cancel)
                .unwrap();
        assert_eq!(report.mode, Some(ConversionMode::Single));
        assert_eq!(report.frames_in, 1600);
        assert_eq!(report.frames_out, 4800);
        assert_eq!(output.len(), 4800 * 2);
        assert!(!report.cancelled);
    }

    #[test]
    fn test_unsupported_rate_fallback() {
        let input = pcm16(&[5, 6, 7, 8]);
        let cancel = AtomicBool::new(false);
        let mut config = job(18900, 8000, 2, SampleFormat::S16);
        assert!(convert_bytes(&config, &SrcConfig::default(), input.clone(), &cancel).is_err());

        config.fallback = FallbackPolicy::Passthrough;
        let (output, report) = convert_bytes(&config, &SrcConfig::default(), input.clone(), &cancel).unwrap();
        assert_eq!(output, input);
        assert_eq!(report.mode, None);
        assert_eq!(report.frames_out, 2);
    }

    #[test]
    fn test_partial_frame_is_dropped() {
        let mut bytes = pcm16(&[1, 2, 3, 4]).to_vec();
        bytes.push(0x7f);
        let cancel = AtomicBool::new(false);
        let (output, _) =
            convert_bytes(&job(8000, 8000, 2, SampleFormat::S16), &SrcConfig::default(), bytes.into(), &cancel)
                .unwrap();
        assert_eq!(output, pcm16(&[1, 2, 3, 4]));
    }

    #[test]
    fn test_cancelled_job_stops() {
        let cancel = AtomicBool::new(true);
        let (output, report) = convert_bytes(
            &job(8000, 48000, 1, SampleFormat::S16),
            &SrcConfig::default(),
            pcm16(&[100; 800]),
            &cancel,
        )
        .unwrap();
        assert!(report.cancelled);
        assert!(output.is_empty());
        assert_eq!(report.frames_in, 0);
    }

    #[test]
    fn test_report_serializes() {
        let cancel = AtomicBool::new(false);
        let (_, report) = convert_bytes(
            &job(44100, 48000, 2, SampleFormat::S32),
            &SrcConfig::default(),
            Bytes::from(vec![0u8; 441 * 8]),
            &cancel,
        )
        .unwrap();
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["mode"], "dual");
        assert_eq!(json["stages"].as_array().map(Vec::len), Some(2));
        assert_eq!(json["stages"][0]["name"], "int32_8_7_4535_5000");
        assert_eq!(json["stages"][0]["ratio"], serde_json::json!([8, 7]));
        assert_eq!(json["stages"][1]["ratio"], serde_json::json!([20, 21]));
    }
}
