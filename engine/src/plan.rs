//! Resampler Orchestrator
//!
//! A [`ConversionPlan`] is created once per stream when its rate pair is
//! known. It owns the stage executors, their delay lines and the buffer
//! between the two stages, and converts whatever the source and sink allow
//! on each call.

use common::{SampleFormat, MAX_CHANNELS};
use interfaces::{Sink, Source};
use num_rational::Ratio;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, trace};

use crate::coef::StagePair;
use crate::config::SrcConfig;
use crate::delay_line::FrameRing;
use crate::executor::{SampleReader, SampleWriter, StageExecutor};
use crate::format::{copy_raw, StreamReader, StreamWriter};
use crate::kernel::{FirKernel, KernelBackend};
use crate::stage::StageDescriptor;
use crate::SrcError;

/// Stream setup parameters
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StreamParams {
    /// Input sample rate in Hz
    pub source_rate: u32,
    /// Output sample rate in Hz
    pub sink_rate: u32,
    /// Interleaved channels
    pub channels: usize,
    /// Container format of both streams
    pub format: SampleFormat,
    /// Sink frames per scheduling period
    pub period_frames: usize,
}

impl StreamParams {
    /// Create new parameters with a 1 ms scheduling period
    pub fn new(source_rate: u32, sink_rate: u32, channels: usize, format: SampleFormat) -> Self {
        Self {
            source_rate,
            sink_rate,
            channels,
            format,
            period_frames: (sink_rate as usize / 1000).max(1),
        }
    }

    /// Override the scheduling period
    pub fn with_period(mut self, period_frames: usize) -> Self {
        self.period_frames = period_frames;
        self
    }

    /// Source frames per scheduling period
    pub fn source_period_frames(&self) -> usize {
        (self.period_frames as u64 * self.source_rate as u64 / self.sink_rate.max(1) as u64) as usize
    }
}

/// How many filter stages a plan runs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ConversionMode {
    /// Equal rates, containers copied unchanged
    Copy,
    /// One filter stage
    Single,
    /// Two cascaded filter stages
    Dual,
}

/// Frames moved by one [`ConversionPlan::convert`] call
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Converted {
    /// Frames released from the source
    pub frames_consumed: usize,
    /// Frames committed to the sink
    pub frames_produced: usize,
}

/// Geometry of one active stage
#[derive(Debug, Clone, Serialize)]
pub struct StageInfo {
    /// Table name
    pub name: &'static str,
    /// Output over input rate
    pub ratio: Ratio<u64>,
    /// FIR history length in frames
    pub fir_delay_length: usize,
    /// Output reorder length in frames
    pub out_delay_length: usize,
    /// Frames consumed per repetition
    pub block_in: usize,
    /// Frames produced per repetition
    pub block_out: usize,
}

impl From<&StageDescriptor> for StageInfo {
    fn from(stage: &StageDescriptor) -> Self {
        Self {
            name: stage.name,
            ratio: stage.ratio(),
            fir_delay_length: stage.fir_delay_length(),
            out_delay_length: stage.out_delay_length(),
            block_in: stage.block_in,
            block_out: stage.block_out,
        }
    }
}

/// Q1.31 ring between the two stages
#[derive(Debug, Clone)]
struct InterStageBuffer {
    ring: FrameRing,
    read: usize,
    write: usize,
    fill: usize,
}

impl InterStageBuffer {
    fn new(frames: usize, channels: usize) -> Result<Self, SrcError> {
        Ok(Self { ring: FrameRing::new(frames, channels)?, read: 0, write: 0, fill: 0 })
    }

    fn available_frames(&self) -> usize {
        self.fill
    }

    fn free_frames(&self) -> usize {
        self.ring.frames() - self.fill
    }

    fn clear(&mut self) {
        self.ring.clear();
        self.read = 0;
        self.write = 0;
        self.fill = 0;
    }
}

impl SampleReader for InterStageBuffer {
    fn read_frame(&mut self, frame: &mut [i32]) {
        frame.copy_from_slice(self.ring.frame(self.read));
        self.read = self.ring.forward(self.read, 1);
        self.fill -= 1;
    }
}

impl SampleWriter for InterStageBuffer {
    fn write_frame(&mut self, frame: &[i32]) {
        self.ring.frame_mut(self.write).copy_from_slice(frame);
        self.write = self.ring.forward(self.write, 1);
        self.fill += 1;
    }
}

/// Block repetitions allowed by the current stream fill levels
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
struct CopyLimits {
    first: usize,
    second: usize,
}

/// Configured sample-rate conversion for one stream
pub struct ConversionPlan {
    params: StreamParams,
    mode: ConversionMode,
    stages: StagePair,
    kernel: KernelBackend,
    first: Option<StageExecutor>,
    second: Option<StageExecutor>,
    buffer: Option<InterStageBuffer>,
    source_period: usize,
    repetitions: (usize, usize),
    totals: (u64, u64),
}

impl ConversionPlan {
    /// Resolve stages for `params` and allocate all conversion state
    pub fn create(params: StreamParams, config: &SrcConfig) -> Result<Self, SrcError> {
        config.validate()?;
        if params.source_rate == 0 || params.sink_rate == 0 {
            return Err(SrcError::InvalidParameters(format!(
                "rates {} Hz -> {} Hz",
                params.source_rate, params.sink_rate
            )));
        }
        if params.period_frames == 0 {
            return Err(SrcError::InvalidParameters("zero scheduling period".to_string()));
        }
        if params.channels == 0 {
            return Err(SrcError::InvalidParameters("zero channels".to_string()));
        }
        let max = config.max_channels.min(MAX_CHANNELS);
        if params.channels > max {
            return Err(SrcError::ChannelCountExceeded { channels: params.channels, max });
        }

        let stages = config.coefficient_set.lookup(params.source_rate, params.sink_rate)?;
        let kernel = KernelBackend::from_preference(config.kernel)?;

        let active: Vec<&'static StageDescriptor> = [stages.first, stages.second]
            .into_iter()
            .filter(|s| !s.is_identity() && !s.is_passthrough())
            .collect();
        let mode = match active.len() {
            0 => ConversionMode::Copy,
            1 => ConversionMode::Single,
            _ => ConversionMode::Dual,
        };
        if mode == ConversionMode::Copy && params.source_rate != params.sink_rate {
            return Err(SrcError::InvalidStage {
                stage: stages.first.name,
                reason: "identity stages for unequal rates".to_string(),
            });
        }

        let source_period = params.source_period_frames();
        let mut first = None;
        let mut second = None;
        let mut buffer = None;
        let mut repetitions = (0, 0);
        match mode {
            ConversionMode::Copy => {}
            ConversionMode::Single => {
                let exec = StageExecutor::new(active[0], params.channels)?;
                repetitions.0 = (params.period_frames + exec.block_out()) / exec.block_out();
                first = Some(exec);
            }
            ConversionMode::Dual => {
                let s1 = StageExecutor::new(active[0], params.channels)?;
                let s2 = StageExecutor::new(active[1], params.channels)?;
                let blocks = source_period / s1.block_in() + 1;
                let n = 2 * s1.block_out() * blocks;
                // Room for one stage two block plus one stage one block
                let frames = (n + n / 8).max(s2.block_in() + s1.block_out());
                buffer = Some(InterStageBuffer::new(frames, params.channels)?);
                repetitions = (
                    (source_period + s1.block_in()) / s1.block_in(),
                    (params.period_frames + s2.block_out()) / s2.block_out(),
                );
                first = Some(s1);
                second = Some(s2);
            }
        }

        info!(
            "SRC plan {} Hz -> {} Hz, {} ch {}, {:?} mode via {} + {} ({} set)",
            params.source_rate,
            params.sink_rate,
            params.channels,
            params.format,
            mode,
            stages.first.name,
            stages.second.name,
            config.coefficient_set
        );
        kernel.announce();

        let plan = Self {
            params,
            mode,
            stages,
            kernel,
            first,
            second,
            buffer,
            source_period,
            repetitions,
            totals: (0, 0),
        };
        debug!(
            "Periods: source {} / sink {} frames, repetitions {:?}, inter-stage buffer {} frames",
            plan.source_period,
            params.period_frames,
            plan.repetitions,
            plan.intermediate_buffer_frames()
        );
        Ok(plan)
    }

    /// Setup parameters
    pub fn params(&self) -> &StreamParams {
        &self.params
    }

    /// Number of active filter stages
    pub fn mode(&self) -> ConversionMode {
        self.mode
    }

    /// Stages resolved from the coefficient table, identity included
    pub fn stage_pair(&self) -> StagePair {
        self.stages
    }

    /// Geometry of the active stages in processing order
    pub fn stages(&self) -> Vec<StageInfo> {
        [&self.first, &self.second]
            .into_iter()
            .flatten()
            .map(|exec| StageInfo::from(exec.stage()))
            .collect()
    }

    /// Kernel backend in use
    pub fn kernel(&self) -> KernelBackend {
        self.kernel
    }

    /// Nominal block repetitions per scheduling period for each stage
    pub fn repetitions(&self) -> (usize, usize) {
        self.repetitions
    }

    /// Capacity of the buffer between the stages in frames
    pub fn intermediate_buffer_frames(&self) -> usize {
        self.buffer.as_ref().map_or(0, |b| b.ring.frames())
    }

    /// Frames consumed and produced since creation or the last reset
    pub fn totals(&self) -> (u64, u64) {
        self.totals
    }

    /// Zero all delay lines and the inter-stage buffer
    pub fn reset(&mut self) {
        for exec in [&mut self.first, &mut self.second].into_iter().flatten() {
            exec.reset();
        }
        if let Some(buffer) = self.buffer.as_mut() {
            buffer.clear();
        }
        self.totals = (0, 0);
        info!(
            "SRC plan {} Hz -> {} Hz reset",
            self.params.source_rate, self.params.sink_rate
        );
    }

    /// Whether at least one block can be processed with the current fill levels
    pub fn is_ready<S, K>(&self, source: &S, sink: &K) -> bool
    where
        S: Source + ?Sized,
        K: Sink + ?Sized,
    {
        let limits = self.copy_limits(source.available_frames(), sink.free_frames());
        match self.mode {
            ConversionMode::Copy | ConversionMode::Single => limits.first > 0,
            ConversionMode::Dual => {
                let pending = self.buffer.as_ref().map_or(0, |b| b.available_frames());
                let second = self.second.as_ref().map_or(0, |s| pending / s.block_in());
                limits.first > 0 || limits.second.min(second) > 0
            }
        }
    }

    fn copy_limits(&self, available: usize, free: usize) -> CopyLimits {
        let period = self.params.period_frames;
        match (&self.first, &self.second) {
            (Some(s1), Some(s2)) => {
                let src = available.min(self.source_period + s1.block_in());
                let room = self.buffer.as_ref().map_or(0, |b| b.free_frames());
                let snk = free.min(period + s2.block_out());
                CopyLimits {
                    first: (src / s1.block_in()).min(room / s1.block_out()),
                    second: snk / s2.block_out(),
                }
            }
            (Some(s1), None) => {
                let snk = free.min(period + s1.block_out());
                CopyLimits {
                    first: (snk / s1.block_out()).min(available / s1.block_in()),
                    second: 0,
                }
            }
            _ => CopyLimits { first: available.min(free).min(period + 1), second: 0 },
        }
    }

    fn check_stream(&self, side: &str, format: SampleFormat, channels: usize) -> Result<(), SrcError> {
        if format != self.params.format || channels != self.params.channels {
            return Err(SrcError::StreamMismatch(format!(
                "{} is {} x {} ch, plan expects {} x {} ch",
                side, format, channels, self.params.format, self.params.channels
            )));
        }
        Ok(())
    }

    /// Convert as many frames as the source holds and the sink accepts,
    /// bounded by one scheduling period
    pub fn convert<S, K>(&mut self, source: &mut S, sink: &mut K) -> Result<Converted, SrcError>
    where
        S: Source + ?Sized,
        K: Sink + ?Sized,
    {
        self.check_stream("source", source.frame_format(), source.channel_count())?;
        self.check_stream("sink", sink.frame_format(), sink.channel_count())?;

        let limits = self.copy_limits(source.available_frames(), sink.free_frames());
        let format = self.params.format;
        let frame_bytes = self.params.channels * format.container_bytes();
        let kernel = self.kernel;
        let mut done = Converted::default();

        match (self.mode, self.first.as_mut(), self.second.as_mut(), self.buffer.as_mut()) {
            (ConversionMode::Copy, ..) => {
                let frames = limits.first;
                if frames > 0 {
                    copy_raw(source.read_region(), sink.write_region(), frames * frame_bytes);
                    source.consume(frames);
                    sink.produce(frames);
                }
                done = Converted { frames_consumed: frames, frames_produced: frames };
            }
            (ConversionMode::Single, Some(exec), ..) => {
                let times = limits.first;
                if times > 0 {
                    {
                        let mut reader = StreamReader::new(source.read_region(), format);
                        let mut writer = StreamWriter::new(sink.write_region(), format);
                        exec.run(&kernel, &mut reader, &mut writer, times);
                    }
                    done.frames_consumed = times * exec.block_in();
                    done.frames_produced = times * exec.block_out();
                    source.consume(done.frames_consumed);
                    sink.produce(done.frames_produced);
                }
            }
            (ConversionMode::Dual, Some(s1), Some(s2), Some(buffer)) => {
                if limits.first > 0 {
                    {
                        let mut reader = StreamReader::new(source.read_region(), format);
                        s1.run(&kernel, &mut reader, &mut *buffer, limits.first);
                    }
                    done.frames_consumed = limits.first * s1.block_in();
                    source.consume(done.frames_consumed);
                }

                let times = limits.second.min(buffer.available_frames() / s2.block_in());
                if times > 0 {
                    {
                        let mut writer = StreamWriter::new(sink.write_region(), format);
                        s2.run(&kernel, &mut *buffer, &mut writer, times);
                    }
                    done.frames_produced = times * s2.block_out();
                    sink.produce(done.frames_produced);
                }
            }
            (mode, ..) => {
                return Err(SrcError::InvalidParameters(format!("{:?} plan is missing a stage", mode)));
            }
        }

        self.totals.0 += done.frames_consumed as u64;
        self.totals.1 += done.frames_produced as u64;
        trace!(
            "SRC {:?}: consumed {}, produced {} ({})",
            self.mode,
            done.frames_consumed,
            done.frames_produced,
            self.kernel.name()
        );
        Ok(done)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coef::CoefficientSet;
    use crate::kernel::KernelPreference;
    use interfaces::{AudioStream, AudioStreamConfig};

    fn stream(format: SampleFormat, channels: usize, frames: usize) -> AudioStream {
        AudioStream::new(AudioStreamConfig::new(format, channels, frames)).unwrap()
    }

    #[test]
    fn test_identity_passthrough_scenario() {
        let params = StreamParams::new(48000, 48000, 2, SampleFormat::S32);
        let mut plan = ConversionPlan::create(params, &SrcConfig::default()).unwrap();
        assert_eq!(plan.mode(), ConversionMode::Copy);

        let mut source = stream(SampleFormat::S32, 2, 64);
        let mut sink = stream(SampleFormat::S32, 2, 64);
        source.write_samples(&[1000, -1000, 2000, -2000]).unwrap();
        let done = plan.convert(&mut source, &mut sink).unwrap();
        assert_eq!(done, Converted { frames_consumed: 2, frames_produced: 2 });
        assert_eq!(sink.read_samples(16), vec![1000, -1000, 2000, -2000]);
    }

    #[test]
    fn test_mode_selection() {
        let config = SrcConfig::default();
        let single = ConversionPlan::create(StreamParams::new(16000, 48000, 1, SampleFormat::S16), &config).unwrap();
        assert_eq!(single.mode(), ConversionMode::Single);
        assert_eq!(single.stages().len(), 1);
        assert_eq!(single.intermediate_buffer_frames(), 0);

        let dual = ConversionPlan::create(StreamParams::new(44100, 48000, 1, SampleFormat::S16), &config).unwrap();
        assert_eq!(dual.mode(), ConversionMode::Dual);
        let stages = dual.stages();
        assert_eq!(stages[0].name, "int32_8_7_4535_5000");
        assert_eq!(stages[0].ratio * stages[1].ratio, Ratio::new(160, 147));
    }

    #[test]
    fn test_create_errors() {
        let config = SrcConfig::default();
        assert_eq!(
            ConversionPlan::create(StreamParams::new(18900, 8000, 2, SampleFormat::S32), &config).err(),
            Some(SrcError::RateUnsupported { input: 18900, output: 8000 })
        );
        assert!(matches!(
            ConversionPlan::create(StreamParams::new(48000, 44100, 9, SampleFormat::S32), &config),
            Err(SrcError::ChannelCountExceeded { channels: 9, max: 8 })
        ));
        let limited = SrcConfig { max_channels: 2, ..SrcConfig::default() };
        assert!(matches!(
            ConversionPlan::create(StreamParams::new(48000, 44100, 4, SampleFormat::S32), &limited),
            Err(SrcError::ChannelCountExceeded { channels: 4, max: 2 })
        ));
        let params = StreamParams::new(48000, 44100, 2, SampleFormat::S32).with_period(0);
        assert!(matches!(
            ConversionPlan::create(params, &config),
            Err(SrcError::InvalidParameters(_))
        ));
        let tiny = SrcConfig { coefficient_set: CoefficientSet::Tiny, ..SrcConfig::default() };
        assert!(ConversionPlan::create(StreamParams::new(24000, 32000, 1, SampleFormat::S16), &tiny).is_err());
    }

    #[test]
    fn test_stream_mismatch() {
        let params = StreamParams::new(16000, 48000, 2, SampleFormat::S16);
        let mut plan = ConversionPlan::create(params, &SrcConfig::default()).unwrap();
        let mut source = stream(SampleFormat::S32, 2, 32);
        let mut sink = stream(SampleFormat::S16, 2, 32);
        assert!(matches!(plan.convert(&mut source, &mut sink), Err(SrcError::StreamMismatch(_))));
    }

    #[test]
    fn test_dual_buffer_sizing() {
        let params = StreamParams::new(44100, 48000, 2, SampleFormat::S32).with_period(48);
        let plan = ConversionPlan::create(params, &SrcConfig::default()).unwrap();
        // 44 source frames per period, stage one 7 in / 8 out
        let n = 2 * 8 * (44 / 7 + 1);
        assert_eq!(plan.intermediate_buffer_frames(), n + n / 8);
        assert_eq!(plan.repetitions(), ((44 + 7) / 7, (48 + 20) / 20));
    }

    #[test]
    fn test_short_period_dual_plan_keeps_running() {
        let params = StreamParams::new(44100, 8000, 1, SampleFormat::S32).with_period(1);
        let mut plan = ConversionPlan::create(params, &SrcConfig::default()).unwrap();
        assert_eq!(plan.mode(), ConversionMode::Dual);
        let stages = plan.stages();
        assert!(plan.intermediate_buffer_frames() >= stages[1].block_in + stages[0].block_out);

        let mut source = stream(SampleFormat::S32, 1, 256);
        let mut sink = stream(SampleFormat::S32, 1, 256);
        let mut produced = 0;
        for _ in 0..200 {
            source.write_samples(&[1 << 20; 64]).unwrap();
            assert!(plan.is_ready(&source, &sink));
            produced += plan.convert(&mut source, &mut sink).unwrap().frames_produced;
            sink.read_samples(256);
        }
        assert!(produced > 0);
        let (consumed, total) = plan.totals();
        assert_eq!(total, produced as u64);
        // Output follows the 80/441 ratio, lagging by at most the buffered frames
        assert!(total * 441 / 80 <= consumed, "{} in, {} out", consumed, total);
        assert!(consumed * 80 / 441 <= total + 21, "{} in, {} out", consumed, total);
    }

    #[test]
    fn test_output_never_exceeds_sink_space() {
        let params = StreamParams::new(8000, 48000, 1, SampleFormat::S16).with_period(48);
        let mut plan = ConversionPlan::create(params, &SrcConfig::default()).unwrap();
        let mut source = stream(SampleFormat::S16, 1, 256);
        let mut sink = stream(SampleFormat::S16, 1, 20);
        source.write_samples(&[100; 200]).unwrap();

        let done = plan.convert(&mut source, &mut sink).unwrap();
        assert!(done.frames_produced <= 20);
        assert_eq!(Sink::free_frames(&sink), 20 - done.frames_produced);

        let again = plan.convert(&mut source, &mut sink).unwrap();
        assert!(done.frames_produced + again.frames_produced <= 20);
    }

    #[test]
    fn test_ratio_over_long_run() {
        let params = StreamParams::new(48000, 32000, 1, SampleFormat::S32).with_period(32);
        let mut plan = ConversionPlan::create(params, &SrcConfig::default()).unwrap();
        let mut source = stream(SampleFormat::S32, 1, 4096);
        let mut sink = stream(SampleFormat::S32, 1, 4096);
        source.write_samples(&vec![0; 3000]).unwrap();
        while plan.is_ready(&source, &sink) {
            plan.convert(&mut source, &mut sink).unwrap();
        }
        let (consumed, produced) = plan.totals();
        assert_eq!(consumed, 3000);
        assert_eq!(produced, 2000);
    }

    #[test]
    fn test_reset_clears_history() {
        let params = StreamParams::new(32000, 48000, 1, SampleFormat::S32).with_period(48);
        let config = SrcConfig { kernel: KernelPreference::Scalar, ..SrcConfig::default() };
        let mut plan = ConversionPlan::create(params, &config).unwrap();
        let input: Vec<i32> = (0..64).map(|i| (i * 1_000_003) << 4).collect();

        let run = |plan: &mut ConversionPlan| {
            let mut source = stream(SampleFormat::S32, 1, 128);
            let mut sink = stream(SampleFormat::S32, 1, 256);
            source.write_samples(&input).unwrap();
            while plan.is_ready(&source, &sink) {
                plan.convert(&mut source, &mut sink).unwrap();
            }
            sink.read_samples(256)
        };
        let first = run(&mut plan);
        plan.reset();
        assert_eq!(plan.totals(), (0, 0));
        assert_eq!(run(&mut plan), first);
    }
}
