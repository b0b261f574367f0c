//! Stage Executor
//!
//! Drives one polyphase stage block by block: push `block_in` frames into the
//! FIR history, evaluate every subfilter into the output reorder buffer,
//! then drain `block_out` frames in output order.

use common::MAX_CHANNELS;
use tracing::debug;

use crate::delay_line::DelayLineState;
use crate::kernel::FirKernel;
use crate::stage::StageDescriptor;
use crate::SrcError;

/// Frame-at-a-time source of Q1.31 samples
pub trait SampleReader {
    /// Fill `frame` (one sample per channel) with the next input frame
    fn read_frame(&mut self, frame: &mut [i32]);
}

/// Frame-at-a-time destination of Q1.31 samples
pub trait SampleWriter {
    /// Append one output frame
    fn write_frame(&mut self, frame: &[i32]);
}

/// Reads frames from an interleaved Q1.31 slice
pub struct SliceReader<'a> {
    samples: &'a [i32],
    position: usize,
}

impl<'a> SliceReader<'a> {
    /// Create a new reader at the start of `samples`
    pub fn new(samples: &'a [i32]) -> Self {
        Self { samples, position: 0 }
    }

    /// Samples not read yet
    pub fn remaining(&self) -> usize {
        self.samples.len() - self.position
    }
}

impl SampleReader for SliceReader<'_> {
    fn read_frame(&mut self, frame: &mut [i32]) {
        let end = self.position + frame.len();
        frame.copy_from_slice(&self.samples[self.position..end]);
        self.position = end;
    }
}

impl SampleWriter for Vec<i32> {
    fn write_frame(&mut self, frame: &[i32]) {
        self.extend_from_slice(frame);
    }
}

/// One stage bound to its delay-line state
#[derive(Debug, Clone)]
pub struct StageExecutor {
    stage: &'static StageDescriptor,
    channels: usize,
    shift: i32,
    state: DelayLineState,
}

impl StageExecutor {
    /// Create a new executor with zeroed history
    pub fn new(stage: &'static StageDescriptor, channels: usize) -> Result<Self, SrcError> {
        if channels == 0 {
            return Err(SrcError::InvalidParameters("zero channels".to_string()));
        }
        if channels > MAX_CHANNELS {
            return Err(SrcError::ChannelCountExceeded { channels, max: MAX_CHANNELS });
        }
        stage.validate()?;
        let state = DelayLineState::new(stage, channels)?;
        debug!(
            "Stage {}: {}x{} taps, idm {}, odm {}, blocks {}/{}, fir delay {}, out delay {}",
            stage.name,
            stage.subfilter_count,
            stage.subfilter_length,
            stage.input_stride,
            stage.output_stride,
            stage.block_in,
            stage.block_out,
            stage.fir_delay_length(),
            stage.out_delay_length()
        );
        Ok(Self { stage, channels, shift: stage.total_shift(), state })
    }

    /// Stage being executed
    pub fn stage(&self) -> &'static StageDescriptor {
        self.stage
    }

    /// Delay-line state
    pub fn state(&self) -> &DelayLineState {
        &self.state
    }

    /// Frames consumed per repetition; one for a passthrough stage
    pub fn block_in(&self) -> usize {
        if self.stage.is_passthrough() {
            1
        } else {
            self.stage.block_in
        }
    }

    /// Frames produced per repetition; one for a passthrough stage
    pub fn block_out(&self) -> usize {
        if self.stage.is_passthrough() {
            1
        } else {
            self.stage.block_out
        }
    }

    /// Zero the delay lines and rewind the cursors
    pub fn reset(&mut self) {
        self.state.reset();
    }

    /// Run `repetitions` blocks from `reader` into `writer`
    ///
    /// The reader must hold `repetitions * block_in()` frames and the
    /// writer must accept `repetitions * block_out()` frames.
    pub fn run<K, R, W>(&mut self, kernel: &K, reader: &mut R, writer: &mut W, repetitions: usize)
    where
        K: FirKernel + ?Sized,
        R: SampleReader + ?Sized,
        W: SampleWriter + ?Sized,
    {
        let nch = self.channels;
        let mut frame = [0i32; MAX_CHANNELS];
        let frame = &mut frame[..nch];

        if self.stage.is_passthrough() {
            for _ in 0..repetitions {
                reader.read_frame(frame);
                writer.write_frame(frame);
            }
            return;
        }

        let stage = self.stage;
        let DelayLineState { fir_delay, out_delay, fir_write_cursor, out_read_cursor } = &mut self.state;
        let rewind = stage.block_in + (stage.subfilter_count - 1) * stage.input_stride;

        for _ in 0..repetitions {
            // Newest frame lands at the lowest slot, channels last-first
            for _ in 0..stage.block_in {
                reader.read_frame(frame);
                let slot = fir_delay.frame_mut(*fir_write_cursor);
                for (lane, &sample) in slot.iter_mut().rev().zip(frame.iter()) {
                    *lane = sample;
                }
                *fir_write_cursor = fir_delay.backward(*fir_write_cursor, 1);
            }

            let mut rp = fir_delay.forward(*fir_write_cursor, rewind);
            let mut wp = *out_read_cursor;
            for phase in 0..stage.subfilter_count {
                let window = fir_delay.window(rp, stage.subfilter_length);
                kernel.filter(&window, stage.subfilter(phase), self.shift, out_delay.frame_mut(wp));
                wp = out_delay.forward(wp, stage.output_stride);
                rp = fir_delay.backward(rp, stage.input_stride);
            }

            for _ in 0..stage.block_out {
                writer.write_frame(out_delay.frame(*out_read_cursor));
                *out_read_cursor = out_delay.forward(*out_read_cursor, 1);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coef::{designed_int16, designed_int32, reference_int32, IDENTITY_Q15, IDENTITY_Q31};
    use crate::kernel::{KernelBackend, ScalarKernel};
    use crate::stage::Taps;
    use common::sat_int32;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    /// Polyphase stage evaluated as one long FIR on the zero-stuffed input
    fn direct_form(stage: &StageDescriptor, x: &[i32]) -> Vec<i32> {
        let l = stage.subfilter_count;
        let m = stage.block_in;
        let sl = stage.subfilter_length;
        let len = l * sl;
        let mut h = vec![0i64; len];
        for i in 0..l {
            for j in 0..sl {
                h[j * l + i] = stage.coefficients.scaled(i * sl + j);
            }
        }
        let shift = stage.total_shift();
        let offset = (l * (l - 1) * stage.input_stride) as i64;

        let outputs = x.len() / m * l;
        (0..outputs)
            .map(|k| {
                let t = (k * m) as i64 - offset;
                let mut acc = 1i64 << (shift - 1);
                if t >= 0 {
                    let t = t as usize;
                    let mut n = t / l;
                    loop {
                        let tap = t - n * l;
                        if tap >= len {
                            break;
                        }
                        if n < x.len() {
                            acc += h[tap] * x[n] as i64;
                        }
                        if n == 0 {
                            break;
                        }
                        n -= 1;
                    }
                }
                sat_int32(acc >> shift)
            })
            .collect()
    }

    fn run_mono(stage: &'static StageDescriptor, x: &[i32]) -> Vec<i32> {
        let mut exec = StageExecutor::new(stage, 1).unwrap();
        let mut out = Vec::new();
        let reps = x.len() / exec.block_in();
        exec.run(&ScalarKernel, &mut SliceReader::new(x), &mut out, reps);
        out
    }

    fn random_signal(rng: &mut StdRng, len: usize) -> Vec<i32> {
        (0..len).map(|_| rng.gen::<i32>() >> 2).collect()
    }

    #[test]
    fn test_matches_direct_form() {
        let mut rng = StdRng::seed_from_u64(42);
        for stage in [
            &designed_int32::SRC_INT32_3_2_4535_5000,
            &designed_int32::SRC_INT32_8_7_2468_5000,
            &designed_int32::SRC_INT32_1_2_2268_5000,
            &reference_int32::SRC_INT32_21_20_4167_5000,
            &designed_int16::SRC_INT16_2_3_4535_5000,
            &designed_int16::SRC_INT16_1_3_2268_5000,
        ] {
            let x = random_signal(&mut rng, stage.block_in * 40);
            assert_eq!(run_mono(stage, &x), direct_form(stage, &x), "{}", stage.name);
        }
    }

    #[test]
    fn test_identity_stage_has_no_latency() {
        let x = [1000, -1000, 2000, -2000, i32::MAX, i32::MIN];
        assert_eq!(run_mono(&IDENTITY_Q31, &x), x.to_vec());
        assert_eq!(run_mono(&IDENTITY_Q15, &x), x.to_vec());
    }

    #[test]
    fn test_passthrough_stage_copies_frames() {
        static PASSTHROUGH: StageDescriptor = StageDescriptor {
            name: "passthrough",
            input_stride: 0,
            output_stride: 0,
            subfilter_count: 0,
            subfilter_length: 0,
            block_in: 0,
            block_out: 0,
            is_halfband: false,
            output_shift: 0,
            coefficients: Taps::Q31(&[]),
        };
        let mut exec = StageExecutor::new(&PASSTHROUGH, 2).unwrap();
        assert_eq!(exec.state().fir_delay().frames(), 0);
        let x = [1, 2, 3, 4, 5, 6];
        let mut out = Vec::new();
        exec.run(&ScalarKernel, &mut SliceReader::new(&x), &mut out, 3);
        assert_eq!(out, x.to_vec());
    }

    #[test]
    fn test_channels_are_independent() {
        let stage = &designed_int32::SRC_INT32_4_3_4535_5000;
        let mut rng = StdRng::seed_from_u64(3);
        let channels = 3;
        let frames = stage.block_in * 25;
        let x = random_signal(&mut rng, frames * channels);

        let mut exec = StageExecutor::new(stage, channels).unwrap();
        let mut out = Vec::new();
        exec.run(&KernelBackend::detect(), &mut SliceReader::new(&x), &mut out, 25);

        for ch in 0..channels {
            let mono: Vec<i32> = x.iter().skip(ch).step_by(channels).copied().collect();
            let expected = run_mono(stage, &mono);
            let actual: Vec<i32> = out.iter().skip(ch).step_by(channels).copied().collect();
            assert_eq!(actual, expected, "channel {}", ch);
        }
    }

    #[test]
    fn test_streaming_split_matches_single_run() {
        let stage = &designed_int32::SRC_INT32_20_21_4167_5000;
        let mut rng = StdRng::seed_from_u64(9);
        let x = random_signal(&mut rng, stage.block_in * 12 * 2);

        let mut whole = Vec::new();
        StageExecutor::new(stage, 2)
            .unwrap()
            .run(&ScalarKernel, &mut SliceReader::new(&x), &mut whole, 12);

        let mut exec = StageExecutor::new(stage, 2).unwrap();
        let mut pieces = Vec::new();
        let mut reader = SliceReader::new(&x);
        for reps in [1, 4, 0, 7] {
            exec.run(&ScalarKernel, &mut reader, &mut pieces, reps);
        }
        assert_eq!(reader.remaining(), 0);
        assert_eq!(pieces, whole);
    }

    #[test]
    fn test_reset_restores_initial_response() {
        let stage = &designed_int16::SRC_INT16_3_1_4535_5000;
        let mut rng = StdRng::seed_from_u64(11);
        let x = random_signal(&mut rng, 50);

        let mut exec = StageExecutor::new(stage, 1).unwrap();
        let mut first = Vec::new();
        exec.run(&ScalarKernel, &mut SliceReader::new(&x), &mut first, 50);
        exec.reset();
        let mut second = Vec::new();
        exec.run(&ScalarKernel, &mut SliceReader::new(&x), &mut second, 50);
        assert_eq!(first, second);
    }

    #[test]
    fn test_rejects_bad_channel_counts() {
        let stage = &designed_int32::SRC_INT32_2_1_4535_5000;
        assert!(matches!(
            StageExecutor::new(stage, MAX_CHANNELS + 1),
            Err(SrcError::ChannelCountExceeded { .. })
        ));
        assert!(StageExecutor::new(stage, 0).is_err());
    }
}
