//! End-to-end conversion tests driving `ConversionPlan` through PCM streams.

use common::{sat_int32, SampleFormat};
use engine::executor::{SliceReader, StageExecutor};
use engine::format::from_internal;
use engine::{
    CoefficientSet, ConversionMode, ConversionPlan, KernelBackend, SrcConfig, SrcError, StageDescriptor,
    StagePair, StreamParams, Taps,
};
use interfaces::{AudioStream, AudioStreamConfig, Sink, Source};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rustfft::num_complex::Complex;
use rustfft::FftPlanner;

const STREAM_FRAMES: usize = 1024;

/// Push `input` through `plan` in stream-sized pieces and collect everything produced
fn convert_all(plan: &mut ConversionPlan, input: &[i32]) -> Vec<i32> {
    let params = *plan.params();
    let channels = params.channels;
    let config = AudioStreamConfig::new(params.format, channels, STREAM_FRAMES);
    let mut source = AudioStream::new(config).unwrap();
    let mut sink = AudioStream::new(config).unwrap();

    let mut pending = input;
    let mut output = Vec::new();
    loop {
        let taken = source.write_samples(pending).unwrap();
        pending = &pending[taken * channels..];
        if !plan.is_ready(&source, &sink) {
            if pending.is_empty() {
                break;
            }
            assert!(taken > 0, "conversion stalled with input pending");
            continue;
        }
        let done = plan.convert(&mut source, &mut sink).unwrap();
        assert!(done.frames_consumed + done.frames_produced > 0);
        output.extend(sink.read_samples(STREAM_FRAMES));
    }
    output.extend(sink.read_samples(STREAM_FRAMES));
    output
}

/// Both stages run back to back over the whole input
fn cascade(pair: StagePair, channels: usize, input: &[i32]) -> Vec<i32> {
    let kernel = KernelBackend::scalar();
    let mut signal = input.to_vec();
    for stage in [pair.first, pair.second] {
        let mut exec = StageExecutor::new(stage, channels).unwrap();
        let reps = signal.len() / channels / exec.block_in();
        let mut out = Vec::new();
        exec.run(&kernel, &mut SliceReader::new(&signal), &mut out, reps);
        signal = out;
    }
    signal
}

/// One stage evaluated straight from its coefficient array as a single FIR
/// over the zero-stuffed input
fn direct_form(stage: &StageDescriptor, x: &[i32]) -> Vec<i32> {
    let (l, m, sl) = (stage.subfilter_count, stage.block_in, stage.subfilter_length);
    // Tap j of subfilter i is prototype tap j * L + i
    let mut h = vec![0i64; l * sl];
    for i in 0..l {
        for j in 0..sl {
            h[j * l + i] = match stage.coefficients {
                Taps::Q31(c) => (c[i * sl + j] >> 8) as i64,
                Taps::Q15(c) => c[i * sl + j] as i64,
            };
        }
    }
    let shift = stage.total_shift();
    let delay = l * (l - 1) * stage.input_stride;

    (0..x.len() / m * l)
        .map(|k| {
            let mut acc = 1i64 << (shift - 1);
            if let Some(t) = (k * m).checked_sub(delay) {
                for n in (0..=t / l).rev() {
                    let tap = t - n * l;
                    if tap >= h.len() {
                        break;
                    }
                    if n < x.len() {
                        acc += h[tap] * x[n] as i64;
                    }
                }
            }
            sat_int32(acc >> shift)
        })
        .collect()
}

fn plan_for(input: u32, output: u32, channels: usize, format: SampleFormat) -> ConversionPlan {
    ConversionPlan::create(StreamParams::new(input, output, channels, format), &SrcConfig::default())
        .unwrap()
}

fn channel(samples: &[i32], channels: usize, ch: usize) -> Vec<i32> {
    samples.iter().skip(ch).step_by(channels).copied().collect()
}

#[test]
fn test_known_table_impulse_response() {
    for (input_rate, output_rate, stage) in [
        (44100, 48000, "int32_8_7_4535_5000"),
        (48000, 44100, "int32_21_20_4167_5000"),
        (32000, 44100, "int32_21_16_4319_5000"),
        (8000, 176400, "int32_21_5_4535_5000"),
    ] {
        let mut plan = plan_for(input_rate, output_rate, 1, SampleFormat::S32);
        assert_eq!(plan.mode(), ConversionMode::Dual);
        let pair = plan.stage_pair();
        assert!(pair.first.name == stage || pair.second.name == stage);

        let mut input = vec![0i32; 4000];
        input[0] = 1 << 30;
        let output = convert_all(&mut plan, &input);

        let expected = direct_form(pair.second, &direct_form(pair.first, &input));
        assert_eq!(output.len(), expected.len(), "{} -> {}", input_rate, output_rate);
        assert!(output == expected, "{} -> {} differs from the coefficient table", input_rate, output_rate);

        let peak = output.iter().map(|s| s.unsigned_abs()).max().unwrap();
        assert!(peak > 1 << 28, "{} -> {} impulse peak {}", input_rate, output_rate, peak);
    }
}

#[test]
fn test_dual_plan_matches_stage_cascade() {
    let mut plan = plan_for(44100, 48000, 2, SampleFormat::S32);
    assert_eq!(plan.mode(), ConversionMode::Dual);
    let pair = plan.stage_pair();
    assert_eq!(pair.first.name, "int32_8_7_4535_5000");
    assert_eq!(pair.second.name, "int32_20_21_4167_5000");

    let mut input = vec![0i32; 2100 * 2];
    input[5 * 2] = 1 << 30;
    input[9 * 2 + 1] = -(1 << 29);

    let output = convert_all(&mut plan, &input);
    assert_eq!(output.len(), 2280 * 2);
    assert_eq!(output, cascade(pair, 2, &input));

    let peak = channel(&output, 2, 0).iter().map(|s| s.unsigned_abs()).max().unwrap();
    assert!(peak > 1 << 28, "impulse peak {}", peak);
    assert_eq!(plan.totals(), (2100, 2280));
}

#[test]
fn test_every_table_entry_matches_cascade() {
    let mut rng = StdRng::seed_from_u64(0x5eed);
    for set in [CoefficientSet::Std, CoefficientSet::Tiny] {
        let config = SrcConfig { coefficient_set: set, ..SrcConfig::default() };
        for (input_rate, output_rate, pair) in set.table().entries() {
            let params = StreamParams::new(input_rate, output_rate, 1, SampleFormat::S32);
            let mut plan = ConversionPlan::create(params, &config).unwrap();

            // Long enough for every delay line to wrap several times
            let history = pair.first.fir_delay_length().max(pair.second.fir_delay_length()).max(64);
            let input: Vec<i32> = (0..history * 10).map(|_| rng.gen::<i32>() >> 2).collect();

            let output = convert_all(&mut plan, &input);
            let expected = cascade(pair, 1, &input);
            assert_eq!(output.len(), expected.len(), "{} set {} -> {}", set, input_rate, output_rate);
            assert!(output == expected, "{} set {} -> {} differs", set, input_rate, output_rate);
        }
    }
}

#[test]
fn test_silence_stays_silent() {
    for set in [CoefficientSet::Std, CoefficientSet::Tiny] {
        let config = SrcConfig { coefficient_set: set, ..SrcConfig::default() };
        for (input_rate, output_rate, _) in set.table().entries() {
            let params = StreamParams::new(input_rate, output_rate, 1, SampleFormat::S16);
            let mut plan = ConversionPlan::create(params, &config).unwrap();
            let output = convert_all(&mut plan, &[0; 500]);
            assert!(!output.is_empty());
            assert!(output.iter().all(|&s| s == 0), "{} set {} -> {}", set, input_rate, output_rate);
        }
    }
}

#[test]
fn test_full_scale_square_saturates_without_wrap() {
    for format in [SampleFormat::S16, SampleFormat::S24, SampleFormat::S32] {
        let (lo, hi) = (format.min_value(), format.max_value());
        let input: Vec<i32> = (0..640).map(|n| if (n / 16) % 2 == 0 { hi } else { lo }).collect();

        let mut plan = plan_for(16000, 48000, 1, format);
        let output = convert_all(&mut plan, &input);
        assert!(output.len() > 1800);
        assert!(output.iter().all(|&s| s >= lo && s <= hi));
        assert!(output.contains(&hi), "{} never clips high", format);
        assert!(output.contains(&lo), "{} never clips low", format);

        let full_scale = hi as i64 - lo as i64;
        let max_step = output.windows(2).map(|w| (w[1] as i64 - w[0] as i64).abs()).max().unwrap();
        assert!(max_step * 4 < full_scale * 3, "{} jumps by {}", format, max_step);
    }
}

#[test]
fn test_channel_isolation() {
    let frames = 2100;
    let ramp: Vec<i32> = (0..frames as i32).map(|n| (n - 1050) * 1_000_000).collect();
    let constant = vec![1 << 28; frames];
    let mut input = Vec::with_capacity(frames * 3);
    for n in 0..frames {
        input.extend_from_slice(&[ramp[n], 0, constant[n]]);
    }

    let output = convert_all(&mut plan_for(44100, 48000, 3, SampleFormat::S32), &input);
    assert!(channel(&output, 3, 1).iter().all(|&s| s == 0));

    let mono_ramp = convert_all(&mut plan_for(44100, 48000, 1, SampleFormat::S32), &ramp);
    let mono_constant = convert_all(&mut plan_for(44100, 48000, 1, SampleFormat::S32), &constant);
    assert_eq!(channel(&output, 3, 0), mono_ramp);
    assert_eq!(channel(&output, 3, 2), mono_constant);
}

#[test]
fn test_narrow_formats_follow_q31_path() {
    let mut rng = StdRng::seed_from_u64(77);
    let raw16: Vec<i32> = (0..960).map(|_| rng.gen_range(-32768..=32767)).collect();
    let raw24: Vec<i32> = (0..960).map(|_| rng.gen_range(-(1 << 23)..(1 << 23))).collect();

    for (format, raw, shift) in [(SampleFormat::S16, &raw16, 16), (SampleFormat::S24, &raw24, 8)] {
        let wide: Vec<i32> = raw.iter().map(|&s| s << shift).collect();
        let q31 = convert_all(&mut plan_for(32000, 48000, 2, SampleFormat::S32), &wide);
        let narrow = convert_all(&mut plan_for(32000, 48000, 2, format), raw);
        let expected: Vec<i32> = q31.iter().map(|&s| from_internal(s, format)).collect();
        assert_eq!(narrow, expected, "{}", format);
    }
}

#[test]
fn test_tiny_set() {
    let config = SrcConfig { coefficient_set: CoefficientSet::Tiny, ..SrcConfig::default() };
    let params = StreamParams::new(16000, 48000, 1, SampleFormat::S16);
    let mut plan = ConversionPlan::create(params, &config).unwrap();
    assert_eq!(plan.mode(), ConversionMode::Single);
    assert!(plan.stages()[0].name.starts_with("int16_"));

    let input: Vec<i32> = (0..1600)
        .map(|n| (16000.0 * (2.0 * std::f64::consts::PI * 1000.0 * n as f64 / 16000.0).sin()) as i32)
        .collect();
    let output = convert_all(&mut plan, &input);
    assert_eq!(output.len(), 4800);
    let peak = output[2400..].iter().map(|s| s.abs()).max().unwrap();
    assert!((15500..16500).contains(&peak), "tone peak {}", peak);

    assert_eq!(
        ConversionPlan::create(StreamParams::new(24000, 32000, 1, SampleFormat::S16), &config).err(),
        Some(SrcError::RateUnsupported { input: 24000, output: 32000 })
    );
}

#[test]
fn test_spectral_purity_44100_to_48000() {
    const N: usize = 8192;
    const SKIP: usize = 1024;
    const TONE_BIN: usize = 171;
    let tone = TONE_BIN as f64 * 48000.0 / N as f64;

    let input: Vec<i32> = (0..9000)
        .map(|n| {
            let phase = 2.0 * std::f64::consts::PI * tone * n as f64 / 44100.0;
            (0.5 * 2f64.powi(31) * phase.sin()) as i32
        })
        .collect();
    let output = convert_all(&mut plan_for(44100, 48000, 1, SampleFormat::S32), &input);
    assert!(output.len() >= SKIP + N);

    let mut spectrum: Vec<Complex<f64>> = output[SKIP..SKIP + N]
        .iter()
        .enumerate()
        .map(|(n, &s)| {
            let hann = 0.5 - 0.5 * (2.0 * std::f64::consts::PI * n as f64 / N as f64).cos();
            Complex::new(s as f64 / 2f64.powi(31) * hann, 0.0)
        })
        .collect();
    FftPlanner::<f64>::new().plan_fft_forward(N).process(&mut spectrum);

    let power: Vec<f64> = spectrum[..N / 2].iter().map(|c| c.norm_sqr()).collect();
    let peak_bin = (0..N / 2).max_by(|&a, &b| power[a].total_cmp(&power[b])).unwrap();
    assert_eq!(peak_bin, TONE_BIN);

    let spur = (3..N / 2)
        .filter(|&k| k.abs_diff(TONE_BIN) > 3)
        .map(|k| power[k])
        .fold(0.0, f64::max);
    let ratio_db = 10.0 * (spur / power[TONE_BIN]).log10();
    assert!(ratio_db < -70.0, "worst spur at {:.1} dB", ratio_db);
}

#[test]
fn test_reset_between_streams() {
    let mut plan = plan_for(48000, 44100, 2, SampleFormat::S32);
    let mut rng = StdRng::seed_from_u64(5);
    let input: Vec<i32> = (0..4800).map(|_| rng.gen::<i32>() >> 3).collect();

    let first = convert_all(&mut plan, &input);
    plan.reset();
    let second = convert_all(&mut plan, &input);
    assert_eq!(first, second);

    let source = AudioStream::new(AudioStreamConfig::new(SampleFormat::S32, 2, 8)).unwrap();
    let sink = AudioStream::new(AudioStreamConfig::new(SampleFormat::S32, 2, 8)).unwrap();
    assert_eq!(Source::available_frames(&source), 0);
    assert_eq!(Sink::free_frames(&sink), 8);
    assert!(!plan.is_ready(&source, &sink));
}
