//! FIR Kernel Backends
//!
//! A kernel turns one taps window of the FIR delay line and one subfilter
//! into one output sample per channel. Every backend accumulates in wrapping
//! 64-bit arithmetic, so any summation order gives the same result and the
//! accelerated backends are bit-identical to the scalar reference.
//!
//! Layout contract: frame `j` of the window pairs with tap `j`, and inside a
//! frame channel `c` sits at lane `channels - 1 - c` (frames are stored
//! newest-sample-first). Accumulators and outputs are indexed by channel.

pub mod scalar;
pub mod unrolled;

#[cfg(target_arch = "x86_64")]
mod avx2;
#[cfg(target_arch = "aarch64")]
mod neon;

pub use scalar::ScalarKernel;
pub use unrolled::UnrolledKernel;

use std::fmt;
use std::str::FromStr;

use bitflags::bitflags;
use common::{sat_int32, MAX_CHANNELS};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::delay_line::Window;
use crate::stage::Taps;
use crate::SrcError;

/// Coefficient storage widths understood by the kernels
pub(crate) trait Coefficient: Copy {
    /// Multiplier applied to a Q1.31 sample
    fn scaled(self) -> i64;
}

impl Coefficient for i32 {
    #[inline(always)]
    fn scaled(self) -> i64 {
        (self >> 8) as i64
    }
}

impl Coefficient for i16 {
    #[inline(always)]
    fn scaled(self) -> i64 {
        self as i64
    }
}

/// Run `$body` with `$c` bound to the typed coefficient slice of `$taps`
macro_rules! with_taps {
    ($taps:expr, $c:ident => $body:expr) => {
        match $taps {
            $crate::stage::Taps::Q31($c) => $body,
            $crate::stage::Taps::Q15($c) => $body,
        }
    };
}
pub(crate) use with_taps;

/// Multiply-accumulate contract shared by all backends
pub trait FirKernel {
    /// Backend name
    fn name(&self) -> &'static str;

    /// Add `taps[j] * frames[j]` per channel into `acc`
    ///
    /// `frames` holds at least `taps.len()` whole frames of `channels`
    /// samples; `acc` holds `channels` accumulators.
    fn accumulate(&self, frames: &[i32], taps: Taps<'_>, channels: usize, acc: &mut [i64]);

    /// Filter one window into `out`, one sample per channel
    ///
    /// The accumulator starts at the rounding constant `1 << (shift - 1)` and
    /// the result is `sat32(acc >> shift)`.
    fn filter(&self, window: &Window<'_>, taps: Taps<'_>, shift: i32, out: &mut [i32]) {
        let channels = window.channels;
        let mut acc = [0i64; MAX_CHANNELS];
        let acc = &mut acc[..channels];
        acc.fill(1i64 << (shift - 1));

        let (head_taps, tail_taps) = taps.split_at(window.head.len() / channels);
        self.accumulate(window.head, head_taps, channels, acc);
        if !window.tail.is_empty() {
            self.accumulate(window.tail, tail_taps, channels, acc);
        }

        for (o, &a) in out.iter_mut().zip(acc.iter()) {
            *o = sat_int32(a >> shift);
        }
    }
}

bitflags! {
    /// SIMD capabilities relevant to kernel selection
    #[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
    pub struct CpuFeatures: u32 {
        const AVX2 = 1 << 0;
        const NEON = 1 << 1;
    }
}

impl CpuFeatures {
    /// Detect the running CPU
    pub fn detect() -> Self {
        #[allow(unused_mut)]
        let mut features = CpuFeatures::empty();
        #[cfg(target_arch = "x86_64")]
        {
            if std::is_x86_feature_detected!("avx2") {
                features |= CpuFeatures::AVX2;
            }
        }
        #[cfg(target_arch = "aarch64")]
        {
            if std::arch::is_aarch64_feature_detected!("neon") {
                features |= CpuFeatures::NEON;
            }
        }
        features
    }
}

/// Requested kernel backend
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum KernelPreference {
    /// Fastest backend the CPU supports
    #[default]
    Auto,
    /// Scalar reference
    Scalar,
    /// Portable four-tap unrolled loop
    Unrolled,
    /// AVX2 (x86_64)
    Avx2,
    /// NEON (aarch64)
    Neon,
}

impl FromStr for KernelPreference {
    type Err = SrcError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "auto" => Ok(KernelPreference::Auto),
            "scalar" => Ok(KernelPreference::Scalar),
            "unrolled" => Ok(KernelPreference::Unrolled),
            "avx2" => Ok(KernelPreference::Avx2),
            "neon" => Ok(KernelPreference::Neon),
            _ => Err(SrcError::InvalidParameters(format!("unknown kernel: {}", s))),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Backend {
    Scalar,
    Unrolled,
    #[cfg(target_arch = "x86_64")]
    Avx2,
    #[cfg(target_arch = "aarch64")]
    Neon,
}

/// Kernel backend selected for a conversion plan
///
/// Accelerated variants can only be obtained through capability detection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KernelBackend(Backend);

impl KernelBackend {
    /// Scalar reference backend
    pub fn scalar() -> Self {
        KernelBackend(Backend::Scalar)
    }

    /// Portable unrolled backend
    pub fn unrolled() -> Self {
        KernelBackend(Backend::Unrolled)
    }

    /// Fastest backend available on this CPU
    pub fn detect() -> Self {
        Self::best_for(CpuFeatures::detect())
    }

    fn best_for(features: CpuFeatures) -> Self {
        #[cfg(target_arch = "x86_64")]
        {
            if features.contains(CpuFeatures::AVX2) {
                return KernelBackend(Backend::Avx2);
            }
        }
        #[cfg(target_arch = "aarch64")]
        {
            if features.contains(CpuFeatures::NEON) {
                return KernelBackend(Backend::Neon);
            }
        }
        let _ = features;
        Self::unrolled()
    }

    /// Every backend usable on this CPU, scalar reference first
    pub fn available() -> Vec<Self> {
        let features = CpuFeatures::detect();
        #[allow(unused_mut)]
        let mut backends = vec![Self::scalar(), Self::unrolled()];
        #[cfg(target_arch = "x86_64")]
        {
            if features.contains(CpuFeatures::AVX2) {
                backends.push(KernelBackend(Backend::Avx2));
            }
        }
        #[cfg(target_arch = "aarch64")]
        {
            if features.contains(CpuFeatures::NEON) {
                backends.push(KernelBackend(Backend::Neon));
            }
        }
        let _ = features;
        backends
    }

    /// Resolve a configured preference
    pub fn from_preference(preference: KernelPreference) -> Result<Self, SrcError> {
        let backend = match preference {
            KernelPreference::Auto => Self::detect(),
            KernelPreference::Scalar => Self::scalar(),
            KernelPreference::Unrolled => Self::unrolled(),
            KernelPreference::Avx2 | KernelPreference::Neon => {
                let wanted = if preference == KernelPreference::Avx2 {
                    CpuFeatures::AVX2
                } else {
                    CpuFeatures::NEON
                };
                let features = CpuFeatures::detect();
                if !features.contains(wanted) {
                    return Err(SrcError::KernelUnavailable(format!(
                        "{:?} not supported by this CPU ({:?})",
                        preference, features
                    )));
                }
                Self::best_for(wanted)
            }
        };
        debug!("Kernel preference {:?} resolved to {}", preference, backend);
        Ok(backend)
    }

    /// Whether this backend uses SIMD instructions
    pub fn is_accelerated(&self) -> bool {
        !matches!(self.0, Backend::Scalar | Backend::Unrolled)
    }

    /// Log the chosen backend
    pub fn announce(&self) {
        if self.is_accelerated() {
            info!("Using SIMD FIR kernel ({})", self.name());
        } else {
            info!("Using portable FIR kernel ({})", self.name());
        }
    }
}

impl fmt::Display for KernelBackend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FirKernel for KernelBackend {
    fn name(&self) -> &'static str {
        match self.0 {
            Backend::Scalar => ScalarKernel.name(),
            Backend::Unrolled => UnrolledKernel.name(),
            #[cfg(target_arch = "x86_64")]
            Backend::Avx2 => "avx2",
            #[cfg(target_arch = "aarch64")]
            Backend::Neon => "neon",
        }
    }

    #[inline]
    fn accumulate(&self, frames: &[i32], taps: Taps<'_>, channels: usize, acc: &mut [i64]) {
        match self.0 {
            Backend::Scalar => ScalarKernel.accumulate(frames, taps, channels, acc),
            Backend::Unrolled => UnrolledKernel.accumulate(frames, taps, channels, acc),
            // SAFETY: the variant is only constructed after AVX2 was detected
            #[cfg(target_arch = "x86_64")]
            Backend::Avx2 => unsafe { avx2::accumulate(frames, taps, channels, acc) },
            // SAFETY: the variant is only constructed after NEON was detected
            #[cfg(target_arch = "aarch64")]
            Backend::Neon => unsafe { neon::accumulate(frames, taps, channels, acc) },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::delay_line::FrameRing;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    fn random_ring(rng: &mut StdRng, frames: usize, channels: usize) -> FrameRing {
        let mut ring = FrameRing::new(frames, channels).unwrap();
        for f in 0..frames {
            for s in ring.frame_mut(f) {
                *s = rng.gen();
            }
        }
        ring
    }

    #[test]
    fn test_kernel_equivalence() {
        let mut rng = StdRng::seed_from_u64(0x5eed);
        let reference = KernelBackend::scalar();
        for backend in KernelBackend::available() {
            for channels in 1..=MAX_CHANNELS {
                for _ in 0..20 {
                    let taps_len = rng.gen_range(1..=96);
                    let frames = taps_len + rng.gen_range(0..40);
                    let ring = random_ring(&mut rng, frames, channels);
                    let start = rng.gen_range(0..frames);
                    let window = ring.window(start, taps_len);

                    let q31: Vec<i32> = (0..taps_len).map(|_| rng.gen()).collect();
                    let q15: Vec<i16> = (0..taps_len).map(|_| rng.gen()).collect();
                    for (taps, shift) in [(Taps::Q31(&q31), 23), (Taps::Q15(&q15), 15)] {
                        let mut expected = vec![0; channels];
                        let mut actual = vec![0; channels];
                        reference.filter(&window, taps, shift, &mut expected);
                        backend.filter(&window, taps, shift, &mut actual);
                        assert_eq!(expected, actual, "{} with {} channels", backend, channels);
                    }
                }
            }
        }
    }

    #[test]
    fn test_fused_stereo_matches_generic_path() {
        let mut rng = StdRng::seed_from_u64(7);
        let ring = random_ring(&mut rng, 64, 2);
        let taps: Vec<i32> = (0..48).map(|_| rng.gen()).collect();
        let window = ring.window(40, 48);

        let mut fused = [0i64; 2];
        ScalarKernel.accumulate(window.head, Taps::Q31(&taps[..24]), 2, &mut fused);
        let mut generic = [0i64; 2];
        scalar::mac_generic(window.head, &taps[..24], 2, &mut generic);
        assert_eq!(fused, generic);
    }

    #[test]
    fn test_channel_lane_order() {
        // Frames hold the last channel first
        let mut ring = FrameRing::new(2, 2).unwrap();
        ring.frame_mut(0).copy_from_slice(&[10 << 16, 20 << 16]);
        ring.frame_mut(1).copy_from_slice(&[1 << 16, 2 << 16]);
        let taps = [1i16 << 14, 1 << 14];
        for backend in KernelBackend::available() {
            let mut out = [0i32; 2];
            backend.filter(&ring.window(0, 2), Taps::Q15(&taps), 14, &mut out);
            assert_eq!(out, [22 << 16, 11 << 16], "{}", backend);
        }
    }

    #[test]
    fn test_saturation() {
        let mut ring = FrameRing::new(8, 1).unwrap();
        for f in 0..8 {
            ring.frame_mut(f)[0] = i32::MAX;
        }
        let taps = [i32::MAX; 8];
        for backend in KernelBackend::available() {
            let mut out = [0i32; 1];
            backend.filter(&ring.window(3, 8), Taps::Q31(&taps), 23, &mut out);
            assert_eq!(out[0], i32::MAX);

            let neg = [i32::MIN; 8];
            backend.filter(&ring.window(0, 8), Taps::Q31(&neg), 23, &mut out);
            assert_eq!(out[0], i32::MIN);
        }
    }

    #[test]
    fn test_rounding_to_nearest() {
        let mut ring = FrameRing::new(1, 1).unwrap();
        let taps = [1i16];
        for (x, expected) in [(3, 2), (2, 1), (1, 1), (-1, 0), (-2, -1), (-3, -1)] {
            ring.frame_mut(0)[0] = x;
            let mut out = [0i32; 1];
            ScalarKernel.filter(&ring.window(0, 1), Taps::Q15(&taps), 1, &mut out);
            assert_eq!(out[0], expected, "input {}", x);
        }
    }

    #[test]
    fn test_preference_resolution() {
        assert_eq!(KernelBackend::from_preference(KernelPreference::Scalar).unwrap(), KernelBackend::scalar());
        let auto = KernelBackend::from_preference(KernelPreference::Auto).unwrap();
        assert!(KernelBackend::available().contains(&auto));

        let features = CpuFeatures::detect();
        let avx2 = KernelBackend::from_preference(KernelPreference::Avx2);
        assert_eq!(avx2.is_ok(), features.contains(CpuFeatures::AVX2));
        if let Ok(backend) = avx2 {
            assert!(backend.is_accelerated());
            assert_eq!(backend.name(), "avx2");
        }
    }

    #[test]
    fn test_parse_preference() {
        assert_eq!("auto".parse::<KernelPreference>(), Ok(KernelPreference::Auto));
        assert_eq!("AVX2".parse::<KernelPreference>(), Ok(KernelPreference::Avx2));
        assert!("sse".parse::<KernelPreference>().is_err());
    }
}
