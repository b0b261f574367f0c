//! Scalar reference kernel
//!
//! The canonical multiply-accumulate every other backend is checked against.

use super::{with_taps, Coefficient, FirKernel};
use crate::stage::Taps;

/// Scalar reference backend
#[derive(Debug, Clone, Copy, Default)]
pub struct ScalarKernel;

impl FirKernel for ScalarKernel {
    fn name(&self) -> &'static str {
        "scalar"
    }

    fn accumulate(&self, frames: &[i32], taps: Taps<'_>, channels: usize, acc: &mut [i64]) {
        match channels {
            2 => with_taps!(taps, c => mac_stereo(frames, c, acc)),
            _ => with_taps!(taps, c => mac_generic(frames, c, channels, acc)),
        }
    }
}

/// Any channel count, one tap at a time
pub(crate) fn mac_generic<C: Coefficient>(frames: &[i32], coefs: &[C], channels: usize, acc: &mut [i64]) {
    for (frame, &c) in frames.chunks_exact(channels).zip(coefs) {
        let c = c.scaled();
        for (ch, a) in acc.iter_mut().enumerate() {
            *a = a.wrapping_add(c.wrapping_mul(frame[channels - 1 - ch] as i64));
        }
    }
}

/// Two channels fused into one pass over the window
fn mac_stereo<C: Coefficient>(frames: &[i32], coefs: &[C], acc: &mut [i64]) {
    let (mut a0, mut a1) = (acc[0], acc[1]);
    for (frame, &c) in frames.chunks_exact(2).zip(coefs) {
        let c = c.scaled();
        a1 = a1.wrapping_add(c.wrapping_mul(frame[0] as i64));
        a0 = a0.wrapping_add(c.wrapping_mul(frame[1] as i64));
    }
    acc[0] = a0;
    acc[1] = a1;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mono_dot_product() {
        let frames = [1 << 8, 2 << 8, -(3 << 8)];
        let taps = [256i32, 512, 256];
        let mut acc = [5i64];
        ScalarKernel.accumulate(&frames, Taps::Q31(&taps), 1, &mut acc);
        // (1 * 1 + 2 * 2 - 3 * 1) << 8
        assert_eq!(acc[0], 5 + (2 << 8));
    }

    #[test]
    fn test_generic_three_channels() {
        // Two frames, channels stored last-first
        let frames = [30, 20, 10, 300, 200, 100];
        let taps = [2i16, 1];
        let mut acc = [0i64; 3];
        ScalarKernel.accumulate(&frames, Taps::Q15(&taps), 3, &mut acc);
        assert_eq!(acc, [120, 240, 360]);
    }

    #[test]
    fn test_short_taps_use_prefix_of_window() {
        let frames = [1, 1, 1, 1];
        let taps = [3i16];
        let mut acc = [0i64; 2];
        ScalarKernel.accumulate(&frames, Taps::Q15(&taps), 2, &mut acc);
        assert_eq!(acc, [3, 3]);
    }
}
