//! Portable unrolled kernel
//!
//! Four independent partial sums per channel, which the compiler can keep in
//! registers and auto-vectorise on targets without a dedicated backend.

use super::{with_taps, Coefficient, FirKernel};
use crate::stage::Taps;

/// Four-tap unrolled backend
#[derive(Debug, Clone, Copy, Default)]
pub struct UnrolledKernel;

impl FirKernel for UnrolledKernel {
    fn name(&self) -> &'static str {
        "unrolled"
    }

    fn accumulate(&self, frames: &[i32], taps: Taps<'_>, channels: usize, acc: &mut [i64]) {
        with_taps!(taps, c => mac_unrolled(frames, c, channels, acc))
    }
}

fn mac_unrolled<C: Coefficient>(frames: &[i32], coefs: &[C], channels: usize, acc: &mut [i64]) {
    let n = coefs.len().min(frames.len() / channels);
    let (coefs, frames) = (&coefs[..n], &frames[..n * channels]);
    let split = n - n % 4;

    for (ch, a) in acc.iter_mut().enumerate() {
        let lane = channels - 1 - ch;
        let mut s = [0i64; 4];
        for (block, taps) in frames[..split * channels]
            .chunks_exact(4 * channels)
            .zip(coefs[..split].chunks_exact(4))
        {
            for k in 0..4 {
                let x = block[k * channels + lane] as i64;
                s[k] = s[k].wrapping_add(taps[k].scaled().wrapping_mul(x));
            }
        }

        let mut total = a.wrapping_add(s[0].wrapping_add(s[1]).wrapping_add(s[2].wrapping_add(s[3])));
        for (frame, &c) in frames[split * channels..].chunks_exact(channels).zip(&coefs[split..]) {
            total = total.wrapping_add(c.scaled().wrapping_mul(frame[lane] as i64));
        }
        *a = total;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::kernel::ScalarKernel;

    #[test]
    fn test_matches_scalar_with_remainder() {
        let frames: Vec<i32> = (0..22).map(|i| (i * 7919 - 50_000) << 8).collect();
        let taps: Vec<i32> = (0..11).map(|i| (i - 5) * 1_000_003).collect();
        let mut expected = [3i64, -3];
        let mut actual = expected;
        ScalarKernel.accumulate(&frames, Taps::Q31(&taps), 2, &mut expected);
        UnrolledKernel.accumulate(&frames, Taps::Q31(&taps), 2, &mut actual);
        assert_eq!(expected, actual);
    }
}
