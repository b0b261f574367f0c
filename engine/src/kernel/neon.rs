//! NEON kernel (aarch64)
//!
//! Widening multiply-accumulate (`vmlal_s32`) of 32-bit samples with taps
//! narrowed to their 24 or 16 significant bits.

use std::arch::aarch64::*;

use super::scalar::mac_generic;
use super::{with_taps, Coefficient};
use crate::stage::Taps;

/// # Safety
/// The CPU must support NEON.
pub(super) unsafe fn accumulate(frames: &[i32], taps: Taps<'_>, channels: usize, acc: &mut [i64]) {
    match channels {
        1 => with_taps!(taps, c => mac_mono(frames, c, acc)),
        2 => with_taps!(taps, c => mac_stereo(frames, c, acc)),
        4 => with_taps!(taps, c => mac_quad(frames, c, acc)),
        _ => with_taps!(taps, c => mac_generic(frames, c, channels, acc)),
    }
}

#[target_feature(enable = "neon")]
unsafe fn lanes(v: int64x2_t) -> [i64; 2] {
    let mut out = [0i64; 2];
    vst1q_s64(out.as_mut_ptr(), v);
    out
}

#[target_feature(enable = "neon")]
unsafe fn mac_mono<C: Coefficient>(frames: &[i32], coefs: &[C], acc: &mut [i64]) {
    let n = coefs.len().min(frames.len());
    let split = n - n % 2;
    let mut sum = vdupq_n_s64(0);
    let mut j = 0;
    while j < split {
        let data = vld1_s32(frames.as_ptr().add(j));
        let pair = [coefs[j].scaled() as i32, coefs[j + 1].scaled() as i32];
        sum = vmlal_s32(sum, data, vld1_s32(pair.as_ptr()));
        j += 2;
    }

    let l = lanes(sum);
    let mut a = acc[0].wrapping_add(l[0]).wrapping_add(l[1]);
    for k in split..n {
        a = a.wrapping_add(coefs[k].scaled().wrapping_mul(frames[k] as i64));
    }
    acc[0] = a;
}

#[target_feature(enable = "neon")]
unsafe fn mac_stereo<C: Coefficient>(frames: &[i32], coefs: &[C], acc: &mut [i64]) {
    let n = coefs.len().min(frames.len() / 2);
    // Lane 0 is channel 1, lane 1 channel 0
    let mut sum = vdupq_n_s64(0);
    for (j, &c) in coefs[..n].iter().enumerate() {
        let data = vld1_s32(frames.as_ptr().add(2 * j));
        sum = vmlal_s32(sum, data, vdup_n_s32(c.scaled() as i32));
    }
    let l = lanes(sum);
    acc[0] = acc[0].wrapping_add(l[1]);
    acc[1] = acc[1].wrapping_add(l[0]);
}

#[target_feature(enable = "neon")]
unsafe fn mac_quad<C: Coefficient>(frames: &[i32], coefs: &[C], acc: &mut [i64]) {
    let n = coefs.len().min(frames.len() / 4);
    let mut low = vdupq_n_s64(0);
    let mut high = vdupq_n_s64(0);
    for (j, &c) in coefs[..n].iter().enumerate() {
        let data = vld1q_s32(frames.as_ptr().add(4 * j));
        let tap = vdup_n_s32(c.scaled() as i32);
        low = vmlal_s32(low, vget_low_s32(data), tap);
        high = vmlal_s32(high, vget_high_s32(data), tap);
    }
    // low holds channels 3 and 2, high channels 1 and 0
    let (l, h) = (lanes(low), lanes(high));
    acc[0] = acc[0].wrapping_add(h[1]);
    acc[1] = acc[1].wrapping_add(h[0]);
    acc[2] = acc[2].wrapping_add(l[1]);
    acc[3] = acc[3].wrapping_add(l[0]);
}
