//! AVX2 kernel (x86_64)
//!
//! Taps are sign-extended into 64-bit lanes and multiplied with
//! `_mm256_mul_epi32`, which takes the low signed 32 bits of each lane.
//! Mono processes four taps per step, stereo splits the even and odd halves
//! of interleaved frames, four channels broadcast one tap across a frame.

use std::arch::x86_64::*;

use super::scalar::mac_generic;
use super::{with_taps, Coefficient};
use crate::stage::Taps;

trait Avx2Taps: Coefficient {
    /// Four consecutive taps as 64-bit lanes
    unsafe fn load4(ptr: *const Self) -> __m256i;
}

impl Avx2Taps for i32 {
    #[inline(always)]
    unsafe fn load4(ptr: *const i32) -> __m256i {
        _mm256_cvtepi32_epi64(_mm_srai_epi32(_mm_loadu_si128(ptr as *const __m128i), 8))
    }
}

impl Avx2Taps for i16 {
    #[inline(always)]
    unsafe fn load4(ptr: *const i16) -> __m256i {
        _mm256_cvtepi16_epi64(_mm_loadl_epi64(ptr as *const __m128i))
    }
}

/// # Safety
/// The CPU must support AVX2.
pub(super) unsafe fn accumulate(frames: &[i32], taps: Taps<'_>, channels: usize, acc: &mut [i64]) {
    match channels {
        1 => with_taps!(taps, c => mac_mono(frames, c, acc)),
        2 => with_taps!(taps, c => mac_stereo(frames, c, acc)),
        4 => with_taps!(taps, c => mac_quad(frames, c, acc)),
        _ => with_taps!(taps, c => mac_generic(frames, c, channels, acc)),
    }
}

#[target_feature(enable = "avx2")]
unsafe fn lanes(v: __m256i) -> [i64; 4] {
    let mut out = [0i64; 4];
    _mm256_storeu_si256(out.as_mut_ptr() as *mut __m256i, v);
    out
}

fn hsum(lanes: [i64; 4]) -> i64 {
    lanes.iter().fold(0i64, |s, &l| s.wrapping_add(l))
}

#[target_feature(enable = "avx2")]
unsafe fn mac_mono<C: Avx2Taps>(frames: &[i32], coefs: &[C], acc: &mut [i64]) {
    let n = coefs.len().min(frames.len());
    let split = n - n % 4;
    let mut sum = _mm256_setzero_si256();
    let mut j = 0;
    while j < split {
        let taps = C::load4(coefs.as_ptr().add(j));
        let data = _mm256_cvtepi32_epi64(_mm_loadu_si128(frames.as_ptr().add(j) as *const __m128i));
        sum = _mm256_add_epi64(sum, _mm256_mul_epi32(data, taps));
        j += 4;
    }

    let mut a = acc[0].wrapping_add(hsum(lanes(sum)));
    for k in split..n {
        a = a.wrapping_add(coefs[k].scaled().wrapping_mul(frames[k] as i64));
    }
    acc[0] = a;
}

#[target_feature(enable = "avx2")]
unsafe fn mac_stereo<C: Avx2Taps>(frames: &[i32], coefs: &[C], acc: &mut [i64]) {
    let n = coefs.len().min(frames.len() / 2);
    let split = n - n % 4;
    // Low half of each 64-bit lane is channel 1, high half channel 0
    let mut sum1 = _mm256_setzero_si256();
    let mut sum0 = _mm256_setzero_si256();
    let mut j = 0;
    while j < split {
        let taps = C::load4(coefs.as_ptr().add(j));
        let data = _mm256_loadu_si256(frames.as_ptr().add(2 * j) as *const __m256i);
        sum1 = _mm256_add_epi64(sum1, _mm256_mul_epi32(data, taps));
        sum0 = _mm256_add_epi64(sum0, _mm256_mul_epi32(_mm256_srli_epi64(data, 32), taps));
        j += 4;
    }

    let mut a0 = acc[0].wrapping_add(hsum(lanes(sum0)));
    let mut a1 = acc[1].wrapping_add(hsum(lanes(sum1)));
    for k in split..n {
        let c = coefs[k].scaled();
        a1 = a1.wrapping_add(c.wrapping_mul(frames[2 * k] as i64));
        a0 = a0.wrapping_add(c.wrapping_mul(frames[2 * k + 1] as i64));
    }
    acc[0] = a0;
    acc[1] = a1;
}

#[target_feature(enable = "avx2")]
unsafe fn mac_quad<C: Avx2Taps>(frames: &[i32], coefs: &[C], acc: &mut [i64]) {
    let n = coefs.len().min(frames.len() / 4);
    let mut sum = _mm256_setzero_si256();
    for (j, &c) in coefs[..n].iter().enumerate() {
        let tap = _mm256_set1_epi64x(c.scaled());
        let data = _mm256_cvtepi32_epi64(_mm_loadu_si128(frames.as_ptr().add(4 * j) as *const __m128i));
        sum = _mm256_add_epi64(sum, _mm256_mul_epi32(data, tap));
    }
    // Lane k holds channel 3 - k
    let l = lanes(sum);
    for (ch, a) in acc.iter_mut().enumerate() {
        *a = a.wrapping_add(l[3 - ch]);
    }
}
