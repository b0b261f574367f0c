//! Common Utilities
//! 
//! Fixed-point helpers shared by the conversion engine and its tests.

/// Saturate a 64-bit value to the signed 32-bit range
#[inline]
pub fn sat_int32(x: i64) -> i32 {
    if x > i32::MAX as i64 {
        i32::MAX
    } else if x < i32::MIN as i64 {
        i32::MIN
    } else {
        x as i32
    }
}

/// Saturate a 32-bit value to the signed 16-bit range
#[inline]
pub fn sat_int16(x: i32) -> i16 {
    if x > i16::MAX as i32 {
        i16::MAX
    } else if x < i16::MIN as i32 {
        i16::MIN
    } else {
        x as i16
    }
}

/// Convert between Q formats rounding to nearest
///
/// `src_q` must be larger than `dst_q`.
#[inline]
pub fn q_shift_rnd(x: i32, src_q: u32, dst_q: u32) -> i32 {
    ((x >> (src_q - dst_q - 1)) + 1) >> 1
}

#[cfg(test)]
mod tests {
    use super::*;
    
    #[test]
    fn test_sat_int32() {
        assert_eq!(sat_int32(1 << 40), i32::MAX);
        assert_eq!(sat_int32(-(1 << 40)), i32::MIN);
        assert_eq!(sat_int32(-5), -5);
    }
    
    #[test]
    fn test_sat_int16() {
        assert_eq!(sat_int16(40000), i16::MAX);
        assert_eq!(sat_int16(-40000), i16::MIN);
        assert_eq!(sat_int16(123), 123);
    }
    
    #[test]
    fn test_q_shift_rnd() {
        // 0.5 LSB rounds away from zero on the positive side
        assert_eq!(q_shift_rnd(0x8000, 31, 15), 1);
        assert_eq!(q_shift_rnd(0x7fff, 31, 15), 0);
        assert_eq!(q_shift_rnd(i32::MAX, 31, 15), 32768);
        assert_eq!(q_shift_rnd(-0x10000, 31, 15), -1);
    }
}
