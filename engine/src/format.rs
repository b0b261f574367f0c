//! Format Adapter
//!
//! Conversion between interleaved PCM containers and the Q1.31 samples the
//! stage executor works on, plus readers and writers walking a stream's
//! ring region.

use common::{q_shift_rnd, sat_int16, SampleFormat};
use interfaces::{RingRegion, RingRegionMut};

use crate::executor::{SampleReader, SampleWriter};
use crate::SrcError;

/// Resolve a frame format code received from the pipeline
pub fn resolve_format(code: u32) -> Result<SampleFormat, SrcError> {
    SampleFormat::from_code(code).ok_or(SrcError::UnsupportedFormat(code))
}

/// Raw container value to Q1.31
#[inline]
pub fn to_internal(raw: i32, format: SampleFormat) -> i32 {
    match format {
        SampleFormat::S16 => raw << 16,
        SampleFormat::S24 => raw << 8,
        SampleFormat::S32 => raw,
    }
}

/// Q1.31 sample to raw container value
///
/// 16-bit output is rounded to nearest and saturated.
#[inline]
pub fn from_internal(sample: i32, format: SampleFormat) -> i32 {
    match format {
        SampleFormat::S16 => sat_int16(q_shift_rnd(sample, 31, 15)) as i32,
        SampleFormat::S24 => sample >> 8,
        SampleFormat::S32 => sample,
    }
}

/// Reads Q1.31 frames from a source ring region
pub struct StreamReader<'a> {
    current: &'a [u8],
    rest: &'a [u8],
    format: SampleFormat,
}

impl<'a> StreamReader<'a> {
    /// Create a new reader positioned at the start of the region
    pub fn new(region: RingRegion<'a>, format: SampleFormat) -> Self {
        Self { current: region.head, rest: region.tail, format }
    }
}

impl SampleReader for StreamReader<'_> {
    fn read_frame(&mut self, frame: &mut [i32]) {
        let container = self.format.container_bytes();
        for sample in frame.iter_mut() {
            if self.current.is_empty() {
                self.current = std::mem::take(&mut self.rest);
            }
            let (bytes, rest) = self.current.split_at(container);
            *sample = to_internal(self.format.decode(bytes), self.format);
            self.current = rest;
        }
    }
}

/// Writes Q1.31 frames into a sink ring region
pub struct StreamWriter<'a> {
    current: &'a mut [u8],
    rest: &'a mut [u8],
    format: SampleFormat,
}

impl<'a> StreamWriter<'a> {
    /// Create a new writer positioned at the start of the region
    pub fn new(region: RingRegionMut<'a>, format: SampleFormat) -> Self {
        Self { current: region.head, rest: region.tail, format }
    }
}

impl SampleWriter for StreamWriter<'_> {
    fn write_frame(&mut self, frame: &[i32]) {
        let container = self.format.container_bytes();
        for &sample in frame {
            if self.current.is_empty() {
                self.current = std::mem::take(&mut self.rest);
            }
            let (bytes, rest) = std::mem::take(&mut self.current).split_at_mut(container);
            self.format.encode(from_internal(sample, self.format), bytes);
            self.current = rest;
        }
    }
}

/// Copy `bytes` raw bytes between two ring regions, wrapping on both sides
pub fn copy_raw(src: RingRegion<'_>, dst: RingRegionMut<'_>, bytes: usize) {
    let from = src.head.iter().chain(src.tail);
    let to = dst.head.iter_mut().chain(dst.tail.iter_mut());
    for (d, s) in to.zip(from).take(bytes) {
        *d = *s;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_s16_conversion() {
        assert_eq!(to_internal(1, SampleFormat::S16), 1 << 16);
        assert_eq!(to_internal(-32768, SampleFormat::S16), i32::MIN);
        for raw in [-32768, -1234, -1, 0, 1, 32767] {
            assert_eq!(from_internal(to_internal(raw, SampleFormat::S16), SampleFormat::S16), raw);
        }
        // Rounds to nearest and saturates at full scale
        assert_eq!(from_internal(0x0001_8000, SampleFormat::S16), 2);
        assert_eq!(from_internal(i32::MAX, SampleFormat::S16), 32767);
    }

    #[test]
    fn test_s24_conversion() {
        // Upper container byte is not part of the sample
        assert_eq!(to_internal(0x7f80_0000, SampleFormat::S24), i32::MIN);
        assert_eq!(to_internal(-1, SampleFormat::S24), -256);
        assert_eq!(from_internal(-256, SampleFormat::S24), -1);
        assert_eq!(from_internal(i32::MAX, SampleFormat::S24), 0x7f_ffff);
    }

    #[test]
    fn test_s32_is_unchanged() {
        for v in [i32::MIN, -7, 0, 99, i32::MAX] {
            assert_eq!(to_internal(v, SampleFormat::S32), v);
            assert_eq!(from_internal(v, SampleFormat::S32), v);
        }
    }

    #[test]
    fn test_resolve_format() {
        assert_eq!(resolve_format(1), Ok(SampleFormat::S24));
        assert_eq!(resolve_format(7), Err(SrcError::UnsupportedFormat(7)));
    }

    #[test]
    fn test_reader_wraps_at_boundary() {
        let data: Vec<u8> = [3i16, -3, 1, -1, 2, -2]
            .iter()
            .flat_map(|v| v.to_le_bytes())
            .collect();
        // Last frame of a three-frame stereo ring, then the first
        let region = RingRegion { head: &data[8..], tail: &data[..4] };
        let mut reader = StreamReader::new(region, SampleFormat::S16);
        let mut frame = [0i32; 2];
        reader.read_frame(&mut frame);
        assert_eq!(frame, [2 << 16, -2 << 16]);
        reader.read_frame(&mut frame);
        assert_eq!(frame, [3 << 16, -3 << 16]);
    }

    #[test]
    fn test_writer_wraps_at_boundary() {
        let mut data = vec![0u8; 16];
        {
            let (front, back) = data.split_at_mut(8);
            let region = RingRegionMut { head: back, tail: front };
            let mut writer = StreamWriter::new(region, SampleFormat::S24);
            writer.write_frame(&[5 << 8, -5 << 8]);
            writer.write_frame(&[6 << 8, -6 << 8]);
        }
        assert_eq!(SampleFormat::S24.decode(&data[8..]), 5);
        assert_eq!(SampleFormat::S24.decode(&data[12..]), -5);
        assert_eq!(SampleFormat::S24.decode(&data[0..]), 6);
        assert_eq!(SampleFormat::S24.decode(&data[4..]), -6);
    }

    #[test]
    fn test_copy_raw_double_wrap() {
        let src: Vec<u8> = (0u8..8).collect();
        let mut dst = vec![0u8; 6];
        {
            let (front, back) = dst.split_at_mut(4);
            copy_raw(
                RingRegion { head: &src[6..], tail: &src[..4] },
                RingRegionMut { head: back, tail: front },
                6,
            );
        }
        assert_eq!(dst, vec![0, 1, 2, 3, 6, 7]);
    }
}
