//! Circular PCM Stream Buffer
//!
//! Byte ring buffer holding interleaved little endian sample containers.
//! It implements both [`Source`] and [`Sink`], so one instance can feed a
//! conversion plan while another collects its output.

use std::mem::MaybeUninit;

use common::{SampleFormat, MAX_CHANNELS};
use ringbuf::traits::{Consumer, Observer, Producer};
use ringbuf::HeapRb;
use serde::{Deserialize, Serialize};
use tracing::{debug, trace, warn};

use crate::{RingRegion, RingRegionMut, Sink, Source, StreamError};

/// Audio stream configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AudioStreamConfig {
    /// Sample container format
    pub format: SampleFormat,
    /// Number of interleaved channels
    pub channels: usize,
    /// Ring capacity in frames
    pub capacity_frames: usize,
}

impl AudioStreamConfig {
    /// Create a new stream configuration
    pub fn new(format: SampleFormat, channels: usize, capacity_frames: usize) -> Self {
        Self { format, channels, capacity_frames }
    }

    /// Bytes in one frame
    pub fn frame_bytes(&self) -> usize {
        self.channels * self.format.container_bytes()
    }
}

/// Stream statistics
#[derive(Debug, Clone, Default, Serialize)]
pub struct StreamStats {
    /// Frames committed by producers
    pub frames_produced: u64,
    /// Frames released by consumers
    pub frames_consumed: u64,
    /// Consume or produce calls that asked for more frames than the ring held
    pub overruns: u64,
}

/// Interleaved PCM ring buffer
pub struct AudioStream {
    config: AudioStreamConfig,
    ring: HeapRb<u8>,
    frame_bytes: usize,
    stats: StreamStats,
}

/// View vacant ring storage as bytes
fn initialised(slice: &mut [MaybeUninit<u8>]) -> &mut [u8] {
    // SAFETY: `AudioStream::new` writes every byte of the storage once and
    // u8 has no invalid bit patterns, so the storage stays initialised.
    unsafe { &mut *(slice as *mut [MaybeUninit<u8>] as *mut [u8]) }
}

impl AudioStream {
    /// Create a new zero-filled stream
    pub fn new(config: AudioStreamConfig) -> Result<Self, StreamError> {
        if config.channels == 0 || config.channels > MAX_CHANNELS {
            return Err(StreamError::InvalidConfig(format!(
                "channel count {} outside 1..={}",
                config.channels, MAX_CHANNELS
            )));
        }
        if config.capacity_frames == 0 {
            return Err(StreamError::InvalidConfig("zero capacity".to_string()));
        }

        let frame_bytes = config.frame_bytes();
        let bytes = frame_bytes * config.capacity_frames;
        let mut ring = HeapRb::<u8>::try_new(bytes).map_err(|_| StreamError::OutOfMemory { bytes })?;
        ring.push_iter(std::iter::repeat(0).take(bytes));
        ring.skip(bytes);

        debug!(
            "Audio stream: {} x {} ch, {} frames ({} bytes)",
            config.format, config.channels, config.capacity_frames, bytes
        );

        Ok(Self { config, ring, frame_bytes, stats: StreamStats::default() })
    }

    /// Stream configuration
    pub fn config(&self) -> &AudioStreamConfig {
        &self.config
    }

    /// Ring capacity in frames
    pub fn capacity_frames(&self) -> usize {
        self.config.capacity_frames
    }

    /// Transfer statistics
    pub fn stats(&self) -> &StreamStats {
        &self.stats
    }

    /// Drop all buffered data
    pub fn reset(&mut self) {
        let dropped = self.ring.skip(self.ring.occupied_len());
        trace!("Audio stream reset, {} frames dropped", dropped / self.frame_bytes);
    }

    /// Append raw little endian frames, returning the number of frames taken
    ///
    /// Only as many whole frames as fit are copied.
    pub fn write_bytes(&mut self, data: &[u8]) -> Result<usize, StreamError> {
        if data.len() % self.frame_bytes != 0 {
            return Err(StreamError::PartialFrame(data.len()));
        }
        let frames = (data.len() / self.frame_bytes).min(self.free_frames());
        let pushed = self.ring.push_slice(&data[..frames * self.frame_bytes]);
        self.stats.frames_produced += (pushed / self.frame_bytes) as u64;
        Ok(frames)
    }

    /// Pop up to `max_frames` frames of raw bytes into `out`
    pub fn read_bytes(&mut self, out: &mut Vec<u8>, max_frames: usize) -> usize {
        let frames = max_frames.min(self.available_frames());
        let start = out.len();
        out.resize(start + frames * self.frame_bytes, 0);
        let popped = self.ring.pop_slice(&mut out[start..]);
        self.stats.frames_consumed += (popped / self.frame_bytes) as u64;
        frames
    }

    /// Append interleaved samples, returning the number of frames taken
    ///
    /// Values are stored as containers of the stream format without range
    /// checking.
    pub fn write_samples(&mut self, samples: &[i32]) -> Result<usize, StreamError> {
        let channels = self.config.channels;
        let container = self.config.format.container_bytes();
        if samples.len() % channels != 0 {
            return Err(StreamError::PartialFrame(samples.len() * container));
        }
        let frames = (samples.len() / channels).min(self.free_frames());
        let mut bytes = vec![0u8; frames * self.frame_bytes];
        for (chunk, &sample) in bytes.chunks_exact_mut(container).zip(samples) {
            self.config.format.encode(sample, chunk);
        }
        self.write_bytes(&bytes)
    }

    /// Pop up to `max_frames` frames as interleaved sample values
    pub fn read_samples(&mut self, max_frames: usize) -> Vec<i32> {
        let mut bytes = Vec::new();
        self.read_bytes(&mut bytes, max_frames);
        bytes
            .chunks_exact(self.config.format.container_bytes())
            .map(|chunk| self.config.format.decode(chunk))
            .collect()
    }
}

impl Source for AudioStream {
    fn frame_format(&self) -> SampleFormat {
        self.config.format
    }

    fn channel_count(&self) -> usize {
        self.config.channels
    }

    fn available_frames(&self) -> usize {
        self.ring.occupied_len() / self.frame_bytes
    }

    fn read_region(&self) -> RingRegion<'_> {
        let (head, tail) = self.ring.as_slices();
        RingRegion { head, tail }
    }

    fn consume(&mut self, frames: usize) {
        let available = self.available_frames();
        if frames > available {
            warn!("Consume of {} frames with {} available, clamping", frames, available);
            self.stats.overruns += 1;
        }
        let skipped = self.ring.skip(frames.min(available) * self.frame_bytes);
        self.stats.frames_consumed += (skipped / self.frame_bytes) as u64;
    }
}

impl Sink for AudioStream {
    fn frame_format(&self) -> SampleFormat {
        self.config.format
    }

    fn channel_count(&self) -> usize {
        self.config.channels
    }

    fn free_frames(&self) -> usize {
        self.ring.vacant_len() / self.frame_bytes
    }

    fn write_region(&mut self) -> RingRegionMut<'_> {
        let (head, tail) = self.ring.vacant_slices_mut();
        RingRegionMut { head: initialised(head), tail: initialised(tail) }
    }

    fn produce(&mut self, frames: usize) {
        let free = self.free_frames();
        if frames > free {
            warn!("Produce of {} frames with {} free, clamping", frames, free);
            self.stats.overruns += 1;
        }
        let frames = frames.min(free);
        // SAFETY: the count is within the vacant length and the bytes were
        // written through `write_region`.
        unsafe { self.ring.advance_write_index(frames * self.frame_bytes) };
        self.stats.frames_produced += frames as u64;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stream(format: SampleFormat, channels: usize, frames: usize) -> AudioStream {
        AudioStream::new(AudioStreamConfig::new(format, channels, frames)).unwrap()
    }

    #[test]
    fn test_stream_config_validation() {
        let too_many = AudioStreamConfig::new(SampleFormat::S32, MAX_CHANNELS + 1, 16);
        assert!(matches!(AudioStream::new(too_many), Err(StreamError::InvalidConfig(_))));

        let empty = AudioStreamConfig::new(SampleFormat::S16, 2, 0);
        assert!(AudioStream::new(empty).is_err());
    }

    #[test]
    fn test_samples_wrap_around() {
        let mut s = stream(SampleFormat::S16, 2, 3);
        assert_eq!(s.write_samples(&[1, -1, 2, -2]).unwrap(), 2);
        assert_eq!(s.read_samples(1), vec![1, -1]);
        // Two more frames: one at the end of the ring, one wrapped to the start
        assert_eq!(s.write_samples(&[3, -3, 4, -4, 5, -5]).unwrap(), 2);
        assert_eq!(Source::available_frames(&s), 3);
        assert_eq!(Sink::free_frames(&s), 0);
        assert_eq!(s.read_samples(8), vec![2, -2, 3, -3, 4, -4]);
        assert_eq!(s.stats().frames_consumed, 4);
        assert_eq!(s.stats().frames_produced, 4);
    }

    #[test]
    fn test_bytes_roundtrip_across_boundary() {
        let mut s = stream(SampleFormat::S32, 1, 4);
        s.write_bytes(&[0u8; 12]).unwrap();
        let mut sink = Vec::new();
        s.read_bytes(&mut sink, 3);

        let data: Vec<u8> = (0u8..16).collect();
        assert_eq!(s.write_bytes(&data).unwrap(), 4);
        let mut out = Vec::new();
        assert_eq!(s.read_bytes(&mut out, 4), 4);
        assert_eq!(out, data);
    }

    #[test]
    fn test_partial_frame_rejected() {
        let mut s = stream(SampleFormat::S24, 2, 4);
        assert_eq!(s.write_bytes(&[0u8; 6]), Err(StreamError::PartialFrame(6)));
        assert!(s.write_samples(&[1, 2, 3]).is_err());
    }

    #[test]
    fn test_regions_split_at_wrap() {
        let mut s = stream(SampleFormat::S16, 1, 4);
        s.write_samples(&[7, 8, 9]).unwrap();
        assert_eq!(s.read_samples(2), vec![7, 8]);

        // One frame left before the wrap, two free after it
        let mut region = s.write_region();
        assert_eq!(region.wrap_boundary(), 2);
        assert_eq!(region.len(), 6);
        region.head.copy_from_slice(&10i16.to_le_bytes());
        region.tail[..2].copy_from_slice(&11i16.to_le_bytes());
        Sink::produce(&mut s, 2);

        let region = s.read_region();
        assert_eq!(region.head, &[9, 0, 10, 0]);
        assert_eq!(region.tail, &[11, 0]);
        assert_eq!(Source::available_frames(&s), 3);

        s.reset();
        assert_eq!(Source::available_frames(&s), 0);
        assert!(s.read_region().is_empty());
        assert_eq!(Sink::free_frames(&s), 4);
    }

    #[test]
    fn test_out_of_range_counts_are_clamped() {
        let mut s = stream(SampleFormat::S32, 2, 4);
        s.write_samples(&[1, 2, 3, 4]).unwrap();

        Source::consume(&mut s, 5);
        assert_eq!(Source::available_frames(&s), 0);
        assert_eq!(s.stats().frames_consumed, 2);

        Sink::produce(&mut s, 9);
        assert_eq!(Sink::free_frames(&s), 0);
        assert_eq!(s.stats().frames_produced, 6);
        assert_eq!(s.stats().overruns, 2);
    }
}
