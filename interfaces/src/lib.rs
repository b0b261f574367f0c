//! PCM Stream Interfaces Library
//! 
//! This crate defines the source and sink stream contracts consumed by the
//! conversion engine, and a byte ring buffer implementing both.

pub mod audio_stream;

pub use audio_stream::{AudioStream, AudioStreamConfig, StreamStats};

use common::SampleFormat;
use thiserror::Error;

/// Stream errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StreamError {
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Out of memory allocating {bytes} bytes")]
    OutOfMemory { bytes: usize },

    #[error("Buffer full: {requested} frames requested, {free} free")]
    BufferFull { requested: usize, free: usize },

    #[error("Buffer empty: {requested} frames requested, {available} available")]
    BufferEmpty { requested: usize, available: usize },

    #[error("Partial frame: {0} bytes is not a whole number of frames")]
    PartialFrame(usize),
}

/// Readable bytes of a circular buffer
///
/// `head` runs from the read cursor to the wrap boundary and `tail` continues
/// from the start of the buffer. Both end on frame boundaries.
#[derive(Debug, Clone, Copy)]
pub struct RingRegion<'a> {
    /// Bytes before the wrap boundary
    pub head: &'a [u8],
    /// Bytes after the wrap boundary
    pub tail: &'a [u8],
}

impl<'a> RingRegion<'a> {
    /// Bytes readable before the cursor wraps
    pub fn wrap_boundary(&self) -> usize {
        self.head.len()
    }

    /// Total readable bytes
    pub fn len(&self) -> usize {
        self.head.len() + self.tail.len()
    }

    /// True when nothing is readable
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Writable bytes of a circular buffer, laid out like [`RingRegion`]
#[derive(Debug)]
pub struct RingRegionMut<'a> {
    /// Bytes before the wrap boundary
    pub head: &'a mut [u8],
    /// Bytes after the wrap boundary
    pub tail: &'a mut [u8],
}

impl<'a> RingRegionMut<'a> {
    /// Bytes writable before the cursor wraps
    pub fn wrap_boundary(&self) -> usize {
        self.head.len()
    }

    /// Total writable bytes
    pub fn len(&self) -> usize {
        self.head.len() + self.tail.len()
    }

    /// True when nothing is writable
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Producer side of an interleaved PCM stream
pub trait Source {
    /// Sample container format
    fn frame_format(&self) -> SampleFormat;

    /// Number of interleaved channels
    fn channel_count(&self) -> usize;

    /// Frames ready to be read
    fn available_frames(&self) -> usize;

    /// Readable bytes starting at the read cursor
    fn read_region(&self) -> RingRegion<'_>;

    /// Release `frames` frames after they have been read
    ///
    /// Counts beyond [`Source::available_frames`] are clamped.
    fn consume(&mut self, frames: usize);

    /// Bytes in one frame
    fn frame_bytes(&self) -> usize {
        self.channel_count() * self.frame_format().container_bytes()
    }
}

/// Consumer side of an interleaved PCM stream
pub trait Sink {
    /// Sample container format
    fn frame_format(&self) -> SampleFormat;

    /// Number of interleaved channels
    fn channel_count(&self) -> usize;

    /// Frames that can be written without overwriting unread data
    fn free_frames(&self) -> usize;

    /// Writable bytes starting at the write cursor
    fn write_region(&mut self) -> RingRegionMut<'_>;

    /// Commit `frames` frames after they have been written
    ///
    /// Counts beyond [`Sink::free_frames`] are clamped.
    fn produce(&mut self, frames: usize);

    /// Bytes in one frame
    fn frame_bytes(&self) -> usize {
        self.channel_count() * self.frame_format().container_bytes()
    }
}
