//! Delay-Line State
//!
//! Frame-granular circular buffers holding the FIR input history and the
//! output reorder buffer of one stage. All wrap arithmetic lives here; the
//! kernels only ever see whole frames in contiguous slices.

use tracing::trace;

use crate::stage::StageDescriptor;
use crate::SrcError;

/// Circular buffer of interleaved frames
#[derive(Debug, Clone)]
pub struct FrameRing {
    data: Vec<i32>,
    channels: usize,
    frames: usize,
}

/// Taps window into a [`FrameRing`], split where it crosses the end of the buffer
#[derive(Debug, Clone, Copy)]
pub struct Window<'a> {
    /// Frames from the window start to the buffer end (or window end)
    pub head: &'a [i32],
    /// Frames continuing from the buffer start
    pub tail: &'a [i32],
    /// Samples per frame
    pub channels: usize,
}

impl Window<'_> {
    /// Number of frames covered
    pub fn frames(&self) -> usize {
        (self.head.len() + self.tail.len()) / self.channels
    }
}

impl FrameRing {
    /// Create a new zero-filled ring of `frames` frames
    pub fn new(frames: usize, channels: usize) -> Result<Self, SrcError> {
        let samples = frames * channels;
        let mut data = Vec::new();
        data.try_reserve_exact(samples).map_err(|_| SrcError::OutOfMemory {
            bytes: samples * std::mem::size_of::<i32>(),
        })?;
        data.resize(samples, 0);
        Ok(Self { data, channels, frames })
    }

    /// Capacity in frames
    pub fn frames(&self) -> usize {
        self.frames
    }

    /// Samples per frame
    pub fn channels(&self) -> usize {
        self.channels
    }

    /// Zero every sample
    pub fn clear(&mut self) {
        self.data.fill(0);
    }

    /// Frame `index`, which must be below [`Self::frames`]
    pub fn frame(&self, index: usize) -> &[i32] {
        &self.data[index * self.channels..(index + 1) * self.channels]
    }

    /// Mutable frame `index`
    pub fn frame_mut(&mut self, index: usize) -> &mut [i32] {
        &mut self.data[index * self.channels..(index + 1) * self.channels]
    }

    /// Frame index `n` frames after `index`
    #[inline]
    pub fn forward(&self, index: usize, n: usize) -> usize {
        (index + n % self.frames) % self.frames
    }

    /// Frame index `n` frames before `index`
    #[inline]
    pub fn backward(&self, index: usize, n: usize) -> usize {
        (index + self.frames - n % self.frames) % self.frames
    }

    /// `len` frames starting at frame `start`, wrapping once at the end
    pub fn window(&self, start: usize, len: usize) -> Window<'_> {
        debug_assert!(start < self.frames && len <= self.frames);
        let first = len.min(self.frames - start);
        Window {
            head: &self.data[start * self.channels..(start + first) * self.channels],
            tail: &self.data[..(len - first) * self.channels],
            channels: self.channels,
        }
    }
}

/// History and reorder buffers of one active stage
#[derive(Debug, Clone)]
pub struct DelayLineState {
    /// FIR input history, newest frame written at the lowest index
    pub(crate) fir_delay: FrameRing,
    /// Output reorder buffer
    pub(crate) out_delay: FrameRing,
    /// Frame slot receiving the next input frame
    pub(crate) fir_write_cursor: usize,
    /// Next frame to drain from the reorder buffer
    pub(crate) out_read_cursor: usize,
}

impl DelayLineState {
    /// Allocate zeroed buffers sized for `stage`
    pub fn new(stage: &StageDescriptor, channels: usize) -> Result<Self, SrcError> {
        let fir_delay = FrameRing::new(stage.fir_delay_length(), channels)?;
        let out_delay = FrameRing::new(stage.out_delay_length(), channels)?;
        trace!(
            "{}: fir delay {} frames, out delay {} frames, {} ch",
            stage.name,
            fir_delay.frames(),
            out_delay.frames(),
            channels
        );
        let mut state = Self { fir_delay, out_delay, fir_write_cursor: 0, out_read_cursor: 0 };
        state.rewind();
        Ok(state)
    }

    /// Zero both buffers and return the cursors to their initial positions
    pub fn reset(&mut self) {
        self.fir_delay.clear();
        self.out_delay.clear();
        self.rewind();
    }

    fn rewind(&mut self) {
        self.fir_write_cursor = self.fir_delay.frames().saturating_sub(1);
        self.out_read_cursor = 0;
    }

    /// FIR history buffer
    pub fn fir_delay(&self) -> &FrameRing {
        &self.fir_delay
    }

    /// Output reorder buffer
    pub fn out_delay(&self) -> &FrameRing {
        &self.out_delay
    }

    /// Frame slot receiving the next input frame
    pub fn fir_write_cursor(&self) -> usize {
        self.fir_write_cursor
    }

    /// Next frame to drain from the reorder buffer
    pub fn out_read_cursor(&self) -> usize {
        self.out_read_cursor
    }

    /// Bytes held by both buffers
    pub fn memory_bytes(&self) -> usize {
        (self.fir_delay.frames() + self.out_delay.frames())
            * self.fir_delay.channels()
            * std::mem::size_of::<i32>()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coef::reference_int32::SRC_INT32_21_16_4319_5000;

    #[test]
    fn test_window_without_wrap() {
        let mut ring = FrameRing::new(5, 2).unwrap();
        for f in 0..5 {
            ring.frame_mut(f).copy_from_slice(&[f as i32, -(f as i32)]);
        }
        let w = ring.window(1, 3);
        assert_eq!(w.head, &[1, -1, 2, -2, 3, -3]);
        assert!(w.tail.is_empty());
        assert_eq!(w.frames(), 3);
    }

    #[test]
    fn test_window_split_keeps_frames_whole() {
        let mut ring = FrameRing::new(4, 3).unwrap();
        for f in 0..4 {
            ring.frame_mut(f).fill(f as i32 + 1);
        }
        let w = ring.window(3, 3);
        assert_eq!(w.head, &[4, 4, 4]);
        assert_eq!(w.tail, &[1, 1, 1, 2, 2, 2]);
        assert_eq!(w.head.len() % 3, 0);
        assert_eq!(w.tail.len() % 3, 0);
    }

    #[test]
    fn test_cursor_arithmetic() {
        let ring = FrameRing::new(7, 1).unwrap();
        assert_eq!(ring.forward(5, 3), 1);
        assert_eq!(ring.backward(1, 3), 5);
        assert_eq!(ring.backward(0, 14), 0);
        assert_eq!(ring.forward(6, 15), 0);
    }

    #[test]
    fn test_state_sizing_and_reset() {
        let stage = &SRC_INT32_21_16_4319_5000;
        let mut state = DelayLineState::new(stage, 2).unwrap();
        assert_eq!(state.fir_delay().frames(), 76 + 20 * 3 + 16);
        assert_eq!(state.out_delay().frames(), 1 + 20 * 4);
        assert_eq!(state.fir_write_cursor(), state.fir_delay().frames() - 1);

        state.fir_delay.frame_mut(3).fill(9);
        state.fir_write_cursor = 2;
        state.out_read_cursor = 4;
        state.reset();
        assert!(state.fir_delay().window(0, 10).head.iter().all(|&s| s == 0));
        assert_eq!(state.fir_write_cursor(), state.fir_delay().frames() - 1);
        assert_eq!(state.out_read_cursor(), 0);
        assert_eq!(state.memory_bytes(), (152 + 81) * 2 * 4);
    }
}
