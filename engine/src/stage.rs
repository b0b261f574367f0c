//! Polyphase Stage Descriptors
//!
//! A stage is one rational-ratio FIR resampling step. Its coefficients are
//! stored subfilter after subfilter, each subfilter holding the taps of one
//! output phase in the order the stage executor walks its delay line.

use num_rational::Ratio;

use crate::SrcError;

/// Read-only coefficient slice of a stage
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Taps<'a> {
    /// Q1.31 coefficients, used as Q1.23 by the kernel
    Q31(&'a [i32]),
    /// Q1.15 coefficients
    Q15(&'a [i16]),
}

impl<'a> Taps<'a> {
    /// Number of taps
    pub fn len(&self) -> usize {
        match self {
            Taps::Q31(c) => c.len(),
            Taps::Q15(c) => c.len(),
        }
    }

    /// True when there are no taps
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Fractional bits of the product coefficient used by the kernel
    pub fn base_shift(&self) -> i32 {
        match self {
            Taps::Q31(_) => 23,
            Taps::Q15(_) => 15,
        }
    }

    /// Taps `start..start + len`
    pub fn slice(&self, start: usize, len: usize) -> Taps<'a> {
        match *self {
            Taps::Q31(c) => Taps::Q31(&c[start..start + len]),
            Taps::Q15(c) => Taps::Q15(&c[start..start + len]),
        }
    }

    /// Split into `..mid` and `mid..`
    pub fn split_at(&self, mid: usize) -> (Taps<'a>, Taps<'a>) {
        match *self {
            Taps::Q31(c) => {
                let (a, b) = c.split_at(mid);
                (Taps::Q31(a), Taps::Q31(b))
            }
            Taps::Q15(c) => {
                let (a, b) = c.split_at(mid);
                (Taps::Q15(a), Taps::Q15(b))
            }
        }
    }

    /// Tap `i` as the multiplier the kernel applies
    #[inline]
    pub fn scaled(&self, i: usize) -> i64 {
        match self {
            Taps::Q31(c) => (c[i] >> 8) as i64,
            Taps::Q15(c) => c[i] as i64,
        }
    }
}

/// Description of one polyphase FIR stage
#[derive(Debug, Clone, Copy)]
pub struct StageDescriptor {
    /// Table name, `<width>_<L>_<M>_<passband>_<stopband>`
    pub name: &'static str,
    /// Delay-line step between consecutive subfilters ("idm")
    pub input_stride: usize,
    /// Output reorder step between consecutive subfilters ("odm")
    pub output_stride: usize,
    /// Number of subfilters (output phases)
    pub subfilter_count: usize,
    /// Taps per subfilter
    pub subfilter_length: usize,
    /// Frames consumed per repetition
    pub block_in: usize,
    /// Frames produced per repetition
    pub block_out: usize,
    /// Halfband design flag
    pub is_halfband: bool,
    /// Renormalisation applied on top of the coefficient base shift
    pub output_shift: i32,
    /// Subfilter-major coefficients
    pub coefficients: Taps<'static>,
}

impl StageDescriptor {
    /// Total number of taps
    pub fn filter_length(&self) -> usize {
        self.subfilter_count * self.subfilter_length
    }

    /// A stage that moves frames through unchanged
    pub fn is_passthrough(&self) -> bool {
        self.block_in == 0 || self.filter_length() == 0
    }

    /// Single-tap unity stage
    pub fn is_identity(&self) -> bool {
        self.filter_length() == 1 && self.block_in == 1 && self.block_out == 1
    }

    /// Output rate over input rate
    pub fn ratio(&self) -> Ratio<u64> {
        if self.is_passthrough() {
            Ratio::from_integer(1)
        } else {
            Ratio::new(self.block_out as u64, self.block_in as u64)
        }
    }

    /// FIR history length in frames
    pub fn fir_delay_length(&self) -> usize {
        if self.is_passthrough() {
            return 0;
        }
        self.subfilter_length + (self.subfilter_count - 1) * self.input_stride + self.block_in
    }

    /// Output reorder buffer length in frames
    pub fn out_delay_length(&self) -> usize {
        if self.is_passthrough() {
            return 0;
        }
        1 + (self.subfilter_count - 1) * self.output_stride
    }

    /// Total right shift applied to the accumulator
    pub fn total_shift(&self) -> i32 {
        self.coefficients.base_shift() + self.output_shift
    }

    /// Coefficients of subfilter `index`
    pub fn subfilter(&self, index: usize) -> Taps<'static> {
        self.coefficients
            .slice(index * self.subfilter_length, self.subfilter_length)
    }

    /// Check the structural invariants the executor relies on
    pub fn validate(&self) -> Result<(), SrcError> {
        let fail = |reason: String| SrcError::InvalidStage { stage: self.name, reason };

        if self.is_passthrough() {
            return Ok(());
        }
        if self.subfilter_count == 0 || self.subfilter_length == 0 {
            return Err(fail("empty subfilter geometry".to_string()));
        }
        if self.coefficients.len() != self.filter_length() {
            return Err(fail(format!(
                "{} coefficients for {} x {} taps",
                self.coefficients.len(),
                self.subfilter_count,
                self.subfilter_length
            )));
        }
        if self.block_out != self.subfilter_count {
            return Err(fail(format!(
                "block_out {} differs from subfilter count {}",
                self.block_out, self.subfilter_count
            )));
        }
        if !self.is_identity() && self.subfilter_length % 4 != 0 {
            return Err(fail(format!(
                "subfilter length {} is not a multiple of 4",
                self.subfilter_length
            )));
        }
        let shift = self.total_shift();
        if !(1..=62).contains(&shift) {
            return Err(fail(format!("accumulator shift {} out of range", shift)));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    static TAPS: [i32; 8] = [1, 2, 3, 4, 5, 6, 7, 8];

    fn stage(subfilter_length: usize) -> StageDescriptor {
        StageDescriptor {
            name: "test_2_3",
            input_stride: 1,
            output_stride: 1,
            subfilter_count: 2,
            subfilter_length,
            block_in: 3,
            block_out: 2,
            is_halfband: false,
            output_shift: 0,
            coefficients: Taps::Q31(&TAPS),
        }
    }

    #[test]
    fn test_stage_geometry() {
        let s = stage(4);
        assert_eq!(s.filter_length(), 8);
        assert_eq!(s.fir_delay_length(), 4 + 1 + 3);
        assert_eq!(s.out_delay_length(), 2);
        assert_eq!(s.ratio(), Ratio::new(2, 3));
        assert_eq!(s.subfilter(1), Taps::Q31(&TAPS[4..]));
        assert_eq!(s.total_shift(), 23);
        assert!(s.validate().is_ok());
    }

    #[test]
    fn test_stage_validation() {
        let mut s = stage(4);
        s.block_out = 3;
        assert!(matches!(s.validate(), Err(SrcError::InvalidStage { .. })));

        // Subfilters must be padded to a multiple of four taps
        let mut s = stage(4);
        s.subfilter_count = 4;
        s.block_out = 4;
        s.subfilter_length = 2;
        assert!(s.validate().is_err());

        let mut s = stage(4);
        s.output_shift = -23;
        assert!(s.validate().is_err());
    }

    #[test]
    fn test_passthrough_stage() {
        let s = StageDescriptor {
            name: "passthrough",
            input_stride: 0,
            output_stride: 0,
            subfilter_count: 0,
            subfilter_length: 0,
            block_in: 0,
            block_out: 0,
            is_halfband: false,
            output_shift: 0,
            coefficients: Taps::Q31(&[]),
        };
        assert!(s.is_passthrough());
        assert_eq!(s.ratio(), Ratio::from_integer(1));
        assert_eq!(s.fir_delay_length(), 0);
        assert!(s.validate().is_ok());
    }

    #[test]
    fn test_taps_scaling() {
        let q31 = Taps::Q31(&[-256, 0x7fff_ffff]);
        assert_eq!(q31.scaled(0), -1);
        assert_eq!(q31.scaled(1), 0x7f_ffff);
        let q15 = Taps::Q15(&[-3, 5]);
        assert_eq!(q15.scaled(0), -3);
        assert_eq!(q15.base_shift(), 15);
        let (a, b) = q15.split_at(1);
        assert_eq!((a.len(), b.len()), (1, 1));
    }
}
