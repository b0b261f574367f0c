//! Coefficient Table Registry
//!
//! Compiled-in conversion matrices mapping an (input rate, output rate) pair
//! to two cascaded polyphase stages. Either stage may be the identity stage;
//! a missing entry means the rate pair is not supported by the set.

pub mod designed_int16;
pub mod designed_int32;
pub mod reference_int32;
pub mod std_int32;
pub mod tiny_int16;

use std::fmt;
use std::str::FromStr;

use num_rational::Ratio;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::stage::{StageDescriptor, Taps};
use crate::SrcError;

/// Unity stage for Q1.31 coefficient sets: a single 0.5 tap with one bit of
/// extra gain.
pub static IDENTITY_Q31: StageDescriptor = StageDescriptor {
    name: "int32_1_1_0_0",
    input_stride: 0,
    output_stride: 0,
    subfilter_count: 1,
    subfilter_length: 1,
    block_in: 1,
    block_out: 1,
    is_halfband: false,
    output_shift: -1,
    coefficients: Taps::Q31(&[1 << 30]),
};

/// Unity stage for Q1.15 coefficient sets
pub static IDENTITY_Q15: StageDescriptor = StageDescriptor {
    name: "int16_1_1_0_0",
    input_stride: 0,
    output_stride: 0,
    subfilter_count: 1,
    subfilter_length: 1,
    block_in: 1,
    block_out: 1,
    is_halfband: false,
    output_shift: -1,
    coefficients: Taps::Q15(&[1 << 14]),
};

/// The two cascaded stages realising one rate pair
#[derive(Debug, Clone, Copy)]
pub struct StagePair {
    /// Stage fed by the source stream
    pub first: &'static StageDescriptor,
    /// Stage feeding the sink stream
    pub second: &'static StageDescriptor,
}

impl StagePair {
    /// Overall output/input rate ratio
    pub fn ratio(&self) -> Ratio<u64> {
        self.first.ratio() * self.second.ratio()
    }
}

const fn pair(first: &'static StageDescriptor, second: &'static StageDescriptor) -> Option<StagePair> {
    Some(StagePair { first, second })
}

/// One conversion matrix
#[derive(Debug)]
pub struct RateTable {
    /// Set name
    pub name: &'static str,
    /// Column rates
    pub input_rates: &'static [u32],
    /// Row rates
    pub output_rates: &'static [u32],
    /// Column of an input rate
    pub input_index: fn(u32) -> Option<usize>,
    /// Row of an output rate
    pub output_index: fn(u32) -> Option<usize>,
    /// `stages[output_index][input_index]`
    pub stages: &'static [&'static [Option<StagePair>]],
}

impl RateTable {
    /// Resolve a rate pair
    pub fn lookup(&self, input: u32, output: u32) -> Result<StagePair, SrcError> {
        let unsupported = SrcError::RateUnsupported { input, output };
        let (Some(col), Some(row)) = ((self.input_index)(input), (self.output_index)(output)) else {
            return Err(unsupported);
        };
        let entry = self.stages[row][col].ok_or(unsupported)?;
        debug!(
            "{} set: {} Hz -> {} Hz via {} + {}",
            self.name, input, output, entry.first.name, entry.second.name
        );
        Ok(entry)
    }

    /// Every supported `(input, output, stages)` entry
    pub fn entries(&self) -> impl Iterator<Item = (u32, u32, StagePair)> + '_ {
        self.output_rates.iter().enumerate().flat_map(move |(row, &output)| {
            self.input_rates.iter().enumerate().filter_map(move |(col, &input)| {
                self.stages[row][col].map(|p| (input, output, p))
            })
        })
    }
}

/// Selectable coefficient table sets
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CoefficientSet {
    /// Q1.31 coefficients, 8 kHz to 192 kHz including 11.025 kHz multiples
    #[default]
    Std,
    /// Q1.15 coefficients, 8 kHz multiples only
    Tiny,
}

impl CoefficientSet {
    /// Conversion matrix of the set
    pub fn table(&self) -> &'static RateTable {
        match self {
            CoefficientSet::Std => &std_int32::STD_INT32,
            CoefficientSet::Tiny => &tiny_int16::TINY_INT16,
        }
    }

    /// Identity stage matching the coefficient width of the set
    pub fn identity(&self) -> &'static StageDescriptor {
        match self {
            CoefficientSet::Std => &IDENTITY_Q31,
            CoefficientSet::Tiny => &IDENTITY_Q15,
        }
    }

    /// Resolve a rate pair in this set
    pub fn lookup(&self, input: u32, output: u32) -> Result<StagePair, SrcError> {
        self.table().lookup(input, output)
    }
}

impl fmt::Display for CoefficientSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.table().name)
    }
}

impl FromStr for CoefficientSet {
    type Err = SrcError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "std" => Ok(CoefficientSet::Std),
            "tiny" => Ok(CoefficientSet::Tiny),
            _ => Err(SrcError::InvalidParameters(format!("unknown coefficient set: {}", s))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SETS: [CoefficientSet; 2] = [CoefficientSet::Std, CoefficientSet::Tiny];

    #[test]
    fn test_ratio_correctness() {
        for set in SETS {
            for (input, output, stages) in set.table().entries() {
                assert_eq!(
                    stages.ratio(),
                    Ratio::new(output as u64, input as u64),
                    "{} set {} -> {}",
                    set,
                    input,
                    output
                );
            }
        }
    }

    #[test]
    fn test_table_shape() {
        for set in SETS {
            let table = set.table();
            assert_eq!(table.stages.len(), table.output_rates.len());
            for row in table.stages {
                assert_eq!(row.len(), table.input_rates.len());
            }
        }
    }

    #[test]
    fn test_every_stage_is_valid() {
        for set in SETS {
            for (_, _, stages) in set.table().entries() {
                stages.first.validate().unwrap();
                stages.second.validate().unwrap();
            }
        }
    }

    #[test]
    fn test_coefficient_width_matches_set() {
        for (_, _, stages) in CoefficientSet::Std.table().entries() {
            assert!(matches!(stages.first.coefficients, Taps::Q31(_)));
            assert!(matches!(stages.second.coefficients, Taps::Q31(_)));
        }
        for (_, _, stages) in CoefficientSet::Tiny.table().entries() {
            assert!(matches!(stages.first.coefficients, Taps::Q15(_)));
            assert!(matches!(stages.second.coefficients, Taps::Q15(_)));
        }
    }

    #[test]
    fn test_rate_index_matches_rate_lists() {
        for set in SETS {
            let table = set.table();
            for (col, &rate) in table.input_rates.iter().enumerate() {
                assert_eq!((table.input_index)(rate), Some(col), "{} input {}", set, rate);
            }
            for (row, &rate) in table.output_rates.iter().enumerate() {
                assert_eq!((table.output_index)(rate), Some(row), "{} output {}", set, rate);
            }
            assert_eq!((table.input_index)(0), None);
            assert_eq!((table.output_index)(12345), None);
        }
    }

    #[test]
    fn test_equal_rates_use_identity() {
        for set in SETS {
            for (input, output, stages) in set.table().entries() {
                if input == output {
                    assert!(stages.first.is_identity());
                    assert!(stages.second.is_identity());
                }
            }
        }
    }

    #[test]
    fn test_unsupported_pairs() {
        assert_eq!(
            CoefficientSet::Tiny.lookup(24000, 32000).unwrap_err(),
            SrcError::RateUnsupported { input: 24000, output: 32000 }
        );
        assert!(CoefficientSet::Tiny.lookup(44100, 48000).is_err());
        assert!(CoefficientSet::Tiny.lookup(48000, 96000).is_err());
        assert!(CoefficientSet::Std.lookup(18900, 8000).is_err());
        assert!(CoefficientSet::Std.lookup(37800, 176400).is_err());
        assert!(CoefficientSet::Std.lookup(11025, 192000).is_err());
        // 11025 Hz is an input-only rate
        assert!(CoefficientSet::Std.lookup(48000, 11025).is_err());
    }

    #[test]
    fn test_known_pair_selection() {
        let stages = CoefficientSet::Std.lookup(44100, 48000).unwrap();
        assert_eq!(stages.first.name, "int32_8_7_4535_5000");
        assert_eq!(stages.second.name, "int32_20_21_4167_5000");

        let stages = CoefficientSet::Std.lookup(48000, 44100).unwrap();
        assert_eq!(stages.ratio(), Ratio::new(147, 160));
    }

    #[test]
    fn test_high_rate_pairs() {
        let table = CoefficientSet::Std.table();
        assert_eq!(table.input_rates.len(), 16);
        assert_eq!(table.output_rates.len(), 10);
        assert_eq!(table.entries().count(), 16 * 10 - 14);

        let stages = CoefficientSet::Std.lookup(96000, 48000).unwrap();
        assert_eq!(stages.first.name, "int32_1_2_4535_5000");
        assert!(stages.second.is_identity());

        let stages = CoefficientSet::Std.lookup(88200, 44100).unwrap();
        assert_eq!(stages.ratio(), Ratio::new(1, 2));

        let stages = CoefficientSet::Std.lookup(8000, 176400).unwrap();
        assert_eq!(stages.first.name, "int32_21_5_4535_5000");
        assert_eq!(stages.second.name, "int32_21_4_1080_5000");
        assert_eq!(stages.ratio(), Ratio::new(441, 20));

        let stages = CoefficientSet::Std.lookup(192000, 44100).unwrap();
        assert_eq!(stages.first.name, "int32_21_80_3968_5000");
        assert_eq!(stages.ratio(), Ratio::new(147, 640));
    }

    #[test]
    fn test_parse_set_name() {
        assert_eq!("std".parse::<CoefficientSet>(), Ok(CoefficientSet::Std));
        assert_eq!("TINY".parse::<CoefficientSet>(), Ok(CoefficientSet::Tiny));
        assert!("full".parse::<CoefficientSet>().is_err());
        assert_eq!(CoefficientSet::Tiny.to_string().parse::<CoefficientSet>(), Ok(CoefficientSet::Tiny));
    }

    #[test]
    fn test_identity_unity_gain() {
        // 0.5 tap with one extra bit of gain
        for identity in [&IDENTITY_Q31, &IDENTITY_Q15] {
            let tap = identity.coefficients.scaled(0);
            assert_eq!(tap, 1i64 << (identity.total_shift()));
        }
    }
}
