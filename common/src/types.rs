//! Common Types for Sample-Rate Conversion
//!
//! Defines the PCM sample formats and channel limits shared by the stream
//! interfaces, the conversion engine and the host tools.

use std::fmt;
use std::str::FromStr;

use num_derive::{FromPrimitive, ToPrimitive};
use num_traits::FromPrimitive;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Maximum number of interleaved channels a stream may carry
pub const MAX_CHANNELS: usize = 8;

/// Error returned when a sample format name cannot be parsed
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Unknown sample format: {0} (expected s16, s24 or s32)")]
pub struct ParseFormatError(pub String);

/// Interleaved PCM sample formats
///
/// The discriminants are the frame format codes used by the stream
/// configuration messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, FromPrimitive, ToPrimitive, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SampleFormat {
    /// 16-bit signed, little endian, 2-byte container
    S16 = 0,
    /// 24-bit signed in the low bits of a 4-byte little endian container
    S24 = 1,
    /// 32-bit signed, little endian
    S32 = 2,
}

impl SampleFormat {
    /// Resolve a frame format code
    pub fn from_code(code: u32) -> Option<Self> {
        Self::from_u32(code)
    }

    /// Size of one sample container in bytes
    pub fn container_bytes(&self) -> usize {
        match self {
            SampleFormat::S16 => 2,
            SampleFormat::S24 | SampleFormat::S32 => 4,
        }
    }

    /// Number of significant bits in a container
    pub fn valid_bits(&self) -> u32 {
        match self {
            SampleFormat::S16 => 16,
            SampleFormat::S24 => 24,
            SampleFormat::S32 => 32,
        }
    }

    /// Largest representable sample value
    pub fn max_value(&self) -> i32 {
        match self {
            SampleFormat::S16 => i16::MAX as i32,
            SampleFormat::S24 => (1 << 23) - 1,
            SampleFormat::S32 => i32::MAX,
        }
    }

    /// Smallest representable sample value
    pub fn min_value(&self) -> i32 {
        match self {
            SampleFormat::S16 => i16::MIN as i32,
            SampleFormat::S24 => -(1 << 23),
            SampleFormat::S32 => i32::MIN,
        }
    }

    /// Decode one little endian container from the front of `bytes`
    ///
    /// S24 containers are returned as stored; the upper byte is not
    /// sign-extended.
    #[inline]
    pub fn decode(&self, bytes: &[u8]) -> i32 {
        match self {
            SampleFormat::S16 => i16::from_le_bytes([bytes[0], bytes[1]]) as i32,
            SampleFormat::S24 | SampleFormat::S32 => {
                i32::from_le_bytes([bytes[0], bytes[1], bytes[2], bytes[3]])
            }
        }
    }

    /// Encode one sample into the front of `bytes` as a little endian container
    #[inline]
    pub fn encode(&self, value: i32, bytes: &mut [u8]) {
        match self {
            SampleFormat::S16 => bytes[..2].copy_from_slice(&(value as i16).to_le_bytes()),
            SampleFormat::S24 | SampleFormat::S32 => bytes[..4].copy_from_slice(&value.to_le_bytes()),
        }
    }
}

impl fmt::Display for SampleFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            SampleFormat::S16 => "s16",
            SampleFormat::S24 => "s24",
            SampleFormat::S32 => "s32",
        };
        f.write_str(name)
    }
}

impl FromStr for SampleFormat {
    type Err = ParseFormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "s16" | "s16_le" => Ok(SampleFormat::S16),
            "s24" | "s24_4le" | "s24_le" => Ok(SampleFormat::S24),
            "s32" | "s32_le" => Ok(SampleFormat::S32),
            _ => Err(ParseFormatError(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_codes() {
        assert_eq!(SampleFormat::from_code(0), Some(SampleFormat::S16));
        assert_eq!(SampleFormat::from_code(1), Some(SampleFormat::S24));
        assert_eq!(SampleFormat::from_code(2), Some(SampleFormat::S32));
        assert_eq!(SampleFormat::from_code(3), None);
    }

    #[test]
    fn test_container_codec() {
        let mut buf = [0u8; 4];
        SampleFormat::S16.encode(-2, &mut buf);
        assert_eq!(&buf[..2], &[0xfe, 0xff]);
        assert_eq!(SampleFormat::S16.decode(&buf), -2);

        SampleFormat::S32.encode(0x1234_5678, &mut buf);
        assert_eq!(buf, [0x78, 0x56, 0x34, 0x12]);
        assert_eq!(SampleFormat::S32.decode(&buf), 0x1234_5678);
    }

    #[test]
    fn test_parse_format() {
        assert_eq!("S24".parse::<SampleFormat>(), Ok(SampleFormat::S24));
        assert_eq!("s16_le".parse::<SampleFormat>(), Ok(SampleFormat::S16));
        assert!("f32".parse::<SampleFormat>().is_err());
        assert_eq!(SampleFormat::S32.to_string(), "s32");
    }

    #[test]
    fn test_format_limits() {
        assert_eq!(SampleFormat::S24.max_value(), 8_388_607);
        assert_eq!(SampleFormat::S24.min_value(), -8_388_608);
        assert_eq!(SampleFormat::S16.container_bytes(), 2);
        assert_eq!(SampleFormat::S24.container_bytes(), 4);
    }
}
