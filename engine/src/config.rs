//! Engine Configuration
//!
//! Build-independent selection of the coefficient set and kernel backend,
//! resolved once when a conversion plan is created.

use common::MAX_CHANNELS;
use serde::{Deserialize, Serialize};

use crate::coef::CoefficientSet;
use crate::kernel::KernelPreference;
use crate::SrcError;

/// Sample-rate converter configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SrcConfig {
    /// Coefficient tables to resolve rate pairs from
    #[serde(default)]
    pub coefficient_set: CoefficientSet,
    /// FIR kernel backend
    #[serde(default)]
    pub kernel: KernelPreference,
    /// Largest channel count a plan accepts
    #[serde(default = "default_max_channels")]
    pub max_channels: usize,
}

fn default_max_channels() -> usize {
    MAX_CHANNELS
}

impl Default for SrcConfig {
    fn default() -> Self {
        Self {
            coefficient_set: CoefficientSet::default(),
            kernel: KernelPreference::default(),
            max_channels: default_max_channels(),
        }
    }
}

impl SrcConfig {
    /// Check the configuration against compiled-in limits
    pub fn validate(&self) -> Result<(), SrcError> {
        if self.max_channels == 0 || self.max_channels > MAX_CHANNELS {
            return Err(SrcError::InvalidParameters(format!(
                "max_channels {} outside 1..={}",
                self.max_channels, MAX_CHANNELS
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = SrcConfig::default();
        assert_eq!(config.coefficient_set, CoefficientSet::Std);
        assert_eq!(config.kernel, KernelPreference::Auto);
        assert_eq!(config.max_channels, 8);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_deserialize_partial() {
        let config: SrcConfig =
            serde_json::from_str(r#"{ "coefficient_set": "tiny", "kernel": "scalar" }"#).unwrap();
        assert_eq!(config.coefficient_set, CoefficientSet::Tiny);
        assert_eq!(config.kernel, KernelPreference::Scalar);
        assert_eq!(config.max_channels, MAX_CHANNELS);
    }

    #[test]
    fn test_validate_channel_limit() {
        let config = SrcConfig { max_channels: 9, ..SrcConfig::default() };
        assert!(matches!(config.validate(), Err(SrcError::InvalidParameters(_))));
    }

    #[test]
    fn test_unknown_kernel_rejected() {
        assert!(serde_json::from_str::<SrcConfig>(r#"{ "kernel": "sse9" }"#).is_err());
    }
}
