//! TOML Job File Structures
//!
//! A job file holds the engine settings shared by every job, the log level
//! and one `[[jobs]]` table per file to convert.

use std::path::{Path, PathBuf};

use anyhow::Context;
use common::{SampleFormat, MAX_CHANNELS};
use engine::SrcConfig;
use serde::{Deserialize, Serialize};

/// Top-level job file
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct ConverterConfig {
    /// Engine configuration shared by all jobs
    #[serde(default)]
    pub engine: SrcConfig,
    /// Logging configuration
    #[serde(default)]
    pub log: LogConfig,
    /// Files to convert
    #[serde(default)]
    pub jobs: Vec<JobConfig>,
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LogConfig {
    /// Log level filter used when `RUST_LOG` is unset
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self { level: default_log_level() }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

/// What to do when the engine has no conversion for a rate pair
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FallbackPolicy {
    /// Fail the job
    #[default]
    Fail,
    /// Copy the audio unmodified
    Passthrough,
}

/// One raw PCM file conversion
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct JobConfig {
    /// Raw interleaved little endian input
    pub input: PathBuf,
    /// Converted output
    pub output: PathBuf,
    /// Input sample rate in Hz
    pub source_rate: u32,
    /// Output sample rate in Hz
    pub sink_rate: u32,
    /// Interleaved channels
    #[serde(default = "default_channels")]
    pub channels: usize,
    /// Container format of input and output
    #[serde(default = "default_format")]
    pub format: SampleFormat,
    /// Output frames per scheduling period, 1 ms when unset
    #[serde(default)]
    pub period_frames: Option<usize>,
    /// Behaviour for unsupported rate pairs
    #[serde(default)]
    pub fallback: FallbackPolicy,
}

fn default_channels() -> usize {
    2
}

fn default_format() -> SampleFormat {
    SampleFormat::S16
}

impl JobConfig {
    /// Short label for log lines
    pub fn label(&self) -> String {
        self.input
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| self.input.display().to_string())
    }
}

impl ConverterConfig {
    /// Load configuration from a TOML file
    pub fn from_toml_file(path: &Path) -> anyhow::Result<Self> {
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("reading {}", path.display()))?;
        Self::from_toml_str(&contents).with_context(|| format!("parsing {}", path.display()))
    }

    /// Parse configuration from TOML text
    pub fn from_toml_str(contents: &str) -> anyhow::Result<Self> {
        let config: ConverterConfig = toml::from_str(contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Check job parameters that the engine would only reject at run time
    pub fn validate(&self) -> anyhow::Result<()> {
        self.engine.validate()?;
        for job in &self.jobs {
            if job.channels == 0 || job.channels > MAX_CHANNELS {
                return Err(anyhow::anyhow!(
                    "Job {}: channel count {} outside 1..={}",
                    job.label(),
                    job.channels,
                    MAX_CHANNELS
                ));
            }
            if job.period_frames == Some(0) {
                return Err(anyhow::anyhow!("Job {}: zero period", job.label()));
            }
            if job.input == job.output {
                return Err(anyhow::anyhow!("Job {}: output overwrites input", job.label()));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use engine::{CoefficientSet, KernelPreference};

    const SAMPLE: &str = r#"
[engine]
coefficient_set = "tiny"
kernel = "scalar"

[log]
level = "debug"

[[jobs]]
input = "voice.raw"
output = "voice_48k.raw"
source_rate = 16000
sink_rate = 48000
channels = 1

[[jobs]]
input = "music.raw"
output = "music_44k.raw"
source_rate = 48000
sink_rate = 44100
format = "s24"
period_frames = 441
fallback = "passthrough"
"#;

    #[test]
    fn test_parse_job_file() {
        let config = ConverterConfig::from_toml_str(SAMPLE).unwrap();
        assert_eq!(config.engine.coefficient_set, CoefficientSet::Tiny);
        assert_eq!(config.engine.kernel, KernelPreference::Scalar);
        assert_eq!(config.engine.max_channels, MAX_CHANNELS);
        assert_eq!(config.log.level, "debug");
        assert_eq!(config.jobs.len(), 2);

        let voice = &config.jobs[0];
        assert_eq!(voice.channels, 1);
        assert_eq!(voice.format, SampleFormat::S16);
        assert_eq!(voice.period_frames, None);
        assert_eq!(voice.fallback, FallbackPolicy::Fail);
        assert_eq!(voice.label(), "voice.raw");

        let music = &config.jobs[1];
        assert_eq!(music.channels, 2);
        assert_eq!(music.format, SampleFormat::S24);
        assert_eq!(music.period_frames, Some(441));
        assert_eq!(music.fallback, FallbackPolicy::Passthrough);
    }

    #[test]
    fn test_empty_file_uses_defaults() {
        let config = ConverterConfig::from_toml_str("").unwrap();
        assert_eq!(config.engine, SrcConfig::default());
        assert_eq!(config.log.level, "info");
        assert!(config.jobs.is_empty());
    }

    #[test]
    fn test_rejects_bad_jobs() {
        let base = r#"
[[jobs]]
input = "a.raw"
output = "b.raw"
source_rate = 8000
sink_rate = 16000
"#;
        assert!(ConverterConfig::from_toml_str(&format!("{}channels = 9\n", base)).is_err());
        assert!(ConverterConfig::from_toml_str(&format!("{}period_frames = 0\n", base)).is_err());
        assert!(ConverterConfig::from_toml_str(&base.replace("b.raw", "a.raw")).is_err());
        assert!(ConverterConfig::from_toml_str("[engine]\nmax_channels = 0\n").is_err());
    }
}
