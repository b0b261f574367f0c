//! Polyphase Sample-Rate Conversion Engine
//! 
//! This crate implements a fixed-point, two-stage polyphase resampler:
//! coefficient tables, per-stage delay lines, interchangeable FIR kernels,
//! the stage executor and the conversion plan that ties them to PCM streams.

pub mod coef;
pub mod config;
pub mod delay_line;
pub mod executor;
pub mod format;
pub mod kernel;
pub mod plan;
pub mod stage;

pub use coef::{CoefficientSet, StagePair};
pub use config::SrcConfig;
pub use kernel::{CpuFeatures, FirKernel, KernelBackend, KernelPreference};
pub use plan::{ConversionMode, ConversionPlan, Converted, StageInfo, StreamParams};
pub use stage::{StageDescriptor, Taps};

use thiserror::Error;

/// Sample-rate conversion errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SrcError {
    #[error("Rate conversion {input} Hz -> {output} Hz not supported")]
    RateUnsupported { input: u32, output: u32 },

    #[error("Unsupported frame format code: {0}")]
    UnsupportedFormat(u32),

    #[error("Channel count {channels} exceeds maximum {max}")]
    ChannelCountExceeded { channels: usize, max: usize },

    #[error("Out of memory allocating {bytes} bytes")]
    OutOfMemory { bytes: usize },

    #[error("Invalid parameters: {0}")]
    InvalidParameters(String),

    #[error("Invalid stage {stage}: {reason}")]
    InvalidStage { stage: &'static str, reason: String },

    #[error("Kernel backend unavailable: {0}")]
    KernelUnavailable(String),

    #[error("Stream mismatch: {0}")]
    StreamMismatch(String),
}
