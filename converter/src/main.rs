//! Polyphase Sample-Rate Converter
//!
//! Host tool converting raw interleaved PCM files through the fixed-point
//! conversion engine. Jobs come from a TOML job file, the command line, or
//! both, and run concurrently on blocking worker threads.

mod config;
mod job;

use std::path::PathBuf;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use anyhow::Result;
use clap::Parser;
use common::SampleFormat;
use engine::{CoefficientSet, KernelPreference};
use tracing::{error, info, warn};
use tracing_subscriber::{fmt, EnvFilter};

use crate::config::{ConverterConfig, FallbackPolicy, JobConfig};
use crate::job::JobReport;

/// Polyphase sample-rate converter for raw PCM files
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to a TOML job file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(short, long)]
    log_level: Option<String>,

    /// Raw interleaved input file
    #[arg(short, long, requires_all = ["output", "from", "to"])]
    input: Option<PathBuf>,

    /// Output file
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Input sample rate in Hz
    #[arg(long)]
    from: Option<u32>,

    /// Output sample rate in Hz
    #[arg(long)]
    to: Option<u32>,

    /// Number of interleaved channels
    #[arg(long, default_value = "2")]
    channels: usize,

    /// Sample container format (s16, s24, s32)
    #[arg(long, default_value = "s16")]
    format: SampleFormat,

    /// Output frames per scheduling period
    #[arg(long)]
    period: Option<usize>,

    /// FIR kernel backend (auto, scalar, unrolled, avx2, neon)
    #[arg(long)]
    kernel: Option<KernelPreference>,

    /// Coefficient set (std, tiny)
    #[arg(long)]
    coefficients: Option<CoefficientSet>,

    /// Copy audio unmodified when the rate pair is unsupported
    #[arg(long)]
    passthrough_fallback: bool,

    /// Write a JSON summary of all jobs to this file
    #[arg(long)]
    report: Option<PathBuf>,
}

impl Args {
    /// Job described by the command line flags, if any
    fn job(&self) -> Option<JobConfig> {
        Some(JobConfig {
            input: self.input.clone()?,
            output: self.output.clone()?,
            source_rate: self.from?,
            sink_rate: self.to?,
            channels: self.channels,
            format: self.format,
            period_frames: self.period,
            fallback: if self.passthrough_fallback {
                FallbackPolicy::Passthrough
            } else {
                FallbackPolicy::Fail
            },
        })
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    let mut config = match &args.config {
        Some(path) => ConverterConfig::from_toml_file(path)?,
        None => ConverterConfig::default(),
    };
    if let Some(kernel) = args.kernel {
        config.engine.kernel = kernel;
    }
    if let Some(set) = args.coefficients {
        config.engine.coefficient_set = set;
    }
    if let Some(job) = args.job() {
        config.jobs.push(job);
    }
    config.validate()?;

    // Initialize logging
    let log_level = args.log_level.clone().unwrap_or_else(|| config.log.level.clone());
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&log_level));

    fmt()
        .with_env_filter(env_filter)
        .with_target(true)
        .with_thread_ids(true)
        .with_line_number(true)
        .init();

    info!("Starting polyphase sample-rate converter");
    if let Some(path) = &args.config {
        info!("Configuration file: {}", path.display());
    }
    info!("Engine configuration:");
    info!("  Coefficient set: {}", config.engine.coefficient_set);
    info!("  Kernel: {:?}", config.engine.kernel);
    info!("  Max channels: {}", config.engine.max_channels);

    if config.jobs.is_empty() {
        return Err(anyhow::anyhow!("No jobs: pass --input/--output/--from/--to or a job file"));
    }

    let cancel = Arc::new(AtomicBool::new(false));
    let engine = config.engine;
    let handles: Vec<_> = config
        .jobs
        .into_iter()
        .map(|entry| {
            let cancel = cancel.clone();
            tokio::task::spawn_blocking(move || job::run_job(&entry, &engine, &cancel))
        })
        .collect();
    info!("Running {} jobs", handles.len());

    let all_jobs = async move {
        let mut results = Vec::with_capacity(handles.len());
        for handle in handles {
            results.push(handle.await?);
        }
        Ok::<_, anyhow::Error>(results)
    };
    tokio::pin!(all_jobs);

    // Wait for completion or shutdown signal
    let results = tokio::select! {
        results = &mut all_jobs => results?,
        _ = tokio::signal::ctrl_c() => {
            warn!("Received shutdown signal, stopping jobs");
            cancel.store(true, Ordering::Relaxed);
            all_jobs.await?
        }
    };

    let mut reports: Vec<JobReport> = Vec::new();
    let mut failures = 0;
    for result in results {
        match result {
            Ok(report) => {
                info!(
                    "{} -> {}: {:?} via [{}], {} frames in, {} frames out{}",
                    report.input,
                    report.output,
                    report.mode,
                    report.stages.iter().map(|s| s.name).collect::<Vec<_>>().join(", "),
                    report.frames_in,
                    report.frames_out,
                    if report.cancelled { " (cancelled)" } else { "" }
                );
                reports.push(report);
            }
            Err(e) => {
                error!("Job failed: {:#}", e);
                failures += 1;
            }
        }
    }

    if let Some(path) = &args.report {
        std::fs::write(path, serde_json::to_string_pretty(&reports)?)?;
        info!("Report written to {}", path.display());
    }

    if failures > 0 {
        return Err(anyhow::anyhow!("{} of {} jobs failed", failures, failures + reports.len()));
    }
    info!("All jobs complete");
    Ok(())
}
