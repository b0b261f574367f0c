//! Common Utilities and Types Library
//! 
//! This crate provides shared sample formats and fixed-point helpers used
//! across the sample-rate conversion workspace.

pub mod types;
pub mod utils;

// Re-export commonly used items
pub use types::*;
pub use utils::*;
