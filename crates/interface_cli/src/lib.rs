//! Command-line interface layer
//!
//! Loads configuration, builds the template catalog (built-in or from a
//! catalog file) and renders proforma previews as JSON. The binary in
//! `src/bin/preview.rs` wires these together.
//!
//! # Example
//!
//! ```rust,ignore
//! use interface_cli::{catalog, preview, PreviewConfig};
//!
//! let config = PreviewConfig::from_env()?;
//! let expander = catalog::expander_for(&config)?;
//! let report = preview::build_report(&expander, &config)?;
//! ```

pub mod catalog;
pub mod config;
pub mod error;
pub mod preview;
pub mod telemetry;

pub use config::{LogFormat, PreviewConfig};
pub use error::CliError;
pub use preview::PreviewReport;
