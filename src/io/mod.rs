/// Command-line interface and batch processing
pub mod cli;
/// Generator constants and defaults
pub mod configuration;
/// Error types and result alias
pub mod error;
/// PNG and manifest export
pub mod image;
/// Batch progress display
pub mod progress;
