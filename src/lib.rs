//! Contact table cleaner.
//!
//! Reads headerless contact rows, splits names, validates emails and
//! phones, and decomposes mailing addresses into street, unit, city,
//! state and zip code.

pub mod app;
pub mod config;
pub mod constants;
pub mod error;
pub mod infra;
pub mod logging;
pub mod observability;
pub mod pipeline;
pub mod types;

pub use error::{CleanerError, Result, TokenizerError};
pub use pipeline::{PipelineSummary, RecordPipeline};
pub use types::{EnrichedRecord, Record};
