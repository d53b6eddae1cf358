// Contact pipeline: per-field normalizers and the row orchestrator

pub mod processing;
pub mod record_pipeline;
pub mod summary;

pub use record_pipeline::RecordPipeline;
pub use summary::PipelineSummary;
