use chrono::Utc;
use tracing::info;

use crate::app::output_filter::OutputFilter;
use crate::app::ports::{RecordSink, RecordSource};
use crate::error::Result;
use crate::observability::metrics;
use crate::pipeline::{PipelineSummary, RecordPipeline};

/// Use case for one cleaning run: read every row, enrich, filter, write.
pub struct CleanContactsUseCase {
    source: Box<dyn RecordSource>,
    pipeline: RecordPipeline,
    filter: OutputFilter,
    sink: Box<dyn RecordSink>,
}

impl CleanContactsUseCase {
    pub fn new(
        source: Box<dyn RecordSource>,
        pipeline: RecordPipeline,
        filter: OutputFilter,
        sink: Box<dyn RecordSink>,
    ) -> Self {
        Self {
            source,
            pipeline,
            filter,
            sink,
        }
    }

    pub fn run(&self) -> Result<PipelineSummary> {
        let started_at = Utc::now();

        info!("Reading contacts from {}", self.source.describe());
        let rows = self.source.read_records()?;
        metrics::io::rows_read(rows.len());

        let enriched = self.pipeline.process(&rows);
        let summary = PipelineSummary::from_records(&enriched, started_at);

        let selected = self.filter.apply(enriched);
        info!(
            kept = selected.len(),
            dropped = summary.total_rows - selected.len(),
            "Applied output filter"
        );

        let written = self.sink.write_records(&selected)?;
        metrics::io::rows_written(written);
        info!("Wrote {} rows to {}", written, self.sink.describe());

        Ok(summary.with_rows_written(written))
    }
}
