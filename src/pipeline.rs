// src/pipeline.rs
//! Pipeline capability traits: compose a report, deliver it, publish its location.
//!
//! Each trait describes a single capability, enabling testing each stage in isolation.

use crate::api::NotionRepository;
use crate::config::PipelineConfig;
use crate::error::AppError;
use crate::formatting::{AssembledReport, ReportAssembler};
use crate::output::{self, file_url, report_path, DeliveryTarget, OutputPlan, OutputReport};
use crate::types::PageId;
use std::path::Path;
use std::sync::Arc;
use url::Url;

/// Builds the report text for a project page.
#[async_trait::async_trait]
pub trait ReportComposer {
    async fn compose(&self, page_id: &PageId) -> Result<AssembledReport, AppError>;
}

/// Hands a finished report to its destination.
pub trait ReportDelivery {
    fn deliver(&self, report: &AssembledReport) -> Result<OutputReport, AppError>;
}

/// Records where a report was saved on the page it describes.
#[async_trait::async_trait]
pub trait LocationPublisher {
    async fn publish(&self, page_id: &PageId, location: &Url) -> Result<(), AppError>;
}

#[async_trait::async_trait]
impl ReportComposer for ReportAssembler {
    async fn compose(&self, page_id: &PageId) -> Result<AssembledReport, AppError> {
        self.assemble(page_id).await
    }
}

/// What one pipeline run produced.
#[derive(Debug, Clone)]
pub struct PipelineOutcome {
    pub title: String,
    pub notes_count: usize,
    pub tasks_count: usize,
    /// `file://` location of the saved report; `None` in pipe mode.
    pub location: Option<Url>,
    /// Whether the location was written back into the page.
    pub published: bool,
}

/// Plans delivery of `report`: a file under `output_dir`, or stdout when piping.
pub fn plan_delivery(report: &AssembledReport, output_dir: &Path, pipe: bool) -> OutputPlan {
    let target = if pipe {
        DeliveryTarget::PrintToStdout {
            content: report.text.clone(),
        }
    } else {
        DeliveryTarget::WriteFile {
            path: report_path(
                output_dir,
                &report.page_id,
                &report.title,
                &report.generated_at,
            ),
            content: report.text.clone(),
        }
    };

    OutputPlan::new().with_operation(target)
}

/// Orchestrates composition, delivery, and publication of one project report.
pub struct ProjectReportPipeline<'a> {
    config: &'a PipelineConfig,
    repository: Arc<dyn NotionRepository>,
    assembler: ReportAssembler,
}

impl<'a> ProjectReportPipeline<'a> {
    pub fn new(config: &'a PipelineConfig, repository: Arc<dyn NotionRepository>) -> Self {
        Self {
            config,
            assembler: ReportAssembler::new(Arc::clone(&repository), config.report.clone()),
            repository,
        }
    }

    /// Runs compose, deliver and (optionally) publish for the configured page.
    pub async fn run(&self) -> Result<PipelineOutcome, AppError> {
        let report = self.compose(&self.config.page_id).await?;
        let delivered = self.deliver(&report)?;

        let location = match delivered.written_files().next() {
            Some(path) => Some(file_url(path)?),
            None => None,
        };

        let published = match (&location, self.config.publish_url) {
            (Some(url), true) => match self.publish(&report.page_id, url).await {
                Ok(()) => true,
                Err(e) => {
                    log::warn!(
                        "Could not write report location to '{}': {}",
                        self.config.url_property,
                        e
                    );
                    false
                }
            },
            _ => false,
        };

        Ok(PipelineOutcome {
            title: report.title,
            notes_count: report.notes_count,
            tasks_count: report.tasks_count,
            location,
            published,
        })
    }
}

#[async_trait::async_trait]
impl ReportComposer for ProjectReportPipeline<'_> {
    async fn compose(&self, page_id: &PageId) -> Result<AssembledReport, AppError> {
        log::info!("Composing report for {}", page_id);
        self.assembler.compose(page_id).await
    }
}

impl ReportDelivery for ProjectReportPipeline<'_> {
    fn deliver(&self, report: &AssembledReport) -> Result<OutputReport, AppError> {
        let plan = plan_delivery(report, &self.config.output_dir, self.config.pipe);
        output::deliver(plan).into_result()
    }
}

#[async_trait::async_trait]
impl LocationPublisher for ProjectReportPipeline<'_> {
    async fn publish(&self, page_id: &PageId, location: &Url) -> Result<(), AppError> {
        log::info!(
            "Publishing report location to '{}' on {}",
            self.config.url_property,
            page_id
        );
        self.repository
            .update_url_property(page_id, &self.config.url_property, location.as_str())
            .await
    }
}
