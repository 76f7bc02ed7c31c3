// src/config.rs
use crate::constants::{
    API_KEY_ENV_VARS, DEFAULT_NOTES_RELATION, DEFAULT_TASKS_RELATION, DEFAULT_URL_PROPERTY,
};
use crate::error::AppError;
use crate::formatting::{ReportSettings, TaskPropertyNames};
use crate::types::{ApiKey, PageId, ValidationError};
use clap::Parser;
use std::path::PathBuf;

/// Parsed command-line input.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct CommandLineInput {
    /// Notion project page URL or ID (e.g., "https://www.notion.so/...")
    pub notion_input: String,

    /// Directory that receives the `reports/` tree
    #[arg(short = 'd', long, default_value = "./local_reports")]
    pub output_dir: PathBuf,

    /// Pipe mode - print the report to stdout instead of saving it
    #[arg(short = 'p', long, default_value_t = false)]
    pub pipe: bool,

    /// Relation property on the project page that lists its notes
    #[arg(long, default_value = DEFAULT_NOTES_RELATION)]
    pub notes_relation: String,

    /// Relation property on the project page that lists its tasks
    #[arg(long, default_value = DEFAULT_TASKS_RELATION)]
    pub tasks_relation: String,

    /// URL property that receives the saved report location
    #[arg(long, default_value = DEFAULT_URL_PROPERTY)]
    pub url_property: String,

    /// Write the saved report location back into the project page
    #[arg(long, default_value_t = false)]
    pub publish_url: bool,

    /// Render notes and tasks without their nested content
    #[arg(long = "no-nested", default_value_t = false)]
    pub no_nested: bool,

    /// Enable verbose logging (debug level)
    #[arg(short, long, default_value_t = false)]
    pub verbose: bool,
}

/// Resolved pipeline configuration — validated once, then passed explicitly.
#[derive(Debug, Clone)]
pub struct PipelineConfig {
    pub page_id: PageId,
    pub api_key: ApiKey,
    pub output_dir: PathBuf,
    pub pipe: bool,
    pub url_property: String,
    pub publish_url: bool,
    pub verbose: bool,
    pub report: ReportSettings,
}

impl PipelineConfig {
    /// Resolves a complete pipeline configuration from CLI input and environment.
    pub fn resolve(cli: CommandLineInput) -> Result<Self, AppError> {
        let api_key = API_KEY_ENV_VARS
            .iter()
            .find_map(|name| std::env::var(name).ok().filter(|v| !v.trim().is_empty()))
            .ok_or_else(|| {
                AppError::MissingConfiguration(format!(
                    "none of {} is set",
                    API_KEY_ENV_VARS.join(", ")
                ))
            })?;

        Self::from_parts(cli, &api_key)
    }

    /// Validates CLI input together with an already-read API key.
    pub fn from_parts(cli: CommandLineInput, api_key: &str) -> Result<Self, AppError> {
        let api_key = ApiKey::new(api_key.trim())?;
        let page_id = PageId::parse(&cli.notion_input)?;

        for (flag, value) in [
            ("--notes-relation", &cli.notes_relation),
            ("--tasks-relation", &cli.tasks_relation),
            ("--url-property", &cli.url_property),
        ] {
            if value.trim().is_empty() {
                return Err(ValidationError::EmptyField(flag).into());
            }
        }

        Ok(PipelineConfig {
            page_id,
            api_key,
            output_dir: cli.output_dir,
            pipe: cli.pipe,
            url_property: cli.url_property,
            publish_url: cli.publish_url,
            verbose: cli.verbose,
            report: ReportSettings {
                notes_relation: cli.notes_relation,
                tasks_relation: cli.tasks_relation,
                task_properties: TaskPropertyNames::default(),
                include_nested_content: !cli.no_nested,
            },
        })
    }
}
