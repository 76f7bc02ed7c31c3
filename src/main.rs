// src/main.rs

use anyhow::Context;
use clap::Parser;
use log::LevelFilter;
use log4rs::{
    append::console::ConsoleAppender,
    append::file::FileAppender,
    config::{Appender, Root},
    encode::pattern::PatternEncoder,
    filter::threshold::ThresholdFilter,
    Config,
};
use notion2report::{
    CommandLineInput, NotionHttpClient, NotionRepository, PipelineConfig, PipelineOutcome,
    ProjectReportPipeline,
};
use std::fs;
use std::sync::Arc;

/// Sets up logging configuration.
fn setup_logging(verbose: bool) -> anyhow::Result<()> {
    let log_level = if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    };

    let log_file_path = std::env::temp_dir().join("notion2report.log");
    if let Some(parent) = log_file_path.parent() {
        fs::create_dir_all(parent)?;
    }

    let pattern = "{d(%Y-%m-%d %H:%M:%S)} [{l}] - {m}{n}";

    let stderr_appender = ConsoleAppender::builder()
        .target(log4rs::append::console::Target::Stderr)
        .encoder(Box::new(PatternEncoder::new(pattern)))
        .build();

    let file_appender = FileAppender::builder()
        .encoder(Box::new(PatternEncoder::new(pattern)))
        .build(&log_file_path)?;

    let config = Config::builder()
        .appender(Appender::builder().build("console", Box::new(stderr_appender)))
        .appender(
            Appender::builder()
                .filter(Box::new(ThresholdFilter::new(LevelFilter::Debug)))
                .build("file", Box::new(file_appender)),
        )
        .build(
            Root::builder()
                .appender("console")
                .appender("file")
                .build(log_level),
        )?;

    log4rs::init_config(config)?;
    log::info!("Logging initialized. Log file: {}", log_file_path.display());
    Ok(())
}

/// Prints the run summary; nothing is printed in pipe mode so stdout stays the report.
fn report_completion(config: &PipelineConfig, outcome: &PipelineOutcome) {
    if config.pipe {
        return;
    }

    println!("✓ Report generated for '{}'", outcome.title);
    println!("✓ Notes included: {}", outcome.notes_count);
    println!("✓ Tasks included: {}", outcome.tasks_count);

    if let Some(location) = &outcome.location {
        println!("✓ Report saved to {}", location);
    }

    if outcome.published {
        println!("✓ Location written to '{}'", config.url_property);
    } else if config.publish_url {
        eprintln!(
            "⚠️  Could not write the report location to '{}'. See the log for details.",
            config.url_property
        );
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = CommandLineInput::parse();

    setup_logging(cli.verbose).context("Failed to initialise logging")?;

    let config = PipelineConfig::resolve(cli).context("Invalid configuration")?;

    let client: Arc<dyn NotionRepository> = Arc::new(
        NotionHttpClient::new(&config.api_key).context("Failed to build the Notion client")?,
    );

    let outcome = ProjectReportPipeline::new(&config, client)
        .run()
        .await
        .with_context(|| format!("Failed to generate the report for {}", config.page_id))?;

    report_completion(&config, &outcome);

    Ok(())
}
