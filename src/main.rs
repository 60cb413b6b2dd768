// src/main.rs

use clap::Parser;
use log::LevelFilter;
use log4rs::{
    append::console::{ConsoleAppender, Target},
    append::file::FileAppender,
    config::{Appender, Root},
    encode::pattern::PatternEncoder,
    filter::threshold::ThresholdFilter,
    Config,
};
use std::fs;
use std::sync::Arc;
use swing2pen::api::client::build_http_client;
use swing2pen::output::{deliver, DeliveryTarget, OutputPlan, OutputReport};
use swing2pen::{
    AppError, CachedLibraryIndex, CdnjsClient, CommandLineInput, ExportConfig, LibraryIndex,
    PasteClient, PenComposer, PenPublisher, SwingDirectory, SwingExporter, ViewerUrl,
};

/// Sets up logging configuration.
///
/// Console logs go to stderr so that stdout carries only the URL or definition.
fn setup_logging(verbose: bool) -> Result<(), Box<dyn std::error::Error>> {
    let log_level = if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    };

    let log_file_path = std::env::temp_dir().join("swing2pen.log");
    if let Some(parent) = log_file_path.parent() {
        fs::create_dir_all(parent)?;
    }

    let pattern = if verbose {
        "{d(%Y-%m-%d %H:%M:%S)} [{l}] - {m}{n}"
    } else {
        "{m}{n}"
    };

    let stderr_appender = ConsoleAppender::builder()
        .target(Target::Stderr)
        .encoder(Box::new(PatternEncoder::new(pattern)))
        .build();

    let file_appender = FileAppender::builder()
        .encoder(Box::new(PatternEncoder::new(
            "{d(%Y-%m-%d %H:%M:%S)} [{l}] - {m}{n}",
        )))
        .build(&log_file_path)?;

    let config = Config::builder()
        .appender(Appender::builder().build("stderr", Box::new(stderr_appender)))
        .appender(
            Appender::builder()
                .filter(Box::new(ThresholdFilter::new(LevelFilter::Debug)))
                .build("file", Box::new(file_appender)),
        )
        .build(
            Root::builder()
                .appender("stderr")
                .appender("file")
                .build(log_level),
        )?;

    log4rs::init_config(config)?;
    log::info!("Logging initialized. Log file: {}", log_file_path.display());
    Ok(())
}

/// Builds the exporter from the resolved configuration.
async fn build_exporter(config: &ExportConfig) -> Result<SwingExporter, AppError> {
    let http = build_http_client(config.timeout)?;

    let cdnjs = CdnjsClient::new(http.clone(), config.library_index_url.clone());
    let libraries: Arc<dyn LibraryIndex> = if config.cache {
        log::info!("Library index cache enabled (TTL: {}s)", config.cache_ttl);
        Arc::new(CachedLibraryIndex::new(cdnjs, config.cache_ttl).await?)
    } else {
        Arc::new(cdnjs)
    };
    let paste = Arc::new(PasteClient::new(http, config.paste_url.clone()));

    Ok(SwingExporter::new(
        libraries,
        paste,
        config.viewer_url.clone(),
    ))
}

/// Plans how the viewer URL reaches the user.
fn delivery_plan(config: &ExportConfig, url: &ViewerUrl) -> OutputPlan {
    let mut plan = OutputPlan::new().with_operation(DeliveryTarget::PrintToStdout {
        content: url.to_string(),
    });

    if config.pipe {
        return plan;
    }

    if config.clipboard {
        plan = plan.with_operation(DeliveryTarget::CopyToClipboard {
            content: url.to_string(),
        });
    }

    if config.open_browser {
        plan = plan.with_operation(DeliveryTarget::OpenInBrowser {
            url: url.to_string(),
        });
    }

    plan
}

fn report_completion(config: &ExportConfig, report: &OutputReport) {
    if config.pipe {
        return;
    }

    for completed in &report.completed {
        match &completed.operation {
            DeliveryTarget::CopyToClipboard { .. } => eprintln!("✓ Viewer URL copied to clipboard"),
            DeliveryTarget::OpenInBrowser { .. } => eprintln!("✓ Opened pen in browser"),
            DeliveryTarget::PrintToStdout { .. } => {}
        }
    }
}

/// Executes the export: load → compose → publish → deliver.
async fn execute_export(config: &ExportConfig) -> Result<(), AppError> {
    let exporter = build_exporter(config).await?;

    let swing = SwingDirectory::load(&config.swing_dir).await?;
    log::info!("Exporting swing '{}' from {}", swing.name(), swing.root().display());

    let pen = exporter.compose(&swing).await?;

    if config.print_definition {
        println!("{}", serde_json::to_string_pretty(&pen)?);
        return Ok(());
    }

    let url = exporter.publish(&pen).await?;
    let report = deliver(delivery_plan(config, &url));

    if !report.is_success() {
        return Err(AppError::DeliveryFailed {
            failures: report.failed.iter().map(|f| f.error.clone()).collect(),
        });
    }

    report_completion(config, &report);
    Ok(())
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = CommandLineInput::parse();

    setup_logging(cli.verbose)?;

    let config = ExportConfig::resolve(cli)?;

    execute_export(&config).await?;

    Ok(())
}
