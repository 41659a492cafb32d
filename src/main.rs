use board_report::utils::{date, logger, validation::validate_path};
use board_report::{BoardConfig, CliConfig, LocalStorage, ReportEngine, ReportPipeline, Result};
use clap::Parser;
use std::path::Path;

#[tokio::main]
async fn main() {
    let args = CliConfig::parse();

    // 初始化日誌
    logger::init_cli_logger(args.verbose);

    tracing::info!("🚀 Starting board-report");
    tracing::debug!("CLI config: {:?}", args);

    match run(&args).await {
        Ok((report_date, output_path)) => {
            tracing::info!("📁 Report saved to: {}", output_path);
            println!("Successfully generated report for {}", report_date);
        }
        Err(e) => {
            tracing::error!(
                "❌ Report generation failed: {} (Category: {:?}, Severity: {:?})",
                e,
                e.category(),
                e.severity()
            );
            tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());

            // 失敗時只回報訊息，行程仍正常結束
            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 {}", e.recovery_suggestion());
        }
    }
}

async fn run(args: &CliConfig) -> Result<(String, String)> {
    tracing::info!("📁 Loading configuration from: {}", args.config);
    let config = BoardConfig::from_file(&args.config)?;

    let date_format = config.date_format().to_string();
    let settings = config.resolve()?;
    tracing::info!("✅ Configuration loaded and validated successfully");

    let report_date = date::resolve_report_date(args.date.as_deref(), &date_format)?;
    validate_path("date", &report_date)?;
    validate_path("output_dir", &args.output_dir)?;
    tracing::info!("📅 Report date: {}", report_date);

    let storage = LocalStorage::new(args.output_dir.clone());
    let pipeline = ReportPipeline::new(storage, settings, report_date.clone());
    let engine = ReportEngine::new(pipeline);

    let file_name = engine.run().await?;
    let output_path = Path::new(&args.output_dir).join(file_name);

    Ok((report_date, output_path.display().to_string()))
}
