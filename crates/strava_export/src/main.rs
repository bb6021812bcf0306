use strava_export::{ExportOptions, run_export};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Configure logging from env var `STRAVA_EXPORT_LOG_LEVEL` (or fallback to `RUST_LOG`, default `info`).
    let log_env = std::env::var("STRAVA_EXPORT_LOG_LEVEL")
        .or_else(|_| std::env::var("RUST_LOG"))
        .unwrap_or_else(|_| "info".to_string());

    let env_filter = tracing_subscriber::EnvFilter::try_new(&log_env)
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .compact()
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .with_target(false)
        .with_env_filter(env_filter)
        .init();
    tracing::info!("strava_export: log filter: {}", log_env);

    let summary = run_export(&ExportOptions::default()).await?;

    tracing::info!(
        "strava_export: wrote {} runs ({} activities fetched) to {}",
        summary.exported,
        summary.fetched,
        summary.output_path.display()
    );

    Ok(())
}
