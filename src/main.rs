use anyhow::Context;
use call_lookup::domain::model::{LookupResponse, MatchQuery};
use call_lookup::domain::ports::AudioSource;
use call_lookup::utils::{logger, validation::Validate};
use call_lookup::{ApiService, AppConfig, AudioProxy, CliArgs, Command, SheetsClient};
use clap::Parser;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = CliArgs::parse();

    logger::init_cli_logger(args.verbose);
    tracing::info!("Starting call-lookup CLI");

    let config = match &args.config {
        Some(path) => AppConfig::from_file(path)
            .with_context(|| format!("failed to load config from {}", path.display()))?,
        None => AppConfig::from_env().context("failed to load config from environment")?,
    };

    if let Err(e) = config.validate() {
        tracing::error!("Configuration validation failed: {}", e);
        eprintln!("❌ {}", e);
        std::process::exit(1);
    }

    if args.verbose {
        tracing::debug!("report range: {}", config.spreadsheet.report_range);
        tracing::debug!("allowlist range: {}", config.spreadsheet.allowlist_range);
    }

    match args.command {
        Command::Lookup { name, date } => {
            let source = SheetsClient::with_base_url(
                config.spreadsheet.api_base.clone(),
                config.spreadsheet.id.clone(),
                config.spreadsheet.api_key.clone(),
            );
            let service = ApiService::new(source, config);

            let query = MatchQuery { name, date };
            let response = match service.find_call(&query).await? {
                Some(record) => LookupResponse::found(record),
                None => LookupResponse::not_found(),
            };
            println!("{}", serde_json::to_string_pretty(&response)?);
        }
        Command::CheckAuth { email } => {
            let source = SheetsClient::with_base_url(
                config.spreadsheet.api_base.clone(),
                config.spreadsheet.id.clone(),
                config.spreadsheet.api_key.clone(),
            );
            let service = ApiService::new(source, config);

            let response = service.check_auth(&email).await?;
            println!("{}", serde_json::to_string_pretty(&response)?);
        }
        Command::FetchAudio { url, output } => {
            let api_key = config.audio_api_key()?.clone();
            let proxy = AudioProxy::new(api_key);

            let audio = proxy.fetch_audio(&url).await?;
            std::fs::write(&output, &audio.bytes)
                .with_context(|| format!("failed to write {}", output.display()))?;

            tracing::info!("✅ Saved {} bytes to {}", audio.bytes.len(), output.display());
            println!(
                "✅ {} ({} bytes) saved to {}",
                audio.content_type,
                audio.bytes.len(),
                output.display()
            );
        }
    }

    Ok(())
}
