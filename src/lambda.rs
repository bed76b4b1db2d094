#[cfg(feature = "lambda")]
use call_lookup::domain::model::ApiRequest;
#[cfg(feature = "lambda")]
use call_lookup::utils::{logger, validation::Validate};
#[cfg(feature = "lambda")]
use call_lookup::{ApiService, AppConfig, SheetsClient};
#[cfg(feature = "lambda")]
use lambda_runtime::{run, service_fn, Error, LambdaEvent};

#[cfg(feature = "lambda")]
async fn function_handler(event: LambdaEvent<ApiRequest>) -> Result<serde_json::Value, Error> {
    tracing::info!("Handling call-lookup request");

    let config =
        AppConfig::from_env().map_err(|e| Box::new(e) as Box<dyn std::error::Error + Send + Sync>)?;
    config
        .validate()
        .map_err(|e| Box::new(e) as Box<dyn std::error::Error + Send + Sync>)?;

    let source = SheetsClient::with_base_url(
        config.spreadsheet.api_base.clone(),
        config.spreadsheet.id.clone(),
        config.spreadsheet.api_key.clone(),
    );
    let service = ApiService::new(source, config);

    let payload = service
        .handle(event.payload)
        .await
        .map_err(|e| Box::new(e) as Box<dyn std::error::Error + Send + Sync>)?;

    tracing::info!("Request handled successfully");
    Ok(payload)
}

#[cfg(feature = "lambda")]
#[tokio::main]
async fn main() -> Result<(), Error> {
    logger::init_lambda_logger();

    run(service_fn(function_handler)).await
}
