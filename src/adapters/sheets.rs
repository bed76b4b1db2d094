use crate::domain::model::CallRow;
use crate::domain::ports::RowSource;
use crate::utils::error::{LookupError, Result};
use reqwest::Client;
use serde::Deserialize;

pub const DEFAULT_SHEETS_API_BASE: &str = "https://sheets.googleapis.com";

/// Values-API response body. Empty ranges come back without a `values`
/// key at all.
#[derive(Debug, Deserialize)]
struct ValuesResponse {
    #[serde(default)]
    values: Vec<Vec<serde_json::Value>>,
}

/// Read-only client for the spreadsheet values API.
pub struct SheetsClient {
    client: Client,
    base_url: String,
    spreadsheet_id: String,
    api_key: Option<String>,
}

impl SheetsClient {
    pub fn new(spreadsheet_id: String, api_key: Option<String>) -> Self {
        Self::with_base_url(DEFAULT_SHEETS_API_BASE.to_string(), spreadsheet_id, api_key)
    }

    /// The base URL is injectable so tests can point the client at a mock
    /// server.
    pub fn with_base_url(
        base_url: String,
        spreadsheet_id: String,
        api_key: Option<String>,
    ) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
            spreadsheet_id,
            api_key,
        }
    }

    fn values_url(&self, range: &str) -> String {
        format!(
            "{}/v4/spreadsheets/{}/values/{}",
            self.base_url, self.spreadsheet_id, range
        )
    }
}

impl RowSource for SheetsClient {
    async fn fetch_rows(&self, range: &str) -> Result<Vec<CallRow>> {
        let url = self.values_url(range);
        tracing::debug!("fetching sheet range: {}", url);

        let mut request = self.client.get(&url);
        if let Some(key) = &self.api_key {
            request = request.query(&[("key", key)]);
        }

        let response = request.send().await?;
        let status = response.status();
        tracing::debug!("sheets API response status: {}", status);

        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(LookupError::UpstreamError {
                status: status.as_u16(),
                message,
            });
        }

        let body: ValuesResponse = response.json().await?;
        let rows = body
            .values
            .into_iter()
            .map(|cells| CallRow::new(cells.iter().map(cell_to_string).collect()))
            .collect();

        Ok(rows)
    }
}

// The values API normally returns strings, but numeric-formatted cells can
// arrive as bare JSON numbers.
fn cell_to_string(value: &serde_json::Value) -> String {
    match value {
        serde_json::Value::String(s) => s.clone(),
        serde_json::Value::Null => String::new(),
        other => other.to_string(),
    }
}
