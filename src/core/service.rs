use crate::core::matcher::{find_match, FieldLayout};
use crate::core::normalize::format_date;
use crate::core::{ConfigProvider, RowSource};
use crate::domain::model::{ApiRequest, AuthResponse, CallRecord, LookupResponse, MatchQuery};
use crate::utils::error::Result;

const DEFAULT_TIME: &str = "N/A";
const PLACEHOLDER_TRANSCRIPT: &str = "Transcrição simulada da chamada.";
const PLACEHOLDER_SUMMARY: &str =
    "**Resumo:** Cliente contactou sobre faturação. Problema resolvido com sucesso.";
const PLACEHOLDER_SOURCE: &str = "Planilha 55PBX";

/// One handler per wire action, over an injected row source and
/// configuration. Stateless; every call fetches a fresh row snapshot.
pub struct ApiService<S: RowSource, C: ConfigProvider> {
    source: S,
    config: C,
    layout: FieldLayout,
}

impl<S: RowSource, C: ConfigProvider> ApiService<S, C> {
    pub fn new(source: S, config: C) -> Self {
        Self {
            source,
            config,
            layout: FieldLayout::default(),
        }
    }

    pub fn with_layout(source: S, config: C, layout: FieldLayout) -> Self {
        Self {
            source,
            config,
            layout,
        }
    }

    /// Membership test of the caller's email against the allow-list range.
    pub async fn check_auth(&self, email: &str) -> Result<AuthResponse> {
        let needle = email.trim().to_lowercase();
        if needle.is_empty() {
            return Ok(AuthResponse { authorized: false });
        }

        let rows = self.source.fetch_rows(self.config.allowlist_range()).await?;
        let authorized = rows
            .iter()
            .any(|row| row.cell(0).trim().to_lowercase() == needle);

        tracing::info!(authorized, "checked allow-list for caller");
        Ok(AuthResponse { authorized })
    }

    /// Fetches the report range and runs the first-match scan. `Ok(None)`
    /// means no row satisfied the match condition; transport failures
    /// come back as `Err` from the row source.
    pub async fn find_call(&self, query: &MatchQuery) -> Result<Option<CallRecord>> {
        let rows = self.source.fetch_rows(self.config.report_range()).await?;
        tracing::debug!("fetched {} rows from report range", rows.len());

        let record = find_match(&rows, query, &self.layout).map(|row| {
            let time = row.cell(self.layout.time);
            CallRecord {
                nome: row.cell(self.layout.name).to_string(),
                data: format_date(row.cell(self.layout.date)),
                hora: if time.is_empty() {
                    DEFAULT_TIME.to_string()
                } else {
                    time.to_string()
                },
                link_audio: row.cell(self.layout.audio_link).to_string(),
                transcricao: PLACEHOLDER_TRANSCRIPT.to_string(),
                resumo: PLACEHOLDER_SUMMARY.to_string(),
                fonte: PLACEHOLDER_SOURCE.to_string(),
            }
        });

        if record.is_none() {
            tracing::info!("no row matched the query");
        }
        Ok(record)
    }

    /// Dispatches one request to its handler and produces the wire payload.
    pub async fn handle(&self, request: ApiRequest) -> Result<serde_json::Value> {
        let payload = match request {
            ApiRequest::CheckAuth { email } => {
                serde_json::to_value(self.check_auth(&email).await?)?
            }
            ApiRequest::Transcribe { date, name } => {
                let query = MatchQuery { name, date };
                let response = match self.find_call(&query).await? {
                    Some(record) => LookupResponse::found(record),
                    None => LookupResponse::not_found(),
                };
                serde_json::to_value(response)?
            }
        };
        Ok(payload)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::CallRow;
    use std::collections::HashMap;

    struct FakeRows {
        ranges: HashMap<String, Vec<CallRow>>,
    }

    impl RowSource for FakeRows {
        async fn fetch_rows(&self, range: &str) -> Result<Vec<CallRow>> {
            Ok(self.ranges.get(range).cloned().unwrap_or_default())
        }
    }

    struct FakeConfig;

    impl ConfigProvider for FakeConfig {
        fn report_range(&self) -> &str {
            "report_02!A:G"
        }
        fn allowlist_range(&self) -> &str {
            "allowlist!A:A"
        }
    }

    fn service_with(ranges: HashMap<String, Vec<CallRow>>) -> ApiService<FakeRows, FakeConfig> {
        ApiService::new(FakeRows { ranges }, FakeConfig)
    }

    fn report_rows() -> Vec<CallRow> {
        vec![
            CallRow::from(vec!["id", "link", "atendente", "c", "f", "data", "hora"]),
            CallRow::from(vec!["x", "url1", "Maria Silva", "x", "x", "2024-03-05", "10:00"]),
            CallRow::from(vec!["y", "url2", "José Santos", "y", "y", "2024-03-05", ""]),
        ]
    }

    #[tokio::test]
    async fn test_find_call_builds_display_fields() {
        let mut ranges = HashMap::new();
        ranges.insert("report_02!A:G".to_string(), report_rows());
        let service = service_with(ranges);

        let record = service
            .find_call(&MatchQuery {
                name: "Maria".to_string(),
                date: "05/03/2024".to_string(),
            })
            .await
            .unwrap()
            .expect("should find the Maria row");

        assert_eq!(record.nome, "Maria Silva");
        assert_eq!(record.data, "05/03/2024");
        assert_eq!(record.hora, "10:00");
        assert_eq!(record.link_audio, "url1");
        assert_eq!(record.fonte, PLACEHOLDER_SOURCE);
    }

    #[tokio::test]
    async fn test_find_call_defaults_missing_time() {
        let mut ranges = HashMap::new();
        ranges.insert("report_02!A:G".to_string(), report_rows());
        let service = service_with(ranges);

        let record = service
            .find_call(&MatchQuery {
                name: "jose".to_string(),
                date: "2024-03-05".to_string(),
            })
            .await
            .unwrap()
            .expect("accent-folded name should match");

        assert_eq!(record.nome, "José Santos");
        assert_eq!(record.hora, "N/A");
    }

    #[tokio::test]
    async fn test_find_call_not_found_is_ok_none() {
        let mut ranges = HashMap::new();
        ranges.insert("report_02!A:G".to_string(), report_rows());
        let service = service_with(ranges);

        let result = service
            .find_call(&MatchQuery {
                name: "Pedro".to_string(),
                date: "05/03/2024".to_string(),
            })
            .await
            .unwrap();
        assert!(result.is_none());
    }

    #[tokio::test]
    async fn test_check_auth_membership() {
        let mut ranges = HashMap::new();
        ranges.insert(
            "allowlist!A:A".to_string(),
            vec![
                CallRow::from(vec!["email"]),
                CallRow::from(vec!["Maria.Silva@Example.com"]),
            ],
        );
        let service = service_with(ranges);

        let allowed = service.check_auth("  maria.silva@example.com ").await.unwrap();
        assert!(allowed.authorized);

        let denied = service.check_auth("pedro@example.com").await.unwrap();
        assert!(!denied.authorized);

        let blank = service.check_auth("   ").await.unwrap();
        assert!(!blank.authorized);
    }

    #[tokio::test]
    async fn test_custom_field_layout() {
        let mut ranges = HashMap::new();
        ranges.insert(
            "report_02!A:G".to_string(),
            vec![
                CallRow::from(vec!["nome", "data", "hora", "link"]),
                CallRow::from(vec!["Ana Paula", "2024-04-01", "09:00", "url9"]),
            ],
        );
        let layout = FieldLayout {
            name: 0,
            date: 1,
            time: 2,
            audio_link: 3,
        };
        let service = ApiService::with_layout(FakeRows { ranges }, FakeConfig, layout);

        let record = service
            .find_call(&MatchQuery {
                name: "ana".to_string(),
                date: "01/04/2024".to_string(),
            })
            .await
            .unwrap()
            .expect("should match under the custom layout");

        assert_eq!(record.nome, "Ana Paula");
        assert_eq!(record.hora, "09:00");
        assert_eq!(record.link_audio, "url9");
    }

    #[tokio::test]
    async fn test_handle_dispatches_transcribe() {
        let mut ranges = HashMap::new();
        ranges.insert("report_02!A:G".to_string(), report_rows());
        let service = service_with(ranges);

        let payload = service
            .handle(ApiRequest::Transcribe {
                date: "05/03/2024".to_string(),
                name: "Maria".to_string(),
            })
            .await
            .unwrap();

        assert_eq!(payload["success"], true);
        assert_eq!(payload["data"]["nome"], "Maria Silva");
        assert_eq!(payload["data"]["linkAudio"], "url1");

        let payload = service
            .handle(ApiRequest::Transcribe {
                date: "05/03/2024".to_string(),
                name: "Pedro".to_string(),
            })
            .await
            .unwrap();

        assert_eq!(payload["success"], false);
        assert!(payload["data"].is_null());
        assert_eq!(payload["error"], "Ligação não encontrada");
    }
}
