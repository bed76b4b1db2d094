use crate::domain::model::AudioContent;
use crate::domain::ports::AudioSource;
use crate::utils::error::{LookupError, Result};
use async_trait::async_trait;
use reqwest::Client;

const FALLBACK_CONTENT_TYPE: &str = "audio/mpeg";

/// Authenticated pass-through fetch of a recording. Injects the bearer
/// credential and hands the bytes and content-type back unchanged; the
/// only logic here is error-wrapping on non-2xx upstream responses.
pub struct AudioProxy {
    client: Client,
    api_key: String,
}

impl AudioProxy {
    pub fn new(api_key: String) -> Self {
        Self {
            client: Client::new(),
            api_key,
        }
    }
}

#[async_trait]
impl AudioSource for AudioProxy {
    async fn fetch_audio(&self, audio_url: &str) -> Result<AudioContent> {
        tracing::debug!("proxying audio fetch: {}", audio_url);

        let response = self
            .client
            .get(audio_url)
            .bearer_auth(&self.api_key)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(LookupError::UpstreamError {
                status: status.as_u16(),
                message: format!(
                    "audio host rejected the request: {}",
                    status.canonical_reason().unwrap_or("unknown status")
                ),
            });
        }

        let content_type = response
            .headers()
            .get(reqwest::header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .unwrap_or(FALLBACK_CONTENT_TYPE)
            .to_string();

        let bytes = response.bytes().await?.to_vec();
        tracing::debug!("fetched {} audio bytes ({})", bytes.len(), content_type);

        Ok(AudioContent {
            content_type,
            bytes,
        })
    }
}
