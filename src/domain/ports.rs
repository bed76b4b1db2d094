use crate::domain::model::{AudioContent, CallRow};
use crate::utils::error::Result;
use async_trait::async_trait;

/// Read-only access to the external tabular data source. One fetch per
/// invocation; implementations must not cache across requests.
pub trait RowSource: Send + Sync {
    fn fetch_rows(
        &self,
        range: &str,
    ) -> impl std::future::Future<Output = Result<Vec<CallRow>>> + Send;
}

/// Authenticated byte-for-byte fetch of a recording from the audio host.
#[async_trait]
pub trait AudioSource: Send + Sync {
    async fn fetch_audio(&self, audio_url: &str) -> Result<AudioContent>;
}

/// Process-wide immutable configuration, populated once at startup and
/// injected rather than read from the environment ad hoc.
pub trait ConfigProvider: Send + Sync {
    fn report_range(&self) -> &str;
    fn allowlist_range(&self) -> &str;
}
