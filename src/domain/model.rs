use serde::{Deserialize, Serialize};

/// One row fetched from the call-log sheet. Rows are immutable snapshots;
/// cells may be ragged, so out-of-range access yields an empty string.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CallRow {
    pub cells: Vec<String>,
}

impl CallRow {
    pub fn new(cells: Vec<String>) -> Self {
        Self { cells }
    }

    pub fn cell(&self, index: usize) -> &str {
        self.cells.get(index).map(String::as_str).unwrap_or("")
    }
}

impl From<Vec<&str>> for CallRow {
    fn from(cells: Vec<&str>) -> Self {
        Self {
            cells: cells.into_iter().map(str::to_string).collect(),
        }
    }
}

/// Free-text inputs supplied by the caller for one lookup.
#[derive(Debug, Clone, Deserialize)]
pub struct MatchQuery {
    pub name: String,
    pub date: String,
}

/// The payload returned for a found call. Field names follow the wire
/// contract the frontend expects.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CallRecord {
    pub nome: String,
    pub data: String,
    pub hora: String,
    #[serde(rename = "linkAudio")]
    pub link_audio: String,
    pub transcricao: String,
    pub resumo: String,
    pub fonte: String,
}

/// A request body, dispatched on the closed `action` set.
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "action")]
pub enum ApiRequest {
    #[serde(rename = "checkAuth")]
    CheckAuth { email: String },

    #[serde(rename = "transcribe")]
    Transcribe {
        #[serde(rename = "data")]
        date: String,
        #[serde(rename = "nomeCompleto")]
        name: String,
    },
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthResponse {
    pub authorized: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LookupResponse {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<CallRecord>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl LookupResponse {
    pub fn found(record: CallRecord) -> Self {
        Self {
            success: true,
            data: Some(record),
            error: None,
        }
    }

    pub fn not_found() -> Self {
        Self {
            success: false,
            data: None,
            error: Some("Ligação não encontrada".to_string()),
        }
    }
}

/// Bytes fetched through the audio proxy, passed through unmodified.
#[derive(Debug, Clone)]
pub struct AudioContent {
    pub content_type: String,
    pub bytes: Vec<u8>,
}
