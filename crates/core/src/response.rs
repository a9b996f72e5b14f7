//! JSON payloads shared by the HTTP handler and the CLI.

use serde::{Deserialize, Serialize};

/// Prefix on every user-facing failure message carried in `summary`.
pub const WARNING_PREFIX: &str = "⚠️";

/// Response body of `POST /api/summarize`.
///
/// Error responses reuse the same shape so the frontend can always render
/// `summary` and `key_points`; the optional fields are omitted there.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, utoipa::ToSchema)]
pub struct SummarizeResponse {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub filename: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub length: Option<String>,
    pub summary: String,
    pub key_points: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mode: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pages: Option<usize>,
}

impl SummarizeResponse {
    /// A response carrying only a warning message and no key points.
    pub fn warning(message: impl AsRef<str>) -> Self {
        Self {
            summary: format!("{} {}", WARNING_PREFIX, message.as_ref()),
            ..Self::default()
        }
    }

    pub fn is_warning(&self) -> bool {
        self.summary.starts_with(WARNING_PREFIX)
    }
}
