use serde::{Deserialize, Serialize};

/// Parameters for list/query operations.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListParams {
    /// Maximum number of results to return.
    #[serde(default = "default_limit")]
    pub limit: usize,

    /// Offset for pagination.
    #[serde(default)]
    pub offset: usize,

    /// Sort field.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sort: Option<String>,

    /// Search query string.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub q: Option<String>,
}

fn default_limit() -> usize {
    50
}

impl Default for ListParams {
    fn default() -> Self {
        Self {
            limit: default_limit(),
            offset: 0,
            sort: None,
            q: None,
        }
    }
}

/// Result wrapper for list operations.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListResult<T> {
    pub items: Vec<T>,
    pub total: usize,
}

/// Get the current time as an RFC 3339 string.
pub fn now_rfc3339() -> String {
    chrono::Utc::now().to_rfc3339()
}
