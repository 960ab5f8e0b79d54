use serde::{Deserialize, Serialize};

/// Body of `POST /api/generate`.
///
/// Fields are optional on the wire so a missing one is reported with the same
/// message as an empty one.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct GenerateRequest {
    #[serde(default)]
    pub idea: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerateResponse {
    pub html: String,
}
