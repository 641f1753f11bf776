use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Typed builder for the request body sent to the backend. The routes forward
/// inbound bodies as raw JSON; this is for callers that construct criteria
/// themselves. The default is no filter at all and serializes as `{}`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FilterCriteria {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub add_client: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub add_ma: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unavailable_mas: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unavailable_clients: Option<Vec<String>>,
}

impl FilterCriteria {
    pub fn to_body(&self) -> serde_json::Result<Value> {
        serde_json::to_value(self)
    }
}
