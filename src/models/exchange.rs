use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Arguments of an exchange call as sent by the client.
///
/// Every field is optional at this layer; a field that is missing, empty or
/// not a string is reported as absent so validation can reject the call.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExchangeRequest {
    pub code: Option<String>,
    pub redirect_uri: Option<String>,
    pub provider: Option<String>,
}

impl ExchangeRequest {
    pub fn from_data(data: &Value) -> Self {
        let field = |name: &str| {
            data.get(name)
                .and_then(Value::as_str)
                .filter(|s| !s.is_empty())
                .map(str::to_owned)
        };

        Self {
            code: field("code"),
            redirect_uri: field("redirectUri"),
            provider: field("provider"),
        }
    }
}

/// Envelope of a callable invocation: `{"data": ...}`.
#[derive(Debug, Deserialize)]
pub struct CallableRequest {
    pub data: Value,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExchangeResponse {
    #[serde(rename = "firebaseToken")]
    pub firebase_token: String,
}

/// The provider-side identity a credential is issued for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExternalIdentity {
    pub subject_id: String,
}
