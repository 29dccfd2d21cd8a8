use serde::Deserialize;

#[derive(Debug, Deserialize, Clone, Default)]
pub struct GoogleToken {
    pub access_token: String,
    #[serde(default)]
    pub id_token: Option<String>,
}

/// Claims read from a verified Google ID token.
#[derive(Debug, Deserialize, Clone)]
pub struct GoogleIdTokenClaims {
    pub sub: String,
    pub iss: String,
    pub exp: i64,
    #[serde(default)]
    pub email: Option<String>,
}

/// The Google account behind a verified ID token.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GoogleIdentity {
    pub uid: String,
    pub email: Option<String>,
}

impl From<GoogleIdTokenClaims> for GoogleIdentity {
    fn from(claims: GoogleIdTokenClaims) -> Self {
        Self {
            uid: claims.sub,
            email: claims.email,
        }
    }
}
