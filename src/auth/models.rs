use serde::{Deserialize, Serialize};

/// Claims carried by an identity-provider token. Only the fields the server
/// reads are modelled; anything else in the token is ignored.
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Claims {
    pub sub: String,              // Subject (provider user ID)
    #[serde(default)]
    pub user_id: Option<String>,  // Provider-style uid fallback
    #[serde(default)]
    pub email: Option<String>,
    pub exp: usize,               // Expiration time
    #[serde(default)]
    pub iat: usize,               // Issued at
}

impl Claims {
    /// The uid used to scope every query: `sub` first, then the provider's
    /// `user_id` claim when `sub` is empty. Both empty means the token is
    /// unusable.
    pub fn uid(&self) -> Option<&str> {
        if !self.sub.is_empty() {
            return Some(&self.sub);
        }
        match self.user_id.as_deref() {
            Some(uid) if !uid.is_empty() => Some(uid),
            _ => None,
        }
    }
}

/// Verified caller identity, extracted per request
#[derive(Debug, Clone)]
pub struct AuthUser {
    pub user_id: String,
    pub email: Option<String>,
}
