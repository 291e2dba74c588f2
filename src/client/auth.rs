//! Authentication applied to every outgoing request.

use base64::Engine;
use base64::engine::general_purpose::STANDARD;

use crate::domain::{ApiKey, Password, Username};

/// Header carrying the account API key.
pub const SECURITY_KEY_HEADER: &str = "Security-key";

const AUTHORIZATION_HEADER: &str = "Authorization";

#[derive(Debug, Clone)]
pub enum Authenticator {
    /// HTTP Basic authentication. A missing password is sent as empty.
    Basic {
        username: Username,
        password: Option<Password>,
    },
    /// `Security-key: <api key>` header.
    SecurityKey(ApiKey),
}

impl Authenticator {
    fn apply(&self, headers: &mut Vec<(String, String)>) {
        match self {
            Self::Basic { username, password } => {
                let credentials = format!(
                    "{}:{}",
                    username.as_str(),
                    password.as_ref().map_or("", Password::expose)
                );
                headers.push((
                    AUTHORIZATION_HEADER.to_owned(),
                    format!("Basic {}", STANDARD.encode(credentials)),
                ));
            }
            Self::SecurityKey(key) => {
                headers.push((SECURITY_KEY_HEADER.to_owned(), key.expose().to_owned()));
            }
        }
    }
}

#[derive(Debug, Clone, Default)]
/// Set of authenticators applied together. They touch distinct headers, so order
/// does not matter.
pub struct MultiAuthenticator {
    authenticators: Vec<Authenticator>,
}

impl MultiAuthenticator {
    pub fn new(authenticators: Vec<Authenticator>) -> Self {
        Self { authenticators }
    }

    /// Basic auth when a username is configured, plus the security key when one is
    /// configured.
    pub fn from_credentials(
        username: Option<Username>,
        password: Option<Password>,
        api_key: Option<ApiKey>,
    ) -> Self {
        let mut authenticators = Vec::with_capacity(2);
        if let Some(username) = username {
            authenticators.push(Authenticator::Basic { username, password });
        }
        if let Some(key) = api_key {
            authenticators.push(Authenticator::SecurityKey(key));
        }
        Self::new(authenticators)
    }

    pub fn is_empty(&self) -> bool {
        self.authenticators.is_empty()
    }

    pub fn apply(&self, headers: &mut Vec<(String, String)>) {
        for authenticator in &self.authenticators {
            authenticator.apply(headers);
        }
    }
}
