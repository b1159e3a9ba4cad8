use async_trait::async_trait;
use thiserror::Error;

use crate::{Role, SessionUser};

/// Failure of the authentication collaborator itself (as opposed to a rejected
/// login, which is `Ok(false)`).
#[derive(Debug, Error)]
pub enum AuthError {
    #[error("authentication service unavailable: {0}")]
    Unavailable(#[from] anyhow::Error),
}

/// Credential check + session state.
///
/// On a successful `login` the implementation owns the session: it records the
/// user and reports `is_authenticated() == true` until `logout`.
#[async_trait]
pub trait Authenticator: Send + Sync {
    async fn login(&mut self, username: &str, password: &str) -> Result<bool, AuthError>;

    fn logout(&mut self);

    fn is_authenticated(&self) -> bool;

    fn user(&self) -> Option<&SessionUser>;
}

/// A single accepted username/password pair and the role it signs in as.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    pub username: String,
    pub password: String,
    pub role: Role,
}

impl core::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .field("role", &self.role)
            .finish()
    }
}

/// Development authenticator that accepts one configured credential pair.
#[derive(Debug, Clone)]
pub struct StaticAuthenticator {
    credentials: Credentials,
    session: Option<SessionUser>,
}

impl StaticAuthenticator {
    pub fn new(credentials: Credentials) -> Self {
        Self {
            credentials,
            session: None,
        }
    }
}

#[async_trait]
impl Authenticator for StaticAuthenticator {
    async fn login(&mut self, username: &str, password: &str) -> Result<bool, AuthError> {
        if username.is_empty() || password.is_empty() {
            tracing::debug!("login rejected: missing username or password");
            return Ok(false);
        }

        if username != self.credentials.username || password != self.credentials.password {
            tracing::warn!(username, "login rejected: invalid credentials");
            return Ok(false);
        }

        let user = SessionUser::new(username, self.credentials.role.clone());
        tracing::info!(username, role = %user.role, "user signed in");
        self.session = Some(user);
        Ok(true)
    }

    fn logout(&mut self) {
        if let Some(user) = self.session.take() {
            tracing::info!(username = %user.username, "user signed out");
        }
    }

    fn is_authenticated(&self) -> bool {
        self.session.is_some()
    }

    fn user(&self) -> Option<&SessionUser> {
        self.session.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_authenticator() -> StaticAuthenticator {
        StaticAuthenticator::new(Credentials {
            username: "admin".to_string(),
            password: "admin123".to_string(),
            role: Role::administrator(),
        })
    }

    #[tokio::test]
    async fn valid_credentials_open_a_session() {
        let mut auth = test_authenticator();
        assert!(!auth.is_authenticated());

        assert!(auth.login("admin", "admin123").await.unwrap());
        assert!(auth.is_authenticated());
        assert_eq!(
            auth.user(),
            Some(&SessionUser::new("admin", Role::administrator()))
        );
    }

    #[tokio::test]
    async fn wrong_password_is_rejected() {
        let mut auth = test_authenticator();
        assert!(!auth.login("admin", "nope").await.unwrap());
        assert!(!auth.login("Admin", "admin123").await.unwrap());
        assert!(!auth.is_authenticated());
        assert!(auth.user().is_none());
    }

    #[tokio::test]
    async fn empty_fields_are_rejected() {
        let mut auth = StaticAuthenticator::new(Credentials {
            username: String::new(),
            password: String::new(),
            role: Role::new("Clerk"),
        });
        assert!(!auth.login("", "").await.unwrap());
    }

    #[tokio::test]
    async fn logout_clears_the_session() {
        let mut auth = test_authenticator();
        auth.login("admin", "admin123").await.unwrap();
        auth.logout();
        assert!(!auth.is_authenticated());
        assert!(auth.user().is_none());
    }

    #[test]
    fn debug_output_hides_the_password() {
        let rendered = format!("{:?}", test_authenticator());
        assert!(!rendered.contains("admin123"));
        assert!(rendered.contains("<redacted>"));
    }
}
