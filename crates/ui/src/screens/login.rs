use stockroom_auth::Authenticator;

pub const INVALID_CREDENTIALS: &str = "Invalid credentials. Please try again.";
pub const UNEXPECTED_ERROR: &str = "An error occurred. Please try again.";

/// Sign-in form state.
#[derive(Clone, Default)]
pub struct LoginScreen {
    pub username: String,
    pub password: String,
    error: Option<&'static str>,
    loading: bool,
}

impl core::fmt::Debug for LoginScreen {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("LoginScreen")
            .field("username", &self.username)
            .field("error", &self.error)
            .field("loading", &self.loading)
            .finish_non_exhaustive()
    }
}

impl LoginScreen {
    pub fn new() -> Self {
        Self::default()
    }

    /// Message shown under the form, if the last attempt failed.
    pub fn error(&self) -> Option<&'static str> {
        self.error
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// An authenticated session skips the form entirely.
    pub fn should_redirect<A: Authenticator + ?Sized>(&self, auth: &A) -> bool {
        auth.is_authenticated()
    }

    /// Submit the form. Returns whether the user is now signed in.
    pub async fn submit<A: Authenticator + ?Sized>(&mut self, auth: &mut A) -> bool {
        self.error = None;
        self.loading = true;

        let outcome = auth.login(&self.username, &self.password).await;
        self.loading = false;

        match outcome {
            Ok(true) => true,
            Ok(false) => {
                self.error = Some(INVALID_CREDENTIALS);
                false
            }
            Err(err) => {
                tracing::error!(error = %err, "login failed");
                self.error = Some(UNEXPECTED_ERROR);
                false
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use stockroom_auth::{AuthError, Credentials, Role, SessionUser, StaticAuthenticator};

    fn test_authenticator() -> StaticAuthenticator {
        StaticAuthenticator::new(Credentials {
            username: "admin".to_string(),
            password: "admin123".to_string(),
            role: Role::administrator(),
        })
    }

    fn test_form(username: &str, password: &str) -> LoginScreen {
        LoginScreen {
            username: username.to_string(),
            password: password.to_string(),
            ..LoginScreen::default()
        }
    }

    struct BrokenAuthenticator;

    #[async_trait]
    impl Authenticator for BrokenAuthenticator {
        async fn login(&mut self, _: &str, _: &str) -> Result<bool, AuthError> {
            Err(anyhow::anyhow!("connection refused").into())
        }

        fn logout(&mut self) {}

        fn is_authenticated(&self) -> bool {
            false
        }

        fn user(&self) -> Option<&SessionUser> {
            None
        }
    }

    #[tokio::test]
    async fn valid_credentials_sign_in_and_redirect() {
        let mut auth = test_authenticator();
        let mut form = test_form("admin", "admin123");
        assert!(!form.should_redirect(&auth));

        assert!(form.submit(&mut auth).await);
        assert_eq!(form.error(), None);
        assert!(!form.is_loading());
        assert!(form.should_redirect(&auth));
    }

    #[tokio::test]
    async fn wrong_password_shows_invalid_credentials() {
        let mut auth = test_authenticator();
        let mut form = test_form("admin", "guess");

        assert!(!form.submit(&mut auth).await);
        assert_eq!(form.error(), Some(INVALID_CREDENTIALS));
        assert!(!form.is_loading());
        assert!(!auth.is_authenticated());
    }

    #[tokio::test]
    async fn next_attempt_clears_previous_error() {
        let mut auth = test_authenticator();
        let mut form = test_form("admin", "guess");
        form.submit(&mut auth).await;

        form.password = "admin123".to_string();
        assert!(form.submit(&mut auth).await);
        assert_eq!(form.error(), None);
    }

    #[tokio::test]
    async fn collaborator_failure_shows_generic_error() {
        let mut auth = BrokenAuthenticator;
        let mut form = test_form("admin", "admin123");

        assert!(!form.submit(&mut auth).await);
        assert_eq!(form.error(), Some(UNEXPECTED_ERROR));
        assert!(!form.is_loading());
    }

    #[test]
    fn debug_output_hides_password() {
        let form = test_form("admin", "admin123");
        assert!(!format!("{form:?}").contains("admin123"));
    }
}
