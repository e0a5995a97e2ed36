use api_client::{Authenticator, HrmsClient};
use dioxus::prelude::*;
use shared_types::{AppError, AuthUser};

/// Global session state: the authenticated identity and its bearer token.
///
/// Held in Signals and provided via context at the composition root. There
/// is no logout and no token refresh; the session lives until the page is
/// reloaded.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SessionStore {
    pub current: Signal<Option<AuthUser>>,
    token: Signal<Option<String>>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self {
            current: Signal::new(None),
            token: Signal::new(None),
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.current.read().is_some()
    }

    /// Exchange credentials through the given authenticator.
    ///
    /// On failure the session is left untouched and the error propagates to
    /// the caller; on success identity and token are replaced together from
    /// the response payload.
    pub async fn login<A: Authenticator>(
        &mut self,
        authenticator: &A,
        email: String,
        password: String,
    ) -> Result<(), AppError> {
        let resp = authenticator.login(email, password).await?;
        self.current.set(Some(AuthUser {
            user_id: resp.user_id,
            full_name: resp.full_name,
            role: resp.role,
        }));
        self.token.set(Some(resp.token));
        Ok(())
    }

    /// Derived `Authorization` value: `None` until a token is held.
    pub fn authorization(&self) -> Option<String> {
        self.token.read().as_ref().map(|t| format!("Bearer {t}"))
    }

    /// Build a client for the configured backend carrying the current token.
    pub fn client(&self) -> HrmsClient {
        let client = HrmsClient::new(crate::backend_url());
        match self.token.read().as_ref() {
            Some(token) => client.with_token(token.clone()),
            None => client,
        }
    }
}

/// Hook to access the session store.
pub fn use_session() -> SessionStore {
    use_context::<SessionStore>()
}
