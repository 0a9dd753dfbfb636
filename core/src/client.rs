//! Stateless client for the accounts API.
//!
//! # Design
//! `AccountsClient` holds a `base_url`, a strictness flag, and a transport.
//! Nothing changes between calls. Each operation is split into a `build_*`
//! method that produces an `HttpRequest` and a `parse_*` method that consumes
//! an `HttpResponse`; `fetch_*` runs both around a single
//! `Transport::execute`. Callers that do their own I/O can use the
//! build/parse pair directly.

use tracing::debug;

use crate::error::ApiError;
use crate::http::{HttpRequest, HttpResponse, Transport, UreqTransport};
use crate::summary::UserSummary;
use crate::types::{Account, Envelope, User};

/// Synchronous, stateless client for the accounts API.
#[derive(Debug, Clone)]
pub struct AccountsClient<T = UreqTransport> {
    base_url: String,
    strict_ownership: bool,
    transport: T,
}

impl AccountsClient<UreqTransport> {
    /// Client using a default `UreqTransport` (no deadline).
    pub fn new(base_url: &str) -> Self {
        Self::with_transport(base_url, UreqTransport::default())
    }
}

impl<T> AccountsClient<T> {
    pub fn with_transport(base_url: &str, transport: T) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            strict_ownership: false,
            transport,
        }
    }

    /// Reject accounts whose `user_id` differs from the requested user.
    pub fn with_strict_ownership(mut self, strict: bool) -> Self {
        self.strict_ownership = strict;
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn build_get_user(&self, user_id: u64) -> HttpRequest {
        self.get(format!("{}/users/{user_id}", self.base_url))
    }

    pub fn build_get_accounts(&self, user_id: u64) -> HttpRequest {
        self.get(format!("{}/users/{user_id}/accounts", self.base_url))
    }

    pub fn parse_get_user(&self, response: HttpResponse) -> Result<User, ApiError> {
        check_status(&response)?;
        let envelope: Envelope<User> = serde_json::from_slice(&response.body)?;
        Ok(envelope.into_inner())
    }

    /// Decodes the whole array before unwrapping; one bad element fails the call.
    pub fn parse_get_accounts(
        &self,
        user_id: u64,
        response: HttpResponse,
    ) -> Result<Vec<Account>, ApiError> {
        check_status(&response)?;
        let envelopes: Vec<Envelope<Account>> = serde_json::from_slice(&response.body)?;
        let accounts: Vec<Account> = envelopes.into_iter().map(Envelope::into_inner).collect();

        if self.strict_ownership {
            if let Some(foreign) = accounts.iter().find(|a| a.user_id != user_id) {
                return Err(ApiError::OwnershipMismatch {
                    account_id: foreign.id,
                    expected: user_id,
                    found: foreign.user_id,
                });
            }
        }
        Ok(accounts)
    }

    fn get(&self, url: String) -> HttpRequest {
        HttpRequest {
            url,
            headers: vec![("accept".to_string(), "application/json".to_string())],
        }
    }
}

impl<T: Transport> AccountsClient<T> {
    pub fn fetch_user(&self, user_id: u64) -> Result<User, ApiError> {
        let response = self.execute(self.build_get_user(user_id))?;
        self.parse_get_user(response)
    }

    pub fn fetch_accounts(&self, user_id: u64) -> Result<Vec<Account>, ApiError> {
        let response = self.execute(self.build_get_accounts(user_id))?;
        self.parse_get_accounts(user_id, response)
    }

    /// Fetch the user, then their accounts. Stops at the first failure.
    pub fn fetch_summary(&self, user_id: u64) -> Result<UserSummary, ApiError> {
        let user = self.fetch_user(user_id)?;
        let accounts = self.fetch_accounts(user_id)?;
        Ok(UserSummary { user, accounts })
    }

    fn execute(&self, request: HttpRequest) -> Result<HttpResponse, ApiError> {
        debug!(url = %request.url, "GET");
        let response = self
            .transport
            .execute(&request)
            .map_err(ApiError::Transport)?;
        debug!(url = %request.url, status = response.status, "response");
        Ok(response)
    }
}

fn check_status(response: &HttpResponse) -> Result<(), ApiError> {
    if response.is_success() {
        return Ok(());
    }
    Err(ApiError::Status {
        status: response.status,
    })
}
