//! Domain records for the accounts API.
//!
//! # Design
//! The API wraps every resource as `{"attributes": {...}}`. That wrapper is
//! a wire artifact, so `Envelope` stays private to the crate and the client
//! unwraps it before anything reaches a caller.

use serde::{Deserialize, Serialize};

/// An account holder.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct User {
    pub id: u64,
    pub name: String,
    /// Identifiers of the user's accounts, in API order.
    pub account_ids: Vec<u64>,
}

/// A single account owned by a user.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Account {
    pub id: u64,
    pub user_id: u64,
    pub name: String,
    pub balance: i64,
}

#[derive(Deserialize)]
pub(crate) struct Envelope<T> {
    pub(crate) attributes: T,
}

impl<T> Envelope<T> {
    pub(crate) fn into_inner(self) -> T {
        self.attributes
    }
}
