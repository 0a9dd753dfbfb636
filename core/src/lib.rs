//! Blocking client core for the accounts API.
//!
//! # Overview
//! Fetches a user and that user's accounts from a read-only JSON API,
//! unwraps the `{"attributes": ...}` envelopes, and exposes plain `User` and
//! `Account` records plus a balance fold over them.
//!
//! # Design
//! - `AccountsClient` is stateless; it holds only `base_url`, a strictness
//!   flag, and a `Transport`.
//! - Each operation is split into `build_*` (produces request) and
//!   `parse_*` (consumes response); `fetch_*` runs one transport call
//!   between them.
//! - `UreqTransport` is the default transport. Tests substitute their own.
//! - Records are defined independently from the mock-server crate;
//!   integration tests catch schema drift.

pub mod client;
pub mod error;
pub mod http;
pub mod summary;
pub mod types;

pub use client::AccountsClient;
pub use error::{ApiError, BoxError};
pub use http::{HttpRequest, HttpResponse, Transport, UreqTransport};
pub use summary::{total_balance, UserSummary};
pub use types::{Account, User};
