use std::{collections::BTreeMap, sync::Arc};

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use tokio::net::TcpListener;

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct User {
    pub id: u64,
    pub name: String,
    pub account_ids: Vec<u64>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Account {
    pub id: u64,
    pub user_id: u64,
    pub name: String,
    pub balance: i64,
}

/// Wire wrapper: every resource is served as `{"attributes": ...}`.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Envelope<T> {
    pub attributes: T,
}

/// Read-only fixture data served by the router.
#[derive(Clone, Debug, Default)]
pub struct Dataset {
    users: BTreeMap<u64, User>,
    accounts: Vec<Account>,
}

impl Dataset {
    /// The data behind the public sample accounts API.
    pub fn sample() -> Self {
        let account = |id, user_id, name: &str, balance| Account {
            id,
            user_id,
            name: name.to_string(),
            balance,
        };
        Self::default()
            .with_user(User {
                id: 1,
                name: "Alice".to_string(),
                account_ids: vec![1, 3, 5],
            })
            .with_user(User {
                id: 2,
                name: "Bob".to_string(),
                account_ids: vec![2, 4],
            })
            .with_user(User {
                id: 3,
                name: "Carol".to_string(),
                account_ids: Vec::new(),
            })
            .with_account(account(1, 1, "A Bank", 20000))
            .with_account(account(2, 2, "B Bank", 8000))
            .with_account(account(3, 1, "C Bank", 120000))
            .with_account(account(4, 2, "D Bank", 5000))
            .with_account(account(5, 1, "E Bank", 1500))
    }

    pub fn with_user(mut self, user: User) -> Self {
        self.users.insert(user.id, user);
        self
    }

    pub fn with_account(mut self, account: Account) -> Self {
        self.accounts.push(account);
        self
    }
}

pub type Db = Arc<Dataset>;

pub fn app() -> Router {
    app_with(Dataset::sample())
}

pub fn app_with(dataset: Dataset) -> Router {
    let db: Db = Arc::new(dataset);
    Router::new()
        .route("/users/{id}", get(get_user))
        .route("/users/{id}/accounts", get(list_accounts))
        .with_state(db)
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}

pub async fn run_with(listener: TcpListener, dataset: Dataset) -> Result<(), std::io::Error> {
    axum::serve(listener, app_with(dataset)).await
}

async fn get_user(
    State(db): State<Db>,
    Path(id): Path<u64>,
) -> Result<Json<Envelope<User>>, StatusCode> {
    db.users
        .get(&id)
        .cloned()
        .map(|attributes| Json(Envelope { attributes }))
        .ok_or(StatusCode::NOT_FOUND)
}

async fn list_accounts(
    State(db): State<Db>,
    Path(id): Path<u64>,
) -> Result<Json<Vec<Envelope<Account>>>, StatusCode> {
    if !db.users.contains_key(&id) {
        return Err(StatusCode::NOT_FOUND);
    }
    let accounts = db
        .accounts
        .iter()
        .filter(|account| account.user_id == id)
        .cloned()
        .map(|attributes| Envelope { attributes })
        .collect();
    Ok(Json(accounts))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_serializes_inside_envelope() {
        let envelope = Envelope {
            attributes: User {
                id: 1,
                name: "Alice".to_string(),
                account_ids: vec![1, 3, 5],
            },
        };
        let json = serde_json::to_value(&envelope).unwrap();
        assert_eq!(json["attributes"]["id"], 1);
        assert_eq!(json["attributes"]["name"], "Alice");
        assert_eq!(json["attributes"]["account_ids"], serde_json::json!([1, 3, 5]));
    }

    #[test]
    fn sample_accounts_match_user_account_ids() {
        let dataset = Dataset::sample();
        for user in dataset.users.values() {
            let mut owned: Vec<u64> = dataset
                .accounts
                .iter()
                .filter(|a| a.user_id == user.id)
                .map(|a| a.id)
                .collect();
            owned.sort_unstable();
            assert_eq!(owned, user.account_ids, "user {}", user.id);
        }
    }

    #[test]
    fn with_user_replaces_same_id() {
        let dataset = Dataset::default()
            .with_user(User {
                id: 1,
                name: "Old".to_string(),
                account_ids: Vec::new(),
            })
            .with_user(User {
                id: 1,
                name: "New".to_string(),
                account_ids: Vec::new(),
            });
        assert_eq!(dataset.users.len(), 1);
        assert_eq!(dataset.users[&1].name, "New");
    }
}
