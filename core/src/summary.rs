//! Balance aggregation over a user's accounts.

use crate::types::{Account, User};

/// Sum of every account balance, folded left to right from zero.
///
/// Accumulates in `i128`: a slice of `i64` balances cannot overflow it.
pub fn total_balance(accounts: &[Account]) -> i128 {
    accounts
        .iter()
        .fold(0i128, |total, account| total + i128::from(account.balance))
}

/// A user together with the accounts fetched for them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserSummary {
    pub user: User,
    pub accounts: Vec<Account>,
}

impl UserSummary {
    pub fn total_balance(&self) -> i128 {
        total_balance(&self.accounts)
    }
}
