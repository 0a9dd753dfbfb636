//! Plain-text balance report.

use std::io::{self, Write};

use accounts_core::UserSummary;

pub fn render_report<W: Write>(out: &mut W, summary: &UserSummary) -> io::Result<()> {
    let ids: Vec<String> = summary.user.account_ids.iter().map(u64::to_string).collect();

    writeln!(out, "User: {}", summary.user.name)?;
    writeln!(out, "Account IDs: {}", ids.join(","))?;
    writeln!(out, "Accounts:")?;
    for account in &summary.accounts {
        writeln!(out, "  - {}: {}", account.name, account.balance)?;
    }
    writeln!(out, "Total Balance: {}", summary.total_balance())
}

#[cfg(test)]
mod tests {
    use super::*;
    use accounts_core::{Account, User};

    fn render(summary: &UserSummary) -> String {
        let mut out = Vec::new();
        render_report(&mut out, summary).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn full_report() {
        let summary = UserSummary {
            user: User {
                id: 1,
                name: "Alice".to_string(),
                account_ids: vec![1, 2],
            },
            accounts: vec![
                Account {
                    id: 1,
                    user_id: 1,
                    name: "Checking".to_string(),
                    balance: 500,
                },
                Account {
                    id: 2,
                    user_id: 1,
                    name: "Savings".to_string(),
                    balance: 1500,
                },
            ],
        };
        assert_eq!(
            render(&summary),
            "User: Alice\n\
             Account IDs: 1,2\n\
             Accounts:\n\
             \x20 - Checking: 500\n\
             \x20 - Savings: 1500\n\
             Total Balance: 2000\n"
        );
    }

    #[test]
    fn report_without_accounts() {
        let summary = UserSummary {
            user: User {
                id: 3,
                name: "Carol".to_string(),
                account_ids: Vec::new(),
            },
            accounts: Vec::new(),
        };
        assert_eq!(
            render(&summary),
            "User: Carol\nAccount IDs: \nAccounts:\nTotal Balance: 0\n"
        );
    }
}
