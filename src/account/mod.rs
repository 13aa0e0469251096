//! Bank and card accounts with their latest and previous balances.

use serde::{Deserialize, Serialize};

use crate::errors::AccountError;

/// Institutions offered by the account picker.
pub const KNOWN_BANKS: &[&str] = &[
    "국민은행",
    "신한은행",
    "우리은행",
    "카카오뱅크",
    "토스뱅크",
    "삼성카드",
    "현대카드",
];

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Account {
    pub owner: String,
    pub bank_name: String,
    #[serde(default)]
    pub nickname: String,
    #[serde(default)]
    pub account_type: String,
    #[serde(default)]
    pub purpose: String,
    #[serde(default)]
    pub previous_amount: i64,
    #[serde(default)]
    pub current_amount: i64,
}

impl Account {
    pub fn new(owner: impl Into<String>, bank_name: impl Into<String>) -> Self {
        Self {
            owner: owner.into(),
            bank_name: bank_name.into(),
            ..Self::default()
        }
    }

    pub fn with_nickname(mut self, nickname: impl Into<String>) -> Self {
        self.nickname = nickname.into();
        self
    }

    pub fn with_kind(mut self, account_type: impl Into<String>, purpose: impl Into<String>) -> Self {
        self.account_type = account_type.into();
        self.purpose = purpose.into();
        self
    }

    pub fn with_balances(mut self, previous: i64, current: i64) -> Self {
        self.previous_amount = previous;
        self.current_amount = current;
        self
    }

    /// Balance movement since the previous snapshot.
    pub fn change(&self) -> i64 {
        self.current_amount.saturating_sub(self.previous_amount)
    }

    pub fn is_known_bank(&self) -> bool {
        KNOWN_BANKS.contains(&self.bank_name.as_str())
    }

    fn validate(&self) -> Result<(), AccountError> {
        if self.owner.trim().is_empty() {
            return Err(AccountError::MissingField("owner"));
        }
        if self.bank_name.trim().is_empty() {
            return Err(AccountError::MissingField("bank_name"));
        }
        Ok(())
    }
}

/// Ordered account registry. Accounts are addressed by position.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AccountBook {
    accounts: Vec<Account>,
}

impl AccountBook {
    pub fn new(accounts: Vec<Account>) -> Self {
        Self { accounts }
    }

    pub fn accounts(&self) -> &[Account] {
        &self.accounts
    }

    pub fn add(&mut self, account: Account) -> Result<usize, AccountError> {
        account.validate()?;
        self.accounts.push(account);
        Ok(self.accounts.len() - 1)
    }

    /// Replaces the account at `index` with an edited copy.
    pub fn update(&mut self, index: usize, account: Account) -> Result<(), AccountError> {
        account.validate()?;
        let len = self.accounts.len();
        let slot = self
            .accounts
            .get_mut(index)
            .ok_or(AccountError::IndexOutOfRange { index, len })?;
        *slot = account;
        Ok(())
    }

    pub fn remove(&mut self, index: usize) -> Result<Account, AccountError> {
        if index >= self.accounts.len() {
            return Err(AccountError::IndexOutOfRange {
                index,
                len: self.accounts.len(),
            });
        }
        Ok(self.accounts.remove(index))
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct PurposeTotal {
    pub purpose: String,
    pub total: i64,
}

/// Current balances across all accounts, overall and per purpose.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct AssetTotals {
    pub total: i64,
    pub by_purpose: Vec<PurposeTotal>,
}

pub fn asset_totals(accounts: &[Account]) -> AssetTotals {
    let mut totals = AssetTotals::default();
    for account in accounts {
        totals.total = totals.total.saturating_add(account.current_amount);
        match totals
            .by_purpose
            .iter_mut()
            .find(|entry| entry.purpose == account.purpose)
        {
            Some(entry) => entry.total = entry.total.saturating_add(account.current_amount),
            None => totals.by_purpose.push(PurposeTotal {
                purpose: account.purpose.clone(),
                total: account.current_amount,
            }),
        }
    }
    totals
}
