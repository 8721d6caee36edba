//! Bank customer accounts.
//!
//! # Balance Storage
//!
//! Balances are stored as `i64` cents to avoid floating-point precision issues.
//!
//! For example:
//! - $2.50 is stored as 250 cents
//! - $800.00 is stored as 80000 cents

use crate::error::AppError;

/// Identifier of an account, unique within one bank.
pub type AccountId = u32;

/// An account record held by the bank.
///
/// The bank owns every `BankCustomer`. Sellers and buyers keep only the
/// `AccountId` and go through the bank to read or move money.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BankCustomer {
    id: AccountId,
    name: String,

    /// Current balance in cents. Never negative.
    balance_cents: i64,
}

impl BankCustomer {
    /// A negative opening balance is clamped to zero.
    pub fn new(id: AccountId, name: impl Into<String>, balance_cents: i64) -> Self {
        Self {
            id,
            name: name.into(),
            balance_cents: balance_cents.max(0),
        }
    }

    pub fn id(&self) -> AccountId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn balance_cents(&self) -> i64 {
        self.balance_cents
    }

    /// Add money to the account.
    ///
    /// # Errors
    ///
    /// - `InvalidAmount`: amount is negative or the balance would overflow
    pub fn deposit(&mut self, amount_cents: i64) -> Result<(), AppError> {
        if amount_cents < 0 {
            return Err(AppError::InvalidAmount(
                "Deposit amount must not be negative".to_string(),
            ));
        }

        self.balance_cents = self
            .balance_cents
            .checked_add(amount_cents)
            .ok_or_else(|| AppError::InvalidAmount("Balance overflow".to_string()))?;

        tracing::info!(account_id = self.id, amount_cents, "Deposit applied");
        Ok(())
    }

    /// Remove money from the account.
    ///
    /// The balance is left untouched when the withdrawal is rejected.
    ///
    /// # Errors
    ///
    /// - `InvalidAmount`: amount is negative
    /// - `InsufficientBalance`: amount exceeds the current balance
    pub fn withdraw(&mut self, amount_cents: i64) -> Result<(), AppError> {
        if amount_cents < 0 {
            return Err(AppError::InvalidAmount(
                "Withdrawal amount must not be negative".to_string(),
            ));
        }

        if amount_cents > self.balance_cents {
            tracing::warn!(
                account_id = self.id,
                amount_cents,
                balance_cents = self.balance_cents,
                "Withdrawal rejected"
            );
            return Err(AppError::InsufficientBalance {
                required: amount_cents,
                balance: self.balance_cents,
            });
        }

        self.balance_cents -= amount_cents;

        tracing::info!(account_id = self.id, amount_cents, "Withdrawal applied");
        Ok(())
    }
}
