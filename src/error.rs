//! Error types shared by the bank, the seller and the purchase workflow.
//!
//! Business failures (unknown ids, short stock, short funds) are reported to
//! the console by the simulation and never abort the run. Only startup
//! failures bubble out of `main`.

use crate::models::{account::AccountId, item::ItemId};

/// Application-wide error type.
///
/// # Error Categories
///
/// - **Resource Errors**: an account or item id did not resolve
/// - **Registration Errors**: an id was registered twice
/// - **Business Logic Errors**: stock or balance too low for the request
/// - **Validation Errors**: negative or overflowing amounts
/// - **Ambient Errors**: configuration and console I/O
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// No account with this id is held by the bank.
    #[error("Account {0} not found")]
    AccountNotFound(AccountId),

    /// The bank already holds an account with this id.
    #[error("Account {0} already exists")]
    DuplicateAccount(AccountId),

    /// The seller's inventory has no item with this id.
    #[error("Item {0} not found")]
    ItemNotFound(ItemId),

    /// The seller's inventory already lists an item with this id.
    #[error("Item {0} already exists")]
    DuplicateItem(ItemId),

    /// Fewer units on hand than requested.
    #[error("Insufficient stock: available {available}, requested {requested}")]
    InsufficientStock { available: u32, requested: u32 },

    /// Account balance is lower than the amount to withdraw.
    ///
    /// Both fields are in cents.
    #[error("Insufficient balance: required {required} cents, balance {balance} cents")]
    InsufficientBalance { required: i64, balance: i64 },

    /// Amount or quantity is negative, zero where not allowed, or overflows.
    ///
    /// The String contains details about what was invalid.
    #[error("Invalid amount: {0}")]
    InvalidAmount(String),

    /// Environment variables could not be parsed into `Config`.
    #[error("Configuration error: {0}")]
    Config(#[from] envy::Error),

    /// Writing the narrative to the console failed.
    #[error("Output error: {0}")]
    Io(#[from] std::io::Error),
}
