//! The bank - sole owner of customer accounts.
//!
//! Accounts are kept in insertion order so reports list them the way they
//! were opened. Lookups are linear; the bank never holds more than a handful
//! of customers.

use std::io::{self, Write};

use crate::{
    config::format_money,
    error::AppError,
    models::account::{AccountId, BankCustomer},
};

#[derive(Debug)]
pub struct Bank {
    name: String,
    currency_symbol: String,
    customers: Vec<BankCustomer>,
}

impl Bank {
    pub fn new(name: impl Into<String>, currency_symbol: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            currency_symbol: currency_symbol.into(),
            customers: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn customers(&self) -> &[BankCustomer] {
        &self.customers
    }

    /// Open a new account.
    ///
    /// # Errors
    ///
    /// - `DuplicateAccount`: an account with the same id is already held
    pub fn add_customer(&mut self, customer: BankCustomer) -> Result<(), AppError> {
        if self.find_customer(customer.id()).is_some() {
            tracing::warn!(account_id = customer.id(), "Duplicate account rejected");
            return Err(AppError::DuplicateAccount(customer.id()));
        }

        tracing::info!(
            account_id = customer.id(),
            balance_cents = customer.balance_cents(),
            "Account opened"
        );
        self.customers.push(customer);
        Ok(())
    }

    pub fn find_customer(&self, id: AccountId) -> Option<&BankCustomer> {
        self.customers.iter().find(|c| c.id() == id)
    }

    pub fn find_customer_mut(&mut self, id: AccountId) -> Option<&mut BankCustomer> {
        self.customers.iter_mut().find(|c| c.id() == id)
    }

    /// Like `find_customer`, but a missing id is an error.
    pub fn customer(&self, id: AccountId) -> Result<&BankCustomer, AppError> {
        self.find_customer(id).ok_or(AppError::AccountNotFound(id))
    }

    pub fn customer_mut(&mut self, id: AccountId) -> Result<&mut BankCustomer, AppError> {
        self.find_customer_mut(id)
            .ok_or(AppError::AccountNotFound(id))
    }

    /// Render an amount in cents with the bank's currency symbol.
    pub fn money(&self, cents: impl Into<i128>) -> String {
        format_money(&self.currency_symbol, cents)
    }

    /// Sum of every customer balance, in cents.
    ///
    /// Widened to `i128`: each balance may reach `i64::MAX` on its own.
    pub fn total_deposits(&self) -> i128 {
        self.customers
            .iter()
            .map(|c| i128::from(c.balance_cents()))
            .sum()
    }

    pub fn write_all_customers<W: Write>(&self, out: &mut W) -> io::Result<()> {
        writeln!(out, "\n--- {} Customer List ---", self.name)?;
        for customer in &self.customers {
            writeln!(
                out,
                "Customer ID: {}, Name: {}, Balance: {}",
                customer.id(),
                customer.name(),
                self.money(customer.balance_cents())
            )?;
        }
        Ok(())
    }

    pub fn write_bank_info<W: Write>(&self, out: &mut W) -> io::Result<()> {
        writeln!(out, "\n--- Bank Info ---")?;
        writeln!(out, "Bank Name: {}", self.name)?;
        writeln!(out, "Total Customers: {}", self.customers.len())?;
        writeln!(out, "Total Deposits: {}", self.money(self.total_deposits()))
    }

    pub fn print_all_customers(&self) -> io::Result<()> {
        self.write_all_customers(&mut io::stdout().lock())
    }

    pub fn print_bank_info(&self) -> io::Result<()> {
        self.write_bank_info(&mut io::stdout().lock())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seeded_bank() -> Bank {
        let mut bank = Bank::new("Test Bank", "$");
        bank.add_customer(BankCustomer::new(101, "John Doe", 150000))
            .unwrap();
        bank.add_customer(BankCustomer::new(201, "Jane Smith", 80000))
            .unwrap();
        bank
    }

    #[test]
    fn test_add_and_find_customer() {
        let bank = seeded_bank();

        let jane = bank.find_customer(201).unwrap();
        assert_eq!(jane.name(), "Jane Smith");
        assert!(bank.find_customer(999).is_none());
        assert!(matches!(
            bank.customer(999),
            Err(AppError::AccountNotFound(999))
        ));
    }

    #[test]
    fn test_duplicate_account_rejected() {
        let mut bank = seeded_bank();

        let err = bank
            .add_customer(BankCustomer::new(101, "Impostor", 1))
            .unwrap_err();
        assert!(matches!(err, AppError::DuplicateAccount(101)));
        assert_eq!(bank.customers().len(), 2);
        assert_eq!(bank.find_customer(101).unwrap().name(), "John Doe");
    }

    #[test]
    fn test_mutation_through_handle() {
        let mut bank = seeded_bank();

        bank.customer_mut(201).unwrap().withdraw(2500).unwrap();
        assert_eq!(bank.find_customer(201).unwrap().balance_cents(), 77500);
        assert_eq!(bank.total_deposits(), 227500);
    }

    #[test]
    fn test_reports() {
        let bank = seeded_bank();
        let mut out = Vec::new();

        bank.write_all_customers(&mut out).unwrap();
        bank.write_bank_info(&mut out).unwrap();

        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("Customer ID: 101, Name: John Doe, Balance: $1500.00"));
        assert!(text.contains("Customer ID: 201, Name: Jane Smith, Balance: $800.00"));
        assert!(text.contains("Bank Name: Test Bank"));
        assert!(text.contains("Total Customers: 2"));
        assert!(text.contains("Total Deposits: $2300.00"));
    }

    #[test]
    fn test_total_deposits_beyond_single_balance_range() {
        let mut bank = Bank::new("Test Bank", "$");
        bank.add_customer(BankCustomer::new(1, "Whale", i64::MAX))
            .unwrap();
        bank.add_customer(BankCustomer::new(2, "Minnow", 1)).unwrap();

        assert_eq!(bank.total_deposits(), i128::from(i64::MAX) + 1);

        let mut out = Vec::new();
        bank.write_bank_info(&mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("Total Deposits: $92233720368547758.08"));
    }
}
