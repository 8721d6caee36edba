//! Seller inventory management.
//!
//! The seller owns its items outright and reaches its bank account through
//! the `Bank`, which is borrowed for each call that moves money.

use std::io::{self, Write};

use crate::{
    error::AppError,
    models::{
        account::AccountId,
        item::{Item, ItemId},
    },
    services::bank::Bank,
};

#[derive(Debug)]
pub struct Seller {
    id: u32,
    name: String,
    account_id: AccountId,
    inventory: Vec<Item>,
}

impl Seller {
    pub fn new(id: u32, name: impl Into<String>, account_id: AccountId) -> Self {
        Self {
            id,
            name: name.into(),
            account_id,
            inventory: Vec::new(),
        }
    }

    pub fn id(&self) -> u32 {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn account_id(&self) -> AccountId {
        self.account_id
    }

    pub fn inventory(&self) -> &[Item] {
        &self.inventory
    }

    /// Stock a new item.
    ///
    /// # Errors
    ///
    /// - `DuplicateItem`: the inventory already lists this id
    pub fn add_item(&mut self, item: Item) -> Result<(), AppError> {
        if self.find_item(item.id()).is_some() {
            tracing::warn!(item_id = item.id(), "Duplicate item rejected");
            return Err(AppError::DuplicateItem(item.id()));
        }

        tracing::info!(
            item_id = item.id(),
            price_cents = item.price_cents(),
            quantity = item.quantity(),
            "Item added to inventory"
        );
        self.inventory.push(item);
        Ok(())
    }

    pub fn find_item(&self, id: ItemId) -> Option<&Item> {
        self.inventory.iter().find(|item| item.id() == id)
    }

    fn find_item_mut(&mut self, id: ItemId) -> Option<&mut Item> {
        self.inventory.iter_mut().find(|item| item.id() == id)
    }

    /// Change the unit price of a listed item.
    ///
    /// # Errors
    ///
    /// - `ItemNotFound`: nothing is changed
    /// - `InvalidAmount`: the new price is negative
    pub fn update_item_price(&mut self, id: ItemId, price_cents: i64) -> Result<(), AppError> {
        let Some(item) = self.find_item_mut(id) else {
            tracing::warn!(item_id = id, "Price update for unknown item");
            return Err(AppError::ItemNotFound(id));
        };

        let old_price_cents = item.price_cents();
        item.set_price(price_cents)?;

        tracing::info!(item_id = id, old_price_cents, price_cents, "Item price updated");
        Ok(())
    }

    /// Sell `quantity` units of an item and collect the money.
    ///
    /// # Process
    ///
    /// 1. Find the item and check stock
    /// 2. Deposit `price * quantity` into the seller's account
    /// 3. Take the units out of stock
    ///
    /// # Returns
    ///
    /// The sale price in cents
    ///
    /// # Errors
    ///
    /// - `ItemNotFound`, `InsufficientStock`: nothing is changed
    /// - `AccountNotFound`: the seller's account is not held by `bank`
    pub fn sell_item(
        &mut self,
        bank: &mut Bank,
        id: ItemId,
        quantity: u32,
    ) -> Result<i64, AppError> {
        let account_id = self.account_id;
        let item = self.find_item_mut(id).ok_or(AppError::ItemNotFound(id))?;

        if item.quantity() < quantity {
            return Err(AppError::InsufficientStock {
                available: item.quantity(),
                requested: quantity,
            });
        }
        let sale_price_cents = item.total_for(quantity)?;

        // Stock stays untouched if the deposit is refused
        bank.customer_mut(account_id)?.deposit(sale_price_cents)?;
        item.reduce_quantity(quantity)?;

        tracing::info!(item_id = id, quantity, sale_price_cents, "Item sold");
        Ok(sale_price_cents)
    }

    /// Prices are rendered in `bank`'s currency.
    pub fn write_inventory<W: Write>(&self, out: &mut W, bank: &Bank) -> io::Result<()> {
        writeln!(out, "\n--- Inventory of {} ---", self.name)?;
        if self.inventory.is_empty() {
            return writeln!(out, "(no items)");
        }
        for item in &self.inventory {
            writeln!(
                out,
                "ID: {}, Name: {}, Price: {}, Quantity: {}",
                item.id(),
                item.name(),
                bank.money(item.price_cents()),
                item.quantity()
            )?;
        }
        Ok(())
    }

    pub fn write_seller_info<W: Write>(
        &self,
        out: &mut W,
        bank: &Bank,
    ) -> io::Result<()> {
        writeln!(out, "\n--- Seller Info ---")?;
        writeln!(out, "Seller ID: {}", self.id)?;
        writeln!(out, "Store Name: {}", self.name)?;
        match bank.find_customer(self.account_id) {
            Some(account) => writeln!(
                out,
                "Account: {} ({}), Balance: {}",
                account.id(),
                account.name(),
                bank.money(account.balance_cents())
            )?,
            None => writeln!(out, "Account: {} (not found)", self.account_id)?,
        }
        writeln!(out, "Items Listed: {}", self.inventory.len())
    }

    pub fn print_inventory(&self, bank: &Bank) -> io::Result<()> {
        self.write_inventory(&mut io::stdout().lock(), bank)
    }

    pub fn print_seller_info(&self, bank: &Bank) -> io::Result<()> {
        self.write_seller_info(&mut io::stdout().lock(), bank)
    }
}
