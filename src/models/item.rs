//! Inventory items.

use crate::error::AppError;

/// Identifier of an item, unique within one seller's inventory.
pub type ItemId = u32;

/// A sellable good with a unit price and the stock on hand.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Item {
    id: ItemId,
    name: String,

    /// Unit price in cents. Never negative.
    price_cents: i64,

    quantity: u32,
}

impl Item {
    /// A negative price is clamped to zero.
    pub fn new(id: ItemId, name: impl Into<String>, price_cents: i64, quantity: u32) -> Self {
        Self {
            id,
            name: name.into(),
            price_cents: price_cents.max(0),
            quantity,
        }
    }

    pub fn id(&self) -> ItemId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn price_cents(&self) -> i64 {
        self.price_cents
    }

    pub fn quantity(&self) -> u32 {
        self.quantity
    }

    pub fn set_price(&mut self, price_cents: i64) -> Result<(), AppError> {
        if price_cents < 0 {
            return Err(AppError::InvalidAmount(
                "Price must not be negative".to_string(),
            ));
        }
        self.price_cents = price_cents;
        Ok(())
    }

    /// Take `quantity` units out of stock.
    ///
    /// # Errors
    ///
    /// - `InsufficientStock`: fewer units on hand than requested; stock unchanged
    pub fn reduce_quantity(&mut self, quantity: u32) -> Result<(), AppError> {
        if quantity > self.quantity {
            return Err(AppError::InsufficientStock {
                available: self.quantity,
                requested: quantity,
            });
        }
        self.quantity -= quantity;
        Ok(())
    }

    /// Price of `quantity` units in cents.
    pub fn total_for(&self, quantity: u32) -> Result<i64, AppError> {
        self.price_cents
            .checked_mul(i64::from(quantity))
            .ok_or_else(|| AppError::InvalidAmount("Order total overflows".to_string()))
    }
}
