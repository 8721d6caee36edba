//! Purchase service - validate-then-execute buy orders.
//!
//! # Ordering
//!
//! Every check runs before any mutation, so a rejected order leaves the
//! bank and the inventory exactly as they were. Execution withdraws from
//! the buyer first and then lets the seller complete the sale.

use chrono::Utc;
use uuid::Uuid;

use crate::{
    error::AppError,
    models::{buyer::Buyer, item::ItemId, purchase::PurchaseReceipt},
    services::{bank::Bank, seller::Seller},
};

/// Execute a purchase of `quantity` units of `item_id` from `seller`.
///
/// # Process
///
/// 1. Check the item exists in the seller's inventory
/// 2. Check stock covers the requested quantity
/// 3. Check the buyer's balance covers `price * quantity`
/// 4. Withdraw the total from the buyer
/// 5. Sell the item (deposits into the seller's account, reduces stock)
///
/// # Errors
///
/// - `InvalidAmount`: quantity is zero or the total overflows
/// - `ItemNotFound`: the seller does not list `item_id`
/// - `InsufficientStock`: fewer units on hand than requested
/// - `InsufficientBalance`: the buyer cannot afford the order
/// - `AccountNotFound`: the buyer's or seller's account is not held by `bank`
pub fn process_purchase(
    bank: &mut Bank,
    buyer: &Buyer,
    seller: &mut Seller,
    item_id: ItemId,
    quantity: u32,
) -> Result<PurchaseReceipt, AppError> {
    if quantity == 0 {
        return Err(AppError::InvalidAmount(
            "Quantity must be positive".to_string(),
        ));
    }

    let item = seller
        .find_item(item_id)
        .ok_or(AppError::ItemNotFound(item_id))?;

    if item.quantity() < quantity {
        return Err(AppError::InsufficientStock {
            available: item.quantity(),
            requested: quantity,
        });
    }

    let total_cents = item.total_for(quantity)?;
    let item_name = item.name().to_string();
    let unit_price_cents = item.price_cents();

    let buyer_balance_before = bank.customer(buyer.account_id())?.balance_cents();
    if buyer_balance_before < total_cents {
        tracing::warn!(
            account_id = buyer.account_id(),
            item_id,
            total_cents,
            balance_cents = buyer_balance_before,
            "Purchase rejected: insufficient balance"
        );
        return Err(AppError::InsufficientBalance {
            required: total_cents,
            balance: buyer_balance_before,
        });
    }
    let seller_balance_before = bank.customer(seller.account_id())?.balance_cents();

    bank.customer_mut(buyer.account_id())?
        .withdraw(total_cents)?;

    if let Err(err) = seller.sell_item(bank, item_id, quantity) {
        // Give the buyer their money back; the sale did not happen
        bank.customer_mut(buyer.account_id())?
            .deposit(total_cents)?;
        return Err(err);
    }

    let receipt = PurchaseReceipt {
        id: Uuid::new_v4(),
        buyer_name: buyer.name().to_string(),
        seller_name: seller.name().to_string(),
        item_id,
        item_name,
        quantity,
        unit_price_cents,
        total_cents,
        buyer_balance_before,
        buyer_balance_after: bank.customer(buyer.account_id())?.balance_cents(),
        seller_balance_before,
        seller_balance_after: bank.customer(seller.account_id())?.balance_cents(),
        created_at: Utc::now(),
    };

    tracing::info!(
        purchase_id = %receipt.id,
        item_id,
        quantity,
        total_cents,
        "Purchase completed"
    );

    Ok(receipt)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{account::BankCustomer, item::Item};

    fn setup() -> (Bank, Seller, Buyer, Buyer) {
        let mut bank = Bank::new("Digital Prosperity Bank", "$");
        bank.add_customer(BankCustomer::new(101, "John Doe", 150000))
            .unwrap();
        bank.add_customer(BankCustomer::new(201, "Jane Smith", 80000))
            .unwrap();
        bank.add_customer(BankCustomer::new(202, "Michael Johnson", 20000))
            .unwrap();

        let mut seller = Seller::new(1, "John's General Store", 101);
        seller.add_item(Item::new(1001, "Notebook", 250, 50)).unwrap();
        seller.add_item(Item::new(1002, "Pencil 2B", 50, 100)).unwrap();
        seller.add_item(Item::new(1003, "Eraser", 100, 75)).unwrap();

        let jane = Buyer::new(1, "Jane", 201);
        let michael = Buyer::new(2, "Michael", 202);
        (bank, seller, jane, michael)
    }

    fn balance(bank: &Bank, id: u32) -> i64 {
        bank.find_customer(id).unwrap().balance_cents()
    }

    fn stock(seller: &Seller, id: ItemId) -> u32 {
        seller.find_item(id).unwrap().quantity()
    }

    #[test]
    fn test_successful_purchase_moves_money_and_stock() {
        let (mut bank, mut seller, jane, _) = setup();

        let receipt = process_purchase(&mut bank, &jane, &mut seller, 1001, 10).unwrap();

        assert_eq!(receipt.total_cents, 2500);
        assert_eq!(receipt.item_name, "Notebook");
        assert_eq!(receipt.buyer_balance_before, 80000);
        assert_eq!(receipt.buyer_balance_after, 77500);
        assert_eq!(receipt.seller_balance_before, 150000);
        assert_eq!(receipt.seller_balance_after, 152500);

        assert_eq!(balance(&bank, 201), 77500);
        assert_eq!(balance(&bank, 101), 152500);
        assert_eq!(stock(&seller, 1001), 40);
    }

    #[test]
    fn test_insufficient_stock_changes_nothing() {
        let (mut bank, mut seller, _, michael) = setup();

        let err = process_purchase(&mut bank, &michael, &mut seller, 1003, 80).unwrap_err();

        assert!(matches!(
            err,
            AppError::InsufficientStock {
                available: 75,
                requested: 80
            }
        ));
        assert_eq!(balance(&bank, 202), 20000);
        assert_eq!(balance(&bank, 101), 150000);
        assert_eq!(stock(&seller, 1003), 75);
    }

    #[test]
    fn test_insufficient_balance_changes_nothing() {
        let (mut bank, mut seller, _, michael) = setup();

        process_purchase(&mut bank, &michael, &mut seller, 1002, 100).unwrap();
        process_purchase(&mut bank, &michael, &mut seller, 1003, 75).unwrap();
        assert_eq!(balance(&bank, 202), 7500);
        let seller_balance = balance(&bank, 101);

        let err = process_purchase(&mut bank, &michael, &mut seller, 1001, 50).unwrap_err();

        assert!(matches!(
            err,
            AppError::InsufficientBalance {
                required: 12500,
                balance: 7500
            }
        ));
        assert_eq!(balance(&bank, 202), 7500);
        assert_eq!(balance(&bank, 101), seller_balance);
        assert_eq!(stock(&seller, 1001), 50);
    }

    #[test]
    fn test_unknown_item_changes_nothing() {
        let (mut bank, mut seller, jane, _) = setup();

        let err = process_purchase(&mut bank, &jane, &mut seller, 9999, 1).unwrap_err();

        assert!(matches!(err, AppError::ItemNotFound(9999)));
        assert_eq!(balance(&bank, 201), 80000);
        assert_eq!(balance(&bank, 101), 150000);
    }

    #[test]
    fn test_zero_quantity_rejected() {
        let (mut bank, mut seller, jane, _) = setup();

        assert!(matches!(
            process_purchase(&mut bank, &jane, &mut seller, 1001, 0),
            Err(AppError::InvalidAmount(_))
        ));
        assert_eq!(stock(&seller, 1001), 50);
    }

    #[test]
    fn test_failed_then_successful_eraser_purchase() {
        let (mut bank, mut seller, _, michael) = setup();

        assert!(process_purchase(&mut bank, &michael, &mut seller, 1003, 80).is_err());
        let receipt = process_purchase(&mut bank, &michael, &mut seller, 1003, 20).unwrap();

        assert_eq!(receipt.buyer_balance_after, 18000);
        assert_eq!(balance(&bank, 202), 18000);
        assert_eq!(stock(&seller, 1003), 55);
    }

    #[test]
    fn test_missing_buyer_account() {
        let (mut bank, mut seller, _, _) = setup();
        let ghost = Buyer::new(9, "Ghost", 999);

        assert!(matches!(
            process_purchase(&mut bank, &ghost, &mut seller, 1001, 1),
            Err(AppError::AccountNotFound(999))
        ));
        assert_eq!(stock(&seller, 1001), 50);
    }

    #[test]
    fn test_missing_seller_account_rejected_before_withdraw() {
        let mut bank = Bank::new("Test Bank", "$");
        bank.add_customer(BankCustomer::new(201, "Jane Smith", 80000))
            .unwrap();
        let mut seller = Seller::new(1, "Orphan Store", 101);
        seller.add_item(Item::new(1001, "Notebook", 250, 50)).unwrap();
        let jane = Buyer::new(1, "Jane", 201);

        assert!(matches!(
            process_purchase(&mut bank, &jane, &mut seller, 1001, 2),
            Err(AppError::AccountNotFound(101))
        ));
        assert_eq!(balance(&bank, 201), 80000);
        assert_eq!(stock(&seller, 1001), 50);
    }

    #[test]
    fn test_refused_seller_deposit_refunds_buyer() {
        let mut bank = Bank::new("Test Bank", "$");
        bank.add_customer(BankCustomer::new(101, "Full Store", i64::MAX))
            .unwrap();
        bank.add_customer(BankCustomer::new(201, "Jane Smith", 1000))
            .unwrap();
        let mut seller = Seller::new(1, "Full Store", 101);
        seller.add_item(Item::new(1001, "Notebook", 100, 5)).unwrap();
        let jane = Buyer::new(1, "Jane", 201);

        let err = process_purchase(&mut bank, &jane, &mut seller, 1001, 1).unwrap_err();

        assert!(matches!(err, AppError::InvalidAmount(_)));
        assert_eq!(balance(&bank, 201), 1000);
        assert_eq!(balance(&bank, 101), i64::MAX);
        assert_eq!(stock(&seller, 1001), 5);
    }
}
