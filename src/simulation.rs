//! The scripted marketplace scenario run at startup.
//!
//! Everything is constructed here and passed down by reference. Business
//! failures are reported on the output and the script carries on; only a
//! missing seeded account stops the run.

use std::io::{self, Write};

use crate::{
    config::Config,
    error::AppError,
    models::{
        account::{AccountId, BankCustomer},
        buyer::Buyer,
        item::{Item, ItemId},
        purchase::PurchaseReceipt,
    },
    services::{bank::Bank, purchase_service, seller::Seller},
};

const SELLER_ACCOUNT: AccountId = 101;
const JANE_ACCOUNT: AccountId = 201;
const MICHAEL_ACCOUNT: AccountId = 202;

const RULE: &str = "=============================================";

/// State left behind by a completed run.
#[derive(Debug)]
pub struct Marketplace {
    pub bank: Bank,
    pub seller: Seller,
    pub buyers: Vec<Buyer>,
}

/// Run the whole scenario, writing the narrative to `out`.
///
/// # Errors
///
/// - `AccountNotFound`: one of the seeded accounts did not resolve
/// - `Io`: `out` could not be written
pub fn run<W: Write>(config: &Config, out: &mut W) -> Result<Marketplace, AppError> {
    writeln!(out, "--- System Initialization ---")?;
    let mut bank = Bank::new(&config.bank_name, &config.currency_symbol);

    bank.add_customer(BankCustomer::new(SELLER_ACCOUNT, "John Doe", 150000))?;
    bank.add_customer(BankCustomer::new(JANE_ACCOUNT, "Jane Smith", 80000))?;
    bank.add_customer(BankCustomer::new(MICHAEL_ACCOUNT, "Michael Johnson", 20000))?;

    bank.write_all_customers(out)?;

    if let Err(err) = resolve_accounts(&bank, &[SELLER_ACCOUNT, JANE_ACCOUNT, MICHAEL_ACCOUNT]) {
        writeln!(
            out,
            "Error: Failed to find customer accounts. Program terminated."
        )?;
        return Err(err);
    }

    let mut seller = Seller::new(1, "John's General Store", SELLER_ACCOUNT);
    let jane = Buyer::new(1, "Jane", JANE_ACCOUNT);
    let michael = Buyer::new(2, "Michael", MICHAEL_ACCOUNT);

    writeln!(out, "\n--- Seller Adding Inventory ---")?;
    seller.add_item(Item::new(1001, "Notebook", 250, 50))?;
    seller.add_item(Item::new(1002, "Pencil 2B", 50, 100))?;
    seller.add_item(Item::new(1003, "Eraser", 100, 75))?;

    seller.write_inventory(out, &bank)?;
    seller.write_seller_info(out, &bank)?;

    run_purchase(out, &mut bank, &jane, &mut seller, 1001, 10)?;
    run_purchase(out, &mut bank, &jane, &mut seller, 1002, 5)?;
    // More erasers than are on hand
    run_purchase(out, &mut bank, &michael, &mut seller, 1003, 80)?;
    run_purchase(out, &mut bank, &michael, &mut seller, 1003, 20)?;

    writeln!(out, "\n--- Seller Updating Item Prices ---")?;
    match seller.update_item_price(1001, 275) {
        Ok(()) => writeln!(
            out,
            "Price of item 1001 updated to {}",
            bank.money(275)
        )?,
        Err(err) => writeln!(out, "Price update failed: {err}")?,
    }

    writeln!(out, "\n--- FINAL SYSTEM STATUS ---")?;
    seller.write_inventory(out, &bank)?;
    bank.write_all_customers(out)?;
    bank.write_bank_info(out)?;

    writeln!(out, "\n--- SIMULATION COMPLETE ---")?;

    Ok(Marketplace {
        bank,
        seller,
        buyers: vec![jane, michael],
    })
}

/// Check every id resolves to an account held by `bank`.
pub fn resolve_accounts(bank: &Bank, ids: &[AccountId]) -> Result<(), AppError> {
    for &id in ids {
        bank.customer(id)?;
    }
    Ok(())
}

/// Run one purchase and report the outcome on `out`.
///
/// Business failures are written out and swallowed; only output errors
/// are returned.
pub fn run_purchase<W: Write>(
    out: &mut W,
    bank: &mut Bank,
    buyer: &Buyer,
    seller: &mut Seller,
    item_id: ItemId,
    quantity: u32,
) -> io::Result<Option<PurchaseReceipt>> {
    writeln!(out, "\n{RULE}")?;
    writeln!(
        out,
        "PROCESSING PURCHASE: {} buying from {}",
        buyer.name(),
        seller.name()
    )?;
    writeln!(out, "{RULE}")?;

    match purchase_service::process_purchase(bank, buyer, seller, item_id, quantity) {
        Ok(receipt) => {
            writeln!(out, "Validation successful. Starting transaction process...")?;
            writeln!(out, "\n--- TRANSACTION SUCCESSFUL ---")?;
            writeln!(
                out,
                "{} successfully bought {} {} for {}",
                receipt.buyer_name,
                receipt.quantity,
                receipt.item_name,
                bank.money(receipt.total_cents)
            )?;
            writeln!(
                out,
                "{}'s new balance: {}",
                receipt.buyer_name,
                bank.money(receipt.buyer_balance_after)
            )?;
            writeln!(
                out,
                "{}'s new balance: {}",
                receipt.seller_name,
                bank.money(receipt.seller_balance_after)
            )?;
            writeln!(
                out,
                "Receipt {} at {}",
                receipt.id,
                receipt.created_at.format("%Y-%m-%d %H:%M:%S UTC")
            )?;
            writeln!(out, "{RULE}")?;
            Ok(Some(receipt))
        }
        Err(err) => {
            report_failure(out, bank, buyer, seller, item_id, &err)?;
            Ok(None)
        }
    }
}

fn report_failure<W: Write>(
    out: &mut W,
    bank: &Bank,
    buyer: &Buyer,
    seller: &Seller,
    item_id: ItemId,
    err: &AppError,
) -> io::Result<()> {
    match err {
        AppError::ItemNotFound(_) => writeln!(
            out,
            "Transaction Failed: Item with ID {} not found in store {}.",
            item_id,
            seller.name()
        ),
        AppError::InsufficientStock {
            available,
            requested,
        } => writeln!(
            out,
            "Transaction Failed: Insufficient stock. Current stock: {available}, requested: {requested}."
        ),
        AppError::InsufficientBalance { required, balance } => {
            writeln!(
                out,
                "Transaction Failed: {} has insufficient balance.",
                buyer.name()
            )?;
            writeln!(
                out,
                "Required: {}, Balance: {}",
                bank.money(*required),
                bank.money(*balance)
            )
        }
        other => writeln!(out, "Transaction Failed: {other}."),
    }
}
