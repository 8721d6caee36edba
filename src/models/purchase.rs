//! Purchase receipts.
//!
//! A receipt is handed back to the caller of a successful purchase. It is not
//! stored anywhere; the bank and the inventory are the only state.

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::models::item::ItemId;

/// Outcome of a completed purchase.
///
/// All amounts are in cents.
#[derive(Debug, Clone)]
pub struct PurchaseReceipt {
    /// Unique identifier for this purchase
    pub id: Uuid,

    pub buyer_name: String,
    pub seller_name: String,

    pub item_id: ItemId,
    pub item_name: String,
    pub quantity: u32,
    pub unit_price_cents: i64,

    /// `unit_price_cents * quantity`
    pub total_cents: i64,

    pub buyer_balance_before: i64,
    pub buyer_balance_after: i64,
    pub seller_balance_before: i64,
    pub seller_balance_after: i64,

    /// When the purchase completed
    pub created_at: DateTime<Utc>,
}
