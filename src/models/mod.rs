//! Plain data held by the bank and the seller.

/// Bank customer account model
pub mod account;
/// Buyer identity model
pub mod buyer;
/// Inventory item model
pub mod item;
/// Purchase receipt model
pub mod purchase;
