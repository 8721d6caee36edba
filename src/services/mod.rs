//! Business logic services.
//!
//! The bank and the seller own the mutable state; the purchase service
//! validates an order and moves money and stock between them.

pub mod bank;
pub mod purchase_service;
pub mod seller;
