//! Toy marketplace: a bank, a seller with an inventory, and buyers.
//!
//! The binary runs [`simulation::run`]; everything it uses is public here so
//! the pieces can be driven on their own.

pub mod config;
pub mod error;
pub mod models;
pub mod services;
pub mod simulation;
