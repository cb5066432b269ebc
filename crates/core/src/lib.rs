//! Core business logic for Quartermaster.
//!
//! This crate contains pure business logic with ZERO web or database dependencies.
//! All domain types, validation rules, and calculations live here.
//!
//! # Modules
//!
//! - `ledger` - Fund ledger computations (running balances, summaries, validation)

pub mod ledger;
