//! Shared types for Quartermaster.
//!
//! This crate provides common types used across all other crates:
//! - Credit amounts with decimal precision and display formatting
//! - Typed IDs for type-safe entity references

pub mod types;

pub use types::{CampaignId, Credits, FundId, TransactionId};
