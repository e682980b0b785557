//! shelter-cli - Donation tracking and distribution allocation for food shelters
//!
//! This library records money and food donations, allocates distributions
//! against them, and reports on what is held. Money is drawn oldest donation
//! first; food is drawn soonest expiry first and never from lots that have
//! expired or have not been donated yet as of the distribution date.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `models`: Core data types (amounts, donations, distributions, lots)
//! - `inventory`: Sorted cash and food lot collections and allocation
//! - `ledger`: Append-only donation and distribution records
//! - `services`: The allocation engine tying inventories and ledgers together
//! - `reports`: Inventory and donor reports
//! - `intake`: Input validation in front of the engine
//! - `script`: YAML/JSON operation scripts and their runner
//! - `export`: JSON, YAML and CSV output
//! - `audit`: Audit logging system
//! - `config`: Configuration and path management
//! - `cli`: Command handlers for the `shelter` binary
//! - `error`: Custom error types
//!
//! # Example
//!
//! ```rust
//! use chrono::NaiveDate;
//! use shelter_cli::models::{Amount, DonationType};
//! use shelter_cli::services::AllocationEngine;
//!
//! let day = |d| NaiveDate::from_ymd_opt(2024, 1, d).unwrap();
//! let mut engine = AllocationEngine::new();
//! engine.register("Ana", DonationType::Money, Amount::from_units(100), day(1), None);
//! engine.register("Ben", DonationType::Money, Amount::from_units(50), day(2), None);
//!
//! engine.distribute(DonationType::Money, Amount::from_units(120), day(2)).unwrap();
//! assert_eq!(engine.available_on(DonationType::Money, day(2)), Amount::from_units(30));
//!
//! let err = engine
//!     .distribute(DonationType::Money, Amount::from_units(40), day(2))
//!     .unwrap_err();
//! assert!(err.is_shortfall());
//! ```

pub mod audit;
pub mod cli;
pub mod config;
pub mod error;
pub mod export;
pub mod intake;
pub mod inventory;
pub mod ledger;
pub mod models;
pub mod reports;
pub mod script;
pub mod services;

pub use error::{ShelterError, ShelterResult};
