//! # Domain Module
//!
//! Contains all business logic for the Earn Income calculator.
//!
//! ## Module Organization
//!
//! - **models**: The Earn Income table, the level 20 critical success bonus and lookup errors
//! - **earnings_service**: Daily and per-period payout rules, including Experienced Professional
//! - **summary_service**: Currency, date range and Discord summary formatting
//! - **income_form**: Request defaults and caller-side validation
//!
//! ## Business Rules
//!
//! - Critical successes pay as a success one task level higher
//! - A critical success on a level 20 task pays a fixed bonus per proficiency
//! - Critical failures pay nothing unless Experienced Professional upgrades them
//! - All money is whole copper pieces

pub mod earnings_service;
pub mod income_form;
pub mod models;
pub mod summary_service;

pub use earnings_service::*;
pub use income_form::*;
pub use summary_service::*;
