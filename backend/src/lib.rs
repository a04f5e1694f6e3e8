//! # Earn Income Backend
//!
//! Contains all non-UI logic for the Earn Income calculator.
//!
//! ## Architecture
//!
//! ```text
//! Caller (form, CLI, bot)
//!     ↓
//! IO Layer (command line, JSON input)
//!     ↓
//! Domain Layer (income table, payout rules, summary formatting)
//! ```
//!
//! The domain layer is pure: no I/O, no shared state, and every function
//! returns the same output for the same input.

pub mod domain;
pub mod io;

pub use domain::*;
