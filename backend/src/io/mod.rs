//! # IO Module
//!
//! Interface layer between callers and the domain: command-line parsing and
//! JSON request loading. Nothing in here computes payouts.

pub mod cli;
pub mod input_loader;

pub use cli::*;
pub use input_loader::*;
