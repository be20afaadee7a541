//! Data model and display helpers for the PumaPay campus wallet.

pub mod chain;
pub mod models;
pub mod types;
