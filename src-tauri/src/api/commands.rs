//! Command modules for the Tauri application
//!
//! - `config`: config file access for the frontend bindings

pub mod config;
