//! Configuration module for Cashbook
//!
//! This module provides configuration management including:
//! - XDG-compliant path resolution
//! - Upload directory resolution
//! - User settings persistence

pub mod paths;
pub mod settings;

pub use paths::{resolve_upload, CashbookPaths};
pub use settings::Settings;
