//! Core types for the Glint palette.
//!
//! This crate contains shared data structures that are used across all Glint
//! crates:
//! - SearchEntry, the searchable record behind every palette row
//! - Configuration types
//! - Error types

mod config;
mod entry;
mod error;

pub use config::{
    config_dir, config_path, ensure_config_dir, AppConfig, GithubConfig, HotkeyConfig,
    SearchConfig,
};
pub use entry::{EntryKind, SearchEntry};
pub use error::ConfigError;
