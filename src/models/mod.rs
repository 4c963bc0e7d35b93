// src/models/mod.rs

//! Domain models for the extraction pipeline.
//!
//! This module contains all data structures used throughout the application,
//! organized by their primary purpose.

mod config;
mod lead;

// Re-export all public types
pub use config::{Config, ExportConfig, LoggingConfig, TimingConfig};
pub use lead::{
    DegreeCategory, EducationSlot, LeadRecord, MAX_SLOTS, MutualConnection, PastCompany, dedup_key,
};
