// src/lib.rs

//! leadsnap: lead extraction and enrichment from page snapshots.

pub mod error;
pub mod models;
pub mod pipeline;
pub mod services;
pub mod surface;
pub mod utils;
