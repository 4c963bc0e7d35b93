// src/pipeline/mod.rs

//! Pipeline stages: accumulate, paginate, export, run.

mod context;
pub mod export;
mod paginate;
mod run;

pub use context::RunContext;
pub use paginate::run_pages;
pub use run::{RunSummary, run_extraction};
