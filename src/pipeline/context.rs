// src/pipeline/context.rs

//! Shared run state threaded through every pipeline stage.

use std::collections::HashSet;

use crate::models::LeadRecord;

/// Row accumulator and dedup set for one extraction run.
///
/// Owned by the single control flow and passed explicitly so each stage can
/// be tested with an injected context. The seen-set only ever grows; the
/// first writer of a key wins and later sightings are skipped entirely.
#[derive(Debug, Default)]
pub struct RunContext {
    rows: Vec<LeadRecord>,
    seen: HashSet<String>,
}

impl RunContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// Claim a dedup key. Returns `true` if the key was unseen, `false` if
    /// some earlier record already owns it.
    pub fn admit(&mut self, key: &str) -> bool {
        self.seen.insert(key.to_string())
    }

    /// Append an emitted record.
    pub fn push(&mut self, record: LeadRecord) {
        self.rows.push(record);
    }

    /// All rows emitted so far, in emission order.
    pub fn rows(&self) -> &[LeadRecord] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}
