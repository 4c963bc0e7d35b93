// src/services/mod.rs

//! Extraction services.

mod detail;
mod page;

pub use detail::{DetailPanelExtractor, Enrichment};
pub use page::ListPageExtractor;

use crate::surface::{Role, Surface};

/// Text of the first element matching `role` under `parent`, or empty.
///
/// Every "empty string on absence" default in the pipeline goes through
/// here, so the substitution is explicit rather than buried in field access.
pub(crate) fn text_within<S: Surface>(surface: &S, parent: S::Node, role: Role) -> String {
    surface
        .query_within(parent, role)
        .into_iter()
        .next()
        .and_then(|node| surface.text(node))
        .unwrap_or_default()
}

/// Text of the first non-empty match across candidate roles, or empty.
pub(crate) fn first_text<S: Surface>(surface: &S, parent: S::Node, roles: &[Role]) -> String {
    roles
        .iter()
        .map(|&role| text_within(surface, parent, role))
        .find(|text| !text.is_empty())
        .unwrap_or_default()
}
