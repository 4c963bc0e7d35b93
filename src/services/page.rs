// src/services/page.rs

//! List-page extraction.
//!
//! Walks the entry cards currently rendered on the list page, emits one
//! primary row per new entry plus one row per new mutual connection, and
//! leaves everything else to the detail extractor.

use crate::models::{Config, LeadRecord, dedup_key};
use crate::pipeline::RunContext;
use crate::services::{DetailPanelExtractor, Enrichment, text_within};
use crate::surface::{Role, Surface};

/// Service for extracting every entry on the current page.
pub struct ListPageExtractor<'a> {
    detail: DetailPanelExtractor<'a>,
}

impl<'a> ListPageExtractor<'a> {
    pub fn new(config: &'a Config) -> Self {
        Self {
            detail: DetailPanelExtractor::new(config),
        }
    }

    /// Extract all entries currently rendered, appending rows to `ctx`.
    ///
    /// Entries are processed strictly one at a time; the detail overlay is a
    /// singleton surface and must be fully closed before the next open.
    pub async fn extract_page<S: Surface>(&self, surface: &mut S, ctx: &mut RunContext) {
        for card in surface.query_all(Role::EntryCard) {
            // The name element doubles as the overlay activation control.
            let control = surface.query_within(card, Role::EntryName).into_iter().next();
            let name = control
                .and_then(|node| surface.text(node))
                .unwrap_or_default();
            if name.is_empty() {
                continue;
            }

            let title = text_within(surface, card, Role::EntryTitle);
            let employer = {
                let company = text_within(surface, card, Role::EntryCompany);
                if company.is_empty() {
                    text_within(surface, card, Role::EntrySubtitle)
                } else {
                    company
                }
            };
            let location = text_within(surface, card, Role::EntryLocation);

            if !ctx.admit(&dedup_key(&name, &employer)) {
                continue;
            }

            let enrichment = match control {
                Some(control) => match self.detail.extract(surface, control).await {
                    Ok(enrichment) => enrichment,
                    Err(error) => {
                        log::warn!("Enrichment failed for {name}: {error}");
                        Enrichment::default()
                    }
                },
                None => Enrichment::default(),
            };

            ctx.push(LeadRecord {
                name: name.clone(),
                title,
                employer,
                location,
                connected_to: String::new(),
                past: enrichment.past,
                education: enrichment.education,
            });

            for mutual in enrichment.mutuals {
                if !ctx.admit(&dedup_key(&mutual.name, &mutual.employer)) {
                    continue;
                }
                ctx.push(LeadRecord::from_mutual(mutual, &name));
            }
        }
    }
}
