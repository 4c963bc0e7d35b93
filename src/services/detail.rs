// src/services/detail.rs

//! Detail-overlay enrichment extraction.
//!
//! Opens the transient per-entry overlay and pulls the three enrichment
//! groups out of it: top-tenure past employers, categorized education
//! history, and first-degree mutual connections. Element absence at any
//! sub-step degrades that sub-step to empty output.

use crate::error::Result;
use crate::models::{
    Config, DegreeCategory, EducationSlot, MAX_SLOTS, MutualConnection, PastCompany,
};
use crate::services::{first_text, text_within};
use crate::surface::{Role, Surface};
use crate::utils::dates::{self, DateRange};
use crate::utils::{scroll, sleep_ms, wait};

/// Enrichment data extracted from one entry's detail overlay.
#[derive(Debug, Default)]
pub struct Enrichment {
    pub past: Vec<PastCompany>,
    pub education: Vec<EducationSlot>,
    pub mutuals: Vec<MutualConnection>,
}

struct EmploymentEntry {
    company: String,
    range: DateRange,
}

/// Service for extracting enrichment data from the detail overlay.
pub struct DetailPanelExtractor<'a> {
    config: &'a Config,
}

impl<'a> DetailPanelExtractor<'a> {
    pub fn new(config: &'a Config) -> Self {
        Self { config }
    }

    /// Open the overlay behind `control`, extract all three enrichment
    /// groups, and dismiss it.
    ///
    /// An overlay that never appears within its timeout yields empty
    /// enrichment; that is not a failure.
    pub async fn extract<S: Surface>(&self, surface: &mut S, control: S::Node) -> Result<Enrichment> {
        let timing = &self.config.timing;

        surface.scroll_into_view(control)?;
        surface.activate(control)?;
        sleep_ms(timing.activate_pause_ms).await;

        let appeared = wait::wait_for(
            surface,
            Role::DetailOverlay,
            timing.overlay_wait_ms,
            timing.poll_interval_ms,
        )
        .await;
        if !appeared {
            return Ok(Enrichment::default());
        }
        let Some(panel) = surface.query(Role::DetailOverlay) else {
            return Ok(Enrichment::default());
        };

        // Force lazy overlay content to render before reading it.
        scroll::drain(surface, panel, timing).await?;

        let past = self.collect_experience(surface);
        let education = self.collect_education(surface);
        let mutuals = self.collect_mutuals(surface).await?;

        surface.dismiss()?;
        sleep_ms(timing.dismiss_pause_ms).await;

        Ok(Enrichment {
            past,
            education,
            mutuals,
        })
    }

    /// Collect past employers and keep the five longest tenures.
    fn collect_experience<S: Surface>(&self, surface: &S) -> Vec<PastCompany> {
        let mut entries = Vec::new();
        for item in surface.query_all(Role::ExperienceEntry) {
            let company = first_text(
                surface,
                item,
                &[Role::ExperienceCompany, Role::ExperienceCompanyAlt],
            );
            if company.is_empty() {
                continue;
            }
            let raw = text_within(surface, item, Role::ExperienceDates);
            entries.push(EmploymentEntry {
                company,
                range: dates::parse_range(&raw),
            });
        }

        entries.sort_by(|a, b| b.range.months.cmp(&a.range.months));
        entries.truncate(MAX_SLOTS);
        entries
            .into_iter()
            .map(|entry| PastCompany {
                company: entry.company,
                dates: entry.range.range_text,
            })
            .collect()
    }

    /// Collect up to five education entries in display order.
    fn collect_education<S: Surface>(&self, surface: &S) -> Vec<EducationSlot> {
        surface
            .query_all(Role::EducationEntry)
            .into_iter()
            .take(MAX_SLOTS)
            .map(|item| {
                let dates: Vec<String> = surface
                    .query_within(item, Role::EducationDates)
                    .into_iter()
                    .filter_map(|node| surface.text(node))
                    .collect();
                EducationSlot {
                    school: text_within(surface, item, Role::EducationSchool),
                    category: DegreeCategory::classify(&text_within(
                        surface,
                        item,
                        Role::EducationDegree,
                    )),
                    dates: dates.join(" – "),
                }
            })
            .collect()
    }

    /// Open the mutual-connections popover and collect its entries.
    ///
    /// A missing trigger or a popover that never appears yields an empty
    /// list.
    async fn collect_mutuals<S: Surface>(&self, surface: &mut S) -> Result<Vec<MutualConnection>> {
        let timing = &self.config.timing;

        let Some(trigger) = surface.query(Role::MutualTrigger) else {
            return Ok(Vec::new());
        };
        surface.activate(trigger)?;
        sleep_ms(timing.mutual_pause_ms).await;

        let appeared = wait::wait_for(
            surface,
            Role::MutualPopover,
            timing.popover_wait_ms,
            timing.poll_interval_ms,
        )
        .await;
        if !appeared {
            return Ok(Vec::new());
        }

        if let Some(scroll_box) = surface.query(Role::MutualScroll) {
            scroll::drain(surface, scroll_box, timing).await?;
        }

        let mut mutuals = Vec::new();
        for item in surface.query_all(Role::MutualEntry) {
            let name = text_within(surface, item, Role::MutualName);
            if name.is_empty() {
                continue;
            }
            mutuals.push(MutualConnection {
                name,
                employer: text_within(surface, item, Role::MutualEmployer),
                location: text_within(surface, item, Role::MutualLocation),
            });
        }

        if let Some(close) = surface.query(Role::MutualClose) {
            surface.activate(close)?;
            sleep_ms(timing.dismiss_pause_ms).await;
        }

        Ok(mutuals)
    }
}
