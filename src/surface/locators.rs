// src/surface/locators.rs

//! CSS selectors for the documented element-locator contract.

use std::collections::HashMap;

use scraper::Selector;
use serde::{Deserialize, Serialize};

use super::Role;
use crate::error::{AppError, Result};

/// CSS selectors, one per element role.
///
/// Defaults are the documented contract of the host interface. A deployment
/// can override individual selectors in the `[locators]` config section; the
/// pipeline itself never sees these strings, only compiled selectors keyed
/// by role.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LocatorSet {
    pub entry_card: String,
    pub entry_name: String,
    pub entry_title: String,
    pub entry_company: String,
    pub entry_subtitle: String,
    pub entry_location: String,
    pub list_scroll: String,
    pub detail_overlay: String,
    pub experience_entry: String,
    pub experience_company: String,
    pub experience_company_alt: String,
    pub experience_dates: String,
    pub education_entry: String,
    pub education_school: String,
    pub education_degree: String,
    pub education_dates: String,
    pub mutual_trigger: String,
    pub mutual_popover: String,
    pub mutual_scroll: String,
    pub mutual_entry: String,
    pub mutual_name: String,
    pub mutual_employer: String,
    pub mutual_location: String,
    pub mutual_close: String,
    pub next_page: String,
}

impl Default for LocatorSet {
    fn default() -> Self {
        Self {
            entry_card: "div.entity-result, li.artdeco-list__item".into(),
            entry_name: r#"span[data-anonymize="person-name"]"#.into(),
            entry_title: r#"span[data-anonymize="title"]"#.into(),
            entry_company: r#"a[data-anonymize="company-name"]"#.into(),
            entry_subtitle: ".entity-result__secondary-subtitle".into(),
            entry_location: r#"span[data-anonymize="location"]"#.into(),
            list_scroll: "#search-results-container".into(),
            detail_overlay: "#inline-sidesheet-outlet div._inline-sidesheet_4y6x1f".into(),
            experience_entry:
                r#"section[data-sn-view-name="feature-lead-experience"] li._experience-entry_1irc72"#
                    .into(),
            experience_company: r#"[data-anonymize="company-name"]"#.into(),
            experience_company_alt: r#"h2[data-anonymize="company-name"]"#.into(),
            experience_dates: "span.HLinTtoHpbFphgzFIWpGxOwcttNtJmiubzhA".into(),
            education_entry: r#"section[data-sn-view-name="feature-lead-education"] li"#.into(),
            education_school: r#"h3[data-anonymize="education-name"]"#.into(),
            education_degree: "p._bodyText_1e5nen span".into(),
            education_dates: "time".into(),
            mutual_trigger:
                r#"button[data-control-name="search_spotlight_second_degree_connection"]"#.into(),
            mutual_popover: "div._tooltip-content_leb3qf._visible_leb3qf".into(),
            mutual_scroll: "div._content-scroll-container_1loqoh".into(),
            mutual_entry: "li.flex.align-items-flex-start".into(),
            mutual_name: r#"a[data-anonymize="person-name"]"#.into(),
            mutual_employer: r#"a[data-anonymize="company-name"]"#.into(),
            mutual_location: r#"span[data-anonymize="location"]"#.into(),
            mutual_close: r#"button[data-x--button^="close-spotlight"]"#.into(),
            next_page: r#"button[aria-label="Next"], button.artdeco-pagination__button--next"#
                .into(),
        }
    }
}

impl LocatorSet {
    /// Selector string for a role.
    pub fn selector_for(&self, role: Role) -> &str {
        match role {
            Role::EntryCard => &self.entry_card,
            Role::EntryName => &self.entry_name,
            Role::EntryTitle => &self.entry_title,
            Role::EntryCompany => &self.entry_company,
            Role::EntrySubtitle => &self.entry_subtitle,
            Role::EntryLocation => &self.entry_location,
            Role::ListScroll => &self.list_scroll,
            Role::DetailOverlay => &self.detail_overlay,
            Role::ExperienceEntry => &self.experience_entry,
            Role::ExperienceCompany => &self.experience_company,
            Role::ExperienceCompanyAlt => &self.experience_company_alt,
            Role::ExperienceDates => &self.experience_dates,
            Role::EducationEntry => &self.education_entry,
            Role::EducationSchool => &self.education_school,
            Role::EducationDegree => &self.education_degree,
            Role::EducationDates => &self.education_dates,
            Role::MutualTrigger => &self.mutual_trigger,
            Role::MutualPopover => &self.mutual_popover,
            Role::MutualScroll => &self.mutual_scroll,
            Role::MutualEntry => &self.mutual_entry,
            Role::MutualName => &self.mutual_name,
            Role::MutualEmployer => &self.mutual_employer,
            Role::MutualLocation => &self.mutual_location,
            Role::MutualClose => &self.mutual_close,
            Role::NextPage => &self.next_page,
        }
    }

    /// Parse every selector in the set.
    pub fn compile(&self) -> Result<CompiledLocators> {
        let mut selectors = HashMap::with_capacity(Role::ALL.len());
        for role in Role::ALL {
            let raw = self.selector_for(role);
            let parsed =
                Selector::parse(raw).map_err(|e| AppError::selector(raw, format!("{e:?}")))?;
            selectors.insert(role, parsed);
        }
        Ok(CompiledLocators { selectors })
    }
}

/// Parsed selectors keyed by role.
#[derive(Debug, Clone)]
pub struct CompiledLocators {
    selectors: HashMap<Role, Selector>,
}

impl CompiledLocators {
    /// Compiled selector for a role.
    pub fn get(&self, role: Role) -> &Selector {
        // compile() populates every role
        &self.selectors[&role]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_locators_compile() {
        assert!(LocatorSet::default().compile().is_ok());
    }

    #[test]
    fn test_invalid_selector_is_reported() {
        let mut locators = LocatorSet::default();
        locators.entry_card = "[[invalid".into();
        assert!(locators.compile().is_err());
    }

    #[test]
    fn test_override_from_toml_keeps_other_defaults() {
        let locators: LocatorSet = toml::from_str(r#"entry_card = "div.lead-card""#).unwrap();
        assert_eq!(locators.entry_card, "div.lead-card");
        assert_eq!(locators.education_dates, "time");
    }
}
