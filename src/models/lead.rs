//! Lead record data structures.

use serde::{Deserialize, Serialize};

/// Compute the uniqueness key for an emitted record.
///
/// Name and employer together form the dedup boundary for the whole run,
/// for primary and mutual-derived rows alike.
pub fn dedup_key(name: &str, employer: &str) -> String {
    format!("{name}||{employer}")
}

/// Degree category inferred from a free-text degree description.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum DegreeCategory {
    HighSchool,
    Associate,
    Bachelors,
    Masters,
    Doctorate,
}

impl DegreeCategory {
    /// Classify a degree description by keyword.
    ///
    /// Keywords are checked in a fixed priority order; the first match wins
    /// and anything unmatched defaults to a bachelor's degree.
    pub fn classify(description: &str) -> Self {
        let low = description.to_lowercase();
        if low.contains("high school") {
            Self::HighSchool
        } else if low.contains("associate") {
            Self::Associate
        } else if low.contains("master") || low.contains("mfa") || low.contains("ms") {
            Self::Masters
        } else if low.contains("doctor") || low.contains("phd") {
            Self::Doctorate
        } else {
            Self::Bachelors
        }
    }

    /// Display label used in exported rows.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::HighSchool => "High School",
            Self::Associate => "Associate",
            Self::Bachelors => "Bachelor's",
            Self::Masters => "Master's",
            Self::Doctorate => "Doctorate",
        }
    }
}

/// A past employer ranked into one of the five tenure slots.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PastCompany {
    /// Company name
    pub company: String,

    /// Normalized raw date-range text
    pub dates: String,
}

/// One education history entry, mapped positionally to export columns.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct EducationSlot {
    /// School name
    pub school: String,

    /// Inferred degree category
    pub category: DegreeCategory,

    /// Joined raw date text
    pub dates: String,
}

/// A first-degree mutual connection surfaced in the detail overlay.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct MutualConnection {
    pub name: String,
    pub employer: String,
    pub location: String,
}

/// One exported row: a primary lead or a mutual-connection-derived entry.
///
/// Constructed exactly once when its source passes the dedup check and never
/// mutated afterward.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LeadRecord {
    pub name: String,
    pub title: String,
    pub employer: String,
    pub location: String,

    /// Name of the originating lead for mutual-derived rows, empty for
    /// primary rows.
    pub connected_to: String,

    /// Past employers in strictly descending tenure order, at most five.
    pub past: Vec<PastCompany>,

    /// Education history in positional slot order, at most five.
    pub education: Vec<EducationSlot>,
}

/// Maximum number of past-company and education slots per record.
pub const MAX_SLOTS: usize = 5;

impl LeadRecord {
    /// Build a row derived from a mutual connection. Enrichment columns are
    /// left empty; only the back-reference to the originating lead is set.
    pub fn from_mutual(mutual: MutualConnection, connected_to: &str) -> Self {
        Self {
            name: mutual.name,
            title: String::new(),
            employer: mutual.employer,
            location: mutual.location,
            connected_to: connected_to.to_string(),
            past: Vec::new(),
            education: Vec::new(),
        }
    }

    /// Uniqueness key for this record.
    pub fn dedup_key(&self) -> String {
        dedup_key(&self.name, &self.employer)
    }

    /// Flatten the record into ordered (column, value) pairs.
    ///
    /// Base columns come first, then `PastCompanyN`/`PastCompanyNDates` in
    /// tenure order, then the positional education columns: slot 0 maps to
    /// the Undergrad columns, slot 1 to Grad, slot `i >= 2` to `Degree{i+1}`.
    pub fn fields(&self) -> Vec<(String, String)> {
        let mut fields = vec![
            ("Name".to_string(), self.name.clone()),
            ("Title".to_string(), self.title.clone()),
            ("Employer".to_string(), self.employer.clone()),
            ("Location".to_string(), self.location.clone()),
            ("ConnectedTo".to_string(), self.connected_to.clone()),
        ];

        for (i, past) in self.past.iter().take(MAX_SLOTS).enumerate() {
            let n = i + 1;
            fields.push((format!("PastCompany{n}"), past.company.clone()));
            fields.push((format!("PastCompany{n}Dates"), past.dates.clone()));
        }

        for (i, slot) in self.education.iter().take(MAX_SLOTS).enumerate() {
            let prefix = match i {
                0 => "Undergrad".to_string(),
                1 => "Grad".to_string(),
                _ => format!("Degree{}", i + 1),
            };
            fields.push((format!("{prefix}School"), slot.school.clone()));
            fields.push((format!("{prefix}Degree"), slot.category.as_str().to_string()));
            fields.push((format!("{prefix}Dates"), slot.dates.clone()));
        }

        fields
    }
}
