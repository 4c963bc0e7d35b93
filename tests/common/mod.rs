//! HTML fixtures mimicking the documented locator contract.

/// A list-page entry card.
pub struct CardSpec<'a> {
    pub name: &'a str,
    pub title: &'a str,
    pub company: &'a str,
    pub subtitle: &'a str,
    pub location: &'a str,
}

impl Default for CardSpec<'_> {
    fn default() -> Self {
        Self {
            name: "",
            title: "",
            company: "",
            subtitle: "",
            location: "",
        }
    }
}

pub fn card(spec: &CardSpec) -> String {
    let mut html = String::from(r#"<div class="entity-result">"#);
    if !spec.name.is_empty() {
        html.push_str(&format!(
            r#"<a><span data-anonymize="person-name">{}</span></a>"#,
            spec.name
        ));
    }
    if !spec.title.is_empty() {
        html.push_str(&format!(
            r#"<span data-anonymize="title">{}</span>"#,
            spec.title
        ));
    }
    if !spec.company.is_empty() {
        html.push_str(&format!(
            r#"<a data-anonymize="company-name">{}</a>"#,
            spec.company
        ));
    }
    if !spec.subtitle.is_empty() {
        html.push_str(&format!(
            r#"<div class="entity-result__secondary-subtitle">{}</div>"#,
            spec.subtitle
        ));
    }
    if !spec.location.is_empty() {
        html.push_str(&format!(
            r#"<span data-anonymize="location">{}</span>"#,
            spec.location
        ));
    }
    html.push_str("</div>");
    html
}

pub fn simple_card(name: &str, company: &str) -> String {
    card(&CardSpec {
        name,
        company,
        ..CardSpec::default()
    })
}

pub fn list_page(cards: &[String], has_next: bool) -> String {
    let next = if has_next {
        r#"<button aria-label="Next">Next</button>"#
    } else {
        ""
    };
    format!(
        r#"<html><body><div id="search-results-container">{}</div>{next}</body></html>"#,
        cards.join("")
    )
}

/// A detail-overlay document.
///
/// `experience` entries are `(company, date range)`; `education` entries are
/// `(school, degree text, date elements)`.
pub fn overlay(
    experience: &[(&str, &str)],
    education: &[(&str, &str, &[&str])],
    mutual_trigger: bool,
) -> String {
    let mut body = String::new();

    if !experience.is_empty() {
        body.push_str(r#"<section data-sn-view-name="feature-lead-experience"><ul>"#);
        for (company, dates) in experience {
            body.push_str(&format!(
                r#"<li class="_experience-entry_1irc72"><span data-anonymize="company-name">{company}</span><span class="HLinTtoHpbFphgzFIWpGxOwcttNtJmiubzhA">{dates}</span></li>"#
            ));
        }
        body.push_str("</ul></section>");
    }

    if !education.is_empty() {
        body.push_str(r#"<section data-sn-view-name="feature-lead-education"><ul>"#);
        for (school, degree, dates) in education {
            let times: String = dates.iter().map(|d| format!("<time>{d}</time>")).collect();
            body.push_str(&format!(
                r#"<li><h3 data-anonymize="education-name">{school}</h3><p class="_bodyText_1e5nen"><span>{degree}</span></p>{times}</li>"#
            ));
        }
        body.push_str("</ul></section>");
    }

    if mutual_trigger {
        body.push_str(
            r#"<button data-control-name="search_spotlight_second_degree_connection">Mutual connections</button>"#,
        );
    }

    format!(
        r#"<html><body><div id="inline-sidesheet-outlet"><div class="_inline-sidesheet_4y6x1f">{body}</div></div></body></html>"#
    )
}

/// A mutual-connections popover document. Entries are
/// `(name, employer, location)`.
pub fn mutual_popover(mutuals: &[(&str, &str, &str)]) -> String {
    let items: String = mutuals
        .iter()
        .map(|(name, employer, location)| {
            let name_el = if name.is_empty() {
                String::new()
            } else {
                format!(r#"<a data-anonymize="person-name">{name}</a>"#)
            };
            format!(
                r#"<li class="flex align-items-flex-start">{name_el}<a data-anonymize="company-name">{employer}</a><span data-anonymize="location">{location}</span></li>"#
            )
        })
        .collect();
    format!(
        r#"<html><body><div class="_tooltip-content_leb3qf _visible_leb3qf"><div class="_content-scroll-container_1loqoh"><ul>{items}</ul></div><button data-x--button="close-spotlight-1">Close</button></div></body></html>"#
    )
}
