// src/surface/snapshot.rs

//! Surface binding over captured DOM snapshots.
//!
//! A [`Capture`] holds the HTML captured from one extraction session: one
//! document per list page, plus the detail-overlay and mutual-popover
//! documents captured for each entry. [`SnapshotSurface`] replays it as a
//! stateful [`Surface`]: activating an entry's name control opens that
//! entry's overlay pane, the mutual trigger opens the popover pane, and the
//! next-page control advances to the next captured page.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use scraper::{ElementRef, Html};
use serde::Deserialize;

use super::{CompiledLocators, LocatorSet, Role, ScrollExtent, Surface};
use crate::error::{AppError, Result};

/// Fabricated scroll geometry for snapshot panes. Three steps at the default
/// 300 px stride reach the bottom.
const PANE_CONTENT_PX: u32 = 900;
const PANE_VIEWPORT_PX: u32 = 300;

/// Captured HTML for one extraction session.
#[derive(Debug, Clone, Default)]
pub struct Capture {
    pub pages: Vec<PageCapture>,
}

/// One list page and the per-entry documents captured from it.
///
/// `entries` is aligned with the entry cards on the list page by index; a
/// card with no captured overlay simply never shows one.
#[derive(Debug, Clone, Default)]
pub struct PageCapture {
    pub list: String,
    pub entries: Vec<EntryCapture>,
}

/// Overlay and popover documents captured for a single entry.
#[derive(Debug, Clone, Default)]
pub struct EntryCapture {
    pub overlay: Option<String>,
    pub mutuals: Option<String>,
}

#[derive(Debug, Deserialize)]
struct CaptureManifest {
    pages: Vec<PageManifest>,
}

#[derive(Debug, Deserialize)]
struct PageManifest {
    list: String,
    #[serde(default)]
    entries: Vec<EntryManifest>,
}

#[derive(Debug, Deserialize, Default)]
struct EntryManifest {
    overlay: Option<String>,
    mutuals: Option<String>,
}

impl Capture {
    /// Load a capture from a directory containing `manifest.json`.
    ///
    /// The manifest lists HTML files relative to the directory:
    ///
    /// ```json
    /// { "pages": [ { "list": "page-1.html",
    ///                "entries": [ { "overlay": "p1-e0-overlay.html",
    ///                               "mutuals": "p1-e0-mutuals.html" }, {} ] } ] }
    /// ```
    pub fn load(dir: impl AsRef<Path>) -> Result<Self> {
        let dir = dir.as_ref();
        let manifest_path = dir.join("manifest.json");
        let raw = fs::read_to_string(&manifest_path).map_err(|e| {
            AppError::capture(format!("read {}: {e}", manifest_path.display()))
        })?;
        let manifest: CaptureManifest = serde_json::from_str(&raw)?;

        let read_html = |name: &str| -> Result<String> {
            let path = dir.join(name);
            fs::read_to_string(&path)
                .map_err(|e| AppError::capture(format!("read {}: {e}", path.display())))
        };

        let mut pages = Vec::with_capacity(manifest.pages.len());
        for page in &manifest.pages {
            let mut entries = Vec::with_capacity(page.entries.len());
            for entry in &page.entries {
                entries.push(EntryCapture {
                    overlay: entry.overlay.as_deref().map(&read_html).transpose()?,
                    mutuals: entry.mutuals.as_deref().map(&read_html).transpose()?,
                });
            }
            pages.push(PageCapture {
                list: read_html(&page.list)?,
                entries,
            });
        }

        Ok(Self { pages })
    }
}

/// Which snapshot document a handle points into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
enum Pane {
    List,
    Overlay,
    Popover,
}

fn pane_of(role: Role) -> Pane {
    match role {
        Role::EntryCard
        | Role::EntryName
        | Role::EntryTitle
        | Role::EntryCompany
        | Role::EntrySubtitle
        | Role::EntryLocation
        | Role::ListScroll
        | Role::NextPage => Pane::List,
        Role::DetailOverlay
        | Role::ExperienceEntry
        | Role::ExperienceCompany
        | Role::ExperienceCompanyAlt
        | Role::ExperienceDates
        | Role::EducationEntry
        | Role::EducationSchool
        | Role::EducationDegree
        | Role::EducationDates
        | Role::MutualTrigger => Pane::Overlay,
        Role::MutualPopover
        | Role::MutualScroll
        | Role::MutualEntry
        | Role::MutualName
        | Role::MutualEmployer
        | Role::MutualLocation
        | Role::MutualClose => Pane::Popover,
    }
}

/// Element handle into a snapshot pane.
///
/// Handles are positional (nth match of a role's selector, optionally scoped
/// under a parent element) and carry the generation they were minted in; a
/// page advance invalidates them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SnapNode {
    generation: u32,
    pane: Pane,
    parent: Option<(Role, u16)>,
    role: Role,
    index: u16,
}

struct PageDocs {
    list: Html,
    entries: Vec<EntryDocs>,
}

struct EntryDocs {
    overlay: Option<Html>,
    mutuals: Option<Html>,
}

/// Stateful [`Surface`] over a parsed [`Capture`].
pub struct SnapshotSurface {
    locators: CompiledLocators,
    pages: Vec<PageDocs>,
    page: usize,
    overlay: Option<usize>,
    popover: bool,
    exhausted: bool,
    generation: u32,
    offsets: HashMap<SnapNode, u32>,
}

impl SnapshotSurface {
    /// Parse a capture against a locator set.
    pub fn new(capture: &Capture, locators: &LocatorSet) -> Result<Self> {
        let compiled = locators.compile()?;
        let pages = capture
            .pages
            .iter()
            .map(|page| PageDocs {
                list: Html::parse_document(&page.list),
                entries: page
                    .entries
                    .iter()
                    .map(|entry| EntryDocs {
                        overlay: entry.overlay.as_deref().map(Html::parse_document),
                        mutuals: entry.mutuals.as_deref().map(Html::parse_document),
                    })
                    .collect(),
            })
            .collect();

        Ok(Self {
            locators: compiled,
            pages,
            page: 0,
            overlay: None,
            popover: false,
            exhausted: false,
            generation: 0,
            offsets: HashMap::new(),
        })
    }

    /// Current scroll offset of a container, for inspection in tests.
    pub fn scroll_offset(&self, node: SnapNode) -> u32 {
        self.offsets.get(&node).copied().unwrap_or(0)
    }

    fn current_entry(&self) -> Option<&EntryDocs> {
        self.pages.get(self.page)?.entries.get(self.overlay?)
    }

    fn pane_doc(&self, pane: Pane) -> Option<&Html> {
        match pane {
            Pane::List => {
                if self.exhausted || self.pages.is_empty() {
                    None
                } else {
                    Some(&self.pages[self.page].list)
                }
            }
            Pane::Overlay => self.current_entry()?.overlay.as_ref(),
            Pane::Popover => {
                if self.popover {
                    self.current_entry()?.mutuals.as_ref()
                } else {
                    None
                }
            }
        }
    }

    fn resolve(&self, node: SnapNode) -> Option<ElementRef<'_>> {
        if node.generation != self.generation {
            return None;
        }
        let doc = self.pane_doc(node.pane)?;
        let selector = self.locators.get(node.role);
        match node.parent {
            None => doc.select(selector).nth(node.index as usize),
            Some((parent_role, parent_index)) => doc
                .select(self.locators.get(parent_role))
                .nth(parent_index as usize)?
                .select(selector)
                .nth(node.index as usize),
        }
    }

    fn mint(&self, pane: Pane, parent: Option<(Role, u16)>, role: Role, index: usize) -> SnapNode {
        SnapNode {
            generation: self.generation,
            pane,
            parent,
            role,
            index: index as u16,
        }
    }
}

impl Surface for SnapshotSurface {
    type Node = SnapNode;

    fn query_all(&self, role: Role) -> Vec<SnapNode> {
        let pane = pane_of(role);
        let Some(doc) = self.pane_doc(pane) else {
            return Vec::new();
        };
        doc.select(self.locators.get(role))
            .enumerate()
            .map(|(i, _)| self.mint(pane, None, role, i))
            .collect()
    }

    fn query_within(&self, parent: SnapNode, role: Role) -> Vec<SnapNode> {
        // Handles only nest one level deep; a scoped parent cannot itself
        // be scoped.
        if parent.parent.is_some() {
            return Vec::new();
        }
        let Some(parent_el) = self.resolve(parent) else {
            return Vec::new();
        };
        parent_el
            .select(self.locators.get(role))
            .enumerate()
            .map(|(i, _)| self.mint(parent.pane, Some((parent.role, parent.index)), role, i))
            .collect()
    }

    fn text(&self, node: SnapNode) -> Option<String> {
        let element = self.resolve(node)?;
        let joined: String = element.text().collect::<Vec<_>>().join(" ");
        Some(joined.split_whitespace().collect::<Vec<_>>().join(" "))
    }

    fn is_disabled(&self, node: SnapNode) -> bool {
        self.resolve(node).is_some_and(|el| {
            el.value().attr("disabled").is_some()
                || el.value().attr("aria-disabled") == Some("true")
        })
    }

    fn activate(&mut self, node: SnapNode) -> Result<()> {
        if self.resolve(node).is_none() {
            return Err(AppError::surface(
                "activate",
                format!("stale or missing element for {:?}", node.role),
            ));
        }
        match node.role {
            Role::EntryName => {
                // The nth name control opens the nth entry's overlay. Scoped
                // handles carry the card index directly.
                let entry = match node.parent {
                    Some((Role::EntryCard, card_index)) => card_index,
                    _ => node.index,
                };
                self.overlay = Some(entry as usize);
                self.popover = false;
            }
            Role::MutualTrigger => self.popover = true,
            Role::MutualClose => self.popover = false,
            Role::NextPage => {
                if self.page + 1 < self.pages.len() {
                    self.page += 1;
                } else {
                    // The control was present but no further page was
                    // captured; the list never repopulates.
                    self.exhausted = true;
                }
                self.overlay = None;
                self.popover = false;
                self.generation += 1;
                self.offsets.clear();
            }
            _ => {}
        }
        Ok(())
    }

    fn dismiss(&mut self) -> Result<()> {
        self.overlay = None;
        self.popover = false;
        Ok(())
    }

    fn scroll_extent(&self, node: SnapNode) -> ScrollExtent {
        if self.resolve(node).is_some() {
            ScrollExtent {
                content: PANE_CONTENT_PX,
                viewport: PANE_VIEWPORT_PX,
            }
        } else {
            ScrollExtent::default()
        }
    }

    fn scroll_to(&mut self, node: SnapNode, offset: u32) -> Result<()> {
        if self.resolve(node).is_some() {
            self.offsets.insert(node, offset);
        }
        Ok(())
    }

    fn scroll_into_view(&mut self, _node: SnapNode) -> Result<()> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn list_page(cards: &str, next: bool) -> String {
        let next_button = if next {
            r#"<button aria-label="Next">Next</button>"#
        } else {
            ""
        };
        format!(
            r#"<html><body><div id="search-results-container">{cards}</div>{next_button}</body></html>"#
        )
    }

    fn card(name: &str) -> String {
        format!(
            r#"<div class="entity-result"><span data-anonymize="person-name">{name}</span></div>"#
        )
    }

    fn overlay(body: &str) -> String {
        format!(
            r#"<html><body><div id="inline-sidesheet-outlet"><div class="_inline-sidesheet_4y6x1f">{body}</div></div></body></html>"#
        )
    }

    fn surface(capture: Capture) -> SnapshotSurface {
        SnapshotSurface::new(&capture, &LocatorSet::default()).unwrap()
    }

    #[test]
    fn test_query_cards_and_text() {
        let capture = Capture {
            pages: vec![PageCapture {
                list: list_page(&(card("Ada") + &card("Grace")), false),
                entries: Vec::new(),
            }],
        };
        let surface = surface(capture);

        let cards = surface.query_all(Role::EntryCard);
        assert_eq!(cards.len(), 2);
        let name = surface.query_within(cards[1], Role::EntryName)[0];
        assert_eq!(surface.text(name).as_deref(), Some("Grace"));
    }

    #[test]
    fn test_overlay_opens_on_name_activation() {
        let capture = Capture {
            pages: vec![PageCapture {
                list: list_page(&card("Ada"), false),
                entries: vec![EntryCapture {
                    overlay: Some(overlay("")),
                    mutuals: None,
                }],
            }],
        };
        let mut surface = surface(capture);

        assert!(!surface.exists(Role::DetailOverlay));
        let cards = surface.query_all(Role::EntryCard);
        let name = surface.query_within(cards[0], Role::EntryName)[0];
        surface.activate(name).unwrap();
        assert!(surface.exists(Role::DetailOverlay));

        surface.dismiss().unwrap();
        assert!(!surface.exists(Role::DetailOverlay));
    }

    #[test]
    fn test_missing_overlay_never_appears() {
        let capture = Capture {
            pages: vec![PageCapture {
                list: list_page(&card("Ada"), false),
                entries: vec![EntryCapture::default()],
            }],
        };
        let mut surface = surface(capture);

        let cards = surface.query_all(Role::EntryCard);
        let name = surface.query_within(cards[0], Role::EntryName)[0];
        surface.activate(name).unwrap();
        assert!(!surface.exists(Role::DetailOverlay));
    }

    #[test]
    fn test_next_page_advances_and_invalidates_handles() {
        let capture = Capture {
            pages: vec![
                PageCapture {
                    list: list_page(&card("Ada"), true),
                    entries: Vec::new(),
                },
                PageCapture {
                    list: list_page(&card("Grace"), false),
                    entries: Vec::new(),
                },
            ],
        };
        let mut surface = surface(capture);

        let stale = surface.query_all(Role::EntryCard)[0];
        let next = surface.query(Role::NextPage).unwrap();
        surface.activate(next).unwrap();

        assert!(surface.text(stale).is_none());
        assert!(surface.query(Role::NextPage).is_none());
        let name = surface.query(Role::EntryName).unwrap();
        assert_eq!(surface.text(name).as_deref(), Some("Grace"));
    }

    #[test]
    fn test_next_page_past_last_capture_empties_the_list() {
        let capture = Capture {
            pages: vec![PageCapture {
                list: list_page(&card("Ada"), true),
                entries: Vec::new(),
            }],
        };
        let mut surface = surface(capture);

        let next = surface.query(Role::NextPage).unwrap();
        surface.activate(next).unwrap();
        assert!(!surface.exists(Role::EntryCard));
    }

    #[test]
    fn test_disabled_next_control() {
        let html = r#"<html><body><button aria-label="Next" disabled>Next</button></body></html>"#;
        let capture = Capture {
            pages: vec![PageCapture {
                list: html.to_string(),
                entries: Vec::new(),
            }],
        };
        let surface = surface(capture);
        let next = surface.query(Role::NextPage).unwrap();
        assert!(surface.is_disabled(next));
    }
}
