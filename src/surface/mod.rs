// src/surface/mod.rs

//! Abstraction over the rendered list-and-detail interface.
//!
//! The pipeline never holds selector strings or walks a document directly;
//! it talks to a [`Surface`] in terms of element [`Role`]s from the locator
//! contract. Production embedders bind the trait to a live page driver; this
//! crate ships [`SnapshotSurface`], a binding over captured DOM snapshots
//! that is also what the tests drive.

mod locators;
mod snapshot;

pub use locators::{CompiledLocators, LocatorSet};
pub use snapshot::{Capture, EntryCapture, PageCapture, SnapNode, SnapshotSurface};

use crate::error::Result;

/// Element roles of the locator contract.
///
/// One variant per element the pipeline needs to find: entry cards and their
/// fields on the list page, the detail overlay with its experience and
/// education lists, the mutual-connections trigger/popover, and the
/// next-page control.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Role {
    EntryCard,
    EntryName,
    EntryTitle,
    EntryCompany,
    EntrySubtitle,
    EntryLocation,
    ListScroll,
    DetailOverlay,
    ExperienceEntry,
    ExperienceCompany,
    ExperienceCompanyAlt,
    ExperienceDates,
    EducationEntry,
    EducationSchool,
    EducationDegree,
    EducationDates,
    MutualTrigger,
    MutualPopover,
    MutualScroll,
    MutualEntry,
    MutualName,
    MutualEmployer,
    MutualLocation,
    MutualClose,
    NextPage,
}

impl Role {
    /// Every role, in contract order.
    pub const ALL: [Role; 25] = [
        Role::EntryCard,
        Role::EntryName,
        Role::EntryTitle,
        Role::EntryCompany,
        Role::EntrySubtitle,
        Role::EntryLocation,
        Role::ListScroll,
        Role::DetailOverlay,
        Role::ExperienceEntry,
        Role::ExperienceCompany,
        Role::ExperienceCompanyAlt,
        Role::ExperienceDates,
        Role::EducationEntry,
        Role::EducationSchool,
        Role::EducationDegree,
        Role::EducationDates,
        Role::MutualTrigger,
        Role::MutualPopover,
        Role::MutualScroll,
        Role::MutualEntry,
        Role::MutualName,
        Role::MutualEmployer,
        Role::MutualLocation,
        Role::MutualClose,
        Role::NextPage,
    ];
}

/// Scrollable extent of a container: total content height and viewport
/// height, in pixels.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScrollExtent {
    pub content: u32,
    pub viewport: u32,
}

/// A rendered interface the pipeline can read and drive.
///
/// Queries are infallible: a missing element is a normal outcome and shows
/// up as `None` or an empty vec, never as an error. Interactions return
/// `Result` so a live driver can report real failures; those are isolated
/// per entry by the caller.
///
/// Handles are `Copy` tokens minted by the surface. A handle may go stale
/// when the surface changes underneath it (page advance, overlay close);
/// stale handles resolve to nothing.
pub trait Surface {
    /// Opaque element handle.
    type Node: Copy;

    /// True if at least one element matching the role is present.
    fn exists(&self, role: Role) -> bool {
        self.query(role).is_some()
    }

    /// First element matching the role, in document order.
    fn query(&self, role: Role) -> Option<Self::Node> {
        self.query_all(role).into_iter().next()
    }

    /// Every element matching the role, in document order.
    fn query_all(&self, role: Role) -> Vec<Self::Node>;

    /// Elements matching `role` nested under `parent`.
    fn query_within(&self, parent: Self::Node, role: Role) -> Vec<Self::Node>;

    /// Whitespace-normalized text content. `None` when the handle is stale
    /// or the element vanished.
    fn text(&self, node: Self::Node) -> Option<String>;

    /// Whether a control is disabled.
    fn is_disabled(&self, node: Self::Node) -> bool;

    /// Activate (click) an element.
    fn activate(&mut self, node: Self::Node) -> Result<()>;

    /// Click outside any open overlay, dismissing it.
    fn dismiss(&mut self) -> Result<()>;

    /// Scroll extent of a container. Zero for stale handles.
    fn scroll_extent(&self, node: Self::Node) -> ScrollExtent;

    /// Set a container's scroll offset.
    fn scroll_to(&mut self, node: Self::Node, offset: u32) -> Result<()>;

    /// Bring an element into the viewport.
    fn scroll_into_view(&mut self, node: Self::Node) -> Result<()>;

    /// Scroll pane hosting the result list, when one exists.
    fn list_scroll_pane(&self) -> Option<Self::Node> {
        self.query(Role::ListScroll)
    }
}
