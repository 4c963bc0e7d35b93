// src/pipeline/paginate.rs

//! Pagination control.
//!
//! Drives scroll + extraction across successive pages until no further page
//! exists. Every way a page transition can fall through — control absent,
//! control disabled, cards never reappearing, the driver refusing the click
//! — ends the loop normally with the partial result set intact. No retries.

use crate::error::Result;
use crate::models::Config;
use crate::pipeline::RunContext;
use crate::services::ListPageExtractor;
use crate::surface::{Role, Surface};
use crate::utils::{scroll, sleep_ms, wait};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum PageState {
    HasPage,
    NoMorePages,
}

/// Extract every page, starting from the one currently rendered.
pub async fn run_pages<S: Surface>(
    config: &Config,
    surface: &mut S,
    ctx: &mut RunContext,
) -> Result<()> {
    let extractor = ListPageExtractor::new(config);
    let mut page = 1usize;
    let mut state = PageState::HasPage;

    while state == PageState::HasPage {
        if let Some(pane) = surface.list_scroll_pane() {
            if let Err(error) = scroll::drain(surface, pane, &config.timing).await {
                log::warn!("List scroll failed, extracting as rendered: {error}");
            }
        }

        let before = ctx.len();
        extractor.extract_page(surface, ctx).await;
        log::info!("Page {}: {} new rows", page, ctx.len() - before);

        state = advance(config, surface).await;
        page += 1;
    }

    Ok(())
}

/// Attempt the transition to the next page.
async fn advance<S: Surface>(config: &Config, surface: &mut S) -> PageState {
    let timing = &config.timing;

    let Some(next) = surface.query(Role::NextPage) else {
        return PageState::NoMorePages;
    };
    if surface.is_disabled(next) {
        return PageState::NoMorePages;
    }

    if let Err(error) = surface.scroll_into_view(next) {
        log::warn!("Next-page control unreachable: {error}");
        return PageState::NoMorePages;
    }
    sleep_ms(timing.next_settle_ms).await;
    if let Err(error) = surface.activate(next) {
        log::warn!("Next-page activation failed: {error}");
        return PageState::NoMorePages;
    }
    sleep_ms(timing.next_load_ms).await;

    let appeared = wait::wait_for(
        surface,
        Role::EntryCard,
        timing.page_wait_ms,
        timing.poll_interval_ms,
    )
    .await;
    if appeared {
        PageState::HasPage
    } else {
        PageState::NoMorePages
    }
}
