//! Stepped scrolling of lazily-rendered containers.

use crate::error::Result;
use crate::models::TimingConfig;
use crate::surface::Surface;
use crate::utils::sleep_ms;

/// Scroll a container to the bottom in fixed steps, let lazy content settle,
/// then reset to the top.
///
/// A container with no scrollable extent degrades to the settle/reset pauses
/// alone.
pub async fn drain<S: Surface>(
    surface: &mut S,
    container: S::Node,
    timing: &TimingConfig,
) -> Result<()> {
    let extent = surface.scroll_extent(container);
    let max = extent.content.saturating_sub(extent.viewport);

    let mut offset = 0;
    while offset < max {
        surface.scroll_to(container, offset)?;
        sleep_ms(timing.scroll_delay_ms).await;
        offset += timing.scroll_step_px;
    }

    sleep_ms(timing.scroll_settle_ms).await;
    surface.scroll_to(container, 0)?;
    sleep_ms(timing.scroll_reset_ms).await;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::surface::{Capture, LocatorSet, PageCapture, Role, SnapshotSurface};

    #[tokio::test(start_paused = true)]
    async fn test_drain_ends_at_top() {
        let capture = Capture {
            pages: vec![PageCapture {
                list: r#"<html><body><div id="search-results-container"></div></body></html>"#
                    .to_string(),
                entries: Vec::new(),
            }],
        };
        let mut surface = SnapshotSurface::new(&capture, &LocatorSet::default()).unwrap();
        let pane = surface.query(Role::ListScroll).unwrap();

        drain(&mut surface, pane, &TimingConfig::default())
            .await
            .unwrap();
        assert_eq!(surface.scroll_offset(pane), 0);
    }
}
