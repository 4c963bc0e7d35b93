//! Timed presence polling.

use crate::surface::{Role, Surface};
use crate::utils::sleep_ms;

/// Poll for an element matching `role` until it appears or the timeout
/// elapses.
///
/// Returns `false` on timeout; absence is an expected outcome the caller
/// handles, never an error.
pub async fn wait_for<S: Surface>(
    surface: &S,
    role: Role,
    timeout_ms: u64,
    interval_ms: u64,
) -> bool {
    let interval = interval_ms.max(1);
    let mut waited = 0;
    while waited < timeout_ms {
        if surface.exists(role) {
            return true;
        }
        sleep_ms(interval).await;
        waited += interval;
    }
    false
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::surface::{Capture, LocatorSet, PageCapture, SnapshotSurface};

    fn empty_surface() -> SnapshotSurface {
        let capture = Capture {
            pages: vec![PageCapture {
                list: "<html><body></body></html>".to_string(),
                entries: Vec::new(),
            }],
        };
        SnapshotSurface::new(&capture, &LocatorSet::default()).unwrap()
    }

    #[tokio::test(start_paused = true)]
    async fn test_wait_times_out_on_absent_role() {
        let surface = empty_surface();
        let start = tokio::time::Instant::now();
        assert!(!wait_for(&surface, Role::EntryCard, 1000, 250).await);
        assert!(start.elapsed() >= std::time::Duration::from_millis(1000));
    }

    #[tokio::test(start_paused = true)]
    async fn test_wait_returns_immediately_when_present() {
        let capture = Capture {
            pages: vec![PageCapture {
                list: r#"<html><body><div class="entity-result"></div></body></html>"#.to_string(),
                entries: Vec::new(),
            }],
        };
        let surface = SnapshotSurface::new(&capture, &LocatorSet::default()).unwrap();
        let start = tokio::time::Instant::now();
        assert!(wait_for(&surface, Role::EntryCard, 1000, 250).await);
        assert_eq!(start.elapsed(), std::time::Duration::ZERO);
    }
}
