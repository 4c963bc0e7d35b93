//! Utility functions and helpers.

pub mod dates;
pub mod scroll;
pub mod wait;

use std::time::Duration;

/// Fixed pause, in milliseconds.
///
/// Every suspension point in the pipeline goes through this or the wait
/// gate, so control always resumes on the same logical task in program
/// order.
pub async fn sleep_ms(ms: u64) {
    tokio::time::sleep(Duration::from_millis(ms)).await;
}
