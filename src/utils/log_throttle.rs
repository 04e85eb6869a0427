//! Rate limiting for log lines that would otherwise repeat on every scrape.

use std::collections::hash_map::Entry;
use std::collections::HashMap;
use std::sync::{Mutex, OnceLock, PoisonError};
use std::time::{Duration, Instant};

#[derive(Debug)]
struct WindowState {
    window_started_at: Instant,
    suppressed: u64,
}

static LOG_WINDOWS: OnceLock<Mutex<HashMap<&'static str, WindowState>>> = OnceLock::new();

/// Returns `Some(suppressed_count)` when a log for `key` should be emitted,
/// otherwise `None` and the event is counted as suppressed for the active window.
///
/// A zero `interval` always emits.
pub fn should_emit(key: &'static str, interval: Duration) -> Option<u64> {
    if interval.is_zero() {
        return Some(0);
    }

    let mut windows = LOG_WINDOWS
        .get_or_init(|| Mutex::new(HashMap::new()))
        .lock()
        .unwrap_or_else(PoisonError::into_inner);
    let now = Instant::now();

    let state = match windows.entry(key) {
        Entry::Occupied(entry) => entry.into_mut(),
        Entry::Vacant(entry) => {
            entry.insert(WindowState {
                window_started_at: now,
                suppressed: 0,
            });
            return Some(0);
        }
    };
    if now.duration_since(state.window_started_at) >= interval {
        let suppressed = std::mem::take(&mut state.suppressed);
        state.window_started_at = now;
        Some(suppressed)
    } else {
        state.suppressed += 1;
        None
    }
}
