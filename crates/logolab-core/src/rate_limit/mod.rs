//! Trailing-window rate limiting keyed by client identifier.
//!
//! Each identifier owns the instants of its accepted requests within the
//! window. A call prunes expired instants, then admits the request only if
//! fewer than `limit` remain. Denied requests are not recorded.
//!
//! State lives in process memory only; it is correct for a single gateway
//! instance and resets on restart.


use dashmap::DashMap;
use std::collections::VecDeque;
use std::time::{Duration, Instant};

/// Identifier used when no forwarding header names the client.
pub const UNKNOWN_CLIENT: &str = "unknown";

const CLEANUP_THRESHOLD: usize = 1000;

pub struct RateLimiter {
    limit: usize,
    window: Duration,
    windows: DashMap<String, VecDeque<Instant>>,
}

impl RateLimiter {
    pub fn new(limit: usize, window: Duration) -> Self {
        Self { limit, window, windows: DashMap::new() }
    }

    pub fn limit(&self) -> usize {
        self.limit
    }

    pub fn window(&self) -> Duration {
        self.window
    }

    /// Admit or deny a request from `identifier` now.
    pub fn allow(&self, identifier: &str) -> bool {
        self.allow_at(identifier, Instant::now())
    }

    /// Admit or deny a request from `identifier` at `now`.
    pub fn allow_at(&self, identifier: &str, now: Instant) -> bool {
        self.cleanup_if_needed(now);

        let mut entry = self.windows.entry(identifier.to_string()).or_default();
        prune(&mut entry, now, self.window);

        if entry.len() >= self.limit {
            tracing::debug!(
                "Rate limit hit for {}: {} requests in {}s window",
                identifier,
                entry.len(),
                self.window.as_secs()
            );
            return false;
        }

        entry.push_back(now);
        true
    }

    /// Requests still counted against `identifier` at `now`.
    pub fn in_window(&self, identifier: &str, now: Instant) -> usize {
        self.windows
            .get(identifier)
            .map(|w| w.iter().filter(|t| now.saturating_duration_since(**t) < self.window).count())
            .unwrap_or(0)
    }

    pub fn tracked_identifiers(&self) -> usize {
        self.windows.len()
    }

    // Drops identifiers whose windows have fully expired. Must not run while
    // an entry guard is held.
    fn cleanup_if_needed(&self, now: Instant) {
        if self.windows.len() > CLEANUP_THRESHOLD {
            let window = self.window;
            self.windows.retain(|_, instants| {
                prune(instants, now, window);
                !instants.is_empty()
            });
        }
    }
}

fn prune(instants: &mut VecDeque<Instant>, now: Instant, window: Duration) {
    instants.retain(|t| now.saturating_duration_since(*t) < window);
}
