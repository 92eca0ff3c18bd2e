use std::collections::{HashMap, VecDeque};
use std::sync::{Mutex, MutexGuard};
use std::time::{Duration, Instant};

/// Budget a request is counted against.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Bucket {
    Contact,
    Blog,
}

impl Bucket {
    pub fn key(&self, client_ip: &str) -> String {
        let suffix = match self {
            Bucket::Contact => "CONTACT",
            Bucket::Blog => "BLOG",
        };
        format!("{client_ip}:{suffix}")
    }
}

/// Per-key sliding window of request instants.
#[derive(Debug, Default)]
pub struct SlidingWindowLimiter {
    windows: Mutex<HashMap<String, VecDeque<Instant>>>,
}

impl SlidingWindowLimiter {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, HashMap<String, VecDeque<Instant>>> {
        self.windows
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// Records the request and returns `true` if it fits the budget.
    pub fn check(&self, key: &str, max_requests: u32, window: Duration) -> bool {
        self.check_at(key, max_requests, window, Instant::now())
    }

    pub fn check_at(&self, key: &str, max_requests: u32, window: Duration, now: Instant) -> bool {
        let mut windows = self.lock();
        let hits = windows.entry(key.to_string()).or_default();
        evict_older_than(hits, now, window);
        if hits.len() >= max_requests as usize {
            return false;
        }
        hits.push_back(now);
        true
    }

    /// Drops keys with no requests inside `widest_window` plus one minute.
    pub fn cleanup(&self, widest_window: Duration) -> usize {
        self.cleanup_at(widest_window, Instant::now())
    }

    pub fn cleanup_at(&self, widest_window: Duration, now: Instant) -> usize {
        let horizon = widest_window + Duration::from_secs(60);
        let mut windows = self.lock();
        let before = windows.len();
        windows.retain(|_, hits| {
            evict_older_than(hits, now, horizon);
            !hits.is_empty()
        });
        let removed = before - windows.len();
        if removed > 0 {
            tracing::debug!(removed, remaining = windows.len(), "rate_limit_cleanup");
        }
        removed
    }

    pub fn tracked_keys(&self) -> usize {
        self.lock().len()
    }
}

fn evict_older_than(hits: &mut VecDeque<Instant>, now: Instant, window: Duration) {
    while let Some(front) = hits.front() {
        if now.saturating_duration_since(*front) > window {
            hits.pop_front();
        } else {
            break;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MINUTE: Duration = Duration::from_secs(60);

    #[test]
    fn keys_are_scoped_by_bucket() {
        assert_eq!(Bucket::Contact.key("10.0.0.1"), "10.0.0.1:CONTACT");
        assert_eq!(Bucket::Blog.key("unknown"), "unknown:BLOG");
    }

    #[test]
    fn refuses_after_budget_until_window_slides() {
        let limiter = SlidingWindowLimiter::new();
        let start = Instant::now();
        for i in 0..3 {
            assert!(limiter.check_at("ip:CONTACT", 3, MINUTE, start + Duration::from_secs(i)));
        }
        assert!(!limiter.check_at("ip:CONTACT", 3, MINUTE, start + Duration::from_secs(10)));
        // the first hit leaves the window
        assert!(limiter.check_at("ip:CONTACT", 3, MINUTE, start + Duration::from_secs(61)));
        assert!(!limiter.check_at("ip:CONTACT", 3, MINUTE, start + Duration::from_secs(61)));
    }

    #[test]
    fn refused_requests_are_not_recorded() {
        let limiter = SlidingWindowLimiter::new();
        let start = Instant::now();
        assert!(limiter.check_at("k", 1, MINUTE, start));
        for s in 1..50 {
            assert!(!limiter.check_at("k", 1, MINUTE, start + Duration::from_secs(s)));
        }
        assert!(limiter.check_at("k", 1, MINUTE, start + Duration::from_secs(61)));
    }

    #[test]
    fn keys_are_independent() {
        let limiter = SlidingWindowLimiter::new();
        let now = Instant::now();
        assert!(limiter.check_at("a:BLOG", 1, MINUTE, now));
        assert!(!limiter.check_at("a:BLOG", 1, MINUTE, now));
        assert!(limiter.check_at("b:BLOG", 1, MINUTE, now));
        assert!(limiter.check_at("a:CONTACT", 1, MINUTE, now));
    }

    #[test]
    fn cleanup_drops_idle_keys_only() {
        let limiter = SlidingWindowLimiter::new();
        let start = Instant::now();
        limiter.check_at("old", 5, MINUTE, start);
        limiter.check_at("fresh", 5, MINUTE, start + Duration::from_secs(100));
        let removed = limiter.cleanup_at(MINUTE, start + Duration::from_secs(150));
        assert_eq!(removed, 1);
        assert_eq!(limiter.tracked_keys(), 1);
    }
}
