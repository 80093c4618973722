//! Provider rate-limit snapshot rendered on the homepage.

use chrono::{DateTime, Utc};

/// Snapshot of the identity provider's call budget.
///
/// Derived from a live provider call on each homepage render; never cached or
/// persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RateLimitStatus {
    /// Calls left in the current window.
    pub remaining_hits: u32,
    /// Value the budget resets to.
    pub hourly_limit: u32,
    /// When the window resets.
    pub reset_at: DateTime<Utc>,
}

impl RateLimitStatus {
    /// Whole minutes until the rate-limit window resets, clamped at zero.
    pub fn minutes_until_reset(&self, now: DateTime<Utc>) -> i64 {
        (self.reset_at - now).num_minutes().max(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeDelta;

    fn status_resetting_in(seconds: i64) -> (RateLimitStatus, DateTime<Utc>) {
        let now = Utc::now();
        let status = RateLimitStatus {
            remaining_hits: 123,
            hourly_limit: 150,
            reset_at: now + TimeDelta::seconds(seconds),
        };
        (status, now)
    }

    #[test]
    fn test_minutes_until_reset_floors() {
        let (status, now) = status_resetting_in(600);
        assert_eq!(status.minutes_until_reset(now), 10);

        let (status, now) = status_resetting_in(659);
        assert_eq!(status.minutes_until_reset(now), 10);

        let (status, now) = status_resetting_in(59);
        assert_eq!(status.minutes_until_reset(now), 0);
    }

    #[test]
    fn test_minutes_until_reset_clamps_past_resets() {
        let (status, now) = status_resetting_in(-120);
        assert_eq!(status.minutes_until_reset(now), 0);
    }
}
