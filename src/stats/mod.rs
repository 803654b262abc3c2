//! Cumulative player statistics
//!
//! Tracks how many games were won per attempt count, plus games lost.
//! One outcome is recorded per completed game; unfinished games leave the
//! stats untouched.

mod store;

pub use store::{load, save};

use crate::core::MAX_ATTEMPTS;

/// Win histogram and loss count across past games
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PlayerStats {
    /// wins[k] = games won on attempt k+1
    wins: [u32; MAX_ATTEMPTS],
    losses: u32,
}

/// A point-in-time read of the stats, shaped for display
#[derive(Debug, Clone, PartialEq)]
pub struct Summary {
    /// Total completed games
    pub played: u32,
    /// Percentage of games won, 0 when no game was played
    pub win_rate: f64,
    /// Wins per attempt count, index 0 = won on the first attempt
    pub wins: [u32; MAX_ATTEMPTS],
}

impl PlayerStats {
    /// Build stats from raw counters
    #[must_use]
    pub const fn from_counts(wins: [u32; MAX_ATTEMPTS], losses: u32) -> Self {
        Self { wins, losses }
    }

    /// Record the outcome of one completed game
    ///
    /// `Some(k)` with `1 <= k <= MAX_ATTEMPTS` counts a win on attempt k;
    /// `None` or an out-of-range count counts a loss. Exactly one counter
    /// changes per call.
    pub fn record_outcome(&mut self, attempts_used: Option<usize>) {
        match attempts_used {
            Some(k) if (1..=MAX_ATTEMPTS).contains(&k) => self.wins[k - 1] += 1,
            _ => self.losses += 1,
        }
    }

    /// Wins per attempt count
    #[inline]
    #[must_use]
    pub const fn wins(&self) -> &[u32; MAX_ATTEMPTS] {
        &self.wins
    }

    /// Games lost
    #[inline]
    #[must_use]
    pub const fn losses(&self) -> u32 {
        self.losses
    }

    /// Summarize the stats for display
    ///
    /// A pure read: calling it repeatedly without an intervening
    /// `record_outcome` yields identical results.
    #[must_use]
    pub fn summary(&self) -> Summary {
        let total_wins: u32 = self.wins.iter().sum();
        let played = total_wins + self.losses;

        // Guard the empty record; the naive formula divides by zero
        let win_rate = if played == 0 {
            0.0
        } else {
            100.0 * f64::from(total_wins) / f64::from(played)
        };

        Summary {
            played,
            win_rate,
            wins: self.wins,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn record_win_increments_single_bucket() {
        let mut stats = PlayerStats::default();
        stats.record_outcome(Some(3));

        let mut expected = [0u32; MAX_ATTEMPTS];
        expected[2] = 1;
        assert_eq!(stats.wins(), &expected);
        assert_eq!(stats.losses(), 0);
    }

    #[test]
    fn record_loss_increments_losses_only() {
        let mut stats = PlayerStats::default();
        stats.record_outcome(None);

        assert_eq!(stats.wins(), &[0u32; MAX_ATTEMPTS]);
        assert_eq!(stats.losses(), 1);
    }

    #[test]
    fn record_out_of_range_attempts_is_loss() {
        let mut stats = PlayerStats::default();
        stats.record_outcome(Some(MAX_ATTEMPTS + 1));
        stats.record_outcome(Some(0));

        assert_eq!(stats.wins(), &[0u32; MAX_ATTEMPTS]);
        assert_eq!(stats.losses(), 2);
    }

    #[test]
    fn record_win_boundary_attempts() {
        let mut stats = PlayerStats::default();
        stats.record_outcome(Some(1));
        stats.record_outcome(Some(MAX_ATTEMPTS));

        assert_eq!(stats.wins()[0], 1);
        assert_eq!(stats.wins()[MAX_ATTEMPTS - 1], 1);
        assert_eq!(stats.losses(), 0);
    }

    #[test]
    fn summary_empty_record_has_zero_rate() {
        let summary = PlayerStats::default().summary();

        assert_eq!(summary.played, 0);
        assert!(summary.win_rate.abs() < f64::EPSILON);
    }

    #[test]
    fn summary_win_rate() {
        let mut stats = PlayerStats::default();
        stats.record_outcome(Some(2));
        stats.record_outcome(Some(4));
        stats.record_outcome(Some(4));
        stats.record_outcome(None);

        let summary = stats.summary();
        assert_eq!(summary.played, 4);
        assert!((summary.win_rate - 75.0).abs() < f64::EPSILON);
        assert_eq!(summary.wins[3], 2);
    }

    #[test]
    fn summary_is_idempotent() {
        let mut stats = PlayerStats::default();
        stats.record_outcome(Some(5));
        stats.record_outcome(None);

        assert_eq!(stats.summary(), stats.summary());
    }
}
