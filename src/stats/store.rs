//! Stats persistence
//!
//! The stats file is a single line: `MAX_ATTEMPTS` win counts each followed
//! by a space, then the loss count and a line break, e.g.
//!
//! ```text
//! 0 3 17 21 6 8 8
//! ```
//!
//! A missing file is a fresh record. A malformed file resets to zero with a
//! diagnostic rather than fabricating partial counts.

use super::PlayerStats;
use crate::core::MAX_ATTEMPTS;
use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

/// Load stats from `path`
///
/// Missing file yields zeroed stats. A file that does not parse as exactly
/// `MAX_ATTEMPTS + 1` counters also yields zeroed stats, with a diagnostic on
/// stderr; partial counts are never kept.
#[must_use]
pub fn load<P: AsRef<Path>>(path: P) -> PlayerStats {
    let path = path.as_ref();

    let Ok(content) = fs::read_to_string(path) else {
        return PlayerStats::default();
    };

    match parse(&content) {
        Some(stats) => stats,
        None => {
            eprintln!(
                "Stats file {} is malformed; starting a fresh record.",
                path.display()
            );
            PlayerStats::default()
        }
    }
}

/// Save stats to `path`
///
/// The write is atomic: the encoding goes to a sibling temp file which then
/// replaces `path`, so a crash never leaves a half-written record behind.
///
/// # Errors
///
/// Returns an error if the temp file cannot be written or renamed.
pub fn save<P: AsRef<Path>>(path: P, stats: &PlayerStats) -> Result<()> {
    let path = path.as_ref();
    let tmp = path.with_extension("tmp");

    fs::write(&tmp, encode(stats))
        .with_context(|| format!("failed to write stats to {}", tmp.display()))?;
    fs::rename(&tmp, path)
        .with_context(|| format!("failed to replace stats file {}", path.display()))?;

    Ok(())
}

fn encode(stats: &PlayerStats) -> String {
    let mut out = String::new();
    for win in stats.wins() {
        out.push_str(&win.to_string());
        out.push(' ');
    }
    out.push_str(&stats.losses().to_string());
    out.push('\n');
    out
}

fn parse(content: &str) -> Option<PlayerStats> {
    let mut values = content.split_whitespace();

    let mut wins = [0u32; MAX_ATTEMPTS];
    for win in &mut wins {
        *win = values.next()?.parse().ok()?;
    }
    let losses = values.next()?.parse().ok()?;

    // Trailing garbage means the file is not ours
    if values.next().is_some() {
        return None;
    }

    Some(PlayerStats::from_counts(wins, losses))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_path(name: &str) -> std::path::PathBuf {
        std::env::temp_dir().join(format!("yorkle-stats-{name}-{}", std::process::id()))
    }

    #[test]
    fn encode_matches_stored_format() {
        let stats = PlayerStats::from_counts([0, 3, 17, 21, 6, 8], 8);
        assert_eq!(encode(&stats), "0 3 17 21 6 8 8\n");
    }

    #[test]
    fn parse_round_trips_encode() {
        let stats = PlayerStats::from_counts([1, 0, 4, 2, 0, 9], 3);
        assert_eq!(parse(&encode(&stats)), Some(stats));
    }

    #[test]
    fn parse_rejects_short_record() {
        assert_eq!(parse("1 2 3\n"), None);
    }

    #[test]
    fn parse_rejects_trailing_garbage() {
        assert_eq!(parse("0 0 0 0 0 0 0 junk\n"), None);
    }

    #[test]
    fn parse_rejects_non_numeric() {
        assert_eq!(parse("0 0 x 0 0 0 0\n"), None);
    }

    #[test]
    fn load_missing_file_is_fresh_record() {
        assert_eq!(load("/nonexistent/stats.txt"), PlayerStats::default());
    }

    #[test]
    fn load_malformed_file_resets() {
        let path = temp_path("malformed");
        fs::write(&path, "not a stats file\n").unwrap();

        let stats = load(&path);
        fs::remove_file(&path).ok();

        assert_eq!(stats, PlayerStats::default());
    }

    #[test]
    fn save_then_load_round_trips() {
        let path = temp_path("roundtrip");
        let stats = PlayerStats::from_counts([2, 5, 1, 0, 3, 1], 4);

        save(&path, &stats).unwrap();
        let loaded = load(&path);
        fs::remove_file(&path).ok();

        assert_eq!(loaded, stats);
    }

    #[test]
    fn save_leaves_no_temp_file() {
        let path = temp_path("tmpcheck");
        save(&path, &PlayerStats::default()).unwrap();

        assert!(!path.with_extension("tmp").exists());
        fs::remove_file(&path).ok();
    }
}
