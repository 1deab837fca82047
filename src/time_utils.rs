// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Shared helpers for date/time parsing.

use chrono::NaiveTime;

/// Parse a wall-clock time in `HH:MM` form (24h).
pub fn parse_hhmm(s: &str) -> Option<NaiveTime> {
    NaiveTime::parse_from_str(s, "%H:%M").ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Timelike;

    #[test]
    fn test_parse_hhmm_valid() {
        let t = parse_hhmm("06:30").unwrap();
        assert_eq!(t.hour(), 6);
        assert_eq!(t.minute(), 30);
    }

    #[test]
    fn test_parse_hhmm_rejects_garbage() {
        assert!(parse_hhmm("6:3:1").is_none());
        assert!(parse_hhmm("25:00").is_none());
        assert!(parse_hhmm("noon").is_none());
    }
}
