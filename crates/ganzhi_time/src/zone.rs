//! Fixed UTC offsets for birth-time zones.
//!
//! Accepts numeric offsets (`+09:00`, `-0530`, `UTC+9`, `GMT-05:00`, `Z`)
//! and a table of common IANA zone names mapped to their *standard*
//! offset. Daylight-saving rules are not modelled: a birth moment is
//! expected in local standard time.

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::TimeError;

/// Largest accepted offset magnitude, minutes.
const MAX_OFFSET_MINUTES: i32 = 14 * 60;

/// IANA names and their standard UTC offsets in minutes.
const NAMED_ZONES: &[(&str, i32)] = &[
    ("UTC", 0),
    ("Etc/UTC", 0),
    ("GMT", 0),
    ("Etc/GMT", 0),
    ("Asia/Seoul", 540),
    ("Asia/Pyongyang", 540),
    ("Asia/Tokyo", 540),
    ("Asia/Shanghai", 480),
    ("Asia/Chongqing", 480),
    ("Asia/Hong_Kong", 480),
    ("Asia/Macau", 480),
    ("Asia/Taipei", 480),
    ("Asia/Singapore", 480),
    ("Asia/Kuala_Lumpur", 480),
    ("Asia/Manila", 480),
    ("Asia/Ulaanbaatar", 480),
    ("Asia/Bangkok", 420),
    ("Asia/Ho_Chi_Minh", 420),
    ("Asia/Jakarta", 420),
    ("Asia/Yangon", 390),
    ("Asia/Dhaka", 360),
    ("Asia/Kathmandu", 345),
    ("Asia/Kolkata", 330),
    ("Asia/Karachi", 300),
    ("Asia/Dubai", 240),
    ("Asia/Tehran", 210),
    ("Europe/Moscow", 180),
    ("Europe/Istanbul", 180),
    ("Europe/Athens", 120),
    ("Africa/Cairo", 120),
    ("Africa/Johannesburg", 120),
    ("Europe/Berlin", 60),
    ("Europe/Paris", 60),
    ("Europe/Madrid", 60),
    ("Europe/Rome", 60),
    ("Africa/Lagos", 60),
    ("Europe/London", 0),
    ("Europe/Lisbon", 0),
    ("America/Sao_Paulo", -180),
    ("America/Argentina/Buenos_Aires", -180),
    ("America/Halifax", -240),
    ("America/New_York", -300),
    ("America/Toronto", -300),
    ("America/Chicago", -360),
    ("America/Mexico_City", -360),
    ("America/Denver", -420),
    ("America/Phoenix", -420),
    ("America/Los_Angeles", -480),
    ("America/Vancouver", -480),
    ("America/Anchorage", -540),
    ("Pacific/Honolulu", -600),
    ("Australia/Perth", 480),
    ("Australia/Adelaide", 570),
    ("Australia/Brisbane", 600),
    ("Australia/Sydney", 600),
    ("Australia/Melbourne", 600),
    ("Pacific/Auckland", 720),
];

/// A fixed offset east of UTC.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct UtcOffset {
    minutes: i32,
}

impl UtcOffset {
    pub const UTC: Self = Self { minutes: 0 };

    /// Offset from minutes east of UTC. `None` beyond ±14 h.
    pub const fn from_minutes(minutes: i32) -> Option<Self> {
        if minutes.abs() <= MAX_OFFSET_MINUTES {
            Some(Self { minutes })
        } else {
            None
        }
    }

    /// Minutes east of UTC.
    pub const fn minutes(self) -> i32 {
        self.minutes
    }

    /// Offset as a fraction of a day.
    pub fn as_days(self) -> f64 {
        self.minutes as f64 / 1440.0
    }

    /// Resolve an IANA name or numeric offset.
    pub fn parse(zone: &str) -> Result<Self, TimeError> {
        let trimmed = zone.trim();
        if let Some(&(_, minutes)) = NAMED_ZONES
            .iter()
            .find(|(name, _)| name.eq_ignore_ascii_case(trimmed))
        {
            return Ok(Self { minutes });
        }
        parse_numeric(trimmed).ok_or_else(|| TimeError::UnknownTimeZone(zone.to_string()))
    }
}

fn parse_numeric(s: &str) -> Option<UtcOffset> {
    if s.eq_ignore_ascii_case("z") {
        return Some(UtcOffset::UTC);
    }
    let body = s
        .strip_prefix("UTC")
        .or_else(|| s.strip_prefix("GMT"))
        .unwrap_or(s);
    let (sign, digits) = match body.as_bytes().first()? {
        b'+' => (1, &body[1..]),
        b'-' => (-1, &body[1..]),
        _ => return None,
    };
    let (hours, minutes) = match digits.split_once(':') {
        Some((h, m)) => (h, m),
        None if digits.len() == 4 && digits.is_ascii() => digits.split_at(2),
        None => (digits, "0"),
    };
    if !is_field(hours) || !is_field(minutes) {
        return None;
    }
    let h: i32 = hours.parse().ok()?;
    let m: i32 = minutes.parse().ok()?;
    if m >= 60 {
        return None;
    }
    UtcOffset::from_minutes(sign * (h * 60 + m))
}

/// One or two ASCII digits; no sign.
fn is_field(s: &str) -> bool {
    (1..=2).contains(&s.len()) && s.bytes().all(|b| b.is_ascii_digit())
}

impl FromStr for UtcOffset {
    type Err = TimeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl Display for UtcOffset {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let sign = if self.minutes < 0 { '-' } else { '+' };
        let abs = self.minutes.abs();
        write!(f, "{sign}{:02}:{:02}", abs / 60, abs % 60)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn named_zone() {
        assert_eq!(UtcOffset::parse("Asia/Seoul").unwrap().minutes(), 540);
        assert_eq!(UtcOffset::parse("asia/kolkata").unwrap().minutes(), 330);
    }

    #[test]
    fn numeric_forms() {
        assert_eq!(UtcOffset::parse("+09:00").unwrap().minutes(), 540);
        assert_eq!(UtcOffset::parse("-0530").unwrap().minutes(), -330);
        assert_eq!(UtcOffset::parse("UTC+8").unwrap().minutes(), 480);
        assert_eq!(UtcOffset::parse("GMT-05:00").unwrap().minutes(), -300);
        assert_eq!(UtcOffset::parse("Z").unwrap(), UtcOffset::UTC);
    }

    #[test]
    fn rejects_garbage() {
        assert!(UtcOffset::parse("Mars/Olympus").is_err());
        assert!(UtcOffset::parse("+15:00").is_err());
        assert!(UtcOffset::parse("+09:75").is_err());
        assert!(UtcOffset::parse("").is_err());
        assert!(UtcOffset::parse("+").is_err());
        assert!(UtcOffset::parse("+09:").is_err());
    }

    #[test]
    fn rejects_signed_fields() {
        assert!(UtcOffset::parse("+-5").is_err());
        assert!(UtcOffset::parse("+1:-5").is_err());
        assert!(UtcOffset::parse("UTC+-3:30").is_err());
        assert!(UtcOffset::parse("-+0530").is_err());
    }

    #[test]
    fn multibyte_input_is_an_error() {
        assert!(UtcOffset::parse("+1é2").is_err());
        assert!(UtcOffset::parse("+é").is_err());
        assert!(UtcOffset::parse("UTC+０９").is_err());
    }

    #[test]
    fn display_roundtrip() {
        let off = UtcOffset::parse("-0330").unwrap();
        assert_eq!(off.to_string(), "-03:30");
        assert_eq!(UtcOffset::parse(&off.to_string()).unwrap(), off);
    }
}
