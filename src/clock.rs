//! Clock value ordering — pure helpers behind the clock and stopwatch faces.
//!
//! The library never reads the wall clock. The app shell samples the time,
//! passes the parts in, and renders the resulting values as a glyph row.

use serde::{Deserialize, Serialize};

/// Calendar and time-of-day fields for one clock tick.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct DateParts {
    pub year: i32,
    /// 1-based month
    pub month: i32,
    pub day: i32,
    pub hours: i32,
    pub minutes: i32,
    pub seconds: i32,
}

/// Order in which the six clock values are laid out, matching the
/// date-format setting exposed by the app shells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DateOrder {
    /// year, month, day
    Iso,
    /// month, day, year
    Us,
    /// day, month, year
    Eu,
}

impl DateOrder {
    /// Parse a persisted settings key. Unknown keys fall back to `Us`,
    /// matching the shells' stored-preference handling.
    pub fn from_key(key: &str) -> Self {
        match key {
            "iso" => DateOrder::Iso,
            "eu" => DateOrder::Eu,
            _ => DateOrder::Us,
        }
    }
}

/// Arrange the six clock values in display order. Time-of-day always follows
/// the date triple.
pub fn ordered_values(parts: &DateParts, order: DateOrder) -> [i32; 6] {
    let DateParts { year, month, day, hours, minutes, seconds } = *parts;
    match order {
        DateOrder::Iso => [year, month, day, hours, minutes, seconds],
        DateOrder::Us => [month, day, year, hours, minutes, seconds],
        DateOrder::Eu => [day, month, year, hours, minutes, seconds],
    }
}

/// Saturate a running counter at the largest drawable value. The stopwatch
/// face stops itself once its counter reaches 9999.
pub fn clamp_display(value: i64) -> i32 {
    value.clamp(0, 9999) as i32
}

#[cfg(test)]
mod tests {
    use super::*;

    const PARTS: DateParts = DateParts {
        year: 2026,
        month: 8,
        day: 7,
        hours: 14,
        minutes: 30,
        seconds: 55,
    };

    #[test]
    fn iso_order_leads_with_year() {
        assert_eq!(ordered_values(&PARTS, DateOrder::Iso), [2026, 8, 7, 14, 30, 55]);
    }

    #[test]
    fn us_order_leads_with_month() {
        assert_eq!(ordered_values(&PARTS, DateOrder::Us), [8, 7, 2026, 14, 30, 55]);
    }

    #[test]
    fn eu_order_leads_with_day() {
        assert_eq!(ordered_values(&PARTS, DateOrder::Eu), [7, 8, 2026, 14, 30, 55]);
    }

    #[test]
    fn unknown_format_key_falls_back_to_us() {
        assert_eq!(DateOrder::from_key("iso"), DateOrder::Iso);
        assert_eq!(DateOrder::from_key("eu"), DateOrder::Eu);
        assert_eq!(DateOrder::from_key("us"), DateOrder::Us);
        assert_eq!(DateOrder::from_key("jp"), DateOrder::Us);
        assert_eq!(DateOrder::from_key(""), DateOrder::Us);
    }

    #[test]
    fn clamp_display_saturates_at_9999() {
        assert_eq!(clamp_display(0), 0);
        assert_eq!(clamp_display(9998), 9998);
        assert_eq!(clamp_display(9999), 9999);
        assert_eq!(clamp_display(10000), 9999);
        assert_eq!(clamp_display(i64::MAX), 9999);
        assert_eq!(clamp_display(-5), 0);
    }
}
