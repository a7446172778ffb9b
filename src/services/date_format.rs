//! Human-readable dates with English ordinal days

use chrono::{DateTime, Datelike, TimeZone};

/// Format a timestamp as `YYYY-MM-DD <day><suffix> YYYY`.
///
/// ```
/// use blogdemo::services::date_format::format_ordinal_date;
/// use chrono::{TimeZone, Utc};
///
/// let at = Utc.with_ymd_and_hms(2023, 3, 24, 21, 15, 36).unwrap();
/// assert_eq!(format_ordinal_date(&at), "2023-03-24 24th 2023");
/// ```
pub fn format_ordinal_date<Tz>(timestamp: &DateTime<Tz>) -> String
where
    Tz: TimeZone,
    Tz::Offset: std::fmt::Display,
{
    format!(
        "{} {} {}",
        timestamp.format("%Y-%m-%d"),
        ordinal(timestamp.day()),
        timestamp.format("%Y")
    )
}

/// English ordinal for a day of the month: `1st`, `2nd`, `3rd`, `4th`, `11th`, `21st`...
pub fn ordinal(day: u32) -> String {
    format!("{}{}", day, ordinal_suffix(day))
}

fn ordinal_suffix(day: u32) -> &'static str {
    if (11..=13).contains(&(day % 100)) {
        return "th";
    }
    match day % 10 {
        1 => "st",
        2 => "nd",
        3 => "rd",
        _ => "th",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{FixedOffset, Utc};

    #[test]
    fn test_ordinals() {
        assert_eq!(ordinal(1), "1st");
        assert_eq!(ordinal(2), "2nd");
        assert_eq!(ordinal(3), "3rd");
        assert_eq!(ordinal(4), "4th");
        assert_eq!(ordinal(11), "11th");
        assert_eq!(ordinal(12), "12th");
        assert_eq!(ordinal(13), "13th");
        assert_eq!(ordinal(21), "21st");
        assert_eq!(ordinal(22), "22nd");
        assert_eq!(ordinal(23), "23rd");
        assert_eq!(ordinal(30), "30th");
        assert_eq!(ordinal(31), "31st");
    }

    #[test]
    fn test_format_ordinal_date() {
        let at = Utc.with_ymd_and_hms(2023, 3, 1, 8, 0, 0).unwrap();
        assert_eq!(format_ordinal_date(&at), "2023-03-01 1st 2023");

        let at = Utc.with_ymd_and_hms(1999, 12, 12, 23, 59, 59).unwrap();
        assert_eq!(format_ordinal_date(&at), "1999-12-12 12th 1999");
    }

    #[test]
    fn test_format_uses_local_date_of_offset() {
        let offset = FixedOffset::east_opt(9 * 3600).unwrap();
        let at = offset.with_ymd_and_hms(2023, 1, 2, 1, 0, 0).unwrap();

        assert_eq!(format_ordinal_date(&at), "2023-01-02 2nd 2023");
    }
}
