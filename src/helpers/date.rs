//! Date helper functions

use chrono::{DateTime, TimeZone};

/// Format a date the way the listing and detail pages show it
///
/// # Examples
/// ```ignore
/// short_date(&date) // -> "05 Mar 2021"
/// ```
pub fn short_date<Tz: TimeZone>(date: &DateTime<Tz>) -> String
where
    Tz::Offset: std::fmt::Display,
{
    date.format("%d %b %Y").to_string()
}

/// Generate a <time> HTML element with a machine-readable datetime
pub fn time_tag<Tz: TimeZone>(date: &DateTime<Tz>) -> String
where
    Tz::Offset: std::fmt::Display,
{
    let datetime = date.format("%Y-%m-%dT%H:%M:%S%:z").to_string();
    format!(
        r#"<time datetime="{}">{}</time>"#,
        datetime,
        short_date(date)
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::FixedOffset;

    fn sample_date() -> DateTime<FixedOffset> {
        FixedOffset::east_opt(0)
            .unwrap()
            .with_ymd_and_hms(2021, 3, 5, 10, 0, 0)
            .unwrap()
    }

    #[test]
    fn test_short_date() {
        assert_eq!(short_date(&sample_date()), "05 Mar 2021");
    }

    #[test]
    fn test_time_tag() {
        assert_eq!(
            time_tag(&sample_date()),
            r#"<time datetime="2021-03-05T10:00:00+00:00">05 Mar 2021</time>"#
        );
    }
}
