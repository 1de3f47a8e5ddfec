use chrono::{DateTime, Local, NaiveDate, NaiveDateTime};

const NAIVE_FORMATS: [&str; 3] = [
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
];

/// Escapes text for insertion into HTML element content or attribute values.
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}

/// Drops control characters so backend text cannot drive the terminal.
pub fn sanitize_terminal(text: &str) -> String {
    text.chars()
        .map(|ch| if ch == '\n' || ch == '\t' { ' ' } else { ch })
        .filter(|ch| !ch.is_control())
        .collect()
}

/// Parses a backend timestamp into local wall-clock time.
///
/// Offsets (RFC 3339) are converted to local time; naive values are taken as
/// local already; a bare date means local midnight, not UTC midnight, so
/// "Today" and "Yesterday" follow the user's calendar day.
pub fn parse_timestamp(raw: &str) -> Option<NaiveDateTime> {
    let raw = raw.trim();
    if let Ok(with_offset) = DateTime::parse_from_rfc3339(raw) {
        return Some(with_offset.with_timezone(&Local).naive_local());
    }
    for format in NAIVE_FORMATS {
        if let Ok(naive) = NaiveDateTime::parse_from_str(raw, format) {
            return Some(naive);
        }
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
}

/// Renders a date relative to `now`: "Today", "Yesterday", "N days ago",
/// "N weeks ago" within 30 days, else a short date like "Sep 1, 2026".
///
/// Week counts are floored and never pluralised differently, so 7 to 13 days
/// reads "1 weeks ago". Missing input yields "N/A" and unparsable input is
/// returned verbatim.
pub fn format_relative_date(raw: Option<&str>, now: NaiveDateTime) -> String {
    let Some(raw) = raw.filter(|raw| !raw.trim().is_empty()) else {
        return "N/A".to_string();
    };
    let Some(date) = parse_timestamp(raw) else {
        return raw.to_string();
    };

    let diff_days = (now - date).num_days().abs();
    match diff_days {
        0 => "Today".to_string(),
        1 => "Yesterday".to_string(),
        2..=6 => format!("{diff_days} days ago"),
        7..=29 => format!("{} weeks ago", diff_days / 7),
        _ => date.format("%b %-d, %Y").to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(raw: &str) -> NaiveDateTime {
        NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S").unwrap()
    }

    #[test]
    fn escape_covers_markup_and_quotes() {
        assert_eq!(
            escape_html(r#"<a href="x">Tom & 'Jerry'</a>"#),
            "&lt;a href=&quot;x&quot;&gt;Tom &amp; &#39;Jerry&#39;&lt;/a&gt;"
        );
        assert_eq!(escape_html(""), "");
    }

    #[test]
    fn sanitize_strips_escape_sequences() {
        assert_eq!(sanitize_terminal("a\u{1b}[2Jb\nc"), "a[2Jb c");
    }

    #[test]
    fn relative_labels_follow_day_buckets() {
        let now = at("2026-10-16T15:00:00");
        assert_eq!(format_relative_date(Some("2026-10-16"), now), "Today");
        assert_eq!(format_relative_date(Some("2026-10-15T15:00:00"), now), "Yesterday");
        assert_eq!(format_relative_date(Some("2026-10-12 15:00:00"), now), "4 days ago");
        assert_eq!(format_relative_date(Some("2026-10-06T12:00:00"), now), "1 weeks ago");
        assert_eq!(format_relative_date(Some("2026-09-25T12:00:00"), now), "3 weeks ago");
        assert_eq!(format_relative_date(Some("2026-09-01T12:00:00"), now), "Sep 1, 2026");
    }

    #[test]
    fn future_dates_use_absolute_difference() {
        let now = at("2026-10-16T12:00:00");
        assert_eq!(format_relative_date(Some("2026-10-19T12:00:00"), now), "3 days ago");
    }

    #[test]
    fn missing_and_unparsable_dates() {
        let now = at("2026-10-16T12:00:00");
        assert_eq!(format_relative_date(None, now), "N/A");
        assert_eq!(format_relative_date(Some(""), now), "N/A");
        assert_eq!(format_relative_date(Some("last week"), now), "last week");
    }

    #[test]
    fn bare_date_is_local_midnight() {
        assert_eq!(parse_timestamp("2026-10-16"), Some(at("2026-10-16T00:00:00")));
        let late_evening = at("2026-10-16T23:59:00");
        assert_eq!(format_relative_date(Some("2026-10-16"), late_evening), "Today");
    }

    #[test]
    fn fractional_seconds_are_accepted() {
        assert_eq!(
            parse_timestamp("2026-10-16T08:30:00.123456"),
            Some(at("2026-10-16T08:30:00") + chrono::Duration::microseconds(123_456))
        );
    }
}
