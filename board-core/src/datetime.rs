use crate::locale::Locale;
use chrono::{DateTime, FixedOffset, Utc};

const MINUTES_IN_DAY: i64 = 1440;
const MINUTES_IN_MONTH: i64 = 43_200;
const MINUTES_IN_TWO_MONTHS: i64 = 86_400;

/// `YYYY-MM-DD HH:mm` in the viewer's offset.
pub fn format_absolute(at: DateTime<Utc>, offset: FixedOffset) -> String {
    at.with_timezone(&offset).format("%Y-%m-%d %H:%M").to_string()
}

/// Human distance between `at` and `now` with a past/future suffix,
/// e.g. `5분 전` or `about 2 hours ago`.
pub fn format_relative(at: DateTime<Utc>, now: DateTime<Utc>, locale: Locale) -> String {
    let seconds = (now - at).num_seconds();
    let past = seconds >= 0;
    let distance = distance(seconds.unsigned_abs() as i64, locale);

    match (locale, past) {
        (Locale::Ko, true) => format!("{distance} 전"),
        (Locale::Ko, false) => format!("{distance} 후"),
        (Locale::En, true) => format!("{distance} ago"),
        (Locale::En, false) => format!("in {distance}"),
    }
}

fn distance(seconds: i64, locale: Locale) -> String {
    let minutes = (seconds + 30) / 60;

    if minutes < 1 {
        return match locale {
            Locale::Ko => "1분 미만".to_string(),
            Locale::En => "less than a minute".to_string(),
        };
    }
    if minutes < 45 {
        return match locale {
            Locale::Ko => format!("{minutes}분"),
            Locale::En => plural(minutes, "minute"),
        };
    }
    if minutes < 90 {
        return match locale {
            Locale::Ko => "약 1시간".to_string(),
            Locale::En => "about 1 hour".to_string(),
        };
    }
    if minutes < MINUTES_IN_DAY {
        let hours = (minutes + 30) / 60;
        return match locale {
            Locale::Ko => format!("약 {hours}시간"),
            Locale::En => format!("about {}", plural(hours, "hour")),
        };
    }
    if minutes < 2520 {
        return match locale {
            Locale::Ko => "1일".to_string(),
            Locale::En => "1 day".to_string(),
        };
    }
    if minutes < MINUTES_IN_MONTH {
        let days = (minutes + MINUTES_IN_DAY / 2) / MINUTES_IN_DAY;
        return match locale {
            Locale::Ko => format!("{days}일"),
            Locale::En => plural(days, "day"),
        };
    }
    if minutes < MINUTES_IN_TWO_MONTHS {
        let months = (minutes + MINUTES_IN_MONTH / 2) / MINUTES_IN_MONTH;
        return match locale {
            Locale::Ko => format!("약 {months}개월"),
            Locale::En => format!("about {}", plural(months, "month")),
        };
    }

    let months = minutes / MINUTES_IN_MONTH;
    if months < 12 {
        return match locale {
            Locale::Ko => format!("{months}개월"),
            Locale::En => plural(months, "month"),
        };
    }

    let years = months / 12;
    let remainder = months % 12;
    match (locale, remainder) {
        (Locale::Ko, 0..=2) => format!("약 {years}년"),
        (Locale::Ko, 3..=8) => format!("{years}년 이상"),
        (Locale::Ko, _) => format!("거의 {}년", years + 1),
        (Locale::En, 0..=2) => format!("about {}", plural(years, "year")),
        (Locale::En, 3..=8) => format!("over {}", plural(years, "year")),
        (Locale::En, _) => format!("almost {}", plural(years + 1, "year")),
    }
}

fn plural(n: i64, unit: &str) -> String {
    if n == 1 {
        format!("1 {unit}")
    } else {
        format!("{n} {unit}s")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).unwrap()
    }

    #[test]
    fn absolute_uses_viewer_offset() {
        let at = Utc.with_ymd_and_hms(2024, 3, 1, 23, 5, 0).unwrap();
        let seoul = FixedOffset::east_opt(9 * 3600).unwrap();
        assert_eq!(format_absolute(at, seoul), "2024-03-02 08:05");
    }

    #[test]
    fn relative_korean() {
        let cases = [
            (Duration::seconds(10), "1분 미만 전"),
            (Duration::minutes(5), "5분 전"),
            (Duration::minutes(60), "약 1시간 전"),
            (Duration::hours(5), "약 5시간 전"),
            (Duration::hours(30), "1일 전"),
            (Duration::days(3), "3일 전"),
            (Duration::days(40), "약 1개월 전"),
            (Duration::days(150), "5개월 전"),
            (Duration::days(400), "약 1년 전"),
        ];
        for (ago, expected) in cases {
            assert_eq!(format_relative(now() - ago, now(), Locale::Ko), expected);
        }
    }

    #[test]
    fn relative_english_and_future() {
        assert_eq!(
            format_relative(now() - Duration::minutes(1), now(), Locale::En),
            "1 minute ago"
        );
        assert_eq!(
            format_relative(now() - Duration::hours(3), now(), Locale::En),
            "about 3 hours ago"
        );
        assert_eq!(
            format_relative(now() + Duration::minutes(10), now(), Locale::Ko),
            "10분 후"
        );
        assert_eq!(
            format_relative(now() + Duration::days(2), now(), Locale::En),
            "in 2 days"
        );
    }
}
