//! Display helpers shared by the pages.

use chrono::{DateTime, Duration, Local, NaiveDate, Utc};

/// `15420` -> `15,420`.
pub fn thousands(n: u32) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

/// `2500` -> `2.5k`, `980` -> `980`.
pub fn compact(n: u32) -> String {
    if n < 1000 {
        return n.to_string();
    }
    let tenths = (n + 50) / 100;
    if tenths % 10 == 0 {
        format!("{}k", tenths / 10)
    } else {
        format!("{}.{}k", tenths / 10, tenths % 10)
    }
}

/// First letter of each word, as used for avatar fallbacks.
pub fn initials(name: &str) -> String {
    name.split_whitespace()
        .filter_map(|word| word.chars().next())
        .flat_map(char::to_uppercase)
        .collect()
}

/// Header badge text; anything above nine reads `9+`.
pub fn badge_count(n: usize) -> String {
    if n > 9 {
        "9+".to_string()
    } else {
        n.to_string()
    }
}

/// `2d 14h 32m`. Negative spans read as zero.
pub fn time_left(span: Duration) -> String {
    let minutes = span.num_minutes().max(0);
    format!("{}d {}h {}m", minutes / (24 * 60), minutes / 60 % 24, minutes % 60)
}

/// Local wall-clock `HH:MM`.
pub fn short_time(at: DateTime<Utc>) -> String {
    at.with_timezone(&Local).format("%H:%M").to_string()
}

/// `Jun 15, 2024`.
pub fn long_date(date: NaiveDate) -> String {
    date.format("%b %-d, %Y").to_string()
}

pub fn pluralize(count: usize, one: &str, many: &str) -> String {
    if count == 1 {
        format!("{count} {one}")
    } else {
        format!("{count} {many}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn thousands_separators() {
        assert_eq!(thousands(0), "0");
        assert_eq!(thousands(980), "980");
        assert_eq!(thousands(2450), "2,450");
        assert_eq!(thousands(15420), "15,420");
        assert_eq!(thousands(1_000_000), "1,000,000");
    }

    #[test]
    fn compact_counts() {
        assert_eq!(compact(980), "980");
        assert_eq!(compact(2500), "2.5k");
        assert_eq!(compact(1800), "1.8k");
        assert_eq!(compact(2000), "2k");
    }

    #[test]
    fn initials_and_badges() {
        assert_eq!(initials("John Smith"), "JS");
        assert_eq!(initials("jake  martinez"), "JM");
        assert_eq!(badge_count(3), "3");
        assert_eq!(badge_count(12), "9+");
    }

    #[test]
    fn countdown() {
        let span = Duration::days(2) + Duration::hours(14) + Duration::minutes(32);
        assert_eq!(time_left(span), "2d 14h 32m");
        assert_eq!(time_left(Duration::minutes(-5)), "0d 0h 0m");
    }

    #[test]
    fn dates_and_plurals() {
        let date = NaiveDate::from_ymd_opt(2024, 6, 5).unwrap();
        assert_eq!(long_date(date), "Jun 5, 2024");
        assert_eq!(pluralize(1, "item", "items"), "1 item");
        assert_eq!(pluralize(3, "item", "items"), "3 items");
    }
}
