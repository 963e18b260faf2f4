//! Formatting helpers shared by the generators.

use chrono::{Days, NaiveDate};

use crate::random::RandomSource;

/// `first.last@domain`, lower-cased, ASCII letters and digits only.
pub fn email(first: &str, last: &str, domain: &str) -> String {
    format!("{}.{}@{}", slug(first), slug(last), domain)
}

/// Lower-cased ASCII letters and digits of `s`.
pub fn slug(s: &str) -> String {
    s.chars()
        .filter(char::is_ascii_alphanumeric)
        .map(|c| c.to_ascii_lowercase())
        .collect()
}

/// `1234567` → `"1,234,567"`.
pub fn group_thousands(n: u64) -> String {
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

/// Whole dollars: `45000` → `"$45,000"`.
pub fn dollars(n: u64) -> String {
    format!("${}", group_thousands(n))
}

/// Cents: `123456` → `"$1,234.56"`.
pub fn money(cents: u64) -> String {
    format!("${}.{:02}", group_thousands(cents / 100), cents % 100)
}

/// `base + offset_days`, formatted like `"Mar 4, 2024"`.
pub fn date_after(base: (i32, u32, u32), offset_days: u64) -> String {
    NaiveDate::from_ymd_opt(base.0, base.1, base.2)
        .and_then(|d| d.checked_add_days(Days::new(offset_days)))
        .map(|d| d.format("%b %-d, %Y").to_string())
        .unwrap_or_default()
}

/// North-American style number with random digits.
pub fn random_phone<R: RandomSource + ?Sized>(rng: &mut R) -> String {
    format!(
        "+1 ({}) {}-{:04}",
        rng.between(201, 989),
        rng.between(200, 999),
        rng.below(10_000)
    )
}

/// Five random digits.
pub fn random_zip<R: RandomSource + ?Sized>(rng: &mut R) -> String {
    format!("{:05}", rng.below(100_000))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::RngSource;

    #[test]
    fn email_strips_punctuation() {
        assert_eq!(email("Liam", "O'Brien", "acme.io"), "liam.obrien@acme.io");
    }

    #[test]
    fn thousands_grouping() {
        assert_eq!(group_thousands(0), "0");
        assert_eq!(group_thousands(999), "999");
        assert_eq!(group_thousands(1000), "1,000");
        assert_eq!(group_thousands(1234567), "1,234,567");
    }

    #[test]
    fn money_formats_cents() {
        assert_eq!(money(123456), "$1,234.56");
        assert_eq!(money(5), "$0.05");
        assert_eq!(dollars(45000), "$45,000");
    }

    #[test]
    fn dates_offset_from_base() {
        assert_eq!(date_after((2024, 1, 1), 0), "Jan 1, 2024");
        assert_eq!(date_after((2024, 1, 1), 31), "Feb 1, 2024");
        assert_eq!(date_after((2024, 2, 30), 0), "");
    }

    #[test]
    fn random_phone_shape() {
        let mut rng = RngSource::seeded(11);
        let phone = random_phone(&mut rng);
        assert!(phone.starts_with("+1 ("));
        assert_eq!(phone.len(), "+1 (555) 555-5555".len());
        assert_eq!(random_zip(&mut rng).len(), 5);
    }
}
