//! Calendar dates with Gregorian leap-year rules.

use std::fmt;
use std::str::FromStr;

use crate::util::digits::parse_u32_decimal;
use crate::util::UtilError;

/// True for Gregorian leap years: divisible by 4, except centuries not
/// divisible by 400.
pub fn is_leap_year(year: u32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

/// Days in `month` of `year`, or `None` when `month` is outside 1..=12.
pub fn days_in_month(year: u32, month: u32) -> Option<u32> {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => Some(31),
        4 | 6 | 9 | 11 => Some(30),
        2 => Some(if is_leap_year(year) { 29 } else { 28 }),
        _ => None,
    }
}

/// A validated calendar date.
///
/// Construct via [`Date::new`] or parse from `"YYYY-MM-DD"`; both reject
/// out-of-range months and days, including Feb 29 outside leap years.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Date {
    pub year: u32,
    pub month: u32,
    pub day: u32,
}

impl Date {
    pub fn new(year: u32, month: u32, day: u32) -> Result<Self, UtilError> {
        let Some(max_day) = days_in_month(year, month) else {
            return Err(UtilError::InvalidDate("month out of range"));
        };
        if day == 0 || day > max_day {
            return Err(UtilError::InvalidDate("day out of range"));
        }
        Ok(Self { year, month, day })
    }

    /// Days elapsed since 1971-01-01 (which maps to 0). Years before 1971
    /// are not supported.
    pub fn days_since_1971(&self) -> Result<u32, UtilError> {
        if self.year < 1971 {
            return Err(UtilError::InvalidDate("year before 1971"));
        }
        let mut days = 0;
        for y in 1971..self.year {
            days += if is_leap_year(y) { 366 } else { 365 };
        }
        for m in 1..self.month {
            // month is validated, so the lookup cannot fail
            days += days_in_month(self.year, m).unwrap_or(0);
        }
        Ok(days + self.day - 1)
    }

    /// Name of the weekday. 1971-01-01 was a Friday.
    pub fn day_of_week(&self) -> Result<&'static str, UtilError> {
        const NAMES: [&str; 7] = [
            "Friday",
            "Saturday",
            "Sunday",
            "Monday",
            "Tuesday",
            "Wednesday",
            "Thursday",
        ];
        Ok(NAMES[(self.days_since_1971()? % 7) as usize])
    }
}

impl FromStr for Date {
    type Err = UtilError;

    /// Parse `"YYYY-MM-DD"`: exactly ten characters with dashes at
    /// positions 4 and 7 and decimal digits elsewhere.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let bytes = s.as_bytes();
        if bytes.len() != 10 || bytes[4] != b'-' || bytes[7] != b'-' {
            return Err(UtilError::InvalidDate("expected YYYY-MM-DD"));
        }
        let year = parse_u32_decimal(&s[0..4])?;
        let month = parse_u32_decimal(&s[5..7])?;
        let day = parse_u32_decimal(&s[8..10])?;
        Date::new(year, month, day)
    }
}

impl fmt::Display for Date {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}-{:02}", self.year, self.month, self.day)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn leap_year_rule() {
        assert!(is_leap_year(2024));
        assert!(is_leap_year(2000));
        assert!(!is_leap_year(1900));
        assert!(!is_leap_year(2023));
    }

    #[test]
    fn month_lengths() {
        assert_eq!(days_in_month(2023, 1), Some(31));
        assert_eq!(days_in_month(2023, 4), Some(30));
        assert_eq!(days_in_month(2023, 2), Some(28));
        assert_eq!(days_in_month(2024, 2), Some(29));
        assert_eq!(days_in_month(2023, 0), None);
        assert_eq!(days_in_month(2023, 13), None);
    }

    #[test]
    fn parses_and_validates() {
        let d: Date = "2024-02-29".parse().unwrap();
        assert_eq!((d.year, d.month, d.day), (2024, 2, 29));
        assert_eq!(d.to_string(), "2024-02-29");

        assert!("2023-02-29".parse::<Date>().is_err());
        assert!("2023-13-01".parse::<Date>().is_err());
        assert!("2023-12-00".parse::<Date>().is_err());
        assert!("2023/12/01".parse::<Date>().is_err());
        assert!("23-12-01".parse::<Date>().is_err());
        assert!("2023-1-01".parse::<Date>().is_err());
    }

    #[test]
    fn epoch_day_arithmetic() {
        let epoch = Date::new(1971, 1, 1).unwrap();
        assert_eq!(epoch.days_since_1971(), Ok(0));
        assert_eq!(Date::new(1971, 1, 2).unwrap().days_since_1971(), Ok(1));
        assert_eq!(Date::new(1972, 1, 1).unwrap().days_since_1971(), Ok(365));
        // 1972 is a leap year, so 1973-01-01 is 365 + 366 days out.
        assert_eq!(Date::new(1973, 1, 1).unwrap().days_since_1971(), Ok(731));
        assert!(Date::new(1970, 6, 1).unwrap().days_since_1971().is_err());
    }

    #[test]
    fn weekday_names() {
        assert_eq!(Date::new(1971, 1, 1).unwrap().day_of_week(), Ok("Friday"));
        assert_eq!(Date::new(2019, 8, 31).unwrap().day_of_week(), Ok("Saturday"));
        assert_eq!(Date::new(2019, 2, 18).unwrap().day_of_week(), Ok("Monday"));
    }
}
