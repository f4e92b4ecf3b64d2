// Copyright 2021-2025, Collabora, Ltd.
//
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Operations on the two-digit birth year of an NRIC number.
//!
//! The card only carries the last two digits of the year. We resolve them with the
//! POSIX `%y` rule: `69..=99` land in the 1900s and `00..=68` land in the 2000s, so
//! `88` is 1988 and `00` is 2000 (a leap year). No attempt is made to use the
//! current date to pick a more plausible century.

use std::fmt::Display;

use derive_more::Into;

/// Number of years in a century
pub(crate) const CENTURY_DURATION: i32 = 100;

/// Two-digit years at or above this are placed in the 20th century
pub(crate) const PIVOT: u8 = 69;

/// The last two digits of a year, as printed on the card
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Into)]
pub struct TwoDigitYear(u8);

impl TwoDigitYear {
    pub fn new(two_digit: u8) -> Option<Self> {
        if i32::from(two_digit) < CENTURY_DURATION {
            Some(Self(two_digit))
        } else {
            None
        }
    }

    pub fn value(self) -> u8 {
        self.0
    }

    /// Expand to a full year using the pivot rule described in the module docs.
    pub fn to_four_digit(self) -> i32 {
        compose_year(guess_century(self.0), self.0)
    }
}

impl From<chrono::NaiveDate> for TwoDigitYear {
    fn from(date: chrono::NaiveDate) -> Self {
        use chrono::Datelike;
        Self(get_two_digit_year(date.year()))
    }
}

impl Display for TwoDigitYear {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:02}", self.0)
    }
}

// Ugh. Centuries are 1-indexed.

pub(crate) fn guess_century(two_digit_year: u8) -> i32 {
    if two_digit_year < PIVOT {
        21
    } else {
        20
    }
}

pub(crate) fn compose_year(century: i32, two_digit: u8) -> i32 {
    (century - 1) * CENTURY_DURATION + i32::from(two_digit)
}

pub(crate) fn get_two_digit_year(year: i32) -> u8 {
    // rem_euclid keeps this in 0..100 even for negative years
    year.rem_euclid(CENTURY_DURATION) as u8
}

#[cfg(test)]
mod tests {
    use super::{get_two_digit_year, TwoDigitYear};

    #[test]
    fn test_get_two_digit() {
        assert_eq!(get_two_digit_year(2005), 5);
        assert_eq!(get_two_digit_year(2105), 5);
        assert_eq!(get_two_digit_year(1995), 95);
        assert_eq!(get_two_digit_year(1900), 0);
    }

    #[test]
    fn pivot() {
        let expand = |y| TwoDigitYear::new(y).unwrap().to_four_digit();
        assert_eq!(expand(0), 2000);
        assert_eq!(expand(26), 2026);
        assert_eq!(expand(68), 2068);
        assert_eq!(expand(69), 1969);
        assert_eq!(expand(88), 1988);
        assert_eq!(expand(99), 1999);
    }

    #[test]
    fn out_of_range() {
        assert!(TwoDigitYear::new(99).is_some());
        assert!(TwoDigitYear::new(100).is_none());
    }

    #[test]
    fn round_trip_through_date() {
        let date = chrono::NaiveDate::from_ymd_opt(1988, 8, 8).unwrap();
        let year = TwoDigitYear::from(date);
        assert_eq!(year.value(), 88);
        assert_eq!(year.to_string(), "88");
        assert_eq!(year.to_four_digit(), 1988);
    }
}
