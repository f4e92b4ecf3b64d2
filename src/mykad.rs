// Copyright 2021-2025, Collabora, Ltd.
//
// SPDX-License-Identifier: Apache-2.0 OR MIT

use std::{convert::TryFrom, fmt::Display, str::FromStr};

use chrono::{Datelike, NaiveDate};
use nric_codes::{Partition, PlaceOfBirthCode};

use crate::{
    century::TwoDigitYear,
    decompose::{decompose, NricFields},
    MyKadError,
};

/// Country name used for every code in the Malaysian partition
pub const MALAYSIA: &str = "Malaysia";

/// Where the card holder was born.
///
/// `province` is empty for births outside Malaysia.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PlaceOfBirth {
    pub country: String,
    pub province: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CitizenType {
    Malaysian,
    Foreigner,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Gender {
    Male,
    Female,
}

impl Gender {
    /// Odd digits are male, even digits (including zero) are female.
    pub fn from_digit(digit: u8) -> Self {
        if digit % 2 == 0 {
            Gender::Female
        } else {
            Gender::Male
        }
    }
}

impl Display for Gender {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Gender::Male => write!(f, "Male"),
            Gender::Female => write!(f, "Female"),
        }
    }
}

impl Display for CitizenType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CitizenType::Malaysian => write!(f, "Malaysian"),
            CitizenType::Foreigner => write!(f, "Foreigner"),
        }
    }
}

impl Display for PlaceOfBirth {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.province.is_empty() {
            write!(f, "{}", self.country)
        } else {
            write!(f, "{}, {}", self.province, self.country)
        }
    }
}

/// A parsed NRIC number.
///
/// Two records are equal when all of their fields are, including the exact text
/// (dashes and all) that was parsed.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct MyKad {
    nric: String,
    canonical: String,
    date_of_birth: NaiveDate,
    place_of_birth_code: PlaceOfBirthCode,
    place_of_birth: PlaceOfBirth,
    citizen_type: CitizenType,
    gender: Gender,
}

fn parse_two_digits(s: &str) -> Option<u8> {
    if s.len() == 2 && s.bytes().all(|b| b.is_ascii_digit()) {
        s.parse().ok()
    } else {
        None
    }
}

fn parse_date_of_birth(field: &str) -> Result<NaiveDate, MyKadError> {
    let invalid = || MyKadError::InvalidDate(field.to_string());
    if field.len() != 6 {
        return Err(invalid());
    }
    let year = field
        .get(0..2)
        .and_then(parse_two_digits)
        .and_then(TwoDigitYear::new)
        .ok_or_else(invalid)?;
    let month = field.get(2..4).and_then(parse_two_digits).ok_or_else(invalid)?;
    let day = field.get(4..6).and_then(parse_two_digits).ok_or_else(invalid)?;
    NaiveDate::from_ymd_opt(year.to_four_digit(), u32::from(month), u32::from(day))
        .ok_or_else(invalid)
}

fn classify_place_of_birth(
    code: PlaceOfBirthCode,
) -> Result<(CitizenType, PlaceOfBirth), MyKadError> {
    let region = code.region().ok_or(MyKadError::InvalidPlaceOfBirth(code))?;
    match region.partition {
        Partition::Malaysian => Ok((
            CitizenType::Malaysian,
            PlaceOfBirth {
                country: MALAYSIA.to_string(),
                province: region.label.to_string(),
            },
        )),
        Partition::Foreigner => Ok((
            CitizenType::Foreigner,
            PlaceOfBirth {
                country: region.label.to_string(),
                province: String::new(),
            },
        )),
        Partition::Invalid => Err(MyKadError::InvalidPlaceOfBirth(code)),
    }
}

fn parse_gender(field: &str) -> Result<Gender, MyKadError> {
    match field.as_bytes() {
        [digit] if digit.is_ascii_digit() => Ok(Gender::from_digit(digit - b'0')),
        _ => Err(MyKadError::InvalidGenderDigit(field.to_string())),
    }
}

impl MyKad {
    /// Parse an NRIC number, with or without its dashes.
    ///
    /// Checks happen in order (format, date, place code, gender) and the first failure is returned.
    pub fn parse(nric: &str) -> Result<Self, MyKadError> {
        let result = decompose(nric).and_then(|fields| Self::from_fields(nric, &fields));
        if let Err(e) = &result {
            log::debug!("Rejected NRIC {:?}: {}", nric, e);
        }
        result
    }

    fn from_fields(nric: &str, fields: &NricFields<'_>) -> Result<Self, MyKadError> {
        let date_of_birth = parse_date_of_birth(&fields.date)?;
        let place_of_birth_code: PlaceOfBirthCode = fields.place.parse()?;
        let (citizen_type, place_of_birth) = classify_place_of_birth(place_of_birth_code)?;
        let gender = parse_gender(&fields.gender)?;
        Ok(Self {
            nric: nric.to_string(),
            canonical: fields.canonical(),
            date_of_birth,
            place_of_birth_code,
            place_of_birth,
            citizen_type,
            gender,
        })
    }

    /// The text this record was parsed from, exactly as given
    pub fn nric(&self) -> &str {
        &self.nric
    }

    /// The number in `YYMMDD-PB-SSSG` form, whatever punctuation the input used
    pub fn canonical_nric(&self) -> &str {
        &self.canonical
    }

    /// Date of birth, with the year resolved as described in [`crate::century`]
    pub fn date_of_birth(&self) -> NaiveDate {
        self.date_of_birth
    }

    /// The year exactly as printed on the card
    pub fn birth_year_two_digit(&self) -> TwoDigitYear {
        TwoDigitYear::from(self.date_of_birth)
    }

    pub fn place_of_birth_code(&self) -> PlaceOfBirthCode {
        self.place_of_birth_code
    }

    pub fn place_of_birth(&self) -> &PlaceOfBirth {
        &self.place_of_birth
    }

    pub fn citizen_type(&self) -> CitizenType {
        self.citizen_type
    }

    pub fn gender(&self) -> Gender {
        self.gender
    }

    /// The three serial digits, which carry no meaning we decode
    pub fn serial(&self) -> &str {
        // canonical is always YYMMDD-PB-SSSG
        &self.canonical[10..13]
    }

    /// Age in whole years on the given day, or `None` if that day is before the date of birth.
    pub fn age_on(&self, day: NaiveDate) -> Option<u32> {
        if day < self.date_of_birth {
            return None;
        }
        let mut age = day.year() - self.date_of_birth.year();
        if (day.month(), day.day()) < (self.date_of_birth.month(), self.date_of_birth.day()) {
            age -= 1;
        }
        u32::try_from(age).ok()
    }
}

impl FromStr for MyKad {
    type Err = MyKadError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<&str> for MyKad {
    type Error = MyKadError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::parse(value)
    }
}

impl Display for MyKad {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.canonical)
    }
}
