// Copyright 2021-2025, Collabora, Ltd.
//
// SPDX-License-Identifier: Apache-2.0 OR MIT

use std::{convert::TryFrom, fmt::Display, str::FromStr};

use derive_more::Into;

use crate::table::{self, Region};

/// Largest code representable in the two-digit place-of-birth field
pub const MAX_CODE: u8 = 99;

/// The two-digit place-of-birth field of an NRIC number (positions 6 and 7).
///
/// Any value in `0..=99` is representable; whether it means anything is up to the tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Into)]
pub struct PlaceOfBirthCode(u8);

/// Which part of the code space a place-of-birth code falls in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Partition {
    /// Born in a Malaysian state or federal territory
    Malaysian,
    /// Born outside Malaysia, code names the country or region
    Foreigner,
    /// No assignment for this code
    Invalid,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CodeParseError {
    #[error("Place of birth code must be exactly two digits, got {0:?}")]
    NotTwoDigits(String),
}

impl PlaceOfBirthCode {
    /// Returns `None` if the value does not fit in two digits.
    pub fn new(value: u8) -> Option<Self> {
        if value <= MAX_CODE {
            Some(Self(value))
        } else {
            None
        }
    }

    pub fn value(self) -> u8 {
        self.0
    }

    /// Look up the region this code was assigned to, if any.
    pub fn region(self) -> Option<&'static Region> {
        table::lookup(self)
    }

    pub fn partition(self) -> Partition {
        self.region()
            .map(|region| region.partition)
            .unwrap_or(Partition::Invalid)
    }

    pub fn is_malaysian(self) -> bool {
        self.partition() == Partition::Malaysian
    }

    pub fn is_foreigner(self) -> bool {
        self.partition() == Partition::Foreigner
    }

    /// Is this code in either the Malaysian or the foreigner partition?
    pub fn is_valid(self) -> bool {
        self.partition() != Partition::Invalid
    }

    /// Every representable code, valid or not, in ascending order.
    pub fn all() -> impl Iterator<Item = PlaceOfBirthCode> {
        (0..=MAX_CODE).map(PlaceOfBirthCode)
    }
}

impl Display for PlaceOfBirthCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:02}", self.0)
    }
}

impl FromStr for PlaceOfBirthCode {
    type Err = CodeParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        // u8::from_str would also take a leading '+', which is not a digit
        if s.len() != 2 || !s.bytes().all(|b| b.is_ascii_digit()) {
            return Err(CodeParseError::NotTwoDigits(s.to_string()));
        }
        s.parse::<u8>()
            .map(PlaceOfBirthCode)
            .map_err(|_| CodeParseError::NotTwoDigits(s.to_string()))
    }
}

impl TryFrom<u8> for PlaceOfBirthCode {
    type Error = CodeParseError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value).ok_or_else(|| CodeParseError::NotTwoDigits(value.to_string()))
    }
}
