// Copyright 2021-2025, Collabora, Ltd.
//
// SPDX-License-Identifier: Apache-2.0 OR MIT

use nric_codes::{CodeParseError, PlaceOfBirthCode};

/// Why an NRIC number was rejected.
///
/// Parsing stops at the first problem, checked in the order the variants are listed.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MyKadError {
    #[error("Invalid NRIC format {0:?}: expected 12 digits as YYMMDD-PB-SSSG, dashes optional")]
    InvalidFormat(String),

    #[error("Invalid date of birth field {0:?}: not a YYMMDD calendar date")]
    InvalidDate(String),

    #[error("Invalid place of birth field: {0}")]
    InvalidPlaceOfBirthCode(#[from] CodeParseError),

    #[error("Invalid place of birth code {0}: not assigned to any state or country")]
    InvalidPlaceOfBirth(PlaceOfBirthCode),

    #[error("Invalid gender digit {0:?}: expected a single decimal digit")]
    InvalidGenderDigit(String),
}
