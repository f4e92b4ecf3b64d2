// Copyright 2021-2025, Collabora, Ltd.
//
// SPDX-License-Identifier: Apache-2.0 OR MIT

use std::borrow::Cow;

use lazy_static::lazy_static;
use regex::Regex;

use crate::MyKadError;

/// Length of an NRIC number with no dashes
pub(crate) const BARE_LENGTH: usize = 12;

/// The four positional fields of an NRIC number, borrowed from the input.
///
/// Nothing about the contents is checked here beyond what it takes to split the string.
/// A field is only owned when a byte offset fell inside a multi-byte character, in which
/// case the broken bytes show up as U+FFFD.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct NricFields<'a> {
    /// `YYMMDD`
    pub date: Cow<'a, str>,
    /// Two-digit place-of-birth code
    pub place: Cow<'a, str>,
    /// Three opaque digits
    pub serial: Cow<'a, str>,
    /// Last digit, odd for male and even for female
    pub gender: Cow<'a, str>,
}

impl<'a> NricFields<'a> {
    fn as_array(&self) -> [&str; 4] {
        [&*self.date, &*self.place, &*self.serial, &*self.gender]
    }

    /// The twelve characters with no punctuation
    pub fn digits(&self) -> String {
        self.as_array().concat()
    }

    /// The canonical `YYMMDD-PB-SSSG` form
    pub fn canonical(&self) -> String {
        format!("{}-{}-{}{}", self.date, self.place, self.serial, self.gender)
    }
}

fn split_bare(nric: &str) -> NricFields<'_> {
    // Slice bytes, not chars: str indexing would panic off a char boundary
    let bytes = nric.as_bytes();
    NricFields {
        date: String::from_utf8_lossy(&bytes[0..6]),
        place: String::from_utf8_lossy(&bytes[6..8]),
        serial: String::from_utf8_lossy(&bytes[8..11]),
        gender: String::from_utf8_lossy(&bytes[11..12]),
    }
}

fn split_punctuated(nric: &str) -> Option<NricFields<'_>> {
    lazy_static! {
        // \d would also take non-ASCII digits
        static ref RE: Regex = Regex::new(r"^([0-9]{6})-?([0-9]{2})-?([0-9]{3})([0-9])$").unwrap();
    }
    let captures = RE.captures(nric)?;
    Some(NricFields {
        date: Cow::Borrowed(captures.get(1)?.as_str()),
        place: Cow::Borrowed(captures.get(2)?.as_str()),
        serial: Cow::Borrowed(captures.get(3)?.as_str()),
        gender: Cow::Borrowed(captures.get(4)?.as_str()),
    })
}

/// Split an NRIC number into its four positional fields.
///
/// A 12-byte input is sliced by byte position without looking at the contents, so it never
/// fails here; bad contents are reported by whichever field check rejects them first.
/// Anything else must be twelve digits with optional dashes after the date and after the place code.
pub fn decompose(nric: &str) -> Result<NricFields<'_>, MyKadError> {
    if nric.len() == BARE_LENGTH {
        return Ok(split_bare(nric));
    }
    split_punctuated(nric).ok_or_else(|| MyKadError::InvalidFormat(nric.to_string()))
}
