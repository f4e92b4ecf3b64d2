// Copyright 2021-2025, Collabora, Ltd.
//
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Place-of-birth codes used in Malaysian NRIC numbers.
//!
//! Every two-digit code is either assigned to a Malaysian state or federal territory,
//! assigned to a foreign country or world region, or unassigned.

mod code;
mod table;

pub use code::{CodeParseError, Partition, PlaceOfBirthCode, MAX_CODE};
pub use table::{foreigner_codes, lookup, malaysian_codes, valid_codes, Region};
