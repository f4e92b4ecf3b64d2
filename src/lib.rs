// Copyright 2021-2025, Collabora, Ltd.
//
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Parse, validate, and generate Malaysian NRIC (MyKAD) identity card numbers.
//!
//! An NRIC number is twelve digits, `YYMMDD-PB-SSSG`: date of birth, place-of-birth code,
//! three serial digits, and a final digit whose parity gives the gender.
//! The dashes are optional.

pub mod century;
mod decompose;
mod error;
mod generate;
mod mykad;

pub use decompose::{decompose, NricFields};
pub use error::MyKadError;
pub use generate::{
    generate, generate_at, generate_with, GeneratorOptions, GeneratorOptionsError,
    DEFAULT_MAX_AGE, DEFAULT_MIN_AGE,
};
pub use mykad::{CitizenType, Gender, MyKad, PlaceOfBirth, MALAYSIA};
pub use nric_codes::{Partition, PlaceOfBirthCode, Region};

/// Parse an NRIC number into a [`MyKad`].
pub fn parse(nric: &str) -> Result<MyKad, MyKadError> {
    MyKad::parse(nric)
}

/// Check an NRIC number, reporting the same errors [`parse`] would.
pub fn validate(nric: &str) -> Result<(), MyKadError> {
    parse(nric).map(|_| ())
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::{parse, validate, CitizenType, Gender, MyKadError, MALAYSIA};

    #[test]
    fn validate_matches_parse() {
        assert_eq!(validate("880808-14-5029"), Ok(()));
        assert_eq!(validate("880808145029"), Ok(()));
        for nric in &[
            "88O8O8-14-50291",
            "991332-14-0001",
            "880808-70-0001",
            "88080814502x",
            "8808081a5029",
        ] {
            assert_eq!(validate(nric), parse(nric).map(|_| ()), "input {}", nric);
            assert!(validate(nric).is_err());
        }
    }

    #[test]
    fn error_messages_name_the_field() {
        let message = |nric: &str| parse(nric).unwrap_err().to_string();
        assert!(message("88O8O8-14-50291").contains("88O8O8-14-50291"));
        assert!(message("991332-14-0001").contains("991332"));
        assert!(message("880808-70-0001").contains("70"));
        assert!(message("88080814502x").contains("\"x\""));
        assert!(message("8808081a5029").contains("1a"));
        assert!(matches!(
            parse("880808-99-0001").map(|m| m.citizen_type()),
            Ok(CitizenType::Foreigner)
        ));
        assert!(matches!(
            parse("880808-00-0001"),
            Err(MyKadError::InvalidPlaceOfBirth(_))
        ));
    }

    prop_compose! {
        fn valid_digits()(
            days in 0i64..36524,
            place in prop::sample::select(nric_codes::valid_codes().collect::<Vec<_>>()),
            tail in 0u16..10_000,
        ) -> String {
            // 1969-01-01 plus up to 100 years keeps every two-digit year in its own century
            let start = chrono::NaiveDate::from_ymd_opt(1969, 1, 1).unwrap();
            let date = start + chrono::Duration::days(days);
            format!("{}{}{:04}", date.format("%y%m%d"), place, tail)
        }
    }

    proptest! {
        #[test]
        fn dashes_do_not_change_fields(digits in valid_digits()) {
            let variants = [
                digits.clone(),
                format!("{}-{}", &digits[..6], &digits[6..]),
                format!("{}-{}", &digits[..8], &digits[8..]),
                format!("{}-{}-{}", &digits[..6], &digits[6..8], &digits[8..]),
            ];
            let first = parse(&variants[0]).unwrap();
            for variant in &variants[1..] {
                let other = parse(variant).unwrap();
                prop_assert_eq!(other.nric(), variant.as_str());
                prop_assert_eq!(other.canonical_nric(), first.canonical_nric());
                prop_assert_eq!(other.date_of_birth(), first.date_of_birth());
                prop_assert_eq!(other.place_of_birth(), first.place_of_birth());
                prop_assert_eq!(other.citizen_type(), first.citizen_type());
                prop_assert_eq!(other.gender(), first.gender());
            }
        }

        #[test]
        fn classification_follows_digits(digits in valid_digits()) {
            let mykad = parse(&digits).unwrap();
            let last = digits.as_bytes()[11] - b'0';
            prop_assert_eq!(mykad.gender() == Gender::Female, last % 2 == 0);

            let malaysian = mykad.place_of_birth_code().is_malaysian();
            prop_assert_eq!(mykad.citizen_type() == CitizenType::Malaysian, malaysian);
            prop_assert_eq!(mykad.place_of_birth().country == MALAYSIA, malaysian);
            if mykad.citizen_type() == CitizenType::Foreigner {
                prop_assert!(mykad.place_of_birth().province.is_empty());
            }

            prop_assert_eq!(parse(mykad.nric()).unwrap(), mykad);
        }

        #[test]
        fn never_panics(s in "\\PC{0,16}") {
            let _ = parse(&s);
        }
    }
}
