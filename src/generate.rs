// Copyright 2021-2025, Collabora, Ltd.
//
// SPDX-License-Identifier: Apache-2.0 OR MIT

use chrono::{DateTime, Months, Utc};
use nric_codes::{PlaceOfBirthCode, MAX_CODE};
use rand::Rng;

/// Youngest age, in years, of a generated card holder
pub const DEFAULT_MIN_AGE: u16 = 12;

/// Oldest age, in years, of a generated card holder (the longest verified human lifespan is a little over this)
pub const DEFAULT_MAX_AGE: u16 = 112;

/// Number of distinct values of the serial and gender digits together
const TAIL_VALUES: u16 = 10_000;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GeneratorOptionsError {
    #[error("Minimum age {min_age} must be less than maximum age {max_age}")]
    EmptyAgeRange { min_age: u16, max_age: u16 },
}

/// Controls the range of birth dates the generator picks from.
///
/// Birth dates fall in `[now - max_age years, now - min_age years)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GeneratorOptions {
    min_age: u16,
    max_age: u16,
}

impl Default for GeneratorOptions {
    fn default() -> Self {
        Self {
            min_age: DEFAULT_MIN_AGE,
            max_age: DEFAULT_MAX_AGE,
        }
    }
}

impl GeneratorOptions {
    pub fn new(min_age: u16, max_age: u16) -> Result<Self, GeneratorOptionsError> {
        if min_age < max_age {
            Ok(Self { min_age, max_age })
        } else {
            Err(GeneratorOptionsError::EmptyAgeRange { min_age, max_age })
        }
    }

    pub fn min_age(&self) -> u16 {
        self.min_age
    }

    pub fn max_age(&self) -> u16 {
        self.max_age
    }

    pub fn with_min_age(self, min_age: u16) -> Result<Self, GeneratorOptionsError> {
        Self::new(min_age, self.max_age)
    }

    pub fn with_max_age(self, max_age: u16) -> Result<Self, GeneratorOptionsError> {
        Self::new(self.min_age, max_age)
    }
}

fn years_before(now: DateTime<Utc>, years: u16) -> DateTime<Utc> {
    now.checked_sub_months(Months::new(u32::from(years) * 12))
        .unwrap_or(DateTime::<Utc>::MIN_UTC)
}

fn random_birth_date<R: Rng + ?Sized>(
    rng: &mut R,
    options: &GeneratorOptions,
    now: DateTime<Utc>,
) -> DateTime<Utc> {
    let earliest = years_before(now, options.max_age);
    let latest = years_before(now, options.min_age);
    if earliest >= latest {
        return earliest;
    }
    let second = rng.random_range(earliest.timestamp()..latest.timestamp());
    DateTime::from_timestamp(second, 0).unwrap_or(earliest)
}

fn random_place_of_birth<R: Rng + ?Sized>(rng: &mut R) -> PlaceOfBirthCode {
    loop {
        // 0..=98, so code 99 is never produced even though it is assigned
        if let Some(code) = PlaceOfBirthCode::new(rng.random_range(0..MAX_CODE)) {
            if code.is_valid() {
                return code;
            }
            log::trace!("Drew unassigned place of birth code {}, drawing again", code);
        }
    }
}

/// Generate a random NRIC number in `YYMMDD-PB-SSSG` form, as of the given instant.
pub fn generate_at<R: Rng + ?Sized>(
    rng: &mut R,
    options: &GeneratorOptions,
    now: DateTime<Utc>,
) -> String {
    let birth = random_birth_date(rng, options, now);
    let place = random_place_of_birth(rng);
    let tail = rng.random_range(0..TAIL_VALUES);
    format!("{}-{}-{:04}", birth.format("%y%m%d"), place, tail)
}

/// Generate a random NRIC number in `YYMMDD-PB-SSSG` form, using the supplied source of randomness.
pub fn generate_with<R: Rng + ?Sized>(rng: &mut R, options: &GeneratorOptions) -> String {
    generate_at(rng, options, Utc::now())
}

/// Generate a random NRIC number in `YYMMDD-PB-SSSG` form.
///
/// Uses the thread-local generator, so this is fine to call from many threads at once.
/// Nothing stops two calls from returning the same number.
pub fn generate() -> String {
    generate_with(&mut rand::rng(), &GeneratorOptions::default())
}
