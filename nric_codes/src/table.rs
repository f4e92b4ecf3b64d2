// Copyright 2021-2025, Collabora, Ltd.
//
// SPDX-License-Identifier: Apache-2.0 OR MIT

use std::collections::BTreeMap;

use lazy_static::lazy_static;

use crate::code::{Partition, PlaceOfBirthCode};

/// An assigned place-of-birth code and what it stands for
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Region {
    pub code: PlaceOfBirthCode,
    pub partition: Partition,
    /// State or federal territory name for Malaysian codes, country or region name otherwise
    pub label: &'static str,
}

/// Codes for births in Malaysia, per state or federal territory.
///
/// The 21-59 block holds the additional codes handed out to each state before 2001.
const MALAYSIAN_STATES: &[(&[u8], &str)] = &[
    (&[1, 21, 22, 23, 24], "Johor"),
    (&[2, 25, 26, 27], "Kedah"),
    (&[3, 28, 29], "Kelantan"),
    (&[4, 30], "Melaka"),
    (&[5, 31, 59], "Negeri Sembilan"),
    (&[6, 32, 33], "Pahang"),
    (&[7, 34, 35], "Pulau Pinang"),
    (&[8, 36, 37, 38, 39], "Perak"),
    (&[9, 40], "Perlis"),
    (&[10, 41, 42, 43, 44], "Selangor"),
    (&[11, 45, 46], "Terengganu"),
    (&[12, 47, 48, 49], "Sabah"),
    (&[13, 50, 51, 52, 53], "Sarawak"),
    (&[14, 54, 55, 56, 57], "Wilayah Persekutuan Kuala Lumpur"),
    (&[15, 58], "Wilayah Persekutuan Labuan"),
    (&[16], "Wilayah Persekutuan Putrajaya"),
    (&[82], "Negeri Tidak Diketahui"),
];

/// Codes for births outside Malaysia, per country or world region.
const FOREIGN_COUNTRIES: &[(&[u8], &str)] = &[
    (&[60], "Brunei"),
    (&[61], "Indonesia"),
    (&[62], "Cambodia"),
    (&[63], "Laos"),
    (&[64], "Myanmar"),
    (&[65], "Philippines"),
    (&[66], "Singapore"),
    (&[67], "Thailand"),
    (&[68], "Vietnam"),
    (&[71, 72], "Outside Malaysia"),
    (&[74], "China"),
    (&[75], "India"),
    (&[76], "Pakistan"),
    (&[77], "Saudi Arabia"),
    (&[78], "Sri Lanka"),
    (&[79], "Bangladesh"),
    (&[83], "Asia Pacific"),
    (&[84], "South America"),
    (&[85], "Africa"),
    (&[86], "Europe"),
    (&[87], "United Kingdom"),
    (&[88], "Middle East"),
    (&[89], "Far East"),
    (&[90], "Caribbean"),
    (&[91], "North America"),
    (&[92], "Soviet Union"),
    (&[93], "Others"),
    (&[98], "Stateless"),
    (&[99], "Mecca / Neutral Zone / No Information"),
];

fn regions_from(
    entries: &'static [(&'static [u8], &'static str)],
    partition: Partition,
) -> impl Iterator<Item = Region> {
    entries.iter().flat_map(move |&(codes, label)| {
        codes.iter().filter_map(move |&value| {
            PlaceOfBirthCode::new(value).map(|code| Region {
                code,
                partition,
                label,
            })
        })
    })
}

lazy_static! {
    static ref REGIONS: BTreeMap<PlaceOfBirthCode, Region> =
        regions_from(MALAYSIAN_STATES, Partition::Malaysian)
            .chain(regions_from(FOREIGN_COUNTRIES, Partition::Foreigner))
            .map(|region| (region.code, region))
            .collect();
}

/// Look up the region assigned to a place-of-birth code.
///
/// Returns `None` for codes in neither partition.
pub fn lookup(code: PlaceOfBirthCode) -> Option<&'static Region> {
    REGIONS.get(&code)
}

fn codes_in(partition: Partition) -> impl Iterator<Item = PlaceOfBirthCode> {
    REGIONS
        .values()
        .filter(move |region| region.partition == partition)
        .map(|region| region.code)
}

/// All codes for births in Malaysia, ascending
pub fn malaysian_codes() -> impl Iterator<Item = PlaceOfBirthCode> {
    codes_in(Partition::Malaysian)
}

/// All codes for births outside Malaysia, ascending
pub fn foreigner_codes() -> impl Iterator<Item = PlaceOfBirthCode> {
    codes_in(Partition::Foreigner)
}

/// All assigned codes, ascending
pub fn valid_codes() -> impl Iterator<Item = PlaceOfBirthCode> {
    REGIONS.keys().copied()
}
