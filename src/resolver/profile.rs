use std::collections::HashMap;

use lazy_static::lazy_static;

use super::element::DataElement;

/// Semantic field extracted from an identity subfile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Field {
    FirstName,
    MiddleNames,
    LastName,
    Suffix,
    ExpirationDate,
    DateOfBirth,
    IdNumber,
    Country,
    State,

    /// Composite `LAST,FIRST,MIDDLE,SUFFIX` name of version 1 documents.
    DriverLicenseName,
}

const BASE: [(Field, DataElement); 9] = [
    (Field::FirstName, DataElement::CustomerFirstName),
    (Field::MiddleNames, DataElement::CustomerMiddleName),
    (Field::LastName, DataElement::CustomerFamilyName),
    (Field::Suffix, DataElement::NameSuffix),
    (Field::ExpirationDate, DataElement::DocumentExpirationDate),
    (Field::DateOfBirth, DataElement::DateOfBirth),
    (Field::IdNumber, DataElement::CustomerIdNumber),
    (Field::Country, DataElement::CountryIdentification),
    (Field::State, DataElement::AddressJurisdictionCode),
];

const COMPOSITE_NAME: [(Field, DataElement); 3] = [
    (Field::DriverLicenseName, DataElement::DriverLicenseName),
    (Field::LastName, DataElement::DriverLastName),
    (Field::Suffix, DataElement::DriverNameSuffix),
];

const COMBINED_GIVEN_NAMES: [(Field, DataElement); 2] = [
    (Field::FirstName, DataElement::CustomerGivenNames),
    (Field::MiddleNames, DataElement::CustomerGivenNames),
];

/// Mapping from semantic fields to the data elements holding them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldMapping(HashMap<Field, DataElement>);

impl FieldMapping {
    /// Builds the base mapping with `overrides` applied on top.
    fn with_overrides(overrides: &[(Field, DataElement)]) -> Self {
        Self(BASE.iter().chain(overrides).copied().collect())
    }

    pub fn get(&self, field: Field) -> Option<DataElement> {
        self.0.get(&field).copied()
    }
}

lazy_static! {
    static ref BASE_MAPPING: FieldMapping = FieldMapping::with_overrides(&[]);
    static ref COMPOSITE_NAME_MAPPING: FieldMapping =
        FieldMapping::with_overrides(&COMPOSITE_NAME);
    static ref COMBINED_GIVEN_NAMES_MAPPING: FieldMapping =
        FieldMapping::with_overrides(&COMBINED_GIVEN_NAMES);
}

/// Name encoding conventions of the AAMVA versions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Profile {
    /// Separate first, middle and family name elements.
    Base,

    /// Version 1: direct name elements, with a fallback on the composite
    /// driver license name.
    CompositeName,

    /// Versions 2 and 3: first and middle names share the given names
    /// element.
    CombinedGivenNames,
}

impl Profile {
    pub fn for_version(version: u8) -> Self {
        match version {
            1 => Self::CompositeName,
            2 | 3 => Self::CombinedGivenNames,
            // 4 to 10 are reserved for version specific changes, none needed
            // so far.
            _ => Self::Base,
        }
    }

    pub fn mapping(&self) -> &'static FieldMapping {
        match self {
            Self::Base => &BASE_MAPPING,
            Self::CompositeName => &COMPOSITE_NAME_MAPPING,
            Self::CombinedGivenNames => &COMBINED_GIVEN_NAMES_MAPPING,
        }
    }
}
