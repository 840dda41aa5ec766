//! Version dependent resolution of identity fields.
//!
//! Each AAMVA version stores names differently. A [`Profile`] selected from
//! the header version tells which data elements hold each [`Field`] and how
//! composite name elements are split.
use log::debug;

use crate::{cds::Elements, Record};

pub mod date;
mod element;
mod profile;

pub use element::DataElement;
pub use profile::{Field, FieldMapping, Profile};

const NAME_SEPARATOR: char = ',';

/// Position of each name in the version 1 composite name.
const COMPOSITE_LAST_NAME: usize = 0;
const COMPOSITE_FIRST_NAME: usize = 1;
const COMPOSITE_MIDDLE_NAME: usize = 2;
const COMPOSITE_SUFFIX: usize = 3;

/// Reads semantic fields out of the elements of an identity subfile.
#[derive(Debug, Clone, Copy)]
pub struct FieldResolver<'a> {
    profile: Profile,
    mapping: &'static FieldMapping,
    elements: &'a Elements,
}

impl<'a> FieldResolver<'a> {
    /// Creates a resolver using the profile of the given AAMVA version.
    pub fn new(version: u8, elements: &'a Elements) -> Self {
        let profile = Profile::for_version(version);
        debug!("resolving fields of version {version} with profile {profile:?}");
        Self::with_profile(profile, elements)
    }

    pub fn with_profile(profile: Profile, elements: &'a Elements) -> Self {
        Self {
            profile,
            mapping: profile.mapping(),
            elements,
        }
    }

    pub fn profile(&self) -> Profile {
        self.profile
    }

    /// Returns the value of the element mapped to `field`.
    ///
    /// Unmapped fields, missing elements and empty values all resolve to
    /// `None`.
    pub fn resolve_string(&self, field: Field) -> Option<&'a str> {
        let element = self.mapping.get(field)?;
        let elements: &'a Elements = self.elements;
        elements.get(element.id()).filter(|v| !v.is_empty())
    }

    /// Returns the date held by the element mapped to `field`, normalized by
    /// [`date::normalize`] according to the document country.
    pub fn resolve_date(&self, field: Field) -> Option<String> {
        date::normalize(self.resolve_string(field)?, self.resolve_string(Field::Country))
    }

    /// Returns the `index`-th segment of the version 1 composite name.
    fn composite_name_segment(&self, index: usize) -> Option<&'a str> {
        self.resolve_string(Field::DriverLicenseName)?
            .split(NAME_SEPARATOR)
            .nth(index)
            .filter(|s| !s.is_empty())
    }

    pub fn first_name(&self) -> Option<String> {
        let value = self.resolve_string(Field::FirstName);
        let first_name = match self.profile {
            Profile::Base => value,
            Profile::CompositeName => {
                value.or_else(|| self.composite_name_segment(COMPOSITE_FIRST_NAME))
            }
            Profile::CombinedGivenNames => value
                .and_then(|v| v.split(NAME_SEPARATOR).next())
                .map(str::trim)
                .filter(|v| !v.is_empty()),
        };

        first_name.map(ToOwned::to_owned)
    }

    pub fn middle_names(&self) -> Option<Vec<String>> {
        let value = self.resolve_string(Field::MiddleNames);
        match self.profile {
            Profile::Base => value.map(split_names),
            Profile::CompositeName => value
                .or_else(|| self.composite_name_segment(COMPOSITE_MIDDLE_NAME))
                .map(split_names),
            Profile::CombinedGivenNames => value
                .and_then(|v| v.split_once(NAME_SEPARATOR))
                .map(|(_, rest)| split_names(rest)),
        }
    }

    pub fn last_name(&self) -> Option<String> {
        let value = self.resolve_string(Field::LastName);
        let last_name = match self.profile {
            Profile::CompositeName => {
                value.or_else(|| self.composite_name_segment(COMPOSITE_LAST_NAME))
            }
            Profile::Base | Profile::CombinedGivenNames => value,
        };

        last_name.map(ToOwned::to_owned)
    }

    pub fn suffix(&self) -> Option<String> {
        let value = self.resolve_string(Field::Suffix);
        let suffix = match self.profile {
            Profile::CompositeName => {
                value.or_else(|| self.composite_name_segment(COMPOSITE_SUFFIX))
            }
            Profile::Base | Profile::CombinedGivenNames => value,
        };

        suffix.map(ToOwned::to_owned)
    }

    pub fn expiration_date(&self) -> Option<String> {
        self.resolve_date(Field::ExpirationDate)
    }

    pub fn date_of_birth(&self) -> Option<String> {
        self.resolve_date(Field::DateOfBirth)
    }

    pub fn id_number(&self) -> Option<String> {
        self.resolve_string(Field::IdNumber).map(ToOwned::to_owned)
    }

    pub fn country(&self) -> Option<String> {
        self.resolve_string(Field::Country).map(ToOwned::to_owned)
    }

    pub fn state(&self) -> Option<String> {
        self.resolve_string(Field::State).map(ToOwned::to_owned)
    }

    pub fn record(&self, version: u8) -> Record {
        Record {
            first_name: self.first_name(),
            middle_names: self.middle_names(),
            last_name: self.last_name(),
            suffix: self.suffix(),
            expiration_date: self.expiration_date(),
            date_of_birth: self.date_of_birth(),
            id_number: self.id_number(),
            country: self.country(),
            state: self.state(),
            version,
        }
    }
}

/// Splits a comma separated list of names. Commas cannot be escaped.
fn split_names(value: &str) -> Vec<String> {
    value.split(NAME_SEPARATOR).map(ToOwned::to_owned).collect()
}
