use crate::cds::ElementId;

macro_rules! data_elements_enum {
	($(#[$enum_meta:meta])* $vis:vis enum $enum_id:ident { $($(#[$meta:meta])* $id:ident : $tag:literal),* }) => {
		$(#[$enum_meta])*
		#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
		$vis enum $enum_id {
			$($(#[$meta])* $id),*
		}

		impl $enum_id {
			pub fn id(&self) -> &'static ElementId {
				match self {
					$(Self::$id => $tag),*
				}
			}
		}
	};
}

data_elements_enum! {
    /// Data elements the field resolver reads, across all supported versions.
    pub enum DataElement {
        /// Driver License Name, `LAST,FIRST,MIDDLE,SUFFIX` (DAA, version 1).
        DriverLicenseName: b"DAA",

        /// Driver Last Name (DAB, version 1).
        DriverLastName: b"DAB",

        /// Customer First Name (DAC).
        CustomerFirstName: b"DAC",

        /// Customer Middle Name(s) (DAD).
        CustomerMiddleName: b"DAD",

        /// Driver Name Suffix (DAE, version 1).
        DriverNameSuffix: b"DAE",

        /// Address – Jurisdiction Code (DAJ).
        AddressJurisdictionCode: b"DAJ",

        /// Customer ID Number (DAQ).
        CustomerIdNumber: b"DAQ",

        /// Document Expiration Date (DBA).
        DocumentExpirationDate: b"DBA",

        /// Date of Birth (DBB).
        DateOfBirth: b"DBB",

        /// Country Identification (DCG).
        CountryIdentification: b"DCG",

        /// Customer Family Name (DCS).
        CustomerFamilyName: b"DCS",

        /// Customer Given Names, `FIRST,MIDDLE,...` (DCT, versions 2 and 3).
        CustomerGivenNames: b"DCT",

        /// Name Suffix (DCU).
        NameSuffix: b"DCU"
    }
}
