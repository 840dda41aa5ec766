use serde::{Deserialize, Serialize};

/// Identity fields extracted from a document.
///
/// Every field but `version` is optional: an element missing from the
/// document, or one that cannot be normalized, is `None`.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Record {
    pub first_name: Option<String>,
    pub middle_names: Option<Vec<String>>,
    pub last_name: Option<String>,
    pub suffix: Option<String>,

    /// Expiration date, as `YEAR-MONTH-DAY`.
    pub expiration_date: Option<String>,

    /// Date of birth, as `YEAR-MONTH-DAY`.
    pub date_of_birth: Option<String>,

    pub id_number: Option<String>,
    pub country: Option<String>,

    /// Jurisdiction code of the cardholder address.
    pub state: Option<String>,

    /// AAMVA version number found in the header.
    pub version: u8,
}
