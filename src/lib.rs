//! This library parses the [AAMVA DL/ID Card Design Standard][cds] text
//! encoded in the PDF417 barcode of North American driver's licenses and
//! identification cards.
//!
//! [cds]: <https://www.aamva.org/assets/best-practices,-guides,-standards,-manuals,-whitepapers/aamva-dl-id-card-design-standard-(2020)>
//!
//! The barcode itself must already be decoded. [`parse`] validates the
//! document structure and returns the cardholder identity fields, resolved
//! according to the AAMVA version of the document:
//!
//! ```
//! let input = "@\n\x1e\rANSI 636020090001DL00310026DLDACJOHN\nDCSSMITH\nDCGUSA\r";
//! let record = aamva_cds::parse(input).unwrap();
//! assert_eq!(record.first_name.as_deref(), Some("JOHN"));
//! assert_eq!(record.last_name.as_deref(), Some("SMITH"));
//! assert_eq!(record.version, 9);
//! ```
pub mod cds;
mod options;
mod record;
pub mod resolver;

pub use cds::{parse, parse_with, Document, ParseError};
pub use options::ParseOptions;
pub use record::Record;
pub use resolver::{Field, FieldResolver, Profile};
