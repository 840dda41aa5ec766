//! AAMVA DL/ID Card Design Standard documents.
//!
//! A document is a fixed header, a directory of subfile designators and the
//! subfiles themselves, each holding `\n` separated data elements.
//!
//! See: <https://www.aamva.org/assets/best-practices,-guides,-standards,-manuals,-whitepapers/aamva-dl-id-card-design-standard-(2020)>
use log::debug;

use crate::{resolver::FieldResolver, ParseOptions, Record};

mod builder;
pub mod directory;
pub mod header;
pub mod subfile;

pub use builder::{BuildError, FileBuilder};
pub use directory::{DirectoryError, OutOfBounds, SubfileDesignator, SubfileType};
pub use header::{EnvelopeError, Header};
pub use subfile::{ElementId, Elements, Subfile, SubfileBuilder};

/// Parse error.
///
/// Structural errors all display the same message. The precise cause is
/// available as the error source.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    #[error("Invalid AAMVA CDS data")]
    MalformedEnvelope(#[from] EnvelopeError),

    #[error("Invalid AAMVA CDS data")]
    MalformedDirectory(#[from] DirectoryError),

    #[error("Invalid AAMVA CDS data")]
    SubfileOutOfBounds(#[from] OutOfBounds),

    #[error("No subfiles found")]
    NoSubfiles,

    #[error("No subfile found")]
    NoApplicableSubfile,
}

/// Decoded document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    header: Header,
    subfiles: Vec<Subfile>,
}

impl Document {
    pub fn decode(input: impl AsRef<[u8]>) -> Result<Self, ParseError> {
        Self::decode_with(input, &ParseOptions::default())
    }

    pub fn decode_with(input: impl AsRef<[u8]>, options: &ParseOptions) -> Result<Self, ParseError> {
        let bytes = input.as_ref();
        let header = Header::decode(bytes)?;
        let designators = SubfileDesignator::decode_all(bytes, &header)?;

        let mut subfiles = Vec::with_capacity(designators.len());
        for designator in &designators {
            let raw = if options.strict_bounds {
                designator.slice_strict(bytes)?
            } else {
                designator.slice(bytes)
            };

            subfiles.push(Subfile::decode(designator.subfile_type, raw));
        }

        debug!(
            "decoded version {} document with {} subfiles",
            header.version,
            subfiles.len()
        );

        Ok(Self { header, subfiles })
    }

    pub fn header(&self) -> &Header {
        &self.header
    }

    pub fn version(&self) -> u8 {
        self.header.version
    }

    /// Subfiles, in directory order.
    pub fn subfiles(&self) -> &[Subfile] {
        &self.subfiles
    }

    /// Returns the first subfile of the given type.
    pub fn subfile(&self, subfile_type: SubfileType) -> Option<&Subfile> {
        self.subfiles
            .iter()
            .find(|s| s.subfile_type == subfile_type)
    }

    /// Returns the first subfile, in directory order, holding cardholder
    /// identity elements (`ID`, `EN` or `DL`).
    pub fn primary_subfile(&self) -> Result<&Subfile, ParseError> {
        if self.subfiles.is_empty() {
            return Err(ParseError::NoSubfiles);
        }

        self.subfiles
            .iter()
            .find(|s| s.subfile_type.is_identity())
            .ok_or(ParseError::NoApplicableSubfile)
    }

    /// Extracts the identity fields of the primary subfile.
    pub fn record(&self) -> Result<Record, ParseError> {
        let subfile = self.primary_subfile()?;
        debug!("reading identity fields from subfile `{}`", subfile.subfile_type);
        Ok(FieldResolver::new(self.version(), &subfile.elements).record(self.version()))
    }
}

/// Parses an AAMVA CDS document and extracts its identity fields.
pub fn parse(input: impl AsRef<[u8]>) -> Result<Record, ParseError> {
    parse_with(input, &ParseOptions::default())
}

pub fn parse_with(input: impl AsRef<[u8]>, options: &ParseOptions) -> Result<Record, ParseError> {
    Document::decode_with(input, options)?.record()
}
