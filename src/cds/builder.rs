use super::{
    directory::{SubfileDesignator, SubfileType, SUBFILE_DESIGNATOR_SIZE},
    header::{header_length, Header},
    subfile::SubfileBuilder,
};

/// Largest subfile count a header can declare.
pub const MAX_SUBFILES: usize = 99;

/// Largest offset or length a subfile designator can hold.
pub const MAX_DESIGNATOR_FIELD: usize = 9999;

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum BuildError {
    #[error("document has no subfiles")]
    NoSubfiles,

    #[error("document has {0} subfiles, at most 99 are allowed")]
    TooManySubfiles(usize),

    #[error("subfile `{subfile_type}` needs a designator field of {value}, at most 9999 is allowed")]
    FieldOverflow {
        subfile_type: SubfileType,
        value: usize,
    },
}

/// Writes an AAMVA CDS document.
///
/// Designator offsets and lengths are computed from the pushed subfiles.
pub struct FileBuilder {
    header: Header,
    subfiles: Vec<SubfileBuilder>,
}

impl FileBuilder {
    pub fn new(issuer_id: &str, version: u8, jurisdiction_version: u8) -> Self {
        Self {
            header: Header {
                issuer_id: issuer_id.to_owned(),
                version,
                jurisdiction_version: Some(jurisdiction_version),
                entry_count: 0,
            },
            subfiles: Vec::new(),
        }
    }

    pub fn push(&mut self, subfile: SubfileBuilder) {
        self.subfiles.push(subfile);
    }

    pub fn with(mut self, subfile: SubfileBuilder) -> Self {
        self.push(subfile);
        self
    }

    /// Computes the designator of every subfile.
    fn directory(&self) -> Result<Vec<SubfileDesignator>, BuildError> {
        match self.subfiles.len() {
            0 => return Err(BuildError::NoSubfiles),
            n if n > MAX_SUBFILES => return Err(BuildError::TooManySubfiles(n)),
            _ => (),
        }

        let mut offset =
            header_length(self.header.version) + SUBFILE_DESIGNATOR_SIZE * self.subfiles.len();
        let mut designators = Vec::with_capacity(self.subfiles.len());
        for subfile in &self.subfiles {
            let subfile_type = subfile.subfile_type();
            let length = subfile.encoded_len();
            for value in [offset, length] {
                if value > MAX_DESIGNATOR_FIELD {
                    return Err(BuildError::FieldOverflow {
                        subfile_type,
                        value,
                    });
                }
            }

            designators.push(SubfileDesignator {
                subfile_type,
                offset,
                length,
            });
            offset += length;
        }

        Ok(designators)
    }

    /// Writes the document to `buffer`.
    ///
    /// Nothing is written if the subfiles do not fit in the directory.
    pub fn write(mut self, buffer: &mut Vec<u8>) -> Result<(), BuildError> {
        let designators = self.directory()?;
        self.header.entry_count = designators.len() as u8;
        self.header.encode(buffer);

        for designator in &designators {
            designator.encode(buffer);
        }

        for subfile in &self.subfiles {
            subfile.encode(buffer);
        }

        Ok(())
    }

    pub fn into_bytes(self) -> Result<Vec<u8>, BuildError> {
        let mut result = Vec::new();
        self.write(&mut result)?;
        Ok(result)
    }

    /// Encodes the document as a string. Non UTF-8 sequences in element
    /// values are replaced.
    pub fn into_string(self) -> Result<String, BuildError> {
        Ok(String::from_utf8_lossy(&self.into_bytes()?).into_owned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cds::subfile::Subfile;

    #[test]
    fn write_two_subfiles() {
        let bytes = FileBuilder::new("636020", 9, 1)
            .with(SubfileBuilder::new(SubfileType::DRIVERS_LICENSE).element(b"DAQ", "1"))
            .with(SubfileBuilder::new(SubfileType(*b"ZC")).element(b"ZCA", "X"))
            .into_bytes()
            .unwrap();

        assert_eq!(
            bytes,
            b"@\n\x1e\rANSI 636020090102DL00410007ZC00480007DLDAQ1\rZCZCAX\r"
        );

        let header = Header::decode(&bytes).unwrap();
        let designators = SubfileDesignator::decode_all(&bytes, &header).unwrap();
        let subfile = Subfile::decode(
            designators[1].subfile_type,
            designators[1].slice(&bytes),
        );
        assert_eq!(subfile.get(b"ZCA"), Some("X"));
    }

    #[test]
    fn legacy_header_layout() {
        let bytes = FileBuilder::new("636000", 1, 0)
            .with(SubfileBuilder::new(SubfileType::DRIVERS_LICENSE).element(b"DAA", "A,B"))
            .into_bytes()
            .unwrap();

        assert_eq!(bytes, b"@\n\x1e\rANSI 6360000101DL00290009DLDAAA,B\r");
    }

    #[test]
    fn reject_empty_document() {
        let mut buffer = Vec::new();
        assert_eq!(
            FileBuilder::new("636020", 9, 0).write(&mut buffer),
            Err(BuildError::NoSubfiles)
        );
        assert!(buffer.is_empty());
    }

    #[test]
    fn reject_too_many_subfiles() {
        let mut builder = FileBuilder::new("636020", 9, 0);
        for _ in 0..MAX_SUBFILES {
            builder.push(SubfileBuilder::new(SubfileType(*b"ZZ")));
        }
        let bytes = builder.into_bytes().unwrap();
        assert_eq!(Header::decode(&bytes).unwrap().entry_count, 99);

        let mut builder = FileBuilder::new("636020", 9, 0);
        for _ in 0..=MAX_SUBFILES {
            builder.push(SubfileBuilder::new(SubfileType(*b"ZZ")));
        }
        assert_eq!(builder.into_bytes(), Err(BuildError::TooManySubfiles(100)));
    }

    #[test]
    fn reject_oversized_length() {
        // 2 + "DCS" + 10000 + "\r"
        let result = FileBuilder::new("636020", 9, 0)
            .with(
                SubfileBuilder::new(SubfileType::DRIVERS_LICENSE)
                    .element(b"DCS", "X".repeat(10000)),
            )
            .into_string();

        assert_eq!(
            result,
            Err(BuildError::FieldOverflow {
                subfile_type: SubfileType::DRIVERS_LICENSE,
                value: 10006
            })
        );
    }

    #[test]
    fn reject_oversized_offset() {
        // The first subfile ends right at byte 10000.
        let filler = "X".repeat(10000 - 21 - 2 * SUBFILE_DESIGNATOR_SIZE - 2 - 3 - 1);
        let builder = FileBuilder::new("636020", 9, 0)
            .with(SubfileBuilder::new(SubfileType(*b"ZZ")).element(b"ZZA", filler))
            .with(SubfileBuilder::new(SubfileType::DRIVERS_LICENSE).element(b"DCS", "SMITH"));

        assert_eq!(
            builder.into_bytes(),
            Err(BuildError::FieldOverflow {
                subfile_type: SubfileType::DRIVERS_LICENSE,
                value: 10000
            })
        );
    }

    #[test]
    fn largest_document_round_trips() {
        let filler = "X".repeat(MAX_DESIGNATOR_FIELD - 2 - 3 - 1);
        let bytes = FileBuilder::new("636020", 9, 0)
            .with(SubfileBuilder::new(SubfileType::DRIVERS_LICENSE).element(b"DCS", filler.clone()))
            .into_bytes()
            .unwrap();

        let record = crate::parse(&bytes).unwrap();
        assert_eq!(record.last_name, Some(filler));
    }
}
