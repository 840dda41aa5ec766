use std::ops::Range;

use log::{trace, warn};

use super::header::{decode_digits4, encode_digits4, Header};

/// Length of one subfile designator: type, offset and length.
pub const SUBFILE_DESIGNATOR_SIZE: usize = 2 + 4 + 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum DirectoryError {
    #[error("subfile designator {0} is truncated")]
    Truncated(usize),

    #[error("subfile designator {0} has a non-numeric offset")]
    Offset(usize),

    #[error("subfile designator {0} has a non-numeric length")]
    Length(usize),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("subfile `{subfile_type}` spans bytes {start}..{end}, document is {len} bytes long")]
pub struct OutOfBounds {
    pub subfile_type: SubfileType,
    pub start: usize,
    pub end: usize,
    pub len: usize,
}

/// Two-letter subfile type code (`DL`, `ID`, `EN`, `ZZ`, ...).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SubfileType(pub [u8; 2]);

impl SubfileType {
    pub const DRIVERS_LICENSE: Self = Self(*b"DL");
    pub const IDENTIFICATION: Self = Self(*b"ID");
    pub const ENHANCED: Self = Self(*b"EN");

    /// Subfile types holding cardholder identity elements.
    pub const IDENTITY: [Self; 3] = [Self::IDENTIFICATION, Self::ENHANCED, Self::DRIVERS_LICENSE];

    pub fn is_identity(&self) -> bool {
        Self::IDENTITY.contains(self)
    }

    pub fn as_bytes(&self) -> &[u8; 2] {
        &self.0
    }
}

impl std::fmt::Display for SubfileType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", String::from_utf8_lossy(&self.0))
    }
}

impl PartialEq<&str> for SubfileType {
    fn eq(&self, other: &&str) -> bool {
        self.0 == other.as_bytes()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubfileDesignator {
    pub subfile_type: SubfileType,
    pub offset: usize,
    pub length: usize,
}

impl SubfileDesignator {
    /// Decodes the `index`-th designator of the directory following `header`.
    pub fn decode(bytes: &[u8], header: &Header, index: usize) -> Result<Self, DirectoryError> {
        let start = header.length() + index * SUBFILE_DESIGNATOR_SIZE;
        let record = bytes
            .get(start..start + SUBFILE_DESIGNATOR_SIZE)
            .ok_or(DirectoryError::Truncated(index))?;

        Ok(Self {
            subfile_type: SubfileType([record[0], record[1]]),
            offset: decode_digits4(&record[2..6]).ok_or(DirectoryError::Offset(index))?,
            length: decode_digits4(&record[6..10]).ok_or(DirectoryError::Length(index))?,
        })
    }

    /// Decodes the whole directory, in declaration order.
    pub fn decode_all(bytes: &[u8], header: &Header) -> Result<Vec<Self>, DirectoryError> {
        let entry_count = header.entry_count as usize;
        let mut designators = Vec::with_capacity(entry_count);
        for i in 0..entry_count {
            let designator = Self::decode(bytes, header, i)?;
            trace!(
                "subfile designator {i}: type={}, offset={}, length={}",
                designator.subfile_type,
                designator.offset,
                designator.length
            );
            designators.push(designator);
        }

        Ok(designators)
    }

    pub fn range(&self) -> Range<usize> {
        self.offset..self.offset + self.length
    }

    /// Returns the bytes covered by this designator.
    ///
    /// A range reaching past the end of the document is clamped, which can
    /// leave a truncated or empty subfile.
    pub fn slice<'a>(&self, bytes: &'a [u8]) -> &'a [u8] {
        let end = self.range().end.min(bytes.len());
        let start = self.offset.min(end);
        if end - start < self.length {
            warn!(
                "subfile `{}` truncated to {} of {} bytes",
                self.subfile_type,
                end - start,
                self.length
            );
        }

        &bytes[start..end]
    }

    /// Returns the bytes covered by this designator, or an error if any of
    /// them lies outside the document.
    pub fn slice_strict<'a>(&self, bytes: &'a [u8]) -> Result<&'a [u8], OutOfBounds> {
        let range = self.range();
        bytes.get(range.clone()).ok_or(OutOfBounds {
            subfile_type: self.subfile_type,
            start: range.start,
            end: range.end,
            len: bytes.len(),
        })
    }

    pub fn encode(&self, buffer: &mut Vec<u8>) {
        buffer.extend(self.subfile_type.0);
        buffer.extend(encode_digits4(self.offset));
        buffer.extend(encode_digits4(self.length));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DOCUMENT: &[u8] =
        b"@\n\x1e\rANSI 636020030002DL00410017ZZ00580007DLDAQ1234\nDCGUSA\rZZZZAB\r";

    fn header() -> Header {
        Header::decode(DOCUMENT).unwrap()
    }

    #[test]
    fn decode_directory() {
        let designators = SubfileDesignator::decode_all(DOCUMENT, &header()).unwrap();
        assert_eq!(designators.len(), 2);
        assert_eq!(designators[0].subfile_type, "DL");
        assert_eq!(designators[0].offset, 41);
        assert_eq!(designators[0].length, 17);
        assert_eq!(designators[1].subfile_type, "ZZ");
        assert_eq!(designators[0].slice(DOCUMENT), b"DLDAQ1234\nDCGUSA\r");
        assert_eq!(designators[1].slice(DOCUMENT), b"ZZZZAB\r");
    }

    #[test]
    fn reject_non_numeric_fields() {
        let document = b"@\n\x1e\rANSI 636020030001DL00x10012";
        let header = Header::decode(document).unwrap();
        assert_eq!(
            SubfileDesignator::decode_all(document, &header),
            Err(DirectoryError::Offset(0))
        );

        let document = b"@\n\x1e\rANSI 636020030001DL0041001 ";
        assert_eq!(
            SubfileDesignator::decode_all(document, &header),
            Err(DirectoryError::Length(0))
        );
    }

    #[test]
    fn reject_truncated_directory() {
        let document = b"@\n\x1e\rANSI 636020030002DL00410012ZZ";
        let header = Header::decode(document).unwrap();
        assert_eq!(
            SubfileDesignator::decode_all(document, &header),
            Err(DirectoryError::Truncated(1))
        );
    }

    #[test]
    fn lax_slice_clamps() {
        let designator = SubfileDesignator {
            subfile_type: SubfileType::DRIVERS_LICENSE,
            offset: 4,
            length: 100,
        };
        assert_eq!(designator.slice(b"0123456789"), b"456789");

        let designator = SubfileDesignator {
            subfile_type: SubfileType::DRIVERS_LICENSE,
            offset: 40,
            length: 10,
        };
        assert_eq!(designator.slice(b"0123456789"), b"");
    }

    #[test]
    fn strict_slice_rejects() {
        let designator = SubfileDesignator {
            subfile_type: SubfileType::DRIVERS_LICENSE,
            offset: 4,
            length: 100,
        };
        let err = designator.slice_strict(b"0123456789").unwrap_err();
        assert_eq!(err.start, 4);
        assert_eq!(err.end, 104);
        assert_eq!(err.len, 10);

        let designator = SubfileDesignator {
            subfile_type: SubfileType::DRIVERS_LICENSE,
            offset: 4,
            length: 4,
        };
        assert_eq!(designator.slice_strict(b"0123456789"), Ok(&b"4567"[..]));
    }
}
