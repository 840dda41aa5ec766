use log::trace;

/// Smallest document that can hold the version digits.
pub const MIN_DOCUMENT_LENGTH: usize = 17;

pub const COMPLIANCE_INDICATOR: u8 = b'@';

pub const DATA_ELEMENT_SEPARATOR: u8 = b'\n';

pub const RECORD_SEPARATOR: u8 = 0x1e;

pub const SEGMENT_TERMINATOR: u8 = b'\r';

pub const FILE_TYPE: [u8; 5] = *b"ANSI ";

/// Header length for documents with version 0 or 1, which carry no
/// jurisdiction version field.
pub const LEGACY_HEADER_LENGTH: usize = 4 + 5 + 6 + 2 + 2;

pub const HEADER_LENGTH: usize = LEGACY_HEADER_LENGTH + 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum EnvelopeError {
    #[error("document is {0} bytes long, at least 17 are required")]
    TooShort(usize),

    #[error("missing compliance indicator")]
    ComplianceIndicator,

    #[error("missing data element separator")]
    DataElementSeparator,

    #[error("missing record separator")]
    RecordSeparator,

    #[error("missing segment terminator")]
    SegmentTerminator,

    #[error("file type is not `ANSI `")]
    FileType,

    #[error("version number is not a two digit integer")]
    Version,

    #[error("version {version} requires a {expected} bytes header, document is {len} bytes long")]
    Truncated {
        version: u8,
        expected: usize,
        len: usize,
    },

    #[error("number of entries is not an integer between 1 and 99")]
    EntryCount,
}

/// Decoded document header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Header {
    /// Issuer identification number, kept as found.
    pub issuer_id: String,

    /// AAMVA version number.
    pub version: u8,

    /// Jurisdiction version number. Only present from version 2 onward, and
    /// only when the field holds two digits.
    pub jurisdiction_version: Option<u8>,

    /// Number of subfile designators following the header.
    pub entry_count: u8,
}

impl Header {
    pub fn decode(bytes: &[u8]) -> Result<Self, EnvelopeError> {
        if bytes.len() < MIN_DOCUMENT_LENGTH {
            return Err(EnvelopeError::TooShort(bytes.len()));
        }

        if bytes[0] != COMPLIANCE_INDICATOR {
            return Err(EnvelopeError::ComplianceIndicator);
        }

        if bytes[1] != DATA_ELEMENT_SEPARATOR {
            return Err(EnvelopeError::DataElementSeparator);
        }

        if bytes[2] != RECORD_SEPARATOR {
            return Err(EnvelopeError::RecordSeparator);
        }

        if bytes[3] != SEGMENT_TERMINATOR {
            return Err(EnvelopeError::SegmentTerminator);
        }

        if bytes[4..9] != FILE_TYPE {
            return Err(EnvelopeError::FileType);
        }

        let version = decode_digits2(&bytes[15..17]).ok_or(EnvelopeError::Version)?;
        let expected = header_length(version);
        if bytes.len() < expected {
            return Err(EnvelopeError::Truncated {
                version,
                expected,
                len: bytes.len(),
            });
        }

        let (jurisdiction_version, count_digits) = if version < 2 {
            (None, &bytes[17..19])
        } else {
            (decode_digits2(&bytes[17..19]), &bytes[19..21])
        };

        let entry_count = decode_digits2(count_digits)
            .filter(|n| (1..=99).contains(n))
            .ok_or(EnvelopeError::EntryCount)?;

        let header = Self {
            issuer_id: String::from_utf8_lossy(&bytes[9..15]).into_owned(),
            version,
            jurisdiction_version,
            entry_count,
        };

        trace!(
            "decoded header: version={}, entries={}, issuer={}",
            header.version,
            header.entry_count,
            header.issuer_id
        );

        Ok(header)
    }

    /// Length of this header in bytes. The subfile directory starts right
    /// after it.
    pub fn length(&self) -> usize {
        header_length(self.version)
    }

    pub fn encode(&self, buffer: &mut Vec<u8>) {
        buffer.extend([
            COMPLIANCE_INDICATOR,
            DATA_ELEMENT_SEPARATOR,
            RECORD_SEPARATOR,
            SEGMENT_TERMINATOR,
        ]);
        buffer.extend(FILE_TYPE);

        let mut issuer = [b'0'; 6];
        for (slot, b) in issuer.iter_mut().zip(self.issuer_id.bytes()) {
            *slot = b;
        }
        buffer.extend(issuer);

        buffer.extend(encode_digits2(self.version));
        if self.version >= 2 {
            buffer.extend(encode_digits2(self.jurisdiction_version.unwrap_or(0)));
        }
        buffer.extend(encode_digits2(self.entry_count));
    }
}

pub fn header_length(version: u8) -> usize {
    if version < 2 {
        LEGACY_HEADER_LENGTH
    } else {
        HEADER_LENGTH
    }
}

fn decode_digit(d: u8) -> Option<u8> {
    if d.is_ascii_digit() {
        Some(d - b'0')
    } else {
        None
    }
}

fn encode_digit(value: u8) -> u8 {
    value + b'0'
}

pub(crate) fn decode_digits2(digits: &[u8]) -> Option<u8> {
    match digits {
        [a, b] => Some(decode_digit(*a)? * 10 + decode_digit(*b)?),
        _ => None,
    }
}

pub(crate) fn encode_digits2(value: u8) -> [u8; 2] {
    [encode_digit((value / 10) % 10), encode_digit(value % 10)]
}

pub(crate) fn decode_digits4(digits: &[u8]) -> Option<usize> {
    match digits {
        [a, b, c, d] => Some(
            decode_digit(*a)? as usize * 1000
                + decode_digit(*b)? as usize * 100
                + decode_digit(*c)? as usize * 10
                + decode_digit(*d)? as usize,
        ),
        _ => None,
    }
}

pub(crate) fn encode_digits4(value: usize) -> [u8; 4] {
    [
        encode_digit(((value / 1000) % 10) as u8),
        encode_digit(((value / 100) % 10) as u8),
        encode_digit(((value / 10) % 10) as u8),
        encode_digit((value % 10) as u8),
    ]
}
