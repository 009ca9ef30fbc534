use std::{borrow::Cow, ops::Range};

use log::{debug, warn};

use super::{
    types::{F2N, F4N},
    ParseError, Result, Version,
};

/// Smallest payload holding a preamble and an issuer ID.
const MIN_HEADER_SIZE: usize = 15;

const COMPLIANCE_INDICATOR: u8 = b'@';

pub(crate) const DATA_ELEMENT_SEPARATOR: u8 = b'\n';

const RECORD_SEPARATOR: u8 = 0x1e;

/// Used instead of [`RECORD_SEPARATOR`] by South Carolina and Pennsylvania.
const FILE_SEPARATOR: u8 = 0x1c;

pub(crate) const SEGMENT_TERMINATOR: u8 = b'\r';

const PREAMBLE: [u8; 4] = [
    COMPLIANCE_INDICATOR,
    DATA_ELEMENT_SEPARATOR,
    RECORD_SEPARATOR,
    SEGMENT_TERMINATOR,
];

/// File types. Pennsylvania and Connecticut still write the pre-2000 one.
const FILE_TYPES: [&[u8; 5]; 2] = [b"ANSI ", b"AAMVA"];

const ISSUER_ID: Range<usize> = 9..15;

const VERSION: Range<usize> = 15..17;

/// Repairs the preamble variants written by known issuers so that
/// [`Header::decode`] sees the canonical layout.
pub fn normalize_preamble(data: &[u8]) -> Cow<'_, [u8]> {
    let mut data = Cow::Borrowed(data);

    // Missing space between "ANSI" and the issuer ID.
    if data.len() > 8
        && data[..2] == PREAMBLE[..2]
        && is_separator(data[2])
        && data[3] == SEGMENT_TERMINATOR
        && data[4..].starts_with(b"ANSI6")
    {
        warn!("repairing header: missing space after file type");
        let mut repaired = Vec::with_capacity(data.len() + 1);
        repaired.extend_from_slice(&data[..8]);
        repaired.push(b' ');
        repaired.extend_from_slice(&data[8..]);
        data = Cow::Owned(repaired);
    }

    // Oregon, and Arizona circa 2009, drop the record separator.
    if data.starts_with(b"@\r\nANSI ") || data.starts_with(b"@\n\rANSI ") {
        warn!("repairing header: missing record separator");
        let mut repaired = Vec::with_capacity(data.len() + 1);
        repaired.extend_from_slice(&PREAMBLE);
        repaired.extend_from_slice(&data[3..]);
        data = Cow::Owned(repaired);
    }

    data
}

fn is_separator(b: u8) -> bool {
    b == RECORD_SEPARATOR || b == FILE_SEPARATOR
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Header {
    pub issuer_id: String,
    pub version: u8,

    /// Jurisdiction-specific revision (V2+ only).
    pub jurisdiction_version: Option<u8>,

    /// Number of subfiles.
    pub entry_count: Option<u8>,
}

impl Header {
    /// Decodes the header of a payload already passed through
    /// [`normalize_preamble`].
    pub fn decode(data: &[u8]) -> Result<Self> {
        if data.len() < MIN_HEADER_SIZE {
            return Err(ParseError::MissingHeader);
        }

        if data[..2] != PREAMBLE[..2]
            || !is_separator(data[2])
            || data[3] != SEGMENT_TERMINATOR
            || !FILE_TYPES.iter().any(|t| data[4..9] == t[..])
        {
            return Err(ParseError::MissingHeader);
        }

        let issuer_id = String::from_utf8_lossy(&data[ISSUER_ID]).into_owned();
        let version = data
            .get(VERSION)
            .and_then(|v| F2N::new(v).ok())
            .ok_or(ParseError::MalformedVersion)?
            .value() as u8;

        // V1 headers have no jurisdiction version.
        let (jurisdiction_version, entry_count) = if version == 1 {
            (None, decode_digits2(data, 17..19))
        } else {
            (decode_digits2(data, 17..19), decode_digits2(data, 19..21))
        };

        Ok(Self {
            issuer_id,
            version,
            jurisdiction_version,
            entry_count,
        })
    }
}

fn decode_digits2(data: &[u8], range: Range<usize>) -> Option<u8> {
    data.get(range)
        .and_then(|d| F2N::new(d).ok())
        .map(|d| d.value() as u8)
}

fn decode_digits4(data: &[u8], range: Range<usize>) -> Option<usize> {
    data.get(range)
        .and_then(|d| F4N::new(d).ok())
        .map(|d| d.value() as usize)
}

/// First subfile designator, following the header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubfileDesignator {
    pub subfile_type: [u8; 2],
    pub offset: usize,

    /// `None` when the issuer left the length out.
    pub length: Option<usize>,
}

impl SubfileDesignator {
    pub fn decode(data: &[u8], version: Version) -> Result<Self> {
        let at = match version {
            Version::V1 => 19,
            _ => 21,
        };

        let subfile_type = data
            .get(at..at + 2)
            .and_then(|t| <[u8; 2]>::try_from(t).ok())
            .ok_or(ParseError::InvalidRange {
                start: None,
                len: data.len(),
            })?;

        let offset = decode_digits4(data, at + 2..at + 6).ok_or(ParseError::InvalidRange {
            start: None,
            len: data.len(),
        })?;

        Ok(Self {
            subfile_type,
            offset,
            length: decode_digits4(data, at + 6..at + 10),
        })
    }
}

/// How far the subfile extends.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum SubfileExtent {
    /// Trust the declared length.
    #[default]
    Declared,

    /// Ignore the declared length and take the rest of the payload.
    Remainder,
}

/// Computes the byte range of the subfile described by `designator`.
pub fn locate(
    data: &[u8],
    designator: &SubfileDesignator,
    extent: SubfileExtent,
) -> Result<Range<usize>> {
    let start = designator.offset;

    if start >= data.len() {
        return Err(ParseError::InvalidRange {
            start: Some(start),
            len: data.len(),
        });
    }

    let end = match (extent, designator.length) {
        (SubfileExtent::Declared, Some(length)) if start + length > data.len() => {
            warn!(
                "subfile length {length} at {start} overruns data of length {}, clamping",
                data.len()
            );
            data.len() - 1
        }
        (SubfileExtent::Declared, Some(length)) => start + length,
        (SubfileExtent::Declared, None) | (SubfileExtent::Remainder, _) => data.len(),
    };

    debug!(
        "{} subfile located at {start}..{end}",
        String::from_utf8_lossy(&designator.subfile_type)
    );

    Ok(start..end)
}

#[cfg(test)]
mod tests {
    use super::*;

    const V4_HEADER: &[u8] = b"@\n\x1e\rANSI 636000040002DL00410282ZV03190008";

    #[test]
    fn decode_header() {
        let header = Header::decode(V4_HEADER).unwrap();
        assert_eq!(
            header,
            Header {
                issuer_id: "636000".to_owned(),
                version: 4,
                jurisdiction_version: Some(0),
                entry_count: Some(2)
            }
        )
    }

    #[test]
    fn decode_v1_header() {
        let header = Header::decode(b"@\n\x1e\rANSI 6360200102DL00390187").unwrap();
        assert_eq!(header.issuer_id, "636020");
        assert_eq!(header.version, 1);
        assert_eq!(header.jurisdiction_version, None);
        assert_eq!(header.entry_count, Some(2));
    }

    #[test]
    fn file_separator_and_old_file_type() {
        assert!(Header::decode(b"@\n\x1c\rANSI 636005040002").is_ok());
        assert!(Header::decode(b"@\n\x1e\rAAMVA636025010001").is_ok());
    }

    #[test]
    fn reject_bad_headers() {
        assert_eq!(
            Header::decode(b"@\n\x1d\rANSI 636"),
            Err(ParseError::MissingHeader)
        );
        assert_eq!(
            Header::decode(b"@\n\x1d\rANSI 636000040002"),
            Err(ParseError::MissingHeader)
        );
        assert_eq!(
            Header::decode(b"@\n\x1e\rANSI 6360000A0002"),
            Err(ParseError::MalformedVersion)
        );
        assert_eq!(
            Header::decode(b"@\n\x1e\rANSI 636000"),
            Err(ParseError::MalformedVersion)
        );
    }

    #[test]
    fn repair_missing_space() {
        let data = normalize_preamble(b"@\n\x1e\rANSI6360000400");
        assert_eq!(&*data, b"@\n\x1e\rANSI 6360000400");
        assert_eq!(Header::decode(&data).unwrap().version, 4);
    }

    #[test]
    fn repair_missing_separator() {
        let data = normalize_preamble(b"@\r\nANSI 636026040002");
        assert_eq!(&*data, b"@\n\x1e\rANSI 636026040002");

        let data = normalize_preamble(b"@\n\rANSI 636026040002");
        assert_eq!(&*data, b"@\n\x1e\rANSI 636026040002");
    }

    #[test]
    fn canonical_preamble_is_borrowed() {
        assert!(matches!(normalize_preamble(V4_HEADER), Cow::Borrowed(_)));
    }

    fn payload(designator: &str, len: usize) -> Vec<u8> {
        let mut data = format!("@\n\x1e\rANSI 636000040001{designator}").into_bytes();
        data.resize(len, b'X');
        data
    }

    fn locate_in(data: &[u8], version: Version, extent: SubfileExtent) -> Result<Range<usize>> {
        let designator = SubfileDesignator::decode(data, version)?;
        locate(data, &designator, extent)
    }

    #[test]
    fn declared_range() {
        let data = payload("DL00310010", 60);
        assert_eq!(locate_in(&data, Version::V4(4), SubfileExtent::Declared), Ok(31..41));
    }

    #[test]
    fn v1_designator_offsets() {
        let mut data = b"@\n\x1e\rANSI 6360000101DL00290010".to_vec();
        data.resize(50, b'X');
        assert_eq!(locate_in(&data, Version::V1, SubfileExtent::Declared), Ok(29..39));
    }

    #[test]
    fn overrun_is_clamped() {
        let data = payload("DL00310100", 60);
        assert_eq!(locate_in(&data, Version::V4(4), SubfileExtent::Declared), Ok(31..59));
    }

    #[test]
    fn missing_length_takes_remainder() {
        let data = payload("DL0031    ", 60);
        assert_eq!(locate_in(&data, Version::V3, SubfileExtent::Declared), Ok(31..60));
    }

    #[test]
    fn full_payload_ignores_length() {
        let data = payload("DL00310010", 60);
        assert_eq!(locate_in(&data, Version::V4(9), SubfileExtent::Remainder), Ok(31..60));
    }

    #[test]
    fn start_outside_payload() {
        let data = payload("DL09990010", 60);
        assert_eq!(
            locate_in(&data, Version::V4(4), SubfileExtent::Declared),
            Err(ParseError::InvalidRange {
                start: Some(999),
                len: 60
            })
        );

        let data = payload("DLXX310010", 60);
        assert_eq!(
            locate_in(&data, Version::V4(4), SubfileExtent::Declared),
            Err(ParseError::InvalidRange {
                start: None,
                len: 60
            })
        );
    }
}
