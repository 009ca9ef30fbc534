//! AAMVA DL/ID Card Design Standard.
//!
//! See: <https://www.aamva.org/assets/best-practices,-guides,-standards,-manuals,-whitepapers/aamva-dl-id-card-design-standard-(2020)>
mod macros;
use std::borrow::Cow;

use log::warn;
pub(crate) use macros::*;
use serde::{Deserialize, Serialize};

use crate::aamva::issuers;

pub mod date;
pub mod pdf_417;
pub mod postal;
pub mod types;

mod context;
mod names;
mod v1;
mod v2;
mod v4;

pub(crate) use context::ParseContext;
use pdf_417::{DATA_ELEMENT_SEPARATOR, SEGMENT_TERMINATOR};

/// Structural errors. Content errors (bad dates, unknown codes) never reach
/// this type.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    #[error("data does not contain expected header")]
    MissingHeader,

    #[error("data does not contain a version number")]
    MalformedVersion,

    #[error("unsupported DL/ID version number {0}")]
    UnsupportedVersion(u8),

    /// `start` is `None` when the designator itself is missing or not
    /// numeric.
    #[error("payload location does not exist in data of length {len}")]
    InvalidRange { start: Option<usize>, len: usize },

    #[error("missing header in licence data chunk")]
    MissingSubfileHeader,
}

pub type Result<T, E = ParseError> = std::result::Result<T, E>;

/// Element parsing strategy, selected by the declared version number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Version {
    /// AAMVA DL/ID-2000.
    V1,

    /// AAMVA DL/ID-2003.
    V2,

    /// AAMVA DL/ID-2005.
    V3,

    /// AAMVA DL/ID-2009 and every later revision, which kept its element
    /// vocabulary and date handling. Holds the declared number (4 to 9).
    V4(u8),
}

impl Version {
    pub fn from_number(n: u8) -> Result<Self> {
        match n {
            1 => Ok(Self::V1),
            2 => Ok(Self::V2),
            3 => Ok(Self::V3),
            4..=9 => Ok(Self::V4(n)),
            _ => Err(ParseError::UnsupportedVersion(n)),
        }
    }

    /// Runs the element parser of this strategy.
    pub(crate) fn parse_elements(&self, data: &[u8], cx: &mut ParseContext) {
        match self {
            Self::V1 => v1::parse(data, cx),
            Self::V2 | Self::V3 => v2::parse(data, cx),
            Self::V4(_) => v4::parse(data, cx),
        }
    }

    pub fn number(&self) -> u8 {
        match self {
            Self::V1 => 1,
            Self::V2 => 2,
            Self::V3 => 3,
            Self::V4(n) => *n,
        }
    }
}

/// What to do when a subfile does not start with its "DL"/"ID" marker.
///
/// Version 1 payloads are always parsed without the marker, since several
/// issuers never wrote it.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SubfileHeaderPolicy {
    /// Fail with [`ParseError::MissingSubfileHeader`].
    #[default]
    Strict,

    /// Parse the subfile data as it is.
    Lenient,
}

/// Strips the subfile type marker.
pub(crate) fn strip_subfile_type<'a>(
    data: &'a [u8],
    version: Version,
    issuer_id: &str,
    policy: SubfileHeaderPolicy,
) -> Result<&'a [u8]> {
    if data.starts_with(b"DL") || data.starts_with(b"ID") {
        return Ok(&data[2..]);
    }

    // South Carolina counts the offset from the "L".
    if issuer_id == issuers::SOUTH_CAROLINA && data.starts_with(b"L") {
        return Ok(&data[1..]);
    }

    match (version, policy) {
        (Version::V1, _) | (_, SubfileHeaderPolicy::Lenient) => {
            warn!("subfile type marker missing, parsing data as is");
            Ok(data)
        }
        (_, SubfileHeaderPolicy::Strict) => Err(ParseError::MissingSubfileHeader),
    }
}

/// A single tagged data unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Element<'a> {
    pub code: [u8; 3],
    pub value: &'a [u8],
}

impl<'a> Element<'a> {
    fn decode(line: &'a [u8]) -> Option<Self> {
        let line = match line.iter().position(|&b| b == SEGMENT_TERMINATOR) {
            Some(i) => &line[..i],
            None => line,
        };

        let (code, value) = line.split_first_chunk::<3>()?;
        Some(Self { code: *code, value })
    }

    /// Value with surrounding spaces removed.
    pub fn text(&self) -> Cow<'a, str> {
        let start = self
            .value
            .iter()
            .position(|&b| b != b' ')
            .unwrap_or(self.value.len());
        let end = self
            .value
            .iter()
            .rposition(|&b| b != b' ')
            .map_or(start, |i| i + 1);
        String::from_utf8_lossy(&self.value[start..end])
    }

    pub fn string(&self) -> String {
        self.text().into_owned()
    }

    pub fn code_str(&self) -> Cow<'_, str> {
        String::from_utf8_lossy(&self.code)
    }
}

/// Splits subfile data into elements. Lines shorter than a code are
/// skipped.
pub(crate) fn elements(data: &[u8]) -> impl Iterator<Item = Element<'_>> {
    data.split(|&b| b == DATA_ELEMENT_SEPARATOR)
        .filter_map(Element::decode)
}
