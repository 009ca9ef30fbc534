use std::collections::BTreeSet;

use log::debug;
use serde::{Deserialize, Serialize};

pub mod dlid;
pub mod issuers;
mod license;

pub use dlid::{ParseError, Result, SubfileHeaderPolicy, Version};
pub use issuers::{IssuerTable, DEFAULT_ISSUERS};
pub use license::*;

use dlid::{
    pdf_417::{self, Header, SubfileDesignator, SubfileExtent},
    ParseContext,
};

/// Parser settings.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ParseOptions {
    /// Handling of subfiles without a "DL"/"ID" marker.
    pub subfile_header: SubfileHeaderPolicy,

    /// Issuers whose declared subfile length cannot be trusted because
    /// everything after the mandatory elements is encrypted. Their subfile
    /// runs to the end of the payload.
    pub full_payload_issuers: BTreeSet<String>,
}

impl ParseOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_subfile_header(mut self, policy: SubfileHeaderPolicy) -> Self {
        self.subfile_header = policy;
        self
    }

    pub fn with_full_payload_issuer(mut self, issuer_id: impl Into<String>) -> Self {
        self.full_payload_issuers.insert(issuer_id.into());
        self
    }

    fn extent_of(&self, issuer_id: &str) -> SubfileExtent {
        if self.full_payload_issuers.contains(issuer_id) {
            SubfileExtent::Remainder
        } else {
            SubfileExtent::Declared
        }
    }
}

/// DL/ID payload parser.
#[derive(Debug, Clone)]
pub struct Parser<'a> {
    issuers: &'a IssuerTable,
    options: ParseOptions,
}

impl<'a> Parser<'a> {
    pub fn new(issuers: &'a IssuerTable) -> Self {
        Self::with_options(issuers, ParseOptions::default())
    }

    pub fn with_options(issuers: &'a IssuerTable, options: ParseOptions) -> Self {
        Self { issuers, options }
    }

    pub fn options(&self) -> &ParseOptions {
        &self.options
    }

    pub fn parse(&self, data: &str) -> Result<License> {
        self.parse_bytes(data.as_bytes())
    }

    pub fn parse_bytes(&self, data: &[u8]) -> Result<License> {
        let data = pdf_417::normalize_preamble(data);
        let header = Header::decode(&data)?;
        let version = Version::from_number(header.version)?;
        debug!(
            "issuer {} version {} ({:?} strategy)",
            header.issuer_id, header.version, version
        );

        let designator = SubfileDesignator::decode(&data, version)?;
        let extent = self.options.extent_of(&header.issuer_id);
        let range = pdf_417::locate(&data, &designator, extent)?;
        let subfile = dlid::strip_subfile_type(
            &data[range],
            version,
            &header.issuer_id,
            self.options.subfile_header,
        )?;

        let mut cx = ParseContext::new(&header, version, self.issuers.name_of(&header.issuer_id));
        cx.set_subfile_type(designator.subfile_type);

        version.parse_elements(subfile, &mut cx);
        Ok(cx.finish())
    }
}
