use log::debug;

use super::{
    date::DateOrder,
    names::Names,
    pdf_417::Header,
    postal::normalize_postal,
    Version,
};
use crate::aamva::{issuers, License, Sex};

/// Record under construction.
///
/// Date elements are kept as raw strings until [`Self::finish`], because
/// the country element deciding their layout may come after them.
pub(crate) struct ParseContext {
    pub license: License,
    version: Version,
    date_of_birth: Option<String>,
    expiry_date: Option<String>,
    issue_date: Option<String>,
}

impl ParseContext {
    pub fn new(header: &Header, version: Version, issuer_name: Option<&str>) -> Self {
        let license = License {
            issuer_id: header.issuer_id.clone(),
            issuer_name: issuer_name.unwrap_or_default().to_owned(),
            version: version.number(),
            jurisdiction_version: header.jurisdiction_version,
            entry_count: header.entry_count,
            ..Default::default()
        };

        Self {
            license,
            version,
            date_of_birth: None,
            expiry_date: None,
            issue_date: None,
        }
    }

    pub fn issuer_id(&self) -> &str {
        &self.license.issuer_id
    }

    pub fn set_subfile_type(&mut self, subfile_type: [u8; 2]) {
        self.license.subfile_type = String::from_utf8_lossy(&subfile_type).into_owned();
    }

    pub fn set_names(&mut self, names: Names) {
        self.license.first_name = names.first;
        self.license.middle_names = names.middle;
        self.license.last_name = names.last;
    }

    pub fn set_sex(&mut self, sex: Sex) {
        self.license.sex = sex;
    }

    pub fn set_date_of_birth(&mut self, raw: String) {
        self.date_of_birth = Some(raw);
    }

    pub fn set_expiry_date(&mut self, raw: String) {
        self.expiry_date = Some(raw);
    }

    pub fn set_issue_date(&mut self, raw: String) {
        self.issue_date = Some(raw);
    }

    fn date_order(&self) -> DateOrder {
        match self.version {
            Version::V1 => DateOrder::BigEndianOnly,
            Version::V4(_) if issuers::BIG_ENDIAN_DATES.contains(&self.issuer_id()) => {
                DateOrder::BigEndianOnly
            }
            _ => DateOrder::for_country(&self.license.country),
        }
    }

    /// Applies the rules that need the whole element set, and returns the
    /// record.
    pub fn finish(mut self) -> License {
        if self.version != Version::V1 {
            if self.license.country.is_empty() {
                debug!("no country element, assuming USA");
                self.license.country = "USA".to_owned();
            }

            self.license.postal = normalize_postal(&self.license.postal, &self.license.country);
        }

        let order = self.date_order();
        let resolve = |raw: Option<String>| raw.map(|raw| order.parse(&raw));

        self.license.date_of_birth = resolve(self.date_of_birth);
        self.license.expiry_date = resolve(self.expiry_date);
        self.license.issue_date = resolve(self.issue_date);

        self.license
    }
}
