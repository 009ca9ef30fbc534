use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Physical Description – Sex (DBC).
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Sex {
    #[default]
    Unknown,
    Male,
    Female,
}

/// Data decoded from a DL/ID barcode.
///
/// Date fields are `None` when the element is absent and
/// [`UNKNOWN_DATE`](crate::aamva::dlid::date::UNKNOWN_DATE) when it is
/// present but unreadable.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct License {
    pub(crate) first_name: String,
    pub(crate) middle_names: Vec<String>,
    pub(crate) last_name: String,
    pub(crate) name_suffix: String,

    pub(crate) street: String,
    pub(crate) city: String,
    pub(crate) state: String,
    pub(crate) country: String,
    pub(crate) postal: String,

    pub(crate) sex: Sex,
    pub(crate) date_of_birth: Option<NaiveDate>,
    pub(crate) social_security_number: String,

    pub(crate) issuer_id: String,
    pub(crate) issuer_name: String,
    pub(crate) version: u8,
    pub(crate) jurisdiction_version: Option<u8>,
    pub(crate) entry_count: Option<u8>,
    pub(crate) subfile_type: String,
    pub(crate) customer_id: String,
    pub(crate) document_discriminator: String,
    pub(crate) vehicle_class: String,
    pub(crate) restriction_codes: String,
    pub(crate) endorsement_codes: String,
    pub(crate) expiry_date: Option<NaiveDate>,
    pub(crate) issue_date: Option<NaiveDate>,
}

impl License {
    pub fn first_name(&self) -> &str {
        &self.first_name
    }

    pub fn middle_names(&self) -> &[String] {
        &self.middle_names
    }

    /// Family name.
    pub fn last_name(&self) -> &str {
        &self.last_name
    }

    pub fn name_suffix(&self) -> &str {
        &self.name_suffix
    }

    pub fn street(&self) -> &str {
        &self.street
    }

    pub fn city(&self) -> &str {
        &self.city
    }

    /// Jurisdiction code of the address.
    pub fn state(&self) -> &str {
        &self.state
    }

    /// Country of the address. Never empty on a parsed license.
    pub fn country(&self) -> &str {
        &self.country
    }

    pub fn postal(&self) -> &str {
        &self.postal
    }

    pub fn sex(&self) -> Sex {
        self.sex
    }

    pub fn date_of_birth(&self) -> Option<NaiveDate> {
        self.date_of_birth
    }

    pub fn social_security_number(&self) -> &str {
        &self.social_security_number
    }

    /// Six digit AAMVA issuer identification number.
    pub fn issuer_id(&self) -> &str {
        &self.issuer_id
    }

    /// Jurisdiction name, empty when the issuer table does not know
    /// [`Self::issuer_id`].
    pub fn issuer_name(&self) -> &str {
        &self.issuer_name
    }

    /// Declared AAMVA version number.
    pub fn version(&self) -> u8 {
        self.version
    }

    /// Issuer-specific revision of the layout. Absent before version 2.
    pub fn jurisdiction_version(&self) -> Option<u8> {
        self.jurisdiction_version
    }

    /// Number of subfiles declared in the header.
    pub fn entry_count(&self) -> Option<u8> {
        self.entry_count
    }

    /// `"DL"` or `"ID"`, from the subfile designator.
    pub fn subfile_type(&self) -> &str {
        &self.subfile_type
    }

    pub fn customer_id(&self) -> &str {
        &self.customer_id
    }

    pub fn document_discriminator(&self) -> &str {
        &self.document_discriminator
    }

    pub fn vehicle_class(&self) -> &str {
        &self.vehicle_class
    }

    pub fn restriction_codes(&self) -> &str {
        &self.restriction_codes
    }

    pub fn endorsement_codes(&self) -> &str {
        &self.endorsement_codes
    }

    pub fn expiry_date(&self) -> Option<NaiveDate> {
        self.expiry_date
    }

    pub fn issue_date(&self) -> Option<NaiveDate> {
        self.issue_date
    }
}
