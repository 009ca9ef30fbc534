//! AAMVA DL/ID-2009 and later (versions 4 to 9).
use log::trace;

use super::{data_elements_enum, elements, v2::sex, ParseContext};

data_elements_enum! {
    pub(crate) enum V4Element {
        /// Jurisdiction-specific vehicle class (DCA).
        VehicleClass: b"DCA",

        /// Jurisdiction-specific restriction codes (DCB).
        RestrictionCodes: b"DCB",

        /// Jurisdiction-specific endorsement codes (DCD).
        EndorsementCodes: b"DCD",

        /// Customer Family Name (DCS).
        FamilyName: b"DCS",

        /// Customer First Name (DAC).
        FirstName: b"DAC",

        /// Customer Middle Name(s), comma separated (DAD).
        MiddleNames: b"DAD",

        /// Name Suffix (DCU).
        NameSuffix: b"DCU",

        /// Address – Street 1 (DAG).
        Street: b"DAG" | b"DAL",

        /// Address – City (DAI).
        City: b"DAI" | b"DAN",

        /// Address – Jurisdiction Code (DAJ).
        State: b"DAJ" | b"DAO",

        /// Address – Postal Code (DAK).
        Postal: b"DAK" | b"DAP",

        /// Customer ID Number (DAQ).
        CustomerId: b"DAQ",

        /// Document Discriminator (DCF).
        DocumentDiscriminator: b"DCF",

        /// Country Identification (DCG).
        Country: b"DCG",

        /// Document Expiration Date (DBA).
        ExpiryDate: b"DBA",

        /// Date of Birth (DBB).
        DateOfBirth: b"DBB",

        /// Physical Description – Sex (DBC).
        Sex: b"DBC",

        /// Document Issue Date (DBD).
        IssueDate: b"DBD"
    }
}

pub(crate) fn parse(data: &[u8], cx: &mut ParseContext) {
    for element in elements(data) {
        let Some(code) = V4Element::from_id(&element.code) else {
            trace!("ignoring element {}", element.code_str());
            continue;
        };

        let value = element.string();
        match code {
            V4Element::VehicleClass => cx.license.vehicle_class = value,
            V4Element::RestrictionCodes => cx.license.restriction_codes = value,
            V4Element::EndorsementCodes => cx.license.endorsement_codes = value,
            V4Element::FamilyName => cx.license.last_name = value,
            V4Element::FirstName => cx.license.first_name = value,
            V4Element::MiddleNames if value.is_empty() => cx.license.middle_names.clear(),
            V4Element::MiddleNames => {
                cx.license.middle_names = value.split(',').map(str::to_owned).collect()
            }
            V4Element::NameSuffix => cx.license.name_suffix = value,
            V4Element::Street => cx.license.street = value,
            V4Element::City => cx.license.city = value,
            V4Element::State => cx.license.state = value,
            V4Element::Postal => cx.license.postal = value,
            V4Element::CustomerId => cx.license.customer_id = value,
            V4Element::DocumentDiscriminator => cx.license.document_discriminator = value,
            V4Element::Country => cx.license.country = value,
            V4Element::ExpiryDate => cx.set_expiry_date(value),
            V4Element::DateOfBirth => cx.set_date_of_birth(value),
            V4Element::Sex => cx.set_sex(sex(&value)),
            V4Element::IssueDate => cx.set_issue_date(value),
        }
    }
}
