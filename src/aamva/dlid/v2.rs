//! AAMVA DL/ID-2003 and DL/ID-2005.
//!
//! Both revisions share one vocabulary and the same country-dependent date
//! layout.
use log::trace;

use super::{
    data_elements_enum, elements,
    names::{split_composite, Names},
    ParseContext,
};
use crate::aamva::Sex;

data_elements_enum! {
    pub(crate) enum V2Element {
        /// Jurisdiction-specific vehicle class (DCA).
        VehicleClass: b"DCA",

        /// Jurisdiction-specific restriction codes (DCB).
        RestrictionCodes: b"DCB",

        /// Jurisdiction-specific endorsement codes (DCD).
        EndorsementCodes: b"DCD",

        /// Customer Family Name (DCS).
        FamilyName: b"DCS",

        /// Customer Given Names, first and middle (DCT).
        GivenNames: b"DCT",

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

/// Sex as an ANSI D-20 code. The M/F letters were dropped in 2003.
pub(crate) fn sex(value: &str) -> Sex {
    match value {
        "1" => Sex::Male,
        "2" => Sex::Female,
        _ => Sex::Unknown,
    }
}

pub(crate) fn parse(data: &[u8], cx: &mut ParseContext) {
    for element in elements(data) {
        let Some(code) = V2Element::from_id(&element.code) else {
            trace!("ignoring element {}", element.code_str());
            continue;
        };

        let value = element.string();
        match code {
            V2Element::VehicleClass => cx.license.vehicle_class = value,
            V2Element::RestrictionCodes => cx.license.restriction_codes = value,
            V2Element::EndorsementCodes => cx.license.endorsement_codes = value,
            V2Element::FamilyName => cx.license.last_name = value,
            V2Element::GivenNames => {
                let names = Names::given(split_composite(&value));
                cx.license.first_name = names.first;
                cx.license.middle_names = names.middle;
            }
            V2Element::NameSuffix => cx.license.name_suffix = value,
            V2Element::Street => cx.license.street = value,
            V2Element::City => cx.license.city = value,
            V2Element::State => cx.license.state = value,
            V2Element::Postal => cx.license.postal = value,
            V2Element::CustomerId => cx.license.customer_id = value,
            V2Element::DocumentDiscriminator => cx.license.document_discriminator = value,
            V2Element::Country => cx.license.country = value,
            V2Element::ExpiryDate => cx.set_expiry_date(value),
            V2Element::DateOfBirth => cx.set_date_of_birth(value),
            V2Element::Sex => cx.set_sex(sex(&value)),
            V2Element::IssueDate => cx.set_issue_date(value),
        }
    }
}
