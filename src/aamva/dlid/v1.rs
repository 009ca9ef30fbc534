//! AAMVA DL/ID-2000.
use log::trace;

use super::{
    data_elements_enum, elements,
    names::{split_composite, Names},
    ParseContext,
};
use crate::aamva::{issuers, Sex};

data_elements_enum! {
    pub(crate) enum V1Element {
        /// Jurisdiction-specific vehicle class (DAR).
        VehicleClass: b"DAR",

        /// Jurisdiction-specific restriction codes (DAS).
        RestrictionCodes: b"DAS",

        /// Jurisdiction-specific endorsement codes (DAT).
        EndorsementCodes: b"DAT",

        /// Driver License Name, all names in one element (DAA).
        Name: b"DAA",

        /// Driver Last Name (DAB).
        LastName: b"DAB",

        /// Driver First Name (DAC).
        FirstName: b"DAC",

        /// Driver Middle Name or Initial (DAD).
        MiddleName: b"DAD",

        /// Driver Name Suffix (DAE).
        NameSuffix: b"DAE",

        /// Mailing Street Address 1 (DAG). Old Colorado cards only carry the
        /// residence address (DAL).
        Street: b"DAG" | b"DAL",

        /// Mailing City (DAI), or Residence City (DAN).
        City: b"DAI" | b"DAN",

        /// Mailing Jurisdiction Code (DAJ), or Residence Jurisdiction Code
        /// (DAO).
        State: b"DAJ" | b"DAO",

        /// Mailing Postal Code (DAK), or Residence Postal Code (DAP).
        Postal: b"DAK" | b"DAP",

        /// Driver License/ID Number (DAQ).
        CustomerId: b"DAQ",

        /// License Expiration Date (DBA).
        ExpiryDate: b"DBA",

        /// Date of Birth (DBB).
        DateOfBirth: b"DBB",

        /// Sex (DBC).
        Sex: b"DBC",

        /// License or ID Document Issue Date (DBD).
        IssueDate: b"DBD",

        /// Social Security Number (DBK).
        SocialSecurityNumber: b"DBK"
    }
}

/// Sex as either a DL/ID code (M/F) or an ANSI D-20 code (1/2).
fn sex(value: &str) -> Sex {
    match value {
        "M" | "1" => Sex::Male,
        "F" | "2" => Sex::Female,
        _ => Sex::Unknown,
    }
}

pub(crate) fn parse(data: &[u8], cx: &mut ParseContext) {
    // The standard had no country element yet.
    cx.license.country = "USA".to_owned();

    for element in elements(data) {
        let Some(code) = V1Element::from_id(&element.code) else {
            trace!("ignoring element {}", element.code_str());
            continue;
        };

        let value = element.string();
        match code {
            V1Element::VehicleClass => cx.license.vehicle_class = value,
            V1Element::RestrictionCodes => cx.license.restriction_codes = value,
            V1Element::EndorsementCodes => cx.license.endorsement_codes = value,
            V1Element::Name => {
                let names = split_composite(&value);
                // Colorado and Tennessee write FIRST,MIDDLE,LAST.
                let names = if issuers::FIRST_NAME_FIRST.contains(&cx.issuer_id()) {
                    Names::first_last(names)
                } else {
                    Names::last_first(names)
                };
                cx.set_names(names)
            }
            V1Element::LastName => cx.license.last_name = value,
            V1Element::FirstName => cx.license.first_name = value,
            V1Element::MiddleName => cx.license.middle_names = vec![value],
            V1Element::NameSuffix => cx.license.name_suffix = value,
            V1Element::Street => cx.license.street = value,
            V1Element::City => cx.license.city = value,
            V1Element::State => cx.license.state = value,
            V1Element::Postal => cx.license.postal = value,
            V1Element::CustomerId => cx.license.customer_id = value,
            V1Element::ExpiryDate => cx.set_expiry_date(value),
            V1Element::DateOfBirth => cx.set_date_of_birth(value),
            V1Element::Sex => cx.set_sex(sex(&value)),
            V1Element::IssueDate => cx.set_issue_date(value),
            V1Element::SocialSecurityNumber => cx.license.social_security_number = value,
        }
    }
}
