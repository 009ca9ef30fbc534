//! This library decodes the [AAMVA DL/ID][aamva] data found in the PDF417
//! barcode of North American driver's licenses and ID cards, versions 1
//! (2000) to 9 (2016).
//!
//! [aamva]: <https://www.aamva.org/topics/driver-license-and-identification-standards>
//!
//! The input is the text already decoded from the barcode symbol:
//!
//! ```
//! let license = aamva_dlid::parse(
//!     "@\n\x1e\rANSI 636000090001DL00310035DLDACMICHAEL\nDCSSAMPLE\nDBB06071986\r",
//! )
//! .unwrap();
//!
//! assert_eq!(license.first_name(), "MICHAEL");
//! assert_eq!(license.issuer_name(), "Virginia");
//! assert_eq!(license.country(), "USA");
//! ```
pub use chrono::NaiveDate;

pub mod aamva;

pub use aamva::{
    dlid::date::UNKNOWN_DATE, IssuerTable, License, ParseError, ParseOptions, Parser, Sex,
    SubfileHeaderPolicy, DEFAULT_ISSUERS,
};

/// Parses a payload with the default issuer table and options.
pub fn parse(data: &str) -> Result<License, ParseError> {
    Parser::new(&DEFAULT_ISSUERS).parse(data)
}
