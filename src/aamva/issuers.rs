//! Issuer identification numbers (IIN) assigned by AAMVA.
//!
//! See: <https://www.aamva.org/identity/issuer-identification-numbers-(iin)>
use std::{collections::HashMap, io};

use lazy_static::lazy_static;

pub const SOUTH_CAROLINA: &str = "636005";
pub const COLORADO: &str = "636020";
pub const TENNESSEE: &str = "636053";
pub const WYOMING: &str = "636060";
pub const WEST_VIRGINIA: &str = "636061";

/// Issuers writing version 1 names as `FIRST,MIDDLE,LAST`.
pub const FIRST_NAME_FIRST: [&str; 2] = [COLORADO, TENNESSEE];

/// Issuers writing `YYYYMMDD` dates in version 4+ payloads whatever the
/// country.
pub const BIG_ENDIAN_DATES: [&str; 2] = [WYOMING, WEST_VIRGINIA];

#[derive(Debug, thiserror::Error)]
pub enum IssuerTableError {
    #[error(transparent)]
    Csv(#[from] csv::Error),

    #[error("missing column in issuer table record {0}")]
    MissingColumn(usize),
}

/// Read-only mapping from issuer ID to jurisdiction name.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct IssuerTable(HashMap<String, String>);

impl IssuerTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reads an `issuer_id,name` table with a header row.
    pub fn from_csv(reader: impl io::Read) -> Result<Self, IssuerTableError> {
        let mut reader = csv::Reader::from_reader(reader);
        let mut map = HashMap::new();

        for (i, result) in reader.records().enumerate() {
            let record = result?;
            match (record.get(0), record.get(1)) {
                (Some(id), Some(name)) => {
                    map.insert(id.trim().to_owned(), name.trim().to_owned());
                }
                _ => return Err(IssuerTableError::MissingColumn(i)),
            }
        }

        Ok(Self(map))
    }

    pub fn name_of(&self, issuer_id: &str) -> Option<&str> {
        self.0.get(issuer_id).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for IssuerTable {
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        Self(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}

lazy_static! {
    /// Issuers known at the time of the 2016 standard.
    pub static ref DEFAULT_ISSUERS: IssuerTable = {
        let cursor = io::Cursor::new(include_str!("issuers.csv"));
        IssuerTable::from_csv(cursor).unwrap()
    };
}
