//! Date element decoding.
//!
//! The 2000 standard writes dates big-endian (`YYYYMMDD`). From 2003 on, US
//! jurisdictions write `MMDDYYYY` while Canada keeps `YYYYMMDD`, in the same
//! element. Which layout applies therefore depends on the country element.
use chrono::NaiveDate;
use log::trace;

use super::types::F8N;

/// Value given to a date element that is present but cannot be decoded.
pub const UNKNOWN_DATE: NaiveDate = match NaiveDate::from_ymd_opt(1970, 1, 1) {
    Some(date) => date,
    None => panic!("invalid sentinel date"),
};

/// Layout of an 8-digit date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DateLayout {
    /// `YYYYMMDD`.
    BigEndian,

    /// `MMDDYYYY`.
    Lumpy,
}

impl DateLayout {
    pub fn decode(&self, digits: &F8N) -> Option<NaiveDate> {
        let (year, month, day) = match self {
            Self::BigEndian => (
                digits.value_of(0..4),
                digits.value_of(4..6),
                digits.value_of(6..8),
            ),
            Self::Lumpy => (
                digits.value_of(4..8),
                digits.value_of(0..2),
                digits.value_of(2..4),
            ),
        };

        NaiveDate::from_ymd_opt(year as i32, month, day)
    }
}

/// Layouts to try, in order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DateOrder {
    /// `YYYYMMDD` and nothing else.
    BigEndianOnly,

    /// `MMDDYYYY`, then `YYYYMMDD`.
    LumpyFirst,

    /// `YYYYMMDD`, then `MMDDYYYY`.
    BigEndianFirst,
}

impl DateOrder {
    pub fn for_country(country: &str) -> Self {
        if country == "USA" {
            Self::LumpyFirst
        } else {
            Self::BigEndianFirst
        }
    }

    pub fn layouts(&self) -> &'static [DateLayout] {
        match self {
            Self::BigEndianOnly => &[DateLayout::BigEndian],
            Self::LumpyFirst => &[DateLayout::Lumpy, DateLayout::BigEndian],
            Self::BigEndianFirst => &[DateLayout::BigEndian, DateLayout::Lumpy],
        }
    }

    /// Decodes `raw`, falling back to [`UNKNOWN_DATE`].
    pub fn parse(&self, raw: &str) -> NaiveDate {
        let date = F8N::new(raw)
            .ok()
            .and_then(|digits| self.layouts().iter().find_map(|l| l.decode(&digits)));

        date.unwrap_or_else(|| {
            trace!("unparseable date {raw:?}");
            UNKNOWN_DATE
        })
    }
}

/// Decodes an 8-digit date the way the given country writes it.
pub fn parse_date(raw: &str, country: &str) -> NaiveDate {
    DateOrder::for_country(country).parse(raw)
}
