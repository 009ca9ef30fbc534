use std::fmt;

#[derive(Debug, thiserror::Error)]
#[error("invalid field value: {0}")]
pub struct InvalidFieldValue(MaybeAscii);

struct MaybeAscii(Vec<u8>);

impl fmt::Display for MaybeAscii {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match std::str::from_utf8(&self.0) {
            Ok(s) if s.is_ascii() => write!(f, "{s:?}"),
            _ => write!(f, "{:?}", self.0),
        }
    }
}

impl fmt::Debug for MaybeAscii {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}

/// Fixed-width field of `N` ASCII digits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Digits<const N: usize>([u8; N]);

impl<const N: usize> Digits<N> {
    pub fn new(value: impl AsRef<[u8]>) -> Result<Self, InvalidFieldValue> {
        let bytes = value.as_ref();
        let data = <[u8; N]>::try_from(bytes)
            .ok()
            .filter(|data| data.iter().all(u8::is_ascii_digit))
            .ok_or_else(|| InvalidFieldValue(MaybeAscii(bytes.to_owned())))?;

        Ok(Self(data))
    }

    /// Decimal value of the digits.
    pub fn value(&self) -> u32 {
        self.value_of(0..N)
    }

    /// Decimal value of the digits in `range`.
    pub fn value_of(&self, range: std::ops::Range<usize>) -> u32 {
        self.0[range]
            .iter()
            .fold(0u32, |acc, d| acc * 10 + (d - b'0') as u32)
    }
}

/// Version number (2 digits).
pub type F2N = Digits<2>;

/// Subfile offset or length (4 digits).
pub type F4N = Digits<4>;

/// Raw date (8 digits).
pub type F8N = Digits<8>;
