/// Room for a 5-digit zip and the +4 extension.
const ZIP_PLUS_4_LEN: usize = 9;

/// Reassembles a US postal code.
///
/// The field is padded to 11 characters in the 2000 and 2003 standards and
/// to 9 since then, with zeros standing in for an unknown +4. The padding is
/// dropped and a known +4 is joined with `+`. Other values are returned
/// unchanged.
pub fn normalize_postal(raw: &str, country: &str) -> String {
    if country != "USA" {
        return raw.to_owned();
    }

    match (raw.get(..5), raw.get(5..ZIP_PLUS_4_LEN)) {
        (Some(zip), Some("0000")) => zip.to_owned(),
        (Some(zip), Some(plus4)) => format!("{zip}+{plus4}"),
        _ => raw.to_owned(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn padded_extension() {
        assert_eq!(normalize_postal("232690000", "USA"), "23269");
        assert_eq!(normalize_postal("902100000  ", "USA"), "90210");
    }

    #[test]
    fn known_extension() {
        assert_eq!(normalize_postal("123459999ZZ", "USA"), "12345+9999");
        assert_eq!(normalize_postal("123459999", "USA"), "12345+9999");
    }

    #[test]
    fn passthrough() {
        assert_eq!(normalize_postal("12345", "USA"), "12345");
        assert_eq!(normalize_postal("1234567", "USA"), "1234567");
        assert_eq!(normalize_postal("K1A0B1", "CAN"), "K1A0B1");
        assert_eq!(normalize_postal("K1A0B1000", "CAN"), "K1A0B1000");
    }
}
