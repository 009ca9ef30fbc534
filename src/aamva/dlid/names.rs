/// Splits a composite name element.
///
/// The standard never said which delimiter to use: Wisconsin and early
/// Colorado cards use a space, Virginia a comma. A space wins if there is
/// one.
pub(crate) fn split_composite(value: &str) -> Vec<String> {
    let separator = if value.contains(' ') { ' ' } else { ',' };
    value.split(separator).map(str::to_owned).collect()
}

/// Names taken apart from a composite element.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub(crate) struct Names {
    pub first: String,
    pub middle: Vec<String>,
    pub last: String,
}

impl Names {
    /// `LAST,FIRST,MIDDLE...`, the order the 2000 standard specifies.
    pub fn last_first(names: Vec<String>) -> Self {
        let mut result = Self::default();
        let mut rest = names.into_iter();
        result.last = rest.next().unwrap_or_default();
        result.first = rest.next().unwrap_or_default();
        result.middle = rest.collect();
        result
    }

    /// `FIRST,MIDDLE...,LAST`, as written by Colorado and Tennessee.
    pub fn first_last(mut names: Vec<String>) -> Self {
        let mut result = Self::default();
        if names.is_empty() {
            return result;
        }

        result.first = names.remove(0);
        if let Some(last) = names.pop() {
            result.last = last;
        }
        result.middle = names;
        result
    }

    /// `FIRST MIDDLE...`, the given names element of the 2003 and 2005
    /// standards.
    pub fn given(mut names: Vec<String>) -> Self {
        let mut result = Self::default();
        if names.is_empty() {
            return result;
        }

        result.first = names.remove(0);
        result.middle = names;
        result
    }
}
