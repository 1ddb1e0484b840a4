//! Positional field splitting for the upstream's delimited text records.

/// The fields of one delimited record.
///
/// Reading past the last field yields `""` instead of panicking, because
/// the upstream routinely drops trailing fields. No trimming or type
/// coercion happens here.
///
/// # Examples
///
/// ```
/// use rail_server::parse::Fields;
///
/// let fields = Fields::split("a~~b", '~');
/// assert_eq!(fields.get(1), "");
/// assert_eq!(fields.get(2), "b");
/// assert_eq!(fields.get(9), "");
///
/// let packed = Fields::split_non_empty("a~~b", '~');
/// assert_eq!(packed.get(1), "b");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fields<'a> {
    fields: Vec<&'a str>,
}

impl<'a> Fields<'a> {
    /// Split on every separator, keeping empty fields.
    pub fn split(line: &'a str, sep: char) -> Self {
        Self {
            fields: line.split(sep).collect(),
        }
    }

    /// Split on the separator and drop empty fields.
    ///
    /// The upstream pads records with runs of separators, so positions are
    /// only meaningful once the padding is removed.
    pub fn split_non_empty(line: &'a str, sep: char) -> Self {
        Self {
            fields: line.split(sep).filter(|f| !f.is_empty()).collect(),
        }
    }

    /// The field at `index`, or `""` if there is none.
    pub fn get(&self, index: usize) -> &'a str {
        self.fields.get(index).copied().unwrap_or("")
    }

    /// Number of fields present.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Whether the record has no fields at all.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn split_keeps_empty_fields() {
        let fields = Fields::split("1~~3~", '~');
        assert_eq!(fields.len(), 4);
        assert_eq!(fields.get(0), "1");
        assert_eq!(fields.get(1), "");
        assert_eq!(fields.get(2), "3");
        assert_eq!(fields.get(3), "");
    }

    #[test]
    fn split_non_empty_packs_fields() {
        let fields = Fields::split_non_empty("~~1~~~3~", '~');
        assert_eq!(fields.len(), 2);
        assert_eq!(fields.get(0), "1");
        assert_eq!(fields.get(1), "3");
    }

    #[test]
    fn out_of_range_is_empty() {
        let fields = Fields::split("only", '|');
        assert_eq!(fields.get(1), "");
        assert_eq!(fields.get(usize::MAX), "");
    }

    #[test]
    fn no_trimming() {
        let fields = Fields::split(" a | b ", '|');
        assert_eq!(fields.get(0), " a ");
        assert_eq!(fields.get(1), " b ");
    }

    #[test]
    fn empty_input() {
        assert_eq!(Fields::split("", '~').len(), 1);
        assert!(Fields::split_non_empty("", '~').is_empty());
        assert!(Fields::split_non_empty("~~~", '~').is_empty());
    }
}
