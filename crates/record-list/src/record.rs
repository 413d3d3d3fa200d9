//! # Record
//!
//! A [`Record`] bundles the lookup key (its name) with a caller-defined payload.
//! The list only ever looks at the name; the payload is opaque to it.

/// Longest name a record can hold, in characters.
///
/// Names are read from 80-byte line buffers, one byte of which is reserved for
/// the terminator, so 79 characters is the usable width.
pub const MAX_NAME_CHARS: usize = 79;

/// A named data item stored in an [`OrderedList`](crate::OrderedList).
///
/// The name is fixed at construction. Mutable access to a stored record can
/// only reach the payload, which keeps the list's ordering intact.
#[derive(Debug, Clone, PartialEq)]
pub struct Record<P> {
    name: String,
    payload: P,
}

impl<P> Record<P> {
    /// Creates a new record.
    ///
    /// # Arguments
    /// * `name` - Ordering/lookup key, truncated to [`MAX_NAME_CHARS`] characters
    /// * `payload` - Remaining domain fields
    pub fn new(name: impl Into<String>, payload: P) -> Self {
        let mut name = name.into();
        if let Some((cut, _)) = name.char_indices().nth(MAX_NAME_CHARS) {
            name.truncate(cut);
        }
        Self { name, payload }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn payload(&self) -> &P {
        &self.payload
    }

    pub fn payload_mut(&mut self) -> &mut P {
        &mut self.payload
    }

    /// Splits the record back into its name and payload.
    pub fn into_parts(self) -> (String, P) {
        (self.name, self.payload)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_name_is_kept_verbatim() {
        let record = Record::new("Shirly", 4u32);
        assert_eq!(record.name(), "Shirly");
        assert_eq!(*record.payload(), 4);
    }

    #[test]
    fn test_long_name_is_truncated_on_char_boundary() {
        let long = "é".repeat(MAX_NAME_CHARS + 5);
        let record = Record::new(long, ());
        assert_eq!(record.name().chars().count(), MAX_NAME_CHARS);
    }

    #[test]
    fn test_empty_name_is_allowed() {
        let record = Record::new("", ());
        assert!(record.name().is_empty());
    }

    #[test]
    fn test_payload_mut_and_into_parts() {
        let mut record = Record::new("Amy", 1u32);
        *record.payload_mut() += 1;
        let (name, age) = record.into_parts();
        assert_eq!(name, "Amy");
        assert_eq!(age, 2);
    }
}
