use record_list::Record;

/// Youngest age a pet can be registered with.
pub const MIN_AGE: i32 = 1;

/// The payload of a pet record: everything but the name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pet {
    pub age: u32,
}

impl Pet {
    /// Builds the record stored in the pet list.
    pub fn record(name: impl Into<String>, age: u32) -> Record<Pet> {
        Record::new(name, Pet { age })
    }
}
