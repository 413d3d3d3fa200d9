/// Someone who gave to a fundraiser.
///
/// Donors are not stored in any list; they are collected per donation and
/// recorded in the logs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Donor {
    pub first_last_name: String,
    pub zip: String,
}
