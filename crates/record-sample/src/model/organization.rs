//! Fundraising organizations.
//!
//! # Record List
//! The organization's name lives in the enclosing [`Record`], which keeps the
//! list ordered. This struct holds everything else: the pitch, the owner's
//! credentials, and the running donation totals.
//!
//! See [`Organization::register`] for how the derived fields (URL, receipt path)
//! are generated from the name.

use record_list::Record;

/// Start of every fundraiser URL.
pub const DONATION_URL_PREFIX: &str = "https://donate.com/";
/// End of every fundraiser URL.
pub const DONATION_URL_SUFFIX: &str = "?form=popup#";
/// Appended to the skewer-cased name to form the receipts file name.
pub const RECEIPTS_PATH_SUFFIX: &str = "-receipts.txt";
/// Goals must be strictly greater than this.
pub const MIN_GOAL: f64 = 0.0;

/// The person who registered an organization and may view the report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Owner {
    pub first_last_name: String,
    pub email: String,
    pub password: String,
}

/// Running totals for one organization.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct DonationTally {
    pub count: u32,
    /// Sum of donations after processing fees.
    pub raised: f64,
    /// Sum of processing fees withheld.
    pub fees: f64,
}

/// The breakdown of a single accepted donation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Donation {
    pub amount: f64,
    pub fee: f64,
    pub net: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Organization {
    pub purpose: String,
    pub goal_amount: f64,
    pub url: String,
    pub receipt_path: String,
    pub owner: Owner,
    pub donations: DonationTally,
}

/// Payload for registering a new organization.
#[derive(Debug, Clone)]
pub struct OrganizationCreate {
    pub name: String,
    pub purpose: String,
    pub goal_amount: f64,
    pub owner: Owner,
}

impl Organization {
    /// Creates the record for a newly registered organization.
    ///
    /// # Notes
    /// The URL and receipt path are derived from the (possibly truncated) record
    /// name, and the donation totals start at zero.
    pub fn register(params: OrganizationCreate) -> Record<Organization> {
        let mut record = Record::new(
            params.name,
            Organization {
                purpose: params.purpose,
                goal_amount: params.goal_amount,
                url: String::new(),
                receipt_path: String::new(),
                owner: params.owner,
                donations: DonationTally::default(),
            },
        );
        let slug = skewer_case(record.name());
        let org = record.payload_mut();
        org.url = format!("{DONATION_URL_PREFIX}{slug}{DONATION_URL_SUFFIX}");
        org.receipt_path = format!("{slug}{RECEIPTS_PATH_SUFFIX}");
        record
    }

    /// Applies the processing fee to `amount` and adds the rest to the totals.
    pub fn accept_donation(&mut self, amount: f64, fee_rate: f64) -> Donation {
        let fee = amount * fee_rate;
        let net = amount - fee;
        self.donations.count += 1;
        self.donations.raised += net;
        self.donations.fees += fee;
        Donation { amount, fee, net }
    }

    pub fn goal_reached(&self) -> bool {
        self.donations.raised >= self.goal_amount
    }

    /// Share of the goal raised so far, in percent.
    pub fn progress_percent(&self) -> f64 {
        self.donations.raised / self.goal_amount * 100.0
    }
}

/// Lowercases `name` and replaces every character other than a letter, a digit
/// or `-` with `-`.
///
/// The result is used as a file name under the data directory, so it never
/// contains a path separator or a `.`.
pub fn skewer_case(name: &str) -> String {
    name.to_lowercase()
        .chars()
        .map(|c| if c.is_alphanumeric() || c == '-' { c } else { '-' })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Record<Organization> {
        Organization::register(OrganizationCreate {
            name: "Shelter Friends".to_string(),
            purpose: "Feed shelter animals".to_string(),
            goal_amount: 1000.0,
            owner: Owner {
                first_last_name: "Jane Doe".to_string(),
                email: "jane@example.com".to_string(),
                password: "Secret12".to_string(),
            },
        })
    }

    #[test]
    fn test_register_derives_url_and_receipt_path() {
        let record = sample();
        assert_eq!(record.name(), "Shelter Friends");
        assert_eq!(
            record.payload().url,
            "https://donate.com/shelter-friends?form=popup#"
        );
        assert_eq!(record.payload().receipt_path, "shelter-friends-receipts.txt");
        assert_eq!(record.payload().donations, DonationTally::default());
    }

    #[test]
    fn test_accept_donation_withholds_fee() {
        let mut record = sample();
        let org = record.payload_mut();

        let donation = org.accept_donation(100.0, 0.031);
        assert!((donation.fee - 3.1).abs() < 1e-9);
        assert!((donation.net - 96.9).abs() < 1e-9);
        assert_eq!(org.donations.count, 1);
        assert!((org.donations.raised - 96.9).abs() < 1e-9);
        assert!((org.donations.fees - 3.1).abs() < 1e-9);
        assert!((org.progress_percent() - 9.69).abs() < 1e-9);
        assert!(!org.goal_reached());
    }

    #[test]
    fn test_goal_reached_at_exact_goal() {
        let mut record = sample();
        let org = record.payload_mut();
        org.accept_donation(1000.0, 0.0);
        assert!(org.goal_reached());
    }

    #[test]
    fn test_skewer_case() {
        assert_eq!(skewer_case("Save The Bees"), "save-the-bees");
        assert_eq!(skewer_case("solo"), "solo");
    }

    #[test]
    fn test_skewer_case_keeps_names_inside_one_directory() {
        assert_eq!(skewer_case("Cats/Dogs"), "cats-dogs");
        assert_eq!(skewer_case("../escaped"), "---escaped");
        assert_eq!(skewer_case("A.B\\C"), "a-b-c");
        assert_eq!(skewer_case("Café 2"), "café-2");
    }
}
