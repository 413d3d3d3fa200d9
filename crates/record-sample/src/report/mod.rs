//! # Reports
//!
//! Everything the trackers print or persist. Each writer takes any
//! `impl Write`, so one function serves the terminal, a receipts file and the
//! in-memory buffers used by tests.

use crate::model::{Organization, Pet};
use chrono::NaiveDateTime;
use record_list::{OrderedList, Record};
use std::fs::{File, OpenOptions};
use std::io::{self, BufWriter, Write};
use std::path::Path;

/// Shown instead of a listing when there is nothing to list.
pub const LIST_EMPTY: &str = "There aren't any names in the list.";
pub const PET_LIST_HEADER: &str = "The names in alphabetical order:";
pub const ORG_TABLE_HEADER: &str = "Organization\t\tGoal Amount\t\tCurrent Donations";

/// `MM/DD/YY - HH:MMAM`
pub const RECEIPT_TIME_FORMAT: &str = "%m/%d/%y - %I:%M%p";

pub fn write_pets(w: &mut impl Write, pets: &OrderedList<Pet>) -> io::Result<()> {
    writeln!(w)?;
    if pets.is_empty() {
        return writeln!(w, "{LIST_EMPTY}");
    }
    writeln!(w, "{PET_LIST_HEADER}")?;
    for pet in pets {
        writeln!(w, "{} is {} years old.", pet.name(), pet.payload().age)?;
    }
    Ok(())
}

/// Prints the organization table with one row per organization.
pub fn write_organizations(
    w: &mut impl Write,
    orgs: &OrderedList<Organization>,
) -> io::Result<()> {
    writeln!(w)?;
    if orgs.is_empty() {
        return writeln!(w, "{LIST_EMPTY}");
    }
    writeln!(w, "{ORG_TABLE_HEADER}")?;
    for org in orgs {
        let payload = org.payload();
        writeln!(
            w,
            "{:<20}\t${:<16.2}\t${:<16.2}",
            org.name(),
            payload.goal_amount,
            payload.donations.raised
        )?;
    }
    Ok(())
}

/// The donation page shown once a donor has picked an organization.
pub fn write_pitch(w: &mut impl Write, org: &Record<Organization>) -> io::Result<()> {
    let payload = org.payload();
    writeln!(w, "{}", payload.url)?;
    writeln!(w, "MAKE A DIFFERENCE BY YOUR DONATION")?;
    writeln!(w, "Organization: {}", org.name())?;
    writeln!(w, "Purpose: {}", payload.purpose)?;
    writeln!(w, "We currently have raised ${:.2}.", payload.donations.raised)?;
    if payload.goal_reached() {
        writeln!(w, "We have reached our goal but can still use the donations.")?;
    } else {
        writeln!(
            w,
            "We are {:.2}% towards our goal of ${:.2}.",
            payload.progress_percent(),
            payload.goal_amount
        )?;
    }
    writeln!(w)
}

pub fn write_receipt(
    w: &mut impl Write,
    org: &Record<Organization>,
    amount: f64,
    at: NaiveDateTime,
) -> io::Result<()> {
    writeln!(w, "Organization: {}", org.name())?;
    writeln!(w, "Donation Amount: ${amount:.2}")?;
    writeln!(w, "Donation Date: {}", at.format(RECEIPT_TIME_FORMAT))?;
    writeln!(w)
}

/// End-of-program totals for one organization.
pub fn write_summary(w: &mut impl Write, org: &Record<Organization>) -> io::Result<()> {
    let tally = org.payload().donations;
    writeln!(w, "Organization Name: {}", org.name())?;
    writeln!(w, "Total Number of Donations: {}", tally.count)?;
    writeln!(w, "Total amount raised: ${:.2}", tally.raised)?;
    writeln!(w, "Total Credit Card processing: ${:.2}", tally.fees)?;
    writeln!(w)
}

/// Creates `path`, or empties it if it already exists.
pub fn reset_file(path: &Path) -> io::Result<()> {
    File::create(path).map(|_| ())
}

/// Appends one receipt to the file at `path`, creating it if needed.
pub fn append_receipt(
    path: &Path,
    org: &Record<Organization>,
    amount: f64,
    at: NaiveDateTime,
) -> io::Result<()> {
    let file = OpenOptions::new().append(true).create(true).open(path)?;
    let mut writer = BufWriter::new(file);
    write_receipt(&mut writer, org, amount, at)?;
    writer.flush()
}

/// Overwrites `path` with the summaries of every organization, in list order.
pub fn write_summaries_file(path: &Path, orgs: &OrderedList<Organization>) -> io::Result<()> {
    let mut writer = BufWriter::new(File::create(path)?);
    for org in orgs {
        write_summary(&mut writer, org)?;
    }
    writer.flush()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{OrganizationCreate, Owner};
    use chrono::NaiveDate;

    fn org(name: &str, goal: f64) -> Record<Organization> {
        Organization::register(OrganizationCreate {
            name: name.to_string(),
            purpose: "Help out".to_string(),
            goal_amount: goal,
            owner: Owner {
                first_last_name: "Jane Doe".to_string(),
                email: "jane@example.com".to_string(),
                password: "Secret12".to_string(),
            },
        })
    }

    fn render(f: impl FnOnce(&mut Vec<u8>) -> io::Result<()>) -> String {
        let mut out = Vec::new();
        f(&mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_pet_listing() {
        let mut pets = OrderedList::new();
        assert_eq!(
            render(|w| write_pets(w, &pets)),
            "\nThere aren't any names in the list.\n"
        );

        pets.insert(Pet::record("Shirly", 1)).unwrap();
        pets.insert(Pet::record("amy", 3)).unwrap();
        assert_eq!(
            render(|w| write_pets(w, &pets)),
            "\nThe names in alphabetical order:\namy is 3 years old.\nShirly is 1 years old.\n"
        );
    }

    #[test]
    fn test_organization_table_rows_are_padded() {
        let mut orgs = OrderedList::new();
        orgs.insert(org("Bees", 500.0)).unwrap();
        let out = render(|w| write_organizations(w, &orgs));
        assert_eq!(
            out,
            format!(
                "\n{ORG_TABLE_HEADER}\nBees                \t$500.00          \t$0.00            \n"
            )
        );
    }

    #[test]
    fn test_pitch_progress_and_goal_reached() {
        let mut record = org("Bees", 200.0);
        record.payload_mut().accept_donation(100.0, 0.0);
        let out = render(|w| write_pitch(w, &record));
        assert!(out.starts_with("https://donate.com/bees?form=popup#\n"));
        assert!(out.contains("We currently have raised $100.00.\n"));
        assert!(out.contains("We are 50.00% towards our goal of $200.00.\n"));
        assert!(out.ends_with(".\n\n"));

        record.payload_mut().accept_donation(100.0, 0.0);
        let out = render(|w| write_pitch(w, &record));
        assert!(out.contains("We have reached our goal but can still use the donations.\n"));
    }

    #[test]
    fn test_receipt_and_summary_format() {
        let mut record = org("Bees", 200.0);
        record.payload_mut().accept_donation(100.0, 0.031);
        let at = NaiveDate::from_ymd_opt(2024, 3, 7)
            .unwrap()
            .and_hms_opt(14, 5, 0)
            .unwrap();

        assert_eq!(
            render(|w| write_receipt(w, &record, 100.0, at)),
            "Organization: Bees\nDonation Amount: $100.00\nDonation Date: 03/07/24 - 02:05PM\n\n"
        );
        assert_eq!(
            render(|w| write_summary(w, &record)),
            "Organization Name: Bees\nTotal Number of Donations: 1\n\
             Total amount raised: $96.90\nTotal Credit Card processing: $3.10\n\n"
        );
    }

    #[test]
    fn test_receipts_file_is_reset_then_appended() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bees-receipts.txt");
        std::fs::write(&path, "stale").unwrap();

        reset_file(&path).unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "");

        let record = org("Bees", 200.0);
        let at = NaiveDate::from_ymd_opt(2024, 1, 1)
            .unwrap()
            .and_hms_opt(9, 0, 0)
            .unwrap();
        append_receipt(&path, &record, 5.0, at).unwrap();
        append_receipt(&path, &record, 7.5, at).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        assert_eq!(content.matches("Organization: Bees").count(), 2);
        assert!(content.contains("Donation Amount: $7.50"));
    }
}
