use crate::config::TrackerConfig;
use crate::error::TrackerError;
use crate::input::validate::{self, DonationEntry};
use crate::input::{Console, InputError};
use crate::model::{Donor, Organization, OrganizationCreate, Owner, MIN_GOAL};
use crate::report;
use chrono::NaiveDateTime;
use record_list::{ListError, OrderedList};
use std::io::{BufRead, Write};
use tracing::{info, info_span, warn};

pub const ORG_NAME_PROMPT: &str = "Enter your organization's name: ";
pub const ORG_PURPOSE_PROMPT: &str = "State the purpose of your fundraiser: ";
pub const FIRST_LAST_NAME_PROMPT: &str = "Enter first and last name: ";
pub const GOAL_PROMPT: &str = "Enter the goal amount you want to raise: ";
pub const GOAL_ERROR: &str = "That goal amount is not valid, please enter another: ";
pub const EMAIL_PROMPT: &str = "Enter email address: ";
pub const EMAIL_ERROR: &str = "That email is not valid, please enter another: ";
pub const EMAIL_VALID_PROMPT: &str = "Is this email correct? (y)es or (n)o: ";
pub const EMAIL_MATCH_ERROR: &str = "That email does not match, please enter another: ";
pub const PASSWORD_PROMPT: &str = "Enter password: ";
pub const PASSWORD_ERROR: &str = "That password is not valid, please enter another: ";
pub const PASSWORD_MATCH_ERROR: &str = "That password does not match, enter another: ";
pub const NEW_ORG_PROMPT: &str = "Do you wish to add another fundraiser? (y)es or (n)o: ";
pub const DONATION_SELECT_PROMPT: &str = "Select the organization to donate to: ";
pub const SELECT_PROMPT: &str = "Enter the name of the organization you wish to donate to: ";
pub const SELECT_ERROR: &str = "Please enter the valid name of a registered organization: ";
pub const DONATION_PROMPT: &str = "Enter your donation amount($): ";
pub const DONATION_ERROR: &str = "That is not a valid donation amount, enter another: ";
pub const ZIP_PROMPT: &str = "Enter your zip code: ";
pub const ZIP_ERROR: &str = "That zip code is not valid, please enter another: ";
pub const RECEIPT_PROMPT: &str = "Do you want a receipt, (y)es or (n)o? ";
pub const YES_NO_ERROR: &str = "Please enter (y)es or (n)o: ";
pub const MEM_ERROR: &str = "Not enough memory for new nodes.";

/// The phases of a fundraiser run.
///
/// ```text
/// Setup ──▶ Setup | Donations
/// Donations ──▶ Donations | Report   (Setup when no organization is registered)
/// Report ──▶ Donations | End
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Setup,
    Donations,
    Report,
    End,
}

/// Source of receipt timestamps.
pub type Clock = fn() -> NaiveDateTime;

fn local_now() -> NaiveDateTime {
    chrono::Local::now().naive_local()
}

/// The fundraiser program: organizations register, donors give, and an
/// owner closes the run with a report.
///
/// Receipt files and the summary file are written under
/// [`TrackerConfig::data_dir`].
pub struct FundraiserSystem<R, W> {
    console: Console<R, W>,
    orgs: OrderedList<Organization>,
    config: TrackerConfig,
    /// Name of the organization whose donation prompt led to the report mode.
    selected: Option<String>,
    clock: Clock,
}

impl<R: BufRead, W: Write> FundraiserSystem<R, W> {
    pub fn new(console: Console<R, W>, config: TrackerConfig) -> Self {
        Self {
            console,
            orgs: config.new_list(),
            config,
            selected: None,
            clock: local_now,
        }
    }

    /// Replaces the local-time clock used for receipts.
    pub fn with_clock(mut self, clock: Clock) -> Self {
        self.clock = clock;
        self
    }

    pub fn organizations(&self) -> &OrderedList<Organization> {
        &self.orgs
    }

    /// Runs modes from `Setup` until `End`, then empties the list.
    ///
    /// The list is emptied even when a mode fails.
    pub fn run(&mut self) -> Result<(), TrackerError> {
        let result = self.run_modes();
        let released = self.orgs.clear();
        info!(released, "Fundraiser closed");
        result
    }

    fn run_modes(&mut self) -> Result<(), TrackerError> {
        let mut mode = Mode::Setup;
        while mode != Mode::End {
            let next = self.step(mode)?;
            info!(from = ?mode, to = ?next, "Mode transition");
            mode = next;
        }
        Ok(())
    }

    /// Runs one mode to completion and returns the next one.
    pub fn step(&mut self, mode: Mode) -> Result<Mode, TrackerError> {
        match mode {
            Mode::Setup => {
                let _span = info_span!("setup").entered();
                self.set_up()
            }
            Mode::Donations => {
                let _span = info_span!("donations").entered();
                self.donate()
            }
            Mode::Report => {
                let _span = info_span!("report").entered();
                self.report()
            }
            Mode::End => Ok(Mode::End),
        }
    }

    fn set_up(&mut self) -> Result<Mode, TrackerError> {
        let name = self.console.prompt_line(ORG_NAME_PROMPT)?;
        let purpose = self.console.prompt_line(ORG_PURPOSE_PROMPT)?;
        let first_last_name = self.console.prompt_line(FIRST_LAST_NAME_PROMPT)?;
        let goal_amount = self.console.amount_above(GOAL_PROMPT, GOAL_ERROR, MIN_GOAL)?;
        let email = self.confirmed_email()?;
        let password =
            self.console
                .validated_word(PASSWORD_PROMPT, PASSWORD_ERROR, validate::is_password)?;

        let record = Organization::register(OrganizationCreate {
            name,
            purpose,
            goal_amount,
            owner: Owner {
                first_last_name,
                email,
                password,
            },
        });

        report::reset_file(&self.config.data_path(&record.payload().receipt_path))?;

        match self.orgs.insert(record) {
            Ok(org) => {
                let payload = org.payload();
                let thanks = format!(
                    "Thank you {}. The url to raise funds for {} is {}.\n",
                    payload.owner.first_last_name,
                    org.name(),
                    payload.url
                );
                info!(org = org.name(), goal = payload.goal_amount, "Organization registered");
                self.console.say(&thanks)?;
            }
            Err(ListError::AllocationFailure { .. }) => self.console.say(MEM_ERROR)?,
            Err(e) => return Err(e.into()),
        }

        if self.console.yes_or_no(NEW_ORG_PROMPT, YES_NO_ERROR)? {
            Ok(Mode::Setup)
        } else {
            Ok(Mode::Donations)
        }
    }

    /// Reads an email and asks the owner to confirm it, starting over on a no.
    fn confirmed_email(&mut self) -> Result<String, InputError> {
        let mut prompt = EMAIL_PROMPT;
        loop {
            self.console.prompt(prompt)?;
            let email = self.console.word()?;
            if self.console.yes_or_no(EMAIL_VALID_PROMPT, YES_NO_ERROR)? {
                return Ok(email);
            }
            prompt = EMAIL_ERROR;
        }
    }

    fn donate(&mut self) -> Result<Mode, TrackerError> {
        self.console.say(DONATION_SELECT_PROMPT)?;
        report::write_organizations(self.console.writer_mut(), &self.orgs)?;
        self.console.say("")?;

        if self.orgs.is_empty() {
            warn!("No organizations registered");
            return Ok(Mode::Setup);
        }

        let name = self.select_organization()?;
        let org = self
            .orgs
            .find_by_name(&name)
            .ok_or_else(|| ListError::NotFound(name.clone()))?;
        report::write_pitch(self.console.writer_mut(), org)?;

        let entry = self
            .console
            .validated_word(DONATION_PROMPT, DONATION_ERROR, validate::is_donation)?;
        let next = match validate::parse_donation(&entry) {
            Some(DonationEntry::Admin) => {
                info!(org = %name, "Administrator requested the report");
                self.selected = Some(name);
                Mode::Report
            }
            Some(DonationEntry::Amount(amount)) => {
                self.accept_donation(&name, amount)?;
                Mode::Donations
            }
            None => Mode::Donations,
        };

        self.console.say("")?;
        Ok(next)
    }

    /// Prompts until the operator names a registered organization and returns
    /// its name as stored.
    fn select_organization(&mut self) -> Result<String, TrackerError> {
        let mut name = self.console.prompt_line(SELECT_PROMPT)?;
        loop {
            if let Some(org) = self.orgs.find_by_name(&name) {
                return Ok(org.name().to_string());
            }
            name = self.console.prompt_line(SELECT_ERROR)?;
        }
    }

    fn accept_donation(&mut self, name: &str, amount: f64) -> Result<(), TrackerError> {
        let donor = Donor {
            first_last_name: self.console.prompt_line(FIRST_LAST_NAME_PROMPT)?,
            zip: self
                .console
                .validated_word(ZIP_PROMPT, ZIP_ERROR, validate::is_zip)?,
        };

        let fee_rate = self.config.transaction_fee;
        let org = self
            .orgs
            .find_by_name_mut(name)
            .ok_or_else(|| ListError::NotFound(name.to_string()))?;
        let donation = org.payload_mut().accept_donation(amount, fee_rate);
        info!(
            org = name,
            donor = %donor.first_last_name,
            zip = %donor.zip,
            amount = donation.amount,
            fee = donation.fee,
            "Donation accepted"
        );

        self.console.say(&format!(
            "Thank you for your donation. There is a {:.1}% credit card processing fee of ${:.2}. ${:.2} will be donated.",
            fee_rate * 100.0,
            donation.fee,
            donation.net
        ))?;

        if self.console.yes_or_no(RECEIPT_PROMPT, YES_NO_ERROR)? {
            let at = (self.clock)();
            let org = self
                .orgs
                .find_by_name(name)
                .ok_or_else(|| ListError::NotFound(name.to_string()))?;
            report::write_receipt(self.console.writer_mut(), org, amount, at)?;
            let receipts = self.config.data_path(&org.payload().receipt_path);
            report::append_receipt(&receipts, org, amount, at)?;
        }
        Ok(())
    }

    fn report(&mut self) -> Result<Mode, TrackerError> {
        let owner = match self
            .selected
            .as_deref()
            .and_then(|name| self.orgs.find_by_name(name))
        {
            Some(org) => org.payload().owner.clone(),
            None => return Ok(Mode::Donations),
        };

        let max_attempts = self.config.max_credential_prompts;
        let authorized = self.console.match_credential(
            &owner.email,
            EMAIL_PROMPT,
            EMAIL_MATCH_ERROR,
            max_attempts,
        )? && self.console.match_credential(
            &owner.password,
            PASSWORD_PROMPT,
            PASSWORD_MATCH_ERROR,
            max_attempts,
        )?;

        if !authorized {
            warn!(owner = %owner.first_last_name, "Report credentials rejected");
            return Ok(Mode::Donations);
        }

        self.console.say("")?;
        for org in &self.orgs {
            report::write_summary(self.console.writer_mut(), org)?;
        }
        let path = self.config.orgs_path();
        report::write_summaries_file(&path, &self.orgs)?;
        info!(path = %path.display(), orgs = self.orgs.len(), "Summaries written");
        Ok(Mode::End)
    }
}
