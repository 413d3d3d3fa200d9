use crate::error::TrackerError;
use crate::input::{validate, Console};
use crate::model::{Pet, MIN_AGE};
use crate::report;
use record_list::{ListError, OrderedList};
use std::io::{BufRead, Write};
use tracing::{info, info_span, warn};

pub const NAME_GET_PROMPT: &str = "Enter name: ";
pub const NAME_GET_ERROR: &str = "Please enter a valid name: ";
pub const AGE_PROMPT: &str = "Enter age: ";
pub const AGE_ERROR: &str = "Please enter a valid age: ";
pub const ADD_PET_PROMPT: &str = "\nDo you want to add another pet? (y/n): ";
pub const DEL_PET_PROMPT: &str = "\nDo you want to delete a pet from the list? (y/n): ";
pub const NAME_DEL_PROMPT: &str = "\nEnter pet's name to delete: ";
pub const NAME_DEL_ERROR: &str = "Please enter a valid name: ";
pub const YES_NO_ERROR: &str = "Please enter a (y)es or a (n)o: ";
pub const NODE_DEL_ERROR_EMPTY: &str = "There aren't any nodes in the list!";
pub const EMPTYING_LIST: &str = "\nEmptying list...";
pub const EMPTIED_LIST: &str = "Done.";
pub const MEM_ERROR: &str = "Not enough memory for new nodes.";

/// The interactive pet tracker.
///
/// A session runs through three phases on one list:
/// 1. **Build**: read a pet, then keep adding while the operator answers yes.
/// 2. **Prune**: delete pets by name while the operator answers yes, listing after every attempt.
/// 3. **Empty**: clear the list and show that it is empty.
pub struct PetSession<R, W> {
    console: Console<R, W>,
    pets: OrderedList<Pet>,
}

impl<R: BufRead, W: Write> PetSession<R, W> {
    /// `pets` may carry a node budget; it is expected to start empty.
    pub fn new(console: Console<R, W>, pets: OrderedList<Pet>) -> Self {
        Self { console, pets }
    }

    pub fn pets(&self) -> &OrderedList<Pet> {
        &self.pets
    }

    pub fn run(&mut self) -> Result<(), TrackerError> {
        {
            let _span = info_span!("build").entered();
            self.add_pet()?;
            while self.console.yes_or_no(ADD_PET_PROMPT, YES_NO_ERROR)? {
                self.add_pet()?;
            }
            self.print()?;
        }

        {
            let _span = info_span!("prune").entered();
            while self.console.yes_or_no(DEL_PET_PROMPT, YES_NO_ERROR)? {
                let name =
                    self.console
                        .validated_word(NAME_DEL_PROMPT, NAME_DEL_ERROR, validate::is_name)?;
                self.delete_pet(&name)?;
                self.print()?;
            }
            self.print()?;
        }

        let _span = info_span!("empty").entered();
        self.console.say(EMPTYING_LIST)?;
        let released = self.pets.clear();
        self.console.say(EMPTIED_LIST)?;
        info!(released, "Pet list emptied");
        self.print()
    }

    fn add_pet(&mut self) -> Result<(), TrackerError> {
        let name = self
            .console
            .validated_word(NAME_GET_PROMPT, NAME_GET_ERROR, validate::is_name)?;
        let age = self.console.int_at_least(AGE_PROMPT, AGE_ERROR, MIN_AGE)?;

        match self.pets.insert(Pet::record(name, age.unsigned_abs())) {
            Ok(_) => Ok(()),
            Err(ListError::AllocationFailure { .. }) => {
                self.console.say(MEM_ERROR)?;
                Ok(())
            }
            Err(e) => Err(e.into()),
        }
    }

    fn delete_pet(&mut self, name: &str) -> Result<(), TrackerError> {
        match self.pets.delete_by_name(name) {
            Ok(pet) => {
                info!(name = pet.name(), "Pet removed");
                Ok(())
            }
            Err(ListError::Empty) => {
                self.console.say(NODE_DEL_ERROR_EMPTY)?;
                Ok(())
            }
            Err(ListError::NotFound(name)) => {
                warn!(%name, "No such pet");
                self.console.say(&format!("{name} is not in the list of pets!"))?;
                Ok(())
            }
            Err(e) => Err(e.into()),
        }
    }

    fn print(&mut self) -> Result<(), TrackerError> {
        report::write_pets(self.console.writer_mut(), &self.pets)?;
        Ok(())
    }
}
