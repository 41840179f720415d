//! Menu state machine driving one interactive session.

use crate::config::Config;
use crate::console::{ask_yes_no, prompt_line, prompt_number_in_range, Console};
use crate::domain::{ContactName, PhoneNumber};
use crate::error::AppResult;
use crate::menu::render::{render_table, search_summary, MENU_LINES};
use crate::repositories::{ContactRepository, FileContactRepository, StorageState};
use crate::store::{ContactStore, DeleteOutcome};
use tracing::{info, warn};

/// States of an interactive session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuState {
    Init,
    MainMenu,
    View,
    Add,
    Search,
    Delete,
    Exited,
}

/// The five main-menu choices, numbered as shown to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuOption {
    View = 1,
    Add = 2,
    Search = 3,
    Delete = 4,
    SaveAndExit = 5,
}

impl MenuOption {
    pub fn from_number(n: u32) -> Option<Self> {
        match n {
            1 => Some(Self::View),
            2 => Some(Self::Add),
            3 => Some(Self::Search),
            4 => Some(Self::Delete),
            5 => Some(Self::SaveAndExit),
            _ => None,
        }
    }

    fn next_state(self) -> MenuState {
        match self {
            Self::View => MenuState::View,
            Self::Add => MenuState::Add,
            Self::Search => MenuState::Search,
            Self::Delete => MenuState::Delete,
            Self::SaveAndExit => MenuState::Exited,
        }
    }
}

/// How a session that did not fail came to an end.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionOutcome {
    /// The user chose Save and Exit; `count` contacts were written.
    Saved { count: usize },
    /// The user declined to create the data directory; nothing was written.
    SetupDeclined,
}

enum InitOutcome {
    Continue,
    Declined,
}

/// Drives one interactive session against a repository and a console.
pub struct MenuController<R, C> {
    repository: R,
    console: C,
    store: ContactStore,
}

impl<C: Console> MenuController<FileContactRepository, C> {
    /// Session over the contact file described by `config`.
    pub fn from_config(config: &Config, console: C) -> Self {
        Self::new(FileContactRepository::new(config), console)
    }
}

impl<R: ContactRepository, C: Console> MenuController<R, C> {
    pub fn new(repository: R, console: C) -> Self {
        Self {
            repository,
            console,
            store: ContactStore::new(),
        }
    }

    pub fn store(&self) -> &ContactStore {
        &self.store
    }

    pub fn console(&self) -> &C {
        &self.console
    }

    /// Run the session to completion.
    ///
    /// # Errors
    ///
    /// Load and save failures, and console failures (including closed input),
    /// end the session. Nothing is saved in that case except when the save itself
    /// failed.
    pub fn run(&mut self) -> AppResult<SessionOutcome> {
        let mut state = MenuState::Init;
        loop {
            state = match state {
                MenuState::Init => match self.initialize()? {
                    InitOutcome::Continue => MenuState::MainMenu,
                    InitOutcome::Declined => return Ok(SessionOutcome::SetupDeclined),
                },
                MenuState::MainMenu => self.choose_option()?.next_state(),
                MenuState::View => {
                    self.view_contacts()?;
                    MenuState::MainMenu
                }
                MenuState::Add => {
                    self.add_contact()?;
                    MenuState::MainMenu
                }
                MenuState::Search => {
                    self.search_contacts()?;
                    MenuState::MainMenu
                }
                MenuState::Delete => {
                    self.delete_contact()?;
                    MenuState::MainMenu
                }
                MenuState::Exited => {
                    let count = self.save()?;
                    return Ok(SessionOutcome::Saved { count });
                }
            };
        }
    }

    fn initialize(&mut self) -> AppResult<InitOutcome> {
        let dir = self.repository.directory_location();

        if self.repository.storage_state() == StorageState::MissingDirectory {
            let question = format!(
                "Data directory \"{}\" does not exist. Do you wish to create it? (yes/no) > ",
                dir
            );
            if !ask_yes_no(&mut self.console, &question)? {
                info!("User declined to create the data directory");
                self.console.write_line(
                    "If there is no data file, then there is no reason to continue the program.",
                )?;
                return Ok(InitOutcome::Declined);
            }
            self.repository.create_directory()?;
            self.console.write_line(&format!("Creating \"{}\"", dir))?;
        } else {
            self.console.write_line(&format!(
                "Data directory \"{}\" exists, checking for the data file now...",
                dir
            ))?;
        }

        let file = self.repository.file_location();
        match self.repository.storage_state() {
            StorageState::Ready => {
                self.console.write_line(&format!(
                    "Data file \"{}\" exists, reading from the file...",
                    file
                ))?;
                self.store = ContactStore::from_records(self.repository.load()?);
                info!(count = self.store.len(), "Contacts loaded");
            }
            _ => {
                self.console
                    .write_line(&format!("The file \"{}\" does not exist.", file))?;
                if ask_yes_no(
                    &mut self.console,
                    "Want to create a new data file? (yes/no) > ",
                )? {
                    self.repository.create_file()?;
                    self.console
                        .write_line(&format!("Creating data file \"{}\"...", file))?;
                } else {
                    info!("Starting with an empty contact list; file will be written on exit");
                }
            }
        }

        Ok(InitOutcome::Continue)
    }

    fn choose_option(&mut self) -> AppResult<MenuOption> {
        self.console.write_line("")?;
        for line in MENU_LINES {
            self.console.write_line(line)?;
        }
        loop {
            let n = prompt_number_in_range(
                &mut self.console,
                "Enter an option (1, 2, 3, 4, or 5) > ",
                1,
                5,
            )?;
            if let Some(option) = MenuOption::from_number(n) {
                return Ok(option);
            }
        }
    }

    fn view_contacts(&mut self) -> AppResult<()> {
        if self.store.is_empty() {
            self.console.write_line("There are currently no contacts")?;
        } else {
            let table = render_table(self.store.list_all());
            self.console.write_line(&table)?;
        }
        Ok(())
    }

    fn add_contact(&mut self) -> AppResult<()> {
        let name = self.collect_name()?;
        let phone = self.collect_phone()?;
        self.store.add(name, phone);
        self.view_contacts()
    }

    fn collect_name(&mut self) -> AppResult<ContactName> {
        loop {
            let input = prompt_line(&mut self.console, "New contact name: > ")?;
            let name = match ContactName::new(input) {
                Ok(name) => name,
                Err(e) => {
                    warn!(error = %e, "Rejected contact name");
                    self.console
                        .write_line("Only letters and spaces are valid!")?;
                    continue;
                }
            };

            let question = format!("Name: \"{}\" is correct. Confirm? (yes/no) > ", name);
            if ask_yes_no(&mut self.console, &question)? {
                return Ok(name);
            }
        }
    }

    fn collect_phone(&mut self) -> AppResult<PhoneNumber> {
        loop {
            let input = prompt_line(&mut self.console, "New contact number: > ")?;
            let phone = match PhoneNumber::from_raw_digits(input.trim()) {
                Ok(phone) => phone,
                Err(e) => {
                    warn!(error = %e, "Rejected phone number");
                    self.console
                        .write_line("Only numbers are valid, either 7 or 10 digits!")?;
                    continue;
                }
            };

            let question = format!("New contact number: {} Confirm? (yes/no) > ", phone);
            if ask_yes_no(&mut self.console, &question)? {
                return Ok(phone);
            }
        }
    }

    fn search_contacts(&mut self) -> AppResult<()> {
        let query = prompt_line(&mut self.console, "Contact name: > ")?;
        let names: Vec<String> = self
            .store
            .find_by_name_substring(&query)
            .iter()
            .map(|record| record.name.to_string())
            .collect();

        for name in &names {
            self.console.write_line(name)?;
        }
        self.console
            .write_line(&search_summary(names.len(), &query))?;
        Ok(())
    }

    fn delete_contact(&mut self) -> AppResult<()> {
        if self.store.is_empty() {
            self.console.write_line(
                "There are no contacts, unable to delete. Try adding contacts first.",
            )?;
            return Ok(());
        }

        self.view_contacts()?;
        let target = prompt_line(&mut self.console, "Contact to delete (type exact name): > ")?;

        let name = match self.store.find_by_exact_name(&target) {
            Some(record) => record.name.clone(),
            None => {
                self.console
                    .write_line("Unable to find contact, please try again.")?;
                return Ok(());
            }
        };

        let question = format!("Confirm delete {}? (yes/no) > ", name);
        if !ask_yes_no(&mut self.console, &question)? {
            self.console
                .write_line(&format!("Cancelled deletion of {}", name))?;
            return Ok(());
        }

        self.console.write_line(&format!("Removing {}...", name))?;
        if let DeleteOutcome::NotFound = self.store.delete_by_exact_name(&target) {
            self.console
                .write_line("Unable to find contact, please try again.")?;
        }
        Ok(())
    }

    fn save(&mut self) -> AppResult<usize> {
        self.console.write_line("Saving contact file...")?;
        self.repository.save(self.store.list_all())?;
        self.console.write_line("Contact file save successful!")?;
        info!(count = self.store.len(), "Contacts saved");
        Ok(self.store.len())
    }
}
