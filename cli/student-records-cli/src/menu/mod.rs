//! The interactive menu session.
//!
//! A [`Session`] owns nothing global: the caller passes in the record store,
//! the data file path and the input and output streams, which keeps the
//! whole menu drivable from tests without spawning a process.

use std::io::{BufRead, Write};

use camino::Utf8Path;
use student_records::{Listing, Record, RecordStore, StoreError};
use tracing::{debug, warn};

use crate::error::CliError;

const MENU: &str = concat!(
    "\n",
    "Student Management System\n",
    "1. Add Student\n",
    "2. List All Students\n",
    "3. Search Student by Name\n",
    "4. Update Student\n",
    "5. Remove Student\n",
    "6. Save and Exit\n",
);

/// One entry of the main menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    /// Add a new record.
    Add,
    /// List every record.
    List,
    /// Search records by name.
    Search,
    /// Update an existing record.
    Update,
    /// Remove records by id.
    Remove,
    /// Save the store and end the session.
    SaveAndExit,
}

impl MenuChoice {
    /// Parses the number typed at the menu prompt, ignoring surrounding
    /// whitespace. Returns `None` for anything that is not a menu entry.
    ///
    /// # Example
    ///
    /// ```
    /// use student_records_cli::menu::MenuChoice;
    ///
    /// assert_eq!(MenuChoice::parse(" 4 "), Some(MenuChoice::Update));
    /// assert_eq!(MenuChoice::parse("7"), None);
    /// ```
    #[must_use]
    pub fn parse(input: &str) -> Option<Self> {
        match input.trim().parse::<u8>().ok()? {
            1 => Some(Self::Add),
            2 => Some(Self::List),
            3 => Some(Self::Search),
            4 => Some(Self::Update),
            5 => Some(Self::Remove),
            6 => Some(Self::SaveAndExit),
            _ => None,
        }
    }
}

/// How a session finished.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionEnd {
    /// The user chose "Save and Exit" and the store was written.
    Saved,
    /// The user chose "Save and Exit" but writing the store failed.
    SaveFailed(StoreError),
    /// Input ended before the user chose "Save and Exit"; nothing was saved.
    InputClosed,
}

enum Flow {
    Continue,
    End(SessionEnd),
}

enum AgeInput {
    Valid(i32),
    Invalid,
}

/// A menu loop over a record store.
pub struct Session<'a, R, W> {
    store: &'a mut RecordStore,
    data_file: &'a Utf8Path,
    input: R,
    output: W,
}

impl<'a, R: BufRead, W: Write> Session<'a, R, W> {
    /// Creates a session that edits `store` and saves it to `data_file`.
    pub const fn new(
        store: &'a mut RecordStore,
        data_file: &'a Utf8Path,
        input: R,
        output: W,
    ) -> Self {
        Self {
            store,
            data_file,
            input,
            output,
        }
    }

    /// Runs the menu until the user saves and exits or input ends.
    ///
    /// # Errors
    ///
    /// Returns [`CliError::Terminal`] if reading input or writing output
    /// fails. Record store failures are shown to the user instead.
    pub fn run(mut self) -> Result<SessionEnd, CliError> {
        loop {
            self.output.write_all(MENU.as_bytes())?;
            let Some(line) = self.prompt("Enter your choice: ")? else {
                return Ok(SessionEnd::InputClosed);
            };
            let flow = match MenuChoice::parse(&line) {
                Some(choice) => self.dispatch(choice)?,
                None => {
                    debug!(input = %line, "invalid menu choice");
                    self.say("Invalid choice, please try again.")?;
                    Flow::Continue
                }
            };
            if let Flow::End(end) = flow {
                return Ok(end);
            }
        }
    }

    fn dispatch(&mut self, choice: MenuChoice) -> Result<Flow, CliError> {
        match choice {
            MenuChoice::Add => self.add_record(),
            MenuChoice::List => self.list_records(),
            MenuChoice::Search => self.search_records(),
            MenuChoice::Update => self.update_record(),
            MenuChoice::Remove => self.remove_record(),
            MenuChoice::SaveAndExit => self.save_and_exit(),
        }
    }

    fn add_record(&mut self) -> Result<Flow, CliError> {
        let Some(id) = self.prompt("Enter student ID: ")? else {
            return Ok(Flow::End(SessionEnd::InputClosed));
        };
        let Some(name) = self.prompt("Enter student name: ")? else {
            return Ok(Flow::End(SessionEnd::InputClosed));
        };
        let Some(age) = self.prompt_age("Enter student age: ")? else {
            return Ok(Flow::End(SessionEnd::InputClosed));
        };
        let AgeInput::Valid(age) = age else {
            return Ok(Flow::Continue);
        };
        let Some(course) = self.prompt("Enter student course: ")? else {
            return Ok(Flow::End(SessionEnd::InputClosed));
        };

        debug!(id = %id, "adding record");
        self.store.add(Record::new(id, name, age, course));
        self.say("Student added successfully.")?;
        Ok(Flow::Continue)
    }

    fn list_records(&mut self) -> Result<Flow, CliError> {
        match self.store.list_all() {
            Listing::Empty => writeln!(self.output, "No students available.")?,
            Listing::Records(records) => {
                for record in records {
                    writeln!(self.output, "{record}")?;
                }
            }
        }
        Ok(Flow::Continue)
    }

    fn search_records(&mut self) -> Result<Flow, CliError> {
        let Some(query) = self.prompt("Enter student name to search: ")? else {
            return Ok(Flow::End(SessionEnd::InputClosed));
        };

        let found = self.store.find_by_name(&query);
        if found.is_empty() {
            writeln!(self.output, "No students found with that name.")?;
        }
        for record in found {
            writeln!(self.output, "{record}")?;
        }
        Ok(Flow::Continue)
    }

    fn update_record(&mut self) -> Result<Flow, CliError> {
        let Some(id) = self.prompt("Enter student ID to update: ")? else {
            return Ok(Flow::End(SessionEnd::InputClosed));
        };
        if self.store.find_by_id(&id).is_none() {
            self.say("Student not found.")?;
            return Ok(Flow::Continue);
        }

        let Some(name) = self.prompt("Enter new name: ")? else {
            return Ok(Flow::End(SessionEnd::InputClosed));
        };
        let Some(age) = self.prompt_age("Enter new age: ")? else {
            return Ok(Flow::End(SessionEnd::InputClosed));
        };
        let AgeInput::Valid(age) = age else {
            return Ok(Flow::Continue);
        };
        let Some(course) = self.prompt("Enter new course: ")? else {
            return Ok(Flow::End(SessionEnd::InputClosed));
        };

        match self.store.update(&id, name, age, course) {
            Ok(record) => {
                debug!(id = %record.id(), "record updated");
                self.say("Student updated successfully.")?;
            }
            Err(err) => {
                debug!(error = %err, "update target vanished");
                self.say("Student not found.")?;
            }
        }
        Ok(Flow::Continue)
    }

    fn remove_record(&mut self) -> Result<Flow, CliError> {
        let Some(id) = self.prompt("Enter student ID to remove: ")? else {
            return Ok(Flow::End(SessionEnd::InputClosed));
        };

        let removed = self.store.remove_by_id(&id);
        debug!(id = %id, removed, "remove requested");
        if removed == 0 {
            self.say("No student found with that ID.")?;
        } else {
            self.say("Student removed successfully.")?;
        }
        Ok(Flow::Continue)
    }

    fn save_and_exit(&mut self) -> Result<Flow, CliError> {
        match self.store.save(self.data_file) {
            Ok(()) => {
                self.say("Data saved. Exiting...")?;
                Ok(Flow::End(SessionEnd::Saved))
            }
            Err(err) => {
                warn!(path = %self.data_file, error = %err, "failed to save student records");
                writeln!(self.output, "Error saving data: {err}")?;
                Ok(Flow::End(SessionEnd::SaveFailed(err)))
            }
        }
    }

    /// Prompts for an age, reporting values that are not integers.
    /// Returns `None` at end of input.
    fn prompt_age(&mut self, prompt: &str) -> Result<Option<AgeInput>, CliError> {
        let Some(raw) = self.prompt(prompt)? else {
            return Ok(None);
        };
        if let Ok(age) = raw.trim().parse::<i32>() {
            return Ok(Some(AgeInput::Valid(age)));
        }
        writeln!(self.output, "Invalid age: '{raw}'.")?;
        Ok(Some(AgeInput::Invalid))
    }

    /// Writes `prompt` and reads one line without its line terminator.
    /// Invalid UTF-8 is replaced with U+FFFD. Returns `None` at end of input.
    fn prompt(&mut self, prompt: &str) -> Result<Option<String>, CliError> {
        self.output.write_all(prompt.as_bytes())?;
        self.output.flush()?;

        let mut bytes = Vec::new();
        if self.input.read_until(b'\n', &mut bytes)? == 0 {
            return Ok(None);
        }
        if bytes.last() == Some(&b'\n') {
            bytes.pop();
            if bytes.last() == Some(&b'\r') {
                bytes.pop();
            }
        }
        Ok(Some(String::from_utf8_lossy(&bytes).into_owned()))
    }

    fn say(&mut self, message: &str) -> Result<(), CliError> {
        writeln!(self.output, "{message}")?;
        Ok(())
    }
}
