//! Interactive menu
//!
//! Blocking read-eval loop over any line-oriented input and any writer. Each
//! iteration prints the menu, reads one choice, and runs exactly one catalog
//! operation. "Not found" and "empty" outcomes are printed and the loop goes on.

use crate::catalog::{
    format_delete_text, format_find_text, format_group_text, format_list_text,
    format_section_heading, format_sort_text, format_stats_text, CatalogCommandService,
};
use crate::error::ApiError;
use crate::store::RecordStore;
use crate::views::{GroupKey, SortKey};
use std::io::{BufRead, Write};
use tracing::debug;

/// One menu entry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    DisplayAll,
    SortBySize,
    SortByName,
    GroupByExtension,
    Search,
    Statistics,
    Delete,
    Exit,
}

impl MenuChoice {
    /// Parse a menu line. Anything other than 0-7 is `None`.
    pub fn parse(input: &str) -> Option<Self> {
        match input.trim().parse::<u8>().ok()? {
            1 => Some(MenuChoice::DisplayAll),
            2 => Some(MenuChoice::SortBySize),
            3 => Some(MenuChoice::SortByName),
            4 => Some(MenuChoice::GroupByExtension),
            5 => Some(MenuChoice::Search),
            6 => Some(MenuChoice::Statistics),
            7 => Some(MenuChoice::Delete),
            0 => Some(MenuChoice::Exit),
            _ => None,
        }
    }
}

const MENU_ENTRIES: [&str; 8] = [
    "1. Display All Files",
    "2. Sort Files by Size",
    "3. Sort Files by Name",
    "4. Organize by File Type",
    "5. Search File",
    "6. File Statistics",
    "7. Delete File",
    "0. Exit",
];

/// How the loop ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuExit {
    /// The user chose 0
    Requested,
    /// Input closed before an exit choice
    EndOfInput,
}

/// Menu driver borrowing the store for the length of the session.
pub struct MenuLoop<'a, R, W> {
    store: &'a mut RecordStore,
    input: R,
    output: W,
}

impl<'a, R: BufRead, W: Write> MenuLoop<'a, R, W> {
    pub fn new(store: &'a mut RecordStore, input: R, output: W) -> Self {
        Self {
            store,
            input,
            output,
        }
    }

    /// Write text ahead of the first menu (banner, add notices).
    pub fn preamble(&mut self, text: &str) -> Result<(), ApiError> {
        self.output.write_all(text.as_bytes())?;
        Ok(())
    }

    /// Run until the user exits or input ends.
    pub fn run(&mut self) -> Result<MenuExit, ApiError> {
        loop {
            self.print_menu()?;
            let Some(line) = self.read_line()? else {
                writeln!(self.output)?;
                return Ok(MenuExit::EndOfInput);
            };
            let Some(choice) = MenuChoice::parse(&line) else {
                debug!(input = %line.trim(), "invalid menu choice");
                writeln!(self.output, "[ERROR] Invalid choice!")?;
                continue;
            };
            debug!(?choice, "menu choice");
            if choice == MenuChoice::Exit {
                writeln!(self.output, "\nThank you for using filecat!")?;
                self.output.flush()?;
                return Ok(MenuExit::Requested);
            }
            if !self.dispatch(choice)? {
                writeln!(self.output)?;
                return Ok(MenuExit::EndOfInput);
            }
        }
    }

    /// Run one non-exit choice. Returns false when a prompt hit end of input.
    fn dispatch(&mut self, choice: MenuChoice) -> Result<bool, ApiError> {
        let text = match choice {
            MenuChoice::DisplayAll => format_list_text(&CatalogCommandService::list(&*self.store)),
            MenuChoice::SortBySize => {
                format_sort_text(&CatalogCommandService::sort(&*self.store, SortKey::Size))
            }
            MenuChoice::SortByName => {
                format_sort_text(&CatalogCommandService::sort(&*self.store, SortKey::Name))
            }
            MenuChoice::GroupByExtension => {
                format_group_text(&CatalogCommandService::group(&*self.store, GroupKey::Extension))
            }
            MenuChoice::Search => {
                let Some(name) = self.prompt("Enter file name to search: ")? else {
                    return Ok(false);
                };
                format_find_text(&CatalogCommandService::find(&*self.store, &name))
            }
            MenuChoice::Statistics => format_stats_text(&CatalogCommandService::stats(&*self.store)),
            MenuChoice::Delete => {
                let Some(name) = self.prompt("Enter file name to delete: ")? else {
                    return Ok(false);
                };
                format_delete_text(&CatalogCommandService::delete(self.store, &name))
            }
            MenuChoice::Exit => return Ok(true),
        };
        write!(self.output, "\n{}", text)?;
        Ok(true)
    }

    fn print_menu(&mut self) -> Result<(), ApiError> {
        writeln!(self.output, "\n{}", format_section_heading("Main Menu"))?;
        for entry in MENU_ENTRIES {
            writeln!(self.output, "{}", entry)?;
        }
        write!(self.output, "Enter choice: ")?;
        self.output.flush()?;
        Ok(())
    }

    fn prompt(&mut self, label: &str) -> Result<Option<String>, ApiError> {
        write!(self.output, "\n{}", label)?;
        self.output.flush()?;
        Ok(self.read_line()?.map(|line| line.trim().to_string()))
    }

    /// Bytes that are not UTF-8 decode lossily and fall through as invalid input.
    fn read_line(&mut self) -> Result<Option<String>, ApiError> {
        let mut buf = Vec::new();
        if self.input.read_until(b'\n', &mut buf)? == 0 {
            return Ok(None);
        }
        Ok(Some(String::from_utf8_lossy(&buf).into_owned()))
    }
}
