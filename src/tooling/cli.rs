//! CLI Tooling
//!
//! Command-line interface for the catalog. The default command is the
//! interactive menu; the other subcommands run one operation against a freshly
//! seeded catalog and print the result as text or JSON.

use crate::catalog::{
    format_delete_text, format_find_text, format_group_text, format_list_text, format_sort_text,
    format_stats_text, CatalogCommandService,
};
use crate::config::{ConfigLoader, FilecatConfig};
use crate::error::{ApiError, StoreError};
use crate::store::{FileRecord, RecordObserver, RecordStore};
use crate::tooling::menu::{MenuExit, MenuLoop};
use crate::views::{GroupKey, SortKey};
use clap::{Parser, Subcommand};
use serde::Serialize;
use std::cell::RefCell;
use std::io::{BufRead, Write};
use std::path::PathBuf;
use std::rc::Rc;
use tracing::info;

/// filecat - in-memory catalog of file metadata records
#[derive(Parser, Debug)]
#[command(name = "filecat")]
#[command(about = "In-memory catalog of file metadata records with an interactive menu")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Configuration file path (overrides default config loading)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Start with an empty catalog instead of the sample records
    #[arg(long, global = true)]
    pub no_samples: bool,

    /// Add a record at startup (repeatable)
    #[arg(long = "add", value_name = "NAME,EXT,SIZE,PATH", value_parser = parse_record_spec, global = true)]
    pub add: Vec<FileRecord>,

    /// Log level (trace, debug, info, warn, error, off)
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Log format (json, text)
    #[arg(long, global = true)]
    pub log_format: Option<String>,

    /// Log output (stdout, stderr, file, file+stderr)
    #[arg(long, global = true)]
    pub log_output: Option<String>,

    /// Log file path (if output includes "file")
    #[arg(long, global = true)]
    pub log_file: Option<PathBuf>,
}

fn parse_record_spec(spec: &str) -> Result<FileRecord, StoreError> {
    FileRecord::parse_spec(spec)
}

#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Interactive menu (default)
    Menu,
    /// Display all records in insertion order
    List {
        /// Output format (text or json)
        #[arg(long, default_value = "text")]
        format: String,
    },
    /// Display records sorted ascending by a key
    Sort {
        /// Sort key (size, name, path)
        #[arg(long, default_value = "size")]
        by: SortKey,
        /// Output format (text or json)
        #[arg(long, default_value = "text")]
        format: String,
    },
    /// Display records grouped by a key
    Group {
        /// Group key (extension, path)
        #[arg(long, default_value = "extension")]
        by: GroupKey,
        /// Output format (text or json)
        #[arg(long, default_value = "text")]
        format: String,
    },
    /// Find the first record with an exact name
    Find {
        /// Record name (case-sensitive)
        name: String,
        /// Output format (text or json)
        #[arg(long, default_value = "text")]
        format: String,
    },
    /// Show aggregate statistics
    Stats {
        /// Output format (text or json)
        #[arg(long, default_value = "text")]
        format: String,
    },
    /// Delete the first record with an exact name
    Delete {
        /// Record name (case-sensitive)
        name: String,
        /// Output format (text or json)
        #[arg(long, default_value = "text")]
        format: String,
    },
    /// Print the effective configuration as TOML
    Config,
}

impl Cli {
    /// The subcommand to run; the menu when none was given.
    pub fn command_or_default(&self) -> Commands {
        self.command.clone().unwrap_or(Commands::Menu)
    }

    /// Load configuration and fold command-line overrides into it.
    pub fn load_config(&self) -> Result<FilecatConfig, ApiError> {
        let mut config = match &self.config {
            Some(path) => ConfigLoader::load_from_file(path)?,
            None => ConfigLoader::load()?,
        };
        if self.no_samples {
            config.catalog.seed_samples = false;
        }
        config.catalog.records.extend(self.add.iter().cloned());
        if let Some(ref level) = self.log_level {
            config.logging.level = level.clone();
        }
        if let Some(ref format) = self.log_format {
            config.logging.format = format.clone();
        }
        if let Some(ref output) = self.log_output {
            config.logging.output = output.clone();
        }
        if let Some(ref file) = self.log_file {
            config.logging.file = Some(file.clone());
        }
        Ok(config)
    }
}

/// Collects add notices until the menu prints them.
struct PendingNotices(Rc<RefCell<Vec<String>>>);

impl RecordObserver for PendingNotices {
    fn record_added(&mut self, record: &FileRecord) {
        self.0
            .borrow_mut()
            .push(crate::catalog::format_added_text(record));
    }
}

/// CLI context owning the catalog for the life of the process
pub struct CliContext {
    store: RecordStore,
    config: FilecatConfig,
    notices: Rc<RefCell<Vec<String>>>,
}

impl CliContext {
    /// Create a context and seed the catalog from `config`.
    pub fn new(config: FilecatConfig) -> Result<Self, ApiError> {
        config.catalog.validate()?;

        let notices = Rc::new(RefCell::new(Vec::new()));
        let mut store =
            RecordStore::with_observer(Box::new(PendingNotices(Rc::clone(&notices))));
        if config.catalog.seed_samples {
            store.seed_samples();
        }
        for record in &config.catalog.records {
            store.add_record(record.clone());
        }
        info!(records = store.len(), "catalog seeded");

        Ok(Self {
            store,
            config,
            notices,
        })
    }

    pub fn store(&self) -> &RecordStore {
        &self.store
    }

    pub fn store_mut(&mut self) -> &mut RecordStore {
        &mut self.store
    }

    pub fn config(&self) -> &FilecatConfig {
        &self.config
    }

    /// Add notices not yet shown, oldest first.
    pub fn take_notices(&self) -> Vec<String> {
        std::mem::take(&mut *self.notices.borrow_mut())
    }

    /// Execute a CLI command. `Menu` runs on the process stdin/stdout.
    pub fn execute(&mut self, command: &Commands) -> Result<String, ApiError> {
        info!(command = command_name(command), "executing command");
        match command {
            Commands::Menu => {
                let stdin = std::io::stdin();
                let stdout = std::io::stdout();
                self.run_menu(stdin.lock(), stdout.lock())?;
                Ok(String::new())
            }
            Commands::List { format } => render(
                format,
                &CatalogCommandService::list(&self.store),
                format_list_text,
            ),
            Commands::Sort { by, format } => render(
                format,
                &CatalogCommandService::sort(&self.store, *by),
                format_sort_text,
            ),
            Commands::Group { by, format } => render(
                format,
                &CatalogCommandService::group(&self.store, *by),
                format_group_text,
            ),
            Commands::Find { name, format } => render(
                format,
                &CatalogCommandService::find(&self.store, name),
                format_find_text,
            ),
            Commands::Stats { format } => render(
                format,
                &CatalogCommandService::stats(&self.store),
                format_stats_text,
            ),
            Commands::Delete { name, format } => {
                // validate before mutating
                check_format(format)?;
                let output = CatalogCommandService::delete(&mut self.store, name);
                render(format, &output, format_delete_text)
            }
            Commands::Config => Ok(toml::to_string_pretty(&self.config)?),
        }
    }

    /// Run the interactive menu over the given streams.
    pub fn run_menu<R: BufRead, W: Write>(
        &mut self,
        input: R,
        output: W,
    ) -> Result<MenuExit, ApiError> {
        let mut preamble = String::new();
        preamble.push_str(&format!(
            "\n{}\n",
            crate::catalog::format_section_heading("filecat - File Organizer")
        ));
        for notice in self.take_notices() {
            preamble.push_str(&notice);
        }
        let exit = {
            let mut menu = MenuLoop::new(&mut self.store, input, output);
            menu.preamble(&preamble)?;
            menu.run()?
        };
        info!(?exit, records = self.store.len(), "menu finished");
        Ok(exit)
    }
}

fn command_name(command: &Commands) -> &'static str {
    match command {
        Commands::Menu => "menu",
        Commands::List { .. } => "list",
        Commands::Sort { .. } => "sort",
        Commands::Group { .. } => "group",
        Commands::Find { .. } => "find",
        Commands::Stats { .. } => "stats",
        Commands::Delete { .. } => "delete",
        Commands::Config => "config",
    }
}

fn check_format(format: &str) -> Result<(), ApiError> {
    match format {
        "text" | "json" => Ok(()),
        other => Err(ApiError::InvalidArgument(format!(
            "Invalid format: {} (must be 'text' or 'json')",
            other
        ))),
    }
}

fn render<T: Serialize>(
    format: &str,
    data: &T,
    text: impl Fn(&T) -> String,
) -> Result<String, ApiError> {
    check_format(format)?;
    if format == "json" {
        Ok(serde_json::to_string_pretty(data)?)
    } else {
        Ok(text(data))
    }
}
