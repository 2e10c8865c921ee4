//! Subcommand implementations.

use std::path::PathBuf;

use anyhow::Result;

use termdeck_core::config::{load_config_from, TermdeckConfig};
use termdeck_core::model::Entry;
use termdeck_core::store::RecordStore;

pub mod add;
pub mod init;
pub mod learn;
pub mod quiz;
pub mod search;
pub mod show;

/// Config and store shared by every command.
pub struct AppContext {
    pub config: TermdeckConfig,
    pub store: RecordStore,
}

impl AppContext {
    pub fn load(config_path: Option<PathBuf>, data_file: Option<PathBuf>) -> Result<Self> {
        let mut config = load_config_from(config_path.as_deref())?;
        if let Some(path) = data_file {
            config.data_file = path;
        }
        let store = RecordStore::new(config.data_file.clone());
        Ok(Self { config, store })
    }

    /// Print an entry's definition, plus its example when enabled.
    pub fn print_entry(&self, entry: &Entry) {
        println!("{entry}");
        if self.config.show_examples && entry.has_example() {
            println!("   e.g. {}", entry.example);
        }
    }
}
