use crate::error::{Result, TableError};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

pub const CONFIG_FILENAME: &str = "tabula.json";
const DEFAULT_PAGE_SIZE: usize = 5;
const DEFAULT_COMPACT_BELOW: u16 = 80;

/// Configuration for the table, stored as `tabula.json`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TableConfig {
    /// Rows per page
    #[serde(default = "default_page_size")]
    pub page_size: usize,

    /// Viewport width (terminal columns) under which the compact layout is used
    #[serde(default = "default_compact_below")]
    pub compact_below: u16,

    /// Start with the sample rows
    #[serde(default = "default_seed_sample")]
    pub seed_sample: bool,
}

fn default_page_size() -> usize {
    DEFAULT_PAGE_SIZE
}

fn default_compact_below() -> u16 {
    DEFAULT_COMPACT_BELOW
}

fn default_seed_sample() -> bool {
    true
}

impl Default for TableConfig {
    fn default() -> Self {
        Self {
            page_size: DEFAULT_PAGE_SIZE,
            compact_below: DEFAULT_COMPACT_BELOW,
            seed_sample: true,
        }
    }
}

impl TableConfig {
    /// Load config from a file, or return defaults if it does not exist
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)?;
        let config: TableConfig = serde_json::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn set_page_size(&mut self, page_size: usize) -> Result<()> {
        if page_size == 0 {
            return Err(TableError::Config("page_size must be at least 1".into()));
        }
        self.page_size = page_size;
        Ok(())
    }

    fn validate(&self) -> Result<()> {
        if self.page_size == 0 {
            return Err(TableError::Config("page_size must be at least 1".into()));
        }
        Ok(())
    }
}
