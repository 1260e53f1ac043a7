//! # API Facade
//!
//! [`TableApi`] is the single entry point a presentation layer talks to. It
//! owns the store and the edit session and dispatches to `commands/*.rs`.
//!
//! The facade holds no business logic and performs no I/O. It returns data
//! (`CmdResult`, [`Page`], records), never strings meant for a terminal.
//!
//! ## Generic Over DataStore
//!
//! `TableApi<S: DataStore>` works with any backend; the shell and the tests
//! use `TableApi<InMemoryStore>`.

use crate::commands;
use crate::error::{Result, ValidationErrors};
use crate::model::{Draft, Field, Record, RecordFields, RecordId};
use crate::session::{EditSession, Mode};
use crate::store::DataStore;

pub struct TableApi<S: DataStore> {
    store: S,
    session: EditSession,
}

impl<S: DataStore> TableApi<S> {
    pub fn new(store: S) -> Self {
        Self {
            store,
            session: EditSession::new(),
        }
    }

    /// Inserts the given rows, e.g. the sample data, through the normal create path.
    pub fn seed(&mut self, rows: &[RecordFields]) -> Result<()> {
        for fields in rows {
            commands::create::run(&mut self.store, &Draft::from(fields))?;
        }
        Ok(())
    }

    // --- records ---

    pub fn list(&self) -> Result<Vec<Record>> {
        Ok(commands::list::run(&self.store)?.listed_records)
    }

    pub fn get(&self, id: RecordId) -> Result<Record> {
        self.store.get(id)
    }

    pub fn create(&mut self, draft: &Draft) -> Result<commands::CmdResult> {
        commands::create::run(&mut self.store, draft)
    }

    pub fn update(&mut self, id: RecordId, draft: &Draft) -> Result<commands::CmdResult> {
        commands::update::run(&mut self.store, id, draft)
    }

    pub fn delete(&mut self, id: RecordId) -> Result<commands::CmdResult> {
        commands::delete::run(&mut self.store, id)
    }

    pub fn sort_by(&self, records: &[Record], key: SortKey) -> Vec<Record> {
        commands::sort::sort_by(records, key)
    }

    pub fn paginate<'a>(
        &self,
        view: &'a [Record],
        page_size: usize,
        page_index: usize,
    ) -> &'a [Record] {
        commands::page::paginate(view, page_size, page_index)
    }

    pub fn filter(&self, records: &[Record], query: &str) -> Vec<Record> {
        commands::search::filter(records, query)
    }

    pub fn query(&self, query: &Query) -> Result<Page> {
        commands::query::run(&self.store, query)
    }

    // --- edit session ---

    pub fn open(&mut self, target: Option<RecordId>) -> Result<()> {
        self.session.open(&self.store, target)
    }

    pub fn edit(&mut self, field: Field, value: impl Into<String>) -> Result<()> {
        self.session.edit(field, value)
    }

    pub fn commit(&mut self) -> Result<commands::CmdResult> {
        self.session.commit(&mut self.store)
    }

    pub fn cancel(&mut self) {
        self.session.cancel()
    }

    pub fn session(&self) -> &EditSession {
        &self.session
    }

    pub fn mode(&self) -> Mode {
        self.session.mode()
    }

    pub fn draft(&self) -> &Draft {
        self.session.draft()
    }

    pub fn errors(&self) -> &ValidationErrors {
        self.session.errors()
    }
}

pub use commands::query::{Page, Query};
pub use commands::sort::{SortKey, SortOrder};
pub use commands::{sample_fields, CmdMessage, CmdResult, MessageLevel};
